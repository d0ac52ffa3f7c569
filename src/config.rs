//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find an outline-converter.toml, and if present we load settings from
//! there. This provides the per-level templates, replacement rules, auto-header options and the
//! export destination. Missing keys fall back to the defaults below.

use crate::auto_header::HeaderStart;
use crate::error::{Error, Result};
use crate::export::ExportMode;
use crate::replace::ReplacementRule;
use crate::template::{resolve_placeholders, Template};
use facet::Facet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// File looked up in the working directory when no explicit path is given.
pub const CONFIG_FILE: &str = "outline-converter.toml";

/// Number of template and replacement slots.
pub const MAX_SLOTS: usize = 5;

fn default_templates() -> Vec<Template> {
    vec![
        Template::new("\\n\\n## ", ""),
        Template::new("\\n\\n### ", "\\n\\n"),
        Template::new("", " "),
        Template::default(),
        Template::default(),
    ]
}

fn default_replacements() -> Vec<ReplacementRule> {
    vec![ReplacementRule::default(); MAX_SLOTS]
}

/// Contents of `path`, or empty text when it does not exist.
fn read_if_present(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from outline-converter.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "copy".to_string())]
    /// Export destination: `copy`, `cursor`, `bottom` or `section`.
    pub export_mode: String,
    #[facet(default = "Output".to_string())]
    /// Heading targeted by the `section` export mode.
    pub section_name: String,
    #[facet(default = 3)]
    /// Number of templates in use (1 to 5).
    pub active_levels: usize,
    #[facet(default = 1)]
    /// Number of replacement rules in use (0 to 5).
    pub active_replacements: usize,
    #[facet(default = "h2".to_string())]
    /// Heading depth of top level items in auto-header mode: `h1` or `h2`.
    pub start_header: String,
    #[facet(default = "\\n".to_string())]
    /// Text placed between sibling items in auto-header mode. `\n` is read as a line break.
    pub joiner: String,
    #[facet(default = 4)]
    /// Spaces per indent level for space-indented outlines.
    pub tab_size: usize,
    #[facet(default)]
    /// List items starting with this token are dropped before conversion.
    pub comment_marker: Option<String>,
    #[facet(default = default_templates())]
    /// Per-level templates, level 1 first.
    pub templates: Vec<Template>,
    #[facet(default = default_replacements())]
    /// Replacement rules, applied first to last.
    pub replacements: Vec<ReplacementRule>,
}

impl Config {
    /// Load configuration from `path`, or from outline-converter.toml if present.
    ///
    /// A missing default file yields the built-in defaults; an explicit path must exist. A
    /// default file that exists but cannot be read is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let contents = match path {
            Some(path) => fs::read_to_string(path)?,
            None => read_if_present(Path::new(CONFIG_FILE))?,
        };
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid configuration.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config = facet_toml::from_str::<Self>(contents)
            .map_err(|e| Error::Config(e.to_string()))?;
        log::debug!(
            "loaded config: {} level(s), {} replacement(s), export via {}",
            config.active_levels,
            config.active_replacements,
            config.export_mode
        );
        Ok(config)
    }

    #[must_use]
    /// Templates for the active levels.
    pub fn active_templates(&self) -> &[Template] {
        let n = self.active_levels.clamp(1, MAX_SLOTS).min(self.templates.len());
        &self.templates[..n]
    }

    #[must_use]
    /// Replacement rules in use, in slot order.
    pub fn active_rules(&self) -> &[ReplacementRule] {
        let n = self
            .active_replacements
            .min(MAX_SLOTS)
            .min(self.replacements.len());
        &self.replacements[..n]
    }

    /// Parsed export destination.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unknown mode.
    pub fn export_mode(&self) -> Result<ExportMode> {
        self.export_mode.parse()
    }

    /// Parsed auto-header starting depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for anything other than `h1` or `h2`.
    pub fn header_start(&self) -> Result<HeaderStart> {
        self.start_header.parse()
    }

    #[must_use]
    /// Sibling joiner with `\n` escapes resolved.
    pub fn joiner(&self) -> String {
        resolve_placeholders(&self.joiner)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
