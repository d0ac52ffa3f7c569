//! The conversion pipeline tying every stage together.
//!
//! A run reads the document once, converts it (or the current selection), and either hands
//! the planned export back for inspection or applies it through the host. Stages run strictly
//! in order and nothing is written unless every stage succeeded.

use crate::auto_header::auto_header_transform;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::export::{apply_export, plan_export, Export};
use crate::frontmatter::Outline;
use crate::host::Host;
use crate::indent::{calculate_indent_levels, filter_ignored_lines, mark_comments};
use crate::links::resolve_section_links;
use crate::replace::apply_replacements;
use crate::section::Document;
use crate::template::templated_transform;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Transform engine used for a run.
pub enum Strategy {
    #[default]
    /// Per-level before/after templates.
    Templated,
    /// Headings inferred from each item's children and grandchildren.
    AutoHeader,
}

/// Runs conversions with one configuration.
pub struct Converter<'c> {
    config: &'c Config,
}

impl<'c> Converter<'c> {
    #[must_use]
    /// Converter driven by `config`.
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Convert `source` and resolve its section links against `document`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] for an invalid replacement rule and [`Error::Config`] for an
    /// unknown start header.
    pub fn convert(
        &self,
        source: &str,
        document: &str,
        strategy: Strategy,
        tab_size: usize,
    ) -> Result<String> {
        let outline = Outline::parse(source);
        let mut levels =
            calculate_indent_levels(&outline.lines, outline.frontmatter_lines, tab_size);
        if let Some(marker) = &self.config.comment_marker {
            mark_comments(&outline.lines, &mut levels, marker);
        }
        let (lines, levels) = filter_ignored_lines(&outline.lines, &levels);
        log::debug!(
            "{} line(s) after filtering, {} frontmatter line(s) skipped",
            lines.len(),
            outline.frontmatter_lines
        );

        let transformed = match strategy {
            Strategy::Templated => {
                templated_transform(&lines, &levels, self.config.active_templates())
            }
            Strategy::AutoHeader => auto_header_transform(
                &lines,
                &levels,
                self.config.header_start()?,
                &self.config.joiner(),
            ),
        };

        let replaced = apply_replacements(&transformed, self.config.active_rules())?;
        Ok(resolve_section_links(&replaced, &Document::new(document)))
    }

    /// Read from `host`, convert, and plan the export without touching the document.
    ///
    /// The current selection is converted when there is one; otherwise the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveDocument`] when the host has nothing to convert, and any
    /// error from [`Converter::convert`] or the configured export mode.
    pub fn plan<H: Host + ?Sized>(&self, host: &mut H, strategy: Strategy) -> Result<Export> {
        let mode = self.config.export_mode()?;
        let document = host.read_document_text()?.ok_or(Error::NoActiveDocument)?;
        let selection = host.selection().filter(|s| !s.text.is_empty());
        let source = selection.as_ref().map_or(document.as_str(), |s| s.text.as_str());

        log::info!("converting with {strategy:?} strategy");
        let result = self.convert(source, &document, strategy, host.tab_size())?;

        Ok(plan_export(
            mode,
            &document,
            selection.as_ref(),
            host.cursor(),
            &self.config.section_name,
            &result,
        ))
    }

    /// Convert and apply the export through `host`.
    ///
    /// # Errors
    ///
    /// Everything [`Converter::plan`] can return, plus host write failures.
    pub fn run<H: Host + ?Sized>(&self, host: &mut H, strategy: Strategy) -> Result<Export> {
        let export = self.plan(host, strategy)?;
        apply_export(host, &export)?;
        Ok(export)
    }
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
