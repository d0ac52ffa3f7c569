//! Templated transform: wrap each list item in the before/after text configured for its level.

use crate::indent::item_text;
use facet::Facet;

#[derive(Facet, Clone, Debug, Default, PartialEq, Eq)]
/// Text placed around every item of one indent level.
pub struct Template {
    #[facet(default)]
    /// Inserted before the item text. `\n` is read as a line break.
    pub before: String,
    #[facet(default)]
    /// Inserted after the item text. `\n` is read as a line break.
    pub after: String,
    #[facet(default)]
    /// Drop the item text and keep only the surrounding template text.
    pub ignore: bool,
}

impl Template {
    #[must_use]
    /// Build a template from raw (unescaped) before and after text.
    pub fn new(before: &str, after: &str) -> Self {
        Self {
            before: before.to_string(),
            after: after.to_string(),
            ignore: false,
        }
    }

    fn render(&self, before: &str, after: &str, text: &str) -> String {
        if self.ignore {
            format!("{before}{after}")
        } else {
            format!("{before}{text}{after}")
        }
    }
}

#[must_use]
/// Turn the two-character escape `\n` into a real line break.
pub fn resolve_placeholders(text: &str) -> String {
    text.replace("\\n", "\n")
}

#[must_use]
/// Apply `templates[level - 1]` to every list item and concatenate the results.
///
/// Level 0 lines are skipped, as are items deeper than the number of templates supplied.
/// Nothing is inserted between fragments; separators come from the templates themselves.
pub fn templated_transform(lines: &[&str], levels: &[usize], templates: &[Template]) -> String {
    let resolved: Vec<(String, String)> = templates
        .iter()
        .map(|t| (resolve_placeholders(&t.before), resolve_placeholders(&t.after)))
        .collect();

    let mut out = String::new();
    for (line, &level) in lines.iter().zip(levels) {
        if level == 0 || level > templates.len() {
            continue;
        }
        let (before, after) = &resolved[level - 1];
        out.push_str(&templates[level - 1].render(before, after, item_text(line)));
    }
    out
}

#[cfg(test)]
#[path = "tests/template.rs"]
mod tests;
