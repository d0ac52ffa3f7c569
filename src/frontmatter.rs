//! Frontmatter detection and line splitting.
//!
//! A document may open with a `---` delimited metadata block. It is never part of the outline,
//! so the pipeline records how many lines it spans and the indent classifier pins them to level 0.

use regex::Regex;
use std::sync::LazyLock;

static FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A---\r?\n[\s\S]*?\r?\n---(?:\r?\n|\z)").expect("frontmatter pattern is valid")
});

/// A document split into its metadata block and the remaining body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// The delimited block including its closing line terminator, or `""` if absent.
    pub frontmatter: &'a str,
    /// Everything after the block.
    pub content: &'a str,
}

impl Frontmatter<'_> {
    #[must_use]
    /// Number of document lines occupied by the metadata block.
    pub fn line_count(&self) -> usize {
        if self.frontmatter.is_empty() {
            return 0;
        }
        let breaks = self.frontmatter.matches('\n').count();
        if self.frontmatter.ends_with('\n') {
            breaks
        } else {
            // closing delimiter sits on the last line of the file
            breaks + 1
        }
    }
}

#[must_use]
/// Split a document into frontmatter and content.
///
/// The block must start at the first byte with a `---` line and be closed by another `---`
/// line followed by a line terminator or the end of input. Anything less is treated as plain
/// content and `frontmatter` is empty.
pub fn parse_frontmatter(text: &str) -> Frontmatter<'_> {
    match FRONTMATTER.find(text) {
        Some(m) => Frontmatter {
            frontmatter: m.as_str(),
            content: &text[m.end()..],
        },
        None => Frontmatter {
            frontmatter: "",
            content: text,
        },
    }
}

#[must_use]
/// Split text on `\n` or `\r\n`, keeping a trailing empty line when the text ends with a break.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// The lines of a document together with the frontmatter boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline<'a> {
    /// Every line of the document, frontmatter included.
    pub lines: Vec<&'a str>,
    /// Count of leading lines that belong to the frontmatter.
    pub frontmatter_lines: usize,
}

impl<'a> Outline<'a> {
    #[must_use]
    /// Split `text` into lines and record where its frontmatter ends.
    pub fn parse(text: &'a str) -> Self {
        let frontmatter_lines = parse_frontmatter(text).line_count();
        Self {
            lines: split_lines(text),
            frontmatter_lines,
        }
    }
}

#[cfg(test)]
#[path = "tests/frontmatter.rs"]
mod tests;
