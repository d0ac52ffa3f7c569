//! Section lookup for Markdown documents.
//!
//! A section is the body governed by an ATX heading (`#`, `##`, ...). It starts on the line
//! after the heading and runs until the next heading of the same or a shallower level, or to
//! the end of the document. Lookups always resolve to the first heading whose title matches.

use crate::frontmatter::split_lines;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+(.+)$").expect("heading pattern is valid"));

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+").expect("heading marker pattern is valid"));

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Heading and line span of one document section.
pub struct Section {
    /// Heading text without markup symbols.
    pub title: String,
    /// Number of `#` characters in the heading.
    pub level: usize,
    /// Line holding the heading itself.
    pub heading_line: usize,
    /// First line of section content (after the heading).
    pub line_start: usize,
    /// Line where the next section begins or the document ends (exclusive).
    pub line_end: usize,
}

impl Section {
    #[must_use]
    /// True when the next heading follows immediately and the body has no lines.
    pub fn is_empty(&self) -> bool {
        self.line_start >= self.line_end
    }
}

#[must_use]
/// Level and trimmed title of a heading line, or `None` for any other line.
pub fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let title = caps.get(2)?.as_str().trim();
    Some((level, title))
}

fn heading_level(line: &str) -> Option<usize> {
    HEADING_MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().len())
}

#[must_use]
/// Locate the first section titled `name` within `lines`.
pub fn find_section(lines: &[&str], name: &str) -> Option<Section> {
    let (heading_line, level, title) = lines.iter().enumerate().find_map(|(i, line)| {
        parse_heading(line)
            .filter(|(_, title)| *title == name)
            .map(|(level, title)| (i, level, title))
    })?;

    let line_end = lines
        .iter()
        .enumerate()
        .skip(heading_line + 1)
        .find(|(_, line)| heading_level(line).is_some_and(|l| l <= level))
        .map_or(lines.len(), |(i, _)| i);

    log::debug!("section `{name}` spans lines {}..{line_end}", heading_line + 1);

    Some(Section {
        title: title.to_string(),
        level,
        heading_line,
        line_start: heading_line + 1,
        line_end,
    })
}

#[must_use]
/// Body lines of `section` with leading and trailing blank lines removed, joined by `\n`.
pub fn section_body(lines: &[&str], section: &Section) -> String {
    let end = section.line_end.min(lines.len());
    let start = section.line_start.min(end);
    let body = &lines[start..end];

    let first = body.iter().position(|l| !l.trim().is_empty());
    let last = body.iter().rposition(|l| !l.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => body[first..=last].join("\n"),
        _ => String::new(),
    }
}

/// A document split into lines once so repeated section lookups do not re-read it.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    #[must_use]
    /// Split `text` into lines.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: split_lines(text),
        }
    }

    #[must_use]
    /// All lines of the document.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    #[must_use]
    /// Span of the first section titled `name`.
    pub fn find_section(&self, name: &str) -> Option<Section> {
        find_section(&self.lines, name)
    }

    #[must_use]
    /// Trimmed body of the first section titled `name`, or `None` if no heading matches.
    pub fn extract_section_content(&self, name: &str) -> Option<String> {
        self.find_section(name)
            .map(|section| section_body(&self.lines, &section))
    }
}

#[must_use]
/// Trimmed body of the first section titled `name` in `text`.
pub fn extract_section_content(text: &str, name: &str) -> Option<String> {
    Document::new(text).extract_section_content(name)
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
