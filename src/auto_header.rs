//! Auto-header transform: infer headings from the shape of the outline.
//!
//! Each item looks one line back and two lines ahead in the level array. The result is a
//! lookahead pattern match, not a tree render, and it is reproduced exactly:
//!
//! | next-next == L+2 | next == L+1 | emitted                                        |
//! |------------------|-------------|------------------------------------------------|
//! | yes              | any         | `\n\n` + `#` x (L+offset) + ` ` + text         |
//! | no               | yes         | `\n\n` + `#` x (L+offset) + ` ` + text + `\n\n` |
//! | no               | no          | leaf, see below                                |
//!
//! A leaf gets a leading `\n\n` when the previous line is deeper than it (returning from a
//! branch) and a trailing joiner when the next line is a sibling and the one after is not
//! deeper. Any other leaf is emitted as bare text.
//!
//! Irregular outlines that jump more than one level at a time fall through to the leaf rules;
//! how they should read is still an open product question.

use crate::error::Error;
use crate::indent::{item_text, IGNORED};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Heading depth given to top level items.
pub enum HeaderStart {
    /// Top level items become `#` headings.
    H1,
    #[default]
    /// Top level items become `##` headings.
    H2,
}

impl HeaderStart {
    #[must_use]
    /// Extra `#` characters added to every generated heading.
    pub fn offset(self) -> usize {
        match self {
            Self::H1 => 0,
            Self::H2 => 1,
        }
    }
}

impl FromStr for HeaderStart {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h1" => Ok(Self::H1),
            "h2" => Ok(Self::H2),
            other => Err(Error::Config(format!(
                "unknown start header `{other}` (expected h1 or h2)"
            ))),
        }
    }
}

impl fmt::Display for HeaderStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::H1 => f.write_str("h1"),
            Self::H2 => f.write_str("h2"),
        }
    }
}

fn heading(level: usize, offset: usize, text: &str) -> String {
    format!("\n\n{} {text}", "#".repeat(level + offset))
}

#[must_use]
/// Convert an outline into Markdown with headings inferred from each item's descendants.
///
/// `joiner` is placed after the last item of a run of siblings, before the next sibling.
pub fn auto_header_transform(
    lines: &[&str],
    levels: &[usize],
    start: HeaderStart,
    joiner: &str,
) -> String {
    let offset = start.offset();
    // lines still marked IGNORED take no part in the lookaround
    let at = |i: usize| levels.get(i).copied().filter(|&l| l != IGNORED).unwrap_or(0);

    let mut out = String::new();
    for (i, (line, &level)) in lines.iter().zip(levels).enumerate() {
        if level == 0 || level == IGNORED {
            continue;
        }
        let text = item_text(line);
        let next = at(i + 1);
        let next2 = at(i + 2);
        let before = if i == 0 { 0 } else { at(i - 1) };

        if level.checked_add(2) == Some(next2) {
            // the child that follows supplies its own break
            out.push_str(&heading(level, offset, text));
        } else if level.checked_add(1) == Some(next) {
            out.push_str(&heading(level, offset, text));
            out.push_str("\n\n");
        } else {
            if level < before {
                out.push_str("\n\n");
            }
            out.push_str(text);
            if next == level && next2 <= level {
                out.push_str(joiner);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/auto_header.rs"]
mod tests;
