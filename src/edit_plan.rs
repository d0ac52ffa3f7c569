//! Write plans: where converted text lands in the target document.
//!
//! Planning is pure. A plan records the exact line/column span to replace (or the text to
//! append) together with the cursor position the host should move to afterwards, so it can be
//! printed for review, applied to an in-memory string, or written back to a file.

use crate::error::Result;
use crate::frontmatter::split_lines;
use crate::section::find_section;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
/// Zero-based line and character column in a document.
pub struct Position {
    /// Line index.
    pub line: usize,
    /// Character offset within the line.
    pub ch: usize,
}

impl Position {
    #[must_use]
    /// Position at `line`, column `ch`.
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// One modification of the target document.
pub enum Edit {
    /// Replace the text between two positions.
    Replace {
        /// Start of the replaced span (inclusive).
        from: Position,
        /// End of the replaced span (exclusive). Equal to `from` for a pure insertion.
        to: Position,
        /// Text written into the span.
        text: String,
        /// Where the cursor goes once the edit is applied.
        cursor: Option<Position>,
    },
    /// Add text after the last byte of the document.
    Append {
        /// Text appended verbatim.
        text: String,
        /// Where the cursor goes once the edit is applied.
        cursor: Option<Position>,
    },
}

impl Edit {
    #[must_use]
    /// Cursor position requested by this edit.
    pub fn cursor(&self) -> Option<Position> {
        match self {
            Self::Replace { cursor, .. } | Self::Append { cursor, .. } => *cursor,
        }
    }

    #[must_use]
    /// Apply the edit to `text` and return the new document.
    pub fn apply_to(&self, text: &str) -> String {
        match self {
            Self::Replace {
                from,
                to,
                text: replacement,
                ..
            } => {
                let start = byte_offset(text, *from);
                let end = byte_offset(text, *to).max(start);
                let mut out = String::with_capacity(text.len() + replacement.len());
                out.push_str(&text[..start]);
                out.push_str(replacement);
                out.push_str(&text[end..]);
                out
            }
            Self::Append {
                text: appended, ..
            } => format!("{text}{appended}"),
        }
    }
}

/// Byte offset of `pos` in `text`, clamped to the end of its line (before any `\r`).
#[must_use]
pub fn byte_offset(text: &str, pos: Position) -> usize {
    let mut line_start = 0;
    for _ in 0..pos.line {
        match text[line_start..].find('\n') {
            Some(i) => line_start += i + 1,
            None => return text.len(),
        }
    }
    let rest = &text[line_start..];
    let line_len = rest.find('\n').unwrap_or(rest.len());
    let line = rest[..line_len].strip_suffix('\r').unwrap_or(&rest[..line_len]);
    let col = line
        .char_indices()
        .nth(pos.ch)
        .map_or(line.len(), |(i, _)| i);
    line_start + col
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Line break used by `document`: `\r\n` if its first break is one, otherwise `\n`.
#[must_use]
pub fn line_ending(document: &str) -> &'static str {
    match document.find('\n') {
        Some(i) if document[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

#[must_use]
/// Plan writing `content` into the section titled `name`.
///
/// An existing section has its body replaced, up to the next heading of the same or a
/// shallower level. When that heading follows immediately the span collapses to an insertion
/// point in front of it. A missing section is created as a new `# name` heading at the end of
/// the document.
pub fn plan_section_write(document: &str, name: &str, content: &str) -> Edit {
    let lines = split_lines(document);
    let eol = line_ending(document);

    let Some(section) = find_section(&lines, name) else {
        return plan_new_section(document, &lines, name, content, eol);
    };

    let start = section.line_start;
    if start >= lines.len() {
        // heading is the last line and has no terminator
        let at = Position::new(section.heading_line, char_len(lines[section.heading_line]));
        return Edit::Replace {
            from: at,
            to: at,
            text: format!("{eol}{content}"),
            cursor: Some(Position::new(start, 0)),
        };
    }

    let from = Position::new(start, 0);
    if section.is_empty() {
        // keep the following heading on its own line
        let text = if content.is_empty() {
            String::new()
        } else {
            format!("{content}{eol}")
        };
        return Edit::Replace {
            from,
            to: from,
            text,
            cursor: Some(from),
        };
    }

    let last = section.line_end - 1;
    Edit::Replace {
        from,
        to: Position::new(last, char_len(lines[last])),
        text: content.to_string(),
        cursor: Some(from),
    }
}

fn plan_new_section(
    document: &str,
    lines: &[&str],
    name: &str,
    content: &str,
    eol: &str,
) -> Edit {
    let (prefix, heading_line) = if document.is_empty() {
        ("", 0)
    } else if document.ends_with('\n') {
        ("", lines.len() - 1)
    } else {
        (eol, lines.len())
    };
    log::info!("section `{name}` not found; appending it at line {heading_line}");
    Edit::Append {
        text: format!("{prefix}# {name}{eol}{content}{eol}"),
        cursor: Some(Position::new(heading_line, 0)),
    }
}

#[must_use]
/// Plan appending `content` below the last line of the document.
pub fn plan_append_bottom(content: &str) -> Edit {
    Edit::Append {
        text: format!("\n{content}"),
        cursor: None,
    }
}

#[must_use]
/// Plan inserting `content` at `cursor`, or over the `from..to` selection when one is given.
pub fn plan_insert(from: Position, to: Position, content: &str) -> Edit {
    Edit::Replace {
        from,
        to,
        text: content.to_string(),
        cursor: None,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Serialisable set of edits for one file, applied in order.
pub struct EditPlan {
    /// Target file path for these modifications.
    pub file_name: PathBuf,
    /// Modifications, each computed against the result of the previous one.
    pub edits: Vec<Edit>,
}

impl EditPlan {
    #[must_use]
    /// Plan with a single edit against `file_name`.
    pub fn single(file_name: &Path, edit: Edit) -> Self {
        Self {
            file_name: file_name.to_path_buf(),
            edits: vec![edit],
        }
    }

    #[must_use]
    /// Apply every edit to `text` in order.
    pub fn apply_to(&self, text: &str) -> String {
        self.edits
            .iter()
            .fold(text.to_string(), |acc, edit| edit.apply_to(&acc))
    }

    /// Read the target file, apply every edit and write it back.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn apply(&self) -> Result<()> {
        let content = fs::read_to_string(&self.file_name)?;
        fs::write(&self.file_name, self.apply_to(&content))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
