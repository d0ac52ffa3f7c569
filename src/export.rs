//! Export modes: where the converted text goes once the pipeline has produced it.

use crate::edit_plan::{plan_append_bottom, plan_insert, plan_section_write, Edit, Position};
use crate::error::{Error, Result};
use crate::host::{Host, Selection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Destination of a conversion result.
pub enum ExportMode {
    #[default]
    /// Put the result on the clipboard.
    Copy,
    /// Insert at the cursor, replacing the selection if there is one.
    Cursor,
    /// Append to the end of the document.
    Bottom,
    /// Replace the body of a named section, creating it if needed.
    Section,
}

impl FromStr for ExportMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "copy" => Ok(Self::Copy),
            "cursor" => Ok(Self::Cursor),
            "bottom" => Ok(Self::Bottom),
            "section" => Ok(Self::Section),
            other => Err(Error::Config(format!(
                "unknown export mode `{other}` (expected copy, cursor, bottom or section)"
            ))),
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Copy => "copy",
            Self::Cursor => "cursor",
            Self::Bottom => "bottom",
            Self::Section => "section",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
/// A planned export, ready to hand to a [`Host`].
pub enum Export {
    /// Text for the clipboard.
    Clipboard {
        /// Converted text.
        text: String,
    },
    /// A modification of the document.
    Document {
        /// The planned edit.
        edit: Edit,
    },
}

#[must_use]
/// Decide where `result` goes.
///
/// `document` is the full text of the target document; it is only consulted for
/// [`ExportMode::Section`].
pub fn plan_export(
    mode: ExportMode,
    document: &str,
    selection: Option<&Selection>,
    cursor: Position,
    section_name: &str,
    result: &str,
) -> Export {
    log::info!("exporting {} byte(s) via {mode}", result.len());
    let edit = match mode {
        ExportMode::Copy => {
            return Export::Clipboard {
                text: result.to_string(),
            }
        }
        ExportMode::Cursor => match selection {
            Some(selection) => plan_insert(selection.from, selection.to, result),
            None => plan_insert(cursor, cursor, result),
        },
        ExportMode::Bottom => plan_append_bottom(result),
        ExportMode::Section => plan_section_write(document, section_name, result),
    };
    Export::Document { edit }
}

/// Carry out a planned export on `host`.
///
/// # Errors
///
/// Propagates host failures.
pub fn apply_export<H: Host + ?Sized>(host: &mut H, export: &Export) -> Result<()> {
    match export {
        Export::Clipboard { text } => host.copy_to_clipboard(text),
        Export::Document { edit } => host.apply_edit(edit),
    }
}

#[cfg(test)]
#[path = "tests/export.rs"]
mod tests;
