//! The host application seen from the conversion core.
//!
//! Reading the document, applying edits, moving the cursor and the clipboard all belong to
//! the host. The core only computes what to do. [`FileHost`] is the host used by the command
//! line: the document is a file on disk and the "clipboard" is an output stream.

use crate::edit_plan::{Edit, EditPlan, Position};
use crate::error::Result;
use crate::indent::DEFAULT_TAB_SIZE;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Text selected in the host editor.
pub struct Selection {
    /// Start of the selection.
    pub from: Position,
    /// End of the selection.
    pub to: Position,
    /// Selected text.
    pub text: String,
}

/// Operations the conversion pipeline needs from its host.
pub trait Host {
    /// Full text of the target document, or `None` when there is no active document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be read.
    fn read_document_text(&mut self) -> Result<Option<String>>;

    /// Current non-empty selection, if any.
    fn selection(&self) -> Option<Selection> {
        None
    }

    /// Current cursor position.
    fn cursor(&self) -> Position {
        Position::default()
    }

    /// Indent width configured in the host editor.
    fn tab_size(&self) -> usize {
        DEFAULT_TAB_SIZE
    }

    /// Replace the text between `from` and `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be modified.
    fn write_replacement(&mut self, from: Position, to: Position, text: &str) -> Result<()>;

    /// Append text to the end of the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be modified.
    fn append_text(&mut self, text: &str) -> Result<()>;

    /// Move the cursor.
    fn set_cursor(&mut self, cursor: Position);

    /// Hand text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable.
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;

    /// Apply a planned edit and move the cursor if it asks for it.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Host::write_replacement`] and [`Host::append_text`].
    fn apply_edit(&mut self, edit: &Edit) -> Result<()> {
        match edit {
            Edit::Replace { from, to, text, .. } => self.write_replacement(*from, *to, text)?,
            Edit::Append { text, .. } => self.append_text(text)?,
        }
        if let Some(cursor) = edit.cursor() {
            self.set_cursor(cursor);
        }
        Ok(())
    }
}

/// A document on disk, with copied text written to `out`.
pub struct FileHost<W: Write> {
    path: PathBuf,
    cursor: Position,
    tab_size: usize,
    out: W,
}

impl<W: Write> FileHost<W> {
    #[must_use]
    /// Host for the file at `path`, copying to `out`.
    pub fn new(path: &Path, out: W) -> Self {
        Self {
            path: path.to_path_buf(),
            cursor: Position::default(),
            tab_size: DEFAULT_TAB_SIZE,
            out,
        }
    }

    #[must_use]
    /// Start with the cursor at `cursor`.
    pub fn with_cursor(mut self, cursor: Position) -> Self {
        self.cursor = cursor;
        self
    }

    #[must_use]
    /// Use `tab_size` spaces per indent level.
    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    #[must_use]
    /// Path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    /// Consume the host and return the copy sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> Host for FileHost<W> {
    fn read_document_text(&mut self) -> Result<Option<String>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn tab_size(&self) -> usize {
        self.tab_size
    }

    fn write_replacement(&mut self, from: Position, to: Position, text: &str) -> Result<()> {
        let edit = Edit::Replace {
            from,
            to,
            text: text.to_string(),
            cursor: None,
        };
        EditPlan::single(&self.path, edit).apply()
    }

    fn append_text(&mut self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(text.as_bytes())?;
        Ok(())
    }

    fn set_cursor(&mut self, cursor: Position) {
        log::debug!("cursor moved to {}:{}", cursor.line, cursor.ch);
        self.cursor = cursor;
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/host.rs"]
mod tests;
