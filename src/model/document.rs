//! Document model - the row store and associated file state.
//!
//! The document exclusively owns its rows. All mutation happens through the
//! methods here so the unsaved-change counter stays accurate and every row's
//! rendering is refreshed in the same call that edits it. Rows are addressed
//! by index only; holding a row reference across `insert_row`/`delete_row`
//! is not supported.
//!
//! Out-of-range row or column operations are deliberately silent no-ops
//! rather than errors.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::row::Row;

/// The text buffer: an ordered sequence of rows plus file metadata.
#[derive(Debug, Clone, Default)]
pub struct Document {
    rows: Vec<Row>,
    /// Count of unsaved mutations since the last load or save. Any nonzero
    /// value means "modified".
    dirty: u64,
    /// Path the document saves to; `None` until the first save-as.
    pub filename: Option<PathBuf>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from initial text, one row per line. The result is
    /// not marked modified.
    pub fn with_text(text: &str) -> Self {
        let mut doc = Self::new();
        for line in text.lines() {
            doc.insert_row(doc.num_rows(), line.to_string());
        }
        doc.dirty = 0;
        doc
    }

    /// Load a document from a file, stripping line terminators.
    ///
    /// Failure here is fatal for the caller: the editor refuses to start on
    /// an unreadable path rather than silently editing an empty buffer.
    pub fn open(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let mut doc = Self::with_text(&text);
        doc.filename = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// True when the document has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `at`, if in range.
    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    /// True when there are unsaved mutations.
    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// File name shown in the status bar.
    pub fn display_name(&self) -> String {
        self.filename
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "[No Name]".to_string())
    }

    // =========================================================================
    // Row store operations
    // =========================================================================

    /// Insert a new row at `at`; silently ignored when `at` is past the end.
    pub fn insert_row(&mut self, at: usize, text: String) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(text));
        self.dirty += 1;
    }

    /// Remove the row at `at`; silently ignored when out of range.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty += 1;
    }

    /// Insert one character into row `y` at column `x` (clamped to the row
    /// end); silently ignored when `y` is out of range.
    pub fn insert_char(&mut self, y: usize, x: usize, ch: char) {
        let Some(row) = self.rows.get_mut(y) else {
            return;
        };
        row.insert_char(x, ch);
        self.dirty += 1;
    }

    /// Delete the character at column `x` of row `y`; silently ignored when
    /// either index is out of range.
    pub fn delete_char(&mut self, y: usize, x: usize) {
        let Some(row) = self.rows.get_mut(y) else {
            return;
        };
        if x >= row.len() {
            return;
        }
        row.delete_char(x);
        self.dirty += 1;
    }

    /// Append raw text to the end of row `y`; silently ignored when out of
    /// range.
    pub fn append_text(&mut self, y: usize, text: &str) {
        let Some(row) = self.rows.get_mut(y) else {
            return;
        };
        row.append_str(text);
        self.dirty += 1;
    }

    /// Split row `y` at column `x`: content before `x` stays, the rest
    /// becomes a new row below.
    pub fn split_row(&mut self, y: usize, x: usize) {
        let Some(row) = self.rows.get_mut(y) else {
            return;
        };
        let tail = row.split_off(x.min(row.len()));
        self.insert_row(y + 1, tail);
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Serialize all rows into one buffer, each row followed by a newline.
    pub fn to_text(&self) -> String {
        let total: usize = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut buf = String::with_capacity(total);
        for row in &self.rows {
            buf.push_str(row.chars());
            buf.push('\n');
        }
        buf
    }

    /// Write the document to its associated path, truncating to the exact
    /// serialized length. Returns the number of bytes written.
    ///
    /// On failure the in-memory state is untouched (the dirty counter keeps
    /// its value) so the user can retry.
    pub fn save(&mut self) -> io::Result<usize> {
        let Some(path) = self.filename.as_ref() else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no file name set",
            ));
        };
        let text = self.to_text();
        fs::write(path, &text)?;
        self.dirty = 0;
        Ok(text.len())
    }
}
