//! Editor state - cursor and viewport.

use super::document::Document;

/// Cursor position in the document.
///
/// `y` may equal the row count: that is the past-end sentinel row,
/// representing the position after the last line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Logical column within the row's content (0-indexed).
    pub x: usize,
    /// Logical row (0-indexed).
    pub y: usize,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(y: usize, x: usize) -> Self {
        Self { x, y }
    }
}

/// Which portion of the document is visible.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    /// First visible logical row.
    pub row_offset: usize,
    /// First visible rendered column.
    pub col_offset: usize,
    /// Text area height (terminal rows minus the two bar rows).
    pub screen_rows: usize,
    /// Text area width.
    pub screen_cols: usize,
}

impl Viewport {
    /// Create a viewport with the given text-area dimensions.
    pub fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen_rows,
            screen_cols,
        }
    }
}

/// Cursor plus viewport: everything view-specific about the session.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub cursor: Cursor,
    /// Rendered column of the cursor, recomputed by [`scroll`](Self::scroll)
    /// on every refresh.
    pub rx: usize,
    pub viewport: Viewport,
}

impl EditorState {
    /// Create editor state for a text area of the given size.
    pub fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            cursor: Cursor::default(),
            rx: 0,
            viewport: Viewport::new(screen_rows, screen_cols),
        }
    }

    /// Update the text-area dimensions after a terminal resize.
    pub fn resize(&mut self, screen_rows: usize, screen_cols: usize) {
        self.viewport.screen_rows = screen_rows;
        self.viewport.screen_cols = screen_cols;
    }

    /// Recompute the rendered cursor column and both scroll offsets so the
    /// cursor is inside the visible window. Runs before every frame; calling
    /// it twice without moving the cursor changes nothing.
    ///
    /// The leftward horizontal clamp intentionally snaps `col_offset` to the
    /// cursor's *logical* column while the rightward clamp uses the rendered
    /// column. Asymmetric, but long-standing observable behavior.
    pub fn scroll(&mut self, document: &Document) {
        self.rx = match document.row(self.cursor.y) {
            Some(row) => row.cx_to_rx(self.cursor.x),
            None => 0,
        };

        let vp = &mut self.viewport;
        if self.cursor.y < vp.row_offset {
            vp.row_offset = self.cursor.y;
        }
        if self.cursor.y >= vp.row_offset + vp.screen_rows {
            vp.row_offset = self.cursor.y + 1 - vp.screen_rows;
        }
        if self.rx < vp.col_offset {
            vp.col_offset = self.cursor.x;
        }
        if self.rx >= vp.col_offset + vp.screen_cols {
            vp.col_offset = self.rx + 1 - vp.screen_cols;
        }
    }

    /// Length of the row under the cursor (0 on the past-end sentinel row).
    pub fn current_row_len(&self, document: &Document) -> usize {
        document.row(self.cursor.y).map_or(0, |row| row.len())
    }
}
