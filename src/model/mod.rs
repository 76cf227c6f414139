//! Application model - the complete state of the editor session.
//!
//! One `AppModel` per process, passed by `&mut` into every update and by `&`
//! into the view. No component keeps its own copy of editor state.

pub mod document;
pub mod editor;
pub mod row;
pub mod ui;

pub use document::Document;
pub use editor::{Cursor, EditorState, Viewport};
pub use row::{Row, TAB_STOP};
pub use ui::{StatusMessage, UiState};

use crate::config::EditorConfig;

/// The complete application model.
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    /// The text buffer and its file association.
    pub document: Document,
    /// Cursor, rendered column, and scroll offsets.
    pub editor: EditorState,
    /// Status message and quit confirmation state.
    pub ui: UiState,
    /// Loaded user configuration.
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a model for a text area of the given size.
    pub fn new(screen_rows: usize, screen_cols: usize, config: EditorConfig) -> Self {
        Self {
            document: Document::new(),
            editor: EditorState::new(screen_rows, screen_cols),
            ui: UiState::new(config.quit_confirmations),
            config,
        }
    }

    /// Place the cursor, clamping to the document bounds.
    ///
    /// Used for the `--line`/`--column` startup jump.
    pub fn place_cursor(&mut self, y: usize, x: usize) {
        let y = y.min(self.document.num_rows());
        let x = x.min(self.document.row(y).map_or(0, |row| row.len()));
        self.editor.cursor = Cursor::at(y, x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_cursor_clamps_to_document() {
        let mut model = AppModel::new(24, 80, EditorConfig::default());
        model.document = Document::with_text("short\nlonger line\n");
        model.place_cursor(99, 99);
        assert_eq!(model.editor.cursor.y, 2);
        assert_eq!(model.editor.cursor.x, 0);

        model.place_cursor(1, 99);
        assert_eq!(model.editor.cursor.x, 11);
    }
}
