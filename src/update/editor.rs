//! Editor update functions for cursor movement and page navigation.

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::AppModel;

/// Handle editor messages (cursor movement, page navigation)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => move_cursor(model, direction),

        EditorMsg::MoveCursorLineStart => {
            model.editor.cursor.x = 0;
        }

        EditorMsg::MoveCursorLineEnd => {
            model.editor.cursor.x = model.editor.current_row_len(&model.document);
        }

        EditorMsg::PageUp => {
            // Jump to the top of the viewport, then step up a full page so
            // every step goes through the normal clamping rules.
            model.editor.cursor.y = model.editor.viewport.row_offset;
            for _ in 0..model.editor.viewport.screen_rows {
                move_cursor(model, Direction::Up);
            }
        }

        EditorMsg::PageDown => {
            let vp = &model.editor.viewport;
            model.editor.cursor.y =
                (vp.row_offset + vp.screen_rows.saturating_sub(1)).min(model.document.num_rows());
            for _ in 0..model.editor.viewport.screen_rows {
                move_cursor(model, Direction::Down);
            }
        }
    }
    None
}

/// Single-step cursor movement with edge wrapping.
///
/// Left at column 0 wraps to the end of the previous row; Right at the end
/// of a row wraps to the start of the next. After any move the column is
/// clamped to the target row's length (0 on the past-end sentinel row).
pub(crate) fn move_cursor(model: &mut AppModel, direction: Direction) {
    let doc = &model.document;
    let cursor = &mut model.editor.cursor;

    match direction {
        Direction::Left => {
            if cursor.x != 0 {
                cursor.x -= 1;
            } else if cursor.y > 0 {
                cursor.y -= 1;
                cursor.x = doc.row(cursor.y).map_or(0, |row| row.len());
            }
        }
        Direction::Right => {
            if let Some(row) = doc.row(cursor.y) {
                if cursor.x < row.len() {
                    cursor.x += 1;
                } else {
                    cursor.y += 1;
                    cursor.x = 0;
                }
            }
        }
        Direction::Up => {
            if cursor.y != 0 {
                cursor.y -= 1;
            }
        }
        Direction::Down => {
            if cursor.y < doc.num_rows() {
                cursor.y += 1;
            }
        }
    }

    let row_len = doc.row(cursor.y).map_or(0, |row| row.len());
    if cursor.x > row_len {
        cursor.x = row_len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::model::{Cursor, Document};

    fn model_with(text: &str, y: usize, x: usize) -> AppModel {
        let mut model = AppModel::new(10, 80, EditorConfig::default());
        model.document = Document::with_text(text);
        model.editor.cursor = Cursor::at(y, x);
        model
    }

    #[test]
    fn test_left_wraps_to_previous_row_end() {
        let mut model = model_with("abc\ndef\n", 1, 0);
        move_cursor(&mut model, Direction::Left);
        assert_eq!(model.editor.cursor, Cursor::at(0, 3));
    }

    #[test]
    fn test_left_at_document_start_is_noop() {
        let mut model = model_with("abc\n", 0, 0);
        move_cursor(&mut model, Direction::Left);
        assert_eq!(model.editor.cursor, Cursor::at(0, 0));
    }

    #[test]
    fn test_right_wraps_to_next_row_start() {
        let mut model = model_with("abc\ndef\n", 0, 3);
        move_cursor(&mut model, Direction::Right);
        assert_eq!(model.editor.cursor, Cursor::at(1, 0));
    }

    #[test]
    fn test_right_on_sentinel_row_is_noop() {
        let mut model = model_with("abc\n", 1, 0);
        move_cursor(&mut model, Direction::Right);
        assert_eq!(model.editor.cursor, Cursor::at(1, 0));
    }

    #[test]
    fn test_vertical_move_clamps_column_to_shorter_row() {
        let mut model = model_with("long line\nhi\n", 0, 8);
        move_cursor(&mut model, Direction::Down);
        assert_eq!(model.editor.cursor, Cursor::at(1, 2));
    }

    #[test]
    fn test_down_stops_at_sentinel_row() {
        let mut model = model_with("abc\n", 1, 0);
        move_cursor(&mut model, Direction::Down);
        assert_eq!(model.editor.cursor.y, 1);
    }

    #[test]
    fn test_home_and_end() {
        let mut model = model_with("hello\n", 0, 3);
        update_editor(&mut model, EditorMsg::MoveCursorLineEnd);
        assert_eq!(model.editor.cursor.x, 5);
        update_editor(&mut model, EditorMsg::MoveCursorLineStart);
        assert_eq!(model.editor.cursor.x, 0);
    }

    #[test]
    fn test_end_on_sentinel_row_stays_at_zero() {
        let mut model = model_with("hello\n", 1, 0);
        update_editor(&mut model, EditorMsg::MoveCursorLineEnd);
        assert_eq!(model.editor.cursor.x, 0);
    }

    #[test]
    fn test_page_down_advances_a_screenful() {
        let text = "line\n".repeat(50);
        let mut model = model_with(&text, 0, 0);
        update_editor(&mut model, EditorMsg::PageDown);
        // Cursor jumps to the bottom of the viewport (row 9), then steps
        // down 10 more rows.
        assert_eq!(model.editor.cursor.y, 19);
    }

    #[test]
    fn test_page_up_from_scrolled_viewport() {
        let text = "line\n".repeat(50);
        let mut model = model_with(&text, 30, 0);
        model.editor.viewport.row_offset = 25;
        update_editor(&mut model, EditorMsg::PageUp);
        // Cursor jumps to the top of the viewport (25), then up 10.
        assert_eq!(model.editor.cursor.y, 15);
    }

    #[test]
    fn test_page_down_clamps_at_document_end() {
        let mut model = model_with("a\nb\n", 0, 0);
        update_editor(&mut model, EditorMsg::PageDown);
        assert_eq!(model.editor.cursor.y, 2);
    }
}
