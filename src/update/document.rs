//! Document update functions for text editing.

use crate::commands::Cmd;
use crate::messages::{Direction, DocumentMsg};
use crate::model::AppModel;

use super::editor::move_cursor;

/// Handle document messages (character insert/delete, newline)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => insert_char(model, ch),
        DocumentMsg::InsertNewline => insert_newline(model),
        DocumentMsg::DeleteBackward => delete_backward(model),
        DocumentMsg::DeleteForward => {
            // Forward delete is "step right, then backspace", so the
            // row-join case falls out of the backspace logic.
            move_cursor(model, Direction::Right);
            delete_backward(model);
        }
    }
    None
}

/// Insert one character at the cursor and advance it.
fn insert_char(model: &mut AppModel, ch: char) {
    let y = model.editor.cursor.y;
    if y == model.document.num_rows() {
        // Typing on the past-end sentinel row materializes it first.
        model.document.insert_row(y, String::new());
    }
    model.document.insert_char(y, model.editor.cursor.x, ch);
    model.editor.cursor.x += 1;
}

/// Split the current row at the cursor (or open an empty row above when the
/// cursor is at column 0); cursor moves to the start of the next row.
fn insert_newline(model: &mut AppModel) {
    let crate::model::Cursor { x, y } = model.editor.cursor;
    if x == 0 {
        model.document.insert_row(y, String::new());
    } else {
        model.document.split_row(y, x);
    }
    model.editor.cursor.y += 1;
    model.editor.cursor.x = 0;
}

/// Backspace: delete the character before the cursor, joining rows when the
/// cursor sits at column 0.
fn delete_backward(model: &mut AppModel) {
    let crate::model::Cursor { x, y } = model.editor.cursor;
    if y == model.document.num_rows() {
        return;
    }
    if x == 0 && y == 0 {
        return;
    }

    if x > 0 {
        model.document.delete_char(y, x - 1);
        model.editor.cursor.x -= 1;
    } else {
        let prev_len = model.document.row(y - 1).map_or(0, |row| row.len());
        let current = model
            .document
            .row(y)
            .map(|row| row.chars().to_string())
            .unwrap_or_default();
        model.document.append_text(y - 1, &current);
        model.document.delete_row(y);
        model.editor.cursor.y -= 1;
        model.editor.cursor.x = prev_len;
    }
}
