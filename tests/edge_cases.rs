//! Invariant checks under long mixed editing sequences

mod common;

use common::test_model;
use comet::messages::{Direction, DocumentMsg, EditorMsg, Msg};
use comet::model::AppModel;
use comet::update::update;

/// Expected rendering of a row: tabs expand to the next multiple-of-8 stop.
fn expand(chars: &str) -> String {
    let mut out = String::new();
    for ch in chars.chars() {
        if ch == '\t' {
            out.push(' ');
            while out.len() % 8 != 0 {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
    out
}

fn check_invariants(model: &mut AppModel) {
    let doc = &model.document;

    // Renders are never stale.
    for i in 0..doc.num_rows() {
        let row = doc.row(i).unwrap();
        assert_eq!(row.render(), expand(row.chars()), "stale render on row {i}");
        assert_eq!(row.cx_to_rx(0), 0);
    }

    // Cursor stays within the document (sentinel row included).
    let cursor = model.editor.cursor;
    assert!(cursor.y <= doc.num_rows());
    let row_len = doc.row(cursor.y).map_or(0, |r| r.len());
    assert!(cursor.x <= row_len, "cursor past row end");

    // Scrolling keeps the cursor inside the viewport and is idempotent.
    model.editor.scroll(&model.document);
    let vp_before = (
        model.editor.viewport.row_offset,
        model.editor.viewport.col_offset,
    );
    model.editor.scroll(&model.document);
    let vp_after = (
        model.editor.viewport.row_offset,
        model.editor.viewport.col_offset,
    );
    assert_eq!(vp_before, vp_after);
    assert!(cursor.y >= model.editor.viewport.row_offset);
    assert!(cursor.y < model.editor.viewport.row_offset + model.editor.viewport.screen_rows);
}

#[test]
fn test_mixed_editing_sequence_preserves_invariants() {
    let mut model = test_model("fn main() {\n\tprintln'\n}\n", 0, 0);

    // Deterministic pseudo-random walk over the message space.
    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as usize
    };

    for step in 0..2000 {
        let msg = match next() % 10 {
            0 => Msg::insert_char((b'a' + (next() % 26) as u8) as char),
            1 => Msg::insert_char('\t'),
            2 => Msg::Document(DocumentMsg::InsertNewline),
            3 => Msg::Document(DocumentMsg::DeleteBackward),
            4 => Msg::Document(DocumentMsg::DeleteForward),
            5 => Msg::move_cursor(Direction::Up),
            6 => Msg::move_cursor(Direction::Down),
            7 => Msg::move_cursor(Direction::Left),
            8 => Msg::move_cursor(Direction::Right),
            _ => Msg::Editor(if next() % 2 == 0 {
                EditorMsg::PageUp
            } else {
                EditorMsg::PageDown
            }),
        };
        update(&mut model, msg);
        if step % 50 == 0 {
            check_invariants(&mut model);
        }
    }
    check_invariants(&mut model);

    // Whatever happened, serialization still terminates every row.
    let text = model.document.to_text();
    assert_eq!(text.matches('\n').count(), model.document.num_rows());
}
