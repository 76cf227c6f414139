//! Incremental search, built on the prompt engine.
//!
//! The prompt callback re-runs the search on every keystroke; arrow keys
//! step through matches in either direction, wrapping around the document.
//! Matching happens against the *rendered* row text, and the hit column is
//! mapped back to a logical column through the tab-expansion mapping.

use std::io::Write;

use anyhow::Result;

use crate::model::AppModel;
use crate::prompt::PromptEvent;
use crate::runtime::App;
use crate::terminal::{Key, KeyInput};

/// Search progress carried between prompt callbacks.
#[derive(Debug)]
struct FindState {
    /// Row of the match the cursor currently sits on.
    last_match: Option<usize>,
    /// Search direction for the next step.
    forward: bool,
}

impl Default for FindState {
    fn default() -> Self {
        Self {
            last_match: None,
            forward: true,
        }
    }
}

impl<I: KeyInput, W: Write> App<I, W> {
    /// The incremental search flow.
    ///
    /// On cancel, the cursor and both scroll offsets are restored to their
    /// pre-search values; a submitted search leaves the cursor on the match.
    pub fn find(&mut self) -> Result<()> {
        let saved_cursor = self.model.editor.cursor;
        let saved_col_offset = self.model.editor.viewport.col_offset;
        let saved_row_offset = self.model.editor.viewport.row_offset;

        let mut state = FindState::default();
        let mut callback = |model: &mut AppModel, query: &str, event: PromptEvent| {
            find_step(model, &mut state, query, event);
        };

        let query = self.prompt("Search: {} (ESC to cancel)", Some(&mut callback))?;

        if query.is_none() {
            self.model.editor.cursor = saved_cursor;
            self.model.editor.viewport.col_offset = saved_col_offset;
            self.model.editor.viewport.row_offset = saved_row_offset;
        }
        Ok(())
    }
}

/// One search step, run from the prompt callback.
fn find_step(model: &mut AppModel, state: &mut FindState, query: &str, event: PromptEvent) {
    match event {
        PromptEvent::Submit | PromptEvent::Cancel => {
            *state = FindState::default();
            return;
        }
        PromptEvent::Key(Key::Right) | PromptEvent::Key(Key::Down) => state.forward = true,
        PromptEvent::Key(Key::Left) | PromptEvent::Key(Key::Up) => state.forward = false,
        PromptEvent::Key(_) => {
            // The query changed: restart from scratch, searching forward.
            *state = FindState::default();
        }
    }

    if query.is_empty() {
        return;
    }
    if state.last_match.is_none() {
        state.forward = true;
    }

    let num_rows = model.document.num_rows();
    let mut current: isize = state.last_match.map_or(-1, |at| at as isize);

    for _ in 0..num_rows {
        current += if state.forward { 1 } else { -1 };
        if current == -1 {
            current = num_rows as isize - 1;
        } else if current == num_rows as isize {
            current = 0;
        }

        let at = current as usize;
        let Some(row) = model.document.row(at) else {
            continue;
        };
        if let Some(offset) = row.render().find(query) {
            state.last_match = Some(at);
            model.editor.cursor.y = at;
            model.editor.cursor.x = row.rx_to_cx(offset);
            // Sets the vertical offset past the end so the scroll pass
            // re-clamps and the match scrolls into view next frame.
            model.editor.viewport.row_offset = num_rows;
            break;
        }
    }
}
