//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::VecDeque;

use anyhow::{bail, Result};

use comet::config::EditorConfig;
use comet::model::{AppModel, Cursor, Document};
use comet::runtime::App;
use comet::terminal::{Key, KeyInput};

/// Create a test model with given text and cursor position (24x80 text area)
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    let mut model = AppModel::new(24, 80, EditorConfig::default());
    model.document = Document::with_text(text);
    model.editor.cursor = Cursor::at(line, column);
    model
}

/// Key source that replays a fixed script.
///
/// Erroring after exhaustion (rather than ticking forever) makes a test
/// that forgets to script an exit fail instead of hanging.
pub struct ScriptedInput {
    keys: VecDeque<Key>,
}

impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl KeyInput for ScriptedInput {
    fn next_key(&mut self) -> Result<Option<Key>> {
        match self.keys.pop_front() {
            Some(key) => Ok(Some(key)),
            None => bail!("scripted input exhausted"),
        }
    }
}

/// An app over scripted keys, rendering into an in-memory buffer.
pub fn test_app(
    model: AppModel,
    keys: impl IntoIterator<Item = Key>,
) -> App<ScriptedInput, Vec<u8>> {
    App::new(model, ScriptedInput::new(keys), Vec::new())
}

/// Keys for typing a string of printable characters.
pub fn typed(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).collect()
}
