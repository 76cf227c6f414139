//! Modal line-input prompt.
//!
//! A blocking nested loop over the same key source as the main loop, used
//! for save-as and incremental search. The prompt text lives in the status
//! message, so every iteration redraws the full screen with the buffer
//! spliced into the template's `{}` placeholder.
//!
//! Callers can inject a per-keystroke callback; it runs after every
//! iteration (and once more on submit/cancel), which is what makes live
//! incremental search possible.

use std::io::Write;

use anyhow::Result;

use crate::model::AppModel;
use crate::runtime::App;
use crate::terminal::{Key, KeyInput};

/// What the prompt just did, as seen by the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    /// A key was handled and the loop continues.
    Key(Key),
    /// Enter on a nonempty buffer; the prompt is returning it.
    Submit,
    /// Escape; the prompt is returning nothing.
    Cancel,
}

/// Per-keystroke prompt callback.
pub type PromptCallback<'a> = &'a mut dyn FnMut(&mut AppModel, &str, PromptEvent);

impl<I: KeyInput, W: Write> App<I, W> {
    /// Run the modal prompt loop.
    ///
    /// Returns `Some(input)` on Enter (never empty: Enter on an empty
    /// buffer is ignored) or `None` on Escape. Cancellation is therefore
    /// always distinguishable from a successful result.
    pub fn prompt(
        &mut self,
        template: &str,
        mut callback: Option<PromptCallback<'_>>,
    ) -> Result<Option<String>> {
        let mut buf = String::new();

        loop {
            self.model.ui.set_status(template.replacen("{}", &buf, 1));
            self.refresh()?;

            let Some(key) = self.input.next_key()? else {
                continue;
            };

            match key {
                // Delete acts as backspace here; there is no cursor inside
                // the prompt buffer.
                Key::Backspace | Key::Delete | Key::Ctrl('h') => {
                    buf.pop();
                }
                Key::Escape => {
                    self.model.ui.clear_status();
                    if let Some(cb) = callback.as_mut() {
                        cb(&mut self.model, &buf, PromptEvent::Cancel);
                    }
                    return Ok(None);
                }
                Key::Enter if !buf.is_empty() => {
                    self.model.ui.clear_status();
                    if let Some(cb) = callback.as_mut() {
                        cb(&mut self.model, &buf, PromptEvent::Submit);
                    }
                    return Ok(Some(buf));
                }
                Key::Char(c) if c.is_ascii() && !c.is_ascii_control() => {
                    buf.push(c);
                }
                _ => {}
            }

            if let Some(cb) = callback.as_mut() {
                cb(&mut self.model, &buf, PromptEvent::Key(key));
            }
        }
    }
}
