//! The control loop.
//!
//! `App` owns the model, the key source, and the output sink, and runs the
//! draw-frame / read-key cycle. It is generic over both ends so the whole
//! interactive surface (editing, prompts, search, quit confirmation) runs
//! under test against scripted keys and an in-memory buffer.
//!
//! Side effects requested by `update` come back as [`Cmd`]s and are
//! executed here; everything else stays pure.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::cursor;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::commands::Cmd;
use crate::input;
use crate::model::AppModel;
use crate::terminal::{Key, KeyInput};
use crate::update;
use crate::view;

/// Outcome of processing one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The running editor session.
pub struct App<I, W> {
    pub model: AppModel,
    /// Where key events come from (the terminal, or a script under test).
    pub input: I,
    /// Where frames go (stdout, or a byte buffer under test).
    pub out: W,
}

impl<I: KeyInput, W: Write> App<I, W> {
    pub fn new(model: AppModel, input: I, out: W) -> Self {
        Self { model, input, out }
    }

    /// Run the scroll pass, compose a frame, and write it in one go.
    pub fn refresh(&mut self) -> Result<()> {
        self.model.editor.scroll(&self.model.document);
        let frame = view::render_frame(&self.model)?;
        view::present(&mut self.out, &frame)?;
        Ok(())
    }

    /// The main loop: draw, block on the next key (with a short poll
    /// timeout so stale status messages disappear without input), process.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.refresh()?;
            let Some(key) = self.input.next_key()? else {
                continue;
            };
            if self.process_key(key)? == Flow::Quit {
                break;
            }
        }
        self.clear_screen()
    }

    /// Translate, update, and execute any resulting command.
    pub fn process_key(&mut self, key: Key) -> Result<Flow> {
        let cmd = input::translate(key).and_then(|msg| update::update(&mut self.model, msg));

        // Any key that is not a quit request re-arms the confirmation.
        if cmd != Some(Cmd::Quit) {
            let confirmations = self.model.config.quit_confirmations;
            self.model.ui.reset_quit_counter(confirmations);
        }

        match cmd {
            None => Ok(Flow::Continue),
            Some(Cmd::Quit) => Ok(self.request_quit()),
            Some(Cmd::Save) => {
                self.save()?;
                Ok(Flow::Continue)
            }
            Some(Cmd::SaveAndQuit) => {
                if self.save()? {
                    Ok(Flow::Quit)
                } else {
                    Ok(Flow::Continue)
                }
            }
            Some(Cmd::Find) => {
                self.find()?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Quit, or warn while the document is dirty and confirmations remain.
    fn request_quit(&mut self) -> Flow {
        if self.model.document.is_dirty() && self.model.ui.quit_times > 1 {
            self.model.ui.quit_times -= 1;
            let remaining = self.model.ui.quit_times;
            self.model.ui.set_status(format!(
                "WARNING! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                remaining
            ));
            Flow::Continue
        } else {
            Flow::Quit
        }
    }

    /// The save flow. Prompts for a file name when none is set; reports the
    /// result in the status message. Returns whether the document was
    /// actually written.
    pub(crate) fn save(&mut self) -> Result<bool> {
        if self.model.document.filename.is_none() {
            match self.prompt("Save as: {} (ESC to cancel)", None)? {
                Some(name) => self.model.document.filename = Some(PathBuf::from(name)),
                None => {
                    self.model.ui.set_status("Save aborted");
                    return Ok(false);
                }
            }
        }

        match self.model.document.save() {
            Ok(bytes) => {
                tracing::info!("saved {} bytes", bytes);
                self.model
                    .ui
                    .set_status(format!("{} bytes written to disk", bytes));
                Ok(true)
            }
            Err(e) => {
                tracing::warn!("save failed: {}", e);
                self.model
                    .ui
                    .set_status(format!("Can't save! I/O error: {}", e));
                Ok(false)
            }
        }
    }

    fn clear_screen(&mut self) -> Result<()> {
        let mut frame: Vec<u8> = Vec::new();
        queue!(frame, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        view::present(&mut self.out, &frame)?;
        Ok(())
    }
}
