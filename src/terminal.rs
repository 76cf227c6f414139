//! Terminal plumbing: raw mode, key decoding, and size queries.
//!
//! Everything OS-facing lives here, behind crossterm. The rest of the
//! editor consumes abstract [`Key`] events through the [`KeyInput`] trait,
//! which lets the interactive flows run under test against scripted input.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// An abstract key event, decoded from the terminal input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character (includes tab).
    Char(char),
    /// A control chord, e.g. `Ctrl('q')`. Always lowercase.
    Ctrl(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    /// The terminal was resized to (columns, rows).
    Resize(u16, u16),
}

/// Source of key events for the control loop.
///
/// `Ok(None)` is a tick: no input arrived within the poll window. The loop
/// uses ticks to repaint (status-message expiry) without blocking forever.
pub trait KeyInput {
    fn next_key(&mut self) -> Result<Option<Key>>;
}

/// Live terminal input via crossterm's event stream.
#[derive(Debug)]
pub struct TerminalInput {
    timeout: Duration,
}

impl TerminalInput {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

impl KeyInput for TerminalInput {
    fn next_key(&mut self) -> Result<Option<Key>> {
        if !event::poll(self.timeout).context("failed to poll terminal input")? {
            return Ok(None);
        }
        match event::read().context("failed to read terminal input")? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(decode_key(key)),
            Event::Resize(cols, rows) => Ok(Some(Key::Resize(cols, rows))),
            _ => Ok(None),
        }
    }
}

/// Map a crossterm key event to an abstract [`Key`].
///
/// Unrecognized keys decode to `None` and are dropped, except that a bare
/// Esc always comes through (it cancels prompts).
fn decode_key(key: KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Ctrl(c.to_ascii_lowercase()))
        }
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Tab => Some(Key::Char('\t')),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

/// RAII guard for terminal raw mode.
///
/// Raw mode is restored on drop, so it survives both clean exits and error
/// unwinds out of the control loop.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Switch the terminal into raw mode.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("failed to restore terminal mode: {}", e);
        }
    }
}

/// Text-area size: terminal size minus the two reserved bar rows.
/// Returns `(rows, cols)`.
pub fn text_area_size() -> Result<(usize, usize)> {
    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    Ok((usize::from(rows).saturating_sub(2), usize::from(cols)))
}
