//! UI state - the transient status message and the quit confirmation counter.

use std::time::{Duration, Instant};

/// A transient message shown in the bottom message bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub time: Instant,
}

/// UI-level state that is neither document nor cursor.
#[derive(Debug, Clone)]
pub struct UiState {
    status: Option<StatusMessage>,
    /// Remaining consecutive quit presses needed while the document is
    /// dirty. Reset by any non-quit key.
    pub quit_times: u32,
}

impl UiState {
    /// Create UI state with the configured number of quit confirmations.
    pub fn new(quit_confirmations: u32) -> Self {
        Self {
            status: None,
            quit_times: quit_confirmations,
        }
    }

    /// Set the status message; the timestamp starts its display window.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            time: Instant::now(),
        });
    }

    /// Drop the status message immediately.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// The status message text, if one is set and younger than `timeout`.
    pub fn status_text(&self, timeout: Duration) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|msg| msg.time.elapsed() < timeout)
            .map(|msg| msg.text.as_str())
    }

    /// Re-arm the quit confirmation counter.
    pub fn reset_quit_counter(&mut self, quit_confirmations: u32) {
        self.quit_times = quit_confirmations;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(crate::config::EditorConfig::default().quit_confirmations)
    }
}
