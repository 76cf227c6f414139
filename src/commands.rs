//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an
//! update: anything that needs the terminal or the filesystem. The update
//! functions stay pure; the runtime loop executes these.

/// A side effect requested by an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Run the save flow (may prompt for a file name)
    Save,
    /// Run the save flow, then quit if the save completed
    SaveAndQuit,
    /// Run the incremental search flow
    Find,
    /// Quit, subject to the dirty-document confirmation
    Quit,
}
