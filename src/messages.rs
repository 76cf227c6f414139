//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement, viewport)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart,
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Page up: cursor to the top of the viewport, then up one page
    PageUp,
    /// Page down: cursor to the bottom of the viewport, then down one page
    PageDown,
}

/// Document-specific messages (text editing)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert a newline at the cursor
    InsertNewline,
    /// Delete the character before the cursor (Backspace)
    DeleteBackward,
    /// Delete the character at the cursor (Delete)
    DeleteForward,
}

/// Application-level messages (file operations, session)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    /// Save the current file (prompting for a name when unset)
    Save,
    /// Save, then quit without confirmation
    SaveAndQuit,
    /// Start incremental search
    Find,
    /// Quit (subject to the dirty-document confirmation)
    Quit,
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Editor messages (cursor, viewport)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// App messages (file I/O, session)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor(direction))
    }

    /// Create an insert character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }
}
