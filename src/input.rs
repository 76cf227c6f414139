//! Key-to-message translation: the editor's keybinding table.
//!
//! Turns abstract [`Key`] events into [`Msg`]s. Keys with no binding (bare
//! Escape, Ctrl-L, unknown chords) translate to `None` and are ignored by
//! the control loop.

use crate::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, Msg};
use crate::terminal::Key;

/// Translate a key event into a message, or `None` for unbound keys.
pub fn translate(key: Key) -> Option<Msg> {
    match key {
        Key::Char(c) if c == '\t' || !c.is_ascii_control() && c.is_ascii() => {
            Some(Msg::Document(DocumentMsg::InsertChar(c)))
        }
        Key::Enter => Some(Msg::Document(DocumentMsg::InsertNewline)),
        Key::Backspace | Key::Ctrl('h') => Some(Msg::Document(DocumentMsg::DeleteBackward)),
        Key::Delete => Some(Msg::Document(DocumentMsg::DeleteForward)),

        Key::Up => Some(Msg::move_cursor(Direction::Up)),
        Key::Down => Some(Msg::move_cursor(Direction::Down)),
        Key::Left => Some(Msg::move_cursor(Direction::Left)),
        Key::Right => Some(Msg::move_cursor(Direction::Right)),
        Key::Home => Some(Msg::Editor(EditorMsg::MoveCursorLineStart)),
        Key::End => Some(Msg::Editor(EditorMsg::MoveCursorLineEnd)),
        Key::PageUp => Some(Msg::Editor(EditorMsg::PageUp)),
        Key::PageDown => Some(Msg::Editor(EditorMsg::PageDown)),

        Key::Ctrl('s') => Some(Msg::App(AppMsg::Save)),
        Key::Ctrl('x') => Some(Msg::App(AppMsg::SaveAndQuit)),
        Key::Ctrl('f') => Some(Msg::App(AppMsg::Find)),
        Key::Ctrl('q') => Some(Msg::App(AppMsg::Quit)),
        Key::Resize(cols, rows) => Some(Msg::App(AppMsg::Resize(cols, rows))),

        // Escape and Ctrl-L do nothing in the main editor (the screen is
        // redrawn every cycle anyway); other chords are unbound.
        Key::Escape | Key::Ctrl(_) | Key::Char(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_chars_insert() {
        assert_eq!(translate(Key::Char('a')), Some(Msg::insert_char('a')));
        assert_eq!(translate(Key::Char(' ')), Some(Msg::insert_char(' ')));
        assert_eq!(translate(Key::Char('\t')), Some(Msg::insert_char('\t')));
    }

    #[test]
    fn test_non_ascii_chars_are_dropped() {
        assert_eq!(translate(Key::Char('é')), None);
    }

    #[test]
    fn test_chords() {
        assert_eq!(translate(Key::Ctrl('s')), Some(Msg::App(AppMsg::Save)));
        assert_eq!(translate(Key::Ctrl('q')), Some(Msg::App(AppMsg::Quit)));
        assert_eq!(translate(Key::Ctrl('f')), Some(Msg::App(AppMsg::Find)));
        assert_eq!(
            translate(Key::Ctrl('x')),
            Some(Msg::App(AppMsg::SaveAndQuit))
        );
        assert_eq!(
            translate(Key::Ctrl('h')),
            Some(Msg::Document(DocumentMsg::DeleteBackward))
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(translate(Key::Escape), None);
        assert_eq!(translate(Key::Ctrl('l')), None);
        assert_eq!(translate(Key::Ctrl('z')), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            translate(Key::PageUp),
            Some(Msg::Editor(EditorMsg::PageUp))
        );
        assert_eq!(
            translate(Key::Home),
            Some(Msg::Editor(EditorMsg::MoveCursorLineStart))
        );
        assert_eq!(translate(Key::Left), Some(Msg::move_cursor(Direction::Left)));
    }
}
