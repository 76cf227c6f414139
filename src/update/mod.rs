//! Update functions for the Elm-style architecture
//!
//! `update` is the single entry point: it mutates the model in response to
//! a message and may return a [`Cmd`] for the runtime to execute. Update
//! functions never touch the terminal or the filesystem.

pub mod document;
pub mod editor;

pub use document::update_document;
pub use editor::update_editor;

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;

/// Apply a message to the model, returning any requested side effect.
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Editor(msg) => update_editor(model, msg),
        Msg::Document(msg) => update_document(model, msg),
        Msg::App(msg) => update_app(model, msg),
    }
}

fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Save => Some(Cmd::Save),
        AppMsg::SaveAndQuit => Some(Cmd::SaveAndQuit),
        AppMsg::Find => Some(Cmd::Find),
        AppMsg::Quit => Some(Cmd::Quit),
        AppMsg::Resize(cols, rows) => {
            model
                .editor
                .resize(usize::from(rows).saturating_sub(2), usize::from(cols));
            None
        }
    }
}
