//! View module - the screen compositor.
//!
//! Builds one complete frame per refresh into an append-only byte buffer:
//! text rows, status bar, message bar, and the final cursor placement. The
//! runtime writes the whole buffer to the terminal in a single write, which
//! is what keeps redraws flicker-free.
//!
//! Escape sequences are produced by queueing crossterm commands into the
//! buffer; plain text is appended directly.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use crate::model::AppModel;

/// Shown in the middle of the screen when no file is open.
const WELCOME: &str = concat!("Comet editor -- version ", env!("CARGO_PKG_VERSION"));

/// Compose a full frame for the current model state.
///
/// The caller is responsible for running the scroll pass first so `rx` and
/// the offsets are current.
pub fn render_frame(model: &AppModel) -> io::Result<Vec<u8>> {
    let mut frame: Vec<u8> = Vec::with_capacity(16 * 1024);

    queue!(frame, cursor::Hide, cursor::MoveTo(0, 0))?;

    draw_rows(model, &mut frame)?;
    draw_status_bar(model, &mut frame)?;
    draw_message_bar(model, &mut frame)?;

    // Place the real cursor, translating document position to screen
    // position (crossterm coordinates are 0-indexed).
    let vp = &model.editor.viewport;
    let screen_row = model.editor.cursor.y.saturating_sub(vp.row_offset) as u16;
    let screen_col = model.editor.rx.saturating_sub(vp.col_offset) as u16;
    queue!(frame, cursor::MoveTo(screen_col, screen_row), cursor::Show)?;

    Ok(frame)
}

/// Draw the text area: one line per visible row, `~` markers past the end
/// of the document, and the welcome banner on an empty document.
fn draw_rows(model: &AppModel, frame: &mut Vec<u8>) -> io::Result<()> {
    let vp = &model.editor.viewport;
    let doc = &model.document;

    for i in 0..vp.screen_rows {
        let file_row = i + vp.row_offset;
        if let Some(row) = doc.row(file_row) {
            let render = row.render();
            let start = vp.col_offset.min(render.len());
            let end = (start + vp.screen_cols).min(render.len());
            frame.extend_from_slice(render.get(start..end).unwrap_or("").as_bytes());
        } else if doc.is_empty() && i == vp.screen_rows / 3 {
            draw_welcome(vp.screen_cols, frame);
        } else {
            frame.push(b'~');
        }

        queue!(frame, Clear(ClearType::UntilNewLine))?;
        frame.extend_from_slice(b"\r\n");
    }
    Ok(())
}

fn draw_welcome(screen_cols: usize, frame: &mut Vec<u8>) {
    let banner = &WELCOME[..WELCOME.len().min(screen_cols)];
    let mut padding = (screen_cols - banner.len()) / 2;
    if padding > 0 {
        frame.push(b'~');
        padding -= 1;
    }
    frame.extend(std::iter::repeat(b' ').take(padding));
    frame.extend_from_slice(banner.as_bytes());
}

/// Inverse-video status line: file name, line count, and modified marker on
/// the left; cursor line over total lines on the right.
fn draw_status_bar(model: &AppModel, frame: &mut Vec<u8>) -> io::Result<()> {
    let vp = &model.editor.viewport;
    let doc = &model.document;

    queue!(frame, SetAttribute(Attribute::Reverse))?;

    let mut left = format!(
        "{:.20} - {} lines {}",
        doc.display_name(),
        doc.num_rows(),
        if doc.is_dirty() { "(modified)" } else { "" }
    );
    left.truncate(vp.screen_cols);
    let right = format!("{}/{}", model.editor.cursor.y + 1, doc.num_rows());

    frame.extend_from_slice(left.as_bytes());
    let mut len = left.len();
    while len < vp.screen_cols {
        if vp.screen_cols - len == right.len() {
            frame.extend_from_slice(right.as_bytes());
            break;
        }
        frame.push(b' ');
        len += 1;
    }

    queue!(frame, SetAttribute(Attribute::Reset))?;
    frame.extend_from_slice(b"\r\n");
    Ok(())
}

/// Message bar: the transient status message while it is fresh.
fn draw_message_bar(model: &AppModel, frame: &mut Vec<u8>) -> io::Result<()> {
    queue!(frame, Clear(ClearType::UntilNewLine))?;
    let timeout = Duration::from_secs(model.config.message_timeout_secs);
    if let Some(text) = model.ui.status_text(timeout) {
        let visible = &text[..text.len().min(model.editor.viewport.screen_cols)];
        frame.extend_from_slice(visible.as_bytes());
    }
    Ok(())
}

/// Write a frame to the output in a single write, then flush.
pub fn present(out: &mut impl Write, frame: &[u8]) -> io::Result<()> {
    out.write_all(frame)?;
    out.flush()
}
