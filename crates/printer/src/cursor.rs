//! Terminal cursor control.
//!
//! Commands are queued on the writer in the order given; callers flush.

use std::io::Write;

use crossterm::{cursor, queue, terminal};

/// Move the cursor up `n` lines (`ESC [ n A`).
pub fn up(out: &mut impl Write, n: u16) -> std::io::Result<()> {
    queue!(out, cursor::MoveUp(n))
}

/// Clear the line under the cursor (`ESC [ 2 K`).
pub fn clear_line(out: &mut impl Write) -> std::io::Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::CurrentLine))
}

/// Save the cursor position (`ESC 7`).
pub fn save(out: &mut impl Write) -> std::io::Result<()> {
    queue!(out, cursor::SavePosition)
}

/// Restore the cursor position saved by [`save`] (`ESC 8`).
pub fn restore(out: &mut impl Write) -> std::io::Result<()> {
    queue!(out, cursor::RestorePosition)
}
