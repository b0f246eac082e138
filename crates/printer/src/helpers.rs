//! One-shot printers.
//!
//! Each helper builds a printer over `out`, prints `lines` and drops it.
//! Lines are markup but not templates: braces are printed as they are.
//!
//! ```
//! use printer::helpers;
//!
//! let mut out = Vec::new();
//! helpers::quote(&mut out, &["first", "second"]).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "┃ first\n┃ second\n");
//! ```

use std::io::Write;

use markup::Align;
use markup::metrics::{pad, visible_length};

use crate::error::Result;
use crate::gutter::GutterState;
use crate::printer::{LinePrinter, Printer};
use crate::variants::{CommentPrinter, NumberedPrinter};

/// Glyph drawn in the gutter by [`quote`].
pub const QUOTE_MARK: &str = "┃";

fn print_lines(printer: &mut impl LinePrinter, lines: &[&str]) -> Result<()> {
    for line in lines {
        printer.print_line(line, &[])?;
    }
    Ok(())
}

/// Print `lines` behind a vertical quote bar.
pub fn quote<W: Write>(out: W, lines: &[&str]) -> Result<()> {
    let mut printer = Printer::with_writer(out, 1);
    printer.raw = true;
    printer.gutter.push_all(1, QUOTE_MARK, Align::Middle);
    print_lines(&mut printer, lines)
}

/// Print `lines` indented by `width` columns.
pub fn indent<W: Write>(out: W, width: usize, lines: &[&str]) -> Result<()> {
    let mut printer = Printer::with_writer(out, width);
    printer.raw = true;
    print_lines(&mut printer, lines)
}

/// Print `lines` as line comments.
pub fn comment<W: Write>(out: W, lines: &[&str]) -> Result<()> {
    let mut printer = CommentPrinter::with_writer(out);
    printer.raw = true;
    print_lines(&mut printer, lines)
}

/// Print `lines` with `marker` in a gutter fitted to its width.
pub fn with_gutter<W: Write>(out: W, marker: &str, lines: &[&str]) -> Result<()> {
    let mut printer = Printer::with_writer(out, 0);
    printer.raw = true;
    printer
        .gutter
        .push_all(visible_length(marker), marker, Align::Left);
    print_lines(&mut printer, lines)
}

/// Print `lines` with the primary gutter set to `state`.
pub fn with_state<W: Write>(out: W, state: GutterState, lines: &[&str]) -> Result<()> {
    let mut printer = Printer::with_writer(out, 0);
    printer.raw = true;
    printer.gutter.push_state(state);
    print_lines(&mut printer, lines)
}

/// Print `lines` numbered from `start`, with both side gutters shown.
pub fn numbered<W: Write>(out: W, start: usize, lines: &[&str]) -> Result<()> {
    let mut printer = NumberedPrinter::with_writer(out);
    printer.line_number = start.saturating_sub(1);
    printer.raw = true;
    printer.left.set_enabled(true);
    printer.right.set_enabled(true);
    print_lines(&mut printer, lines)
}

/// Print each rendered line padded to `width` visible columns.
pub fn aligned<W: Write>(out: W, align: Align, width: usize, lines: &[&str]) -> Result<()> {
    let mut printer = Printer::with_writer(out, 0);
    for line in lines {
        let rendered = markup::render(line);
        printer.println_rendered(&pad(&rendered, width, align))?;
    }
    Ok(())
}
