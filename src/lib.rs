//! Inline markup and gutter-decorated line printing for terminals.
//!
//! This crate bundles the workspace crates behind one dependency:
//!
//! - [`markup`]: evaluate `<b>`, `<red>`, `<color=#RRGGBB>` and friends into
//!   ANSI-styled text, and measure styled text by its visible width
//! - [`printer`]: print lines with gutters (line numbers, quote bars,
//!   markers, indentation) kept on push/pop stacks
//!
//! ```
//! use libprint::prelude::*;
//!
//! fn main() -> libprint::Result<()> {
//!     let styled = try_render("<b>bold</b> and <i>italic</i>")?;
//!     assert_eq!(metrics::strip(&styled), "bold and italic");
//!
//!     let mut printer = Printer::with_writer(Vec::new(), 2);
//!     printer.gutter.push_all(1, "┃", Align::Middle);
//!     printer.println("{} items", &[&3])?;
//!     assert_eq!(String::from_utf8_lossy(&printer.into_inner()), "┃  3 items\n");
//!     Ok(())
//! }
//! ```

pub mod error;

pub use markup;
pub use printer;

pub use error::{Error, Result};
pub use markup::{Align, Color, Emphasis, NamedColor, Style, render, try_render};
pub use printer::{
    CommentPrinter, Gutter, GutterState, LinePrinter, NumberedPrinter, Printer, PrinterOptions,
    RawPrinter, StatusBarPrinter, helpers,
};

/// Everything needed to print decorated lines.
pub mod prelude {
    pub use markup::{Align, Color, Emphasis, NamedColor, Style, ansi, metrics, render, try_render};
    pub use printer::{
        CommentPrinter, Gutter, GutterState, LinePrinter, NumberedPrinter, Printer,
        PrinterOptions, RawPrinter, StatusBarPrinter, cursor, helpers,
    };
}
