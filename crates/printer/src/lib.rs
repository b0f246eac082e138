//! Decorated line printing for terminals.
//!
//! A [`Printer`] writes lines of inline markup (see the `markup` crate)
//! prefixed with gutters: fixed-width columns for line numbers, quote bars,
//! change markers or plain indentation. Gutter layout is kept on
//! [`Gutter`] stacks so that nested scopes can push a change and pop back to
//! exactly the previous layout.
//!
//! # Usage
//!
//! ```
//! use printer::NumberedPrinter;
//! use markup::metrics::strip;
//!
//! let mut printer = NumberedPrinter::with_writer(Vec::new());
//! printer.println("let x = {};", &[&42]).unwrap();
//! printer.println("<b>done</b>", &[]).unwrap();
//!
//! let out = String::from_utf8(printer.into_inner()).unwrap();
//! assert_eq!(strip(&out), " 1 let x = 42;\n 2 done\n");
//! ```

pub mod cursor;
pub mod error;
pub mod gutter;
pub mod helpers;
pub mod log_init;
pub mod options;
pub mod printer;
pub mod template;
pub mod variants;

pub use error::{GutterError, PrintError, Result, TemplateError};
pub use gutter::{Gutter, GutterState};
pub use options::PrinterOptions;
pub use printer::{LinePrinter, Printer};
pub use variants::{CommentPrinter, NumberedPrinter, RawPrinter, StatusBarPrinter};
