use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};

use crate::error::Result;
use crate::options::PrinterOptions;
use crate::printer::{LinePrinter, Printer};

/// Prints literal text, decorating each physical line separately.
///
/// Neither placeholders nor markup are interpreted.
pub struct RawPrinter<W: Write = Stdout> {
    printer: Printer<W>,
}

impl RawPrinter<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for RawPrinter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> RawPrinter<W> {
    pub fn with_writer(out: W) -> Self {
        let options = PrinterOptions::default().markup(false).raw(true);
        Self {
            printer: Printer::with_options(out, options),
        }
    }

    /// Print every line of `text`. Empty text prints nothing.
    pub fn println(&mut self, text: &str) -> Result<()> {
        for line in text.lines() {
            self.printer.println(line, &[])?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.printer.into_inner()
    }
}

impl<W: Write> Deref for RawPrinter<W> {
    type Target = Printer<W>;

    fn deref(&self) -> &Self::Target {
        &self.printer
    }
}

impl<W: Write> DerefMut for RawPrinter<W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.printer
    }
}

impl<W: Write> LinePrinter for RawPrinter<W> {
    /// Arguments are ignored: raw text has no placeholders.
    fn print_line(&mut self, template: &str, _args: &[&dyn Display]) -> Result<()> {
        self.println(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup::Align;

    #[test]
    fn decorates_each_line() {
        let mut printer = RawPrinter::with_writer(Vec::new());
        printer.gutter.push_all(2, "|", Align::Left);
        printer.println("fn main() {\n    <b>{}</b>\n}").unwrap();

        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(out, "| fn main() {\n|     <b>{}</b>\n| }\n");
    }

    #[test]
    fn empty_text_prints_nothing() {
        let mut printer = RawPrinter::with_writer(Vec::new());
        printer.println("").unwrap();
        assert!(printer.into_inner().is_empty());
    }
}
