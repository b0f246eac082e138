use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};

use markup::{Align, Color, ansi};

use crate::error::Result;
use crate::gutter::Gutter;
use crate::printer::{LinePrinter, Printer};

/// Prefixes every line with an auto-incrementing line number.
///
/// The number column is two digits wide up to line 99 and three from line
/// 100 on; lines already written are not touched when it widens.
pub struct NumberedPrinter<W: Write = Stdout> {
    printer: Printer<W>,
    /// Number of the last line printed.
    pub line_number: usize,
    pub color: Color,
}

impl NumberedPrinter<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for NumberedPrinter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> NumberedPrinter<W> {
    pub fn with_writer(out: W) -> Self {
        let mut printer = Printer::with_writer(out, 1);
        printer.set_gutter(Gutter::new("", 3));
        printer.gutter.push_align(Align::Right);

        Self {
            printer,
            line_number: 0,
            color: Color::rgb(80, 80, 80),
        }
    }

    /// Move to the next line number and point the gutter at it.
    fn advance(&mut self) {
        self.line_number += 1;

        let mut state = self.printer.gutter.top().clone();
        state.width = if self.line_number < 100 { 2 } else { 3 };
        state.content = ansi::paint(self.color, &self.line_number.to_string());
        self.printer.gutter.replace_top(state);
    }

    pub fn println(&mut self, template: &str, args: &[&dyn Display]) -> Result<()> {
        self.advance();
        self.printer.println(template, args)
    }

    pub fn mark_line(
        &mut self,
        marker: &str,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        self.advance();
        self.printer.mark_line(marker, template, args)
    }

    pub fn mark_line_color(
        &mut self,
        color: impl Into<Color>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        self.advance();
        self.printer.mark_line_color(color, template, args)
    }

    pub fn mark_line_with(
        &mut self,
        color: impl Into<Color>,
        marker: &str,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        self.advance();
        self.printer.mark_line_with(color, marker, template, args)
    }

    pub fn into_inner(self) -> W {
        self.printer.into_inner()
    }
}

impl<W: Write> Deref for NumberedPrinter<W> {
    type Target = Printer<W>;

    fn deref(&self) -> &Self::Target {
        &self.printer
    }
}

impl<W: Write> DerefMut for NumberedPrinter<W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.printer
    }
}

impl<W: Write> LinePrinter for NumberedPrinter<W> {
    fn print_line(&mut self, template: &str, args: &[&dyn Display]) -> Result<()> {
        self.println(template, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup::metrics::strip;

    #[test]
    fn counts_lines() {
        let mut printer = NumberedPrinter::with_writer(Vec::new());
        printer.println("a", &[]).unwrap();
        printer.println("b", &[]).unwrap();

        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(strip(&out), " 1 a\n 2 b\n");
    }

    #[test]
    fn number_is_dimmed() {
        let mut printer = NumberedPrinter::with_writer(Vec::new());
        printer.println("a", &[]).unwrap();

        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert!(out.contains("\x1b[38;2;80;80;80m1\x1b[0m"));
    }

    #[test]
    fn widens_at_one_hundred() {
        let mut printer = NumberedPrinter::with_writer(Vec::new());
        printer.line_number = 98;
        printer.println("a", &[]).unwrap();
        printer.println("b", &[]).unwrap();

        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(strip(&out), "99 a\n100 b\n");
    }

    #[test]
    fn marked_lines_are_numbered() {
        let mut printer = NumberedPrinter::with_writer(Vec::new());
        printer.right.set_enabled(true);
        printer.mark_line("*", "a", &[]).unwrap();
        printer.println("b", &[]).unwrap();

        assert_eq!(printer.line_number, 2);
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(strip(&out), " 1* a\n 2  b\n");
    }

    #[test]
    fn every_mark_line_form_advances() {
        let mut printer = NumberedPrinter::with_writer(Vec::new());
        printer.right.set_enabled(true);
        printer.println("a", &[]).unwrap();
        printer
            .mark_line_with(Color::Rgb(1, 2, 3), "!", "b", &[])
            .unwrap();
        printer.mark_line_color(Color::Rgb(1, 2, 3), "c", &[]).unwrap();
        printer.println("d", &[]).unwrap();

        assert_eq!(printer.line_number, 4);
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(strip(&out), " 1  a\n 2! b\n 3  c\n 4  d\n");
    }
}
