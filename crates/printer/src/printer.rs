//! Line composer.
//!
//! A [`Printer`] owns four gutters and turns a template plus arguments into
//! one decorated, styled line:
//!
//! ```text
//! [left][gutter][right][indent] content
//! ```
//!
//! Each gutter renders its top state (or nothing when disabled or zero
//! width). The content is the template with its placeholders substituted,
//! then evaluated as markup.

use std::fmt::Display;
use std::io::{self, Stdout, Write};

use markup::metrics::visible_length;
use markup::{Color, ansi};

use crate::error::Result;
use crate::gutter::{Gutter, GutterState};
use crate::options::PrinterOptions;
use crate::template::substitute;

/// Glyph drawn in the left gutter by [`Printer::mark_line_color`].
pub const COLOR_MARK: &str = "▏";

/// Anything that prints one decorated line per call.
pub trait LinePrinter {
    fn print_line(&mut self, template: &str, args: &[&dyn Display]) -> Result<()>;
}

pub struct Printer<W: Write = Stdout> {
    /// Primary gutter.
    pub gutter: Gutter,
    pub left: Gutter,
    pub right: Gutter,
    /// Blank field between the gutters and the content.
    pub indent_gutter: Gutter,
    /// Evaluate inline markup in printed text.
    pub markup: bool,
    /// Skip placeholder substitution.
    pub raw: bool,
    pub indent: usize,
    out: W,
}

impl Printer<Stdout> {
    /// A printer writing to stdout with `indent` blank columns before the
    /// content.
    pub fn new(indent: usize) -> Self {
        Self::with_writer(io::stdout(), indent)
    }
}

impl Default for Printer<Stdout> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<W: Write> Printer<W> {
    pub fn with_writer(out: W, indent: usize) -> Self {
        Self::with_options(out, PrinterOptions::default().indent(indent))
    }

    pub fn with_options(out: W, options: PrinterOptions) -> Self {
        let mut left = Gutter::new("", 1);
        left.set_enabled(options.left_gutter);

        let mut right = Gutter::new("", 1);
        right.set_enabled(options.right_gutter);

        let mut indent_gutter = Gutter::default();
        indent_gutter.push_width(options.indent);

        Self {
            gutter: Gutter::default(),
            left,
            right,
            indent_gutter,
            markup: options.markup,
            raw: options.raw,
            indent: options.indent,
            out,
        }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Replace the primary gutter.
    pub fn set_gutter(&mut self, gutter: Gutter) {
        self.gutter = gutter;
    }

    /// Reset the primary gutter to an empty, zero-width one.
    pub fn remove_gutter(&mut self) {
        self.gutter = Gutter::default();
    }

    /// The rendered gutters, in the order left, primary, right, indent.
    pub fn decorations(&self) -> String {
        [&self.left, &self.gutter, &self.right, &self.indent_gutter]
            .iter()
            .map(|gutter| gutter.render())
            .collect()
    }

    /// Substitute `args` into `template` (unless raw) and evaluate markup
    /// (if enabled).
    pub fn format(&self, template: &str, args: &[&dyn Display]) -> Result<String> {
        let text = if self.raw {
            template.to_string()
        } else {
            substitute(template, args)?
        };

        Ok(if self.markup {
            markup::render(&text)
        } else {
            text
        })
    }

    /// The decorated line [`Printer::println`] would write, without the
    /// line terminator.
    pub fn compose(&self, template: &str, args: &[&dyn Display]) -> Result<String> {
        let content = self.format(template, args)?;
        Ok(self.decorations() + &content)
    }

    /// Write one decorated line.
    ///
    /// ```
    /// use printer::Printer;
    ///
    /// let mut printer = Printer::with_writer(Vec::new(), 2);
    /// printer.println("<b>{}</b> done", &[&3]).unwrap();
    ///
    /// let out = String::from_utf8(printer.into_inner()).unwrap();
    /// assert_eq!(out, "  \x1b[1m3\x1b[0m done\n");
    /// ```
    pub fn println(&mut self, template: &str, args: &[&dyn Display]) -> Result<()> {
        let line = self.compose(template, args)?;
        self.write_line(&line)
    }

    /// Write already rendered text as one decorated line. The text is not
    /// substituted or evaluated again.
    pub fn println_rendered(&mut self, rendered: &str) -> Result<()> {
        let line = self.decorations() + rendered;
        self.write_line(&line)
    }

    /// Write the formatted content without decorations or line terminator.
    /// An empty template writes nothing.
    pub fn print(&mut self, template: &str, args: &[&dyn Display]) -> Result<()> {
        if template.is_empty() {
            return Ok(());
        }
        let text = self.format(template, args)?;
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Print one line with `marker` in the right gutter if it is enabled,
    /// otherwise in the primary gutter.
    ///
    /// When the marker widens the primary gutter, the indent gutter gives up
    /// the same number of columns for this line if it has more than that to
    /// spare, so the content stays in place. Every push is undone before
    /// returning, including when writing fails.
    pub fn mark_line(
        &mut self,
        marker: &str,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        if self.right.is_enabled() {
            self.right.push_content(marker);
            let printed = self.println(template, args);
            self.right.pop(1)?;
            return printed;
        }

        let before = cell_width(self.gutter.top());
        self.gutter.push_content(marker);
        let excess = cell_width(self.gutter.top()).saturating_sub(before);

        let indent_width = self.indent_gutter.top().width;
        let narrowed = excess > 0 && indent_width > excess;
        if narrowed {
            self.indent_gutter.push_width(indent_width - excess);
        }

        let printed = self.println(template, args);

        if narrowed {
            self.indent_gutter.pop(1)?;
        }
        self.gutter.pop(1)?;
        printed
    }

    /// Print one line flagged with `color`: a colored bar in the left gutter
    /// if it is enabled, otherwise the primary gutter's background.
    pub fn mark_line_color(
        &mut self,
        color: impl Into<Color>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        let on_left = self.push_color_mark(color.into());
        let printed = self.println(template, args);
        self.pop_color_mark(on_left)?;
        printed
    }

    /// [`Printer::mark_line_color`] and [`Printer::mark_line`] on one line.
    pub fn mark_line_with(
        &mut self,
        color: impl Into<Color>,
        marker: &str,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        let on_left = self.push_color_mark(color.into());
        let printed = self.mark_line(marker, template, args);
        self.pop_color_mark(on_left)?;
        printed
    }

    fn push_color_mark(&mut self, color: Color) -> bool {
        if self.left.is_enabled() {
            self.left.push_content(ansi::paint(color, COLOR_MARK));
            true
        } else {
            self.gutter.push_background(color);
            false
        }
    }

    fn pop_color_mark(&mut self, on_left: bool) -> Result<()> {
        if on_left {
            self.left.pop(1)?;
        } else {
            self.gutter.pop(1)?;
        }
        Ok(())
    }
}

impl<W: Write> LinePrinter for Printer<W> {
    fn print_line(&mut self, template: &str, args: &[&dyn Display]) -> Result<()> {
        self.println(template, args)
    }
}

/// Columns a gutter state occupies once rendered.
fn cell_width(state: &GutterState) -> usize {
    if state.width == 0 {
        0
    } else {
        state.width.max(visible_length(&state.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup::Align;
    use markup::metrics::strip;

    fn output(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn defaults() {
        let printer = Printer::with_writer(Vec::new(), 3);
        assert!(printer.gutter.is_enabled());
        assert!(!printer.left.is_enabled());
        assert!(!printer.right.is_enabled());
        assert!(printer.markup);
        assert!(!printer.raw);
        assert_eq!(printer.indent_gutter.top().width, 3);
    }

    #[test]
    fn decorations_order() {
        let mut printer = Printer::with_options(
            Vec::new(),
            PrinterOptions::default().indent(1).left_gutter(true).right_gutter(true),
        );
        printer.left.push_content("L");
        printer.right.push_content("R");
        printer.gutter.push_all(1, "G", Align::Middle);

        assert_eq!(printer.decorations(), "LGR ");
    }

    #[test]
    fn raw_mode_skips_substitution() {
        let mut printer = Printer::with_writer(Vec::new(), 0);
        printer.raw = true;
        assert_eq!(printer.compose("{0} {}", &[]).unwrap(), "{0} {}");
    }

    #[test]
    fn markup_can_be_disabled() {
        let mut printer = Printer::with_writer(Vec::new(), 0);
        printer.markup = false;
        assert_eq!(printer.compose("<b>x</b>", &[]).unwrap(), "<b>x</b>");
    }

    #[test]
    fn empty_println_still_decorates() {
        let mut printer = Printer::with_writer(Vec::new(), 2);
        printer.println("", &[]).unwrap();
        assert_eq!(output(printer), "  \n");
    }

    #[test]
    fn print_writes_bare_content() {
        let mut printer = Printer::with_writer(Vec::new(), 4);
        printer.print("", &[]).unwrap();
        printer.print("a{}", &[&1]).unwrap();
        assert_eq!(output(printer), "a1");
    }

    #[test]
    fn template_errors_propagate() {
        let mut printer = Printer::with_writer(Vec::new(), 0);
        assert!(printer.println("{}", &[]).is_err());
        assert_eq!(output(printer), "");
    }

    #[test]
    fn mark_line_narrows_indent() {
        let mut printer = Printer::with_writer(Vec::new(), 4);
        printer.gutter.push_all(1, "", Align::Left);
        printer.mark_line("=>", "x", &[]).unwrap();
        printer.println("y", &[]).unwrap();

        let out = output(printer);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "=>   x");
        assert_eq!(lines[1], "     y");
    }

    #[test]
    fn mark_line_uses_right_gutter_when_enabled() {
        let mut printer = Printer::with_writer(Vec::new(), 1);
        printer.right.set_enabled(true);
        printer.mark_line("*", "x", &[]).unwrap();

        assert_eq!(output(printer), "* x\n");
    }

    #[test]
    fn mark_line_restores_on_error() {
        let mut printer = Printer::with_writer(Vec::new(), 4);
        printer.gutter.push_all(1, "", Align::Left);
        assert!(printer.mark_line("=>", "{}", &[]).is_err());

        assert_eq!(printer.gutter.depth(), 1);
        assert_eq!(printer.indent_gutter.top().width, 4);
    }

    #[test]
    fn mark_line_color_on_primary_background() {
        let mut printer = Printer::with_writer(Vec::new(), 0);
        printer.gutter.push_all(1, " ", Align::Left);
        printer
            .mark_line_color(Color::Rgb(255, 0, 0), "x", &[])
            .unwrap();

        assert_eq!(output(printer), "\x1b[48;2;255;0;0m \x1b[0mx\n");
    }

    #[test]
    fn mark_line_color_on_left_gutter() {
        let mut printer = Printer::with_writer(Vec::new(), 0);
        printer.left.set_enabled(true);
        printer.mark_line_color(Color::Rgb(0, 255, 0), "x", &[]).unwrap();

        let out = output(printer);
        assert!(out.starts_with("\x1b[38;2;0;255;0m▏"));
        assert_eq!(strip(&out), "▏x\n");
    }

    #[test]
    fn mark_line_with_pops_everything() {
        let mut printer = Printer::with_writer(Vec::new(), 2);
        printer.gutter.push_all(1, "", Align::Left);
        printer
            .mark_line_with(Color::Rgb(1, 2, 3), "!", "x", &[])
            .unwrap();

        assert_eq!(printer.gutter.depth(), 1);
        assert_eq!(printer.gutter.top().background, None);
        assert_eq!(printer.indent_gutter.depth(), 1);
    }

    #[test]
    fn remove_gutter_resets_primary() {
        let mut printer = Printer::with_writer(Vec::new(), 0);
        printer.set_gutter(Gutter::new(">", 2));
        assert_eq!(printer.decorations(), "> ");

        printer.remove_gutter();
        assert_eq!(printer.decorations(), "");
    }
}
