use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};

use log::debug;
use markup::metrics::visible_length;
use markup::{Color, ansi};

use crate::cursor;
use crate::error::Result;
use crate::printer::{LinePrinter, Printer};

/// Keeps a status bar on the line below the latest output.
///
/// Every printed line replaces the bar, and the bar is drawn again below it.
/// [`StatusBarPrinter::update`] redraws the bar in place.
pub struct StatusBarPrinter<W: Write = Stdout> {
    printer: Printer<W>,
    /// Visible width the bar is filled to.
    pub bar_width: usize,
    /// Pattern repeated to build the bar.
    pub bar_chars: String,
    status_bar: String,
    drawn: bool,
}

impl StatusBarPrinter<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for StatusBarPrinter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StatusBarPrinter<W> {
    pub fn with_writer(out: W) -> Self {
        let mut printer = Self {
            printer: Printer::with_writer(out, 0),
            bar_width: 80,
            bar_chars: ansi::yellow("━"),
            status_bar: String::new(),
            drawn: false,
        };
        printer.rebuild();
        printer
    }

    /// Rebuild the bar from `bar_chars` and `bar_width`.
    pub fn rebuild(&mut self) {
        let unit = visible_length(&self.bar_chars).max(1);
        let count = self.bar_width / unit;
        self.status_bar = self.bar_chars.repeat(count);
        debug!("status bar rebuilt from {count} repetitions");
    }

    pub fn status_bar(&self) -> &str {
        &self.status_bar
    }

    /// Replace the bar with rendered markup.
    pub fn set_status(&mut self, status: &str) {
        self.status_bar = markup::render(status);
    }

    /// Print a line where the bar was, then draw the bar below it.
    pub fn println(&mut self, template: &str, args: &[&dyn Display]) -> Result<()> {
        let content = self.printer.format(template, args)?;
        self.around_bar(|printer| printer.println_rendered(&content))
    }

    pub fn mark_line(
        &mut self,
        marker: &str,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        self.around_bar(|printer| printer.mark_line(marker, template, args))
    }

    pub fn mark_line_color(
        &mut self,
        color: impl Into<Color>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        let color = color.into();
        self.around_bar(|printer| printer.mark_line_color(color, template, args))
    }

    pub fn mark_line_with(
        &mut self,
        color: impl Into<Color>,
        marker: &str,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        let color = color.into();
        self.around_bar(|printer| printer.mark_line_with(color, marker, template, args))
    }

    /// Redraw the bar in place.
    pub fn update(&mut self) -> Result<()> {
        self.erase_bar()?;
        self.draw_bar()
    }

    /// Erase the bar, run `print`, and draw the bar again even if `print`
    /// failed.
    fn around_bar(&mut self, print: impl FnOnce(&mut Printer<W>) -> Result<()>) -> Result<()> {
        self.erase_bar()?;
        let printed = print(&mut self.printer);
        self.draw_bar()?;
        printed
    }

    fn erase_bar(&mut self) -> Result<()> {
        if self.drawn {
            let out = self.printer.writer_mut();
            cursor::up(out, 1)?;
            cursor::clear_line(out)?;
            self.drawn = false;
        }
        Ok(())
    }

    fn draw_bar(&mut self) -> Result<()> {
        self.printer.println_rendered(&self.status_bar)?;
        self.drawn = true;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.printer.into_inner()
    }
}

impl<W: Write> Deref for StatusBarPrinter<W> {
    type Target = Printer<W>;

    fn deref(&self) -> &Self::Target {
        &self.printer
    }
}

impl<W: Write> DerefMut for StatusBarPrinter<W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.printer
    }
}

impl<W: Write> LinePrinter for StatusBarPrinter<W> {
    fn print_line(&mut self, template: &str, args: &[&dyn Display]) -> Result<()> {
        self.println(template, args)
    }
}
