use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};

use markup::metrics::visible_length;
use markup::{Align, Color, Emphasis, Style, ansi};

use crate::error::Result;
use crate::gutter::Gutter;
use crate::printer::{LinePrinter, Printer};

/// Prints lines as source-code comments: a dim italic `//` in the gutter
/// and dim italic text.
pub struct CommentPrinter<W: Write = Stdout> {
    printer: Printer<W>,
    /// Line comment marker.
    pub mark: String,
    pub color: Color,
    /// Block comment markers for the first, middle and last lines.
    pub block_marks: [String; 3],
}

impl CommentPrinter<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for CommentPrinter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> CommentPrinter<W> {
    pub fn with_writer(out: W) -> Self {
        let mut comment = Self {
            printer: Printer::with_writer(out, 1),
            mark: "//".to_string(),
            color: Color::rgb(70, 70, 70),
            block_marks: ["/* ".to_string(), " * ".to_string(), " */".to_string()],
        };
        let gutter = comment.mark_gutter();
        comment.printer.set_gutter(gutter);
        comment.printer.gutter.push_align(Align::Right);
        comment
    }

    fn style(&self) -> Style {
        Style::fg(self.color).with_emphasis(Emphasis::ITALIC)
    }

    fn mark_gutter(&self) -> Gutter {
        Gutter::new(ansi::apply(&self.style(), &self.mark), visible_length(&self.mark))
    }

    /// Print one comment line, resetting the gutter to the line marker.
    pub fn println(&mut self, template: &str, args: &[&dyn Display]) -> Result<()> {
        let gutter = self.mark_gutter();
        self.printer.set_gutter(gutter);
        let text = self.printer.format(template, args)?;
        let line = ansi::apply(&self.style(), &text);
        self.printer.println_rendered(&line)
    }

    /// Print a block comment, one gutter marker per physical line.
    ///
    /// A single line gets the opening marker.
    pub fn print_block(&mut self, template: &str, args: &[&dyn Display]) -> Result<()> {
        let text = self.printer.format(template, args)?;
        let lines: Vec<&str> = text.lines().collect();
        let last = lines.len().saturating_sub(1);

        for (n, line) in lines.iter().enumerate() {
            let mark = match n {
                0 => &self.block_marks[0],
                n if n == last => &self.block_marks[2],
                _ => &self.block_marks[1],
            };
            let line = ansi::apply(&self.style(), line);
            self.printer.gutter.push_content(ansi::paint(self.color, mark));
            let printed = self.printer.println_rendered(&line);
            self.printer.gutter.pop(1)?;
            printed?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.printer.into_inner()
    }
}

impl<W: Write> Deref for CommentPrinter<W> {
    type Target = Printer<W>;

    fn deref(&self) -> &Self::Target {
        &self.printer
    }
}

impl<W: Write> DerefMut for CommentPrinter<W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.printer
    }
}

impl<W: Write> LinePrinter for CommentPrinter<W> {
    fn print_line(&mut self, template: &str, args: &[&dyn Display]) -> Result<()> {
        self.println(template, args)
    }
}
