//! Printer configuration.

/// Configuration for a [`crate::Printer`].
///
/// The defaults match [`crate::Printer::new`] with an indent of zero: markup
/// on, substitution on, and both side gutters disabled.
///
/// ```
/// use printer::{Printer, PrinterOptions};
///
/// let options = PrinterOptions::default().indent(2).left_gutter(true);
/// let printer = Printer::with_options(Vec::new(), options);
/// assert!(printer.left.is_enabled());
/// assert_eq!(printer.indent, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrinterOptions {
    pub indent: usize,
    pub markup: bool,
    pub raw: bool,
    pub left_gutter: bool,
    pub right_gutter: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent: 0,
            markup: true,
            raw: false,
            left_gutter: false,
            right_gutter: false,
        }
    }
}

impl PrinterOptions {
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Evaluate inline markup tags in printed text.
    pub fn markup(mut self, markup: bool) -> Self {
        self.markup = markup;
        self
    }

    /// Treat templates as literal text, skipping placeholder substitution.
    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn left_gutter(mut self, enabled: bool) -> Self {
        self.left_gutter = enabled;
        self
    }

    pub fn right_gutter(mut self, enabled: bool) -> Self {
        self.right_gutter = enabled;
        self
    }
}
