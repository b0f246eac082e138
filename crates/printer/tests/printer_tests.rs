//! Tests for printers writing into memory.

use markup::metrics::{strip, visible_length};
use markup::{Align, Color, NamedColor};
use printer::{
    CommentPrinter, LinePrinter, NumberedPrinter, PrintError, Printer, PrinterOptions, RawPrinter,
    StatusBarPrinter, TemplateError, helpers,
};

fn lines(out: Vec<u8>) -> Vec<String> {
    let text = String::from_utf8(out).unwrap();
    strip(&text).lines().map(str::to_string).collect()
}

// ============================================================================
// Printer
// ============================================================================

#[test]
fn println_substitutes_then_renders() {
    let mut printer = Printer::with_writer(Vec::new(), 0);
    printer
        .println("<red>{}</red> of {}", &[&3, &"4"])
        .unwrap();

    let out = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(out, "\x1b[38;5;1m3\x1b[0m of 4\n");
}

#[test]
fn malformed_markup_prints_empty_content() {
    let mut printer = Printer::with_writer(Vec::new(), 2);
    printer.println("<b>oops", &[]).unwrap();
    assert_eq!(lines(printer.into_inner()), vec!["  "]);
}

#[test]
fn missing_argument_is_an_error() {
    let mut printer = Printer::with_writer(Vec::new(), 0);
    let err = printer.println("{} {}", &[&1]).unwrap_err();
    assert!(matches!(
        err,
        PrintError::Template(TemplateError::MissingArgument { index: 1, count: 1 })
    ));
}

#[test]
fn options_builder() {
    let options = PrinterOptions::default()
        .indent(2)
        .markup(false)
        .raw(true)
        .right_gutter(true);
    let mut printer = Printer::with_options(Vec::new(), options);
    printer.println("<b>{}</b>", &[]).unwrap();

    assert_eq!(lines(printer.into_inner()), vec!["   <b>{}</b>"]);
}

#[test]
fn every_line_has_constant_width_with_markers() {
    let mut printer = Printer::with_writer(Vec::new(), 3);
    printer.gutter.push_all(1, "", Align::Left);
    printer.println("a", &[]).unwrap();
    printer.mark_line("->", "b", &[]).unwrap();
    printer.mark_line("+", "c", &[]).unwrap();

    let widths: Vec<usize> = lines(printer.into_inner())
        .iter()
        .map(|line| visible_length(line))
        .collect();
    assert_eq!(widths, vec![5, 5, 5]);
}

#[test]
fn gutter_scope_around_several_lines() {
    let mut printer = Printer::with_writer(Vec::new(), 1);
    printer.gutter.push_all(1, "┃", Align::Middle);
    printer.println("inside", &[]).unwrap();
    printer.gutter.pop(1).unwrap();
    printer.println("outside", &[]).unwrap();

    assert_eq!(lines(printer.into_inner()), vec!["┃ inside", " outside"]);
}

#[test]
fn color_mark_uses_left_gutter() {
    let mut printer = Printer::with_options(
        Vec::new(),
        PrinterOptions::default().indent(1).left_gutter(true),
    );
    printer.mark_line_color(NamedColor::Green, "ok", &[]).unwrap();
    printer.println("plain", &[]).unwrap();

    assert_eq!(lines(printer.into_inner()), vec!["▏ ok", "  plain"]);
}

// ============================================================================
// Variants
// ============================================================================

#[test]
fn numbered_widens_without_touching_earlier_lines() {
    let mut printer = NumberedPrinter::with_writer(Vec::new());
    printer.line_number = 98;
    printer.println("x", &[]).unwrap();
    printer.println("y", &[]).unwrap();
    printer.println("z", &[]).unwrap();

    assert_eq!(lines(printer.into_inner()), vec!["99 x", "100 y", "101 z"]);
}

#[test]
fn numbered_listing_with_left_gutter() {
    let mut printer = NumberedPrinter::with_writer(Vec::new());
    printer.left.set_enabled(true);
    printer.println("<b>fn</b> main() {{", &[]).unwrap();
    printer
        .mark_line_color(NamedColor::Red, "    panic!();", &[])
        .unwrap();
    printer.println("}}", &[]).unwrap();

    assert_eq!(
        lines(printer.into_inner()),
        vec!["  1 fn main() {", "▏ 2     panic!();", "  3 }"]
    );
}

#[test]
fn numbered_color_mark_on_background() {
    let mut printer = NumberedPrinter::with_writer(Vec::new());
    printer
        .mark_line_color(Color::Rgb(200, 0, 0), "x", &[])
        .unwrap();

    let out = String::from_utf8(printer.into_inner()).unwrap();
    assert!(out.starts_with("\x1b[48;2;200;0;0m"));
    assert_eq!(strip(&out), " 1 x\n");
}

#[test]
fn raw_printer_is_literal() {
    let mut printer = RawPrinter::with_writer(Vec::new());
    printer.println("<b>{}</b>\nline two").unwrap();
    assert_eq!(lines(printer.into_inner()), vec!["<b>{}</b>", "line two"]);
}

#[test]
fn comment_printer_line_and_block() {
    let mut printer = CommentPrinter::with_writer(Vec::new());
    printer.print_block("a\nb", &[]).unwrap();
    printer.println("c", &[]).unwrap();

    assert_eq!(
        lines(printer.into_inner()),
        vec!["/*  a", " */ b", "// c"]
    );
}

#[test]
fn status_bar_update_sequence() {
    let mut printer = StatusBarPrinter::with_writer(Vec::new());
    printer.println("work", &[]).unwrap();
    let bar = printer.status_bar().to_string();
    printer.update().unwrap();

    let out = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(out, format!("work\n{bar}\n\x1b[1A\x1b[2K{bar}\n"));
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn helpers_share_one_writer() {
    let mut out = Vec::new();
    helpers::indent(&mut out, 2, &["<u>a</u>"]).unwrap();
    helpers::aligned(&mut out, Align::Middle, 5, &["b"]).unwrap();

    assert_eq!(lines(out), vec!["  a", "  b  "]);
}

// ============================================================================
// LinePrinter
// ============================================================================

fn print_all(printer: &mut impl LinePrinter, items: &[&str]) {
    for item in items {
        printer.print_line("- {}", &[item]).unwrap();
    }
}

#[test]
fn line_printers_are_interchangeable() {
    let mut plain = Printer::with_writer(Vec::new(), 0);
    print_all(&mut plain, &["a", "b"]);
    assert_eq!(lines(plain.into_inner()), vec!["- a", "- b"]);

    let mut numbered = NumberedPrinter::with_writer(Vec::new());
    print_all(&mut numbered, &["a"]);
    assert_eq!(lines(numbered.into_inner()), vec![" 1 - a"]);
}
