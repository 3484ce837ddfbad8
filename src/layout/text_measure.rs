//! Text Measurement
//!
//! Labels have no declared size; the layout engine asks for their intrinsic
//! size. A glyph is half an em wide per display column, a line is
//! `LINE_HEIGHT` em tall. Column widths come from `unicode-width`, so CJK
//! and most emoji count as two columns.

use unicode_width::UnicodeWidthStr;

/// Em fraction of one display column.
pub const GLYPH_ASPECT: f32 = 0.5;

/// Line height in em.
pub const LINE_HEIGHT: f32 = 1.25;

/// Display width of a string in columns (widest line).
pub fn string_width(s: &str) -> usize {
    s.lines().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Number of lines the text occupies. Empty text occupies none.
pub fn line_count(s: &str) -> usize {
    if s.is_empty() { 0 } else { s.lines().count().max(1) }
}

/// Intrinsic `(width, height)` of text set at `font_size`.
pub fn measure_text(s: &str, font_size: f32) -> (f32, f32) {
    let width = string_width(s) as f32 * font_size * GLYPH_ASPECT;
    let height = line_count(s) as f32 * font_size * LINE_HEIGHT;
    (width, height)
}
