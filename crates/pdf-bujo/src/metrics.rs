//! Text measurement
//!
//! Layout measures text with the standard Helvetica advance widths instead
//! of the embedded face, so page geometry does not depend on which font
//! file is installed.

use crate::constants::{GLYPH_UNITS_PER_EM, TEXT_WIDTH_SCALE};

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n..z
    334, 260, 334, 584, // {..~
];

/// Width used for characters outside the table
const FALLBACK_WIDTH: u16 = 556;

fn advance(ch: char) -> u16 {
    let code = ch as usize;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[code - 32]
    } else {
        FALLBACK_WIDTH
    }
}

/// Estimated rendered width of `text` at `font_size`
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| advance(ch) as u32).sum();
    units as f32 / GLYPH_UNITS_PER_EM * font_size * TEXT_WIDTH_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_printable_ascii() {
        assert_eq!(advance(' '), 278);
        assert_eq!(advance('A'), 667);
        assert_eq!(advance('a'), 556);
        assert_eq!(advance('~'), 584);
        assert_eq!(advance('é'), FALLBACK_WIDTH);
    }

    #[test]
    fn test_width_scales_with_size() {
        let small = text_width("Index", 12.0);
        let large = text_width("Index", 24.0);
        assert!((large - 2.0 * small).abs() < 1e-3);
        assert_eq!(text_width("", 24.0), 0.0);
    }

    #[test]
    fn test_digit_width() {
        // 556 units * 20pt * 0.95
        assert!((text_width("1", 20.0) - 10.564).abs() < 1e-3);
    }
}
