//! Built-in 5x7 bitmap font.
//!
//! Covers printable ASCII 32..=95 (space through underscore, upper case only).
//! Text is folded before rasterizing: letters are upper-cased, common Latin
//! diacritics are stripped and Cyrillic is transliterated, so every locale's
//! titles render legibly. Anything left over draws as `?`.

use crate::canvas::{Rect, Surface};
use crate::color::Color;

/// Glyph cell width in font pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in font pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character in font pixels.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

const FIRST_CHAR: u32 = 32;
const FALLBACK: char = '?';

/// How text is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Fill color.
    pub color: Color,
    /// Integer scale: each font pixel becomes a `scale` x `scale` block.
    pub scale: u32,
    /// Double-strike one pixel to the right.
    pub bold: bool,
}

impl TextStyle {
    pub fn new(color: Color, scale: u32) -> Self {
        Self {
            color,
            scale: scale.max(1),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Rendered height of a line.
    pub fn line_height(&self) -> f64 {
        (GLYPH_HEIGHT * self.scale) as f64
    }
}

/// Row bitmask for a character (bit 4 is the leftmost column).
///
/// Characters outside the table map to `?`.
pub fn glyph(c: char) -> &'static [u8; 7] {
    let index = (c as u32)
        .checked_sub(FIRST_CHAR)
        .map(|i| i as usize)
        .filter(|&i| i < FONT_5X7.len())
        .unwrap_or((FALLBACK as u32 - FIRST_CHAR) as usize);
    &FONT_5X7[index]
}

/// Fold text into the font's character set.
pub fn fold_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        fold_char(c, &mut out);
    }
    out
}

fn fold_char(c: char, out: &mut String) {
    if c.is_ascii() {
        let upper = c.to_ascii_uppercase();
        let mapped = match upper {
            '`' => '\'',
            '{' => '(',
            '}' => ')',
            '|' => '/',
            '~' => '-',
            c if (' '..='_').contains(&c) => c,
            _ => FALLBACK,
        };
        out.push(mapped);
        return;
    }

    let mut upper = c.to_uppercase();
    let c = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };

    let folded: &str = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'Æ' => "AE",
        'Ç' => "C",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'Ñ' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'Ý' | 'Ÿ' => "Y",
        'ß' | 'ẞ' => "SS",
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "H",
        'Ґ' => "G",
        'Д' => "D",
        'Е' | 'Э' => "E",
        'Є' => "YE",
        'Ё' => "YO",
        'Ж' => "ZH",
        'З' => "Z",
        'И' | 'Й' | 'Ы' => "Y",
        'І' => "I",
        'Ї' => "YI",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "KH",
        'Ц' => "TS",
        'Ч' => "CH",
        'Ш' => "SH",
        'Щ' => "SHCH",
        'Ь' | 'Ъ' => "",
        'Ю' => "YU",
        'Я' => "YA",
        '\u{2018}' | '\u{2019}' | '\u{02BC}' => "'",
        '«' | '»' | '\u{201C}' | '\u{201D}' | '\u{201E}' => "\"",
        '\u{2013}' | '\u{2014}' => "-",
        '\u{2026}' => "...",
        _ => "?",
    };
    out.push_str(folded);
}

/// Width of `text` once folded, in surface pixels.
pub fn text_width(text: &str, style: &TextStyle) -> f64 {
    let chars = fold_text(text).chars().count() as u32;
    (chars * GLYPH_ADVANCE * style.scale) as f64
}

/// Rasterize `text` onto any surface through `fill_rect`.
///
/// The bottom row of each glyph sits on `baseline_y`. Returns the advance
/// width of the drawn text.
pub fn draw_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: f64,
    baseline_y: f64,
    style: &TextStyle,
) -> f64 {
    let scale = style.scale as f64;
    let top = baseline_y - style.line_height();
    let mut pen_x = x;

    for c in fold_text(text).chars() {
        let rows = glyph(c);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let px = pen_x + col as f64 * scale;
                let py = top + row as f64 * scale;
                surface.fill_rect(Rect::new(px, py, scale, scale), style.color);
                if style.bold {
                    surface.fill_rect(Rect::new(px + 1.0, py, scale, scale), style.color);
                }
            }
        }
        pen_x += (GLYPH_ADVANCE * style.scale) as f64;
    }

    pen_x - x
}

/// 5x7 glyph rows, one entry per character from space (32) to underscore (95).
#[rustfmt::skip]
const FONT_5X7: [[u8; 7]; 64] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00], // '!'
    [0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x00, 0x00], // '#'
    [0x04, 0x0E, 0x14, 0x0E, 0x05, 0x0E, 0x04], // '$'
    [0x19, 0x1A, 0x04, 0x0B, 0x13, 0x00, 0x00], // '%'
    [0x0C, 0x12, 0x0C, 0x12, 0x13, 0x0D, 0x00], // '&'
    [0x04, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00], // '('
    [0x04, 0x02, 0x02, 0x02, 0x02, 0x04, 0x00], // ')'
    [0x00, 0x15, 0x0E, 0x15, 0x00, 0x00, 0x00], // '*'
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x04, 0x04, 0x08], // ','
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00], // '.'
    [0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00], // '/'
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // '0'
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // '1'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // '2'
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // '3'
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // '4'
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // '5'
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // '6'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // '7'
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // '8'
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // '9'
    [0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00], // ':'
    [0x00, 0x04, 0x00, 0x00, 0x04, 0x04, 0x08], // ';'
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // '<'
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00], // '='
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // '>'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // '?'
    [0x0E, 0x11, 0x17, 0x15, 0x17, 0x10, 0x0E], // '@'
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // 'A'
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // 'B'
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // 'C'
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // 'D'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // 'E'
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // 'F'
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // 'G'
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // 'H'
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // 'I'
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // 'J'
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // 'K'
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // 'L'
    [0x11, 0x1B, 0x15, 0x11, 0x11, 0x11, 0x11], // 'M'
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11], // 'N'
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // 'O'
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // 'P'
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // 'Q'
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // 'R'
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // 'S'
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // 'T'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // 'U'
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // 'V'
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11], // 'W'
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // 'X'
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // 'Y'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // 'Z'
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E], // '['
    [0x10, 0x08, 0x04, 0x02, 0x01, 0x00, 0x00], // '\\'
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E], // ']'
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F], // '_'
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::TextureBuffer;

    #[test]
    fn test_fold_ascii() {
        assert_eq!(fold_text("Hello, World!"), "HELLO, WORLD!");
        assert_eq!(fold_text("a{b}c~"), "A(B)C-");
    }

    #[test]
    fn test_fold_latin_diacritics() {
        assert_eq!(fold_text("Müller Straße"), "MULLER STRASSE");
        assert_eq!(fold_text("Café"), "CAFE");
    }

    #[test]
    fn test_fold_cyrillic() {
        assert_eq!(fold_text("Шевченко"), "SHEVCHENKO");
        assert_eq!(fold_text("Хіп-хоп"), "KHIP-KHOP");
        assert_eq!(fold_text("ТОВ «Мороз»"), "TOV \"MOROZ\"");
    }

    #[test]
    fn test_unknown_char_is_question_mark() {
        assert_eq!(fold_text("a\u{4E2D}b"), "A?B");
        assert_eq!(glyph('\u{4E2D}'), glyph('?'));
        assert_eq!(glyph('z'), glyph('?'));
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(glyph(' '), &[0; 7]);
        assert_eq!(glyph('I'), &[0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E]);
    }

    #[test]
    fn test_text_width() {
        let style = TextStyle::new(Color::white(), 2);
        assert_eq!(text_width("ABC", &style), 36.0);
        assert_eq!(text_width("Ж", &style), 24.0);
    }

    #[test]
    fn test_draw_text_marks_pixels_above_baseline() {
        let mut buf = TextureBuffer::new(40, 20, Color::black());
        let style = TextStyle::new(Color::white(), 1);
        let width = draw_text(&mut buf, "I", 2.0, 10.0, &style);
        assert_eq!(width, 6.0);
        // Top bar of 'I' spans columns 1..=3 on the first glyph row.
        assert_eq!(buf.get(3, 3), Color::white());
        assert_eq!(buf.get(2, 3), Color::black());
        // Nothing drawn on or below the baseline.
        assert!((0..40).all(|x| buf.get(x, 10) == Color::black()));
    }

    #[test]
    fn test_bold_adds_pixels() {
        let style = TextStyle::new(Color::white(), 1);
        let mut plain = TextureBuffer::new(20, 10, Color::black());
        let mut bold = TextureBuffer::new(20, 10, Color::black());
        draw_text(&mut plain, "L", 0.0, 8.0, &style);
        draw_text(&mut bold, "L", 0.0, 8.0, &style.bold());
        let lit = |b: &TextureBuffer| b.data.iter().filter(|c| **c == Color::white()).count();
        assert!(lit(&bold) > lit(&plain));
    }
}
