//! Text layout: turns a string into glyph blits on the frame buffer.
//!
//! Layout works in fixed cells. Each character occupies `font.width()`
//! columns plus a one-column gap; rows are [`GLYPH_HEIGHT`] pixels apart.
//!
//! ```text
//!  origin
//!    ┌─────┐ ┌─────┐ ┌─────┐
//!    │glyph│ │glyph│ │glyph│ ...   ← wraps to x = 0 when the next glyph
//!    └─────┘ └─────┘ └─────┘         would reach the right edge
//!    ┌─────┐
//!    │glyph│ ...                   ← stops when a row would reach the
//!    └─────┘                         bottom edge
//! ```
//!
//! Glyphs overwrite their whole cell (set and cleared bits alike) but not
//! the gap column. Nothing is cleared beforehand, so repeated calls overlay
//! earlier text. Clipping happens per pixel in
//! [`Framebuffer::set_pixel`].

use crate::font::{Font, GLYPH_HEIGHT};
use crate::framebuffer::{DisplaySize, Framebuffer};

/// Horizontal gap between glyph cells, in pixels.
pub const GLYPH_SPACING: i32 = 1;

/// Where rendering stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextCursor {
    /// X position of the next cell.
    pub x: i32,
    /// Y position of the current row.
    pub y: i32,
    /// Characters consumed, drawable or not.
    pub consumed: usize,
    /// `true` if characters were dropped at the bottom of the display.
    pub truncated: bool,
}

/// Render `text` into `framebuffer` starting at `(x, y)`.
///
/// For every character:
///
/// 1. A glyph outside the font's range draws nothing but still takes a cell.
/// 2. Otherwise all `width × 8` pixels of the cell are written.
/// 3. The cursor moves one cell right.
/// 4. If the next glyph's right edge would reach the display width, the
///    cursor moves to `x = 0` of the next row.
/// 5. If the row's bottom edge would reach the display height, rendering
///    stops and the remaining characters are dropped.
///
/// Does not touch the bus; the caller decides when to flush.
pub fn render<SIZE: DisplaySize>(
    framebuffer: &mut Framebuffer<SIZE>,
    font: &Font<'_>,
    text: &str,
    x: i32,
    y: i32,
) -> TextCursor {
    let glyph_width = i32::from(font.width());
    let cell_height = i32::from(GLYPH_HEIGHT);
    let width = i32::from(SIZE::WIDTH);
    let height = i32::from(SIZE::HEIGHT);

    let mut cursor = TextCursor {
        x,
        y,
        consumed: 0,
        truncated: false,
    };
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if let Some(glyph) = font.glyph(ch) {
            blit(framebuffer, glyph, cursor.x, cursor.y);
        }
        cursor.consumed += 1;

        // Saturating: an origin near i32::MAX must wrap or stop, not overflow.
        cursor.x = cursor.x.saturating_add(glyph_width + GLYPH_SPACING);
        if cursor.x.saturating_add(glyph_width) >= width {
            cursor.x = 0;
            cursor.y = cursor.y.saturating_add(cell_height);
        }

        if cursor.y.saturating_add(cell_height - 1) >= height {
            cursor.truncated = chars.next().is_some();
            break;
        }
    }

    cursor
}

/// Write one glyph's cell at `(x, y)`, bit 0 of each column at the top.
fn blit<SIZE: DisplaySize>(framebuffer: &mut Framebuffer<SIZE>, glyph: &[u8], x: i32, y: i32) {
    for (column, &bits) in (0i32..).zip(glyph) {
        let Some(px) = x.checked_add(column) else {
            return;
        };
        for row in 0..i32::from(GLYPH_HEIGHT) {
            let Some(py) = y.checked_add(row) else {
                break;
            };
            framebuffer.set_pixel(px, py, bits & (1 << row) != 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FONT_5X7;
    use crate::framebuffer::DisplaySize128x64;
    use crate::mock::DisplaySize16x16;

    /// Three-column glyphs: 'a' is a solid block, 'b' a single top pixel.
    const TINY_DATA: [u8; 6] = [0xFF, 0xFF, 0xFF, 0x01, 0x00, 0x00];
    const TINY: Font<'static> = Font::new(&TINY_DATA, b'a', 3);

    type Fb = Framebuffer<DisplaySize128x64>;

    /// Column bytes of the 8-row cell whose top-left pixel is `(x, y)`.
    fn cell(fb: &Fb, x: i32, y: i32, width: i32) -> Vec<u8> {
        (x..x + width)
            .map(|cx| {
                (0..8).fold(0u8, |acc, row| {
                    acc | (u8::from(fb.pixel(cx, y + row)) << row)
                })
            })
            .collect()
    }

    #[test]
    fn glyph_columns_land_top_bit_first() {
        let mut fb = Fb::new();
        render(&mut fb, &FONT_5X7, "A", 0, 0);

        assert_eq!(fb.page(0)[..5], [0x7E, 0x11, 0x11, 0x11, 0x7E]);
        assert_eq!(fb.page(0)[5], 0);
    }

    #[test]
    fn unaligned_origin_spans_two_pages() {
        let mut fb = Fb::new();
        render(&mut fb, &FONT_5X7, "A", 10, 10);

        assert_eq!(cell(&fb, 10, 10, 5), vec![0x7E, 0x11, 0x11, 0x11, 0x7E]);
        // First column of 'A' is 0x7E, rows 11..=16: bits 3..=7 of page 1
        // and bit 0 of page 2.
        assert_eq!(fb.page(1)[10], 0xF8);
        assert_eq!(fb.page(2)[10], 0x01);
    }

    #[test]
    fn cursor_advances_by_width_plus_gap() {
        let mut fb = Fb::new();
        let cursor = render(&mut fb, &FONT_5X7, "AB", 0, 0);

        assert_eq!(cell(&fb, 6, 0, 5), vec![0x7F, 0x49, 0x49, 0x49, 0x36]);
        assert_eq!(cursor.x, 12);
        assert_eq!(cursor.y, 0);
        assert_eq!(cursor.consumed, 2);
        assert!(!cursor.truncated);
    }

    #[test]
    fn glyph_overwrites_its_cell_but_not_the_gap() {
        let mut fb = Fb::new();
        for x in 0..8 {
            for y in 0..8 {
                fb.set_pixel(x, y, true);
            }
        }

        render(&mut fb, &FONT_5X7, " ", 0, 0);

        assert_eq!(fb.page(0)[..5], [0; 5]);
        assert_eq!(fb.page(0)[5..8], [0xFF; 3]);
    }

    #[test]
    fn unsupported_characters_keep_their_cell() {
        let mut fb = Fb::new();
        fb.set_pixel(2, 2, true);

        let cursor = render(&mut fb, &FONT_5X7, "\u{7}é!", 0, 0);

        // The pre-existing pixel survives; nothing was drawn in either cell.
        assert!(fb.pixel(2, 2));
        assert_eq!(cell(&fb, 6, 0, 5), vec![0; 5]);
        // '!' lands in the third cell.
        assert_eq!(cell(&fb, 12, 0, 5), vec![0x00, 0x00, 0x5F, 0x00, 0x00]);
        assert_eq!(cursor.consumed, 3);
    }

    #[test]
    fn empty_string_changes_nothing() {
        let mut fb = Fb::new();
        fb.set_pixel(64, 32, true);
        let before = fb.as_bytes().to_vec();

        let cursor = render(&mut fb, &FONT_5X7, "", 7, 9);

        assert_eq!(fb.as_bytes(), &before[..]);
        assert_eq!((cursor.x, cursor.y, cursor.consumed), (7, 9, 0));
    }

    #[test]
    fn wraps_when_next_glyph_would_reach_right_edge() {
        let mut fb = Fb::new();
        // 'A' at x = 120, cursor moves to 126, 126 + 5 >= 128 so 'B' wraps.
        let cursor = render(&mut fb, &FONT_5X7, "AB", 120, 8);

        assert_eq!(cell(&fb, 120, 8, 5), vec![0x7E, 0x11, 0x11, 0x11, 0x7E]);
        assert_eq!(cell(&fb, 0, 16, 5), vec![0x7F, 0x49, 0x49, 0x49, 0x36]);
        assert!(fb.page(1)[126..].iter().all(|&b| b == 0));
        assert_eq!((cursor.x, cursor.y), (6, 16));
    }

    #[test]
    fn full_row_holds_twenty_one_glyphs() {
        let mut fb = Fb::new();
        let text = "ABCDEFGHIJKLMNOPQRSTU";
        let cursor = render(&mut fb, &FONT_5X7, text, 0, 0);

        // The 21st glyph sits at x = 120 and the cursor wraps after it.
        assert_eq!(cell(&fb, 120, 0, 5), cell_of('U'));
        assert_eq!((cursor.x, cursor.y), (0, 8));

        let mut fb = Fb::new();
        render(&mut fb, &FONT_5X7, "ABCDEFGHIJKLMNOPQRSTUV", 0, 0);
        assert_eq!(cell(&fb, 0, 8, 5), cell_of('V'));
    }

    fn cell_of(ch: char) -> Vec<u8> {
        FONT_5X7.glyph(ch).unwrap().to_vec()
    }

    #[test]
    fn stops_when_next_row_would_reach_bottom() {
        // 16×16 with 3-wide glyphs: cells at x = 0, 4, 8, 12, then the
        // cursor reaches 16 and wraps. Row 8 is the last that fits.
        let mut full = Framebuffer::<DisplaySize16x16>::new();
        let cursor = render(&mut full, &TINY, "aaaaaaaa", 0, 0);
        assert_eq!(cursor.consumed, 8);
        assert!(!cursor.truncated);
        assert_eq!(cursor.y, 16);
        for page in 0..2 {
            for (x, &byte) in full.page(page).iter().enumerate() {
                let expected = if x % 4 == 3 { 0x00 } else { 0xFF };
                assert_eq!(byte, expected, "page {} column {}", page, x);
            }
        }

        let mut longer = Framebuffer::<DisplaySize16x16>::new();
        let cursor = render(&mut longer, &TINY, "aaaaaaaabbbb", 0, 0);
        assert_eq!(cursor.consumed, 8);
        assert!(cursor.truncated);

        // The dropped characters wrote nothing.
        assert_eq!(full.as_bytes(), longer.as_bytes());
    }

    #[test]
    fn unaligned_origin_stops_before_clipped_row() {
        let mut fb = Fb::new();
        // Rows at y = 50 and 58; 58 + 7 >= 64 so the second row never starts.
        let text = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let cursor = render(&mut fb, &FONT_5X7, text, 0, 50);

        assert_eq!(cursor.consumed, 21);
        assert!(cursor.truncated);
        assert_eq!(cursor.y, 58);
        for x in 0..128 {
            for y in 58..64 {
                assert!(!fb.pixel(x, y), "pixel ({}, {}) should be off", x, y);
            }
        }
    }

    #[test]
    fn partially_visible_glyph_clips_per_pixel() {
        let mut fb = Framebuffer::<DisplaySize16x16>::new();
        render(&mut fb, &TINY, "a", -1, -3);

        // Columns -1..2, rows -3..5 of a solid block; visible part 0..2 × 0..5.
        for x in 0..16 {
            for y in 0..16 {
                assert_eq!(fb.pixel(x, y), x < 2 && y < 5, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn origin_near_i32_max_x_wraps_without_overflow() {
        let mut fb = Fb::new();
        let cursor = render(&mut fb, &FONT_5X7, "AB", i32::MAX - 2, 0);

        // 'A' is entirely off-screen; the saturated cursor wraps and 'B'
        // lands at the start of the next row.
        assert_eq!(cell(&fb, 0, 0, 5), vec![0; 5]);
        assert_eq!(cell(&fb, 0, 8, 5), cell_of('B'));
        assert_eq!((cursor.x, cursor.y, cursor.consumed), (6, 8, 2));
    }

    #[test]
    fn origin_near_i32_max_y_stops_without_overflow() {
        let mut fb = Fb::new();
        let cursor = render(&mut fb, &FONT_5X7, "AB", 0, i32::MAX - 3);

        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(cursor.consumed, 1);
        assert!(cursor.truncated);
    }

    #[test]
    fn overlays_existing_content() {
        let mut fb = Fb::new();
        render(&mut fb, &FONT_5X7, "A", 0, 0);
        render(&mut fb, &FONT_5X7, "B", 0, 8);

        assert_eq!(cell(&fb, 0, 0, 5), cell_of('A'));
        assert_eq!(cell(&fb, 0, 8, 5), cell_of('B'));
    }
}
