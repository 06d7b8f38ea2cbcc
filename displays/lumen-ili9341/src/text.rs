//! Text rasterizer
//!
//! Expands 5x7 glyph bitmaps into pixel or block writes. No layout engine:
//! characters advance left to right with a one-column gap, strings never
//! wrap, and bytes index the glyph table directly (no UTF-8 decoding).

use lumen_hal::DisplayBus;

use crate::driver::Ili9341;
use crate::font;

impl<B: DisplayBus> Ili9341<B> {
    /// Draw one character
    ///
    /// Set glyph bits become `size`-square blocks of `fg` (single pixels
    /// when `size` is 1); clear bits become `bg` blocks unless `bg == fg`,
    /// which leaves the background untouched. A character whose top-left
    /// corner lies beyond the current extents is skipped entirely; one
    /// that starts inside and hangs off the edge is forwarded as-is like
    /// every other unchecked write.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        c: u8,
        size: u16,
        fg: u16,
        bg: u16,
    ) -> Result<(), B::Error> {
        if x >= self.width() || y >= self.height() {
            return Ok(());
        }

        let glyph = font::glyph(c);
        for (i, &column) in glyph.iter().enumerate() {
            let i = i as u16;
            let mut line = column;
            for j in 0..font::GLYPH_HEIGHT {
                let on = line & 0x01 != 0;
                line >>= 1;

                let color = if on {
                    fg
                } else if bg != fg {
                    bg
                } else {
                    continue;
                };

                if size == 1 {
                    self.draw_pixel(x + i, y + j, color)?;
                } else {
                    let bx = (x as u32 + i as u32 * size as u32) as u16;
                    let by = (y as u32 + j as u32 * size as u32) as u16;
                    self.fill_rect(bx, by, size, size, color)?;
                }
            }
        }

        Ok(())
    }

    /// Draw a string of bytes left to right
    ///
    /// Advance per character is `5 * size + 1` device pixels: the glyph
    /// width plus one column of spacing.
    pub fn draw_string(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        size: u16,
        fg: u16,
        bg: u16,
    ) -> Result<(), B::Error> {
        let advance = (font::GLYPH_WIDTH as u32 * size as u32 + 1) as u16;
        let mut xi = x;
        for c in text.bytes() {
            self.draw_char(xi, y, c, size, fg, bg)?;
            xi = xi.wrapping_add(advance);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::color;
    use crate::driver::Ili9341;
    use crate::font;
    use crate::testbus::{decode_pixels, RecordingBus};

    const FG: u16 = color::WHITE;
    const BG: u16 = color::BLACK;

    fn session() -> Ili9341<RecordingBus> {
        Ili9341::new(RecordingBus::new())
    }

    #[test]
    fn test_char_writes_all_forty_cells() {
        let mut display = session();
        display.draw_char(0, 0, b'A', 1, FG, BG).unwrap();

        let pixels = decode_pixels(&display.release().events);
        assert_eq!(pixels.len(), 40);

        // Every cell carries the color the glyph bit dictates
        let glyph = font::glyph(b'A');
        for (x, y, color) in pixels {
            let expected = if glyph[x as usize] >> y & 0x01 != 0 {
                FG
            } else {
                BG
            };
            assert_eq!(color, expected, "wrong color at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_char_foreground_cell_count() {
        let mut display = session();
        display.draw_char(0, 0, b'A', 1, FG, BG).unwrap();

        let pixels = decode_pixels(&display.release().events);
        let lit = pixels.iter().filter(|&&(_, _, c)| c == FG).count();
        // 'A' glyph 0x7C 0x12 0x11 0x12 0x7C has 16 set bits
        assert_eq!(lit, 16);
    }

    #[test]
    fn test_transparent_background_skips_clear_bits() {
        let mut display = session();
        display.draw_char(0, 0, b'A', 1, FG, FG).unwrap();

        let pixels = decode_pixels(&display.release().events);
        assert_eq!(pixels.len(), 16);
        assert!(pixels.iter().all(|&(_, _, c)| c == FG));
    }

    #[test]
    fn test_scaled_char_uses_blocks() {
        let mut display = session();
        display.draw_char(0, 0, b'A', 2, FG, BG).unwrap();

        let pixels = decode_pixels(&display.release().events);
        // 40 cells, each a 2x2 block
        assert_eq!(pixels.len(), 160);

        // Top row of column 0 is clear in 'A' (0x7C), rows 2-6 are set
        assert!(pixels.contains(&(0, 0, BG)));
        assert!(pixels.contains(&(1, 1, BG)));
        assert!(pixels.contains(&(0, 4, FG)));
        assert!(pixels.contains(&(1, 5, FG)));
    }

    #[test]
    fn test_offscreen_char_is_skipped() {
        let mut display = session();
        // Default portrait extents are 240x320; both checks are at-or-past
        display.draw_char(240, 0, b'A', 1, FG, BG).unwrap();
        display.draw_char(0, 320, b'A', 1, FG, BG).unwrap();
        assert!(display.release().events.is_empty());
    }

    #[test]
    fn test_string_advance() {
        let mut display = session();
        display.draw_string(0, 0, "AB", 1, FG, FG).unwrap();

        let pixels = decode_pixels(&display.release().events);
        // 'B' (0x7F first column) starts 6 pixels over, top row set
        assert!(pixels.contains(&(6, 0, FG)));
        // Nothing lands in the spacing column
        assert!(pixels.iter().all(|&(x, _, _)| x != 5));
    }

    #[test]
    fn test_scaled_string_advance() {
        let mut display = session();
        display.draw_string(0, 0, "!!", 3, FG, FG).unwrap();

        let pixels = decode_pixels(&display.release().events);
        // '!' is a single lit column (0x5F at column 2); second glyph
        // starts at x = 16, so its lit column spans x = 22..25
        assert!(pixels.contains(&(6, 0, FG)));
        assert!(pixels.contains(&(22, 0, FG)));
        assert!(!pixels.iter().any(|&(x, _, _)| (9..22).contains(&x)));
    }

    #[test]
    fn test_string_characters_clip_independently() {
        let mut display = session();
        // First character fits, second starts past the right edge
        display.draw_string(235, 0, "AB", 1, FG, FG).unwrap();

        let pixels = decode_pixels(&display.release().events);
        assert!(!pixels.is_empty());
        assert!(pixels.iter().all(|&(x, _, _)| x < 240));
    }
}
