//! embedded-graphics integration
//!
//! Adapter implementing [`DrawTarget`] so the session plugs into the
//! embedded-graphics ecosystem. This is the one place coordinates get
//! clipped: the raw drawing API forwards everything unchecked, but
//! `DrawTarget` promises out-of-bounds draws are safe, so the adapter
//! filters before delegating.

use embedded_graphics_core::pixelcolor::raw::{RawData, RawU16};
use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::prelude::*;
use embedded_graphics_core::primitives::Rectangle;

use lumen_hal::DisplayBus;

use crate::driver::Ili9341;

impl<B: DisplayBus> OriginDimensions for Ili9341<B> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl<B: DisplayBus> DrawTarget for Ili9341<B> {
    type Color = Rgb565;
    type Error = B::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0
                && coord.y >= 0
                && coord.x < self.width() as i32
                && coord.y < self.height() as i32
            {
                self.draw_pixel(coord.x as u16, coord.y as u16, RawU16::from(color).into_inner())?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        let drawable = area.intersection(&self.bounding_box());
        if drawable.size != Size::zero() {
            self.fill_rect(
                drawable.top_left.x as u16,
                drawable.top_left.y as u16,
                drawable.size.width as u16,
                drawable.size.height as u16,
                RawU16::from(color).into_inner(),
            )?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        self.fill_background(RawU16::from(color).into_inner())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_core::pixelcolor::Rgb565;
    use embedded_graphics_core::prelude::*;
    use embedded_graphics_core::primitives::Rectangle;

    use crate::driver::Ili9341;
    use crate::testbus::{decode_pixels, RecordingBus};

    fn session() -> Ili9341<RecordingBus> {
        Ili9341::new(RecordingBus::new())
    }

    #[test]
    fn test_draw_iter_filters_offscreen() {
        let mut display = session();
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), Rgb565::RED),
                Pixel(Point::new(3, 4), Rgb565::RED),
                Pixel(Point::new(240, 0), Rgb565::RED),
            ])
            .unwrap();

        let pixels = decode_pixels(&display.release().events);
        assert_eq!(pixels.len(), 1);
        assert_eq!((pixels[0].0, pixels[0].1), (3, 4));
    }

    #[test]
    fn test_fill_solid_clips_to_extents() {
        let mut display = session();
        display
            .fill_solid(
                &Rectangle::new(Point::new(238, 0), Size::new(4, 1)),
                Rgb565::WHITE,
            )
            .unwrap();

        let pixels = decode_pixels(&display.release().events);
        assert_eq!(pixels.len(), 2);
        assert!(pixels.iter().all(|&(x, _, _)| x < 240));
    }

    #[test]
    fn test_size_tracks_rotation() {
        let mut display = session();
        assert_eq!(display.size(), Size::new(240, 320));

        display
            .set_rotation(crate::driver::Rotation::Landscape)
            .unwrap();
        assert_eq!(display.size(), Size::new(320, 240));
    }
}
