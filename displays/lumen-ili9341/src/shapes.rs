//! Curve and line rasterizers
//!
//! Scan conversion for circles, lines and triangles, all expressed in
//! terms of the primitive window/run operations. Stepping math runs in
//! `i32` and is truncated back to device coordinates on emission, so
//! out-of-range intermediates wrap instead of trapping - the same
//! forwarded-as-is contract the primitives have.

use lumen_hal::DisplayBus;

use crate::driver::Ili9341;

impl<B: DisplayBus> Ili9341<B> {
    /// Draw a circle outline
    pub fn draw_circle(&mut self, xc: u16, yc: u16, r: u16, color: u16) -> Result<(), B::Error> {
        self.draw_circle_helper(xc, yc, r, 0x0F, color)
    }

    /// Draw selected quadrants of a circle outline
    ///
    /// Midpoint stepping over one octant; each step mirrors into up to
    /// eight points, gated per quadrant by `corners` (bit 0 = top-left,
    /// bit 1 = top-right, bit 2 = bottom-right, bit 3 = bottom-left).
    pub fn draw_circle_helper(
        &mut self,
        xc: u16,
        yc: u16,
        r: u16,
        corners: u8,
        color: u16,
    ) -> Result<(), B::Error> {
        let xc = xc as i32;
        let yc = yc as i32;
        let mut x: i32 = 0;
        let mut y: i32 = r as i32;
        let mut d: i32 = 3 - 2 * r as i32;

        while y >= x {
            x += 1;
            if d > 0 {
                y -= 1;
                d += 4 * (x - y) + 10;
            } else {
                d += 4 * x + 6;
            }

            if corners & 0x01 != 0 {
                self.draw_pixel((xc - y) as u16, (yc - x) as u16, color)?;
                self.draw_pixel((xc - x) as u16, (yc - y) as u16, color)?;
            }
            if corners & 0x02 != 0 {
                self.draw_pixel((xc + x) as u16, (yc - y) as u16, color)?;
                self.draw_pixel((xc + y) as u16, (yc - x) as u16, color)?;
            }
            if corners & 0x04 != 0 {
                self.draw_pixel((xc + x) as u16, (yc + y) as u16, color)?;
                self.draw_pixel((xc + y) as u16, (yc + x) as u16, color)?;
            }
            if corners & 0x08 != 0 {
                self.draw_pixel((xc - y) as u16, (yc + x) as u16, color)?;
                self.draw_pixel((xc - x) as u16, (yc + y) as u16, color)?;
            }
        }

        Ok(())
    }

    /// Fill a circle
    pub fn fill_circle(&mut self, xc: u16, yc: u16, r: u16, color: u16) -> Result<(), B::Error> {
        // The stepping loop never emits the x = 0 column; the central
        // diameter span covers it.
        self.draw_vline(xc, yc.wrapping_sub(r), r.wrapping_mul(2), color)?;
        self.fill_circle_helper(xc, yc, r, 0x03, color)
    }

    /// Fill selected halves of a circle
    ///
    /// Same stepping core as the outline, but each mirrored point becomes
    /// a vertical span so the interior is covered. Bit 0 of `corners`
    /// selects the right half, bit 1 the left half.
    pub fn fill_circle_helper(
        &mut self,
        xc: u16,
        yc: u16,
        r: u16,
        corners: u8,
        color: u16,
    ) -> Result<(), B::Error> {
        let xc = xc as i32;
        let yc = yc as i32;
        let mut x: i32 = 0;
        let mut y: i32 = r as i32;
        let mut d: i32 = 3 - 2 * r as i32;

        while y >= x {
            x += 1;
            if d > 0 {
                y -= 1;
                d += 4 * (x - y) + 10;
            } else {
                d += 4 * x + 6;
            }

            if corners & 0x01 != 0 {
                self.draw_vline((xc + x) as u16, (yc - y) as u16, (2 * y) as u16, color)?;
                self.draw_vline((xc + y) as u16, (yc - x) as u16, (2 * x) as u16, color)?;
            }
            if corners & 0x02 != 0 {
                self.draw_vline((xc - x) as u16, (yc - y) as u16, (2 * y) as u16, color)?;
                self.draw_vline((xc - y) as u16, (yc - x) as u16, (2 * x) as u16, color)?;
            }
        }

        Ok(())
    }

    /// Draw a line between two points
    ///
    /// Integer Bresenham generalized over all eight octants: the
    /// displacement splits into a fast axis (the longer one) and a slow
    /// axis, and each step either advances the fast axis alone or takes a
    /// diagonal when the accumulated error flips negative. Every pixel is
    /// its own window write; runs are not batched.
    pub fn draw_line(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        color: u16,
    ) -> Result<(), B::Error> {
        let mut dx = x1 as i32 - x0 as i32;
        let mut dy = y1 as i32 - y0 as i32;
        let incx = dx.signum();
        let incy = dy.signum();
        dx = dx.abs();
        dy = dy.abs();

        // Parallel step moves the fast axis only, diagonal step moves both
        let (pdx, pdy, ddx, ddy, dsd, dfd) = if dx > dy {
            (incx, 0, incx, incy, dy, dx)
        } else {
            (0, incy, incx, incy, dx, dy)
        };

        let mut x = x0 as i32;
        let mut y = y0 as i32;
        let mut err = dfd / 2;
        self.draw_pixel(x as u16, y as u16, color)?;

        for _ in 0..dfd {
            err -= dsd;
            if err < 0 {
                err += dfd;
                x += ddx;
                y += ddy;
            } else {
                x += pdx;
                y += pdy;
            }
            self.draw_pixel(x as u16, y as u16, color)?;
        }

        Ok(())
    }

    /// Outline a triangle with three lines
    pub fn draw_triangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: u16,
    ) -> Result<(), B::Error> {
        self.draw_line(x0, y0, x1, y1, color)?;
        self.draw_line(x1, y1, x2, y2, color)?;
        self.draw_line(x2, y2, x0, y0, color)
    }

    /// Fill a triangle with horizontal scanline runs
    ///
    /// Vertices are sorted by ascending y, then the two edge chains are
    /// interpolated with running numerators over the full edge heights.
    /// Division truncates toward zero; the exact edge pixels depend on it.
    pub fn fill_triangle(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: u16,
    ) -> Result<(), B::Error> {
        let (mut x0, mut y0) = (x0 as i32, y0 as i32);
        let (mut x1, mut y1) = (x1 as i32, y1 as i32);
        let (mut x2, mut y2) = (x2 as i32, y2 as i32);

        // Sort by y (y2 >= y1 >= y0)
        if y0 > y1 {
            core::mem::swap(&mut y0, &mut y1);
            core::mem::swap(&mut x0, &mut x1);
        }
        if y1 > y2 {
            core::mem::swap(&mut y2, &mut y1);
            core::mem::swap(&mut x2, &mut x1);
        }
        if y0 > y1 {
            core::mem::swap(&mut y0, &mut y1);
            core::mem::swap(&mut x0, &mut x1);
        }

        if y0 == y2 {
            // All three vertices on one scanline: single min..max run
            let mut a = x0;
            let mut b = x0;
            if x1 < a {
                a = x1;
            } else if x1 > b {
                b = x1;
            }
            if x2 < a {
                a = x2;
            } else if x2 > b {
                b = x2;
            }
            return self.draw_hline(a as u16, y0 as u16, (b - a + 1) as u16, color);
        }

        let dx01 = x1 - x0;
        let dy01 = y1 - y0;
        let dx02 = x2 - x0;
        let dy02 = y2 - y0;
        let dx12 = x2 - x1;
        let dy12 = y2 - y1;
        let mut sa = 0;
        let mut sb = 0;

        // Upper part: edges 0-1 and 0-2. A flat-bottom triangle (y1 == y2)
        // includes scanline y1 here and skips the second loop entirely;
        // otherwise y1 belongs to the lower part. Either way the loop
        // whose edge would have zero height never runs.
        let last = if y1 == y2 { y1 } else { y1 - 1 };

        let mut y = y0;
        while y <= last {
            let mut a = x0 + sa / dy01;
            let mut b = x0 + sb / dy02;
            sa += dx01;
            sb += dx02;
            if a > b {
                core::mem::swap(&mut a, &mut b);
            }
            self.draw_hline(a as u16, y as u16, (b - a + 1) as u16, color)?;
            y += 1;
        }

        // Lower part: edges 1-2 and 0-2
        sa = dx12 * (y - y1);
        sb = dx02 * (y - y0);
        while y <= y2 {
            let mut a = x1 + sa / dy12;
            let mut b = x0 + sb / dy02;
            sa += dx12;
            sb += dx02;
            if a > b {
                core::mem::swap(&mut a, &mut b);
            }
            self.draw_hline(a as u16, y as u16, (b - a + 1) as u16, color)?;
            y += 1;
        }

        Ok(())
    }
}
