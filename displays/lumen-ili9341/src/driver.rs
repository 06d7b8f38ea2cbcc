//! Display session and primitive rasterizer
//!
//! [`Ili9341`] owns the transport and the post-rotation extents. Every
//! drawing operation decomposes into the same two-phase wire pattern: arm a
//! rectangular addressing window, then stream exactly `w*h` RGB565 words
//! into it. Nothing is buffered - pixels go straight onto the bus.
//!
//! Coordinates are never validated. A window that leaves the panel extents
//! is forwarded to the controller as-is and corrupts the screen silently;
//! there is no error channel on a write-only display. Callers hold the
//! bounds contract (the optional `graphics` adapter clips, this core does
//! not).

use lumen_hal::{DelayMs, DisplayBus, WordWidth};

use crate::command::{self, madctl, INIT_SEQUENCE, TFT_HEIGHT, TFT_WIDTH};

/// Panel orientation
///
/// The four memory-access-control settings the controller supports.
/// Landscape variants exchange rows and columns, swapping the reported
/// extents between 240x320 and 320x240.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// 240x320, connector at the bottom
    Portrait,
    /// 320x240, rotated 90 degrees clockwise
    Landscape,
    /// 240x320, upside down
    PortraitFlipped,
    /// 320x240, rotated 270 degrees clockwise
    LandscapeFlipped,
}

impl Rotation {
    /// Map a numeric orientation (reduced modulo 4) to a rotation
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::Portrait,
            1 => Rotation::Landscape,
            2 => Rotation::PortraitFlipped,
            _ => Rotation::LandscapeFlipped,
        }
    }

    /// Memory access control byte for this orientation
    pub fn madctl(self) -> u8 {
        match self {
            Rotation::Portrait => madctl::MX | madctl::BGR,
            Rotation::Landscape => madctl::MV | madctl::BGR,
            Rotation::PortraitFlipped => madctl::MY | madctl::BGR,
            Rotation::LandscapeFlipped => madctl::MX | madctl::MY | madctl::MV | madctl::BGR,
        }
    }

    /// Post-rotation extents as (width, height)
    pub fn extents(self) -> (u16, u16) {
        match self {
            Rotation::Portrait | Rotation::PortraitFlipped => (TFT_WIDTH, TFT_HEIGHT),
            Rotation::Landscape | Rotation::LandscapeFlipped => (TFT_HEIGHT, TFT_WIDTH),
        }
    }
}

/// ILI9341 display session
///
/// One instance per physical panel, alive for the process lifetime. All
/// drawing goes through `&mut self`, so exclusive access is a compile-time
/// property; wrap the session in a mutex to share it across threads.
pub struct Ili9341<B> {
    bus: B,
    width: u16,
    height: u16,
    rotation: Rotation,
}

impl<B: DisplayBus> Ili9341<B> {
    /// Create a session over a transport
    ///
    /// The panel is not touched until [`Ili9341::init`] runs.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            width: TFT_WIDTH,
            height: TFT_HEIGHT,
            rotation: Rotation::Portrait,
        }
    }

    /// Reset the panel and run the power-up sequence
    ///
    /// Blocks for the reset pulse and the sleep-out/display-on settle
    /// times, roughly half a second in total.
    pub fn init<D: DelayMs>(&mut self, delay: &mut D) -> Result<(), B::Error> {
        self.bus.hard_reset(delay)?;

        for entry in INIT_SEQUENCE {
            self.bus.write_command(entry.command)?;
            if entry.settle {
                delay.delay_ms(150);
            } else {
                for &arg in entry.args {
                    self.bus.write_data8(arg)?;
                }
            }
            self.bus.deselect()?;
        }

        Ok(())
    }

    /// Current width in pixels (post-rotation)
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Current height in pixels (post-rotation)
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Current orientation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Tear down the session and return the transport
    pub fn release(self) -> B {
        self.bus
    }

    /// Rotate the panel, swapping the reported extents for the landscape
    /// orientations
    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<(), B::Error> {
        self.bus.write_command(command::MADCTL)?;
        self.bus.write_data8(rotation.madctl())?;
        self.bus.deselect()?;

        let (width, height) = rotation.extents();
        self.width = width;
        self.height = height;
        self.rotation = rotation;
        Ok(())
    }

    /// Arm a rectangular write window
    ///
    /// Issues the column and row address pair, then leaves the controller
    /// armed for memory write. Exactly `w*h` 16-bit color words must follow
    /// before any other command, and the caller releases chip-select once
    /// the stream is complete - anything else desynchronizes the
    /// controller.
    pub fn set_address_window(&mut self, x: u16, y: u16, w: u16, h: u16) -> Result<(), B::Error> {
        let x2 = x.wrapping_add(w).wrapping_sub(1);
        let y2 = y.wrapping_add(h).wrapping_sub(1);

        self.bus.write_command(command::CASET)?;
        self.bus.set_word_width(WordWidth::Sixteen)?;
        self.bus.write_data16(x)?;
        self.bus.write_data16(x2)?;
        self.bus.set_word_width(WordWidth::Eight)?;
        self.bus.deselect()?;

        self.bus.write_command(command::PASET)?;
        self.bus.set_word_width(WordWidth::Sixteen)?;
        self.bus.write_data16(y)?;
        self.bus.write_data16(y2)?;
        self.bus.set_word_width(WordWidth::Eight)?;
        self.bus.deselect()?;

        self.bus.write_command(command::RAMWR)
    }

    /// Stream `count` copies of a color word into the armed window
    fn write_color_run(&mut self, color: u16, count: u16) -> Result<(), B::Error> {
        self.bus.set_word_width(WordWidth::Sixteen)?;
        for _ in 0..count {
            self.bus.write_data16(color)?;
        }
        self.bus.set_word_width(WordWidth::Eight)?;
        self.bus.deselect()
    }

    /// Set a single pixel
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), B::Error> {
        self.set_address_window(x, y, 1, 1)?;
        self.write_color_run(color, 1)
    }

    /// Draw a horizontal run of `w` pixels starting at (x, y)
    pub fn draw_hline(&mut self, x: u16, y: u16, w: u16, color: u16) -> Result<(), B::Error> {
        self.set_address_window(x, y, w, 1)?;
        self.write_color_run(color, w)
    }

    /// Draw a vertical run of `h` pixels starting at (x, y)
    pub fn draw_vline(&mut self, x: u16, y: u16, h: u16, color: u16) -> Result<(), B::Error> {
        self.set_address_window(x, y, 1, h)?;
        self.write_color_run(color, h)
    }

    /// Fill a w x h rectangle, streamed row-major
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: u16) -> Result<(), B::Error> {
        self.set_address_window(x, y, w, h)?;

        self.bus.set_word_width(WordWidth::Sixteen)?;
        for _ in 0..h {
            for _ in 0..w {
                self.bus.write_data16(color)?;
            }
        }
        self.bus.set_word_width(WordWidth::Eight)?;
        self.bus.deselect()
    }

    /// Outline a rectangle with its four edge lines
    ///
    /// Corner pixels are written twice, which is harmless for a solid
    /// color.
    pub fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: u16) -> Result<(), B::Error> {
        self.draw_hline(x, y, w, color)?;
        self.draw_hline(x, y.wrapping_add(h).wrapping_sub(1), w, color)?;
        self.draw_vline(x, y, h, color)?;
        self.draw_vline(x.wrapping_add(w).wrapping_sub(1), y, h, color)
    }

    /// Fill the whole screen with one color
    ///
    /// The panel is blanked for the duration of the fill so the slow
    /// full-screen sweep is never visible; the display-off/display-on
    /// bracket is part of the operation, not an optimization.
    pub fn fill_background(&mut self, color: u16) -> Result<(), B::Error> {
        self.bus.write_command(command::DISPOFF)?;
        self.bus.deselect()?;

        self.fill_rect(0, 0, self.width, self.height, color)?;

        self.bus.write_command(command::DISPON)?;
        self.bus.deselect()
    }
}
