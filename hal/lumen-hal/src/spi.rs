//! SPI display transport
//!
//! Concrete [`DisplayBus`] implementation over `embedded-hal` 1.0 traits:
//! an SPI bus capable of both 8-bit and 16-bit frames, plus data/command,
//! chip-select and optional reset output pins.
//!
//! ILI9341-class panels run SPI mode 3 at up to 40 MHz; the SPI peripheral
//! is expected to be configured accordingly before it is handed over.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::bus::{DisplayBus, WordWidth};
use crate::delay::DelayMs;

/// Transport failure
///
/// Wraps the underlying SPI and GPIO errors as distinct kinds so drivers
/// can pass them through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError<SpiE, PinE> {
    /// SPI bus fault
    Spi(SpiE),
    /// Control pin fault
    Pin(PinE),
}

/// 4-wire SPI transport for display controllers
///
/// Owns the SPI peripheral and control lines. The word width is tracked so
/// payload writes use the framing the driver last requested; commands are
/// always sent as single 8-bit frames with the data/command line low.
pub struct SpiTransport<SPI, DC, CS, RST> {
    spi: SPI,
    /// Data/command line (low = command, high = data)
    dc: DC,
    /// Chip-select line (active low)
    cs: CS,
    /// Reset line (active low), if wired
    rst: Option<RST>,
    width: WordWidth,
}

impl<SPI, DC, CS, RST> SpiTransport<SPI, DC, CS, RST> {
    /// Create a new transport from an SPI peripheral and control pins
    ///
    /// Pin idle states are established by [`DisplayBus::hard_reset`] during
    /// driver initialization.
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: Option<RST>) -> Self {
        Self {
            spi,
            dc,
            cs,
            rst,
            width: WordWidth::Eight,
        }
    }

    /// Tear down the transport and return the owned peripherals
    pub fn release(self) -> (SPI, DC, CS, Option<RST>) {
        (self.spi, self.dc, self.cs, self.rst)
    }
}

impl<SPI, DC, CS, RST, PinE> DisplayBus for SpiTransport<SPI, DC, CS, RST>
where
    SPI: SpiBus<u8> + SpiBus<u16>,
    DC: OutputPin<Error = PinE>,
    CS: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    type Error = BusError<<SPI as embedded_hal::spi::ErrorType>::Error, PinE>;

    fn write_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(BusError::Pin)?;
        self.cs.set_low().map_err(BusError::Pin)?;
        SpiBus::<u8>::write(&mut self.spi, &[cmd]).map_err(BusError::Spi)?;
        self.dc.set_high().map_err(BusError::Pin)
    }

    fn write_data8(&mut self, data: u8) -> Result<(), Self::Error> {
        SpiBus::<u8>::write(&mut self.spi, &[data]).map_err(BusError::Spi)
    }

    fn write_data16(&mut self, data: u16) -> Result<(), Self::Error> {
        SpiBus::<u16>::write(&mut self.spi, &[data]).map_err(BusError::Spi)
    }

    fn set_word_width(&mut self, width: WordWidth) -> Result<(), Self::Error> {
        self.width = width;
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        // The bus must be idle before chip-select changes state.
        match self.width {
            WordWidth::Eight => SpiBus::<u8>::flush(&mut self.spi),
            WordWidth::Sixteen => SpiBus::<u16>::flush(&mut self.spi),
        }
        .map_err(BusError::Spi)?;
        self.cs.set_high().map_err(BusError::Pin)
    }

    fn hard_reset<D: DelayMs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(BusError::Pin)?;
        self.dc.set_high().map_err(BusError::Pin)?;

        if let Some(rst) = self.rst.as_mut() {
            rst.set_high().map_err(BusError::Pin)?;
            delay.delay_ms(5);
            rst.set_low().map_err(BusError::Pin)?;
            delay.delay_ms(20);
            rst.set_high().map_err(BusError::Pin)?;
        }
        // Controller settle time after releasing reset
        delay.delay_ms(150);

        Ok(())
    }
}
