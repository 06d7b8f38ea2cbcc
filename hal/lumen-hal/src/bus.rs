//! Display bus abstraction
//!
//! Provides the 4-wire command/data transport contract consumed by display
//! drivers. The contract mirrors what TFT controllers with a data/command
//! line expect: single command bytes framed by the data/command line, raw
//! payload words at a configurable word width, and explicit chip-select
//! release at the end of each command+payload group.

use crate::delay::DelayMs;

/// SPI word width for payload transfers
///
/// Controllers take command opcodes as single bytes but coordinate and
/// pixel payloads as 16-bit words. Drivers switch to [`WordWidth::Sixteen`]
/// before such payloads and restore [`WordWidth::Eight`] before the next
/// command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WordWidth {
    /// 8-bit frames (commands, single-byte arguments)
    Eight,
    /// 16-bit frames (coordinates, pixel colors)
    Sixteen,
}

/// Command/data transport to a display controller
///
/// Implementations own the SPI peripheral and the data/command and
/// chip-select lines. The driver core is written entirely against this
/// trait so it can be exercised against a mock that records the wire trace.
///
/// # Protocol invariant
///
/// After a controller has been armed for a pixel stream (RAMWR), exactly
/// the promised number of color words must follow before any other command
/// byte is issued. The transport does not police this - interleaving is a
/// protocol violation that silently desynchronizes the controller.
pub trait DisplayBus {
    /// Error type for transport failures
    type Error;

    /// Transmit one command byte
    ///
    /// Pulls the data/command line low and chip-select low, sends the byte
    /// at 8-bit width, then restores the data/command line high.
    /// Chip-select stays asserted so payload bytes can follow; callers
    /// release it with [`DisplayBus::deselect`] when the group is complete.
    fn write_command(&mut self, cmd: u8) -> Result<(), Self::Error>;

    /// Transmit one raw payload byte
    fn write_data8(&mut self, data: u8) -> Result<(), Self::Error>;

    /// Transmit one raw 16-bit payload word
    fn write_data16(&mut self, data: u16) -> Result<(), Self::Error>;

    /// Switch the payload word width
    fn set_word_width(&mut self, width: WordWidth) -> Result<(), Self::Error>;

    /// Release the chip-select line, ending the current command group
    fn deselect(&mut self) -> Result<(), Self::Error>;

    /// Pulse the reset line
    ///
    /// Holds reset high for 5 ms, pulses it low for 20 ms, then releases it
    /// and waits 150 ms for the controller to settle.
    fn hard_reset<D: DelayMs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;
}
