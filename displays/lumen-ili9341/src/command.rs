//! ILI9341 command set and power-up sequence
//!
//! Command opcodes follow the controller datasheet naming. The power-up
//! sequence reproduces the vendor-recommended register values (power,
//! gamma, frame rate) that the panel needs before the first pixel write.

/// Physical panel width in portrait orientation
pub const TFT_WIDTH: u16 = 240;
/// Physical panel height in portrait orientation
pub const TFT_HEIGHT: u16 = 320;

/// No operation
pub const NOP: u8 = 0x00;
/// Software reset
pub const SWRESET: u8 = 0x01;
/// Enter sleep mode
pub const SLPIN: u8 = 0x10;
/// Exit sleep mode
pub const SLPOUT: u8 = 0x11;
/// Display inversion off
pub const INVOFF: u8 = 0x20;
/// Display inversion on
pub const INVON: u8 = 0x21;
/// Gamma curve select
pub const GAMMASET: u8 = 0x26;
/// Display off (panel blanked, RAM retained)
pub const DISPOFF: u8 = 0x28;
/// Display on
pub const DISPON: u8 = 0x29;
/// Column address set
pub const CASET: u8 = 0x2A;
/// Page (row) address set
pub const PASET: u8 = 0x2B;
/// Memory write (arms the pixel stream)
pub const RAMWR: u8 = 0x2C;
/// Memory read
pub const RAMRD: u8 = 0x2E;
/// Memory access control (orientation / color order)
pub const MADCTL: u8 = 0x36;
/// Vertical scrolling start address
pub const VSCRSADD: u8 = 0x37;
/// Pixel format set
pub const PIXFMT: u8 = 0x3A;
/// Frame rate control (normal mode)
pub const FRMCTR1: u8 = 0xB1;
/// Display function control
pub const DFUNCTR: u8 = 0xB6;
/// Power control 1
pub const PWCTR1: u8 = 0xC0;
/// Power control 2
pub const PWCTR2: u8 = 0xC1;
/// VCOM control 1
pub const VMCTR1: u8 = 0xC5;
/// VCOM control 2
pub const VMCTR2: u8 = 0xC7;
/// Positive gamma correction
pub const GMCTRP1: u8 = 0xE0;
/// Negative gamma correction
pub const GMCTRN1: u8 = 0xE1;

/// Memory access control bits
pub mod madctl {
    /// Row address order
    pub const MY: u8 = 0x80;
    /// Column address order
    pub const MX: u8 = 0x40;
    /// Row/column exchange
    pub const MV: u8 = 0x20;
    /// Vertical refresh order
    pub const ML: u8 = 0x10;
    /// BGR color filter panel order
    pub const BGR: u8 = 0x08;
    /// Horizontal refresh order
    pub const MH: u8 = 0x04;
}

/// One step of the power-up sequence
///
/// A `settle` entry carries no argument bytes; the driver sleeps 150 ms
/// after issuing the command instead, giving the panel time to stabilize
/// (sleep-out and display-on need this per the datasheet).
#[derive(Debug, Clone, Copy)]
pub struct InitCommand {
    /// Command opcode
    pub command: u8,
    /// Argument bytes sent at 8-bit width after the opcode
    pub args: &'static [u8],
    /// Sleep 150 ms after issuing instead of sending arguments
    pub settle: bool,
}

impl InitCommand {
    const fn args(command: u8, args: &'static [u8]) -> Self {
        Self {
            command,
            args,
            settle: false,
        }
    }

    const fn settle(command: u8) -> Self {
        Self {
            command,
            args: &[],
            settle: true,
        }
    }
}

/// Power-up sequence for the ILI9341
///
/// Undocumented 0xEF/0xCF/0xED/0xE8/0xCB/0xF7/0xEA/0xF2 entries are
/// vendor magic carried over from the reference init code; the panel does
/// not come up reliably without them.
pub const INIT_SEQUENCE: &[InitCommand] = &[
    InitCommand::args(0xEF, &[0x03, 0x80, 0x02]),
    InitCommand::args(0xCF, &[0x00, 0xC1, 0x30]),
    InitCommand::args(0xED, &[0x64, 0x03, 0x12, 0x81]),
    InitCommand::args(0xE8, &[0x85, 0x00, 0x78]),
    InitCommand::args(0xCB, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    InitCommand::args(0xF7, &[0x20]),
    InitCommand::args(0xEA, &[0x00, 0x00]),
    InitCommand::args(PWCTR1, &[0x23]),
    InitCommand::args(PWCTR2, &[0x10]),
    InitCommand::args(VMCTR1, &[0x3E, 0x28]),
    InitCommand::args(VMCTR2, &[0x86]),
    InitCommand::args(MADCTL, &[madctl::MX | madctl::BGR]),
    InitCommand::args(VSCRSADD, &[0x00]),
    InitCommand::args(PIXFMT, &[0x55]),
    InitCommand::args(FRMCTR1, &[0x00, 0x18]),
    InitCommand::args(DFUNCTR, &[0x08, 0x82, 0x27]),
    InitCommand::args(0xF2, &[0x00]),
    InitCommand::args(GAMMASET, &[0x01]),
    InitCommand::args(
        GMCTRP1,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    InitCommand::args(
        GMCTRN1,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
    InitCommand::settle(SLPOUT),
    InitCommand::settle(DISPON),
];
