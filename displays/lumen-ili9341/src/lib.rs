//! ILI9341 QVGA TFT display driver
//!
//! Unbuffered rendering core for 240x320 ILI9341 panels over 4-wire SPI.
//! Drawing operations scan-convert directly into addressing-window bursts:
//! each shape becomes a sequence of rectangular write windows followed by
//! exactly as many RGB565 words as the window holds, streamed straight to
//! the controller. No framebuffer is held in memory.
//!
//! # Architecture
//!
//! ```text
//! draw_circle / draw_line / fill_triangle / draw_string
//!                      │  scan conversion
//!                      ▼
//! draw_pixel / draw_hline / draw_vline / fill_rect
//!                      │  window + color run
//!                      ▼
//! set_address_window ──► CASET / PASET / RAMWR + w*h color words
//!                      │
//!                      ▼
//!            lumen_hal::DisplayBus (SPI transport or test mock)
//! ```
//!
//! # Contract
//!
//! Coordinates are not validated anywhere in the core. The panel has no
//! read-back channel, so an out-of-range window corrupts the screen
//! silently rather than failing; keeping draws inside the current extents
//! is the caller's responsibility. The only runtime failure is a transport
//! error, passed through unmodified. The optional `graphics` feature adds
//! an embedded-graphics `DrawTarget` adapter that does clip.
//!
//! # Features
//!
//! - `graphics`: embedded-graphics `DrawTarget` integration
//! - `defmt`: `defmt::Format` derives on public types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod command;
pub mod driver;
pub mod font;

mod shapes;
mod text;

#[cfg(feature = "graphics")]
mod graphics;

#[cfg(test)]
mod testbus;

// Re-export key types at crate root for convenience
pub use driver::{Ili9341, Rotation};
pub use lumen_hal::{BusError, DelayMs, DisplayBus, SpiTransport, WordWidth};
