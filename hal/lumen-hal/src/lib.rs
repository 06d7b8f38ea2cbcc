//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the transport abstraction that Lumen display drivers
//! render through. A driver never touches pins or an SPI peripheral
//! directly; it speaks the [`bus::DisplayBus`] contract, which can be
//! implemented by the bundled [`spi::SpiTransport`] for real hardware or by
//! a recording mock for host-side testing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Display driver (lumen-ili9341, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ SpiTransport  │       │ mock transport│
//! │ (embedded-hal)│       │ (tests)       │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::DisplayBus`] - command/data transport to a display controller
//! - [`delay::DelayMs`] - blocking millisecond delays for settle times

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod delay;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use bus::{DisplayBus, WordWidth};
pub use delay::DelayMs;
pub use spi::{BusError, SpiTransport};
