//! Recording transport for host-side tests
//!
//! Captures the full wire trace a drawing call produces, plus a small
//! interpreter that replays the addressing-window protocol back into
//! `(x, y, color)` pixels so geometry tests can assert on what would land
//! on the panel.

use lumen_hal::{DelayMs, DisplayBus, WordWidth};

use crate::command;

/// One recorded transport event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    Reset,
    Command(u8),
    Data8(u8),
    Data16(u16),
    Width(WordWidth),
    Deselect,
}

/// Mock transport that records every call
pub struct RecordingBus {
    pub events: Vec<BusEvent>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl DisplayBus for RecordingBus {
    type Error = core::convert::Infallible;

    fn write_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
        self.events.push(BusEvent::Command(cmd));
        Ok(())
    }

    fn write_data8(&mut self, data: u8) -> Result<(), Self::Error> {
        self.events.push(BusEvent::Data8(data));
        Ok(())
    }

    fn write_data16(&mut self, data: u16) -> Result<(), Self::Error> {
        self.events.push(BusEvent::Data16(data));
        Ok(())
    }

    fn set_word_width(&mut self, width: WordWidth) -> Result<(), Self::Error> {
        self.events.push(BusEvent::Width(width));
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        self.events.push(BusEvent::Deselect);
        Ok(())
    }

    fn hard_reset<D: DelayMs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        // Pulse timing is the real transport's concern; the trace only
        // needs to show that reset preceded everything else.
        self.events.push(BusEvent::Reset);
        Ok(())
    }
}

/// Delay that records requested sleeps instead of blocking
pub struct MockDelay {
    ns: Vec<u32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { ns: Vec::new() }
    }

    /// Recorded sleeps in milliseconds
    pub fn ms(&self) -> Vec<u32> {
        self.ns.iter().map(|&ns| ns / 1_000_000).collect()
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns.push(ns);
    }
}

/// Replay a trace into the pixels it writes, in emission order
///
/// Tracks CASET/PASET payloads and advances a cursor row-major through the
/// armed window for every color word that follows RAMWR. Windows are taken
/// at face value - a wrapped or out-of-range window replays to wrapped
/// coordinates, exactly as the controller would interpret them.
pub fn decode_pixels(events: &[BusEvent]) -> Vec<(u16, u16, u16)> {
    let mut pixels = Vec::new();
    let mut cols = (0u16, 0u16);
    let mut rows = (0u16, 0u16);
    let mut last_cmd = command::NOP;
    let mut payload: Vec<u16> = Vec::new();
    let mut cursor = (0u16, 0u16);

    for event in events {
        match *event {
            BusEvent::Command(cmd) => {
                last_cmd = cmd;
                payload.clear();
                if cmd == command::RAMWR {
                    cursor = (cols.0, rows.0);
                }
            }
            BusEvent::Data16(word) => match last_cmd {
                command::CASET => {
                    payload.push(word);
                    if payload.len() == 2 {
                        cols = (payload[0], payload[1]);
                    }
                }
                command::PASET => {
                    payload.push(word);
                    if payload.len() == 2 {
                        rows = (payload[0], payload[1]);
                    }
                }
                command::RAMWR => {
                    pixels.push((cursor.0, cursor.1, word));
                    if cursor.0 == cols.1 {
                        cursor.0 = cols.0;
                        cursor.1 = cursor.1.wrapping_add(1);
                    } else {
                        cursor.0 = cursor.0.wrapping_add(1);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_window() {
        let events = [
            BusEvent::Command(command::CASET),
            BusEvent::Data16(1),
            BusEvent::Data16(2),
            BusEvent::Command(command::PASET),
            BusEvent::Data16(5),
            BusEvent::Data16(5),
            BusEvent::Command(command::RAMWR),
            BusEvent::Data16(0xAAAA),
            BusEvent::Data16(0xBBBB),
        ];
        assert_eq!(
            decode_pixels(&events),
            vec![(1, 5, 0xAAAA), (2, 5, 0xBBBB)]
        );
    }
}
