//! Blocking delay abstraction
//!
//! Display initialization imposes fixed settle times that must be honored
//! as real blocking sleeps. The trait is deliberately minimal; any
//! `embedded-hal` delay implementation satisfies it through the blanket
//! impl below.

/// Blocking millisecond delay
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

// Any embedded-hal delay works unchanged.
impl<T: embedded_hal::delay::DelayNs> DelayMs for T {
    fn delay_ms(&mut self, ms: u32) {
        embedded_hal::delay::DelayNs::delay_ms(self, ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts milliseconds requested through the embedded-hal bridge
    struct CountingDelay {
        total_ns: u64,
    }

    impl embedded_hal::delay::DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    #[test]
    fn test_embedded_hal_bridge() {
        let mut delay = CountingDelay { total_ns: 0 };

        DelayMs::delay_ms(&mut delay, 150);
        assert_eq!(delay.total_ns, 150_000_000);

        DelayMs::delay_ms(&mut delay, 5);
        assert_eq!(delay.total_ns, 155_000_000);
    }
}
