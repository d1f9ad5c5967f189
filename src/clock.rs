//! A monotonic time source used by time-bounded radio operations.

#[cfg(feature = "std")]
extern crate std;

/// A monotonic millisecond counter.
///
/// The value may wrap around; the driver only ever looks at the difference
/// between two readings (computed with wrapping arithmetic).
/// Implementations must not be affected by wall-clock adjustments.
///
/// On bare metal this is usually backed by a hardware timer:
/// ```ignore
/// struct Ticks<'a>(&'a Timer);
///
/// impl Clock for Ticks<'_> {
///     fn now_ms(&mut self) -> u32 {
///         self.0.now().duration_since_epoch().to_millis() as u32
///     }
/// }
/// ```
pub trait Clock {
    /// The current time in milliseconds.
    fn now_ms(&mut self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now_ms(&mut self) -> u32 {
        (**self).now_ms()
    }
}

/// A [`Clock`] backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&mut self) -> u32 {
        // truncation is fine; readings are compared with wrapping_sub()
        self.start.elapsed().as_millis() as u32
    }
}

#[cfg(test)]
mod test {
    use super::Clock;

    struct Counter(u32);

    impl Clock for Counter {
        fn now_ms(&mut self) -> u32 {
            self.0 = self.0.wrapping_add(1);
            self.0
        }
    }

    #[test]
    fn borrowed_clock() {
        let mut counter = Counter(u32::MAX);
        let mut borrowed = &mut counter;
        assert_eq!(borrowed.now_ms(), 0);
        assert_eq!(counter.now_ms(), 1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_clock_is_monotonic() {
        let mut clock = super::StdClock::new();
        let first = clock.now_ms();
        assert!(clock.now_ms().wrapping_sub(first) < 1000);
    }
}
