use std::cell::Cell;
use std::time::Instant;

/// Monotonic time source in seconds
pub trait Clock {
    /// Seconds since the clock's origin
    fn now(&self) -> f64;
}

/// Wall clock backed by [`Instant`], counting from its creation
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Starts counting from now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock advanced by hand, for hosts with their own timing and for tests
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    time: Cell<f64>,
}

impl ManualClock {
    /// Creates a clock that reads `start` until moved
    pub fn new(start: f64) -> Self {
        Self {
            time: Cell::new(start),
        }
    }

    /// Moves the clock forward; negative amounts are ignored
    pub fn advance(&self, seconds: f64) {
        if seconds > 0.0 {
            self.time.set(self.time.get() + seconds);
        }
    }

    /// Jumps to an absolute time
    pub fn set(&self, time: f64) {
        self.time.set(time.max(self.time.get()));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.time.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_never_runs_backwards() {
        let clock = ManualClock::new(2.0);
        clock.advance(-1.0);
        assert_eq!(clock.now(), 2.0);

        clock.set(1.0);
        assert_eq!(clock.now(), 2.0);

        clock.advance(0.5);
        clock.set(3.0);
        assert_eq!(clock.now(), 3.0);
    }
}
