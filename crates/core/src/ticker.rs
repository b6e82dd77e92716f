//! Fixed-interval tick source.
//!
//! The ticker does not read a clock. Callers feed it elapsed milliseconds and
//! it reports how many whole ticks became due, which keeps the game loop
//! deterministic under test.

/// Upper bound on ticks reported by a single [`Ticker::advance`].
///
/// After a long stall (suspended terminal, debugger) the game resumes instead
/// of replaying every missed tick.
pub const MAX_CATCHUP_TICKS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    interval_ms: u32,
    accumulated_ms: u32,
    running: bool,
}

impl Ticker {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            running: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulated_ms = 0;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated_ms = 0;
    }

    /// Add elapsed time and return the number of ticks now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let due = self.accumulated_ms / self.interval_ms;
        if due > MAX_CATCHUP_TICKS {
            self.accumulated_ms = 0;
            return MAX_CATCHUP_TICKS;
        }
        self.accumulated_ms -= due * self.interval_ms;
        due
    }

    /// Milliseconds until the next tick, or `None` while stopped.
    pub fn until_next_ms(&self) -> Option<u32> {
        self.running
            .then(|| self.interval_ms - self.accumulated_ms.min(self.interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_ticker_never_fires() {
        let mut t = Ticker::new(30);
        assert_eq!(t.advance(1000), 0);
        assert_eq!(t.until_next_ms(), None);
    }

    #[test]
    fn carries_remainder_between_calls() {
        let mut t = Ticker::new(30);
        t.start();
        assert_eq!(t.advance(20), 0);
        assert_eq!(t.until_next_ms(), Some(10));
        assert_eq!(t.advance(20), 1);
        assert_eq!(t.advance(50), 2);
        assert_eq!(t.until_next_ms(), Some(30));
    }

    #[test]
    fn caps_catch_up_after_stall() {
        let mut t = Ticker::new(30);
        t.start();
        assert_eq!(t.advance(10_000), MAX_CATCHUP_TICKS);
        assert_eq!(t.advance(0), 0);
    }

    #[test]
    fn stop_discards_partial_tick() {
        let mut t = Ticker::new(30);
        t.start();
        t.advance(25);
        t.stop();
        t.start();
        assert_eq!(t.advance(10), 0);
    }
}
