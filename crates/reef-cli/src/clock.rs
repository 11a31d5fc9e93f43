//! Wall-clock timer owned by the run loop.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Clock {
    started: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// Time left until `interval` has passed since the last restart
    pub fn remaining(&self, interval: Duration) -> Duration {
        interval.saturating_sub(self.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_and_restart() {
        let mut clock = Clock::start();
        std::thread::sleep(Duration::from_millis(20));
        assert!(clock.elapsed() >= Duration::from_millis(20));

        clock.restart();
        assert!(clock.elapsed() < Duration::from_millis(20));
    }

    #[test]
    fn test_remaining() {
        let clock = Clock::start();
        assert!(clock.remaining(Duration::from_secs(60)) > Duration::from_secs(59));
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.remaining(Duration::ZERO), Duration::ZERO);
        assert_eq!(clock.remaining(Duration::from_millis(1)), Duration::ZERO);
    }
}
