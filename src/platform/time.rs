//! Tick pacing
//!
//! The host loop polls [`FramePacer`] with a monotonic timestamp and runs one
//! simulation tick whenever it says so. The pacer never sleeps.

use std::time::Duration;

/// Decides when the next fixed-rate tick is due
#[derive(Debug, Clone)]
pub struct FramePacer {
    /// Seconds between ticks
    interval: f64,
    /// Timestamp of the last tick
    last_tick: f64,
    ticks: u64,
    /// Polls that did not produce a tick since the last one
    idle_polls: u64,
    /// Idle polls counted before the most recent tick
    last_idle_polls: u64,
}

impl FramePacer {
    /// Pacer for ticks spaced `interval` apart, usually
    /// [`GameConfig::tick_interval`](crate::GameConfig::tick_interval)
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f64(),
            last_tick: 0.0,
            ticks: 0,
            idle_polls: 0,
            last_idle_polls: 0,
        }
    }

    /// Returns true when a tick is due at `now` (seconds) and records it.
    ///
    /// The next tick is scheduled relative to `now`, not to the ideal
    /// timestamp, so a late poll delays every following tick.
    pub fn poll(&mut self, now: f64) -> bool {
        if self.last_tick + self.interval <= now {
            self.last_tick = now;
            self.ticks += 1;
            self.last_idle_polls = self.idle_polls;
            self.idle_polls = 0;
            true
        } else {
            self.idle_polls += 1;
            false
        }
    }

    /// Seconds left until the next tick is due (zero if overdue)
    pub fn time_until_next(&self, now: f64) -> f64 {
        (self.last_tick + self.interval - now).max(0.0)
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Idle polls between the two most recent ticks
    pub fn loops_between_ticks(&self) -> u64 {
        self.last_idle_polls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUARTER_SECOND: Duration = Duration::from_millis(250);

    #[test]
    fn test_first_tick_after_one_interval() {
        let mut pacer = FramePacer::new(QUARTER_SECOND);
        assert!(!pacer.poll(0.125));
        assert!(pacer.poll(0.25));
        assert_eq!(pacer.ticks(), 1);
    }

    #[test]
    fn test_counts_idle_polls() {
        let mut pacer = FramePacer::new(QUARTER_SECOND);
        assert!(pacer.poll(0.5));
        assert!(!pacer.poll(0.5625));
        assert!(!pacer.poll(0.625));
        assert!(!pacer.poll(0.6875));
        assert!(pacer.poll(0.75));
        assert_eq!(pacer.loops_between_ticks(), 3);
        assert_eq!(pacer.ticks(), 2);
    }

    #[test]
    fn test_late_poll_shifts_schedule() {
        let mut pacer = FramePacer::new(QUARTER_SECOND);
        assert!(pacer.poll(0.625));
        // Next tick is due at 0.875, not 0.75
        assert!(!pacer.poll(0.75));
        assert!(pacer.poll(0.875));
    }

    #[test]
    fn test_time_until_next() {
        let mut pacer = FramePacer::new(QUARTER_SECOND);
        assert!(pacer.poll(1.0));
        assert_eq!(pacer.time_until_next(1.125), 0.125);
        assert_eq!(pacer.time_until_next(2.0), 0.0);
        assert_eq!(pacer.interval(), 0.25);
    }

    #[test]
    fn test_follows_config_tick_rate() {
        let mut config = crate::GameConfig::default();
        config.tick_rate = 8;
        let mut pacer = FramePacer::new(config.tick_interval());
        assert_eq!(pacer.interval(), 0.125);
        assert!(!pacer.poll(0.0625));
        assert!(pacer.poll(0.125));
        assert!(pacer.poll(0.25));
    }
}
