use std::time::Duration;

use tokio::time::Instant;

/// Whole seconds left out of `duration` once `elapsed` has passed, never below zero.
pub fn remaining_seconds(elapsed: Duration, duration: Duration) -> u64 {
    duration.as_secs().saturating_sub(elapsed.as_secs())
}

/// Result of a single countdown poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTick {
    /// Seconds left on the clock.
    pub remaining: u64,
    /// Set on the first poll that observes zero, and only on that one.
    pub expired_now: bool,
}

/// Per-question countdown recomputed from its start time on every poll.
#[derive(Debug, Clone)]
pub struct Countdown {
    started_at: Instant,
    duration: Duration,
    expired: bool,
}

impl Countdown {
    /// Start a countdown of `duration` at `started_at`.
    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
            expired: false,
        }
    }

    /// Seconds left at `now`, without touching the expiry guard.
    pub fn remaining_at(&self, now: Instant) -> u64 {
        remaining_seconds(now.saturating_duration_since(self.started_at), self.duration)
    }

    /// Recompute the remaining time, reporting expiry exactly once.
    pub fn poll(&mut self, now: Instant) -> CountdownTick {
        let remaining = self.remaining_at(now);
        let expired_now = remaining == 0 && !self.expired;
        if expired_now {
            self.expired = true;
        }
        CountdownTick {
            remaining,
            expired_now,
        }
    }

    /// Whether expiry has already been reported.
    pub fn has_expired(&self) -> bool {
        self.expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_is_floored_and_clamped() {
        let duration = Duration::from_secs(30);
        assert_eq!(remaining_seconds(Duration::ZERO, duration), 30);
        assert_eq!(remaining_seconds(Duration::from_millis(900), duration), 30);
        assert_eq!(remaining_seconds(Duration::from_millis(1_000), duration), 29);
        assert_eq!(remaining_seconds(Duration::from_secs(30), duration), 0);
        assert_eq!(remaining_seconds(Duration::from_secs(95), duration), 0);
    }

    #[test]
    fn expiry_fires_once_despite_repeated_zero_readings() {
        let start = Instant::now();
        let mut countdown = Countdown::new(start, Duration::from_secs(2));

        let first = countdown.poll(start + Duration::from_millis(1_500));
        assert_eq!(first, CountdownTick { remaining: 1, expired_now: false });

        let expiries = (0..20)
            .map(|step| countdown.poll(start + Duration::from_secs(2) + Duration::from_millis(step * 100)))
            .filter(|tick| tick.expired_now)
            .count();

        assert_eq!(expiries, 1);
        assert!(countdown.has_expired());
        assert_eq!(countdown.poll(start + Duration::from_secs(60)).remaining, 0);
    }

    #[test]
    fn polls_before_start_report_full_duration() {
        let start = Instant::now() + Duration::from_secs(5);
        let mut countdown = Countdown::new(start, Duration::from_secs(30));
        let tick = countdown.poll(Instant::now());
        assert_eq!(tick.remaining, 30);
        assert!(!tick.expired_now);
    }
}
