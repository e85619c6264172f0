//! Timers for the selection animation
//!
//! Both timers are passive: they hold deadlines and are asked whether they
//! are due, rather than scheduling callbacks. Releasing a timer is therefore
//! just flipping it to cancelled, after which it never reports due again.

use std::time::{Duration, Instant};

/// Periodic timer driving the shuffle ticks
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: Instant,
    fired: u64,
    cancelled: bool,
}

impl RepeatingTimer {
    /// Start a timer whose first tick is one period after `start`
    pub fn start(start: Instant, period: Duration) -> Self {
        Self {
            period,
            next_due: start + period,
            fired: 0,
            cancelled: false,
        }
    }

    /// Number of periods that elapsed since the last call
    ///
    /// Missed periods are coalesced into the returned count. Always 0 once
    /// cancelled, or for a zero period.
    pub fn due(&mut self, now: Instant) -> u32 {
        if self.cancelled || self.period.is_zero() || now < self.next_due {
            return 0;
        }

        let behind = now.duration_since(self.next_due);
        let missed = (behind.as_nanos() / self.period.as_nanos()) as u32;
        let ticks = missed.saturating_add(1);

        self.next_due += self.period * ticks;
        self.fired += u64::from(ticks);
        ticks
    }

    /// Cancel the timer
    ///
    /// Returns true only for the call that actually performed the cancel.
    pub fn cancel(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.cancelled = true;
        true
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Total ticks delivered so far
    pub fn fired(&self) -> u64 {
        self.fired
    }
}

/// Single deadline that finalizes the selection
#[derive(Debug, Clone, Copy)]
pub struct OneShot {
    deadline: Instant,
}

impl OneShot {
    pub fn start(start: Instant, after: Duration) -> Self {
        Self {
            deadline: start + after,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left until the deadline, zero once expired
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    #[test]
    fn test_not_due_before_first_period() {
        let start = Instant::now();
        let mut timer = RepeatingTimer::start(start, TICK);
        assert_eq!(timer.due(start), 0);
        assert_eq!(timer.due(start + Duration::from_millis(99)), 0);
        assert_eq!(timer.due(start + TICK), 1);
        assert_eq!(timer.due(start + TICK), 0);
    }

    #[test]
    fn test_coalesces_missed_ticks() {
        let start = Instant::now();
        let mut timer = RepeatingTimer::start(start, TICK);
        assert_eq!(timer.due(start + Duration::from_millis(250)), 2);
        // next boundary is 300ms
        assert_eq!(timer.due(start + Duration::from_millis(299)), 0);
        assert_eq!(timer.due(start + Duration::from_millis(300)), 1);
        assert_eq!(timer.fired(), 3);
    }

    #[test]
    fn test_cancel_exactly_once() {
        let start = Instant::now();
        let mut timer = RepeatingTimer::start(start, TICK);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(timer.is_cancelled());
        assert_eq!(timer.due(start + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_zero_period_never_fires() {
        let start = Instant::now();
        let mut timer = RepeatingTimer::start(start, Duration::ZERO);
        assert_eq!(timer.due(start + Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_one_shot() {
        let start = Instant::now();
        let shot = OneShot::start(start, Duration::from_secs(3));
        assert!(!shot.expired(start + Duration::from_millis(2999)));
        assert!(shot.expired(start + Duration::from_secs(3)));
        assert_eq!(shot.remaining(start + Duration::from_secs(1)), Duration::from_secs(2));
        assert_eq!(shot.remaining(start + Duration::from_secs(5)), Duration::ZERO);
    }
}
