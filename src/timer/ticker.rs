use std::time::{Duration, Instant};

/// Countdown cadence.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Cancellable periodic tick source.
///
/// The host polls it from its event loop. While armed, `poll` reports at
/// most one due tick per call. Missed wall-clock time is not made up: if the
/// loop stalls for several periods, only one tick is delivered and the
/// schedule restarts from the moment of delivery.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the ticker. The first tick is due one period after `now`.
    /// Re-arming an armed ticker keeps its current schedule.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    /// Stop scheduling ticks. Safe to call when already stopped.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Returns true when a tick is due at `now`, and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let next = due + self.period;
        self.next_due = Some(if next <= now { now + self.period } else { next });
        true
    }

    /// Time left until the next tick, if armed.
    #[cfg(test)]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn idle_ticker_never_fires() {
        let mut ticker = Ticker::default();
        let t0 = Instant::now();
        assert!(!ticker.is_armed());
        assert!(!ticker.poll(t0 + 10 * SEC));
    }

    #[test]
    fn fires_once_per_period() {
        let mut ticker = Ticker::new(SEC);
        let t0 = Instant::now();
        ticker.start(t0);

        assert!(!ticker.poll(t0 + Duration::from_millis(999)));
        assert!(ticker.poll(t0 + SEC));
        assert!(!ticker.poll(t0 + SEC));
        assert!(!ticker.poll(t0 + Duration::from_millis(1500)));
        assert!(ticker.poll(t0 + 2 * SEC));
    }

    #[test]
    fn keeps_cadence_with_small_jitter() {
        let mut ticker = Ticker::new(SEC);
        let t0 = Instant::now();
        ticker.start(t0);

        assert!(ticker.poll(t0 + Duration::from_millis(1030)));
        // Next deadline stays on the 2s mark, not 2.03s.
        assert!(ticker.poll(t0 + 2 * SEC));
    }

    #[test]
    fn stalled_loop_gets_a_single_tick() {
        let mut ticker = Ticker::new(SEC);
        let t0 = Instant::now();
        ticker.start(t0);

        assert!(ticker.poll(t0 + 5 * SEC));
        assert!(!ticker.poll(t0 + 5 * SEC));
        assert!(!ticker.poll(t0 + Duration::from_millis(5999)));
        assert!(ticker.poll(t0 + 6 * SEC));
    }

    #[test]
    fn cancel_stops_pending_tick() {
        let mut ticker = Ticker::new(SEC);
        let t0 = Instant::now();
        ticker.start(t0);
        ticker.cancel();
        assert!(!ticker.is_armed());
        assert!(!ticker.poll(t0 + 3 * SEC));
        assert_eq!(ticker.time_until_next(t0), None);
    }

    #[test]
    fn restart_after_cancel_begins_a_fresh_period() {
        let mut ticker = Ticker::new(SEC);
        let t0 = Instant::now();
        ticker.start(t0);
        ticker.cancel();

        let t1 = t0 + Duration::from_millis(700);
        ticker.start(t1);
        assert!(!ticker.poll(t0 + SEC));
        assert!(ticker.poll(t1 + SEC));
    }

    #[test]
    fn start_while_armed_keeps_schedule() {
        let mut ticker = Ticker::new(SEC);
        let t0 = Instant::now();
        ticker.start(t0);
        ticker.start(t0 + Duration::from_millis(500));
        assert_eq!(ticker.time_until_next(t0), Some(SEC));
    }
}
