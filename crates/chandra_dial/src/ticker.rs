//! Auto-advance timer.
//!
//! The ticker owns at most one pending deadline. It never sleeps: the host
//! calls [`AnimationTicker::poll`] with the current `Instant` and applies
//! however many periods have elapsed.

use std::time::{Duration, Instant};

/// A single periodic timer handle.
#[derive(Debug, Clone)]
pub struct AnimationTicker {
    period: Duration,
    next_due: Option<Instant>,
}

impl AnimationTicker {
    /// A stopped ticker. A zero period is raised to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Deadline of the next tick, if running.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Start ticking one period from `now`. Returns `false` if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now + self.period);
        true
    }

    /// Cancel pending ticks. Returns `false` if already stopped.
    pub fn stop(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    /// Number of ticks due at `now`; advances the deadline past `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }
        let elapsed = now.duration_since(due).as_nanos();
        let extra = elapsed / self.period.as_nanos();
        let ticks = u32::try_from(extra.saturating_add(1)).unwrap_or(u32::MAX);
        let advance = self.period.saturating_mul(ticks);
        self.next_due = due.checked_add(advance);
        ticks
    }

    /// Time until the next tick, capped at `default_timeout`.
    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.next_due
            .map(|due| due.saturating_duration_since(now).min(default_timeout))
            .unwrap_or(default_timeout)
    }
}
