//! Suspendable tick scheduler
//!
//! The clock is either stopped or running with a fixed period. Changing the
//! period restarts the wait from zero instead of carrying over elapsed time.

use std::future::pending;
use std::time::Duration;

use tokio::time::{sleep_until, Instant};

#[derive(Debug, Default)]
pub struct GameClock {
    period: Option<Duration>,
    deadline: Option<Instant>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current period, or `None` while stopped
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.period.is_some()
    }

    /// Drop any outstanding wait and start a fresh one of `period`
    pub fn reschedule(&mut self, period: Duration) {
        self.period = Some(period);
        self.deadline = Some(Instant::now() + period);
    }

    pub fn cancel(&mut self) {
        self.period = None;
        self.deadline = None;
    }

    /// Bring the clock in line with `desired`. Returns true if anything changed.
    pub fn sync(&mut self, desired: Option<Duration>) -> bool {
        if desired == self.period {
            return false;
        }

        match desired {
            Some(period) => self.reschedule(period),
            None => self.cancel(),
        }
        true
    }

    /// Wait for the next tick. Never resolves while the clock is stopped.
    ///
    /// Safe to drop mid-wait: the deadline only moves once a tick fires.
    pub async fn tick(&mut self) {
        let (Some(period), Some(deadline)) = (self.period, self.deadline) else {
            return pending().await;
        };

        sleep_until(deadline).await;
        self.deadline = Some(Instant::now() + period);
    }
}
