use std::time::{Duration, Instant};

use log::info;

/// Lifecycle of the periodic tick timer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum SchedulerState {
    Running { next_deadline: Instant },
    Stopped,
}

/// Fixed-interval tick timer polled by the host loop.
///
/// Starting it acquires the timer; `stop` or dropping the scheduler releases
/// it, after which no further ticks are reported. Game over does not stop it.
#[derive(Debug)]
pub struct TickScheduler {
    interval: Duration,
    state: SchedulerState,
}

impl TickScheduler {
    /// Starts ticking; the first tick is due one interval after `now`.
    #[must_use]
    pub fn start(interval: Duration, now: Instant) -> Self {
        debug_assert!(!interval.is_zero());
        info!("tick scheduler started ({} ms)", interval.as_millis());

        Self {
            interval,
            state: SchedulerState::Running {
                next_deadline: now + interval,
            },
        }
    }

    /// Returns true when a tick is due at `now` and schedules the next one.
    ///
    /// At most one tick is reported per call. A late poll schedules the next
    /// deadline from `now` rather than replaying missed ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        let SchedulerState::Running { next_deadline } = self.state else {
            return false;
        };

        if now < next_deadline {
            return false;
        }

        let following = next_deadline + self.interval;
        self.state = SchedulerState::Running {
            next_deadline: if following > now {
                following
            } else {
                now + self.interval
            },
        };
        true
    }

    /// Returns how long the host may wait before the next tick is due.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        match self.state {
            SchedulerState::Running { next_deadline } => {
                Some(next_deadline.saturating_duration_since(now))
            }
            SchedulerState::Stopped => None,
        }
    }

    /// Cancels ticking. Calling it again has no effect.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.state = SchedulerState::Stopped;
            info!("tick scheduler stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, SchedulerState::Running { .. })
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
