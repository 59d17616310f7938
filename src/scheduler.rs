use std::time::Duration;

use crate::difficulty::TickRate;

/// Cancellable periodic tick source driven by caller-supplied elapsed time.
///
/// The timer never reads a clock itself: the main loop feeds it wall-clock
/// deltas and tests feed it arbitrary durations. Restarting (via [`start`] or
/// [`set_rate`]) discards the partially elapsed period, so the first tick at
/// the new rate lands one full period after the restart.
///
/// [`start`]: TickTimer::start
/// [`set_rate`]: TickTimer::set_rate
#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    period: Option<Duration>,
    elapsed: Duration,
}

impl TickTimer {
    /// Creates a stopped timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the timer at `rate`, resetting its phase.
    pub fn start(&mut self, rate: TickRate) {
        self.period = Some(rate.period());
        self.elapsed = Duration::ZERO;
    }

    /// Cancels the timer; pending time is dropped.
    pub fn stop(&mut self) {
        self.period = None;
        self.elapsed = Duration::ZERO;
    }

    /// Replaces the period of an active timer. A stopped timer stays stopped.
    pub fn set_rate(&mut self, rate: TickRate) {
        if self.is_active() {
            self.start(rate);
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.period.is_some()
    }

    /// Current period, or `None` while stopped.
    #[must_use]
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Advances virtual time and returns how many ticks became due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let Some(period) = self.period else {
            return 0;
        };

        self.elapsed += elapsed;
        let mut due = 0;
        while self.elapsed >= period {
            self.elapsed -= period;
            due += 1;
        }
        due
    }
}
