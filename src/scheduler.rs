//! Recurring timers driving the games while they are being played.
//!
//! The terminal loop polls every ticker once per iteration with the current instant. A ticker
//! reports how many of its periods elapsed since the previous poll and the caller runs its
//! handler that many times.

use std::time::{Duration, Instant};

/// Period of the maze countdown.
pub(crate) const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Period of the reef frame loop, roughly one display refresh.
///
/// Also used as the input poll timeout so that the loop wakes up at least once per frame.
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Most periods reported by a single poll.
///
/// After a longer stall the ticker drops the backlog and realigns on the polling instant.
const MAX_CATCH_UP: u32 = 8;

/// Single-slot recurring timer.
///
/// A ticker is either stopped or running exactly one loop. Starting a running ticker restarts its
/// loop rather than adding another one, and stopping it discards any periods still pending, so
/// repeated start/stop cycles never pile up registrations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Ticker {
    /// Time between two firings.
    period: Duration,
    /// Instant the next period is counted from, or `None` while stopped.
    anchor: Option<Instant>,
}

impl Ticker {
    /// Creates a stopped ticker.
    pub(crate) const fn new(period: Duration) -> Self {
        Self {
            period,
            anchor: None,
        }
    }

    /// Returns whether a loop is active.
    pub(crate) const fn is_running(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the time between two firings.
    pub(crate) const fn period(&self) -> Duration {
        self.period
    }

    /// Changes the period; a running loop keeps its anchor.
    pub(crate) fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// Starts the loop at `now`, replacing any loop already running.
    pub(crate) fn start(&mut self, now: Instant) {
        self.anchor = Some(now);
    }

    /// Stops the loop and forgets pending periods.
    pub(crate) fn stop(&mut self) {
        self.anchor = None;
    }

    /// Starts or stops the loop so that it runs exactly when `active` holds.
    ///
    /// A loop that is already running in the active state is left untouched.
    pub(crate) fn follow(&mut self, active: bool, now: Instant) {
        match (active, self.is_running()) {
            (true, false) => self.start(now),
            (false, true) => self.stop(),
            _ => {}
        }
    }

    /// Returns how many whole periods elapsed since the previous firing.
    pub(crate) fn poll(&mut self, now: Instant) -> u32 {
        let Some(anchor) = self.anchor else {
            return 0;
        };
        if self.period.is_zero() {
            return 0;
        }

        let elapsed = now.saturating_duration_since(anchor);
        let due = u32::try_from(elapsed.as_nanos() / self.period.as_nanos()).unwrap_or(u32::MAX);
        if due == 0 {
            return 0;
        }

        if due > MAX_CATCH_UP {
            self.anchor = Some(now);
            MAX_CATCH_UP
        } else {
            self.anchor = Some(anchor + self.period * due);
            due
        }
    }
}
