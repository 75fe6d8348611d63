//! Countdown timer driving timed exercises.
//!
//! The timer is a pure value advanced by `tick()` once per second by whoever
//! owns the interval. It never looks at the wall clock, so pausing for any
//! length of time leaves the remaining seconds untouched.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimerError {
    #[error("timer duration must be at least one second")]
    ZeroDuration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    /// Nothing elapsed yet.
    Idle,
    Running,
    /// Stopped part way through.
    Paused,
    /// Countdown reached zero.
    Expired,
}

/// Time spent on a countdown, as reported to the exercises service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElapsedReport {
    elapsed_secs: u32,
}

impl ElapsedReport {
    #[must_use]
    pub fn new(elapsed_secs: u32) -> Self {
        Self { elapsed_secs }
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Elapsed time in whole minutes, halves rounding up.
    #[must_use]
    pub fn minutes_rounded(&self) -> u32 {
        (self.elapsed_secs + 30) / 60
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed.
    Ignored,
    Counting { remaining_secs: u32 },
    /// Emitted once, on the tick that reaches zero.
    Expired(ElapsedReport),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownTimer {
    total_secs: u32,
    remaining_secs: u32,
    running: bool,
}

impl CountdownTimer {
    /// # Errors
    ///
    /// Returns `TimerError::ZeroDuration` for a zero-second timer.
    pub fn new(total_secs: u32) -> Result<Self, TimerError> {
        if total_secs == 0 {
            return Err(TimerError::ZeroDuration);
        }
        Ok(Self {
            total_secs,
            remaining_secs: total_secs,
            running: false,
        })
    }

    /// # Errors
    ///
    /// Returns `TimerError::ZeroDuration` when `minutes` is zero.
    pub fn from_minutes(minutes: u32) -> Result<Self, TimerError> {
        Self::new(minutes.saturating_mul(60))
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        if self.remaining_secs == 0 {
            TimerState::Expired
        } else if self.running {
            TimerState::Running
        } else if self.remaining_secs == self.total_secs {
            TimerState::Idle
        } else {
            TimerState::Paused
        }
    }

    /// Start from idle or resume from paused. Returns whether the state changed.
    pub fn start(&mut self) -> bool {
        match self.state() {
            TimerState::Idle | TimerState::Paused => {
                self.running = true;
                true
            }
            TimerState::Running | TimerState::Expired => false,
        }
    }

    /// Returns whether the state changed.
    pub fn pause(&mut self) -> bool {
        if self.state() == TimerState::Running {
            self.running = false;
            return true;
        }
        false
    }

    /// Back to idle with the full duration, from any state.
    pub fn reset(&mut self) {
        self.remaining_secs = self.total_secs;
        self.running = false;
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.remaining_secs == 0 {
            return TickOutcome::Ignored;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            return TickOutcome::Expired(self.report());
        }
        TickOutcome::Counting {
            remaining_secs: self.remaining_secs,
        }
    }

    /// Elapsed time so far, for a manual completion.
    #[must_use]
    pub fn report(&self) -> ElapsedReport {
        ElapsedReport::new(self.elapsed_secs())
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.total_secs - self.remaining_secs
    }

    /// Share of the countdown already spent, in `0.0..=100.0`.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.elapsed_secs()) / f64::from(self.total_secs) * 100.0
    }
}

/// Render seconds as zero-padded `MM:SS`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes:02}:{remainder:02}")
}
