//! Countdown state machine for the timer mini-game.
//!
//! The host drives `tick` from its once-per-second callback; the machine
//! guarantees the finish transition fires exactly once, and never after
//! `cancel`. Cancelling models screen teardown: the host must stop
//! ticking a timer it navigated away from, and a cancelled countdown
//! refuses to fire even if a stray tick arrives late.

use serde::{Deserialize, Serialize};

/// Lifecycle of a countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownState {
    /// Counting down; ticks decrement.
    Running,
    /// Reached zero; the finish transition has fired.
    Finished,
    /// Torn down before finishing; will never fire.
    Cancelled,
}

/// Second-resolution countdown.
///
/// ## Example
///
/// ```
/// use parlor::timer::{Countdown, CountdownState};
///
/// let mut countdown = Countdown::new(2);
/// assert!(!countdown.tick()); // 1 left
/// assert!(countdown.tick());  // fires
/// assert!(!countdown.tick()); // already finished, never fires again
/// assert_eq!(countdown.state(), CountdownState::Finished);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Countdown {
    remaining_seconds: u32,
    state: CountdownState,
}

impl Countdown {
    /// Start a countdown from `seconds`.
    ///
    /// A zero-second countdown fires on its first tick.
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining_seconds: seconds,
            state: CountdownState::Running,
        }
    }

    /// Advance one second.
    ///
    /// Returns true exactly once: on the tick that reaches zero. Ticks
    /// after finishing or cancelling are no-ops.
    pub fn tick(&mut self) -> bool {
        if self.state != CountdownState::Running {
            return false;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.state = CountdownState::Finished;
            return true;
        }
        false
    }

    /// Tear the countdown down without firing.
    ///
    /// No-op if it already finished; a finished timer stays finished.
    pub fn cancel(&mut self) {
        if self.state == CountdownState::Running {
            self.state = CountdownState::Cancelled;
        }
    }

    /// Seconds left.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining_seconds
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// Render remaining time as `M:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining_seconds / 60, self.remaining_seconds % 60)
    }
}
