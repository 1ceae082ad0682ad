//! Dispatch context for rule evaluation.

use crate::models::Time;

/// Runtime state passed to dispatching rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Current simulation time.
    pub clock: Time,
}

impl DispatchContext {
    /// Creates a context at the given time.
    pub fn at_time(clock: Time) -> Self {
        Self { clock }
    }

    /// Moves the clock forward (never backwards).
    pub fn advance_to(&mut self, time: Time) {
        self.clock = self.clock.max(time);
    }
}
