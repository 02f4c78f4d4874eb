//! One-shot visibility triggers for the fade-in-on-scroll sections.

use crate::foundation::error::{DeckError, DeckResult};

/// Trigger lifecycle for one watched element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    /// Not yet visible enough; the observation is still live.
    Pending,
    /// Fired; the observation must have been released.
    Triggered,
}

/// PENDING → TRIGGERED state machine for a single watched element.
///
/// Fires on the first visibility report at or above the threshold, exactly
/// once. The caller releases its observation when [`observe`] returns true;
/// the trigger never goes back to pending.
///
/// [`observe`]: RevealTrigger::observe
#[derive(Clone, Copy, Debug)]
pub struct RevealTrigger {
    state: RevealState,
    threshold: f64,
}

impl RevealTrigger {
    /// New pending trigger. `threshold` is the minimum visible ratio in
    /// `(0, 1]`.
    pub fn new(threshold: f64) -> DeckResult<Self> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(DeckError::validation("reveal threshold must be in (0, 1]"));
        }
        Ok(Self {
            state: RevealState::Pending,
            threshold,
        })
    }

    /// Current state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Feed one visibility report. Returns true exactly once, on the
    /// transition; the caller should release the observation then.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.state == RevealState::Triggered || visible_ratio < self.threshold {
            return false;
        }
        self.state = RevealState::Triggered;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/reveal.rs"]
mod tests;
