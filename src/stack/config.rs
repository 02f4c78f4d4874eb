//! Per-screen animation constants.
//!
//! The numbers here are hand-tuned values carried over from the shipped
//! designs. Different screens used different per-item enter paces for the
//! same visual intent, so those stay configuration data; no formula is
//! derived from them.

use crate::{
    animation::ease::Ease,
    foundation::error::{DeckError, DeckResult},
};

/// Default window size as a fraction of global progress.
pub const DEFAULT_WINDOW_SIZE: f64 = 0.35;
/// Default overlap between consecutive windows (produces the cross-fade).
pub const DEFAULT_OVERLAP: f64 = 0.05;
/// Local progress where the enter phase ends and the hold begins.
pub const DEFAULT_ENTER_END: f64 = 0.25;
/// Local progress where the hold ends and the exit phase begins.
pub const DEFAULT_EXIT_START: f64 = 0.65;
/// Virtual progress step per wheel tick while locked.
pub const DEFAULT_WHEEL_STEP: f64 = 0.02;
/// Spring stiffness for the single-phase variant.
pub const DEFAULT_SPRING_STIFFNESS: f64 = 0.2;
/// Spring damping for the single-phase variant.
pub const DEFAULT_SPRING_DAMPING: f64 = 0.7;

/// Hand-tuned enter-pace constants for the two-card screens.
pub const ITEM_PACES_DUO: [f64; 2] = [0.6, 0.4];
/// Hand-tuned enter-pace constants for the three-card screens.
pub const ITEM_PACES_TRIO: [f64; 3] = [0.7, 0.5, 0.3];

/// Curve applied over a card's local progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StackCurve {
    /// Three-phase curve: eased enter, fixed hold, eased exit.
    Phased {
        /// Easing for the enter phase (waiting state to held state).
        enter: Ease,
        /// Easing for the exit phase (held state to exited state).
        exit: Ease,
    },
    /// Single-phase spring response producing scale, translate, rotation, and
    /// a linear opacity fade down to a floor of `0.25`.
    Spring {
        /// Spring stiffness, in `(0, 1]`.
        stiffness: f64,
        /// Spring damping, in `[0, 2)`.
        damping: f64,
    },
}

/// Fixed animation constants for one card-stack screen.
///
/// The tracked item set is fixed at view mount; `items` is its length.
/// Construction is the fail-fast point: a config that passes [`validate`]
/// can be evaluated at any progress without further checks.
///
/// [`validate`]: StackConfig::validate
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct StackConfig {
    /// Number of tracked cards (small, typically 3 or 4).
    pub items: usize,
    /// Width of each card's local window as a fraction of global progress.
    pub window_size: f64,
    /// Overlap between consecutive windows, strictly less than `window_size`.
    pub overlap: f64,
    /// Local progress where the enter phase ends (phased curve only).
    pub enter_end: f64,
    /// Local progress where the exit phase begins (phased curve only).
    pub exit_start: f64,
    /// Virtual progress step per wheel tick while the lock is engaged.
    pub wheel_step: f64,
    /// The `k` constant in the geometry-to-progress formula; shipped screens
    /// used `0.5` or `1.0`.
    pub viewport_anchor: f64,
    /// True only for the simulated-scroll screen variant: the wheel lock may
    /// engage and drive progress from accumulated wheel ticks. The plain
    /// scroll-driven screens leave this off and always derive progress from
    /// geometry.
    #[serde(default)]
    pub wheel_lock: bool,
    /// Curve applied over local progress.
    pub curve: StackCurve,
    /// Per-item enter pace in `(0, 1]`: item `i`'s enter phase lasts
    /// `enter_end * item_paces[i]` of local progress, so later cards can
    /// snap in faster than the first. Length must equal `items`.
    pub item_paces: Vec<f64>,
}

impl StackConfig {
    /// Three-phase config for `items` cards, with the shipped constants.
    pub fn for_items(items: usize) -> Self {
        Self {
            items,
            window_size: DEFAULT_WINDOW_SIZE,
            overlap: DEFAULT_OVERLAP,
            enter_end: DEFAULT_ENTER_END,
            exit_start: DEFAULT_EXIT_START,
            wheel_step: DEFAULT_WHEEL_STEP,
            viewport_anchor: 0.5,
            wheel_lock: false,
            curve: StackCurve::Phased {
                enter: Ease::OutCubic,
                exit: Ease::InCubic,
            },
            item_paces: default_paces(items),
        }
    }

    /// The simulated-scroll variant: three-phase curve with the wheel lock
    /// enabled, so the screen pins while wheel ticks walk the stack.
    pub fn locked_for_items(items: usize) -> Self {
        Self {
            wheel_lock: true,
            ..Self::for_items(items)
        }
    }

    /// Single-phase spring config for `items` cards, with the shipped
    /// constants. Used on the screens that animate depth and tilt instead of
    /// the enter/hold/exit phases.
    pub fn spring_for_items(items: usize) -> Self {
        Self {
            items,
            window_size: DEFAULT_WINDOW_SIZE,
            overlap: DEFAULT_OVERLAP,
            enter_end: DEFAULT_ENTER_END,
            exit_start: DEFAULT_EXIT_START,
            wheel_step: DEFAULT_WHEEL_STEP,
            viewport_anchor: 1.0,
            wheel_lock: false,
            curve: StackCurve::Spring {
                stiffness: DEFAULT_SPRING_STIFFNESS,
                damping: DEFAULT_SPRING_DAMPING,
            },
            item_paces: vec![1.0; items],
        }
    }

    /// Reject configurations whose constants would corrupt the window math.
    pub fn validate(&self) -> DeckResult<()> {
        if self.items == 0 {
            return Err(DeckError::validation("items must be > 0"));
        }
        if !(self.window_size > 0.0 && self.window_size <= 1.0) {
            return Err(DeckError::validation("window_size must be in (0, 1]"));
        }
        if !(self.overlap >= 0.0 && self.overlap < self.window_size) {
            return Err(DeckError::validation(
                "overlap must be in [0, window_size)",
            ));
        }
        if !(0.0 < self.enter_end && self.enter_end < self.exit_start && self.exit_start < 1.0) {
            return Err(DeckError::validation(
                "phase boundaries must satisfy 0 < enter_end < exit_start < 1",
            ));
        }
        if !(self.wheel_step > 0.0 && self.wheel_step <= 1.0) {
            return Err(DeckError::validation("wheel_step must be in (0, 1]"));
        }
        if !(self.viewport_anchor > 0.0 && self.viewport_anchor.is_finite()) {
            return Err(DeckError::validation(
                "viewport_anchor must be finite and > 0",
            ));
        }
        if self.item_paces.len() != self.items {
            return Err(DeckError::validation(format!(
                "item_paces has {} entries for {} items",
                self.item_paces.len(),
                self.items
            )));
        }
        if self.item_paces.iter().any(|&p| !(p > 0.0 && p <= 1.0)) {
            return Err(DeckError::validation("item_paces must be in (0, 1]"));
        }
        if let StackCurve::Spring { stiffness, damping } = self.curve {
            if !(stiffness > 0.0 && stiffness <= 1.0) {
                return Err(DeckError::validation("spring stiffness must be in (0, 1]"));
            }
            if !(damping >= 0.0 && damping < 2.0) {
                return Err(DeckError::validation("spring damping must be in [0, 2)"));
            }
        }
        Ok(())
    }
}

fn default_paces(items: usize) -> Vec<f64> {
    match items {
        2 => ITEM_PACES_DUO.to_vec(),
        3 => ITEM_PACES_TRIO.to_vec(),
        n => vec![1.0; n],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stack/config.rs"]
mod tests;
