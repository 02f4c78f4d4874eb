//! Value types shared by the progress derivation and the stack evaluator.

/// Global or virtual scroll progress, always in `[0, 1]`.
///
/// Construction clamps; the engine never produces transforms from
/// out-of-range progress. Non-finite inputs collapse to `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Progress at the top of the tracked range.
    pub const ZERO: Self = Self(0.0);
    /// Progress at the bottom of the tracked range.
    pub const ONE: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// The raw value in `[0, 1]`.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Step by `delta`, saturating at the range ends.
    pub fn offset_by(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    /// True at exactly `0.0`.
    pub fn is_at_start(self) -> bool {
        self.0 <= 0.0
    }

    /// True at exactly `1.0`.
    pub fn is_at_end(self) -> bool {
        self.0 >= 1.0
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// 0-based position of a card in the tracked sequence.
///
/// Fixed at creation; it defines the card's animation-window offset.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ItemIndex(pub usize);

/// Bounding geometry of the tracked container, relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContainerRect {
    /// Distance from the viewport top to the container top (negative once the
    /// container has scrolled past it).
    pub top: f64,
    /// Container height.
    pub height: f64,
}

impl ContainerRect {
    /// Distance from the viewport top to the container bottom.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// True when the container fully fills the viewport: its top is at or
    /// above the viewport top and its bottom extends past the viewport.
    pub fn fills_viewport(self, viewport: Viewport) -> bool {
        self.top <= 0.0 && self.bottom() > viewport.height
    }
}

/// Viewport dimensions as reported by the measurement source.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Visible height.
    pub height: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
