//! Easing curves applied to a card's local phase progress.

/// Easing curve selector for the enter and exit phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in. Default for the exit phase.
    InCubic,
    /// Cubic ease-out. Default for the enter phase.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
}

impl Ease {
    /// Apply the curve to `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// Spring-like response used by the single-phase stack variant:
/// `t·(2 − t·damping)·stiffness + t·(1 − stiffness)`.
///
/// With the shipped constants (stiffness 0.2, damping 0.7) the response
/// overshoots slightly past `1.0` at the end of the range, which is what
/// gives the settle its springy feel.
pub fn spring_response(t: f64, stiffness: f64, damping: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t * damping) * stiffness + t * (1.0 - stiffness)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
