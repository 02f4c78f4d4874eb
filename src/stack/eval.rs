//! The pure progress-to-visual-state mapping.
//!
//! Evaluation is stateless: identical `(config, progress)` inputs always
//! yield identical output. All history (the locked variant's accumulated
//! virtual progress) lives outside this module.

use crate::{
    animation::ease::{Ease, spring_response},
    foundation::core::Progress,
    foundation::error::{DeckError, DeckResult},
    stack::config::{StackConfig, StackCurve},
    stack::visual::VisualState,
};

// Single-phase variant response magnitudes at full spring extension.
const SPRING_TRANSLATE_Y: f64 = -40.0;
const SPRING_TRANSLATE_Z: f64 = -120.0;
const SPRING_SCALE_DROP: f64 = 0.15;
const SPRING_TILT_DEG: f64 = 6.0;
const SPRING_OPACITY_FLOOR: f64 = 0.25;

/// A card's sub-range of global progress, in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ItemWindow {
    start: f64,
    end: f64,
}

impl ItemWindow {
    fn width(self) -> f64 {
        self.end - self.start
    }

    fn midpoint(self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Local progress in `[-1, 1]`: negative depth while waiting below the
    /// window, linearly normalized `[0, 1]` inside it, saturated at `1`
    /// once exited.
    fn local_progress(self, progress: f64) -> f64 {
        if progress < self.start {
            -(((self.start - progress) / self.width()).min(1.0))
        } else if progress <= self.end {
            (progress - self.start) / self.width()
        } else {
            1.0
        }
    }
}

/// Sequential, slightly overlapping windows, rescaled so the last window
/// closes at exactly `1.0` (no dead scroll range below the final card).
fn item_windows(config: &StackConfig) -> Vec<ItemWindow> {
    let stride = config.window_size - config.overlap;
    let total = (config.items - 1) as f64 * stride + config.window_size;
    let scale = 1.0 / total;
    (0..config.items)
        .map(|i| {
            let start = i as f64 * stride;
            ItemWindow {
                start: start * scale,
                end: (start + config.window_size) * scale,
            }
        })
        .collect()
}

/// Map global `progress` to one [`VisualState`] per card.
///
/// The card whose window midpoint is closest to `progress` receives the
/// highest z-index, so the currently held card occludes its neighbors
/// during cross-fade.
#[tracing::instrument(skip(config), fields(items = config.items))]
pub fn evaluate(config: &StackConfig, progress: Progress) -> DeckResult<Vec<VisualState>> {
    config.validate()?;

    let windows = item_windows(config);
    let p = progress.value();
    let mut out = Vec::with_capacity(config.items);
    for (i, window) in windows.iter().enumerate() {
        let t = window.local_progress(p);
        let state = match config.curve {
            StackCurve::Phased { enter, exit } => {
                if i == 0 && t < config.exit_start {
                    // The first card is never shown waiting or entering: it
                    // sits in its hold phase until its exit begins, so the
                    // initial scroll position shows it fully held.
                    VisualState::HELD
                } else {
                    phased_state(config, config.item_paces[i], enter, exit, t)
                }
            }
            StackCurve::Spring { stiffness, damping } => {
                spring_state(t.max(0.0), stiffness, damping)
            }
        };
        out.push(state.with_z_index(z_index_for(*window, p)));
    }
    Ok(out)
}

/// Evaluate an even sweep of `steps` progress values across `[0, 1]`.
pub fn sweep(config: &StackConfig, steps: usize) -> DeckResult<Vec<(f64, Vec<VisualState>)>> {
    if steps < 2 {
        return Err(DeckError::evaluation("sweep needs at least 2 steps"));
    }
    (0..steps)
        .map(|k| {
            let p = k as f64 / (steps - 1) as f64;
            Ok((p, evaluate(config, Progress::new(p))?))
        })
        .collect()
}

/// Three-phase curve: eased enter, fixed hold, eased exit.
///
/// `pace` shortens the effective enter duration (`enter_end * pace`), so a
/// card with a low pace snaps into its hold early. The boundaries themselves
/// stay fixed; a clamped ease keeps the curve continuous at `enter_end`.
fn phased_state(config: &StackConfig, pace: f64, enter: Ease, exit: Ease, t: f64) -> VisualState {
    if t < 0.0 {
        VisualState::WAITING
    } else if t <= config.enter_end {
        let u = enter.apply(t / (config.enter_end * pace));
        VisualState::lerp(VisualState::WAITING, VisualState::HELD, u)
    } else if t < config.exit_start {
        VisualState::HELD
    } else {
        let u = exit.apply((t - config.exit_start) / (1.0 - config.exit_start));
        VisualState::lerp(VisualState::HELD, VisualState::EXITED, u)
    }
}

/// Single-phase variant: the spring response drives scale, translate, and
/// tilt directly; opacity fades linearly down to a floor of `0.25`.
fn spring_state(t: f64, stiffness: f64, damping: f64) -> VisualState {
    let s = spring_response(t, stiffness, damping);
    VisualState {
        translate_y: SPRING_TRANSLATE_Y * s,
        translate_z: SPRING_TRANSLATE_Z * s,
        scale: 1.0 - SPRING_SCALE_DROP * s,
        rotate_x_deg: SPRING_TILT_DEG * s,
        opacity: (1.0 - (1.0 - SPRING_OPACITY_FLOOR) * t).max(SPRING_OPACITY_FLOOR),
        blur_px: 0.0,
        brightness: 1.0,
        z_index: 0,
    }
}

fn z_index_for(window: ItemWindow, progress: f64) -> i32 {
    let distance = (progress - window.midpoint()).abs().min(1.0);
    ((1.0 - distance) * 100.0).round() as i32
}

#[cfg(test)]
#[path = "../../tests/unit/stack/eval.rs"]
mod tests;
