//! The wheel-lock state machine used by the simulated-scroll screens.
//!
//! When the tracked container's top edge reaches the viewport top, native
//! scroll is suppressed and wheel ticks step an accumulated virtual progress
//! instead.
//! Reaching either end of the range releases the lock so the page can move
//! on. This is the one part of the engine that carries history.

use crate::{
    foundation::core::{ContainerRect, Progress, Viewport},
    foundation::error::{DeckError, DeckResult},
};

/// Whether native scroll currently drives progress, or wheel deltas do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockState {
    /// Normal page scroll drives progress via container geometry.
    Free,
    /// Wheel events are intercepted; native scroll is suppressed.
    Locked,
}

/// Which end of the range released the lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDirection {
    /// Virtual progress reached `1.0` scrolling forward; the embedder should
    /// scroll the page on to the next section.
    Forward,
    /// Virtual progress reached `0.0` scrolling backward; native upward
    /// scroll resumes.
    Backward,
}

/// Result of feeding one wheel event to the lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelOutcome {
    /// True when the event was consumed and the default scroll must be
    /// suppressed.
    pub handled: bool,
    /// Set on the tick that released the lock, if any.
    pub release: Option<ReleaseDirection>,
}

impl WheelOutcome {
    /// Outcome for an event the lock did not consume: default scroll runs.
    pub const PASS: Self = Self {
        handled: false,
        release: None,
    };
}

/// FREE/LOCKED overlay owning the virtual progress for one view's lifetime.
///
/// Virtual progress is held as an integer tick count so that repeated
/// forward/backward stepping lands back on the exact range ends; the release
/// transitions depend on reaching `0.0` and `1.0` precisely, which float
/// accumulation does not guarantee.
#[derive(Clone, Debug)]
pub struct ScrollLock {
    state: LockState,
    ticks: u32,
    max_ticks: u32,
    // Cleared on release so the very next geometry report (the container
    // still fills the viewport at that point) does not re-engage the lock.
    armed: bool,
    // Top offset from the previous geometry report. Engaging requires the
    // top edge to cross the viewport top between two reports, so a view
    // that mounts (or keeps reporting) mid-container stays free.
    last_top: Option<f64>,
}

impl ScrollLock {
    /// New lock in the free state. `wheel_step` must be in `(0, 1]`; it is
    /// quantized so the full range is a whole number of ticks.
    pub fn new(wheel_step: f64) -> DeckResult<Self> {
        if !(wheel_step > 0.0 && wheel_step <= 1.0) {
            return Err(DeckError::validation("wheel_step must be in (0, 1]"));
        }
        Ok(Self {
            state: LockState::Free,
            ticks: 0,
            max_ticks: (1.0 / wheel_step).round().max(1.0) as u32,
            armed: true,
            last_top: None,
        })
    }

    /// Current state.
    pub fn state(&self) -> LockState {
        self.state
    }

    /// Accumulated virtual progress.
    pub fn virtual_progress(&self) -> Progress {
        Progress::new(f64::from(self.ticks) / f64::from(self.max_ticks))
    }

    /// Feed the container geometry sampled this tick.
    ///
    /// Engages the lock only when the container top crosses the viewport top
    /// between two reports while the container fills the viewport; a view
    /// already scrolled deep into the container stays free. Resets virtual
    /// progress when the container is re-entered from above before reaching
    /// the top.
    pub fn observe_geometry(&mut self, container: ContainerRect, viewport: Viewport) {
        let fills = container.fills_viewport(viewport);
        let top_edge_crossed = self.last_top.is_some_and(|prev| prev > 0.0) && container.top <= 0.0;
        self.last_top = Some(container.top);
        match self.state {
            LockState::Free => {
                if fills {
                    if self.armed && top_edge_crossed {
                        self.state = LockState::Locked;
                        tracing::debug!(
                            progress = self.virtual_progress().value(),
                            "wheel lock engaged"
                        );
                    }
                } else {
                    self.armed = true;
                    if container.top > 0.0 {
                        self.ticks = 0;
                    }
                }
            }
            LockState::Locked => {
                // The page moved under us (native scroll up, programmatic
                // scroll, resize).
                if !fills {
                    self.state = LockState::Free;
                    if container.top > 0.0 {
                        self.ticks = 0;
                    }
                    tracing::debug!("wheel lock dropped: container left viewport");
                }
            }
        }
    }

    /// Feed one wheel event. While locked, steps virtual progress by
    /// `±wheel_step` and reports the event as handled; reaching either end
    /// releases the lock and surfaces the direction.
    pub fn on_wheel(&mut self, delta_y: f64) -> WheelOutcome {
        if self.state != LockState::Locked || delta_y == 0.0 {
            return WheelOutcome::PASS;
        }

        if delta_y > 0.0 {
            self.ticks = (self.ticks + 1).min(self.max_ticks);
        } else {
            self.ticks = self.ticks.saturating_sub(1);
        }

        let release = if delta_y > 0.0 && self.ticks == self.max_ticks {
            Some(ReleaseDirection::Forward)
        } else if delta_y < 0.0 && self.ticks == 0 {
            Some(ReleaseDirection::Backward)
        } else {
            None
        };
        if let Some(direction) = release {
            self.state = LockState::Free;
            self.armed = false;
            tracing::debug!(?direction, "wheel lock released");
        }

        WheelOutcome {
            handled: true,
            release,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/lock.rs"]
mod tests;
