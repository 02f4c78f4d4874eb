//! The per-frame driver tying measurement, lock, evaluation, and style
//! application together.
//!
//! Everything platform-facing is a trait seam: the embedder wires real DOM
//! (or whatever host) behind [`MeasurementSource`], [`RenderSink`], and
//! [`FrameScheduler`], and calls the driver's event entry points from its
//! listeners. The driver guarantees at-most-one pending recomputation and
//! goes fully inert after [`StackDriver::detach`].

use crate::{
    foundation::core::{ContainerRect, ItemIndex, Viewport},
    foundation::error::DeckResult,
    scroll::lock::{LockState, ScrollLock, WheelOutcome},
    scroll::progress::progress_from_geometry,
    stack::config::StackConfig,
    stack::eval::evaluate,
    stack::visual::VisualState,
};

/// Synchronous, cheap geometry reads; called up to once per animation frame.
pub trait MeasurementSource {
    /// Bounding geometry of the tracked container, or `None` while it is not
    /// mounted yet.
    fn container_rect(&self) -> Option<ContainerRect>;

    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;
}

/// Receives one batched style write per card per tick.
///
/// Idempotent, last-write-wins.
pub trait RenderSink {
    /// Apply `state` to the card at `item`.
    fn apply(&mut self, item: ItemIndex, state: &VisualState);
}

/// Animation loop owner: schedules one future call to
/// [`StackDriver::tick`].
///
/// Passed in explicitly so frame scheduling is a scoped resource tied to the
/// view lifetime, not ambient global state.
pub trait FrameScheduler {
    /// Request that `tick` runs on the next frame.
    fn request_tick(&mut self);
}

/// One view's animation engine instance.
///
/// Owns the lock machine and the ticking guard. The embedder forwards scroll
/// and wheel events, runs [`tick`] when the scheduler fires, and calls
/// [`detach`] from its destroy hook; after that no further sink writes occur
/// even if events keep firing.
///
/// [`tick`]: StackDriver::tick
/// [`detach`]: StackDriver::detach
pub struct StackDriver<M, R, S> {
    config: StackConfig,
    lock: ScrollLock,
    measure: M,
    sink: R,
    scheduler: S,
    tick_pending: bool,
    detached: bool,
}

impl<M, R, S> StackDriver<M, R, S>
where
    M: MeasurementSource,
    R: RenderSink,
    S: FrameScheduler,
{
    /// Build a driver for one view. Fails fast on a malformed config.
    pub fn new(config: StackConfig, measure: M, sink: R, scheduler: S) -> DeckResult<Self> {
        config.validate()?;
        let lock = ScrollLock::new(config.wheel_step)?;
        Ok(Self {
            config,
            lock,
            measure,
            sink,
            scheduler,
            tick_pending: false,
            detached: false,
        })
    }

    /// Forward a scroll event. Collapses with any other input already
    /// pending for this frame.
    pub fn on_scroll(&mut self) {
        self.schedule();
    }

    /// Forward a wheel event. The outcome's `handled` flag tells the
    /// embedder whether to suppress the default scroll for this event.
    pub fn on_wheel(&mut self, delta_y: f64) -> WheelOutcome {
        if self.detached {
            return WheelOutcome::PASS;
        }
        let outcome = if self.config.wheel_lock {
            self.lock.on_wheel(delta_y)
        } else {
            WheelOutcome::PASS
        };
        self.schedule();
        outcome
    }

    /// Run one recomputation. Called by the embedder when the scheduler
    /// fires; a missing container rect makes this a no-op (not mounted yet,
    /// retry next frame).
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self) -> DeckResult<()> {
        if self.detached {
            return Ok(());
        }
        self.tick_pending = false;

        let Some(container) = self.measure.container_rect() else {
            tracing::trace!("container not mounted, skipping tick");
            return Ok(());
        };
        let viewport = self.measure.viewport();
        if self.config.wheel_lock {
            self.lock.observe_geometry(container, viewport);
        }

        let progress = if self.config.wheel_lock && self.lock.state() == LockState::Locked {
            self.lock.virtual_progress()
        } else {
            progress_from_geometry(container, viewport, self.config.viewport_anchor)
        };

        let states = evaluate(&self.config, progress)?;
        for (i, state) in states.iter().enumerate() {
            self.sink.apply(ItemIndex(i), state);
        }
        Ok(())
    }

    /// Tear down: after this the driver is inert. The embedder deregisters
    /// its listeners alongside; a leaked listener hitting an entry point
    /// here is harmless.
    pub fn detach(&mut self) {
        self.detached = true;
        self.tick_pending = false;
        tracing::debug!("stack driver detached");
    }

    /// True once [`detach`](StackDriver::detach) has run.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Current lock state (free vs wheel-locked).
    pub fn lock_state(&self) -> LockState {
        self.lock.state()
    }

    fn schedule(&mut self) {
        if self.detached || self.tick_pending {
            return;
        }
        self.tick_pending = true;
        self.scheduler.request_tick();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/tick.rs"]
mod tests;
