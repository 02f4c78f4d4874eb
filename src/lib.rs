//! Scrolldeck maps a single scroll or wheel signal into per-card visual states
//! that produce a layered "card stack" illusion: each card enters, holds
//! centered, then exits as the next one enters.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: a [`MeasurementSource`] reports the tracked container's
//!    geometry (or `None` while it is not mounted yet).
//! 2. **Derive**: geometry becomes a global [`Progress`] in `[0, 1]`, or, when
//!    the wheel lock is engaged, an accumulated virtual progress stepped by
//!    discrete wheel deltas ([`ScrollLock`]).
//! 3. **Evaluate**: `StackConfig + Progress -> Vec<VisualState>` — a pure,
//!    deterministic mapping ([`evaluate`]).
//! 4. **Apply**: one batched style write per card per tick through a
//!    [`RenderSink`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: evaluation is pure and stable for a given
//!   input; only the wheel-locked variant carries history (the accumulated
//!   virtual progress).
//! - **No platform calls**: measurement, event delivery, frame scheduling, and
//!   style application are all trait seams owned by the embedder.
//!
//! Alongside the stack, [`Carousel`] keeps the rotation bookkeeping for the
//! 3D ring screen under the same constraints: the embedder owns the frame
//! loop and timers, the carousel owns only the angle and pause state.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod carousel;
mod driver;
mod foundation;
mod scroll;
mod stack;
mod trigger;

pub use animation::ease::{Ease, spring_response};
pub use carousel::rotate::{CardPlacement, Carousel, CarouselConfig};
pub use driver::tick::{FrameScheduler, MeasurementSource, RenderSink, StackDriver};
pub use foundation::core::{ContainerRect, ItemIndex, Progress, Viewport};
pub use foundation::error::{DeckError, DeckResult};
pub use scroll::lock::{LockState, ReleaseDirection, ScrollLock, WheelOutcome};
pub use scroll::progress::progress_from_geometry;
pub use stack::config::{StackConfig, StackCurve};
pub use stack::eval::{evaluate, sweep};
pub use stack::visual::VisualState;
pub use trigger::reveal::{RevealState, RevealTrigger};
