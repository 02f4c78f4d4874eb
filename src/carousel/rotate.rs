//! Rotation bookkeeping for the 3D card carousel.
//!
//! Cards sit on a ring at fixed angles; a stage rotation spins the whole ring
//! past the viewer. The carousel auto-advances a small angle per frame,
//! snaps and pauses each time a card reaches the front, and exposes the
//! per-card placement and the front-card predicate the embedder renders from.
//! Like the stack driver, it owns no timer: the embedder calls
//! [`Carousel::advance`] once per frame and [`Carousel::resume`] when its
//! pause delay elapses.

use crate::{
    foundation::core::ItemIndex,
    foundation::error::{DeckError, DeckResult},
};

/// Auto-rotation speed in degrees per frame (tuned for 60fps).
pub const DEFAULT_SPIN_SPEED_DEG: f64 = 0.12;
/// Ring radius: how far each card sits from the rotation axis.
pub const DEFAULT_RADIUS_PX: f64 = 700.0;
/// A card snaps to front once the stage angle is within this of its position.
pub const SNAP_EPSILON_DEG: f64 = 0.5;
/// Applied on resume so the just-snapped position is left immediately.
pub const RESUME_NUDGE_DEG: f64 = 0.5;

const FULL_TURN_DEG: f64 = 360.0;

/// Fixed geometry and pacing for one carousel ring.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CarouselConfig {
    /// Number of cards on the ring.
    pub cards: usize,
    /// Degrees the stage turns per animation frame.
    pub speed_deg_per_frame: f64,
    /// Distance from the rotation axis to each card, in pixels.
    pub radius_px: f64,
}

impl CarouselConfig {
    /// Shipped constants for a ring of `cards` cards.
    pub fn for_cards(cards: usize) -> Self {
        Self {
            cards,
            speed_deg_per_frame: DEFAULT_SPIN_SPEED_DEG,
            radius_px: DEFAULT_RADIUS_PX,
        }
    }

    /// Degrees between neighboring card positions.
    pub fn angle_step(&self) -> f64 {
        FULL_TURN_DEG / self.cards as f64
    }

    /// Reject geometry the rotation math cannot run on. The per-frame speed
    /// must stay below the snap epsilon or a frame could step clean over a
    /// card position without the snap ever firing.
    pub fn validate(&self) -> DeckResult<()> {
        if self.cards == 0 {
            return Err(DeckError::validation("cards must be > 0"));
        }
        if !(self.speed_deg_per_frame > 0.0 && self.speed_deg_per_frame < SNAP_EPSILON_DEG) {
            return Err(DeckError::validation(format!(
                "speed_deg_per_frame must be in (0, {SNAP_EPSILON_DEG})"
            )));
        }
        if !(self.radius_px > 0.0 && self.radius_px.is_finite()) {
            return Err(DeckError::validation("radius_px must be finite and > 0"));
        }
        Ok(())
    }
}

/// A card's fixed transform on the ring: rotate onto its spoke, then push
/// out to the radius.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardPlacement {
    /// Rotation around the vertical axis, in degrees.
    pub rotate_y_deg: f64,
    /// Outward translation along the rotated axis, in pixels.
    pub translate_z_px: f64,
}

/// Rotation state for one carousel ring.
///
/// The stage angle grows as the ring spins and is kept normalized to
/// `[0, 360)`. Two pause sources gate the auto-advance independently: a
/// hover pause held by the embedder, and the front-snap pause that the
/// carousel enters itself and the embedder clears via [`resume`] after its
/// delay.
///
/// [`resume`]: Carousel::resume
#[derive(Clone, Debug)]
pub struct Carousel {
    config: CarouselConfig,
    angle: f64,
    hovered: bool,
    snap_paused: bool,
    // Last position snapped to; a position never re-snaps until another one
    // has snapped in between, so the resume nudge cannot immediately
    // re-trigger the pause it just left.
    last_snapped: Option<usize>,
}

impl Carousel {
    /// New carousel with card 0 at the front. Fails fast on a malformed
    /// config.
    pub fn new(config: CarouselConfig) -> DeckResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            angle: 0.0,
            hovered: false,
            snap_paused: false,
            last_snapped: None,
        })
    }

    /// Current stage angle in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// True while either pause source holds the auto-advance.
    pub fn is_paused(&self) -> bool {
        self.hovered || self.snap_paused
    }

    /// Advance one frame of auto-rotation.
    ///
    /// Returns the card that just snapped to the front, if any; on a snap
    /// the carousel pauses itself until [`Carousel::resume`]. While paused
    /// this is a no-op.
    pub fn advance(&mut self) -> Option<usize> {
        if self.is_paused() {
            return None;
        }
        self.angle = (self.angle + self.config.speed_deg_per_frame).rem_euclid(FULL_TURN_DEG);

        let step = self.config.angle_step();
        let position = (self.angle / step).floor() as usize % self.config.cards;
        let distance = self.angle - position as f64 * step;
        if distance < SNAP_EPSILON_DEG && self.last_snapped != Some(position) {
            self.angle = position as f64 * step;
            self.last_snapped = Some(position);
            self.snap_paused = true;
            tracing::debug!(position, angle = self.angle, "carousel snapped to front");
            return Some(position);
        }
        None
    }

    /// Clear the front-snap pause and nudge past the snapped position so the
    /// next frame does not immediately re-snap.
    pub fn resume(&mut self) {
        if !self.snap_paused {
            return;
        }
        self.snap_paused = false;
        self.angle = (self.angle + RESUME_NUDGE_DEG).rem_euclid(FULL_TURN_DEG);
    }

    /// Hold or release the hover pause.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Turn the ring one card forward.
    pub fn step_next(&mut self) {
        self.angle = (self.angle + self.config.angle_step()).rem_euclid(FULL_TURN_DEG);
    }

    /// Turn the ring one card backward.
    pub fn step_prev(&mut self) {
        self.angle = (self.angle - self.config.angle_step()).rem_euclid(FULL_TURN_DEG);
    }

    /// Stage rotation in degrees; negated so a growing angle brings the next
    /// card around to the front.
    pub fn stage_rotation_deg(&self) -> f64 {
        -self.angle
    }

    /// Fixed placement of the card at `item` on the ring.
    pub fn card_placement(&self, item: ItemIndex) -> DeckResult<CardPlacement> {
        if item.0 >= self.config.cards {
            return Err(DeckError::evaluation(format!(
                "card {} out of range for {} cards",
                item.0, self.config.cards
            )));
        }
        Ok(CardPlacement {
            rotate_y_deg: item.0 as f64 * self.config.angle_step(),
            translate_z_px: self.config.radius_px,
        })
    }

    /// True when the card at `item` is facing the viewer: the angular
    /// distance from its position to the stage angle, taken the short way
    /// around the ring, is under half a step.
    pub fn is_front(&self, item: ItemIndex) -> bool {
        if item.0 >= self.config.cards {
            return false;
        }
        let step = self.config.angle_step();
        let diff = (self.angle - item.0 as f64 * step).abs();
        diff.min(FULL_TURN_DEG - diff) < step / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/rotate.rs"]
mod tests;
