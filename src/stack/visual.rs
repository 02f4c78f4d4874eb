//! The per-card style record handed to the render sink.

/// Derived visual state for one card at one tick.
///
/// Recomputed on every qualifying input event and never persisted. The sink
/// is expected to fold the transform components into a single batched style
/// write (last-write-wins).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Vertical offset in px (positive is below the held position).
    pub translate_y: f64,
    /// Depth offset in px (negative recedes from the viewer).
    pub translate_z: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation around the horizontal axis, in degrees.
    pub rotate_x_deg: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Gaussian blur radius in px.
    pub blur_px: f64,
    /// Brightness multiplier (`1.0` is unfiltered).
    pub brightness: f64,
    /// Stacking order; the currently held card gets the highest value.
    pub z_index: i32,
}

impl VisualState {
    /// Pre-entry rendering: dimmed, blurred, offset below its final position.
    pub const WAITING: Self = Self {
        translate_y: 180.0,
        translate_z: 0.0,
        scale: 1.0,
        rotate_x_deg: 0.0,
        opacity: 0.4,
        blur_px: 8.0,
        brightness: 0.7,
        z_index: 0,
    };

    /// Fully visible, centered, undistorted rendering.
    pub const HELD: Self = Self {
        translate_y: 0.0,
        translate_z: 0.0,
        scale: 1.0,
        rotate_x_deg: 0.0,
        opacity: 1.0,
        blur_px: 0.0,
        brightness: 1.0,
        z_index: 0,
    };

    /// Post-exit rendering: shrunk, lifted, dimmed behind the next card.
    pub const EXITED: Self = Self {
        translate_y: -40.0,
        translate_z: 0.0,
        scale: 0.85,
        rotate_x_deg: 0.0,
        opacity: 0.4,
        blur_px: 6.0,
        brightness: 0.8,
        z_index: 0,
    };

    /// Component-wise linear interpolation between `a` and `b`.
    ///
    /// `z_index` is not interpolated; it is assigned separately from window
    /// distance so the held card occludes its neighbors during cross-fade.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: f64, y: f64| x + (y - x) * t;
        Self {
            translate_y: mix(a.translate_y, b.translate_y),
            translate_z: mix(a.translate_z, b.translate_z),
            scale: mix(a.scale, b.scale),
            rotate_x_deg: mix(a.rotate_x_deg, b.rotate_x_deg),
            opacity: mix(a.opacity, b.opacity),
            blur_px: mix(a.blur_px, b.blur_px),
            brightness: mix(a.brightness, b.brightness),
            z_index: 0,
        }
    }

    /// Copy of `self` with `z_index` set.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stack/visual.rs"]
mod tests;
