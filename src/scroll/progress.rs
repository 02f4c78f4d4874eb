//! Deriving global progress from container geometry.

use crate::foundation::core::{ContainerRect, Progress, Viewport};

/// Raw progress of the tracked container through the viewport:
/// `(viewport_height·anchor − container_top) / (container_height − viewport_height·anchor)`,
/// clamped to `[0, 1]`.
///
/// `anchor` is the screen-specific `k` constant (shipped values: `0.5` and
/// `1.0`). Degenerate geometry — a container no taller than the anchored
/// viewport span — yields `Progress::ZERO` rather than an error; the
/// measurement may simply not be settled yet.
pub fn progress_from_geometry(
    container: ContainerRect,
    viewport: Viewport,
    anchor: f64,
) -> Progress {
    let lead = viewport.height * anchor;
    let denom = container.height - lead;
    if !(denom > 0.0) {
        return Progress::ZERO;
    }
    Progress::new((lead - container.top) / denom)
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;
