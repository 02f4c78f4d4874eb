use super::*;

const VP: Viewport = Viewport { height: 800.0 };

#[test]
fn progress_is_zero_before_the_container_arrives() {
    // Anchor 0.5: lead = 400. Container top well below the anchor line.
    let rect = ContainerRect {
        top: 1200.0,
        height: 2400.0,
    };
    assert_eq!(progress_from_geometry(rect, VP, 0.5).value(), 0.0);
}

#[test]
fn progress_matches_the_formula_mid_scroll() {
    // lead = 400, denom = 2400 - 400 = 2000, top = -600 -> (400+600)/2000.
    let rect = ContainerRect {
        top: -600.0,
        height: 2400.0,
    };
    let p = progress_from_geometry(rect, VP, 0.5);
    assert!((p.value() - 0.5).abs() < 1e-12);
}

#[test]
fn progress_saturates_at_one_past_the_container() {
    let rect = ContainerRect {
        top: -5000.0,
        height: 2400.0,
    };
    assert_eq!(progress_from_geometry(rect, VP, 0.5).value(), 1.0);
}

#[test]
fn full_viewport_anchor_shifts_the_range() {
    // Anchor 1.0: lead = 800, denom = 1600, top = 0 -> 0.5.
    let rect = ContainerRect {
        top: 0.0,
        height: 2400.0,
    };
    let p = progress_from_geometry(rect, VP, 1.0);
    assert!((p.value() - 0.5).abs() < 1e-12);
}

#[test]
fn degenerate_geometry_yields_zero() {
    // Container no taller than the anchored span: denominator <= 0.
    let rect = ContainerRect {
        top: -100.0,
        height: 400.0,
    };
    assert_eq!(progress_from_geometry(rect, VP, 0.5).value(), 0.0);
    let empty = ContainerRect {
        top: 0.0,
        height: 0.0,
    };
    assert_eq!(progress_from_geometry(empty, VP, 1.0).value(), 0.0);
}
