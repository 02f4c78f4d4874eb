use super::*;

#[test]
fn progress_clamps_to_unit_range() {
    assert_eq!(Progress::new(-0.5).value(), 0.0);
    assert_eq!(Progress::new(0.5).value(), 0.5);
    assert_eq!(Progress::new(1.5).value(), 1.0);
}

#[test]
fn progress_rejects_non_finite() {
    assert_eq!(Progress::new(f64::NAN).value(), 0.0);
    assert_eq!(Progress::new(f64::INFINITY).value(), 0.0);
}

#[test]
fn offset_saturates_at_range_ends() {
    let p = Progress::new(0.95).offset_by(0.1);
    assert_eq!(p.value(), 1.0);
    assert!(p.is_at_end());

    let p = Progress::new(0.01).offset_by(-0.1);
    assert_eq!(p.value(), 0.0);
    assert!(p.is_at_start());
}

#[test]
fn progress_deserializes_through_clamp() {
    let p: Progress = serde_json::from_str("3.0").unwrap();
    assert_eq!(p.value(), 1.0);
}

#[test]
fn fills_viewport_requires_top_and_bottom_overhang() {
    let vp = Viewport { height: 800.0 };
    let filling = ContainerRect {
        top: 0.0,
        height: 2000.0,
    };
    assert!(filling.fills_viewport(vp));

    let below = ContainerRect {
        top: 120.0,
        height: 2000.0,
    };
    assert!(!below.fills_viewport(vp));

    let short = ContainerRect {
        top: -100.0,
        height: 800.0,
    };
    assert!(!short.fills_viewport(vp));
}

#[test]
fn bottom_is_top_plus_height() {
    let rect = ContainerRect {
        top: -300.0,
        height: 1000.0,
    };
    assert_eq!(rect.bottom(), 700.0);
}
