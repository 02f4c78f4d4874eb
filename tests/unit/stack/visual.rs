use super::*;

#[test]
fn lerp_endpoints_reproduce_inputs() {
    let a = VisualState::WAITING;
    let b = VisualState::HELD;
    assert_eq!(VisualState::lerp(a, b, 0.0).translate_y, a.translate_y);
    assert_eq!(VisualState::lerp(a, b, 1.0).opacity, b.opacity);
}

#[test]
fn lerp_midpoint_is_componentwise() {
    let mid = VisualState::lerp(VisualState::WAITING, VisualState::HELD, 0.5);
    assert_eq!(mid.translate_y, 90.0);
    assert!((mid.opacity - 0.7).abs() < 1e-12);
    assert_eq!(mid.blur_px, 4.0);
    assert!((mid.brightness - 0.85).abs() < 1e-12);
}

#[test]
fn lerp_clamps_t_and_zeroes_z_index() {
    let a = VisualState::HELD.with_z_index(80);
    let b = VisualState::EXITED.with_z_index(20);
    let out = VisualState::lerp(a, b, 2.0);
    assert_eq!(out.scale, b.scale);
    assert_eq!(out.z_index, 0);
}

#[test]
fn endpoint_constants_match_the_shipped_design() {
    assert_eq!(VisualState::WAITING.translate_y, 180.0);
    assert_eq!(VisualState::WAITING.blur_px, 8.0);
    assert_eq!(VisualState::HELD.opacity, 1.0);
    assert_eq!(VisualState::EXITED.translate_y, -40.0);
    assert_eq!(VisualState::EXITED.scale, 0.85);
}
