use super::*;

fn quad() -> Carousel {
    Carousel::new(CarouselConfig::for_cards(4)).unwrap()
}

/// Spin until the next front snap, with a cap so a broken snap fails the
/// test instead of hanging it.
fn advance_to_snap(carousel: &mut Carousel) -> usize {
    for _ in 0..2000 {
        if let Some(position) = carousel.advance() {
            return position;
        }
    }
    panic!("no snap within 2000 frames");
}

#[test]
fn config_is_validated() {
    assert!(Carousel::new(CarouselConfig::for_cards(0)).is_err());

    let mut config = CarouselConfig::for_cards(4);
    config.speed_deg_per_frame = 0.0;
    assert!(config.validate().is_err());
    // A frame step at or past the snap epsilon could jump over a card
    // position entirely.
    config.speed_deg_per_frame = SNAP_EPSILON_DEG;
    assert!(config.validate().is_err());

    let mut config = CarouselConfig::for_cards(4);
    config.radius_px = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn angle_step_divides_the_full_turn() {
    assert_eq!(CarouselConfig::for_cards(4).angle_step(), 90.0);
    assert_eq!(CarouselConfig::for_cards(3).angle_step(), 120.0);
}

#[test]
fn first_frame_snaps_to_the_front_card() {
    // The ring starts on card 0's position, so the very first frame snaps
    // and pauses there.
    let mut carousel = quad();
    assert_eq!(carousel.advance(), Some(0));
    assert_eq!(carousel.angle(), 0.0);
    assert!(carousel.is_paused());
}

#[test]
fn snap_pause_holds_until_resume() {
    let mut carousel = quad();
    carousel.advance();
    assert!(carousel.is_paused());
    assert_eq!(carousel.advance(), None);
    assert_eq!(carousel.angle(), 0.0);

    carousel.resume();
    assert!(!carousel.is_paused());
    assert_eq!(carousel.angle(), RESUME_NUDGE_DEG);
}

#[test]
fn resumed_position_does_not_immediately_resnap() {
    let mut carousel = quad();
    carousel.advance();
    carousel.resume();
    // The next few frames are still within a degree of card 0's position.
    for _ in 0..4 {
        assert_eq!(carousel.advance(), None);
    }
}

#[test]
fn ring_snaps_at_each_card_position_in_order() {
    let mut carousel = quad();
    assert_eq!(advance_to_snap(&mut carousel), 0);
    carousel.resume();
    assert_eq!(advance_to_snap(&mut carousel), 1);
    assert_eq!(carousel.angle(), 90.0);
    carousel.resume();
    assert_eq!(advance_to_snap(&mut carousel), 2);
    assert_eq!(carousel.angle(), 180.0);
}

#[test]
fn full_revolution_pauses_at_the_front_card_again() {
    let mut carousel = quad();
    for expected in [0, 1, 2, 3] {
        assert_eq!(advance_to_snap(&mut carousel), expected);
        carousel.resume();
    }
    // Wrapped past 360: card 0 is eligible again.
    assert_eq!(advance_to_snap(&mut carousel), 0);
    assert_eq!(carousel.angle(), 0.0);
}

#[test]
fn hover_pause_freezes_the_angle() {
    let mut carousel = quad();
    carousel.advance();
    carousel.resume();
    let angle = carousel.angle();

    carousel.set_hovered(true);
    assert_eq!(carousel.advance(), None);
    assert_eq!(carousel.angle(), angle);

    carousel.set_hovered(false);
    carousel.advance();
    assert!(carousel.angle() > angle);
}

#[test]
fn stepping_moves_one_card_at_a_time() {
    let mut carousel = quad();
    carousel.step_next();
    assert_eq!(carousel.angle(), 90.0);
    carousel.step_next();
    assert_eq!(carousel.angle(), 180.0);
    carousel.step_prev();
    assert_eq!(carousel.angle(), 90.0);
}

#[test]
fn stepping_backward_wraps_around_the_ring() {
    let mut carousel = quad();
    carousel.step_prev();
    assert_eq!(carousel.angle(), 270.0);
}

#[test]
fn stage_rotation_opposes_the_angle() {
    let mut carousel = quad();
    carousel.step_next();
    assert_eq!(carousel.stage_rotation_deg(), -90.0);
}

#[test]
fn cards_are_placed_on_fixed_spokes() {
    let carousel = quad();
    let placement = carousel.card_placement(ItemIndex(2)).unwrap();
    assert_eq!(placement.rotate_y_deg, 180.0);
    assert_eq!(placement.translate_z_px, DEFAULT_RADIUS_PX);

    assert!(carousel.card_placement(ItemIndex(4)).is_err());
}

#[test]
fn front_card_tracks_the_stage_angle() {
    let mut carousel = quad();
    assert!(carousel.is_front(ItemIndex(0)));
    assert!(!carousel.is_front(ItemIndex(1)));

    carousel.step_next();
    assert!(carousel.is_front(ItemIndex(1)));
    assert!(!carousel.is_front(ItemIndex(0)));
}

#[test]
fn front_window_wraps_across_zero() {
    let mut carousel = quad();
    carousel.angle = 350.0;
    assert!(carousel.is_front(ItemIndex(0)));
    assert!(!carousel.is_front(ItemIndex(3)));
}

#[test]
fn halfway_between_cards_neither_is_front() {
    let mut carousel = quad();
    carousel.angle = 45.0;
    assert!(!carousel.is_front(ItemIndex(0)));
    assert!(!carousel.is_front(ItemIndex(1)));
}

#[test]
fn out_of_range_card_is_never_front() {
    let carousel = quad();
    assert!(!carousel.is_front(ItemIndex(7)));
}
