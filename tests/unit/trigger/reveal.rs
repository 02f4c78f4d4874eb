use super::*;

#[test]
fn threshold_is_validated() {
    assert!(RevealTrigger::new(0.0).is_err());
    assert!(RevealTrigger::new(1.1).is_err());
    assert!(RevealTrigger::new(0.1).is_ok());
}

#[test]
fn stays_pending_below_the_threshold() {
    let mut trigger = RevealTrigger::new(0.2).unwrap();
    assert!(!trigger.observe(0.0));
    assert!(!trigger.observe(0.19));
    assert_eq!(trigger.state(), RevealState::Pending);
}

#[test]
fn fires_exactly_once_at_the_threshold() {
    let mut trigger = RevealTrigger::new(0.2).unwrap();
    assert!(trigger.observe(0.2));
    assert_eq!(trigger.state(), RevealState::Triggered);

    // Later reports never fire again, visible or not.
    assert!(!trigger.observe(1.0));
    assert!(!trigger.observe(0.0));
    assert_eq!(trigger.state(), RevealState::Triggered);
}
