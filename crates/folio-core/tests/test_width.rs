use folio_core::consts::MAX_PAGE_WIDTH;
use folio_core::viewer::{WidthSource, WidthTracker};

#[test]
fn test_unknown_width_uses_cap() {
    let tracker = WidthTracker::observing(MAX_PAGE_WIDTH);
    assert_eq!(tracker.container_width(), None);
    assert_eq!(tracker.render_width(), 800.0);
}

#[test]
fn test_narrow_container_is_used_as_is() {
    let mut tracker = WidthTracker::observing(MAX_PAGE_WIDTH);
    assert!(tracker.observe(600.0));
    assert_eq!(tracker.render_width(), 600.0);
}

#[test]
fn test_wide_container_is_capped() {
    let mut tracker = WidthTracker::observing(MAX_PAGE_WIDTH);
    assert!(tracker.observe(1000.0));
    assert_eq!(tracker.container_width(), Some(1000.0));
    assert_eq!(tracker.render_width(), 800.0);
}

#[test]
fn test_repeated_identical_width_is_idempotent() {
    let mut tracker = WidthTracker::observing(MAX_PAGE_WIDTH);
    assert!(tracker.observe(640.0));
    let snapshot = tracker.clone();
    for _ in 0..10 {
        assert!(!tracker.observe(640.0));
    }
    assert_eq!(tracker, snapshot);
}

#[test]
fn test_latest_width_wins() {
    let mut tracker = WidthTracker::observing(MAX_PAGE_WIDTH);
    tracker.observe(300.0);
    tracker.observe(500.0);
    assert_eq!(tracker.render_width(), 500.0);
}

#[test]
fn test_non_positive_width_is_unknown() {
    let mut tracker = WidthTracker::observing(MAX_PAGE_WIDTH);
    tracker.observe(400.0);
    assert!(tracker.observe(0.0));
    assert_eq!(tracker.container_width(), None);
    assert_eq!(tracker.render_width(), 800.0);

    assert!(!tracker.observe(-5.0));
    assert!(!tracker.observe(f32::NAN));
    assert_eq!(tracker.render_width(), 800.0);
}

#[test]
fn test_fixed_tracker_ignores_observations() {
    let mut tracker = WidthTracker::fixed(MAX_PAGE_WIDTH);
    assert_eq!(tracker.source(), WidthSource::Fixed);
    assert!(!tracker.observe(320.0));
    assert_eq!(tracker.render_width(), 800.0);
}

#[test]
fn test_custom_cap() {
    let mut tracker = WidthTracker::observing(500.0);
    tracker.observe(640.0);
    assert_eq!(tracker.render_width(), 500.0);
}
