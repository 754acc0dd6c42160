use snapdeck::tween::{Easing, Tween};

#[test]
fn easing_hits_endpoints_and_midpoint() {
    for easing in [Easing::Linear, Easing::Power4InOut] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert_eq!(easing.apply(0.5), 0.5);
    }
}

#[test]
fn power4_is_slow_at_the_ends() {
    let e = Easing::Power4InOut;
    assert!(e.apply(0.1) < 0.01);
    assert!(e.apply(0.9) > 0.99);
    let mut last = 0.0;
    for step in 1..=100 {
        let v = e.apply(step as f64 / 100.0);
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn easing_clamps_progress() {
    assert_eq!(Easing::Power4InOut.apply(-0.5), 0.0);
    assert_eq!(Easing::Power4InOut.apply(2.0), 1.0);
}

#[test]
fn tween_starts_on_first_sample() {
    let mut tween = Tween::new(0.0, -1000.0, 800.0, Easing::Linear);
    let first = tween.sample(5000.0);
    assert_eq!(first.value, 0.0);
    assert!(!first.finished);

    let half = tween.sample(5400.0);
    assert_eq!(half.value, -500.0);
    assert!(!half.finished);

    let done = tween.sample(5800.0);
    assert_eq!(done.value, -1000.0);
    assert!(done.finished);

    // Late frames stay on the target.
    assert_eq!(tween.sample(9000.0).value, -1000.0);
}

#[test]
fn zero_duration_finishes_immediately() {
    let mut tween = Tween::new(10.0, 20.0, 0.0, Easing::default());
    let sample = tween.sample(0.0);
    assert_eq!(sample.value, 20.0);
    assert!(sample.finished);
    assert_eq!(tween.target(), 20.0);
}
