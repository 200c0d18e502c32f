use super::*;

#[test]
fn clamp_law_holds_outside_range() {
    let o = InterpolateOpts::clamp();
    for f in [-100.0, -1.0, 0.0, 10.0] {
        assert_eq!(interpolate(f, [10.0, 20.0], [3.0, 7.0], o), 3.0);
    }
    for f in [20.0, 21.0, 1e6] {
        assert_eq!(interpolate(f, [10.0, 20.0], [3.0, 7.0], o), 7.0);
    }
}

#[test]
fn strictly_monotonic_inside_range() {
    for easing in [Ease::Linear, Ease::OutQuad, Ease::InOutQuad, Ease::EaseInOut] {
        let o = InterpolateOpts::clamp().ease(easing);
        let mut prev = interpolate(10.0, [10.0, 20.0], [0.0, 1.0], o);
        for i in 1..10 {
            let v = interpolate(10.0 + f64::from(i), [10.0, 20.0], [0.0, 1.0], o);
            assert!(v > prev, "{easing:?} at {i}");
            prev = v;
        }
    }
}

#[test]
fn decreasing_outputs_interpolate_downward() {
    let v = interpolate(95.0, [90.0, 120.0], [1.0, 0.0], InterpolateOpts::clamp());
    assert!((v - (1.0 - 5.0 / 30.0)).abs() < 1e-12);
}

#[test]
fn extend_continues_linearly() {
    let o = InterpolateOpts::extend();
    assert_eq!(interpolate(30.0, [0.0, 15.0], [0.0, 1.0], o), 2.0);
    assert_eq!(interpolate(-15.0, [0.0, 15.0], [0.0, 1.0], o), -1.0);
}

#[test]
fn clamp_right_leaves_left_extended() {
    let o = InterpolateOpts::clamp_right();
    assert_eq!(interpolate(-10.0, [0.0, 10.0], [0.0, 1.0], o), -1.0);
    assert_eq!(interpolate(50.0, [0.0, 10.0], [0.0, 1.0], o), 1.0);
}

#[test]
fn identity_returns_input_outside_range() {
    let o = InterpolateOpts {
        left: Extrapolate::Identity,
        right: Extrapolate::Identity,
        ..InterpolateOpts::default()
    };
    assert_eq!(interpolate(-4.0, [0.0, 1.0], [10.0, 20.0], o), -4.0);
    assert_eq!(interpolate(9.0, [0.0, 1.0], [10.0, 20.0], o), 9.0);
}

#[test]
fn degenerate_input_range_is_a_step() {
    let o = InterpolateOpts::clamp();
    assert_eq!(interpolate(4.0, [5.0, 5.0], [0.0, 1.0], o), 0.0);
    assert_eq!(interpolate(5.0, [5.0, 5.0], [0.0, 1.0], o), 1.0);
    assert!(interpolate(6.0, [5.0, 5.0], [0.0, 1.0], o).is_finite());
}

#[test]
fn pulse_maps_sine_into_band() {
    for f in 0..200 {
        let v = pulse(f64::from(f), 0.2, 0.5, 1.0);
        assert!((0.5..=1.0).contains(&v));
    }
    assert!((pulse(0.0, 0.2, 0.5, 1.0) - 0.75).abs() < 1e-12);
}
