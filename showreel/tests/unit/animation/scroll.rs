use super::*;

#[test]
fn single_phase_reference_points() {
    let phases = [ScrollPhase::new(100.0, 200.0, 50.0)];
    assert_eq!(calculate_scroll(100.0, &phases), 0.0);
    // ease-out quad at t = 0.5 is 0.75
    assert!((calculate_scroll(150.0, &phases) - 37.5).abs() < 1e-9);
    assert_eq!(calculate_scroll(250.0, &phases), 50.0);
    assert_eq!(calculate_scroll(0.0, &phases), 0.0);
}

#[test]
fn linear_phase_midpoint_is_half() {
    let phases = [ScrollPhase::new(100.0, 200.0, 50.0).ease(Ease::Linear)];
    assert!((calculate_scroll(150.0, &phases) - 25.0).abs() < 1e-9);
}

#[test]
fn overlapping_phases_sum_independently() {
    let a = ScrollPhase::new(0.0, 100.0, 10.0);
    let b = ScrollPhase::new(50.0, 150.0, 20.0).ease(Ease::InOutQuad);
    let phases = [a, b];
    for f in [0.0, 25.0, 60.0, 99.0, 140.0, 500.0] {
        let total = calculate_scroll(f, &phases);
        assert!((total - (a.offset_at(f) + b.offset_at(f))).abs() < 1e-12);
    }
    assert_eq!(calculate_scroll(1000.0, &phases), 30.0);
}

#[test]
fn scroll_is_monotonic_for_positive_distances() {
    let phases = [
        ScrollPhase::new(90.0, 145.0, 120.0),
        ScrollPhase::new(145.0, 280.0, 280.0),
        ScrollPhase::new(320.0, 520.0, 500.0).ease(Ease::InOutQuad),
    ];
    let mut prev = 0.0;
    for f in 0..600 {
        let v = calculate_scroll(f64::from(f), &phases);
        assert!(v >= prev);
        prev = v;
    }
    assert_eq!(prev, 900.0);
}

#[test]
fn phase_defaults_to_out_quad_when_deserialized() {
    let p: ScrollPhase =
        serde_json::from_str(r#"{"start_frame": 0, "end_frame": 10, "distance": 5}"#).unwrap();
    assert_eq!(p.easing, Ease::OutQuad);
    assert!(p.validate().is_ok());
    assert!(ScrollPhase::new(10.0, 0.0, 1.0).validate().is_err());
}
