use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn fade_in_is_clamped_both_sides() {
    assert_eq!(fade_in(0.0, 10.0, DEFAULT_FADE_FRAMES), 0.0);
    assert_eq!(fade_in(10.0, 10.0, DEFAULT_FADE_FRAMES), 0.0);
    assert!((fade_in(17.5, 10.0, DEFAULT_FADE_FRAMES) - 0.5).abs() < 1e-12);
    assert_eq!(fade_in(25.0, 10.0, DEFAULT_FADE_FRAMES), 1.0);
    assert_eq!(fade_in(1000.0, 10.0, DEFAULT_FADE_FRAMES), 1.0);
}

#[test]
fn nothing_moves_before_delay() {
    for f in 0..20 {
        let f = f64::from(f);
        assert_eq!(spring_entrance(f, 20.0, fps30(), DEFAULT_ENTRANCE_PRESET), 0.0);
        assert_eq!(scale_in(f, 20.0, fps30(), DEFAULT_SCALE_PRESET), 0.0);
        let s = slide_in(f, 20.0, DEFAULT_SLIDE_DISTANCE, fps30(), DEFAULT_ENTRANCE_PRESET);
        assert_eq!(s.opacity, 0.0);
        assert_eq!(s.offset_x, DEFAULT_SLIDE_DISTANCE);
    }
}

#[test]
fn slide_offset_tracks_progress() {
    let s = slide_in(45.0, 5.0, 40.0, fps30(), SpringPreset::Gentle);
    let p = spring_entrance(45.0, 5.0, fps30(), SpringPreset::Gentle);
    assert_eq!(s.opacity, p);
    assert!((s.offset_x - (1.0 - p) * 40.0).abs() < 1e-12);
}

#[test]
fn scale_in_keeps_bouncy_overshoot() {
    let peak = (0..60)
        .map(|f| scale_in(f64::from(f), 0.0, fps30(), SpringPreset::Bouncy))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}
