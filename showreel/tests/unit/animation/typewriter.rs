use super::*;

#[test]
fn progress_starts_at_zero_and_is_bounded() {
    assert_eq!(typewriter_progress(0.0, 60.0, 100, DEFAULT_CHARS_PER_FRAME), 0);
    assert_eq!(typewriter_progress(60.0, 60.0, 100, DEFAULT_CHARS_PER_FRAME), 0);
    assert_eq!(typewriter_progress(61.0, 60.0, 100, DEFAULT_CHARS_PER_FRAME), 1);
    assert_eq!(typewriter_progress(62.0, 60.0, 100, DEFAULT_CHARS_PER_FRAME), 3);
    assert_eq!(typewriter_progress(10_000.0, 60.0, 100, DEFAULT_CHARS_PER_FRAME), 100);
}

#[test]
fn progress_is_monotonic() {
    let mut prev = 0;
    for f in 0..400 {
        let n = typewriter_progress(f64::from(f), 25.0, 250, DEFAULT_CHARS_PER_FRAME);
        assert!(n >= prev);
        assert!(n <= 250);
        prev = n;
    }
}

#[test]
fn seeking_backwards_reproduces_output() {
    let forward: Vec<usize> = (0..100)
        .map(|f| typewriter_progress(f64::from(f), 10.0, 80, 1.5))
        .collect();
    let backward: Vec<usize> = (0..100)
        .rev()
        .map(|f| typewriter_progress(f64::from(f), 10.0, 80, 1.5))
        .collect();
    assert!(forward.iter().eq(backward.iter().rev()));
}

#[test]
fn command_progress_clamps_to_length() {
    // frames_per_char = 1.2, local = 30, floor(30 / 1.2) = 25 -> clamped to 20
    assert_eq!(typewriter_command_progress(40.0, 10.0, 20, 30.0, 25.0), 20);
    assert_eq!(typewriter_command_progress(23.0, 10.0, 20, 30.0, 25.0), 10);
    assert_eq!(typewriter_command_progress(5.0, 10.0, 20, 30.0, 25.0), 0);
}

#[test]
fn command_progress_handles_zero_rate() {
    assert_eq!(typewriter_command_progress(40.0, 10.0, 20, 30.0, 0.0), 0);
}

#[test]
fn cursor_blinks_with_sine() {
    assert!(!cursor_visible(0.0, DEFAULT_CURSOR_SPEED));
    assert!(cursor_visible(std::f64::consts::FRAC_PI_2 / 0.4, DEFAULT_CURSOR_SPEED));
    assert!(cursor_visible(4.0, DEFAULT_CURSOR_SPEED));
    // sin(8 * 0.4) = sin(3.2) < 0
    assert!(!cursor_visible(8.0, DEFAULT_CURSOR_SPEED));
}

#[test]
fn dots_cycle_through_four_states() {
    let seq: Vec<String> = [0.0, 8.0, 16.0, 24.0, 32.0, 39.0]
        .iter()
        .map(|&f| dots_string(f, DEFAULT_DOTS_INTERVAL))
        .collect();
    assert_eq!(seq, ["", ".", "..", "...", "", ""]);
}

#[test]
fn dots_handle_negative_frames() {
    assert_eq!(dots_string(-8.0, DEFAULT_DOTS_INTERVAL), "...");
    assert_eq!(dots_string(-1.0, DEFAULT_DOTS_INTERVAL).len(), 3);
}
