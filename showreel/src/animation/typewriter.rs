//! Frame-to-character reveal helpers. All of them are stateless, so seeking backwards
//! reproduces earlier output exactly.

/// Default reveal rate for [`typewriter_progress`].
pub const DEFAULT_CHARS_PER_FRAME: f64 = 1.5;
/// Default reveal rate for [`typewriter_command_progress`].
pub const DEFAULT_CHARS_PER_SECOND: f64 = 25.0;
/// Default oscillator speed for [`cursor_visible`].
pub const DEFAULT_CURSOR_SPEED: f64 = 0.4;
/// Default frames per dot step for [`dots_string`].
pub const DEFAULT_DOTS_INTERVAL: f64 = 8.0;

/// Characters revealed at `frame`: `min(total, floor(max(0, frame - start) * rate))`.
pub fn typewriter_progress(frame: f64, start: f64, total_chars: usize, chars_per_frame: f64) -> usize {
    let elapsed = (frame - start).max(0.0);
    let shown = (elapsed * chars_per_frame.max(0.0)).floor();
    clamp_count(shown, total_chars)
}

/// Characters revealed at `frame` for a rate given in characters per second.
pub fn typewriter_command_progress(
    frame: f64,
    start: f64,
    len: usize,
    fps: f64,
    chars_per_second: f64,
) -> usize {
    if chars_per_second <= 0.0 {
        return 0;
    }
    let local = (frame - start).max(0.0);
    let frames_per_char = fps / chars_per_second;
    if frames_per_char <= 0.0 {
        return len;
    }
    clamp_count((local / frames_per_char).floor(), len)
}

/// Blinking cursor: visible while `sin(frame * speed) > 0`.
pub fn cursor_visible(frame: f64, speed: f64) -> bool {
    (frame * speed).sin() > 0.0
}

/// Animated ellipsis cycling through 0..=3 dots, one step every `interval` frames.
pub fn dots_string(frame: f64, interval: f64) -> String {
    if interval <= 0.0 {
        return String::new();
    }
    let dots = (frame / interval).rem_euclid(4.0).floor() as usize;
    ".".repeat(dots.min(3))
}

fn clamp_count(shown: f64, total: usize) -> usize {
    if shown.is_nan() || shown <= 0.0 {
        0
    } else if shown >= total as f64 {
        total
    } else {
        shown as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/typewriter.rs"]
mod tests;
