//! Entrance effects composed from [`spring`] and [`interpolate`].

use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::animation::spring::{Motion, SpringPreset, spring};
use crate::foundation::core::Fps;

/// Default fade-in window in frames.
pub const DEFAULT_FADE_FRAMES: f64 = 15.0;
/// Default slide-in travel distance in pixels.
pub const DEFAULT_SLIDE_DISTANCE: f64 = 20.0;
/// Default preset for spring and slide entrances.
pub const DEFAULT_ENTRANCE_PRESET: SpringPreset = SpringPreset::Snappy;
/// Default preset for scale entrances.
pub const DEFAULT_SCALE_PRESET: SpringPreset = SpringPreset::Gentle;

/// Output of [`slide_in`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SlideIn {
    /// Opacity, the clamped spring progress.
    pub opacity: f64,
    /// Horizontal offset in pixels, shrinking to 0 as progress reaches 1.
    pub offset_x: f64,
}

/// Opacity ramp from 0 to 1 over `duration` frames after `delay`, clamped both sides.
pub fn fade_in(frame: f64, delay: f64, duration: f64) -> f64 {
    interpolate(
        frame - delay,
        [0.0, duration],
        [0.0, 1.0],
        InterpolateOpts::clamp(),
    )
}

/// Spring progress after `delay`, floored at 0.
pub fn spring_entrance(frame: f64, delay: f64, fps: Fps, motion: impl Into<Motion>) -> f64 {
    spring(frame - delay, fps, motion).max(0.0)
}

/// Fade plus horizontal slide driven by one spring.
pub fn slide_in(
    frame: f64,
    delay: f64,
    distance: f64,
    fps: Fps,
    motion: impl Into<Motion>,
) -> SlideIn {
    let progress = spring_entrance(frame, delay, fps, motion);
    SlideIn {
        opacity: progress,
        offset_x: (1.0 - progress) * distance,
    }
}

/// Raw spring progress used as a scale factor; overshoot is kept.
pub fn scale_in(frame: f64, delay: f64, fps: Fps, motion: impl Into<Motion>) -> f64 {
    spring(frame - delay, fps, motion)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entrance.rs"]
mod tests;
