use crate::animation::entrance::{DEFAULT_ENTRANCE_PRESET, fade_in, spring_entrance};
use crate::animation::spring::{Motion, spring};
use crate::foundation::core::{Fps, FrameIndex};

/// Time context handed to every component: the (possibly sequence-local) frame and the fps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCtx {
    /// Local frame. Negative before a sequence starts.
    pub frame: f64,
    /// Frames per second of the composition.
    pub fps: Fps,
}

impl FrameCtx {
    /// Context for a host-supplied frame.
    pub fn new(frame: FrameIndex, fps: Fps) -> Self {
        Self {
            frame: frame.as_f64(),
            fps,
        }
    }

    /// Child timeline starting at `from`, alive for `duration` frames (forever when `None`).
    ///
    /// Returns `None` outside the window; inside, the child sees `frame - from`.
    pub fn sequence(self, from: u64, duration: Option<u64>) -> Option<Self> {
        let local = self.frame - from as f64;
        if local < 0.0 {
            return None;
        }
        if let Some(d) = duration
            && local >= d as f64
        {
            return None;
        }
        Some(Self {
            frame: local,
            fps: self.fps,
        })
    }

    /// Return `true` once the frame reaches `at`.
    pub fn reached(self, at: u64) -> bool {
        self.frame >= at as f64
    }

    /// Snappy spring entrance after `delay`, floored at 0.
    pub fn entrance(self, delay: u64) -> f64 {
        spring_entrance(self.frame, delay as f64, self.fps, DEFAULT_ENTRANCE_PRESET)
    }

    /// Raw spring progress after `delay` frames with the given motion.
    pub fn spring(self, delay: f64, motion: impl Into<Motion>) -> f64 {
        spring(self.frame - delay, self.fps, motion)
    }

    /// Linear clamped fade over `duration` frames after `delay`.
    pub fn fade_in(self, delay: u64, duration: u64) -> f64 {
        fade_in(self.frame, delay as f64, duration as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/context.rs"]
mod tests;
