use crate::animation::ease::Ease;
use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::foundation::error::{ShowreelError, ShowreelResult};

/// One window of a piecewise scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollPhase {
    /// Frame where this phase starts contributing.
    pub start_frame: f64,
    /// Frame where this phase reaches its full distance.
    pub end_frame: f64,
    /// Total offset contributed once the phase completes.
    pub distance: f64,
    /// Easing of the contribution (ease-out quad unless overridden).
    #[serde(default = "default_scroll_ease")]
    pub easing: Ease,
}

fn default_scroll_ease() -> Ease {
    Ease::OutQuad
}

impl ScrollPhase {
    /// Phase with the default ease-out quad curve.
    pub fn new(start_frame: f64, end_frame: f64, distance: f64) -> Self {
        Self {
            start_frame,
            end_frame,
            distance,
            easing: default_scroll_ease(),
        }
    }

    /// Replace the easing curve.
    pub fn ease(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }

    /// This phase's clamped contribution at `frame`.
    pub fn offset_at(&self, frame: f64) -> f64 {
        interpolate(
            frame,
            [self.start_frame, self.end_frame],
            [0.0, self.distance],
            InterpolateOpts::clamp().ease(self.easing),
        )
    }

    /// Reject phases that end before they start.
    pub fn validate(&self) -> ShowreelResult<()> {
        if self.end_frame < self.start_frame {
            return Err(ShowreelError::animation(format!(
                "scroll phase ends ({}) before it starts ({})",
                self.end_frame, self.start_frame
            )));
        }
        Ok(())
    }
}

/// Total scroll offset at `frame`: the sum of every phase's independent contribution.
///
/// Overlapping phases add up; there is no blending between them.
pub fn calculate_scroll(frame: f64, phases: &[ScrollPhase]) -> f64 {
    phases.iter().map(|p| p.offset_at(frame)).sum()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scroll.rs"]
mod tests;
