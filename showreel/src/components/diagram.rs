use kurbo::{CubicBez, ParamCurveArclen};

use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::eval::context::FrameCtx;
use crate::foundation::core::{BezPath, Point};
use crate::scene::model::{Dash, PathNode, SceneNode, Stroke};
use crate::theme::color::Color;

const ARCLEN_ACCURACY: f64 = 1e-3;

/// Horizontal S-curve from `start` to `end`, bowing out by 40% of the horizontal gap.
pub fn connection_curve(start: Point, end: Point) -> CubicBez {
    let dir = if end.x < start.x { -1.0 } else { 1.0 };
    let offset = (start.x - end.x).abs() * 0.4;
    CubicBez::new(
        start,
        Point::new(start.x + dir * offset, start.y),
        Point::new(end.x - dir * offset, end.y),
        end,
    )
}

/// Mind-map edge that draws itself from `start` to `end` once `appear_frame` is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionLine {
    /// Anchor on the hub.
    pub start: Point,
    /// Anchor on the leaf.
    pub end: Point,
    /// Stroke color.
    pub color: Color,
    /// First frame of the draw animation.
    pub appear_frame: f64,
    /// Frames taken to draw the full curve.
    pub draw_frames: f64,
}

impl ConnectionLine {
    /// Edge drawn over 18 frames.
    pub fn new(start: Point, end: Point, color: Color, appear_frame: f64) -> Self {
        Self {
            start,
            end,
            color,
            appear_frame,
            draw_frames: 18.0,
        }
    }

    /// Drawn fraction of the curve at `frame`.
    pub fn progress(&self, frame: f64) -> f64 {
        interpolate(
            frame - self.appear_frame,
            [0.0, self.draw_frames],
            [0.0, 1.0],
            InterpolateOpts::clamp(),
        )
    }

    /// Path node at `ctx.frame`, or `None` before the edge appears.
    ///
    /// The dash covers the whole arc length and its offset shrinks to zero, so the
    /// visible stroke grows from `start`.
    pub fn render(&self, ctx: FrameCtx) -> Option<SceneNode> {
        if ctx.frame < self.appear_frame {
            return None;
        }
        let curve = connection_curve(self.start, self.end);
        let length = curve.arclen(ARCLEN_ACCURACY);
        let progress = self.progress(ctx.frame);

        let mut path = BezPath::new();
        path.move_to(curve.p0);
        path.curve_to(curve.p1, curve.p2, curve.p3);

        Some(
            PathNode {
                d: path.to_svg(),
                length,
                stroke: Stroke {
                    color: self.color,
                    width: 2.0,
                    glow: 0.0,
                },
                dash: Some(Dash {
                    array: length,
                    offset: length * (1.0 - progress),
                }),
                opacity: progress * 0.6,
            }
            .into(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/diagram.rs"]
mod tests;
