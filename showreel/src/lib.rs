//! Showreel turns short terminal demo videos into code.
//!
//! The crate has two layers:
//!
//! - a timing layer ([`animation`]) of pure frame-to-value functions: interpolation with easing
//!   and extrapolation, damped springs, typewriter progress, staggered entrances and scroll
//!   phases;
//! - a composition layer ([`compositions`]) where each registered video maps a frame index to a
//!   complete [`SceneNode`](scene::SceneNode) tree built from themed [`components`].
//!
//! Ranges of frames are evaluated through [`render::pipeline`] (optionally in parallel) and
//! handed in timeline order to a [`FrameSink`](encode::sink::FrameSink).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Frame-driven timing primitives.
pub mod animation;
/// Themed building blocks shared by the compositions.
pub mod components;
/// Registered compositions.
pub mod compositions;
/// Scene sinks.
pub mod encode;
pub(crate) mod eval;
/// Frame evaluation over ranges.
pub mod render;
/// Declarative scene tree emitted for every frame.
pub mod scene;
/// Palettes, effects and typography.
pub mod theme;
pub(crate) mod timeline;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Vec2};
pub use crate::foundation::error::{ShowreelError, ShowreelResult};

pub use crate::compositions::{Composition, CompositionId, CompositionInfo, registry};
pub use crate::encode::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
pub use crate::eval::context::FrameCtx;
pub use crate::render::pipeline::{
    RenderOpts, RenderStats, evaluate_frame, evaluate_frames, evaluate_range,
};
pub use crate::theme::{Color, Theme, ThemeName};
pub use crate::timeline::phase::{Phase, PhaseTable};
