//! Frame-driven timing primitives.
//!
//! Everything here is a pure function of a frame number (plus fps where physics is
//! involved), so any frame can be evaluated in isolation and in any order.

pub(crate) mod ease;
pub(crate) mod entrance;
pub(crate) mod interpolate;
pub(crate) mod scroll;
pub(crate) mod spring;
pub(crate) mod stagger;
pub(crate) mod typewriter;

pub use ease::Ease;
pub use entrance::{
    DEFAULT_ENTRANCE_PRESET, DEFAULT_FADE_FRAMES, DEFAULT_SCALE_PRESET, DEFAULT_SLIDE_DISTANCE,
    SlideIn, fade_in, scale_in, slide_in, spring_entrance,
};
pub use interpolate::{Extrapolate, InterpolateOpts, interpolate, pulse};
pub use scroll::{ScrollPhase, calculate_scroll};
pub use spring::{Motion, SpringConfig, SpringPreset, measure_spring, spring};
pub use stagger::{DEFAULT_STAGGER, stagger_delay, stagger_from};
pub use typewriter::{
    DEFAULT_CHARS_PER_FRAME, DEFAULT_CHARS_PER_SECOND, DEFAULT_CURSOR_SPEED,
    DEFAULT_DOTS_INTERVAL, cursor_visible, dots_string, typewriter_command_progress,
    typewriter_progress,
};
