//! Scene sinks.
//!
//! Sinks consume evaluated frames in timeline order and are fed by
//! [`evaluate_range`](crate::render::pipeline::evaluate_range).

/// Generic frame sink trait and built-in sinks.
pub mod sink;
