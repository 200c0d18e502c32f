//! Frame evaluation over ranges.

/// Single-frame and range evaluation with optional parallelism and static-frame elision.
pub mod pipeline;
