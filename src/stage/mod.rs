//! Progress-driven diagrams.

/// Per-element appear gates.
pub mod appear;
/// Elapsed time to progress, and fixed-length step cycles.
pub mod driver;
/// Progress to discrete stages with dwell and eased transitions.
pub mod progress;
