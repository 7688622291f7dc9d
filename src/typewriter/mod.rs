//! Character-by-character text reveal.
//!
//! [`delay`] decides how long each character takes, [`timeline`] turns that into a prefix-sum
//! schedule, and [`cycle`] repeats or holds the schedule.

/// Loop and hold over one typing cycle.
pub mod cycle;
/// Per-character delay models.
pub mod delay;
/// Reveal schedule and sampling.
pub mod timeline;
