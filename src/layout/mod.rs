//! Responsive block sizing.

/// Width breakpoints and measured auto-height.
pub mod sizing;
