//! Easing curves shared by stage transitions and step cycles.

/// Easing functions over `[0, 1]`.
pub mod ease;
