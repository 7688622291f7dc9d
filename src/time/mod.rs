//! Normalizing frame indices and wall clocks into one elapsed-time quantity.

/// Elapsed frames, time sources and clocks.
pub mod source;
