//! Core value types, errors and small math helpers.

/// Frame indices, ranges, fps and block sizes.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Fingerprint hashing and scalar helpers.
pub mod math;
