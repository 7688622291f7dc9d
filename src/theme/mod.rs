//! Theme selection and the palettes it resolves to.

/// `#rrggbb` colors.
pub mod color;
/// Light and dark palettes.
pub mod palette;
