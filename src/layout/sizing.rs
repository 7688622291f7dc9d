use crate::foundation::core::BlockSize;

/// Smallest height an auto-sized block collapses to.
pub const MIN_AUTO_HEIGHT: u32 = 120;

/// Extra pixels added to measured heights so the last line is never clipped.
const MEASURE_SLACK_PX: u32 = 2;

/// Composition width to use for a block on a viewport `viewport_width` pixels wide.
///
/// Wide blocks shrink on narrow viewports so text stays readable. Without a viewport (offline
/// export, no layout host) the configured width is used unchanged.
pub fn effective_block_width(viewport_width: Option<u32>, block_width: u32) -> u32 {
    match viewport_width {
        Some(w) if block_width > 800 && w < 640 => 680,
        Some(w) if block_width > 800 && w < 1024 => 960,
        _ => block_width,
    }
}

/// Height for an auto-sized block from a measured content height.
///
/// Missing or unusable measurements fall back to `fallback`.
pub fn auto_height(measured_px: Option<f64>, fallback: u32) -> u32 {
    match measured_px {
        Some(h) if h.is_finite() && h >= 0.0 => {
            let h = h.ceil().min(f64::from(u32::MAX - MEASURE_SLACK_PX)) as u32;
            (h + MEASURE_SLACK_PX).max(MIN_AUTO_HEIGHT)
        }
        _ => fallback,
    }
}

/// Host-supplied measurements. Every field is optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measurements {
    /// Viewport width in CSS pixels.
    #[serde(default)]
    pub viewport_width: Option<u32>,
    /// Measured full-content height in composition pixels.
    #[serde(default)]
    pub content_height: Option<f64>,
}

/// Final block size for `configured`, applying responsive width and optional auto height.
pub fn resolve_block_size(
    configured: BlockSize,
    measurements: Measurements,
    auto_size_height: bool,
) -> BlockSize {
    let width = effective_block_width(measurements.viewport_width, configured.width);
    let height = if auto_size_height {
        auto_height(measurements.content_height, configured.height)
    } else {
        configured.height
    };
    BlockSize { width, height }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sizing.rs"]
mod tests;
