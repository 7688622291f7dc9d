use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::foundation::core::{Fps, FrameIndex};

/// Elapsed time measured in (fractional) frames.
///
/// Every timeline consumes this one quantity, whichever clock produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
pub struct ElapsedFrames(pub f64);

impl ElapsedFrames {
    /// Zero elapsed time.
    pub const ZERO: Self = Self(0.0);

    /// Build from a raw frame count; negative or non-finite inputs collapse to zero.
    pub fn new(frames: f64) -> Self {
        if frames.is_finite() && frames > 0.0 {
            Self(frames)
        } else {
            Self::ZERO
        }
    }

    /// The raw frame count.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Integral frame index containing this instant.
    pub fn floor_frame(self) -> FrameIndex {
        FrameIndex(self.0.floor() as u64)
    }

    /// Time remaining after `offset` frames, saturating at zero.
    pub fn saturating_sub(self, offset: f64) -> Self {
        Self::new(self.0 - offset)
    }
}

const FRAME_SNAP_EPSILON: f64 = 1e-6;

/// Where elapsed time comes from for a single sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeSource {
    /// Deterministic export: a monotonic frame index.
    Frame(FrameIndex),
    /// Interactive playback: milliseconds since the animation started.
    WallClock {
        /// Elapsed wall-clock milliseconds.
        elapsed_ms: f64,
    },
}

impl TimeSource {
    /// Normalize to elapsed frames at `fps`.
    ///
    /// Wall-clock time is not rounded to whole frames, so the interactive path sees the same
    /// continuous timeline the frame path samples. Values within `1e-6` of a whole frame snap
    /// onto it.
    pub fn elapsed(self, fps: Fps) -> ElapsedFrames {
        match self {
            Self::Frame(f) => ElapsedFrames::new(f.0 as f64),
            Self::WallClock { elapsed_ms } => {
                let frames = fps.ms_to_frames(elapsed_ms);
                let nearest = frames.round();
                // Millisecond round-trips must not drop an exact frame boundary by one ulp.
                if (frames - nearest).abs() < FRAME_SNAP_EPSILON {
                    ElapsedFrames::new(nearest)
                } else {
                    ElapsedFrames::new(frames)
                }
            }
        }
    }

    /// Whole frame used for frame-quantized effects such as cursor blinking.
    pub fn frame(self, fps: Fps) -> FrameIndex {
        match self {
            Self::Frame(f) => f,
            Self::WallClock { .. } => self.elapsed(fps).floor_frame(),
        }
    }
}

/// Monotonic millisecond clock for interactive playback.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_ms(&self) -> f64;
}

/// [`Clock`] backed by [`std::time::Instant`].
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start a clock whose origin is "now".
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Host-driven clock. Clones share the same time value.
///
/// Useful when the host already owns an animation-callback timestamp, and in tests.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    ms: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Clock starting at `0 ms`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute time.
    pub fn set_ms(&self, ms: f64) {
        self.ms.set(ms);
    }

    /// Move time forward by `delta_ms`.
    pub fn advance_ms(&self, delta_ms: f64) {
        self.ms.set(self.ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.ms.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/time/source.rs"]
mod tests;
