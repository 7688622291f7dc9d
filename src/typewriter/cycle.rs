use crate::time::source::ElapsedFrames;
use crate::typewriter::timeline::TypewriterTimeline;

/// One typing pass plus the trailing hold before a loop restarts.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Cycle {
    typing_frames: f64,
    end_delay_frames: f64,
}

impl Cycle {
    /// Build a cycle; negative or non-finite parts collapse to zero.
    pub fn new(typing_frames: f64, end_delay_frames: f64) -> Self {
        fn sanitize(v: f64) -> f64 {
            if v.is_finite() { v.max(0.0) } else { 0.0 }
        }
        Self {
            typing_frames: sanitize(typing_frames),
            end_delay_frames: sanitize(end_delay_frames),
        }
    }

    /// Cycle for `timeline` followed by `end_delay_frames` of hold.
    pub fn for_timeline(timeline: &TypewriterTimeline, end_delay_frames: f64) -> Self {
        Self::new(timeline.typing_frames(), end_delay_frames)
    }

    /// Frames spent typing.
    pub fn typing_frames(self) -> f64 {
        self.typing_frames
    }

    /// Frames the full text is held before the next pass.
    pub fn end_delay_frames(self) -> f64 {
        self.end_delay_frames
    }

    /// `typing_frames + end_delay_frames`.
    pub fn total_frames(self) -> f64 {
        self.typing_frames + self.end_delay_frames
    }
}

/// Where raw elapsed time lands inside a [`Cycle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopPosition {
    /// In-cycle time to feed to the typewriter.
    pub effective: ElapsedFrames,
    /// Typing has finished for the current pass.
    pub complete: bool,
    /// At least one full cycle has elapsed.
    pub wrapped: bool,
    /// Zero-based pass number.
    pub cycle_index: u64,
}

/// Maps raw elapsed time onto a [`Cycle`], either repeating it or holding at the end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopController {
    cycle: Cycle,
    looping: bool,
}

impl LoopController {
    /// Controller for `cycle`; `looping` selects repeat vs hold.
    pub fn new(cycle: Cycle, looping: bool) -> Self {
        Self { cycle, looping }
    }

    /// The wrapped cycle.
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    /// Whether the cycle repeats.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Resolve `raw` frames since typing start.
    ///
    /// The in-cycle position is always derived from the absolute `raw` value, never from
    /// accumulated deltas, so arbitrarily long clocks cannot drift.
    pub fn resolve(&self, raw: ElapsedFrames) -> LoopPosition {
        let raw = raw.get();
        let typing = self.cycle.typing_frames();

        if !self.looping {
            let complete = raw >= typing;
            return LoopPosition {
                effective: ElapsedFrames::new(raw.min(typing)),
                complete,
                wrapped: false,
                cycle_index: 0,
            };
        }

        let total = self.cycle.total_frames();
        if total <= 0.0 {
            return LoopPosition {
                effective: ElapsedFrames::ZERO,
                complete: true,
                wrapped: false,
                cycle_index: 0,
            };
        }

        let cycle_index = (raw / total).floor();
        let effective = raw % total;
        LoopPosition {
            effective: ElapsedFrames::new(effective),
            complete: effective >= typing,
            wrapped: cycle_index >= 1.0,
            cycle_index: cycle_index as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/typewriter/cycle.rs"]
mod tests;
