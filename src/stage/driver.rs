use crate::animation::ease::Ease;
use crate::foundation::core::Fps;
use crate::foundation::error::{TypewaveError, TypewaveResult};
use crate::stage::progress::StageProgressTimeline;
use crate::time::source::TimeSource;

/// Turns elapsed time into a `[0, 1]` diagram progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressDriver {
    /// Length of one pass in milliseconds.
    pub duration_ms: f64,
    /// Repeat passes instead of stopping at 1.
    #[serde(default)]
    pub looping: bool,
    /// When below 1, progress reaches 1 at this share of the pass and holds there.
    #[serde(default = "default_hold_progress")]
    pub hold_progress: f64,
}

fn default_hold_progress() -> f64 {
    1.0
}

impl ProgressDriver {
    /// One-shot driver over `duration_ms`.
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            looping: false,
            hold_progress: 1.0,
        }
    }

    /// Set looping.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Set the hold share.
    pub fn hold_progress(mut self, hold: f64) -> Self {
        self.hold_progress = hold;
        self
    }

    /// Progress after `elapsed_ms`.
    ///
    /// Looping passes are recomputed from the absolute elapsed time with a modulo.
    pub fn progress_at_ms(&self, elapsed_ms: f64) -> f64 {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return 1.0;
        }
        let elapsed = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };
        let t = if self.looping {
            (elapsed % self.duration_ms) / self.duration_ms
        } else {
            (elapsed / self.duration_ms).min(1.0)
        };

        if self.hold_progress > 0.0 && self.hold_progress < 1.0 {
            if t < self.hold_progress {
                t / self.hold_progress
            } else {
                1.0
            }
        } else {
            t
        }
    }

    /// Progress at `time`.
    pub fn progress(&self, time: TimeSource, fps: Fps) -> f64 {
        let elapsed_ms = fps.frames_to_ms(time.elapsed(fps).get());
        self.progress_at_ms(elapsed_ms)
    }

    /// Whole frames in one pass at `fps`, at least one.
    pub fn duration_frames(&self, fps: Fps) -> u64 {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return 1;
        }
        fps.secs_to_frames_ceil(self.duration_ms / 1000.0).max(1)
    }
}

/// Share of a step spent highlighted before fading toward the next one.
pub const STEP_TRANSITION_THRESHOLD: f64 = 0.8;

/// Spotlight-style step sequencing: each step lasts `step_duration_ms`, steps repeat forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepCycle {
    steps: StageProgressTimeline,
    step_duration_ms: f64,
}

/// Result of sampling a [`StepCycle`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StepSample {
    /// Highlighted step.
    pub step_index: usize,
    /// Step shown after this one (wraps to 0).
    pub next_step_index: usize,
    /// Position inside the current step, in `[0, 1)`.
    pub step_progress: f64,
    /// Eased fade of the current highlight, zero until the threshold is crossed.
    pub transition: f64,
}

impl StepCycle {
    /// Cycle over `step_count` steps of `step_duration_ms` each.
    pub fn new(step_count: usize, step_duration_ms: f64) -> TypewaveResult<Self> {
        if !(step_duration_ms.is_finite() && step_duration_ms > 0.0) {
            return Err(TypewaveError::validation("step duration must be > 0"));
        }
        let steps = StageProgressTimeline::new(step_count, STEP_TRANSITION_THRESHOLD)?
            .with_ease(Ease::InOutCubic);
        Ok(Self {
            steps,
            step_duration_ms,
        })
    }

    /// Milliseconds for one full pass over every step.
    pub fn cycle_ms(&self) -> f64 {
        self.steps.stage_count() as f64 * self.step_duration_ms
    }

    /// Sample after `elapsed_ms`.
    pub fn sample_ms(&self, elapsed_ms: f64) -> StepSample {
        let elapsed = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };
        let cycle = self.cycle_ms();
        let progress = (elapsed % cycle) / cycle;
        let stage = self.steps.sample(progress);

        // Unlike stage diagrams, the final step also fades out before the cycle wraps.
        let threshold = self.steps.dwell();
        let transition = if stage.local_progress > threshold {
            self.steps
                .ease()
                .apply((stage.local_progress - threshold) / (1.0 - threshold))
        } else {
            0.0
        };

        StepSample {
            step_index: stage.active_index,
            next_step_index: (stage.active_index + 1) % self.steps.stage_count(),
            step_progress: stage.local_progress.min(1.0),
            transition,
        }
    }

    /// Sample at `time`.
    pub fn sample(&self, time: TimeSource, fps: Fps) -> StepSample {
        self.sample_ms(fps.frames_to_ms(time.elapsed(fps).get()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/driver.rs"]
mod tests;
