use crate::animation::ease::Ease;
use crate::foundation::error::{TypewaveError, TypewaveResult};
use crate::foundation::math::clamp01;

/// Default share of each stage window spent holding before the pointer moves on.
pub const DEFAULT_DWELL: f64 = 0.75;

/// Maps a continuous `[0, 1]` progress value across `N` discrete stages.
///
/// Each stage owns a `1 / N` window. The first `dwell` share of the window holds the pointer on
/// the stage; the rest eases it toward the next one. The last stage never transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageProgressTimeline {
    stage_count: usize,
    dwell: f64,
    ease: Ease,
}

/// Result of sampling a [`StageProgressTimeline`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StageSample {
    /// Stage whose window contains the progress value.
    pub active_index: usize,
    /// Position inside the active window, in `[0, 1]`.
    pub local_progress: f64,
    /// Eased transition toward the next stage, in `[0, 1]`. Zero while dwelling.
    pub transition: f64,
    /// Interpolated pointer position, `active_index + transition`.
    pub pointer: f64,
    /// Fill level of the per-stage bar: `min(local_progress / dwell, 1)`.
    pub sub_progress: f64,
}

impl StageProgressTimeline {
    /// Timeline over `stage_count` stages with the given dwell share and [`Ease::InOutQuad`].
    ///
    /// `stage_count` must be non-zero and `dwell` must lie in `(0, 1]`.
    pub fn new(stage_count: usize, dwell: f64) -> TypewaveResult<Self> {
        if stage_count == 0 {
            return Err(TypewaveError::validation("stage count must be > 0"));
        }
        if dwell.is_nan() || dwell <= 0.0 || dwell > 1.0 {
            return Err(TypewaveError::validation("dwell must be in (0, 1]"));
        }
        Ok(Self {
            stage_count,
            dwell,
            ease: Ease::InOutQuad,
        })
    }

    /// Replace the transition easing.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Number of stages.
    pub fn stage_count(&self) -> usize {
        self.stage_count
    }

    /// Dwell share of each stage window.
    pub fn dwell(&self) -> f64 {
        self.dwell
    }

    /// Transition easing.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// `min(floor(progress * N), N - 1)`.
    ///
    /// Exact at stage boundaries: `stage_index(k as f64 / N as f64) == k` even where the
    /// floating-point product `k / N * N` lands just below `k`.
    pub fn stage_index(&self, progress: f64) -> usize {
        let p = clamp01(progress);
        let n = self.stage_count as f64;
        let mut idx = ((p * n).floor() as usize).min(self.stage_count - 1);
        if idx + 1 < self.stage_count && ((idx + 1) as f64) / n <= p {
            idx += 1;
        } else if idx > 0 && (idx as f64) / n > p {
            idx -= 1;
        }
        idx
    }

    /// Sample the stage state at `progress` (clamped into `[0, 1]`).
    pub fn sample(&self, progress: f64) -> StageSample {
        let p = clamp01(progress);
        let active_index = self.stage_index(p);
        let local_progress = (p * self.stage_count as f64 - active_index as f64).clamp(0.0, 1.0);

        let is_last = active_index + 1 >= self.stage_count;
        let transition = if !is_last && self.dwell < 1.0 && local_progress >= self.dwell {
            self.ease
                .apply((local_progress - self.dwell) / (1.0 - self.dwell))
        } else {
            0.0
        };

        StageSample {
            active_index,
            local_progress,
            transition,
            pointer: active_index as f64 + transition,
            sub_progress: (local_progress / self.dwell).min(1.0),
        }
    }
}

/// Ordered, fixed-size list of named stages driven by one [`StageProgressTimeline`].
#[derive(Clone, Debug, PartialEq)]
pub struct StageList {
    names: Vec<String>,
    timeline: StageProgressTimeline,
}

impl StageList {
    /// Stage list with the given dwell share. Fails on an empty list or invalid dwell.
    pub fn new(names: Vec<String>, dwell: f64) -> TypewaveResult<Self> {
        let timeline = StageProgressTimeline::new(names.len(), dwell)?;
        Ok(Self { names, timeline })
    }

    /// Replace the transition easing.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.timeline = self.timeline.with_ease(ease);
        self
    }

    /// Stage names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Underlying timeline.
    pub fn timeline(&self) -> &StageProgressTimeline {
        &self.timeline
    }

    /// Name of the active stage at `progress`.
    pub fn active_name(&self, progress: f64) -> &str {
        &self.names[self.timeline.stage_index(progress)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/progress.rs"]
mod tests;
