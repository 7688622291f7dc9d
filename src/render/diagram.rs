use serde::Serialize;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::TypewaveResult;
use crate::foundation::math::{Fnv1a64, clamp01};
use crate::scene::model::{SpotlightConfig, StageDiagramConfig};
use crate::stage::appear::AppearSet;
use crate::stage::driver::{ProgressDriver, StepCycle, StepSample};
use crate::stage::progress::{StageList, StageSample};
use crate::theme::color::Rgb8;
use crate::theme::palette::DiagramPalette;
use crate::time::source::TimeSource;

/// Prepared stage diagram: progress driver, stage timeline and appear gates.
#[derive(Clone, Debug)]
pub struct StageDiagramRenderer {
    fps: Fps,
    driver: ProgressDriver,
    stages: StageList,
    appear: AppearSet,
    palette: DiagramPalette,
}

/// Appear value of one element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementState {
    /// Element id from the config.
    pub id: String,
    /// Opacity-style value in `[0, 1]`.
    pub value: f64,
}

/// Visual state of a stage diagram at one instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiagramFrame {
    /// Driven progress in `[0, 1]`.
    pub progress: f64,
    /// Name of the active stage.
    pub active_stage: String,
    /// Stage timeline sample.
    pub stage: StageSample,
    /// Per-stage bar fill: 1 for passed stages, the sub-progress for the active one, 0 after.
    pub stage_fill: Vec<f64>,
    /// Appear values in config order.
    pub elements: Vec<ElementState>,
    /// Resolved colors.
    pub palette: DiagramPalette,
}

impl StageDiagramRenderer {
    /// Prepare a renderer; fails on an empty stage list or invalid dwell.
    pub fn new(cfg: &StageDiagramConfig) -> TypewaveResult<Self> {
        let stages = StageList::new(cfg.stages.clone(), cfg.dwell)?.with_ease(cfg.ease);
        let driver = ProgressDriver::new(cfg.duration_ms)
            .looping(cfg.looping)
            .hold_progress(cfg.hold_progress);
        Ok(Self {
            fps: cfg.fps,
            driver,
            stages,
            appear: AppearSet::from(cfg.elements.clone()),
            palette: cfg.theme().diagram_palette(),
        })
    }

    /// Frame rate the renderer was prepared for.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Frames in one progress sweep.
    pub fn duration_frames(&self) -> u64 {
        self.driver.duration_frames(self.fps)
    }

    /// Stage list and timeline.
    pub fn stages(&self) -> &StageList {
        &self.stages
    }

    /// Sample at `frame`.
    pub fn render(&self, frame: FrameIndex) -> DiagramFrame {
        self.render_at(TimeSource::Frame(frame))
    }

    /// Sample at any time source.
    pub fn render_at(&self, time: TimeSource) -> DiagramFrame {
        let progress = self.driver.progress(time, self.fps);
        self.render_progress(progress)
    }

    /// Sample at an externally supplied progress value.
    pub fn render_progress(&self, progress: f64) -> DiagramFrame {
        let stage = self.stages.timeline().sample(progress);
        let stage_fill = (0..self.stages.names().len())
            .map(|i| match i.cmp(&stage.active_index) {
                std::cmp::Ordering::Less => 1.0,
                std::cmp::Ordering::Equal => stage.sub_progress,
                std::cmp::Ordering::Greater => 0.0,
            })
            .collect();
        let elements = self
            .appear
            .sample(progress)
            .into_iter()
            .map(|(id, value)| ElementState { id, value })
            .collect();

        DiagramFrame {
            progress: clamp01(progress),
            active_stage: self.stages.names()[stage.active_index].clone(),
            stage,
            stage_fill,
            elements,
            palette: self.palette,
        }
    }
}

/// Prepared spotlight: a step cycle over named steps.
#[derive(Clone, Debug)]
pub struct SpotlightRenderer {
    fps: Fps,
    steps: Vec<String>,
    cycle: StepCycle,
    palette: DiagramPalette,
}

/// Visual state of a spotlight at one instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpotlightFrame {
    /// Step cycle sample.
    pub step: StepSample,
    /// Name of the highlighted step.
    pub active_step: String,
    /// Name of the step being transitioned to.
    pub next_step: String,
    /// Resolved colors.
    pub palette: DiagramPalette,
}

impl SpotlightRenderer {
    /// Prepare a renderer; fails on an empty step list or non-positive step duration.
    pub fn new(cfg: &SpotlightConfig) -> TypewaveResult<Self> {
        let cycle = StepCycle::new(cfg.steps.len(), cfg.step_duration_ms)?;
        Ok(Self {
            fps: cfg.fps,
            steps: cfg.steps.clone(),
            cycle,
            palette: cfg.theme().diagram_palette(),
        })
    }

    /// Frame rate the renderer was prepared for.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Frames in one pass over every step.
    pub fn duration_frames(&self) -> u64 {
        self.fps
            .secs_to_frames_ceil(self.cycle.cycle_ms() / 1000.0)
            .max(1)
    }

    /// Sample at `frame`.
    pub fn render(&self, frame: FrameIndex) -> SpotlightFrame {
        self.render_at(TimeSource::Frame(frame))
    }

    /// Sample at any time source.
    pub fn render_at(&self, time: TimeSource) -> SpotlightFrame {
        let step = self.cycle.sample(time, self.fps);
        SpotlightFrame {
            active_step: self.steps[step.step_index].clone(),
            next_step: self.steps[step.next_step_index].clone(),
            step,
            palette: self.palette,
        }
    }
}

fn hash_palette(h: &mut Fnv1a64, p: &DiagramPalette) {
    let colors: [Rgb8; 9] = [
        p.primary,
        p.primary_ink,
        p.bg,
        p.surface,
        p.surface_2,
        p.card_title,
        p.ink,
        p.ink_secondary,
        p.muted,
    ];
    for c in colors {
        h.write_bytes(&[c.r, c.g, c.b]);
    }
}

impl DiagramFrame {
    pub(crate) fn hash_into(&self, h: &mut Fnv1a64) {
        h.write_f64(self.progress);
        h.write_str(&self.active_stage);
        h.write_u64(self.stage.active_index as u64);
        h.write_f64(self.stage.local_progress);
        h.write_f64(self.stage.transition);
        h.write_f64(self.stage.pointer);
        h.write_f64(self.stage.sub_progress);
        h.write_u64(self.stage_fill.len() as u64);
        for v in &self.stage_fill {
            h.write_f64(*v);
        }
        h.write_u64(self.elements.len() as u64);
        for e in &self.elements {
            h.write_str(&e.id);
            h.write_f64(e.value);
        }
        hash_palette(h, &self.palette);
    }
}

impl SpotlightFrame {
    pub(crate) fn hash_into(&self, h: &mut Fnv1a64) {
        h.write_u64(self.step.step_index as u64);
        h.write_u64(self.step.next_step_index as u64);
        h.write_f64(self.step.step_progress);
        h.write_f64(self.step.transition);
        h.write_str(&self.active_step);
        h.write_str(&self.next_step);
        hash_palette(h, &self.palette);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/diagram.rs"]
mod tests;
