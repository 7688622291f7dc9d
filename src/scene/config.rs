use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Fps;
use crate::foundation::error::{TypewaveError, TypewaveResult};
use crate::scene::model::{CodeBlockConfig, SpotlightConfig, StageDiagramConfig};
use crate::stage::driver::StepCycle;
use crate::stage::progress::StageProgressTimeline;
use crate::theme::palette::Theme;

/// JSON boundary object for one animated scene, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneConfig {
    /// Typewriter code block.
    CodeBlock(CodeBlockConfig),
    /// Multi-stage progress diagram.
    StageDiagram(StageDiagramConfig),
    /// Step-by-step spotlight.
    Spotlight(SpotlightConfig),
}

impl SceneConfig {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TypewaveResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TypewaveError::config(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON string.
    pub fn from_json_str(s: &str) -> TypewaveResult<Self> {
        serde_json::from_str(s).map_err(|e| TypewaveError::config(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TypewaveResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TypewaveError::config(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check construction-time constraints.
    ///
    /// Decorative inputs (speed, delays, theme names) are clamped or defaulted at render time
    /// and never fail here.
    pub fn validate(&self) -> TypewaveResult<()> {
        Fps::new(self.fps().num, self.fps().den)?;
        match self {
            Self::CodeBlock(cfg) => validate_code_block(cfg),
            Self::StageDiagram(cfg) => validate_stage_diagram(cfg),
            Self::Spotlight(cfg) => StepCycle::new(cfg.steps.len(), cfg.step_duration_ms).map(|_| ()),
        }
    }

    /// Frame rate of the scene.
    pub fn fps(&self) -> Fps {
        match self {
            Self::CodeBlock(cfg) => cfg.fps,
            Self::StageDiagram(cfg) => cfg.fps,
            Self::Spotlight(cfg) => cfg.fps,
        }
    }

    /// Resolved theme of the scene.
    pub fn theme(&self) -> Theme {
        match self {
            Self::CodeBlock(cfg) => cfg.theme(),
            Self::StageDiagram(cfg) => cfg.theme(),
            Self::Spotlight(cfg) => cfg.theme(),
        }
    }

    /// Stable `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CodeBlock(_) => "code_block",
            Self::StageDiagram(_) => "stage_diagram",
            Self::Spotlight(_) => "spotlight",
        }
    }
}

fn validate_code_block(cfg: &CodeBlockConfig) -> TypewaveResult<()> {
    if cfg.width == 0 || cfg.height == 0 {
        return Err(TypewaveError::validation("code block width/height must be > 0"));
    }
    if cfg.duration_frames == Some(0) {
        return Err(TypewaveError::validation(
            "code block duration_frames must be >= 1 when set",
        ));
    }
    if !(cfg.playback_rate.is_finite() && cfg.playback_rate > 0.0) {
        return Err(TypewaveError::validation(
            "code block playback_rate must be finite and > 0",
        ));
    }
    Ok(())
}

fn validate_stage_diagram(cfg: &StageDiagramConfig) -> TypewaveResult<()> {
    StageProgressTimeline::new(cfg.stages.len(), cfg.dwell)?;
    if !(cfg.duration_ms.is_finite() && cfg.duration_ms > 0.0) {
        return Err(TypewaveError::validation(
            "stage diagram duration_ms must be finite and > 0",
        ));
    }
    if !cfg.hold_progress.is_finite() {
        return Err(TypewaveError::validation(
            "stage diagram hold_progress must be finite",
        ));
    }
    for el in &cfg.elements {
        if !(el.timing.start.is_finite() && el.timing.duration.is_finite()) {
            return Err(TypewaveError::validation(format!(
                "appear element '{}' timing must be finite",
                el.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
