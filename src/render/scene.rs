use serde::Serialize;

use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::TypewaveResult;
use crate::foundation::math::Fnv1a64;
use crate::render::code_block::{CodeBlockFrame, CodeBlockRenderer};
use crate::render::diagram::{
    DiagramFrame, SpotlightFrame, SpotlightRenderer, StageDiagramRenderer,
};
use crate::scene::config::SceneConfig;
use crate::time::source::TimeSource;

/// A validated scene prepared for sampling.
///
/// Rendering is a pure function of the sampled time: the renderer is `Send + Sync` and frames may
/// be requested in any order, from any thread.
#[derive(Clone, Debug)]
pub enum SceneRenderer {
    /// Typewriter code block.
    CodeBlock(CodeBlockRenderer),
    /// Multi-stage diagram.
    StageDiagram(StageDiagramRenderer),
    /// Step spotlight.
    Spotlight(SpotlightRenderer),
}

/// Complete visual state of one scene at one instant.
///
/// Carries no frame index, so identical states from different frames compare equal.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualState {
    /// Code block state.
    CodeBlock(CodeBlockFrame),
    /// Stage diagram state.
    StageDiagram(DiagramFrame),
    /// Spotlight state.
    Spotlight(SpotlightFrame),
}

impl VisualState {
    /// Stable 64-bit fingerprint of this state.
    ///
    /// Equal states always share a fingerprint, across runs and platforms.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        match self {
            Self::CodeBlock(f) => {
                h.write_u8(0);
                f.hash_into(&mut h);
            }
            Self::StageDiagram(f) => {
                h.write_u8(1);
                f.hash_into(&mut h);
            }
            Self::Spotlight(f) => {
                h.write_u8(2);
                f.hash_into(&mut h);
            }
        }
        h.finish()
    }
}

impl SceneRenderer {
    /// Validate `cfg` and prepare a renderer for it.
    #[tracing::instrument(skip(cfg), fields(kind = cfg.kind()))]
    pub fn prepare(cfg: &SceneConfig) -> TypewaveResult<Self> {
        cfg.validate()?;
        let renderer = match cfg {
            SceneConfig::CodeBlock(c) => Self::CodeBlock(CodeBlockRenderer::new(c)),
            SceneConfig::StageDiagram(c) => Self::StageDiagram(StageDiagramRenderer::new(c)?),
            SceneConfig::Spotlight(c) => Self::Spotlight(SpotlightRenderer::new(c)?),
        };
        tracing::debug!(
            duration_frames = renderer.duration_frames(),
            "scene renderer prepared"
        );
        Ok(renderer)
    }

    /// Frame rate of the scene.
    pub fn fps(&self) -> Fps {
        match self {
            Self::CodeBlock(r) => r.fps(),
            Self::StageDiagram(r) => r.fps(),
            Self::Spotlight(r) => r.fps(),
        }
    }

    /// Frames covering one full cycle of the scene.
    pub fn duration_frames(&self) -> u64 {
        match self {
            Self::CodeBlock(r) => r.cycle_frames(),
            Self::StageDiagram(r) => r.duration_frames(),
            Self::Spotlight(r) => r.duration_frames(),
        }
    }

    /// `[0, duration_frames)`.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration_frames()),
        }
    }

    /// Sample at `frame`.
    pub fn render(&self, frame: FrameIndex) -> VisualState {
        self.render_at(TimeSource::Frame(frame))
    }

    /// Sample at any time source.
    pub fn render_at(&self, time: TimeSource) -> VisualState {
        match self {
            Self::CodeBlock(r) => VisualState::CodeBlock(r.render_at(time)),
            Self::StageDiagram(r) => VisualState::StageDiagram(r.render_at(time)),
            Self::Spotlight(r) => VisualState::Spotlight(r.render_at(time)),
        }
    }
}

/// Sample `cfg` at `frame` in one call.
///
/// Prefer [`SceneRenderer::prepare`] when sampling many frames of the same scene.
pub fn render(frame: FrameIndex, cfg: &SceneConfig) -> TypewaveResult<VisualState> {
    Ok(SceneRenderer::prepare(cfg)?.render(frame))
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
