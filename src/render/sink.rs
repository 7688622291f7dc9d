use std::io::Write;

use serde::Serialize;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{TypewaveError, TypewaveResult};
use crate::render::scene::VisualState;

/// Configuration provided to a [`FrameSink`] at the start of a range export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Scene frames-per-second.
    pub fps: Fps,
    /// Number of frames that will be pushed.
    pub frames: u64,
}

/// Sink contract for consuming sampled visual states in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order within the
/// requested range.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> TypewaveResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(
        &mut self,
        idx: FrameIndex,
        fingerprint: u64,
        state: &VisualState,
    ) -> TypewaveResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> TypewaveResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, u64, VisualState)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames as `(index, fingerprint, state)`.
    pub fn frames(&self) -> &[(FrameIndex, u64, VisualState)] {
        &self.frames
    }

    /// `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> TypewaveResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: FrameIndex,
        fingerprint: u64,
        state: &VisualState,
    ) -> TypewaveResult<()> {
        self.frames.push((idx, fingerprint, state.clone()));
        Ok(())
    }

    fn end(&mut self) -> TypewaveResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// One exported line of a [`JsonlSink`].
#[derive(Debug, Serialize)]
pub struct FrameRecord<'a> {
    /// Frame index.
    pub frame: u64,
    /// Fingerprint as 16 lowercase hex digits.
    pub fingerprint: String,
    /// Sampled state.
    pub state: &'a VisualState,
}

impl<'a> FrameRecord<'a> {
    /// Record for `state` at `idx`.
    pub fn new(idx: FrameIndex, fingerprint: u64, state: &'a VisualState) -> Self {
        Self {
            frame: idx.0,
            fingerprint: format!("{fingerprint:016x}"),
            state,
        }
    }
}

/// Writes one JSON object per frame, newline-delimited.
#[derive(Debug)]
pub struct JsonlSink<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> JsonlSink<W> {
    /// Sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for JsonlSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> TypewaveResult<()> {
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: FrameIndex,
        fingerprint: u64,
        state: &VisualState,
    ) -> TypewaveResult<()> {
        serde_json::to_writer(&mut self.out, &FrameRecord::new(idx, fingerprint, state))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| TypewaveError::Other(anyhow::Error::new(e).context("write frame line")))
    }

    fn end(&mut self) -> TypewaveResult<()> {
        self.out
            .flush()
            .map_err(|e| TypewaveError::Other(anyhow::Error::new(e).context("flush frame sink")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
