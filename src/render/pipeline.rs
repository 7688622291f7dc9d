use std::collections::HashMap;
use std::sync::Arc;

use rayon::prelude::*;

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{TypewaveError, TypewaveResult};
use crate::render::scene::{SceneRenderer, VisualState};
use crate::render::sink::{FrameSink, SinkConfig};

/// Threading and chunking controls for multi-frame export.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Enable parallel sampling when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
    /// Share one allocation between frames whose states fingerprint identically.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: true,
        }
    }
}

/// Aggregated export counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames whose state was kept as a distinct value.
    pub frames_rendered: u64,
    /// Frames reusing an earlier identical state via static-frame elision.
    pub frames_elided: u64,
}

impl RenderStats {
    fn absorb(&mut self, other: RenderStats) {
        self.frames_total += other.frames_total;
        self.frames_rendered += other.frames_rendered;
        self.frames_elided += other.frames_elided;
    }
}

/// One sampled frame of an export.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedFrame {
    /// Frame index.
    pub frame: FrameIndex,
    /// [`VisualState::fingerprint`] of `state`.
    pub fingerprint: u64,
    /// Sampled state; shared between identical frames when elision is on.
    pub state: Arc<VisualState>,
}

/// Sample a frame range with default threading.
pub fn render_frames(
    renderer: &SceneRenderer,
    range: FrameRange,
) -> TypewaveResult<Vec<RenderedFrame>> {
    render_frames_with_stats(renderer, range, &RenderThreading::default()).map(|(f, _)| f)
}

/// Sample a frame range and return both the frames and export stats.
///
/// Output is identical, frame for frame, whichever threading options are used.
#[tracing::instrument(skip(renderer, threading), fields(parallel = threading.parallel))]
pub fn render_frames_with_stats(
    renderer: &SceneRenderer,
    range: FrameRange,
    threading: &RenderThreading,
) -> TypewaveResult<(Vec<RenderedFrame>, RenderStats)> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let stats = for_each_chunk(renderer, range, threading, ElisionScope::Range, |chunk| {
        out.extend(chunk);
        Ok(())
    })?;
    Ok((out, stats))
}

/// Sample a frame range and stream it into `sink` in timeline order.
///
/// Identical states are only shared within one chunk, so memory stays bounded by the chunk
/// size however long the range is.
#[tracing::instrument(skip(renderer, threading, sink), fields(parallel = threading.parallel))]
pub fn render_to_sink(
    renderer: &SceneRenderer,
    range: FrameRange,
    threading: &RenderThreading,
    sink: &mut dyn FrameSink,
) -> TypewaveResult<RenderStats> {
    sink.begin(SinkConfig {
        fps: renderer.fps(),
        frames: range.len_frames(),
    })?;
    let stats = for_each_chunk(renderer, range, threading, ElisionScope::Chunk, |chunk| {
        for f in chunk {
            sink.push_frame(f.frame, f.fingerprint, &f.state)?;
        }
        Ok(())
    })?;
    sink.end()?;
    tracing::debug!(?stats, "export finished");
    Ok(stats)
}

fn for_each_chunk(
    renderer: &SceneRenderer,
    range: FrameRange,
    threading: &RenderThreading,
    scope: ElisionScope,
    mut emit: impl FnMut(Vec<RenderedFrame>) -> TypewaveResult<()>,
) -> TypewaveResult<RenderStats> {
    if range.is_empty() {
        return Err(TypewaveError::validation("render range must be non-empty"));
    }

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut elision = Elision::new(threading.static_frame_elision, scope);
    let mut stats = RenderStats::default();
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let states = match &pool {
            Some(pool) => {
                let indices = (chunk_start..chunk_end).collect::<Vec<u64>>();
                pool.install(|| {
                    indices
                        .par_iter()
                        .map(|&f| renderer.render(FrameIndex(f)))
                        .collect::<Vec<_>>()
                })
            }
            None => (chunk_start..chunk_end)
                .map(|f| renderer.render(FrameIndex(f)))
                .collect(),
        };

        let (frames, chunk_stats) = elision.absorb(chunk_start, states);
        stats.absorb(chunk_stats);
        elision.end_chunk();
        emit(frames)?;
        chunk_start = chunk_end;
    }
    Ok(stats)
}

// How long the fingerprint index lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ElisionScope {
    // Whole range: a state repeated anywhere is kept once.
    Range,
    // One chunk: the index is dropped after each chunk is emitted.
    Chunk,
}

struct Elision {
    enabled: bool,
    scope: ElisionScope,
    seen: HashMap<u64, Arc<VisualState>>,
}

impl Elision {
    fn new(enabled: bool, scope: ElisionScope) -> Self {
        Self {
            enabled,
            scope,
            seen: HashMap::new(),
        }
    }

    fn end_chunk(&mut self) {
        if self.scope == ElisionScope::Chunk {
            self.seen.clear();
        }
    }

    fn absorb(&mut self, first: u64, states: Vec<VisualState>) -> (Vec<RenderedFrame>, RenderStats) {
        let mut stats = RenderStats::default();
        let frames = states
            .into_iter()
            .enumerate()
            .map(|(i, state)| {
                let fingerprint = state.fingerprint();
                stats.frames_total += 1;
                let reused = if self.enabled {
                    self.seen
                        .get(&fingerprint)
                        .filter(|existing| ***existing == state)
                        .cloned()
                } else {
                    None
                };
                let state = match reused {
                    Some(existing) => {
                        stats.frames_elided += 1;
                        existing
                    }
                    None => {
                        stats.frames_rendered += 1;
                        let state = Arc::new(state);
                        if self.enabled {
                            self.seen.insert(fingerprint, Arc::clone(&state));
                        }
                        state
                    }
                };
                RenderedFrame {
                    frame: FrameIndex(first + i as u64),
                    fingerprint,
                    state,
                }
            })
            .collect();
        (frames, stats)
    }
}

fn build_thread_pool(threads: Option<usize>) -> TypewaveResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TypewaveError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        TypewaveError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
