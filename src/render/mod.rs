//! Deterministic scene sampling.
//!
//! A [`scene::SceneRenderer`] maps a frame index (or wall-clock time) to a [`scene::VisualState`].
//! [`pipeline`] samples whole ranges, optionally in parallel, and streams them into a
//! [`sink::FrameSink`].

/// Typewriter code block renderer.
pub mod code_block;
/// Stage diagram and spotlight renderers.
pub mod diagram;
/// Multi-frame export with chunked parallel sampling.
pub mod pipeline;
/// Scene-level renderer and visual state.
pub mod scene;
/// Frame sink trait and built-in sinks.
pub mod sink;
