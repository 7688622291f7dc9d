//! Typewave is a deterministic animation-timeline engine.
//!
//! It drives two behaviors from one elapsed-time quantity:
//!
//! - Character-by-character typewriter reveal with a human-like per-character rhythm, cursor
//!   blinking, and seamless looping or holding.
//! - Progress-to-stage mapping for multi-stage diagrams, with dwell periods, eased pointer
//!   transitions and per-element appear gates.
//!
//! The same scene renders identically whether it is sampled by frame index for export
//! ([`SceneRenderer`], [`render_frames_with_stats`]) or driven by a wall clock for live playback
//! ([`InteractiveSession`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Easing curves.
pub mod animation;
/// Core value types, errors and math helpers.
pub mod foundation;
/// Responsive block sizing.
pub mod layout;
/// Interactive playback: player, controller and session.
pub mod playback;
/// Scene sampling and multi-frame export.
pub mod render;
/// JSON scene configuration.
pub mod scene;
/// Progress-driven stage diagrams.
pub mod stage;
/// Light and dark palettes.
pub mod theme;
/// Time sources and clocks.
pub mod time;
/// Typewriter reveal.
pub mod typewriter;

pub use crate::animation::ease::Ease;
pub use crate::foundation::core::{BlockSize, Fps, FrameIndex, FrameRange};
pub use crate::foundation::error::{TypewaveError, TypewaveResult};

pub use crate::playback::controller::{Phase, PlaybackController, PlaybackState, PlayerCommand};
pub use crate::playback::player::{FrameUpdates, LivePlayer, Player};
pub use crate::playback::session::{InteractiveSession, SessionFrame};
pub use crate::playback::timing::PlayerTiming;
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, RenderedFrame, render_frames, render_frames_with_stats,
    render_to_sink,
};
pub use crate::render::scene::{SceneRenderer, VisualState, render};
pub use crate::render::sink::{FrameRecord, FrameSink, InMemorySink, JsonlSink, SinkConfig};
pub use crate::scene::config::SceneConfig;
pub use crate::scene::model::{CodeBlockConfig, SpotlightConfig, StageDiagramConfig};
pub use crate::stage::appear::{AppearSet, AppearTimeline, between};
pub use crate::stage::driver::{ProgressDriver, StepCycle};
pub use crate::stage::progress::{StageList, StageProgressTimeline, StageSample};
pub use crate::theme::palette::Theme;
pub use crate::time::source::{Clock, ElapsedFrames, ManualClock, SystemClock, TimeSource};
pub use crate::typewriter::cycle::{Cycle, LoopController, LoopPosition};
pub use crate::typewriter::delay::{CharacterDelayModel, ConstantRhythm, HumanRhythm, Speed};
pub use crate::typewriter::timeline::{TypewriterFrame, TypewriterTimeline};
