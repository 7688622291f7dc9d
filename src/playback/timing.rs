use serde::Serialize;

use crate::foundation::core::Fps;
use crate::scene::model::CodeBlockConfig;
use crate::typewriter::delay::Speed;
use crate::typewriter::timeline::TypewriterTimeline;

/// Frame-domain timing of an embedded code block player.
///
/// Whole frames throughout: the base delay and typing time are each rounded up, so the
/// completion frame never lands before the last character is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerTiming {
    /// Player frame rate.
    pub fps: Fps,
    /// `ceil(base_delay * fps) + ceil(typing_frames)`, or 0 without the typewriter.
    pub typing_complete_frame: u64,
    /// `typing_complete_frame + ceil(end_delay * fps)`, at least `typing_complete_frame + 2`.
    pub cycle_length: u64,
    /// Frames the player runs for before clamping or wrapping.
    pub duration_frames: u64,
    /// Restart typing by seeking the player back to frame 0.
    pub typewriter_loop: bool,
    /// Native player wrap-around. Never set together with `typewriter_loop`.
    pub native_loop: bool,
}

impl PlayerTiming {
    /// Timing for `cfg`.
    pub fn for_config(cfg: &CodeBlockConfig) -> Self {
        let fps = cfg.fps;
        let typing_complete_frame = if cfg.show_typewriter {
            let timeline = TypewriterTimeline::new(
                cfg.code.as_str(),
                Speed::new(cfg.typewriter_speed),
                0.0,
            );
            fps.secs_to_frames_ceil(cfg.base_delay_secs())
                + timeline.typing_frames().ceil() as u64
        } else {
            0
        };
        // The full text stays on screen for at least one frame before the loop boundary at
        // `cycle_length - 1`, and the default duration never ends before completion.
        let cycle_length = (typing_complete_frame + fps.secs_to_frames_ceil(cfg.end_delay_secs()))
            .max(typing_complete_frame + 2);

        let duration_frames = match cfg.duration_frames {
            Some(n) => n,
            None if !cfg.show_typewriter => fps.secs_to_frames_round(1.0),
            None => cycle_length,
        }
        .max(1);

        Self {
            fps,
            typing_complete_frame,
            cycle_length,
            duration_frames,
            typewriter_loop: cfg.typewriter_loop,
            native_loop: !cfg.typewriter_loop && cfg.native_loop,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/timing.rs"]
mod tests;
