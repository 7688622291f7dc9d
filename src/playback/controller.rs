use serde::Serialize;

use crate::foundation::core::FrameIndex;
use crate::playback::player::Player;
use crate::playback::timing::PlayerTiming;

/// Command issued to a [`Player`] in response to a frame update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlayerCommand {
    /// Jump to a frame.
    Seek(FrameIndex),
    /// Start or resume playback.
    Play,
    /// Freeze on the current frame.
    Pause,
}

impl PlayerCommand {
    /// Forward this command to `player`.
    pub fn apply(self, player: &mut dyn Player) {
        match self {
            Self::Seek(f) => player.seek_to(f),
            Self::Play => player.play(),
            Self::Pause => player.pause(),
        }
    }
}

/// Coarse playback phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No frame observed yet.
    #[default]
    Idle,
    /// Before the typing completion frame.
    Typing,
    /// Full text shown; held or waiting for the cycle boundary.
    Holding,
    /// A loop restart was just requested.
    Looping,
}

/// Observable controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlaybackState {
    /// Current phase.
    pub phase: Phase,
    /// Last frame observed.
    pub current_frame: FrameIndex,
}

/// Turns player frame updates into loop and hold commands.
///
/// Both edges are one-shot: the loop seek re-arms only after a frame below the cycle boundary is
/// seen, and the completion pause re-arms only after a frame below the completion frame or a
/// [`PlaybackController::replay`]. A stale boundary frame arriving after a seek is ignored.
#[derive(Clone, Debug)]
pub struct PlaybackController {
    timing: PlayerTiming,
    state: PlaybackState,
    seek_armed: bool,
    pause_armed: bool,
}

impl PlaybackController {
    /// Controller for `timing`, both edges armed.
    pub fn new(timing: PlayerTiming) -> Self {
        Self {
            timing,
            state: PlaybackState::default(),
            seek_armed: true,
            pause_armed: true,
        }
    }

    /// Timing the controller enforces.
    pub fn timing(&self) -> &PlayerTiming {
        &self.timing
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// React to the player reaching `frame`.
    pub fn on_frame_update(&mut self, frame: FrameIndex) -> Vec<PlayerCommand> {
        self.state.current_frame = frame;
        let complete = frame.0 >= self.timing.typing_complete_frame;

        if self.timing.typewriter_loop {
            let boundary = self.timing.cycle_length.saturating_sub(1);
            if frame.0 < boundary {
                self.seek_armed = true;
                self.state.phase = if complete { Phase::Holding } else { Phase::Typing };
                return Vec::new();
            }
            if !self.seek_armed {
                return Vec::new();
            }
            self.seek_armed = false;
            self.state.phase = Phase::Looping;
            tracing::debug!(frame = frame.0, boundary, "cycle boundary, restarting");
            return vec![PlayerCommand::Seek(FrameIndex(0)), PlayerCommand::Play];
        }

        if !complete {
            self.pause_armed = true;
            self.state.phase = Phase::Typing;
            return Vec::new();
        }
        self.state.phase = Phase::Holding;
        if self.timing.native_loop || !self.pause_armed {
            return Vec::new();
        }
        self.pause_armed = false;
        tracing::debug!(frame = frame.0, "typing complete, pausing");
        vec![PlayerCommand::Pause]
    }

    /// Restart from frame 0 and re-arm both edges.
    pub fn replay(&mut self) -> Vec<PlayerCommand> {
        self.seek_armed = true;
        self.pause_armed = true;
        self.state.phase = Phase::Typing;
        tracing::debug!("replay requested");
        vec![PlayerCommand::Seek(FrameIndex(0)), PlayerCommand::Play]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/controller.rs"]
mod tests;
