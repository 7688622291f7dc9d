use crate::foundation::core::FrameIndex;
use crate::foundation::error::TypewaveResult;
use crate::playback::controller::{PlaybackController, PlaybackState, PlayerCommand};
use crate::playback::player::{FrameUpdates, LivePlayer, Player};
use crate::playback::timing::PlayerTiming;
use crate::render::code_block::{CodeBlockFrame, CodeBlockRenderer};
use crate::scene::config::SceneConfig;
use crate::scene::model::CodeBlockConfig;
use crate::time::source::Clock;

/// One interactive code block: player, controller and renderer.
///
/// The renderer never loops on its own; looping and holding come from controller commands
/// applied to the player. The frame-update subscription is released when the session drops.
#[derive(Debug)]
pub struct InteractiveSession<P: Player> {
    player: P,
    updates: FrameUpdates,
    controller: PlaybackController,
    renderer: CodeBlockRenderer,
    controlled: bool,
}

/// What a session shows after one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionFrame {
    /// Player frame that was rendered.
    pub frame: FrameIndex,
    /// Player is advancing.
    pub playing: bool,
    /// Controller state after this tick.
    pub playback: PlaybackState,
    /// Commands applied during this tick.
    pub commands: Vec<PlayerCommand>,
    /// Rendered code block.
    pub visual: CodeBlockFrame,
}

impl<C: Clock> InteractiveSession<LivePlayer<C>> {
    /// Session on a [`LivePlayer`] driven by `clock`.
    ///
    /// Playback starts immediately when `cfg.auto_play` is set.
    pub fn new(cfg: &CodeBlockConfig, clock: C) -> TypewaveResult<Self> {
        SceneConfig::CodeBlock(cfg.clone()).validate()?;
        let timing = PlayerTiming::for_config(cfg);
        let player = LivePlayer::new(clock, timing.fps, timing.duration_frames)?
            .with_native_loop(timing.native_loop)
            .with_playback_rate(cfg.playback_rate);
        Ok(Self::with_player(cfg, player))
    }
}

impl<P: Player> InteractiveSession<P> {
    /// Session on any player.
    pub fn with_player(cfg: &CodeBlockConfig, mut player: P) -> Self {
        let timing = PlayerTiming::for_config(cfg);
        let updates = player.subscribe();
        if cfg.auto_play {
            player.play();
        }
        Self {
            player,
            updates,
            controller: PlaybackController::new(timing),
            renderer: CodeBlockRenderer::new(cfg).without_loop(),
            controlled: cfg.auto_play,
        }
    }

    /// The player.
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Mutable player access for host-driven play, pause and seek.
    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    /// Controller state.
    pub fn playback_state(&self) -> PlaybackState {
        self.controller.state()
    }

    /// Timing enforced by the controller.
    pub fn timing(&self) -> &PlayerTiming {
        self.controller.timing()
    }

    /// The session's renderer; its own loop is always off.
    pub fn renderer(&self) -> &CodeBlockRenderer {
        &self.renderer
    }

    /// Advance the player, apply controller commands and render the resulting frame.
    pub fn tick(&mut self) -> SessionFrame {
        self.player.tick();
        let commands = self.pump();
        self.snapshot(commands)
    }

    /// Restart typing from frame 0.
    pub fn replay(&mut self) -> SessionFrame {
        let mut commands = self.controller.replay();
        for cmd in &commands {
            cmd.apply(&mut self.player);
        }
        commands.extend(self.pump());
        self.snapshot(commands)
    }

    // Deliver pending updates until none remain. Seeks enqueue their own update, which the next
    // round consumes; edges are one-shot, so this terminates.
    fn pump(&mut self) -> Vec<PlayerCommand> {
        let mut applied = Vec::new();
        loop {
            let pending = self.updates.drain();
            if pending.is_empty() {
                return applied;
            }
            for frame in pending {
                let commands = self.controller.on_frame_update(frame);
                if !self.controlled {
                    continue;
                }
                for cmd in commands {
                    cmd.apply(&mut self.player);
                    applied.push(cmd);
                }
            }
        }
    }

    fn snapshot(&self, commands: Vec<PlayerCommand>) -> SessionFrame {
        let frame = self.player.current_frame();
        SessionFrame {
            frame,
            playing: self.player.is_playing(),
            playback: self.controller.state(),
            commands,
            visual: self.renderer.render(frame),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/session.rs"]
mod tests;
