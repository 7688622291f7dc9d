use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{TypewaveError, TypewaveResult};
use crate::time::source::{Clock, TimeSource};

/// Interactive player surface driven by a [`crate::playback::controller::PlaybackController`].
pub trait Player {
    /// Start or resume playback from the current frame.
    fn play(&mut self);
    /// Freeze on the current frame.
    fn pause(&mut self);
    /// Jump to `frame`, clamped to the player duration.
    fn seek_to(&mut self, frame: FrameIndex);
    /// Advance to the frame implied by the clock and notify subscribers of any change.
    fn tick(&mut self) -> FrameIndex;
    /// Frame currently displayed.
    fn current_frame(&self) -> FrameIndex;
    /// `true` while the clock advances the frame.
    fn is_playing(&self) -> bool;
    /// Subscribe to frame changes. Dropping the handle unsubscribes.
    fn subscribe(&mut self) -> FrameUpdates;
}

/// Receiving end of a frame-update subscription.
#[derive(Debug)]
pub struct FrameUpdates {
    rx: Receiver<FrameIndex>,
}

impl FrameUpdates {
    /// Take every pending update, oldest first.
    pub fn drain(&self) -> Vec<FrameIndex> {
        self.rx.try_iter().collect()
    }

    /// Take the next pending update, if any.
    pub fn try_next(&self) -> Option<FrameIndex> {
        match self.rx.try_recv() {
            Ok(f) => Some(f),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

/// Wall-clock driven [`Player`].
///
/// The displayed frame is `anchor + elapsed_ms * fps * rate / 1000`, recomputed from the clock on
/// every tick. Without the native loop the player stops on its last frame; with it, frames wrap
/// modulo the duration.
#[derive(Debug)]
pub struct LivePlayer<C: Clock> {
    clock: C,
    fps: Fps,
    duration_frames: u64,
    native_loop: bool,
    rate: f64,
    playing: bool,
    last_ms: f64,
    anchor_ms: f64,
    anchor_frame: u64,
    current: FrameIndex,
    subscribers: Vec<Sender<FrameIndex>>,
}

impl<C: Clock> LivePlayer<C> {
    /// Paused player at frame 0.
    pub fn new(clock: C, fps: Fps, duration_frames: u64) -> TypewaveResult<Self> {
        if duration_frames == 0 {
            return Err(TypewaveError::playback("player duration must be >= 1 frame"));
        }
        let now = clock.now_ms();
        Ok(Self {
            clock,
            fps,
            duration_frames,
            native_loop: false,
            rate: 1.0,
            playing: false,
            last_ms: now,
            anchor_ms: now,
            anchor_frame: 0,
            current: FrameIndex(0),
            subscribers: Vec::new(),
        })
    }

    /// Wrap around at the end instead of stopping.
    pub fn with_native_loop(mut self, native_loop: bool) -> Self {
        self.native_loop = native_loop;
        self
    }

    /// Playback speed multiplier; non-positive or non-finite rates fall back to 1.
    pub fn with_playback_rate(mut self, rate: f64) -> Self {
        self.rate = if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            1.0
        };
        self
    }

    /// Player duration in frames.
    pub fn duration_frames(&self) -> u64 {
        self.duration_frames
    }

    /// Live subscriptions. Dropped handles are pruned on the next notification.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn last_frame(&self) -> u64 {
        self.duration_frames - 1
    }

    fn set_frame(&mut self, frame: FrameIndex) {
        if frame == self.current {
            return;
        }
        self.current = frame;
        self.subscribers.retain(|tx| tx.send(frame).is_ok());
    }

    fn reanchor(&mut self) {
        self.anchor_ms = self.last_ms;
        self.anchor_frame = self.current.0;
    }
}

impl<C: Clock> Player for LivePlayer<C> {
    fn play(&mut self) {
        if self.playing {
            return;
        }
        self.reanchor();
        self.playing = true;
        tracing::debug!(frame = self.current.0, "player play");
    }

    fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        self.reanchor();
        tracing::debug!(frame = self.current.0, "player pause");
    }

    fn seek_to(&mut self, frame: FrameIndex) {
        let target = FrameIndex(frame.0.min(self.last_frame()));
        tracing::debug!(from = self.current.0, to = target.0, "player seek");
        self.set_frame(target);
        self.reanchor();
    }

    fn tick(&mut self) -> FrameIndex {
        self.last_ms = self.clock.now_ms();
        if !self.playing {
            return self.current;
        }

        let elapsed_ms = (self.last_ms - self.anchor_ms) * self.rate;
        let advanced = TimeSource::WallClock { elapsed_ms }
            .elapsed(self.fps)
            .floor_frame()
            .0;
        let raw = self.anchor_frame.saturating_add(advanced);
        let frame = if self.native_loop {
            raw % self.duration_frames
        } else if raw >= self.last_frame() {
            self.playing = false;
            self.last_frame()
        } else {
            raw
        };

        self.set_frame(FrameIndex(frame));
        if !self.playing {
            self.reanchor();
        }
        self.current
    }

    fn current_frame(&self) -> FrameIndex {
        self.current
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn subscribe(&mut self) -> FrameUpdates {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        FrameUpdates { rx }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
