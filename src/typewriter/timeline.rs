use crate::foundation::core::FrameIndex;
use crate::time::source::ElapsedFrames;
use crate::typewriter::delay::{CharacterDelayModel, HumanRhythm, Speed};

/// Cursor blink half period in frames: visible for 15 frames, hidden for 15.
pub const CURSOR_BLINK_FRAMES: u64 = 15;

/// Character reveal schedule for one immutable text.
///
/// Built once per (text, speed, start delay). Reveal and total duration both read the same
/// prefix-sum table, so `chars_shown_at(frames_for_chars(k)) == k` for every `k`.
#[derive(Clone, Debug)]
pub struct TypewriterTimeline {
    text: String,
    // Byte offset where the first `k` characters end; `len == chars + 1`.
    boundaries: Vec<usize>,
    // Frames needed to type the first `k` characters; `len == chars + 1`.
    prefix: Vec<f64>,
    speed: Speed,
    start_frames: f64,
}

/// Result of sampling a [`TypewriterTimeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterFrame<'a> {
    /// Prefix of the text revealed so far.
    pub visible_text: &'a str,
    /// Number of characters in `visible_text`.
    pub chars_shown: usize,
    /// `true` while characters remain to be revealed.
    pub is_typing: bool,
    /// Cursor visibility for this frame; never set once typing completes.
    pub show_cursor: bool,
}

impl TypewriterTimeline {
    /// Build a timeline with the default [`HumanRhythm`] delay model.
    pub fn new(text: impl Into<String>, speed: Speed, start_delay_frames: f64) -> Self {
        Self::with_model(text, speed, start_delay_frames, &HumanRhythm)
    }

    /// Build a timeline with a custom delay model.
    pub fn with_model(
        text: impl Into<String>,
        speed: Speed,
        start_delay_frames: f64,
        model: &dyn CharacterDelayModel,
    ) -> Self {
        let text = text.into();
        let mut boundaries = Vec::with_capacity(text.len() + 1);
        let mut prefix = Vec::with_capacity(text.len() + 1);
        boundaries.push(0);
        prefix.push(0.0);

        let mut acc = 0.0;
        for (offset, ch) in text.char_indices() {
            acc += model.frames_per_char(ch, speed);
            boundaries.push(offset + ch.len_utf8());
            prefix.push(acc);
        }

        let start_frames = if start_delay_frames.is_finite() {
            start_delay_frames.max(0.0)
        } else {
            0.0
        };

        Self {
            text,
            boundaries,
            prefix,
            speed,
            start_frames,
        }
    }

    /// Full text being typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters (Unicode scalar values) in the text.
    pub fn char_count(&self) -> usize {
        self.prefix.len() - 1
    }

    /// Speed the schedule was built with.
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Frames before the first character may appear.
    pub fn start_frames(&self) -> f64 {
        self.start_frames
    }

    /// Frames from typing start until the last character is revealed.
    pub fn typing_frames(&self) -> f64 {
        self.prefix[self.char_count()]
    }

    /// Frames from typing start until `count` characters are visible (count → time).
    pub fn frames_for_chars(&self, count: usize) -> f64 {
        self.prefix[count.min(self.char_count())]
    }

    /// Characters visible `since_start` frames after typing began (time → count).
    ///
    /// The largest `k` whose accumulated delay does not exceed `since_start`.
    pub fn chars_shown_at(&self, since_start: f64) -> usize {
        if since_start.is_nan() || since_start < 0.0 {
            return 0;
        }
        self.prefix[1..].partition_point(|&p| p <= since_start)
    }

    /// The first `count` characters of the text.
    pub fn visible_text(&self, count: usize) -> &str {
        &self.text[..self.boundaries[count.min(self.char_count())]]
    }

    /// Sample at `elapsed` frames since the animation started.
    ///
    /// `frame` drives cursor blinking only.
    pub fn sample(&self, elapsed: ElapsedFrames, frame: FrameIndex) -> TypewriterFrame<'_> {
        if elapsed.get() < self.start_frames {
            return TypewriterFrame {
                visible_text: "",
                chars_shown: 0,
                is_typing: false,
                show_cursor: false,
            };
        }
        self.sample_typing(elapsed.saturating_sub(self.start_frames), frame)
    }

    /// Sample at `since_start` frames after typing began, skipping the start delay check.
    pub fn sample_typing(
        &self,
        since_start: ElapsedFrames,
        frame: FrameIndex,
    ) -> TypewriterFrame<'_> {
        let chars_shown = self.chars_shown_at(since_start.get());
        let is_typing = chars_shown < self.char_count();
        TypewriterFrame {
            visible_text: self.visible_text(chars_shown),
            chars_shown,
            is_typing,
            show_cursor: is_typing && cursor_phase_visible(frame),
        }
    }
}

/// `floor(frame / 15)` is even.
pub fn cursor_phase_visible(frame: FrameIndex) -> bool {
    (frame.0 / CURSOR_BLINK_FRAMES).is_multiple_of(2)
}

#[cfg(test)]
#[path = "../../tests/unit/typewriter/timeline.rs"]
mod tests;
