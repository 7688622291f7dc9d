use serde::Serialize;

use crate::foundation::core::{BlockSize, Fps, FrameIndex};
use crate::foundation::math::Fnv1a64;
use crate::scene::model::CodeBlockConfig;
use crate::theme::palette::CodePalette;
use crate::time::source::TimeSource;
use crate::typewriter::cycle::{Cycle, LoopController};
use crate::typewriter::delay::Speed;
use crate::typewriter::timeline::TypewriterTimeline;

/// Glyph appended to the visible text while the cursor is shown.
pub const CURSOR_GLYPH: char = '|';

/// Prepared code-block scene: the typewriter schedule plus resolved chrome.
///
/// Start and end delays are rounded to whole frames, so one cycle restarts on a frame boundary.
#[derive(Clone, Debug)]
pub struct CodeBlockRenderer {
    fps: Fps,
    show_typewriter: bool,
    timeline: TypewriterTimeline,
    looping: LoopController,
    chrome: CodeBlockChrome,
}

/// Everything in a code block frame that does not depend on time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CodeBlockChrome {
    /// Title bar text, `None` when the title bar is hidden.
    pub title: Option<String>,
    /// Title bar hint, `None` when unset or the title bar is hidden.
    pub hint: Option<String>,
    /// Language tag of the code.
    pub language: String,
    /// Resolved block size.
    pub size: BlockSize,
    /// Resolved colors.
    pub palette: CodePalette,
}

/// Visual state of a code block at one instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CodeBlockFrame {
    /// Text to draw, including the cursor glyph when shown.
    pub text: String,
    /// Revealed characters.
    pub chars_shown: usize,
    /// Total characters.
    pub char_count: usize,
    /// Characters remain to be revealed.
    pub is_typing: bool,
    /// The cursor glyph is part of `text`.
    pub show_cursor: bool,
    /// Zero-based typing pass; always 0 without the renderer loop.
    pub cycle_index: u64,
    /// Static chrome.
    pub chrome: CodeBlockChrome,
}

impl CodeBlockRenderer {
    /// Prepare a renderer for `cfg`.
    ///
    /// `cfg.fps` is assumed valid; see [`crate::scene::config::SceneConfig::validate`].
    pub fn new(cfg: &CodeBlockConfig) -> Self {
        let fps = cfg.fps;
        let start_frames = fps.secs_to_frames_round(cfg.base_delay_secs()) as f64;
        let end_frames = fps.secs_to_frames_round(cfg.end_delay_secs()) as f64;
        let timeline =
            TypewriterTimeline::new(cfg.code.as_str(), Speed::new(cfg.typewriter_speed), start_frames);
        let cycle = Cycle::for_timeline(&timeline, end_frames);

        let chrome = CodeBlockChrome {
            title: (!cfg.hide_title_bar).then(|| cfg.title().to_owned()),
            hint: cfg.hint.clone().filter(|_| !cfg.hide_title_bar),
            language: cfg.language.clone(),
            size: cfg.block_size(),
            palette: cfg.theme().code_palette(),
        };

        Self {
            fps,
            show_typewriter: cfg.show_typewriter,
            timeline,
            looping: LoopController::new(cycle, cfg.typewriter_loop),
            chrome,
        }
    }

    /// Same renderer with its own loop disabled.
    ///
    /// Used when an outer controller imposes looping by seeking the player.
    pub fn without_loop(mut self) -> Self {
        self.looping = LoopController::new(self.looping.cycle(), false);
        self
    }

    /// Frame rate the renderer was prepared for.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// The underlying typewriter schedule.
    pub fn timeline(&self) -> &TypewriterTimeline {
        &self.timeline
    }

    /// Loop controller applied after the start delay.
    pub fn loop_controller(&self) -> LoopController {
        self.looping
    }

    /// Frames covering the start delay plus one full cycle (at least 1).
    ///
    /// Without the typewriter this is one second of frames.
    pub fn cycle_frames(&self) -> u64 {
        if !self.show_typewriter {
            return self.fps.secs_to_frames_round(1.0).max(1);
        }
        let total = self.timeline.start_frames() + self.looping.cycle().total_frames();
        (total.ceil() as u64).max(1)
    }

    /// Sample at `frame`.
    pub fn render(&self, frame: FrameIndex) -> CodeBlockFrame {
        self.render_at(TimeSource::Frame(frame))
    }

    /// Sample at any time source.
    pub fn render_at(&self, time: TimeSource) -> CodeBlockFrame {
        let char_count = self.timeline.char_count();
        if !self.show_typewriter {
            return self.frame(self.timeline.text().to_owned(), char_count, false, 0);
        }

        let elapsed = time.elapsed(self.fps);
        if elapsed.get() < self.timeline.start_frames() {
            return self.frame(String::new(), 0, false, 0);
        }

        let pos = self
            .looping
            .resolve(elapsed.saturating_sub(self.timeline.start_frames()));
        let tw = self.timeline.sample_typing(pos.effective, time.frame(self.fps));

        let mut text = String::with_capacity(tw.visible_text.len() + 1);
        text.push_str(tw.visible_text);
        if tw.show_cursor {
            text.push(CURSOR_GLYPH);
        }
        CodeBlockFrame {
            text,
            chars_shown: tw.chars_shown,
            char_count,
            is_typing: tw.is_typing,
            show_cursor: tw.show_cursor,
            cycle_index: pos.cycle_index,
            chrome: self.chrome.clone(),
        }
    }

    fn frame(&self, text: String, chars_shown: usize, is_typing: bool, cycle: u64) -> CodeBlockFrame {
        CodeBlockFrame {
            text,
            chars_shown,
            char_count: self.timeline.char_count(),
            is_typing,
            show_cursor: false,
            cycle_index: cycle,
            chrome: self.chrome.clone(),
        }
    }
}

impl CodeBlockFrame {
    pub(crate) fn hash_into(&self, h: &mut Fnv1a64) {
        h.write_str(&self.text);
        h.write_u64(self.chars_shown as u64);
        h.write_u64(self.char_count as u64);
        h.write_u8(u8::from(self.is_typing));
        h.write_u8(u8::from(self.show_cursor));
        h.write_u64(self.cycle_index);
        let c = &self.chrome;
        h.write_str(c.title.as_deref().unwrap_or(""));
        h.write_u8(u8::from(c.title.is_some()));
        h.write_str(c.hint.as_deref().unwrap_or(""));
        h.write_u8(u8::from(c.hint.is_some()));
        h.write_str(&c.language);
        h.write_u64(u64::from(c.size.width));
        h.write_u64(u64::from(c.size.height));
        for color in [
            c.palette.bg,
            c.palette.text,
            c.palette.title_bar_bg,
            c.palette.title_text,
            c.palette.hint_text,
        ] {
            h.write_bytes(&[color.r, color.g, color.b]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/code_block.rs"]
mod tests;
