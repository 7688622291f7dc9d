use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::foundation::core::{BlockSize, Fps};
use crate::layout::sizing::{Measurements, resolve_block_size};
use crate::stage::appear::AppearElement;
use crate::stage::progress::DEFAULT_DWELL;
use crate::theme::palette::Theme;

/// Code block with an optional typewriter reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlockConfig {
    /// Title shown when no `filename` is set.
    #[serde(default)]
    pub label: String,
    /// Text being revealed.
    #[serde(alias = "text")]
    pub code: String,
    /// Scene start offset in seconds.
    #[serde(default)]
    pub start_time: f64,
    /// `false` renders the full text on every frame.
    #[serde(default = "default_true")]
    pub show_typewriter: bool,
    /// Seconds before the first character appears.
    #[serde(default = "default_typewriter_delay")]
    pub typewriter_delay: f64,
    /// Base characters per frame.
    #[serde(default = "default_typewriter_speed")]
    pub typewriter_speed: f64,
    /// Restart typing after the end delay.
    #[serde(default)]
    pub typewriter_loop: bool,
    /// Seconds the full text is held before the next pass.
    #[serde(default = "default_typewriter_end_delay")]
    pub typewriter_end_delay: f64,
    /// Frame rate; a bare number or `{ "num": .., "den": .. }`.
    #[serde(default, deserialize_with = "deserialize_fps")]
    pub fps: Fps,
    /// Block width in pixels.
    #[serde(default = "default_block_width")]
    pub width: u32,
    /// Block height in pixels.
    #[serde(default = "default_block_height")]
    pub height: u32,
    /// `"light"` or `"dark"`; anything else resolves to light.
    #[serde(default)]
    pub theme: Option<String>,
    /// Title shown in the title bar, preferred over `label`.
    #[serde(default)]
    pub filename: Option<String>,
    /// Secondary text on the right of the title bar.
    #[serde(default)]
    pub hint: Option<String>,
    /// Render only the code body.
    #[serde(default)]
    pub hide_title_bar: bool,
    /// Language tag carried through to the rendered frame.
    #[serde(default = "default_language")]
    pub language: String,
    /// Derive the block height from `measurements.content_height`.
    #[serde(default)]
    pub auto_height: bool,
    /// Host measurements used for responsive sizing.
    #[serde(default)]
    pub measurements: Measurements,
    /// Native player loop. Ignored while `typewriter_loop` is set.
    #[serde(default, rename = "loop")]
    pub native_loop: bool,
    /// Start playing as soon as an interactive session starts.
    #[serde(default = "default_true")]
    pub auto_play: bool,
    /// Player duration override in frames.
    #[serde(default)]
    pub duration_frames: Option<u64>,
    /// Interactive playback speed multiplier.
    #[serde(default = "default_playback_rate")]
    pub playback_rate: f64,
}

impl CodeBlockConfig {
    /// Config for `code` with every other field at its default.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            label: String::new(),
            code: code.into(),
            start_time: 0.0,
            show_typewriter: true,
            typewriter_delay: default_typewriter_delay(),
            typewriter_speed: default_typewriter_speed(),
            typewriter_loop: false,
            typewriter_end_delay: default_typewriter_end_delay(),
            fps: Fps::default(),
            width: default_block_width(),
            height: default_block_height(),
            theme: None,
            filename: None,
            hint: None,
            hide_title_bar: false,
            language: default_language(),
            auto_height: false,
            measurements: Measurements::default(),
            native_loop: false,
            auto_play: true,
            duration_frames: None,
            playback_rate: default_playback_rate(),
        }
    }

    /// `max(0, start_time + typewriter_delay)` in seconds.
    pub fn base_delay_secs(&self) -> f64 {
        let d = self.start_time + self.typewriter_delay;
        if d.is_finite() { d.max(0.0) } else { 0.0 }
    }

    /// End delay in seconds, clamped at zero.
    pub fn end_delay_secs(&self) -> f64 {
        if self.typewriter_end_delay.is_finite() {
            self.typewriter_end_delay.max(0.0)
        } else {
            0.0
        }
    }

    /// Resolved theme.
    pub fn theme(&self) -> Theme {
        Theme::from_name(self.theme.as_deref())
    }

    /// Title bar text: `filename`, falling back to `label`.
    pub fn title(&self) -> &str {
        self.filename.as_deref().unwrap_or(&self.label)
    }

    /// Block size after responsive width and auto-height resolution.
    pub fn block_size(&self) -> BlockSize {
        resolve_block_size(
            BlockSize {
                width: self.width,
                height: self.height,
            },
            self.measurements,
            self.auto_height,
        )
    }
}

/// Multi-stage diagram driven by a looping progress value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDiagramConfig {
    /// Stage names in order; must not be empty.
    pub stages: Vec<String>,
    /// Share of each stage window spent holding, in `(0, 1]`.
    #[serde(default = "default_dwell")]
    pub dwell: f64,
    /// Pointer transition easing.
    #[serde(default)]
    pub ease: Ease,
    /// Length of one progress sweep.
    #[serde(default = "default_diagram_duration_ms")]
    pub duration_ms: f64,
    /// Repeat the sweep; otherwise hold at progress 1.
    #[serde(default = "default_true", rename = "loop")]
    pub looping: bool,
    /// Share of the sweep that maps onto `[0, 1)`; the rest holds at 1.
    #[serde(default = "default_hold_progress")]
    pub hold_progress: f64,
    /// Elements that fade in at fixed progress values.
    #[serde(default)]
    pub elements: Vec<AppearElement>,
    /// Frame rate.
    #[serde(default, deserialize_with = "deserialize_fps")]
    pub fps: Fps,
    /// Theme name.
    #[serde(default)]
    pub theme: Option<String>,
}

impl StageDiagramConfig {
    /// Config over `stages` with every other field at its default.
    pub fn new(stages: Vec<String>) -> Self {
        Self {
            stages,
            dwell: DEFAULT_DWELL,
            ease: Ease::default(),
            duration_ms: default_diagram_duration_ms(),
            looping: true,
            hold_progress: default_hold_progress(),
            elements: Vec::new(),
            fps: Fps::default(),
            theme: None,
        }
    }

    /// Resolved theme.
    pub fn theme(&self) -> Theme {
        Theme::from_name(self.theme.as_deref())
    }
}

/// Spotlight that steps through a list of items, one fixed-length step each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotlightConfig {
    /// Step names in order; must not be empty.
    pub steps: Vec<String>,
    /// Milliseconds spent on each step.
    #[serde(default = "default_step_duration_ms")]
    pub step_duration_ms: f64,
    /// Frame rate.
    #[serde(default, deserialize_with = "deserialize_fps")]
    pub fps: Fps,
    /// Theme name.
    #[serde(default)]
    pub theme: Option<String>,
}

impl SpotlightConfig {
    /// Config over `steps` with every other field at its default.
    pub fn new(steps: Vec<String>) -> Self {
        Self {
            steps,
            step_duration_ms: default_step_duration_ms(),
            fps: Fps::default(),
            theme: None,
        }
    }

    /// Resolved theme.
    pub fn theme(&self) -> Theme {
        Theme::from_name(self.theme.as_deref())
    }
}

fn deserialize_fps<'de, D>(deserializer: D) -> Result<Fps, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Whole(u32),
        Ratio { num: u32, den: u32 },
    }

    // Zero parts are rejected by `validate`, not here.
    match Repr::deserialize(deserializer)? {
        Repr::Whole(num) => Ok(Fps { num, den: 1 }),
        Repr::Ratio { num, den } => Ok(Fps { num, den }),
    }
}

fn default_true() -> bool {
    true
}

fn default_typewriter_delay() -> f64 {
    0.5
}

fn default_typewriter_speed() -> f64 {
    0.25
}

fn default_typewriter_end_delay() -> f64 {
    1.0
}

fn default_block_width() -> u32 {
    BlockSize::default().width
}

fn default_block_height() -> u32 {
    BlockSize::default().height
}

fn default_language() -> String {
    "javascript".to_owned()
}

fn default_playback_rate() -> f64 {
    1.0
}

fn default_dwell() -> f64 {
    DEFAULT_DWELL
}

fn default_diagram_duration_ms() -> f64 {
    3200.0
}

fn default_hold_progress() -> f64 {
    1.0
}

fn default_step_duration_ms() -> f64 {
    2500.0
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
