/// Base typing speed: characters per frame before per-character variation.
///
/// Always strictly positive. Zero, negative and non-finite inputs clamp to [`Speed::MIN`] so a
/// bad value slows the animation down instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize)]
pub struct Speed(f64);

impl Speed {
    /// Smallest accepted speed.
    pub const MIN: f64 = 1e-3;

    /// Clamp `v` into the accepted range.
    pub fn new(v: f64) -> Self {
        if v.is_finite() && v >= Self::MIN {
            Self(v)
        } else {
            Self(Self::MIN)
        }
    }

    /// The clamped value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(0.25)
    }
}

/// Maps a character to a delay multiplier applied to the base speed.
///
/// Implementations must be pure functions of the character: the same character always yields the
/// same factor, and the factor must be finite and strictly positive.
pub trait CharacterDelayModel: Send + Sync {
    /// Delay multiplier for `ch`. Larger values type faster.
    fn delay_factor(&self, ch: char) -> f64;

    /// Frames spent on `ch` at `speed`.
    fn frames_per_char(&self, ch: char, speed: Speed) -> f64 {
        1.0 / (speed.get() * self.delay_factor(ch))
    }
}

/// Human-like rhythm: a character-code hash spreads factors over `[0.3, 2.28]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HumanRhythm;

impl HumanRhythm {
    /// `((code * 17) mod 100) / 100`, in `[0, 0.99]`.
    pub fn variation(ch: char) -> f64 {
        ((u64::from(u32::from(ch)) * 17) % 100) as f64 / 100.0
    }
}

impl CharacterDelayModel for HumanRhythm {
    fn delay_factor(&self, ch: char) -> f64 {
        0.3 + Self::variation(ch) * 2.0
    }
}

/// Every character takes the same time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantRhythm(pub f64);

impl CharacterDelayModel for ConstantRhythm {
    fn delay_factor(&self, _ch: char) -> f64 {
        if self.0.is_finite() && self.0 > 0.0 {
            self.0
        } else {
            1.0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/typewriter/delay.rs"]
mod tests;
