use crate::theme::color::Rgb8;

/// Palette selector. Resolved by the host (for example from a color-scheme query) and passed in
/// as a plain value; nothing here inspects the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl Theme {
    /// Resolve a theme name. Missing or unknown names fall back to [`Theme::Light`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(n) if n.eq_ignore_ascii_case("dark") => Self::Dark,
            Some(n) if n.eq_ignore_ascii_case("light") || n.is_empty() => Self::Light,
            None => Self::Light,
            Some(other) => {
                tracing::warn!(theme = other, "unknown theme, using light palette");
                Self::Light
            }
        }
    }

    /// Code block colors for this theme.
    pub fn code_palette(self) -> CodePalette {
        match self {
            Self::Light => CodePalette {
                bg: Rgb8::new(0xed, 0xed, 0xed),
                text: Rgb8::new(0x27, 0x27, 0x2a),
                title_bar_bg: Rgb8::new(0xf5, 0xf5, 0xf5),
                title_text: Rgb8::new(0x3f, 0x3f, 0x46),
                hint_text: Rgb8::new(0x52, 0x52, 0x5b),
            },
            Self::Dark => CodePalette {
                bg: Rgb8::new(0x27, 0x27, 0x2a),
                text: Rgb8::new(0xe4, 0xe4, 0xe7),
                title_bar_bg: Rgb8::new(0x1f, 0x1f, 0x23),
                title_text: Rgb8::new(0xd4, 0xd4, 0xd8),
                hint_text: Rgb8::new(0xa1, 0xa1, 0xaa),
            },
        }
    }

    /// Diagram colors for this theme.
    pub fn diagram_palette(self) -> DiagramPalette {
        let primary = Rgb8::new(0xc7, 0x00, 0x7e);
        let primary_ink = Rgb8::new(0xff, 0xff, 0xff);
        match self {
            Self::Light => DiagramPalette {
                primary,
                primary_ink,
                bg: Rgb8::new(0xfd, 0xfd, 0xfd),
                surface: Rgb8::new(0xff, 0xff, 0xff),
                surface_2: Rgb8::new(0xed, 0xed, 0xed),
                card_title: Rgb8::new(0xf5, 0xf5, 0xf5),
                ink: Rgb8::new(0x27, 0x27, 0x2a),
                ink_secondary: Rgb8::new(0x3f, 0x3f, 0x46),
                muted: Rgb8::new(0x52, 0x52, 0x5b),
            },
            Self::Dark => DiagramPalette {
                primary,
                primary_ink,
                bg: Rgb8::new(0x18, 0x18, 0x1b),
                surface: Rgb8::new(0x27, 0x27, 0x2a),
                surface_2: Rgb8::new(0x27, 0x27, 0x2a),
                card_title: Rgb8::new(0x1f, 0x1f, 0x23),
                ink: Rgb8::new(0xe4, 0xe4, 0xe7),
                ink_secondary: Rgb8::new(0xd4, 0xd4, 0xd8),
                muted: Rgb8::new(0xa1, 0xa1, 0xaa),
            },
        }
    }
}

/// Colors used by a code block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CodePalette {
    /// Code area background.
    pub bg: Rgb8,
    /// Code text.
    pub text: Rgb8,
    /// Title bar background.
    pub title_bar_bg: Rgb8,
    /// Filename/label text.
    pub title_text: Rgb8,
    /// Muted hint text.
    pub hint_text: Rgb8,
}

/// Colors used by stage diagrams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DiagramPalette {
    /// Accent for the active stage and pointer.
    pub primary: Rgb8,
    /// Text drawn on top of `primary`.
    pub primary_ink: Rgb8,
    /// Page background.
    pub bg: Rgb8,
    /// Card surface.
    pub surface: Rgb8,
    /// Secondary surface.
    pub surface_2: Rgb8,
    /// Card title strip.
    pub card_title: Rgb8,
    /// Primary text.
    pub ink: Rgb8,
    /// Secondary text.
    pub ink_secondary: Rgb8,
    /// Muted text.
    pub muted: Rgb8,
}

#[cfg(test)]
#[path = "../../tests/unit/theme/palette.rs"]
mod tests;
