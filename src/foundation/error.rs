/// Convenience result type used across typewave.
pub type TypewaveResult<T> = Result<T, TypewaveError>;

/// Top-level error taxonomy used by timeline and playback APIs.
///
/// Sampling never fails; errors only surface when building timelines or loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum TypewaveError {
    /// Invalid user-provided timing or stage data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Scene configuration that cannot be loaded or resolved.
    #[error("config error: {0}")]
    Config(String),

    /// Errors raised by the interactive playback layer.
    #[error("playback error: {0}")]
    Playback(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TypewaveError {
    /// Build a [`TypewaveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TypewaveError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TypewaveError::Playback`] value.
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Build a [`TypewaveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TypewaveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
