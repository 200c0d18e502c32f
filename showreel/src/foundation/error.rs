/// Result alias for every fallible showreel API.
pub type ShowreelResult<T> = Result<T, ShowreelError>;

/// Failures surfaced while configuring, evaluating or writing out a composition.
#[derive(thiserror::Error, Debug)]
pub enum ShowreelError {
    /// Malformed theme, color, frame range or render option.
    #[error("config error: {0}")]
    Config(String),

    /// Spring or scroll parameters that cannot produce motion.
    #[error("animation error: {0}")]
    Animation(String),

    /// Unknown composition id or an inconsistent phase table.
    #[error("composition error: {0}")]
    Composition(String),

    /// A frame was requested outside a composition's timeline.
    #[error("frame {frame} is outside {composition} (0..{duration})")]
    FrameOutOfRange {
        /// Registry id of the composition.
        composition: &'static str,
        /// Requested frame.
        frame: u64,
        /// Composition length in frames.
        duration: u64,
    },

    /// A scene tree could not be serialized or fingerprinted.
    #[error("scene error: {0}")]
    Scene(String),

    /// A frame sink failed to write its output.
    #[error("encode error: {0}")]
    Encode(String),

    /// JSON (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShowreelError {
    /// Build a [`ShowreelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ShowreelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ShowreelError::Composition`] value.
    pub fn composition(msg: impl Into<String>) -> Self {
        Self::Composition(msg.into())
    }

    /// Build a [`ShowreelError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`ShowreelError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
