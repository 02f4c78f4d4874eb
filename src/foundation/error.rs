/// Convenience result type used across scrolldeck.
pub type DeckResult<T> = Result<T, DeckError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The only fail-fast path is configuration validation: malformed per-item
/// constants would corrupt the window-offset math, so construction rejects
/// them instead of proceeding. A missing container is not an error anywhere;
/// it means "not mounted yet, skip this tick".
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// Invalid user-provided stack configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while evaluating visual state for a tick.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Build a [`DeckError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DeckError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`DeckError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
