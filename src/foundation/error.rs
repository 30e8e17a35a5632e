/// Convenience result type used across scrollwork.
pub type ScrollworkResult<T> = Result<T, ScrollworkError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScrollworkError {
    /// Invalid configuration or geometry data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed checkpoint series, templates or window allocations.
    #[error("animation error: {0}")]
    Animation(String),

    /// Route paths that cannot be parsed at all.
    #[error("routing error: {0}")]
    Routing(String),

    /// Errors when serializing or deserializing configuration and views.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollworkError {
    /// Build a [`ScrollworkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollworkError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ScrollworkError::Routing`] value.
    pub fn routing(msg: impl Into<String>) -> Self {
        Self::Routing(msg.into())
    }

    /// Build a [`ScrollworkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollworkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
