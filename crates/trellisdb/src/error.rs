//! Error types for `TrellisDB`.

use thiserror::Error;

use crate::engine::EngineError;

/// The error type for database operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The request itself is unacceptable: a bad collection name, a
    /// duplicate field declaration, or a name that already exists.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A declared field has no entry in one of the per-field parameter maps.
    #[error("missing {map} entry for field '{field}'")]
    MissingFieldConfig {
        /// The field whose configuration is absent.
        field: String,
        /// Which map is short: `field_index_params` or `field_params`.
        map: &'static str,
    },

    /// A parameter document or one of its values could not be interpreted.
    #[error("malformed parameter: {0}")]
    MalformedParameter(String),

    /// The metadata engine failed.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// An internal failure that fits no other category.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Whether this error was caused by the caller's request rather than
    /// an engine or internal failure.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::MissingFieldConfig { .. } | Self::MalformedParameter(_)
        )
    }

    /// Create an [`Error::InvalidInput`] with a message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an [`Error::MalformedParameter`] with a message.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedParameter(msg.into())
    }

    /// Create an [`Error::Unexpected`] with a message.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }
}

/// Convenience alias for database results.
pub type Result<T> = std::result::Result<T, Error>;
