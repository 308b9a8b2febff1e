//! Collection name validation.

use std::fmt;

use thiserror::Error;

/// Maximum length of a collection name in bytes.
const COLLECTION_NAME_MAX_LEN: usize = 255;

/// A validated collection name.
///
/// Names must be non-empty, at most 255 bytes, start with an ASCII letter
/// or underscore, and contain only ASCII alphanumeric characters or
/// underscores after that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionName(String);

/// Errors from collection name validation.
#[derive(Debug, Clone, Error)]
pub enum CollectionNameError {
    #[error("collection name cannot be empty")]
    Empty,

    #[error("collection name exceeds {COLLECTION_NAME_MAX_LEN} bytes (got {0})")]
    TooLong(usize),

    #[error("collection name must start with a letter or underscore: {0}")]
    InvalidFirstChar(String),

    #[error("collection name contains an invalid character: {0}")]
    InvalidCharacter(String),
}

impl CollectionName {
    /// Validate a candidate name.
    ///
    /// # Errors
    ///
    /// Returns a [`CollectionNameError`] describing the first rule the
    /// candidate violates.
    pub fn new(name: impl Into<String>) -> Result<Self, CollectionNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CollectionNameError::Empty);
        }
        if name.len() > COLLECTION_NAME_MAX_LEN {
            return Err(CollectionNameError::TooLong(name.len()));
        }
        let first = name.as_bytes()[0];
        if first != b'_' && !first.is_ascii_alphabetic() {
            return Err(CollectionNameError::InvalidFirstChar(name));
        }
        if !name.bytes().skip(1).all(|b| b == b'_' || b.is_ascii_alphanumeric()) {
            return Err(CollectionNameError::InvalidCharacter(name));
        }
        Ok(Self(name))
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
