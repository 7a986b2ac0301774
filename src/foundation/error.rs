/// Convenience result type used across the crate.
pub type PosyResult<T> = Result<T, PosyError>;

/// Top-level error taxonomy used by the public APIs.
#[derive(thiserror::Error, Debug)]
pub enum PosyError {
    /// Invalid user-provided composition data (empty selection, blank fields).
    #[error("validation error: {0}")]
    Validation(String),

    /// A share token that is not valid output of the encoder: bad base64,
    /// bad percent-encoding, or a payload that does not parse into a record.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PosyError {
    /// Build a [`PosyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PosyError::MalformedToken`] value.
    pub fn malformed_token(msg: impl Into<String>) -> Self {
        Self::MalformedToken(msg.into())
    }

    /// Build a [`PosyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
