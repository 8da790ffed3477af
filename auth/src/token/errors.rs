use thiserror::Error;

/// Error type for token operations.
///
/// `Malformed`, `InvalidSignature` and `Expired` are the expected
/// rejections of a presented token; the other variants are faults.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Invalid token configuration: {0}")]
    InvalidConfiguration(String),
}

impl TokenError {
    /// Short, stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::Malformed(_) => "malformed",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::Expired => "expired",
            TokenError::EncodingFailed(_) => "encoding_failed",
            TokenError::InvalidConfiguration(_) => "invalid_configuration",
        }
    }
}
