use thiserror::Error;

/// A unified error type for this library.
///
/// Payload construction itself cannot fail; these variants are produced by the
/// opt-in validator and by Factor Service Client implementations built on the
/// API traits.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A payload field failed a semantic check in [`crate::validate`].
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The server returned a non-2xx status.
    /// Contains the HTTP status code and raw body.
    #[error("Non-success HTTP status {code}, body: {body}")]
    HttpStatus {
        code: u16,
        body: String,
    },

    /// Serde (de)serialization error.
    #[error("Serde JSON error: {0}")]
    SerdeError(#[from] serde_json::Error),

    // Other
    #[error("Other error: {0}")]
    Other(String),
}
