use std::fmt;
use thiserror::Error;

/// The error type for signing operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
///
/// Every kind is a local validation failure. Signing is deterministic, so retrying
/// with the same input fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No target path was set before signing
    MissingPath,

    /// The HTTP verb contains characters other than `A-Z`
    InvalidAction,

    /// The signature method is neither `PLAINTEXT` nor `HMAC-SHA1`
    UnsupportedSignatureMethod,

    /// Consumer key, shared secret, or a token's secret is absent
    MissingCredential,

    /// Structured input was expected but something else was supplied
    InvalidInputType,

    /// Unexpected errors, such as invalid header bytes
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this is a credential error
    pub fn is_credential_error(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingCredential)
    }
}

// Convenience constructors
impl Error {
    /// Create a missing path error
    pub fn missing_path(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingPath, message)
    }

    /// Create an invalid action error
    pub fn invalid_action(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidAction, message)
    }

    /// Create an unsupported signature method error
    pub fn unsupported_signature_method(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedSignatureMethod, message)
    }

    /// Create a missing credential error
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingCredential, message)
    }

    /// Create an invalid input type error
    pub fn invalid_input_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInputType, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingPath => write!(f, "missing path"),
            ErrorKind::InvalidAction => write!(f, "invalid action"),
            ErrorKind::UnsupportedSignatureMethod => write!(f, "unsupported signature method"),
            ErrorKind::MissingCredential => write!(f, "missing credential"),
            ErrorKind::InvalidInputType => write!(f, "invalid input type"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_input_type(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
