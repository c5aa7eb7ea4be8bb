// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Each variant tells the story of what went wrong and where. Note that
//! most degradation in the rendering core is deliberately *not* an error:
//! unknown chapters, unparseable dates and malformed ranges all resolve
//! to documented fallback values instead of surfacing here.

use std::fmt;
use thiserror::Error;

/// WeRead API error codes as a typed vocabulary.
///
/// Instead of matching against magic integers like `-2012`, the service's
/// failure vocabulary is encoded in the type system. Each variant tells
/// you exactly what the WeRead API reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WereadErrorCode {
    /// The login cookie has expired; the session must be refreshed
    SessionExpired,
    /// The requested book or resource does not exist
    NotFound,
    /// Too many requests in a short window, back off and retry
    RateLimited,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(i64),
}

impl WereadErrorCode {
    /// Parse a WeRead `errCode` into the typed vocabulary.
    pub fn from_err_code(code: i64) -> Self {
        match code {
            -2012 | -2010 => Self::SessionExpired,
            -2003 => Self::NotFound,
            -2013 => Self::RateLimited,
            other => Self::Unknown(other),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error means the credentials must be re-established.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

impl fmt::Display for WereadErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionExpired => write!(f, "session_expired"),
            Self::NotFound => write!(f, "not_found"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "err_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("WeRead API returned an error ({code}): {message}")]
    WereadService {
        code: WereadErrorCode,
        message: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] crate::types::ValidationError),

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    /// Whether this failure means the batch should never have started.
    ///
    /// Session expiry invalidates every subsequent request, so batch
    /// callers abort instead of recording a per-book failure.
    pub fn is_fatal(&self) -> bool {
        match self {
            AppError::MissingConfiguration(_) => true,
            AppError::WereadService { code, .. } => code.is_session_expired(),
            _ => false,
        }
    }
}

// Allow converting from anyhow::Error, preserving the message
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError {
            message: err.to_string(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
