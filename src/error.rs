// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Errors travel as values up to the component boundary where they are
//! logged and turned into an absent page or an empty post list.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// The v3 API reports failures as `{"name": "...", "message": "..."}`.
/// Instead of matching against those strings at every call site, the
/// names are decoded once into this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested page does not exist or is not public
    ObjectNotFound,
    /// The session token is missing, invalid or expired
    Unauthorized,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error name this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a v3 error `name` into the typed vocabulary.
    pub fn from_api_name(name: &str) -> Self {
        match name {
            "RateLimitedError" | "rate_limited" => Self::RateLimited,
            "NotFoundError" | "ObjectNotFound" | "object_not_found" => Self::ObjectNotFound,
            "UnauthorizedError" | "unauthorized" => Self::Unauthorized,
            "ValidationError" | "validation_error" => Self::ValidationFailed,
            "InternalServerError" | "internal_server_error" => Self::InternalError,
            "ServiceUnavailableError" | "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error means the page simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound | Self::HttpStatus(404))
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
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

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("{operation} timed out after {}s", .after.as_secs_f32())]
    Timeout { operation: String, after: Duration },

    #[error("{0}")]
    Unavailable(String),

    #[error("Filesystem IO error for {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error for {path}: {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether the failure was the deadline running out, either ours or
    /// the HTTP client's per-request timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::NetworkFailure(e) => e.is_timeout(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}
