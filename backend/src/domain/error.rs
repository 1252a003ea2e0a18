//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope.
//!
//! Only request-fatal failures are modelled here. A failure to resolve one
//! experience image is recovered inside the listing service and never becomes
//! an [`Error`]; see [`crate::domain::ImageResolution`].

use std::fmt;

use crate::domain::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The bearer token is missing, malformed, expired, or was rejected.
    Unauthorized,
    /// The record store query failed, so no listing can be produced.
    UpstreamQueryFailure,
    /// Any other unexpected failure, including identity provider outages.
    InternalError,
}

impl ErrorCode {
    /// Return whether the failure originates on the server side.
    pub fn is_server_fault(self) -> bool {
        matches!(self, Self::UpstreamQueryFailure | Self::InternalError)
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use experiences_backend::domain::{Error, ErrorCode};
///
/// let err = Error::upstream_query("relation \"experiences\" does not exist");
/// assert_eq!(err.code(), ErrorCode::UpstreamQueryFailure);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    details: Option<String>,
    trace_id: Option<String>,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    /// The message was blank once trimmed.
    EmptyMessage,
}

impl fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Create a new error, panicking if validation fails.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    ///
    /// The trace identifier of the surrounding request, if any, is captured so
    /// adapters can correlate the failure with request logs.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            details: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Stringified underlying cause, when one is known.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Trace identifier captured when the error was created.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach the stringified underlying cause.
    ///
    /// # Examples
    /// ```
    /// use experiences_backend::domain::Error;
    ///
    /// let err = Error::internal("identity provider unavailable")
    ///     .with_details("connection refused");
    /// assert_eq!(err.details(), Some("connection refused"));
    /// ```
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamQueryFailure`].
    pub fn upstream_query(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamQueryFailure, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
