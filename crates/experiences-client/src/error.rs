//! Failures surfaced by the client.

use thiserror::Error;

const NETWORK_MESSAGE: &str = "Network error. Check connection.";
const FALLBACK_MESSAGE: &str = "Failed to fetch.";

/// Errors returned while fetching the listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response: no connectivity, DNS failure,
    /// TLS failure or timeout.
    #[error("Network request failed: {message}")]
    Network {
        /// Transport diagnostic.
        message: String,
    },
    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// The endpoint's `error` field, or the status line when absent.
        message: String,
    },
    /// The endpoint answered successfully but the body was not a listing.
    #[error("{message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
    },
}

impl FetchError {
    /// Short message suitable for showing to the person using the app.
    ///
    /// # Examples
    /// ```
    /// use experiences_client::FetchError;
    ///
    /// let err = FetchError::Network { message: "connection refused".to_owned() };
    /// assert_eq!(err.user_message(), "Network error. Check connection.");
    ///
    /// let err = FetchError::Server { status: 401, message: "Unauthorized - Please sign in".to_owned() };
    /// assert_eq!(err.user_message(), "Unauthorized - Please sign in");
    /// ```
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } => NETWORK_MESSAGE.to_owned(),
            Self::Server { message, .. } | Self::Decode { message } => {
                if message.trim().is_empty() {
                    FALLBACK_MESSAGE.to_owned()
                } else {
                    message.clone()
                }
            }
        }
    }

    /// Whether the failure is a connectivity problem rather than an answer.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
