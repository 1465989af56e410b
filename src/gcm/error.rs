//! Error type for the GCM/FCM sender.

use crate::clients::HttpError;
use crate::gcm::message::ContentType;
use crate::response::ParseError;
use thiserror::Error;

/// Errors returned by [`GcmClient::send`](crate::gcm::GcmClient::send).
///
/// # Example
///
/// ```rust
/// use google_client::gcm::GcmError;
///
/// let error = GcmError::Server { retry_after: Some(120) };
/// assert_eq!(error.to_string(), "GCM server unavailable, retry after 120 seconds");
/// assert_eq!(error.retry_after(), Some(120));
/// ```
#[derive(Debug, Error)]
pub enum GcmError {
    /// The request was malformed: rejected locally, or answered with HTTP 400.
    #[error("Invalid GCM request: {message}")]
    Format {
        /// What was wrong, or the server's answer text.
        message: String,
    },

    /// The message has the wrong number of registration ids for its content type.
    #[error("{content_type} messages take {} registration ids, got {count}", .content_type.registration_id_limits())]
    RegistrationIds {
        /// Content type of the rejected message.
        content_type: ContentType,
        /// Number of registration ids the message had.
        count: usize,
    },

    /// HTTP 401: the server key was rejected.
    #[error("invalid authorization key '{key}'")]
    Unauthorized {
        /// The key that was sent.
        key: String,
    },

    /// HTTP 500.
    #[error("Unrecoverable GCM server error")]
    Unrecoverable,

    /// Any other 5xx; the send may be retried after `retry_after` seconds.
    #[error(
        "GCM server unavailable{}",
        .retry_after.map(|secs| format!(", retry after {secs} seconds")).unwrap_or_default()
    )]
    Server {
        /// The `Retry-After` header in seconds, when present and numeric.
        retry_after: Option<u64>,
    },

    /// A 2xx body could not be parsed as a send result.
    #[error("Failed to parse GCM response: {0}")]
    InvalidResponse(#[from] ParseError),

    /// Uncategorized 4xx, transport fault or invalid request.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl GcmError {
    /// The server-suggested retry delay, for [`GcmError::Server`].
    #[must_use]
    pub const fn retry_after(&self) -> Option<u64> {
        match self {
            Self::Server { retry_after } => *retry_after,
            _ => None,
        }
    }

    /// Whether the same message may succeed if sent again later.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GcmError>();
};
