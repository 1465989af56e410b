//! Error type for the Android Publisher clients.

use crate::clients::HttpError;
use crate::response::{ApiError, ParseError};
use thiserror::Error;

/// Errors returned by [`ProductsClient`](crate::android_publisher::ProductsClient),
/// [`SubscriptionsClient`](crate::android_publisher::SubscriptionsClient) and
/// [`InAppProductsClient`](crate::android_publisher::InAppProductsClient).
///
/// # Example
///
/// ```rust
/// use google_client::android_publisher::PublisherError;
/// use google_client::response::ApiError;
///
/// let error = PublisherError::InvalidCredentials(ApiError::new("401", "Invalid Credentials"));
/// assert_eq!(error.to_string(), "Invalid credentials: Invalid Credentials");
/// assert!(PublisherError::MissingAccessToken.to_string().contains("empty"));
/// ```
#[derive(Debug, Error)]
pub enum PublisherError {
    /// No access token was set on the client; nothing was sent.
    #[error("Access token is empty. Authorize through OAuth2 and set the access token first.")]
    MissingAccessToken,

    /// The API answered 401: the access token is expired or lacks the
    /// `androidpublisher` scope.
    #[error("Invalid credentials: {}", .0.message())]
    InvalidCredentials(ApiError),

    /// The API answered with another 4xx or a 5xx status, or returned an
    /// error envelope with a 2xx status.
    #[error("Android Publisher API error '{}': {}", .0.code(), .0.message())]
    Api(ApiError),

    /// A 2xx body could not be parsed as the expected resource.
    #[error("Failed to parse Android Publisher response: {0}")]
    InvalidResponse(#[from] ParseError),

    /// Transport fault or invalid request.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl PublisherError {
    /// The API error carried by `InvalidCredentials` and `Api`.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::InvalidCredentials(error) | Self::Api(error) => Some(error),
            Self::MissingAccessToken | Self::InvalidResponse(_) | Self::Http(_) => None,
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PublisherError>();
};
