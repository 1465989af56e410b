//! Errors raised by the OAuth2 web-server client.
//!
//! A 4xx answer from the token endpoint is not an `OAuthError`: it is
//! returned as [`TokenResponse::Error`](crate::auth::oauth::TokenResponse)
//! so callers can inspect `invalid_grant` and friends as data. What remains
//! here are the failures a caller cannot act on by changing its input.
//!
//! # Example
//!
//! ```rust
//! use google_client::auth::oauth::OAuthError;
//! use google_client::response::ParseError;
//!
//! let error = OAuthError::from(ParseError::NotAnObject);
//! assert!(error.to_string().contains("token response"));
//! ```

use crate::clients::HttpError;
use crate::response::ParseError;
use thiserror::Error;

/// Errors that can occur during OAuth2 operations.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The token endpoint answered 2xx with a body that is not a token.
    #[error("Failed to parse token response: {0}")]
    InvalidResponse(#[from] ParseError),

    /// Server error, transport fault or invalid request.
    #[error(transparent)]
    Http(#[from] HttpError),
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, InvalidHttpRequestError};
    use std::collections::HashMap;

    #[test]
    fn test_http_error_is_transparent() {
        let error = OAuthError::from(HttpError::Server(HttpResponseError {
            code: 503,
            body: "down".to_string(),
            headers: HashMap::new(),
        }));
        assert_eq!(error.to_string(), "HTTP server error: HTTP 503: down");
    }

    #[test]
    fn test_invalid_request_converts_through_http_error() {
        let error = OAuthError::from(HttpError::from(InvalidHttpRequestError::MissingBodyType));
        assert!(matches!(error, OAuthError::Http(HttpError::InvalidRequest(_))));
    }
}
