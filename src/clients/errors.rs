//! Transport-level error types.
//!
//! The transport reports every non-2xx response as an error so that domain
//! clients observe exactly one of four outcomes:
//!
//! - [`HttpError::Client`]: the server answered with a 4xx status
//! - [`HttpError::Server`]: the server answered with a 5xx status
//! - [`HttpError::InvalidRequest`]: the request failed validation before sending
//! - [`HttpError::Network`]: the call failed before a status line was received
//!
//! # Example
//!
//! ```rust,ignore
//! use google_client::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Client(e)) => println!("Rejected {}: {}", e.code, e.body),
//!     Err(HttpError::Server(e)) => println!("Server failure {}", e.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use std::collections::HashMap;
use thiserror::Error;

/// A non-2xx response: status code, raw body text and response headers.
///
/// Header names are stored lowercased.
///
/// ```rust
/// use google_client::clients::HttpResponseError;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("retry-after".to_string(), vec!["120".to_string()]);
///
/// let error = HttpResponseError {
///     code: 503,
///     body: "Service Unavailable".to_string(),
///     headers,
/// };
///
/// assert_eq!(error.retry_after(), Some(120));
/// assert_eq!(error.to_string(), "HTTP 503: Service Unavailable");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("HTTP {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// Response headers, keyed by lowercased name.
    pub headers: HashMap<String, Vec<String>>,
}

impl HttpResponseError {
    /// Returns the first value of the named header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, name)
    }

    /// Returns the `Retry-After` header as whole seconds, if present and numeric.
    #[must_use]
    pub fn retry_after(&self) -> Option<u64> {
        self.header("retry-after")
            .and_then(|value| value.trim().parse().ok())
    }
}

pub(crate) fn first_header<'a>(
    headers: &'a HashMap<String, Vec<String>>,
    name: &str,
) -> Option<&'a str> {
    headers
        .get(&name.to_ascii_lowercase())
        .and_then(|values| values.first())
        .map(String::as_str)
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method of the request.
        method: String,
    },

    /// The request URL is not absolute.
    #[error("Invalid request URL '{url}'.")]
    InvalidUrl {
        /// The URL that was provided.
        url: String,
    },
}

/// Unified error type for the transport.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a 4xx status.
    #[error("HTTP client error: {0}")]
    Client(HttpResponseError),

    /// The server answered with a 5xx status.
    #[error("HTTP server error: {0}")]
    Server(HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Client(e) | Self::Server(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }

    /// Returns the response carried by a client or server error.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Client(e) | Self::Server(e) => Some(e),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_error(code: u16, body: &str) -> HttpResponseError {
        HttpResponseError {
            code,
            body: body.to_string(),
            headers: HashMap::new(),
        }
    }

    #[test]
    fn test_http_response_error_display_includes_code_and_body() {
        let error = response_error(404, "Not Found");
        assert_eq!(error.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_retry_after_ignores_non_numeric_values() {
        let mut error = response_error(503, "");
        error.headers.insert(
            "retry-after".to_string(),
            vec!["Wed, 21 Oct 2015 07:28:00 GMT".to_string()],
        );
        assert_eq!(error.retry_after(), None);
        assert!(error.header("Retry-After").is_some());
    }

    #[test]
    fn test_status_is_exposed_for_responses_only() {
        assert_eq!(HttpError::Client(response_error(401, "")).status(), Some(401));
        assert_eq!(HttpError::Server(response_error(502, "")).status(), Some(502));
        assert_eq!(
            HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType).status(),
            None
        );
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::MissingBodyType.to_string(),
            "Cannot set a body without also setting body_type."
        );
        assert_eq!(
            InvalidHttpRequestError::BodyNotAllowed {
                method: "get".to_string()
            }
            .to_string(),
            "Cannot send a body with get."
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &response_error(400, "test");
        let _: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _: &dyn std::error::Error = &HttpError::Client(response_error(400, "test"));
    }
}
