//! Resource/error parsing shared by every domain client.
//!
//! A Google API call answers with either a domain resource or an error
//! envelope. [`ApiResponse::from_body`] makes that decision from the body
//! shape alone: a top-level `error` key selects [`ApiError`], anything else
//! is decoded as the resource type.
//!
//! Parsing is pure. Missing fields take their zero value; only structurally
//! impossible input (not JSON, not an object, a timestamp that is not an
//! integer) is a [`ParseError`].
//!
//! # Example
//!
//! ```rust
//! use google_client::android_publisher::ProductPurchase;
//! use google_client::response::ApiResponse;
//!
//! let body = r#"{"kind":"androidpublisher#productPurchase","purchaseState":0}"#;
//! match ApiResponse::<ProductPurchase>::from_body(body).unwrap() {
//!     ApiResponse::Resource(purchase) => assert!(purchase.is_purchased()),
//!     ApiResponse::Error(error) => panic!("unexpected error: {error}"),
//! }
//! ```

pub(crate) mod de;
pub(crate) mod display;
mod error;

pub use error::{ApiError, ErrorDetail};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Error returned when a response body cannot be parsed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not valid JSON, or a field has an impossible value.
    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The body is valid JSON but not an object.
    #[error("Response body is not a JSON object")]
    NotAnObject,

    /// An error envelope was expected but the body has no `error` key.
    #[error("Response body has no 'error' key")]
    MissingError,

    /// A non-JSON body does not have the expected shape.
    #[error("Malformed response body: {0}")]
    Malformed(String),
}

/// Either a parsed resource or a structured API error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// The body decoded as the expected resource.
    Resource(T),
    /// The body was an error envelope.
    Error(ApiError),
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Parses a raw body into a resource or an error.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the body is not a JSON object or a field of
    /// the selected type cannot be decoded.
    pub fn from_body(body: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// Parses an already-decoded JSON value into a resource or an error.
    ///
    /// # Errors
    ///
    /// See [`from_body`](Self::from_body).
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        if !value.is_object() {
            return Err(ParseError::NotAnObject);
        }
        if value.get("error").is_some() {
            return ApiError::from_value(value).map(Self::Error);
        }
        Ok(Self::Resource(serde_json::from_value(value)?))
    }
}

impl<T> ApiResponse<T> {
    /// Returns the resource, if present.
    #[must_use]
    pub fn resource(self) -> Option<T> {
        match self {
            Self::Resource(resource) => Some(resource),
            Self::Error(_) => None,
        }
    }

    /// Converts into a `Result`, with the API error as the error value.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] when this is [`ApiResponse::Error`].
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Resource(resource) => Ok(resource),
            Self::Error(error) => Err(error),
        }
    }

    /// Returns `true` if this is an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq, Eq)]
    struct Thing {
        #[serde(default)]
        kind: String,
        #[serde(default, deserialize_with = "de::int64")]
        time_millis: i64,
    }

    #[test]
    fn test_resource_body_selects_resource() {
        let response = ApiResponse::<Thing>::from_body(r#"{"kind":"k","time_millis":"5"}"#).unwrap();
        assert_eq!(
            response,
            ApiResponse::Resource(Thing {
                kind: "k".to_string(),
                time_millis: 5
            })
        );
    }

    #[test]
    fn test_error_key_selects_error() {
        let response = ApiResponse::<Thing>::from_body(r#"{"error":{"code":401,"message":"no"}}"#).unwrap();
        assert!(response.is_error());
        let error = response.into_result().unwrap_err();
        assert_eq!(error.code(), "401");
    }

    #[test]
    fn test_empty_object_is_default_resource() {
        let response = ApiResponse::<Thing>::from_body("{}").unwrap();
        assert_eq!(response.resource(), Some(Thing::default()));
    }

    #[test]
    fn test_non_object_bodies_fail() {
        assert!(matches!(
            ApiResponse::<Thing>::from_body("42"),
            Err(ParseError::NotAnObject)
        ));
        assert!(matches!(
            ApiResponse::<Thing>::from_body("not json"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_impossible_field_value_fails() {
        assert!(matches!(
            ApiResponse::<Thing>::from_body(r#"{"time_millis":"soon"}"#),
            Err(ParseError::Json(_))
        ));
    }
}
