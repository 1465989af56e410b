//! Structured error payloads returned by Google APIs.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::response::de;
use crate::response::display::FieldLines;
use crate::response::ParseError;

/// One entry of the `errors` array inside an error envelope.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[serde(default, deserialize_with = "de::string")]
    domain: String,
    #[serde(default, deserialize_with = "de::string")]
    reason: String,
    #[serde(default, deserialize_with = "de::string")]
    message: String,
    #[serde(default, deserialize_with = "de::string")]
    location: String,
    #[serde(default, deserialize_with = "de::string")]
    location_type: String,
    #[serde(default, deserialize_with = "de::string")]
    extended_help: String,
}

impl ErrorDetail {
    /// The error domain, e.g. `global` or `androidpublisher`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Machine-readable reason, e.g. `purchaseTokenDoesNotMatchProductId`.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn location_type(&self) -> &str {
        &self.location_type
    }

    #[must_use]
    pub fn extended_help(&self) -> &str {
        &self.extended_help
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default, deserialize_with = "de::code")]
    code: String,
    #[serde(default, deserialize_with = "de::string")]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

/// An API-level error: `{"error": {"code", "message", "errors": [...]}}`.
///
/// The OAuth2 token endpoint reports errors in a flat form,
/// `{"error": "invalid_grant", "error_description": "..."}`; that form is
/// accepted too, with the error string as the code.
///
/// # Example
///
/// ```rust
/// use google_client::response::ApiError;
///
/// let error = ApiError::from_body(r#"{"error":{"message":"x"}}"#).unwrap();
/// assert_eq!(error.code(), "");
/// assert_eq!(error.message(), "x");
/// assert!(error.errors().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiError {
    code: String,
    message: String,
    errors: Vec<ErrorDetail>,
}

impl ApiError {
    /// Creates an error with the given code and message and no details.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Parses an error envelope from a raw body.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the body is not a JSON object or has no
    /// top-level `error` key.
    pub fn from_body(body: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// Parses an error envelope from an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the value is not an object, has no `error`
    /// key, or the inner object has fields of the wrong type.
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        let Value::Object(mut envelope) = value else {
            return Err(ParseError::NotAnObject);
        };
        let error = envelope.remove("error").ok_or(ParseError::MissingError)?;

        match error {
            Value::Object(_) => {
                let body: ErrorBody = serde_json::from_value(error)?;
                Ok(Self {
                    code: body.code,
                    message: body.message,
                    errors: body.errors,
                })
            }
            Value::String(code) => {
                let message = envelope
                    .get("error_description")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                Ok(Self::new(code, message))
            }
            Value::Number(code) => Ok(Self::new(code.to_string(), "")),
            _ => Ok(Self::default()),
        }
    }

    /// Parses an error envelope, falling back to an error whose message is
    /// the raw body when the body is not an envelope.
    #[must_use]
    pub fn from_body_lossy(body: &str) -> Self {
        Self::from_body(body).unwrap_or_else(|_| Self::new("", body.trim()))
    }

    /// The error code as text; empty when absent.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable message; empty when absent.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Detail records, in the order received.
    #[must_use]
    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = FieldLines::new(9)
            .field("code:", &self.code)
            .field("message:", &self.message)
            .field("errors:", self.errors.len());
        for detail in &self.errors {
            lines = lines.raw(format_args!("        {}: {}", detail.reason, detail.message));
        }
        f.write_str(&lines.finish())
    }
}

impl std::error::Error for ApiError {}
