//! HTTP request types.
//!
//! Every remote call builds a fresh, immutable [`HttpRequest`] through
//! [`HttpRequestBuilder`]; nothing is reused between calls.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Google APIs in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method.
    Get,
    /// HTTP POST method.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// Form content type (`application/x-www-form-urlencoded; charset=UTF-8`).
    UrlEncoded,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::UrlEncoded => "application/x-www-form-urlencoded; charset=UTF-8",
        }
    }
}

/// Encodes key/value pairs as an `application/x-www-form-urlencoded` string.
///
/// ```rust
/// use google_client::clients::encode_form;
///
/// assert_eq!(encode_form(&[("a", "1 2"), ("b", "x&y")]), "a=1%202&b=x%26y");
/// ```
#[must_use]
pub fn encode_form<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                urlencoding::encode(k.as_ref()),
                urlencoding::encode(v.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// An HTTP request to be sent by [`HttpClient`](crate::clients::HttpClient).
///
/// # Example
///
/// ```rust
/// use google_client::clients::{DataType, HttpMethod, HttpRequest};
///
/// let get = HttpRequest::builder(HttpMethod::Get, "https://www.googleapis.com/x")
///     .query_param("access_token", "token")
///     .build()
///     .unwrap();
/// assert_eq!(get.query, vec![("access_token".to_string(), "token".to_string())]);
///
/// let post = HttpRequest::builder(HttpMethod::Post, "https://accounts.google.com/o/oauth2/token")
///     .form(&[("grant_type", "refresh_token")])
///     .build()
///     .unwrap();
/// assert_eq!(post.body_type, Some(DataType::UrlEncoded));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL, without query string.
    pub url: String,
    /// The encoded request body, if any.
    pub body: Option<String>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters, in the order they were added.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the URL is not absolute
    /// - `body` is `Some` but `body_type` is `None`
    /// - a `Get` request carries a body
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.url.contains("://") {
            return Err(InvalidHttpRequestError::InvalidUrl {
                url: self.url.clone(),
            });
        }

        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.http_method == HttpMethod::Get && self.body.is_some() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<String>,
    body_type: Option<DataType>,
    query: Vec<(String, String)>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            body_type: None,
            query: Vec::new(),
            extra_headers: None,
        }
    }

    /// Sets an already-encoded request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets a JSON body and its content type.
    #[must_use]
    pub fn json(self, value: &serde_json::Value) -> Self {
        self.body(value.to_string()).body_type(DataType::Json)
    }

    /// Sets a form-encoded body and its content type.
    #[must_use]
    pub fn form<K: AsRef<str>, V: AsRef<str>>(self, pairs: &[(K, V)]) -> Self {
        self.body(encode_form(pairs)).body_type(DataType::UrlEncoded)
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://www.googleapis.com/androidpublisher/v3";

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
    }

    #[test]
    fn test_data_type_content_type() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
        assert_eq!(
            DataType::UrlEncoded.as_content_type(),
            "application/x-www-form-urlencoded; charset=UTF-8"
        );
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, URL).build().unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, URL);
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_post_without_body_is_allowed() {
        let request = HttpRequest::builder(HttpMethod::Post, URL).build();
        assert!(request.is_ok());
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let request = HttpRequest::builder(HttpMethod::Post, URL)
            .json(&json!({"deferralInfo": {"desiredExpiryTimeMillis": "1"}}))
            .build()
            .unwrap();

        assert_eq!(request.body_type, Some(DataType::Json));
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"deferralInfo":{"desiredExpiryTimeMillis":"1"}}"#)
        );
    }

    #[test]
    fn test_form_body_is_url_encoded() {
        let request = HttpRequest::builder(HttpMethod::Post, URL)
            .form(&[("redirect_uri", "https://app.example.com/cb"), ("code", "4/abc")])
            .build()
            .unwrap();

        assert_eq!(
            request.body.as_deref(),
            Some("redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb&code=4%2Fabc")
        );
    }

    #[test]
    fn test_verify_rejects_body_on_get() {
        let result = HttpRequest::builder(HttpMethod::Get, URL)
            .body("x")
            .body_type(DataType::Json)
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::BodyNotAllowed { method }) if method == "get"
        ));
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let result = HttpRequest::builder(HttpMethod::Post, URL).body("x").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::MissingBodyType)));
    }

    #[test]
    fn test_verify_rejects_relative_url() {
        let result = HttpRequest::builder(HttpMethod::Get, "/relative").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::InvalidUrl { .. })));
    }

    #[test]
    fn test_query_params_keep_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .query_param("b", "2")
            .query_param("a", "1")
            .build()
            .unwrap();

        assert_eq!(request.query[0].0, "b");
        assert_eq!(request.query[1].0, "a");
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder(HttpMethod::Post, URL)
            .header("Authorization", "key=abc")
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(headers.get("Authorization"), Some(&"key=abc".to_string()));
    }
}
