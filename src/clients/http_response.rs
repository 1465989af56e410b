//! HTTP response type.

use std::collections::HashMap;

use crate::clients::errors::first_header;

/// A successful (2xx) response.
///
/// The body is kept as raw text; each domain client decides how to decode it.
///
/// # Example
///
/// ```rust
/// use google_client::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("content-type".to_string(), vec!["application/json".to_string()]);
///
/// let response = HttpResponse::new(200, headers, r#"{"kind":"x"}"#.to_string());
/// assert!(response.is_ok());
/// assert_eq!(response.header("Content-Type"), Some("application/json"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_for_2xx_codes() {
        for code in [200, 201, 204, 299] {
            assert!(HttpResponse::new(code, HashMap::new(), String::new()).is_ok());
        }
        for code in [199, 300, 404, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), String::new()).is_ok());
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "retry-after".to_string(),
            vec!["10".to_string(), "20".to_string()],
        );
        let response = HttpResponse::new(200, headers, String::new());

        assert_eq!(response.header("Retry-After"), Some("10"));
        assert_eq!(response.header("x-missing"), None);
    }
}
