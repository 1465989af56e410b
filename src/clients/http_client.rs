//! Async HTTP transport shared by the domain clients.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client used by every domain client in this crate.
///
/// Each call to [`request`](Self::request) maps to exactly one network round
/// trip. The transport performs no retries; 2xx responses are returned as
/// [`HttpResponse`], 4xx as [`HttpError::Client`] and 5xx as
/// [`HttpError::Server`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use google_client::ClientConfig;
/// use google_client::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&ClientConfig::default());
/// let request = HttpRequest::builder(HttpMethod::Get, "https://www.googleapis.com/discovery/v1/apis")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the shared configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Google Client Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and classifies the response by status code.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - The server answers with 4xx or another non-2xx status below 500 (`Client`)
    /// - The server answers with 5xx (`Server`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        tracing::debug!(
            method = %request.http_method,
            url = %request.url,
            "Sending request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);
        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            code,
            url = %request.url,
            "Request failed with non-2xx status"
        );

        let error = HttpResponseError {
            code,
            body: response.body,
            headers: response.headers,
        };
        if code >= 500 {
            Err(HttpError::Server(error))
        } else {
            Err(HttpError::Client(error))
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&ClientConfig::default());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Google Client Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ClientConfig::builder().user_agent_prefix("MyApp/1.0").build();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&ClientConfig::default());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_builds_with_timeout() {
        let config = ClientConfig::builder()
            .timeout(Duration::from_millis(250))
            .build();
        let client = HttpClient::new(&config);
        assert!(client.default_headers().contains_key("User-Agent"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
