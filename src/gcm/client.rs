//! Sender for downstream messages.

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::{AuthorizationKey, ClientConfig};
use crate::gcm::error::GcmError;
use crate::gcm::message::PayloadMessage;
use crate::gcm::response::GcmResponse;

/// Sends [`PayloadMessage`]s with a server authorization key.
///
/// # Thread Safety
///
/// `GcmClient` is `Send + Sync`; a single instance can be shared across
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use google_client::gcm::{ContentType, GcmClient, GcmError, PayloadMessage};
/// use google_client::AuthorizationKey;
///
/// let client = GcmClient::new(AuthorizationKey::new("AIzaSy...")?);
/// let message = PayloadMessage::new(ContentType::Json)
///     .registration_ids(device_ids)
///     .data("message", "hello");
///
/// match client.send(&message).await {
///     Ok(response) => println!("{} delivered", response.success()),
///     Err(GcmError::Server { retry_after }) => schedule_retry(retry_after),
///     Err(other) => eprintln!("{other}"),
/// }
/// ```
#[derive(Debug)]
pub struct GcmClient {
    http: HttpClient,
    endpoint: String,
    authorization_key: AuthorizationKey,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GcmClient>();
};

impl GcmClient {
    /// Creates a client talking to the production FCM endpoint.
    #[must_use]
    pub fn new(authorization_key: AuthorizationKey) -> Self {
        Self::with_config(authorization_key, &ClientConfig::default())
    }

    #[must_use]
    pub fn with_config(authorization_key: AuthorizationKey, config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            endpoint: config.endpoints().gcm_send().to_string(),
            authorization_key,
        }
    }

    #[must_use]
    pub const fn authorization_key(&self) -> &AuthorizationKey {
        &self.authorization_key
    }

    /// Sends one message and parses the per-recipient results.
    ///
    /// Nothing is retried; a [`GcmError::Server`] carries the delay the
    /// service asked for.
    ///
    /// # Errors
    ///
    /// - [`GcmError::RegistrationIds`] / [`GcmError::Format`] when the message
    ///   is rejected locally, or [`GcmError::Format`] on HTTP 400
    /// - [`GcmError::Unauthorized`] on HTTP 401
    /// - [`GcmError::Unrecoverable`] on HTTP 500
    /// - [`GcmError::Server`] on any other 5xx
    /// - [`GcmError::Http`] on other 4xx and transport failures
    /// - [`GcmError::InvalidResponse`] when a 2xx body cannot be parsed
    pub async fn send(&self, message: &PayloadMessage) -> Result<GcmResponse, GcmError> {
        let content_type = message.content_type();
        let body = message.export()?;

        let request = HttpRequest::builder(HttpMethod::Post, &self.endpoint)
            .body(body)
            .body_type(content_type.data_type())
            .header("Authorization", self.authorization_key.header_value())
            .build()
            .map_err(HttpError::from)?;

        tracing::debug!(
            %content_type,
            recipients = message.get_registration_ids().len(),
            "Sending GCM message"
        );

        let response = self
            .http
            .request(request)
            .await
            .map_err(|e| self.classify(e))?;
        Ok(GcmResponse::parse(&response.body, content_type)?)
    }

    fn classify(&self, error: HttpError) -> GcmError {
        match error {
            HttpError::Client(response) if response.code == 400 => {
                tracing::warn!(body = %response.body, "GCM rejected the request format");
                GcmError::Format {
                    message: format!("invalid JSON request with message '{}'", response.body.trim()),
                }
            }
            HttpError::Client(response) if response.code == 401 => {
                tracing::warn!("GCM rejected the authorization key");
                GcmError::Unauthorized {
                    key: self.authorization_key.as_ref().to_string(),
                }
            }
            HttpError::Server(response) if response.code == 500 => {
                tracing::warn!("GCM reported an unrecoverable server error");
                GcmError::Unrecoverable
            }
            HttpError::Server(response) => {
                let retry_after = response.retry_after();
                tracing::warn!(code = response.code, ?retry_after, "GCM server unavailable");
                GcmError::Server { retry_after }
            }
            other => GcmError::Http(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use crate::gcm::message::ContentType;
    use std::collections::HashMap;

    fn client() -> GcmClient {
        GcmClient::new(AuthorizationKey::new("server-key").unwrap())
    }

    fn response_error(code: u16, body: &str, retry_after: Option<&str>) -> HttpResponseError {
        let mut headers = HashMap::new();
        if let Some(value) = retry_after {
            headers.insert("retry-after".to_string(), vec![value.to_string()]);
        }
        HttpResponseError {
            code,
            body: body.to_string(),
            headers,
        }
    }

    #[test]
    fn test_classify_status_codes() {
        let client = client();

        match client.classify(HttpError::Client(response_error(400, "bad field\n", None))) {
            GcmError::Format { message } => {
                assert_eq!(message, "invalid JSON request with message 'bad field'");
            }
            other => panic!("unexpected {other:?}"),
        }
        match client.classify(HttpError::Client(response_error(401, "", None))) {
            GcmError::Unauthorized { key } => assert_eq!(key, "server-key"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            client.classify(HttpError::Server(response_error(500, "", Some("30")))),
            GcmError::Unrecoverable
        ));
        assert_eq!(
            client
                .classify(HttpError::Server(response_error(503, "", Some("120"))))
                .retry_after(),
            Some(120)
        );
        assert!(matches!(
            client.classify(HttpError::Server(response_error(502, "", None))),
            GcmError::Server { retry_after: None }
        ));
        assert!(matches!(
            client.classify(HttpError::Client(response_error(404, "", None))),
            GcmError::Http(HttpError::Client(_))
        ));
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_message_locally() {
        let message = PayloadMessage::new(ContentType::Plain);
        assert!(matches!(
            client().send(&message).await,
            Err(GcmError::RegistrationIds { count: 0, .. })
        ));
    }
}
