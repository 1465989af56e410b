//! Remote endpoints used by the domain clients.

use crate::config::newtypes::EndpointUrl;
use crate::error::ConfigError;

/// OAuth2 authorization endpoint.
pub const GOOGLE_OAUTH_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";
/// OAuth2 token endpoint.
pub const GOOGLE_OAUTH_TOKEN_URL: &str = "https://accounts.google.com/o/oauth2/token";
/// OAuth2 revocation endpoint.
pub const GOOGLE_OAUTH_REVOKE_URL: &str = "https://accounts.google.com/o/oauth2/revoke";
/// Android Publisher API root.
pub const ANDROID_PUBLISHER_URL: &str = "https://www.googleapis.com/androidpublisher/v3";
/// FCM legacy HTTP send endpoint.
pub const GCM_SEND_URL: &str = "https://fcm.googleapis.com/fcm/send";

/// The set of URLs the clients talk to.
///
/// [`Endpoints::google`] returns the production URLs. [`Endpoints::with_base_url`]
/// roots every API under one base URL, which is how a proxy or a local mock
/// server is targeted.
///
/// # Example
///
/// ```rust
/// use google_client::Endpoints;
///
/// let endpoints = Endpoints::with_base_url("http://127.0.0.1:9000").unwrap();
/// assert_eq!(endpoints.gcm_send(), "http://127.0.0.1:9000/fcm/send");
/// assert_eq!(
///     endpoints.android_publisher(),
///     "http://127.0.0.1:9000/androidpublisher/v3"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    oauth_auth: String,
    oauth_token: String,
    oauth_revoke: String,
    android_publisher: String,
    gcm_send: String,
}

impl Endpoints {
    /// Returns the production Google endpoints.
    #[must_use]
    pub fn google() -> Self {
        Self {
            oauth_auth: GOOGLE_OAUTH_AUTH_URL.to_string(),
            oauth_token: GOOGLE_OAUTH_TOKEN_URL.to_string(),
            oauth_revoke: GOOGLE_OAUTH_REVOKE_URL.to_string(),
            android_publisher: ANDROID_PUBLISHER_URL.to_string(),
            gcm_send: GCM_SEND_URL.to_string(),
        }
    }

    /// Roots every endpoint at `base_url`, keeping the production paths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if `base_url` is not an
    /// absolute URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base = EndpointUrl::new(base_url)?;
        Ok(Self {
            oauth_auth: base.join("o/oauth2/auth"),
            oauth_token: base.join("o/oauth2/token"),
            oauth_revoke: base.join("o/oauth2/revoke"),
            android_publisher: base.join("androidpublisher/v3"),
            gcm_send: base.join("fcm/send"),
        })
    }

    /// OAuth2 authorization endpoint.
    #[must_use]
    pub fn oauth_auth(&self) -> &str {
        &self.oauth_auth
    }

    /// OAuth2 token endpoint.
    #[must_use]
    pub fn oauth_token(&self) -> &str {
        &self.oauth_token
    }

    /// OAuth2 revocation endpoint.
    #[must_use]
    pub fn oauth_revoke(&self) -> &str {
        &self.oauth_revoke
    }

    /// Android Publisher API root.
    #[must_use]
    pub fn android_publisher(&self) -> &str {
        &self.android_publisher
    }

    /// GCM/FCM send endpoint.
    #[must_use]
    pub fn gcm_send(&self) -> &str {
        &self.gcm_send
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::google()
    }
}
