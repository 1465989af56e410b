//! Configuration types shared by every client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: endpoints, user agent prefix and request timeout
//! - [`ClientConfigBuilder`]: builder for [`ClientConfig`]
//! - [`Endpoints`]: the remote URLs, production or rooted at a custom base
//! - [`ClientId`], [`ClientSecret`], [`RedirectUri`]: OAuth2 credentials
//! - [`PackageName`]: Android application package
//! - [`AuthorizationKey`]: GCM/FCM server key
//! - [`EndpointUrl`]: validated absolute URL
//!
//! # Example
//!
//! ```rust
//! use google_client::{ClientConfig, Endpoints};
//! use std::time::Duration;
//!
//! let config = ClientConfig::builder()
//!     .endpoints(Endpoints::google())
//!     .user_agent_prefix("MyApp/1.0")
//!     .timeout(Duration::from_secs(30))
//!     .build();
//!
//! assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
//! ```

mod endpoints;
mod newtypes;

pub use endpoints::{
    Endpoints, ANDROID_PUBLISHER_URL, GCM_SEND_URL, GOOGLE_OAUTH_AUTH_URL,
    GOOGLE_OAUTH_REVOKE_URL, GOOGLE_OAUTH_TOKEN_URL,
};
pub use newtypes::{
    AuthorizationKey, ClientId, ClientSecret, EndpointUrl, PackageName, RedirectUri,
};

use std::time::Duration;

/// Configuration shared by the OAuth2, Android Publisher and GCM clients.
///
/// `ClientConfig` is `Clone`, `Send` and `Sync`; one value can configure any
/// number of independent clients.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    endpoints: Endpoints,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the configured endpoints.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for [`ClientConfig`].
///
/// # Defaults
///
/// - `endpoints`: [`Endpoints::google`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (the transport's default)
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    endpoints: Option<Endpoints>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoints.
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ClientConfig`].
    #[must_use]
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            endpoints: self.endpoints.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        }
    }
}
