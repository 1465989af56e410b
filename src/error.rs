//! Configuration error types.
//!
//! All validated configuration constructors return `Result<T, ConfigError>`
//! so that bad credentials or endpoints are rejected before any request is
//! built.
//!
//! # Example
//!
//! ```rust
//! use google_client::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// OAuth2 client id cannot be empty.
    #[error("OAuth2 client id cannot be empty. Please provide the client id from the Google API console.")]
    EmptyClientId,

    /// OAuth2 client secret cannot be empty.
    #[error("OAuth2 client secret cannot be empty. Please provide the client secret from the Google API console.")]
    EmptyClientSecret,

    /// Redirect URI cannot be empty.
    #[error("Redirect URI cannot be empty. Use the URI registered for the OAuth2 client.")]
    EmptyRedirectUri,

    /// GCM authorization key cannot be empty.
    #[error("GCM authorization key cannot be empty. Please provide the server key of the project.")]
    EmptyAuthorizationKey,

    /// Android package name is invalid.
    #[error("Invalid package name '{package}'. Expected a dotted Java package name (e.g., 'com.example.app').")]
    InvalidPackageName {
        /// The invalid package name that was provided.
        package: String,
    },

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://www.googleapis.com').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
