//! # Google Client
//!
//! Async clients for a few Google HTTP APIs: the OAuth2 web-server flow,
//! Android Publisher purchase verification and GCM/FCM push delivery.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for credentials, package names and endpoints
//! - OAuth2 authorization URLs, code exchange, refresh and revocation via
//!   [`auth::oauth`]
//! - Product, subscription and in-app product lookups via
//!   [`android_publisher`]
//! - Downstream push messages via [`gcm`]
//! - A resource-or-error response model shared by all of them in [`response`]
//!
//! ## Quick Start
//!
//! ```rust
//! use google_client::{ClientConfig, ClientId, Endpoints, PackageName};
//! use std::time::Duration;
//!
//! let config = ClientConfig::builder()
//!     .endpoints(Endpoints::google())
//!     .user_agent_prefix("my-backend/1.0")
//!     .timeout(Duration::from_secs(20))
//!     .build();
//!
//! let client_id = ClientId::new("1234.apps.googleusercontent.com").unwrap();
//! let package = PackageName::new("com.example.package").unwrap();
//! assert_eq!(package.as_ref(), "com.example.package");
//! # let _ = (config, client_id);
//! ```
//!
//! ## OAuth2
//!
//! ```rust,ignore
//! use google_client::auth::oauth::{AccessType, ApprovalPrompt, AuthUrlOptions, StateParam, WebServerApplication};
//! use google_client::{ClientId, ClientSecret, RedirectUri};
//!
//! let mut app = WebServerApplication::new(client_id, client_secret, redirect_uri);
//! let state = StateParam::new();
//! let url = app.create_auth_url(
//!     &["https://www.googleapis.com/auth/androidpublisher"],
//!     &AuthUrlOptions::new()
//!         .state_param(&state)
//!         .access_type(AccessType::Offline)
//!         .approval_prompt(ApprovalPrompt::Force),
//! );
//! // ...redirect, then on the callback:
//! let token = app.authorize_by_code(&code).await?.into_result()?;
//! ```
//!
//! ## Verifying a purchase
//!
//! ```rust,ignore
//! use google_client::android_publisher::ProductsClient;
//!
//! let products = ProductsClient::new(package, token.access_token());
//! let purchase = products.get("coins_100", &purchase_token).await?;
//! if purchase.is_purchased() && !purchase.is_consumed() {
//!     grant_coins();
//! }
//! ```
//!
//! ## Sending a push message
//!
//! ```rust,ignore
//! use google_client::gcm::{ContentType, GcmClient, PayloadMessage};
//! use google_client::AuthorizationKey;
//!
//! let client = GcmClient::new(AuthorizationKey::new(server_key)?);
//! let response = client
//!     .send(&PayloadMessage::new(ContentType::Json).registration_id(device).data("k", "v"))
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all clients are `Send + Sync`
//! - **No implicit retries**: retry hints are surfaced, never acted on

pub mod android_publisher;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod gcm;
pub mod response;

// Re-export configuration types at crate root for convenience
pub use config::{
    AuthorizationKey, ClientConfig, ClientConfigBuilder, ClientId, ClientSecret, EndpointUrl,
    Endpoints, PackageName, RedirectUri,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

pub use auth::oauth::{OAuthError, StateParam, Token, TokenResponse, WebServerApplication};
pub use response::{ApiError, ApiResponse, ParseError};
