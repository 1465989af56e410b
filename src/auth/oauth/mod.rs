//! OAuth2 web-server flow for Google APIs.
//!
//! The flow has three steps, each an explicit call on
//! [`WebServerApplication`]:
//!
//! 1. [`create_auth_url`](WebServerApplication::create_auth_url): build the
//!    consent URL and redirect the user to it.
//! 2. [`authorize_by_code`](WebServerApplication::authorize_by_code): exchange
//!    the `code` delivered to the redirect URI for a [`Token`].
//! 3. [`refresh`](WebServerApplication::refresh): trade a refresh token for a
//!    new access token once the old one expires.
//!
//! [`revoke`](WebServerApplication::revoke) invalidates a token.
//!
//! # Errors
//!
//! Token requests return `Result<TokenResponse, OAuthError>`. A rejected grant
//! (any 4xx) is data, [`TokenResponse::Error`]; only server failures,
//! transport faults and unparseable bodies are an [`OAuthError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use google_client::auth::oauth::{
//!     AccessType, ApprovalPrompt, AuthUrlOptions, StateParam, TokenResponse, WebServerApplication,
//! };
//!
//! let state = StateParam::new();
//! let url = app.create_auth_url(
//!     &["https://www.googleapis.com/auth/androidpublisher"],
//!     &AuthUrlOptions::new()
//!         .access_type(AccessType::Offline)
//!         .approval_prompt(ApprovalPrompt::Force)
//!         .state_param(&state),
//! );
//!
//! // ... the user comes back with `code` and `state` on the redirect URI
//! assert!(state.matches(&received_state));
//! if let TokenResponse::Resource(token) = app.authorize_by_code(&code).await? {
//!     let refreshed = app.refresh(token.refresh_token().unwrap_or_default()).await?;
//! }
//! ```

mod auth_url;
mod error;
mod state;
mod token;
mod web_server;

pub use auth_url::{AccessType, ApprovalPrompt, AuthUrlOptions, ResponseType};
pub use error::OAuthError;
pub use state::StateParam;
pub use token::{Token, TokenResponse};
pub use web_server::WebServerApplication;
