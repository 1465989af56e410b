//! Authentication against Google APIs.
//!
//! - [`oauth`]: the OAuth2 web-server flow producing access tokens for the
//!   Android Publisher API
//!
//! GCM/FCM authenticates with a static server key instead; see
//! [`AuthorizationKey`](crate::AuthorizationKey).

pub mod oauth;

pub use oauth::{OAuthError, Token, WebServerApplication};
