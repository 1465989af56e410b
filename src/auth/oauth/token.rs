//! OAuth2 access tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::response::display::FieldLines;
use crate::response::{de, ApiResponse};

/// Outcome of a token request: a [`Token`] or the error the endpoint reported.
pub type TokenResponse = ApiResponse<Token>;

/// An OAuth2 token as returned by the token endpoint.
///
/// # Example
///
/// ```rust
/// use google_client::auth::oauth::{Token, TokenResponse};
///
/// let body = r#"{"access_token":"ya29.a0","token_type":"Bearer","expires_in":3599}"#;
/// let token = TokenResponse::from_body(body).unwrap().resource().unwrap();
///
/// assert_eq!(token.access_token(), "ya29.a0");
/// assert_eq!(token.expires_in(), 3599);
/// assert!(token.refresh_token().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, deserialize_with = "de::string")]
    access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    #[serde(default, deserialize_with = "de::int64")]
    expires_in: i64,
    #[serde(default, deserialize_with = "de::string")]
    token_type: String,
    #[serde(default, deserialize_with = "de::string")]
    scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id_token: Option<String>,
}

impl Token {
    /// Creates a bearer token with no refresh token.
    #[must_use]
    pub fn new(access_token: impl Into<String>, expires_in: i64) -> Self {
        Self {
            access_token: access_token.into(),
            expires_in,
            token_type: "Bearer".to_string(),
            ..Self::default()
        }
    }

    /// Sets the refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Present only when offline access was granted.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Lifetime in seconds, counted from issue.
    #[must_use]
    pub const fn expires_in(&self) -> i64 {
        self.expires_in
    }

    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Space-separated granted scopes; empty when the endpoint omitted them.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    #[must_use]
    pub fn id_token(&self) -> Option<&str> {
        self.id_token.as_deref()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = FieldLines::new(15)
            .field("access token:", &self.access_token)
            .field("token type:", &self.token_type)
            .field("expires in:", format_args!("{} seconds", self.expires_in))
            .field("refresh token:", self.refresh_token.as_deref().unwrap_or_default())
            .field("scope:", &self.scope)
            .finish();
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_BODY: &str = r#"{
        "access_token": "ya29.a0AfH6SM",
        "expires_in": 3599,
        "refresh_token": "1//0gLz",
        "scope": "https://www.googleapis.com/auth/androidpublisher",
        "token_type": "Bearer",
        "id_token": "eyJhbGciOi"
    }"#;

    #[test]
    fn test_parses_full_token() {
        let token = TokenResponse::from_body(TOKEN_BODY).unwrap().resource().unwrap();

        assert_eq!(token.access_token(), "ya29.a0AfH6SM");
        assert_eq!(token.refresh_token(), Some("1//0gLz"));
        assert_eq!(token.token_type(), "Bearer");
        assert_eq!(token.scope(), "https://www.googleapis.com/auth/androidpublisher");
        assert_eq!(token.id_token(), Some("eyJhbGciOi"));
    }

    #[test]
    fn test_invalid_grant_is_an_error_response() {
        let response = TokenResponse::from_body(
            r#"{"error":"invalid_grant","error_description":"Token has been expired or revoked."}"#,
        )
        .unwrap();
        let error = response.into_result().unwrap_err();
        assert_eq!(error.code(), "invalid_grant");
    }

    #[test]
    fn test_display_renders_fixed_columns() {
        let token = Token::new("abc", 3600).with_refresh_token("def");
        let expected = [
            "    access token:  abc",
            "    token type:    Bearer",
            "    expires in:    3600 seconds",
            "    refresh token: def",
            "    scope:         ",
        ]
        .join("\n");
        assert_eq!(token.to_string(), expected);
    }

    #[test]
    fn test_serializes_without_absent_optionals() {
        let json = serde_json::to_value(Token::new("abc", 10)).unwrap();
        assert!(json.get("refresh_token").is_none());
        assert_eq!(json["access_token"], "abc");
    }
}
