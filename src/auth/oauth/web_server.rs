//! OAuth2 web-server flow against Google's accounts endpoints.

use crate::auth::oauth::auth_url::AuthUrlOptions;
use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::token::{Token, TokenResponse};
use crate::clients::{encode_form, HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::{ClientConfig, ClientId, ClientSecret, Endpoints, RedirectUri};
use crate::response::{ApiError, ApiResponse};

const AUTHORIZATION_CODE_GRANT_TYPE: &str = "authorization_code";
const REFRESH_TOKEN_GRANT_TYPE: &str = "refresh_token";

/// Client for the OAuth2 web-server flow.
///
/// The client owns the session's current [`Token`]: a successful
/// [`authorize_by_code`](Self::authorize_by_code) or [`refresh`](Self::refresh)
/// replaces it. Nothing happens implicitly; an expired token stays in place
/// until the caller refreshes it.
///
/// # Example
///
/// ```rust,ignore
/// use google_client::auth::oauth::{AccessType, AuthUrlOptions, TokenResponse, WebServerApplication};
/// use google_client::{ClientId, ClientSecret, RedirectUri};
///
/// let mut app = WebServerApplication::new(
///     ClientId::new("1234.apps.googleusercontent.com")?,
///     ClientSecret::new("secret")?,
///     RedirectUri::new("https://app.example.com/oauth2callback")?,
/// );
///
/// let url = app.create_auth_url(
///     &["https://www.googleapis.com/auth/androidpublisher"],
///     &AuthUrlOptions::new().access_type(AccessType::Offline),
/// );
/// // Redirect the user to `url`, then exchange the code from the callback:
/// match app.authorize_by_code("4/0AX4XfWh").await? {
///     TokenResponse::Resource(token) => println!("{token}"),
///     TokenResponse::Error(error) => eprintln!("{error}"),
/// }
/// ```
#[derive(Debug)]
pub struct WebServerApplication {
    client_id: ClientId,
    client_secret: ClientSecret,
    redirect_uri: RedirectUri,
    endpoints: Endpoints,
    http: HttpClient,
    token: Option<Token>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebServerApplication>();
};

impl WebServerApplication {
    /// Creates a client talking to the production Google endpoints.
    #[must_use]
    pub fn new(client_id: ClientId, client_secret: ClientSecret, redirect_uri: RedirectUri) -> Self {
        Self::with_config(client_id, client_secret, redirect_uri, &ClientConfig::default())
    }

    /// Creates a client with explicit endpoints, user agent and timeout.
    #[must_use]
    pub fn with_config(
        client_id: ClientId,
        client_secret: ClientSecret,
        redirect_uri: RedirectUri,
        config: &ClientConfig,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
            endpoints: config.endpoints().clone(),
            http: HttpClient::new(config),
            token: None,
        }
    }

    /// Builds the URL the user is sent to for consent.
    ///
    /// Parameters appear in a fixed order: `response_type`, `client_id`,
    /// `redirect_uri`, `scope`, `access_type`, `approval_prompt`, then
    /// `state` and `login_hint` when non-empty. Scopes are joined with a
    /// space before encoding.
    ///
    /// ```rust
    /// use google_client::auth::oauth::{AccessType, ApprovalPrompt, AuthUrlOptions, WebServerApplication};
    /// use google_client::{ClientId, ClientSecret, RedirectUri};
    ///
    /// let app = WebServerApplication::new(
    ///     ClientId::new("id").unwrap(),
    ///     ClientSecret::new("secret").unwrap(),
    ///     RedirectUri::new("urn:ietf:wg:oauth:2.0:oob").unwrap(),
    /// );
    /// let url = app.create_auth_url(
    ///     &["a", "b"],
    ///     &AuthUrlOptions::new()
    ///         .access_type(AccessType::Offline)
    ///         .approval_prompt(ApprovalPrompt::Force),
    /// );
    ///
    /// assert_eq!(
    ///     url,
    ///     "https://accounts.google.com/o/oauth2/auth?response_type=code&client_id=id\
    ///      &redirect_uri=urn%3Aietf%3Awg%3Aoauth%3A2.0%3Aoob&scope=a%20b\
    ///      &access_type=offline&approval_prompt=force"
    /// );
    /// ```
    #[must_use]
    pub fn create_auth_url<S: AsRef<str>>(&self, scopes: &[S], options: &AuthUrlOptions) -> String {
        let scope = scopes
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");

        let mut params = vec![
            ("response_type", options.get_response_type().as_str()),
            ("client_id", self.client_id.as_ref()),
            ("redirect_uri", self.redirect_uri.as_ref()),
            ("scope", scope.as_str()),
            ("access_type", options.get_access_type().as_str()),
            ("approval_prompt", options.get_approval_prompt().as_str()),
        ];
        if let Some(state) = options.get_state() {
            params.push(("state", state));
        }
        if let Some(login_hint) = options.get_login_hint() {
            params.push(("login_hint", login_hint));
        }

        format!("{}?{}", self.endpoints.oauth_auth(), encode_form(&params))
    }

    /// Exchanges an authorization code for a token.
    ///
    /// A 4xx answer is returned as [`TokenResponse::Error`], not raised. A
    /// successful exchange replaces the current token.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::Http`] on 5xx answers and transport faults, and
    /// [`OAuthError::InvalidResponse`] if a 2xx body cannot be parsed.
    pub async fn authorize_by_code(&mut self, code: &str) -> Result<TokenResponse, OAuthError> {
        let form = [
            ("code", code),
            ("client_id", self.client_id.as_ref()),
            ("client_secret", self.client_secret.as_ref()),
            ("redirect_uri", self.redirect_uri.as_ref()),
            ("grant_type", AUTHORIZATION_CODE_GRANT_TYPE),
        ];
        let response = self.request_token(&form).await?;
        Ok(self.store(response, None))
    }

    /// Obtains a fresh access token from a refresh token.
    ///
    /// Google usually omits `refresh_token` from refresh responses; the
    /// stored token then keeps the one used for this call.
    ///
    /// # Errors
    ///
    /// Same as [`authorize_by_code`](Self::authorize_by_code).
    pub async fn refresh(&mut self, refresh_token: &str) -> Result<TokenResponse, OAuthError> {
        let form = [
            ("client_id", self.client_id.as_ref()),
            ("client_secret", self.client_secret.as_ref()),
            ("refresh_token", refresh_token),
            ("grant_type", REFRESH_TOKEN_GRANT_TYPE),
        ];
        let response = self.request_token(&form).await?;
        Ok(self.store(response, Some(refresh_token)))
    }

    /// Revokes an access or refresh token.
    ///
    /// Returns `true` on a 2xx answer and `false` on any failure, including
    /// transport faults.
    pub async fn revoke(&self, token: &str) -> bool {
        let request = match HttpRequest::builder(HttpMethod::Get, self.endpoints.oauth_revoke())
            .query_param("token", token)
            .build()
        {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!(%error, "Could not build revoke request");
                return false;
            }
        };

        match self.http.request(request).await {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!(status = ?error.status(), "Token revocation failed");
                false
            }
        }
    }

    /// The current session token, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// The current access token, if any.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.token.as_ref().map(Token::access_token)
    }

    /// Replaces the current session token, e.g. with one restored from storage.
    pub fn set_token(&mut self, token: Token) {
        tracing::debug!(
            has_refresh_token = token.refresh_token().is_some(),
            "Replacing OAuth2 session token"
        );
        self.token = Some(token);
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenResponse, OAuthError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.endpoints.oauth_token())
            .form(form)
            .build()
            .map_err(HttpError::from)?;

        match self.http.request(request).await {
            Ok(response) => Ok(ApiResponse::from_body(&response.body)?),
            Err(HttpError::Client(error)) => {
                tracing::warn!(code = error.code, "Token endpoint rejected the request");
                Ok(TokenResponse::Error(ApiError::from_body_lossy(&error.body)))
            }
            Err(error) => Err(error.into()),
        }
    }

    fn store(&mut self, response: TokenResponse, refresh_token: Option<&str>) -> TokenResponse {
        match response {
            TokenResponse::Resource(mut token) => {
                if token.refresh_token().is_none() {
                    if let Some(refresh_token) = refresh_token {
                        token = token.with_refresh_token(refresh_token);
                    }
                }
                self.set_token(token.clone());
                TokenResponse::Resource(token)
            }
            error @ TokenResponse::Error(_) => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::oauth::{AccessType, ApprovalPrompt};

    fn create_test_app() -> WebServerApplication {
        WebServerApplication::new(
            ClientId::new("client-id").unwrap(),
            ClientSecret::new("client-secret").unwrap(),
            RedirectUri::new("https://app.example.com/cb").unwrap(),
        )
    }

    #[test]
    fn test_auth_url_parameter_order_and_encoding() {
        let app = create_test_app();
        let url = app.create_auth_url(
            &["a", "b"],
            &AuthUrlOptions::new()
                .access_type(AccessType::Offline)
                .approval_prompt(ApprovalPrompt::Force),
        );

        assert_eq!(
            url,
            "https://accounts.google.com/o/oauth2/auth?response_type=code&client_id=client-id\
             &redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb&scope=a%20b\
             &access_type=offline&approval_prompt=force"
        );
    }

    #[test]
    fn test_auth_url_appends_state_then_login_hint() {
        let app = create_test_app();
        let url = app.create_auth_url(
            &["email"],
            &AuthUrlOptions::new().login_hint("me@example.com").state("xyz"),
        );

        assert!(url.ends_with("&approval_prompt=auto&state=xyz&login_hint=me%40example.com"));
        assert!(url.contains("access_type=online"));
    }

    #[test]
    fn test_auth_url_omits_empty_state() {
        let app = create_test_app();
        let url = app.create_auth_url(&["email"], &AuthUrlOptions::new().state(""));
        assert!(!url.contains("state="));
    }

    #[test]
    fn test_new_client_has_no_token() {
        let app = create_test_app();
        assert!(app.token().is_none());
        assert!(app.access_token().is_none());
    }

    #[test]
    fn test_set_token_replaces_current_token() {
        let mut app = create_test_app();
        app.set_token(Token::new("first", 10));
        app.set_token(Token::new("second", 10));
        assert_eq!(app.access_token(), Some("second"));
    }

    #[test]
    fn test_store_carries_refresh_token_over() {
        let mut app = create_test_app();
        let stored = app.store(TokenResponse::Resource(Token::new("new", 3600)), Some("1//r"));

        assert_eq!(stored.resource().unwrap().refresh_token(), Some("1//r"));
        assert_eq!(app.token().unwrap().refresh_token(), Some("1//r"));
    }

    #[test]
    fn test_store_keeps_token_on_error() {
        let mut app = create_test_app();
        app.set_token(Token::new("kept", 10));
        let _ = app.store(TokenResponse::Error(ApiError::new("invalid_grant", "")), None);
        assert_eq!(app.access_token(), Some("kept"));
    }
}
