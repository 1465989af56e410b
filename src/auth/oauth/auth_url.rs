//! Options for the OAuth2 authorization URL.

use std::fmt;

use crate::auth::oauth::state::StateParam;

/// The `response_type` parameter. The web-server flow only uses `code`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseType {
    /// Ask for an authorization code.
    #[default]
    Code,
}

/// The `access_type` parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessType {
    /// Access only while the user is present; no refresh token.
    #[default]
    Online,
    /// Also issue a refresh token on the first exchange.
    Offline,
}

/// The `approval_prompt` parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApprovalPrompt {
    /// Prompt only when no grant exists yet.
    #[default]
    Auto,
    /// Always show the consent screen.
    Force,
}

impl ResponseType {
    /// The wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
        }
    }
}

impl AccessType {
    /// The wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl ApprovalPrompt {
    /// The wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Force => "force",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ApprovalPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional arguments of
/// [`WebServerApplication::create_auth_url`](crate::auth::oauth::WebServerApplication::create_auth_url).
///
/// Defaults: `Code`, `Online`, `Auto`, no state, no login hint.
///
/// ```rust
/// use google_client::auth::oauth::{AccessType, ApprovalPrompt, AuthUrlOptions};
///
/// let options = AuthUrlOptions::new()
///     .access_type(AccessType::Offline)
///     .approval_prompt(ApprovalPrompt::Force)
///     .login_hint("someone@example.com");
///
/// assert_eq!(options.get_access_type(), AccessType::Offline);
/// assert_eq!(options.get_login_hint(), Some("someone@example.com"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthUrlOptions {
    state: Option<String>,
    response_type: ResponseType,
    access_type: AccessType,
    approval_prompt: ApprovalPrompt,
    login_hint: Option<String>,
}

impl AuthUrlOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `state`. An empty string leaves it off the URL.
    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets `state` from a [`StateParam`].
    #[must_use]
    pub fn state_param(self, state: &StateParam) -> Self {
        self.state(state.as_ref())
    }

    #[must_use]
    pub const fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    #[must_use]
    pub const fn access_type(mut self, access_type: AccessType) -> Self {
        self.access_type = access_type;
        self
    }

    #[must_use]
    pub const fn approval_prompt(mut self, approval_prompt: ApprovalPrompt) -> Self {
        self.approval_prompt = approval_prompt;
        self
    }

    /// Sets `login_hint`. An empty string leaves it off the URL.
    #[must_use]
    pub fn login_hint(mut self, login_hint: impl Into<String>) -> Self {
        self.login_hint = Some(login_hint.into());
        self
    }

    /// Returns the state, if set and non-empty.
    #[must_use]
    pub fn get_state(&self) -> Option<&str> {
        self.state.as_deref().filter(|s| !s.is_empty())
    }

    #[must_use]
    pub const fn get_response_type(&self) -> ResponseType {
        self.response_type
    }

    #[must_use]
    pub const fn get_access_type(&self) -> AccessType {
        self.access_type
    }

    #[must_use]
    pub const fn get_approval_prompt(&self) -> ApprovalPrompt {
        self.approval_prompt
    }

    /// Returns the login hint, if set and non-empty.
    #[must_use]
    pub fn get_login_hint(&self) -> Option<&str> {
        self.login_hint.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AuthUrlOptions::default();
        assert_eq!(options.get_response_type(), ResponseType::Code);
        assert_eq!(options.get_access_type(), AccessType::Online);
        assert_eq!(options.get_approval_prompt(), ApprovalPrompt::Auto);
        assert!(options.get_state().is_none());
        assert!(options.get_login_hint().is_none());
    }

    #[test]
    fn test_empty_strings_are_treated_as_unset() {
        let options = AuthUrlOptions::new().state("").login_hint("");
        assert!(options.get_state().is_none());
        assert!(options.get_login_hint().is_none());
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(ResponseType::Code.to_string(), "code");
        assert_eq!(AccessType::Offline.as_str(), "offline");
        assert_eq!(ApprovalPrompt::Force.as_str(), "force");
    }
}
