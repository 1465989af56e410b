//! The OAuth2 `state` parameter.
//!
//! Google echoes `state` back to the redirect URI untouched. A random value
//! sent on the authorization URL and compared on the callback binds the
//! callback to the browser session that started the flow.
//!
//! # Example
//!
//! ```rust
//! use google_client::auth::oauth::StateParam;
//!
//! let sent = StateParam::new();
//! assert_eq!(sent.value().len(), 15);
//!
//! // `received` is the `state` query parameter of the callback.
//! let received = sent.to_string();
//! assert!(sent.matches(&received));
//! ```

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;

/// An opaque `state` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateParam(String);

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StateParam>();
};

impl StateParam {
    const NONCE_LENGTH: usize = 15;

    /// Creates a state holding a fresh 15-character alphanumeric nonce.
    #[must_use]
    pub fn new() -> Self {
        let nonce = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::NONCE_LENGTH)
            .map(char::from)
            .collect();
        Self(nonce)
    }

    /// Wraps a caller-chosen value, or one received on the redirect URI.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Compares a state received on the redirect URI with this one.
    #[must_use]
    pub fn matches(&self, received: &str) -> bool {
        !received.is_empty() && self.0 == received
    }
}

impl Default for StateParam {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateParam {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_15_char_alphanumeric_nonce() {
        let state = StateParam::new();

        assert_eq!(state.value().len(), 15);
        assert!(state.value().chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(StateParam::new(), state);
    }

    #[test]
    fn test_from_raw_keeps_value_unchanged() {
        let state = StateParam::from_raw("return/to?page=1");
        assert_eq!(state.value(), "return/to?page=1");
        assert_eq!(state.to_string(), "return/to?page=1");
    }

    #[test]
    fn test_matches_requires_exact_non_empty_value() {
        let state = StateParam::from_raw("abc");
        assert!(state.matches("abc"));
        assert!(!state.matches("abd"));
        assert!(!StateParam::from_raw("").matches(""));
    }
}
