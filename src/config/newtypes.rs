//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so a client built
//! from them never sends a request with an empty credential.

use crate::error::ConfigError;
use std::fmt;

/// A validated OAuth2 client id.
///
/// # Example
///
/// ```rust
/// use google_client::ClientId;
///
/// let id = ClientId::new("1234.apps.googleusercontent.com").unwrap();
/// assert_eq!(id.as_ref(), "1234.apps.googleusercontent.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated OAuth2 client secret.
///
/// The `Debug` implementation masks the value so it never ends up in logs.
///
/// ```rust
/// use google_client::ClientSecret;
///
/// let secret = ClientSecret::new("s3cr3t").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// The redirect URI registered for an OAuth2 client.
///
/// Only emptiness is checked: installed applications use non-URL values such
/// as `urn:ietf:wg:oauth:2.0:oob`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectUri(String);

impl RedirectUri {
    /// Creates a new redirect URI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRedirectUri`] if the URI is empty.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into();
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(ConfigError::EmptyRedirectUri);
        }
        Ok(Self(uri.to_string()))
    }
}

impl AsRef<str> for RedirectUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Android application package name.
///
/// Package names are at least two dot-separated segments; each segment
/// starts with an ASCII letter and continues with letters, digits or `_`.
///
/// ```rust
/// use google_client::PackageName;
///
/// assert!(PackageName::new("com.example.app").is_ok());
/// assert!(PackageName::new("example").is_err());
/// assert!(PackageName::new("com..app").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageName(String);

impl PackageName {
    /// Creates a new validated package name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPackageName`] if the name is malformed.
    pub fn new(package: impl Into<String>) -> Result<Self, ConfigError> {
        let package = package.into();
        let segments: Vec<&str> = package.split('.').collect();
        let valid = segments.len() >= 2
            && segments.iter().all(|segment| {
                let mut chars = segment.chars();
                chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            });
        if !valid {
            return Err(ConfigError::InvalidPackageName { package });
        }
        Ok(Self(package))
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A GCM/FCM server authorization key, sent as `Authorization: key=...`.
///
/// The `Debug` implementation masks the value.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationKey(String);

impl AuthorizationKey {
    /// Creates a new validated authorization key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthorizationKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyAuthorizationKey);
        }
        Ok(Self(key))
    }

    /// Returns the `Authorization` header value for this key.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("key={}", self.0)
    }
}

impl AsRef<str> for AuthorizationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthorizationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthorizationKey(*****)")
    }
}

/// A validated absolute endpoint URL.
///
/// Trailing slashes are stripped so paths can be appended with a single `/`.
///
/// ```rust
/// use google_client::EndpointUrl;
///
/// let url = EndpointUrl::new("https://www.googleapis.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://www.googleapis.com");
/// assert_eq!(url.join("fcm/send"), "https://www.googleapis.com/fcm/send");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl(String);

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL has no scheme
    /// or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidEndpointUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self(url))
    }

    /// Appends a path to this URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty_string() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
        assert!(matches!(ClientId::new("   "), Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_secret_debug_is_masked() {
        let secret = ClientSecret::new("very-secret").unwrap();
        let debug = format!("{secret:?}");
        assert!(!debug.contains("very-secret"));
        assert_eq!(secret.as_ref(), "very-secret");
    }

    #[test]
    fn test_redirect_uri_is_trimmed() {
        let uri = RedirectUri::new("  https://app.example.com/cb ").unwrap();
        assert_eq!(uri.as_ref(), "https://app.example.com/cb");
        assert!(RedirectUri::new("urn:ietf:wg:oauth:2.0:oob").is_ok());
        assert!(matches!(
            RedirectUri::new(""),
            Err(ConfigError::EmptyRedirectUri)
        ));
    }

    #[test]
    fn test_package_name_validation() {
        assert!(PackageName::new("com.example.package").is_ok());
        assert!(PackageName::new("com.example.my_app2").is_ok());
        assert!(PackageName::new("").is_err());
        assert!(PackageName::new("com").is_err());
        assert!(PackageName::new("com.2example").is_err());
        assert!(PackageName::new("com.example.").is_err());
        assert!(PackageName::new("com.exa mple").is_err());
    }

    #[test]
    fn test_authorization_key_header_value() {
        let key = AuthorizationKey::new("AIzaSy").unwrap();
        assert_eq!(key.header_value(), "key=AIzaSy");
        assert_eq!(format!("{key:?}"), "AuthorizationKey(*****)");
        assert!(AuthorizationKey::new("").is_err());
    }

    #[test]
    fn test_endpoint_url_strips_trailing_slash_and_joins() {
        let url = EndpointUrl::new("http://127.0.0.1:8080/base/").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080/base");
        assert_eq!(url.join("/fcm/send"), "http://127.0.0.1:8080/base/fcm/send");
    }

    #[test]
    fn test_endpoint_url_rejects_invalid() {
        assert!(EndpointUrl::new("www.googleapis.com").is_err());
        assert!(EndpointUrl::new("https://").is_err());
        assert!(EndpointUrl::new("ht tp://host").is_err());
    }
}
