//! Send results.

use serde::Deserialize;

use crate::gcm::message::ContentType;
use crate::response::{de, ParseError};

/// Outcome for one registration id, in request order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GcmResult {
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    registration_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl GcmResult {
    #[must_use]
    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    /// Canonical registration id that replaces the one sent.
    #[must_use]
    pub fn registration_id(&self) -> Option<&str> {
        self.registration_id.as_deref()
    }

    /// Error code such as `NotRegistered` or `InvalidRegistration`.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.message_id.is_some()
    }
}

/// Parsed answer to a send.
///
/// ```rust
/// use google_client::gcm::{ContentType, GcmResponse};
///
/// let response = GcmResponse::parse("id=0:1234\nregistration_id=APA91bN", ContentType::Plain).unwrap();
/// assert_eq!(response.success(), 1);
/// assert_eq!(response.canonical_ids(), 1);
/// assert_eq!(response.results()[0].registration_id(), Some("APA91bN"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GcmResponse {
    #[serde(default, deserialize_with = "de::int64")]
    multicast_id: i64,
    #[serde(default)]
    success: u32,
    #[serde(default)]
    failure: u32,
    #[serde(default)]
    canonical_ids: u32,
    #[serde(default)]
    results: Vec<GcmResult>,
}

impl GcmResponse {
    /// Parses a 2xx body sent back for a message of `content_type`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for invalid JSON, or for a plain body without an
    /// `id=` or `Error=` line.
    pub fn parse(body: &str, content_type: ContentType) -> Result<Self, ParseError> {
        match content_type {
            ContentType::Json => Ok(serde_json::from_str(body)?),
            ContentType::Plain => Self::parse_plain(body),
        }
    }

    fn parse_plain(body: &str) -> Result<Self, ParseError> {
        let mut result = GcmResult::default();
        for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| ParseError::Malformed(format!("unexpected line '{line}'")))?;
            let value = value.to_string();
            match key {
                "id" => result.message_id = Some(value),
                "Error" => result.error = Some(value),
                "registration_id" => result.registration_id = Some(value),
                _ => {
                    return Err(ParseError::Malformed(format!("unexpected line '{line}'")));
                }
            }
        }
        if result.message_id.is_none() && result.error.is_none() {
            return Err(ParseError::Malformed(
                "missing 'id' or 'Error' line".to_string(),
            ));
        }

        Ok(Self {
            multicast_id: 0,
            success: u32::from(result.message_id.is_some()),
            failure: u32::from(result.error.is_some()),
            canonical_ids: u32::from(result.registration_id.is_some()),
            results: vec![result],
        })
    }

    /// Zero for plain messages.
    #[must_use]
    pub const fn multicast_id(&self) -> i64 {
        self.multicast_id
    }

    #[must_use]
    pub const fn success(&self) -> u32 {
        self.success
    }

    #[must_use]
    pub const fn failure(&self) -> u32 {
        self.failure
    }

    #[must_use]
    pub const fn canonical_ids(&self) -> u32 {
        self.canonical_ids
    }

    #[must_use]
    pub fn results(&self) -> &[GcmResult] {
        &self.results
    }

    /// Pairs each sent registration id with its result.
    pub fn zip<'a>(
        &'a self,
        registration_ids: &'a [String],
    ) -> impl Iterator<Item = (&'a str, &'a GcmResult)> {
        registration_ids
            .iter()
            .map(String::as_str)
            .zip(self.results.iter())
    }
}
