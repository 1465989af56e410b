//! Downstream messages.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::clients::{encode_form, DataType};
use crate::gcm::error::GcmError;

/// Longest `time_to_live` the service accepts: four weeks, in seconds.
pub const MAX_TIME_TO_LIVE: u32 = 2_419_200;

/// Most registration ids one JSON message may target.
pub const MAX_REGISTRATION_IDS: usize = 1000;

/// Wire format of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    /// Form-encoded, one recipient.
    Plain,
    /// JSON, up to [`MAX_REGISTRATION_IDS`] recipients.
    Json,
}

impl ContentType {
    /// Maps a numeric type code (`0` plain, `1` JSON).
    ///
    /// # Errors
    ///
    /// Returns [`GcmError::Format`] for any other code.
    pub fn from_code(code: i64) -> Result<Self, GcmError> {
        match code {
            0 => Ok(Self::Plain),
            1 => Ok(Self::Json),
            other => Err(GcmError::Format {
                message: format!("unsupported request format code '{other}'"),
            }),
        }
    }

    /// The numeric type code.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Plain => 0,
            Self::Json => 1,
        }
    }

    /// The request body type for this format.
    #[must_use]
    pub const fn data_type(self) -> DataType {
        match self {
            Self::Plain => DataType::UrlEncoded,
            Self::Json => DataType::Json,
        }
    }

    pub(crate) const fn registration_id_limits(self) -> &'static str {
        match self {
            Self::Plain => "exactly 1",
            Self::Json => "1 to 1000",
        }
    }

    const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Plain => count == 1,
            Self::Json => count >= 1 && count <= MAX_REGISTRATION_IDS,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plain => "plain",
            Self::Json => "json",
        })
    }
}

#[derive(Serialize)]
struct JsonPayload<'a> {
    registration_ids: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    collapse_key: Option<&'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    data: &'a BTreeMap<String, String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    delay_while_idle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_to_live: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    restricted_package_name: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    dry_run: bool,
}

/// A push message with a string key/value payload.
///
/// # Example
///
/// ```rust
/// use google_client::gcm::{ContentType, PayloadMessage};
///
/// let message = PayloadMessage::new(ContentType::Plain)
///     .registration_id("APA91bH")
///     .collapse_key("score")
///     .data("home", "2")
///     .time_to_live(3600);
///
/// assert_eq!(
///     message.export().unwrap(),
///     "registration_id=APA91bH&collapse_key=score&time_to_live=3600&data.home=2"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadMessage {
    content_type: ContentType,
    registration_ids: Vec<String>,
    collapse_key: Option<String>,
    data: BTreeMap<String, String>,
    delay_while_idle: bool,
    time_to_live: Option<u32>,
    dry_run: bool,
    restricted_package_name: Option<String>,
}

impl PayloadMessage {
    #[must_use]
    pub const fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            registration_ids: Vec::new(),
            collapse_key: None,
            data: BTreeMap::new(),
            delay_while_idle: false,
            time_to_live: None,
            dry_run: false,
            restricted_package_name: None,
        }
    }

    /// Adds one recipient.
    #[must_use]
    pub fn registration_id(mut self, id: impl Into<String>) -> Self {
        self.registration_ids.push(id.into());
        self
    }

    /// Adds several recipients.
    #[must_use]
    pub fn registration_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registration_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Groups messages so only the latest one per key is delivered.
    #[must_use]
    pub fn collapse_key(mut self, key: impl Into<String>) -> Self {
        self.collapse_key = Some(key.into());
        self
    }

    /// Adds a payload entry.
    #[must_use]
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn delay_while_idle(mut self, delay: bool) -> Self {
        self.delay_while_idle = delay;
        self
    }

    /// Seconds the message is kept while the device is offline.
    #[must_use]
    pub const fn time_to_live(mut self, seconds: u32) -> Self {
        self.time_to_live = Some(seconds);
        self
    }

    /// Validates the message on the server without delivering it.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Restricts delivery to the application with this package name.
    #[must_use]
    pub fn restricted_package_name(mut self, package: impl Into<String>) -> Self {
        self.restricted_package_name = Some(package.into());
        self
    }

    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }

    #[must_use]
    pub fn get_registration_ids(&self) -> &[String] {
        &self.registration_ids
    }

    #[must_use]
    pub const fn get_data(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    /// Checks recipient count and `time_to_live` range.
    ///
    /// # Errors
    ///
    /// Returns [`GcmError::RegistrationIds`] for a bad recipient count and
    /// [`GcmError::Format`] for an out-of-range `time_to_live`.
    pub fn validate(&self) -> Result<(), GcmError> {
        if !self.content_type.accepts(self.registration_ids.len()) {
            return Err(GcmError::RegistrationIds {
                content_type: self.content_type,
                count: self.registration_ids.len(),
            });
        }
        if let Some(ttl) = self.time_to_live {
            if ttl > MAX_TIME_TO_LIVE {
                return Err(GcmError::Format {
                    message: format!("time_to_live {ttl} exceeds {MAX_TIME_TO_LIVE} seconds"),
                });
            }
        }
        Ok(())
    }

    /// Encodes the message body in its content type.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn export(&self) -> Result<String, GcmError> {
        self.validate()?;
        match self.content_type {
            ContentType::Plain => Ok(self.export_plain()),
            ContentType::Json => self.export_json(),
        }
    }

    fn export_plain(&self) -> String {
        let mut pairs: Vec<(String, String)> = self
            .registration_ids
            .iter()
            .map(|id| ("registration_id".to_string(), id.clone()))
            .collect();
        if let Some(key) = &self.collapse_key {
            pairs.push(("collapse_key".to_string(), key.clone()));
        }
        if self.delay_while_idle {
            pairs.push(("delay_while_idle".to_string(), "1".to_string()));
        }
        if let Some(ttl) = self.time_to_live {
            pairs.push(("time_to_live".to_string(), ttl.to_string()));
        }
        if let Some(package) = &self.restricted_package_name {
            pairs.push(("restricted_package_name".to_string(), package.clone()));
        }
        if self.dry_run {
            pairs.push(("dry_run".to_string(), "1".to_string()));
        }
        pairs.extend(
            self.data
                .iter()
                .map(|(key, value)| (format!("data.{key}"), value.clone())),
        );
        encode_form(&pairs)
    }

    fn export_json(&self) -> Result<String, GcmError> {
        let payload = JsonPayload {
            registration_ids: &self.registration_ids,
            collapse_key: self.collapse_key.as_deref(),
            data: &self.data,
            delay_while_idle: self.delay_while_idle,
            time_to_live: self.time_to_live,
            restricted_package_name: self.restricted_package_name.as_deref(),
            dry_run: self.dry_run,
        };
        serde_json::to_string(&payload).map_err(|e| GcmError::Format {
            message: e.to_string(),
        })
    }
}
