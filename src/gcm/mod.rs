//! GCM/FCM legacy HTTP sender.
//!
//! A [`PayloadMessage`] is built for one [`ContentType`], exported as a
//! form-encoded or JSON body and posted by [`GcmClient::send`] with the
//! `Authorization: key=...` header. Status codes map onto [`GcmError`]
//! variants so callers can tell a bad message from a bad key from an outage.
//!
//! # Example
//!
//! ```rust
//! use google_client::gcm::{ContentType, PayloadMessage};
//!
//! let message = PayloadMessage::new(ContentType::Json)
//!     .registration_ids(["device-a", "device-b"])
//!     .data("message", "hello")
//!     .dry_run(true);
//!
//! assert!(message.validate().is_ok());
//! assert!(message.export().unwrap().contains("\"dry_run\":true"));
//! ```

mod client;
mod error;
mod message;
mod response;

pub use client::GcmClient;
pub use error::GcmError;
pub use message::{ContentType, PayloadMessage, MAX_REGISTRATION_IDS, MAX_TIME_TO_LIVE};
pub use response::{GcmResponse, GcmResult};
