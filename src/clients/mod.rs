//! HTTP transport for the Google API clients.
//!
//! This module provides the request/response layer every domain client is
//! built on. It performs one round trip per call and classifies the outcome;
//! the domain clients map that classification onto their own error types.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client
//! - [`HttpRequest`]: a request, built through [`HttpRequestBuilder`]
//! - [`HttpResponse`]: a 2xx response with raw body text
//! - [`HttpMethod`]: supported HTTP methods (GET, POST)
//! - [`DataType`]: content types for request bodies
//! - [`HttpError`]: transport failures and non-2xx responses
//!
//! # Example
//!
//! ```rust,ignore
//! use google_client::ClientConfig;
//! use google_client::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&ClientConfig::default());
//! let request = HttpRequest::builder(HttpMethod::Post, "https://accounts.google.com/o/oauth2/token")
//!     .form(&[("grant_type", "refresh_token"), ("refresh_token", "1/abc")])
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{encode_form, DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
