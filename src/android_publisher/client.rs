//! Request plumbing shared by the Android Publisher clients.

use serde::de::DeserializeOwned;

use crate::android_publisher::error::PublisherError;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::config::{ClientConfig, PackageName};
use crate::response::{ApiError, ApiResponse};

/// Package, access token and transport for one application.
#[derive(Debug)]
pub(crate) struct PublisherClient {
    http: HttpClient,
    base_url: String,
    package: PackageName,
    access_token: String,
}

impl PublisherClient {
    pub(crate) fn new(package: PackageName, access_token: String, config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            base_url: config.endpoints().android_publisher().to_string(),
            package,
            access_token,
        }
    }

    pub(crate) const fn package(&self) -> &PackageName {
        &self.package
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.access_token
    }

    pub(crate) fn set_access_token(&mut self, access_token: String) {
        self.access_token = access_token;
    }

    /// `{base}/applications/{package}/{segments...}`, each segment percent-encoded.
    pub(crate) fn url(&self, segments: &[&str]) -> String {
        let mut url = format!(
            "{}/applications/{}",
            self.base_url,
            urlencoding::encode(self.package.as_ref())
        );
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// Starts a request carrying the access token, or fails before any
    /// network call when no token is set.
    pub(crate) fn request(
        &self,
        method: HttpMethod,
        url: String,
    ) -> Result<HttpRequestBuilder, PublisherError> {
        if self.access_token.is_empty() {
            return Err(PublisherError::MissingAccessToken);
        }
        Ok(HttpRequest::builder(method, url).query_param("access_token", &self.access_token))
    }

    /// Sends the request and returns the raw 2xx body.
    pub(crate) async fn send(&self, builder: HttpRequestBuilder) -> Result<String, PublisherError> {
        let request = builder.build().map_err(HttpError::from)?;
        self.http
            .request(request)
            .await
            .map(|response| response.body)
            .map_err(classify)
    }

    /// Sends the request and decodes the body as `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        builder: HttpRequestBuilder,
    ) -> Result<T, PublisherError> {
        let body = self.send(builder).await?;
        resource_from_body(&body)
    }

    /// Sends a command whose success body is empty.
    pub(crate) async fn execute(&self, builder: HttpRequestBuilder) -> Result<(), PublisherError> {
        let body = self.send(builder).await?;
        if body.trim().is_empty() {
            return Ok(());
        }
        match ApiResponse::<serde_json::Value>::from_body(&body)? {
            ApiResponse::Resource(_) => Ok(()),
            ApiResponse::Error(error) => Err(PublisherError::Api(error)),
        }
    }
}

pub(crate) fn resource_from_body<T: DeserializeOwned>(body: &str) -> Result<T, PublisherError> {
    match ApiResponse::<T>::from_body(body)? {
        ApiResponse::Resource(resource) => Ok(resource),
        ApiResponse::Error(error) => Err(PublisherError::Api(error)),
    }
}

/// Maps a transport failure onto the publisher error taxonomy.
pub(crate) fn classify(error: HttpError) -> PublisherError {
    match error {
        HttpError::Client(response) if response.code == 401 => {
            tracing::warn!(code = response.code, "Android Publisher rejected the credentials");
            PublisherError::InvalidCredentials(ApiError::from_body_lossy(&response.body))
        }
        HttpError::Client(response) | HttpError::Server(response) => {
            tracing::warn!(code = response.code, "Android Publisher returned an error");
            PublisherError::Api(ApiError::from_body_lossy(&response.body))
        }
        other => PublisherError::Http(other),
    }
}
