//! Subscription purchases and their lifecycle commands.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Deserialize;
use serde_json::json;
use std::fmt;

use crate::android_publisher::client::PublisherClient;
use crate::android_publisher::error::PublisherError;
use crate::clients::HttpMethod;
use crate::config::{ClientConfig, PackageName};
use crate::response::de;
use crate::response::display::{format_millis, FieldLines};

/// A subscription purchase (`androidpublisher#subscriptionPurchase`).
///
/// # Example
///
/// ```rust
/// use google_client::android_publisher::SubscriptionPurchase;
/// use google_client::response::ApiResponse;
///
/// let body = r#"{"kind":"androidpublisher#subscriptionPurchase","expiryTimeMillis":"100000"}"#;
/// let subscription = ApiResponse::<SubscriptionPurchase>::from_body(body)
///     .unwrap()
///     .resource()
///     .unwrap();
///
/// assert_eq!(subscription.expiry_time(), 100);
/// assert!(subscription.is_expired());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPurchase {
    #[serde(default, deserialize_with = "de::string")]
    kind: String,
    #[serde(default, deserialize_with = "de::int64")]
    start_time_millis: i64,
    #[serde(default, deserialize_with = "de::int64")]
    expiry_time_millis: i64,
    #[serde(default)]
    auto_renewing: bool,
    #[serde(default, deserialize_with = "de::string")]
    order_id: String,
    #[serde(default, deserialize_with = "de::string")]
    price_currency_code: String,
    #[serde(default, deserialize_with = "de::int64")]
    price_amount_micros: i64,
    #[serde(default, deserialize_with = "de::string")]
    country_code: String,
    #[serde(default, deserialize_with = "de::opt_int64")]
    payment_state: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_int64")]
    cancel_reason: Option<i64>,
    #[serde(default, deserialize_with = "de::string")]
    developer_payload: String,
}

impl SubscriptionPurchase {
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub const fn start_time_millis(&self) -> i64 {
        self.start_time_millis
    }

    #[must_use]
    pub const fn expiry_time_millis(&self) -> i64 {
        self.expiry_time_millis
    }

    /// Expiry time in whole seconds since the epoch.
    #[must_use]
    pub const fn expiry_time(&self) -> i64 {
        self.expiry_time_millis.div_euclid(1000)
    }

    #[must_use]
    pub const fn is_auto_renewing(&self) -> bool {
        self.auto_renewing
    }

    /// Whether the subscription has expired, judged by the system clock.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Whether the subscription had expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.expiry_time()
    }

    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// ISO 4217 currency of [`price_amount_micros`](Self::price_amount_micros).
    #[must_use]
    pub fn price_currency_code(&self) -> &str {
        &self.price_currency_code
    }

    /// Price in millionths of the currency unit.
    #[must_use]
    pub const fn price_amount_micros(&self) -> i64 {
        self.price_amount_micros
    }

    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// `0` pending, `1` received, `2` free trial; absent once expired.
    #[must_use]
    pub const fn payment_state(&self) -> Option<i64> {
        self.payment_state
    }

    /// `0` by user, `1` by system, `2` replaced, `3` by developer.
    #[must_use]
    pub const fn cancel_reason(&self) -> Option<i64> {
        self.cancel_reason
    }

    #[must_use]
    pub fn developer_payload(&self) -> &str {
        &self.developer_payload
    }

    /// Renders the subscription with timestamps in `tz`.
    #[must_use]
    pub fn render_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        FieldLines::new(15)
            .field("started at:", format_millis(self.start_time_millis, tz))
            .field("expired at:", format_millis(self.expiry_time_millis, tz))
            .field("kind:", &self.kind)
            .field(
                "auto-renewing:",
                if self.auto_renewing { "enabled" } else { "disabled" },
            )
            .finish()
    }
}

impl fmt::Display for SubscriptionPurchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_in(&Local))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeferResponse {
    #[serde(default, deserialize_with = "de::int64")]
    new_expiry_time_millis: i64,
}

/// Verifies and manages subscription purchases of an application.
///
/// `cancel`, `defer`, `refund` and `revoke_subscription` are POSTs to
/// `.../tokens/{token}:{command}`.
///
/// ```rust,ignore
/// use google_client::android_publisher::SubscriptionsClient;
/// use google_client::PackageName;
///
/// let client = SubscriptionsClient::new(PackageName::new("com.example.package")?, "4CcE5s_T0keN");
/// let subscription = client.get("com.example.package.product.1", "puRCH45e_tokEN").await?;
/// println!("{}", subscription.is_auto_renewing() && !subscription.is_expired());
/// ```
#[derive(Debug)]
pub struct SubscriptionsClient {
    inner: PublisherClient,
}

impl SubscriptionsClient {
    /// Creates a client talking to the production endpoint.
    #[must_use]
    pub fn new(package: PackageName, access_token: impl Into<String>) -> Self {
        Self::with_config(package, access_token, &ClientConfig::default())
    }

    #[must_use]
    pub fn with_config(
        package: PackageName,
        access_token: impl Into<String>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            inner: PublisherClient::new(package, access_token.into(), config),
        }
    }

    #[must_use]
    pub const fn package(&self) -> &PackageName {
        self.inner.package()
    }

    #[must_use]
    pub fn access_token(&self) -> &str {
        self.inner.access_token()
    }

    /// Replaces the access token, e.g. after an OAuth2 refresh.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.inner.set_access_token(access_token.into());
    }

    /// Fetches the subscription identified by `token`.
    ///
    /// # Errors
    ///
    /// See [`PublisherError`].
    pub async fn get(
        &self,
        subscription_id: &str,
        token: &str,
    ) -> Result<SubscriptionPurchase, PublisherError> {
        let url = self.token_url(subscription_id, token);
        let request = self.inner.request(HttpMethod::Get, url)?;
        self.inner.fetch(request).await
    }

    /// Cancels the subscription; it stays valid until its expiry time.
    ///
    /// # Errors
    ///
    /// See [`PublisherError`].
    pub async fn cancel(&self, subscription_id: &str, token: &str) -> Result<(), PublisherError> {
        self.command(subscription_id, token, "cancel").await
    }

    /// Moves the expiry time from `expected_millis` to `desired_millis` and
    /// returns the new expiry time in milliseconds.
    ///
    /// # Errors
    ///
    /// See [`PublisherError`].
    pub async fn defer(
        &self,
        subscription_id: &str,
        expected_millis: i64,
        desired_millis: i64,
        token: &str,
    ) -> Result<i64, PublisherError> {
        let url = format!("{}:defer", self.token_url(subscription_id, token));
        let body = json!({
            "deferralInfo": {
                "expectedExpiryTimeMillis": expected_millis.to_string(),
                "desiredExpiryTimeMillis": desired_millis.to_string(),
            }
        });
        let request = self.inner.request(HttpMethod::Post, url)?.json(&body);
        let response: DeferResponse = self.inner.fetch(request).await?;
        Ok(response.new_expiry_time_millis)
    }

    /// Refunds the current payment; the subscription keeps renewing.
    ///
    /// # Errors
    ///
    /// See [`PublisherError`].
    pub async fn refund(&self, subscription_id: &str, token: &str) -> Result<(), PublisherError> {
        self.command(subscription_id, token, "refund").await
    }

    /// Refunds and immediately terminates the subscription.
    ///
    /// # Errors
    ///
    /// See [`PublisherError`].
    pub async fn revoke_subscription(
        &self,
        subscription_id: &str,
        token: &str,
    ) -> Result<(), PublisherError> {
        self.command(subscription_id, token, "revoke").await
    }

    fn token_url(&self, subscription_id: &str, token: &str) -> String {
        self.inner
            .url(&["purchases", "subscriptions", subscription_id, "tokens", token])
    }

    async fn command(
        &self,
        subscription_id: &str,
        token: &str,
        command: &str,
    ) -> Result<(), PublisherError> {
        let url = format!("{}:{command}", self.token_url(subscription_id, token));
        let request = self.inner.request(HttpMethod::Post, url)?;
        self.inner.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ApiResponse;
    use chrono::FixedOffset;

    fn parse(body: &str) -> SubscriptionPurchase {
        ApiResponse::<SubscriptionPurchase>::from_body(body)
            .unwrap()
            .resource()
            .unwrap()
    }

    fn utc_plus_3() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    #[test]
    fn test_default_subscription_is_expired() {
        let subscription = SubscriptionPurchase::default();
        assert_eq!(subscription.expiry_time(), 0);
        assert!(subscription.is_expired());
        assert!(!subscription.is_auto_renewing());
    }

    #[test]
    fn test_short_expiry_is_expired() {
        let subscription = parse(
            r#"{"kind":"androidpublisher#subscriptionPurchase","startTimeMillis":"1434573608845","expiryTimeMillis":"100000","autoRenewing":false}"#,
        );
        assert_eq!(subscription.expiry_time(), 100);
        assert!(subscription.is_expired());

        let expected = [
            "    started at:    2015-06-17 23:40:08",
            "    expired at:    1970-01-01 03:01:40",
            "    kind:          androidpublisher#subscriptionPurchase",
            "    auto-renewing: disabled",
        ]
        .join("\n");
        assert_eq!(subscription.render_in(&utc_plus_3()), expected);
    }

    #[test]
    fn test_far_expiry_beyond_32_bits() {
        let subscription = parse(
            r#"{"startTimeMillis":"1434573608845","expiryTimeMillis":"4434573608845","autoRenewing":true}"#,
        );
        assert_eq!(subscription.expiry_time_millis(), 4_434_573_608_845);
        assert_eq!(subscription.expiry_time(), 4_434_573_608);

        let before = Utc.with_ymd_and_hms(2110, 7, 12, 2, 0, 8).unwrap();
        let after = Utc.with_ymd_and_hms(2110, 7, 12, 2, 0, 9).unwrap();
        assert!(!subscription.is_expired_at(before));
        assert!(subscription.is_expired_at(after));
        assert!(!subscription.is_expired());

        let rendered = subscription.render_in(&utc_plus_3());
        assert!(rendered.contains("    expired at:    2110-07-12 05:00:08"));
        assert!(rendered.ends_with("    auto-renewing: enabled"));
    }

    #[test]
    fn test_supplementary_fields() {
        let subscription = parse(
            r#"{"orderId":"GPA.1","priceCurrencyCode":"EUR","priceAmountMicros":"990000","countryCode":"DE","paymentState":1,"cancelReason":0,"developerPayload":"p"}"#,
        );
        assert_eq!(subscription.order_id(), "GPA.1");
        assert_eq!(subscription.price_currency_code(), "EUR");
        assert_eq!(subscription.price_amount_micros(), 990_000);
        assert_eq!(subscription.country_code(), "DE");
        assert_eq!(subscription.payment_state(), Some(1));
        assert_eq!(subscription.cancel_reason(), Some(0));
        assert_eq!(subscription.developer_payload(), "p");
    }

    #[test]
    fn test_garbage_timestamp_fails_to_parse() {
        assert!(ApiResponse::<SubscriptionPurchase>::from_body(r#"{"expiryTimeMillis":"soon"}"#).is_err());
    }

    #[test]
    fn test_command_urls() {
        let client = SubscriptionsClient::new(PackageName::new("com.example.package").unwrap(), "t");
        assert_eq!(
            client.token_url("sub.1", "tok"),
            "https://www.googleapis.com/androidpublisher/v3/applications/com.example.package\
             /purchases/subscriptions/sub.1/tokens/tok"
        );
    }

    #[tokio::test]
    async fn test_commands_without_access_token_fail_locally() {
        let client = SubscriptionsClient::new(PackageName::new("com.example.package").unwrap(), "");
        assert!(matches!(
            client.cancel("sub", "tok").await,
            Err(PublisherError::MissingAccessToken)
        ));
        assert!(matches!(
            client.defer("sub", 1, 2, "tok").await,
            Err(PublisherError::MissingAccessToken)
        ));
    }
}
