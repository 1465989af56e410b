//! One-time product purchases.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::android_publisher::client::PublisherClient;
use crate::android_publisher::error::PublisherError;
use crate::clients::HttpMethod;
use crate::config::{ClientConfig, PackageName};
use crate::response::de;
use crate::response::display::{format_millis, FieldLines};

/// `purchaseState` of a product purchase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PurchaseState {
    /// `0`
    Purchased,
    /// `1`
    Cancelled,
    /// Absent or unrecognized; `-1`.
    #[default]
    Unknown,
}

impl PurchaseState {
    /// The numeric wire value.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Purchased => 0,
            Self::Cancelled => 1,
            Self::Unknown => -1,
        }
    }
}

impl From<Option<i64>> for PurchaseState {
    fn from(code: Option<i64>) -> Self {
        match code {
            Some(0) => Self::Purchased,
            Some(1) => Self::Cancelled,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for PurchaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Purchased => "purchased",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        })
    }
}

/// `consumptionState` of a product purchase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsumptionState {
    /// `0`, also assumed when absent.
    #[default]
    YetToBeConsumed,
    /// `1`
    Consumed,
    /// Any other value.
    Unknown,
}

impl From<Option<i64>> for ConsumptionState {
    fn from(code: Option<i64>) -> Self {
        match code {
            None | Some(0) => Self::YetToBeConsumed,
            Some(1) => Self::Consumed,
            Some(_) => Self::Unknown,
        }
    }
}

impl fmt::Display for ConsumptionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::YetToBeConsumed => "yet to be consumed",
            Self::Consumed => "consumed",
            Self::Unknown => "unknown",
        })
    }
}

fn purchase_state<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PurchaseState, D::Error> {
    de::opt_int64(deserializer).map(PurchaseState::from)
}

fn consumption_state<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<ConsumptionState, D::Error> {
    de::opt_int64(deserializer).map(ConsumptionState::from)
}

/// An in-app product purchase (`androidpublisher#productPurchase`).
///
/// # Example
///
/// ```rust
/// use google_client::android_publisher::ProductPurchase;
/// use google_client::response::ApiResponse;
///
/// let body = r#"{
///     "kind": "androidpublisher#productPurchase",
///     "purchaseTimeMillis": "1434571586008",
///     "purchaseState": 0,
///     "consumptionState": 1,
///     "developerPayload": "{\"codeVersion\":30700,\"hash\":862428815}"
/// }"#;
/// let purchase = ApiResponse::<ProductPurchase>::from_body(body)
///     .unwrap()
///     .resource()
///     .unwrap();
///
/// assert!(purchase.is_purchased());
/// assert!(purchase.is_consumed());
/// assert_eq!(purchase.purchase_time_millis(), 1_434_571_586_008);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPurchase {
    #[serde(default, deserialize_with = "de::string")]
    kind: String,
    #[serde(default, deserialize_with = "de::int64")]
    purchase_time_millis: i64,
    #[serde(default, deserialize_with = "purchase_state")]
    purchase_state: PurchaseState,
    #[serde(default, deserialize_with = "consumption_state")]
    consumption_state: ConsumptionState,
    #[serde(default, deserialize_with = "de::string")]
    developer_payload: String,
    #[serde(default, deserialize_with = "de::string")]
    order_id: String,
    #[serde(default, deserialize_with = "de::int64")]
    acknowledgement_state: i64,
    #[serde(default, deserialize_with = "de::opt_int64")]
    purchase_type: Option<i64>,
}

impl ProductPurchase {
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Purchase time in milliseconds since the epoch.
    #[must_use]
    pub const fn purchase_time_millis(&self) -> i64 {
        self.purchase_time_millis
    }

    #[must_use]
    pub const fn purchase_state(&self) -> PurchaseState {
        self.purchase_state
    }

    #[must_use]
    pub const fn consumption_state(&self) -> ConsumptionState {
        self.consumption_state
    }

    #[must_use]
    pub fn developer_payload(&self) -> &str {
        &self.developer_payload
    }

    /// Google Wallet order id; empty for test purchases.
    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    #[must_use]
    pub const fn acknowledgement_state(&self) -> i64 {
        self.acknowledgement_state
    }

    /// `0` for test purchases, `1` for promo codes; absent for real purchases.
    #[must_use]
    pub const fn purchase_type(&self) -> Option<i64> {
        self.purchase_type
    }

    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumption_state == ConsumptionState::Consumed
    }

    #[must_use]
    pub fn is_purchased(&self) -> bool {
        self.purchase_state == PurchaseState::Purchased
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.purchase_state == PurchaseState::Cancelled
    }

    #[must_use]
    pub const fn is_acknowledged(&self) -> bool {
        self.acknowledgement_state == 1
    }

    /// Renders the purchase with timestamps in `tz`.
    #[must_use]
    pub fn render_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        FieldLines::new(20)
            .field("consumptionState:", self.consumption_state)
            .field("developerPayload:", &self.developer_payload)
            .field("kind:", &self.kind)
            .field("purchaseState:", self.purchase_state)
            .field("purchaseTimeMillis:", format_millis(self.purchase_time_millis, tz))
            .finish()
    }
}

impl fmt::Display for ProductPurchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_in(&Local))
    }
}

/// Verifies one-time product purchases of an application.
///
/// ```rust,ignore
/// use google_client::android_publisher::ProductsClient;
/// use google_client::PackageName;
///
/// let client = ProductsClient::new(PackageName::new("com.example.package")?, access_token);
/// let purchase = client.get("com.example.package.coins", "puRCH45e_tokEN").await?;
/// if purchase.is_purchased() && !purchase.is_consumed() {
///     // grant the coins
/// }
/// ```
#[derive(Debug)]
pub struct ProductsClient {
    inner: PublisherClient,
}

impl ProductsClient {
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

    /// Fetches the purchase of `product_id` identified by `token`.
    ///
    /// # Errors
    ///
    /// Returns [`PublisherError::MissingAccessToken`] before sending when no
    /// access token is set; otherwise see [`PublisherError`].
    pub async fn get(&self, product_id: &str, token: &str) -> Result<ProductPurchase, PublisherError> {
        let url = self
            .inner
            .url(&["purchases", "products", product_id, "tokens", token]);
        let request = self.inner.request(HttpMethod::Get, url)?;
        self.inner.fetch(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{ApiResponse, ParseError};
    use chrono::FixedOffset;

    const PURCHASE_BODY: &str = r#"{
        "kind": "androidpublisher#productPurchase",
        "purchaseTimeMillis": "1434571586008",
        "purchaseState": 0,
        "consumptionState": 1,
        "developerPayload": "{\"codeVersion\":30700,\"hash\":862428815}"
    }"#;

    fn parse(body: &str) -> ProductPurchase {
        ApiResponse::<ProductPurchase>::from_body(body)
            .unwrap()
            .resource()
            .unwrap()
    }

    fn utc_plus_3() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    #[test]
    fn test_default_purchase() {
        let purchase = ProductPurchase::default();

        assert_eq!(purchase.consumption_state(), ConsumptionState::YetToBeConsumed);
        assert_eq!(purchase.purchase_state().code(), -1);
        assert_eq!(purchase.developer_payload(), "");
        assert!(!purchase.is_cancelled());
        assert!(!purchase.is_consumed());
        assert!(!purchase.is_purchased());
    }

    #[test]
    fn test_empty_object_matches_default() {
        assert_eq!(parse("{}"), ProductPurchase::default());
    }

    #[test]
    fn test_renders_reference_purchase() {
        let expected = [
            "    consumptionState:   consumed",
            "    developerPayload:   {\"codeVersion\":30700,\"hash\":862428815}",
            "    kind:               androidpublisher#productPurchase",
            "    purchaseState:      purchased",
            "    purchaseTimeMillis: 2015-06-17 23:06:26",
        ]
        .join("\n");
        assert_eq!(parse(PURCHASE_BODY).render_in(&utc_plus_3()), expected);
    }

    #[test]
    fn test_cancelled_and_unknown_states() {
        let cancelled = parse(r#"{"purchaseState":1,"consumptionState":0}"#);
        assert!(cancelled.is_cancelled());
        assert!(!cancelled.is_purchased());
        assert!(cancelled.render_in(&utc_plus_3()).contains("yet to be consumed"));

        let odd = parse(r#"{"purchaseState":7,"consumptionState":9}"#);
        assert_eq!(odd.purchase_state(), PurchaseState::Unknown);
        assert_eq!(odd.consumption_state(), ConsumptionState::Unknown);
    }

    #[test]
    fn test_supplementary_fields() {
        let purchase = parse(
            r#"{"orderId":"GPA.1234-5678","acknowledgementState":1,"purchaseType":0}"#,
        );
        assert_eq!(purchase.order_id(), "GPA.1234-5678");
        assert!(purchase.is_acknowledged());
        assert_eq!(purchase.purchase_type(), Some(0));
    }

    #[test]
    fn test_stringified_states_are_accepted() {
        let purchase = parse(r#"{"purchaseState":"0","consumptionState":"1"}"#);
        assert_eq!(purchase.purchase_state(), PurchaseState::Purchased);
        assert_eq!(purchase.consumption_state(), ConsumptionState::Consumed);

        let blank = parse(r#"{"purchaseState":"","consumptionState":null}"#);
        assert_eq!(blank.purchase_state(), PurchaseState::Unknown);
        assert_eq!(blank.consumption_state(), ConsumptionState::YetToBeConsumed);
    }

    #[test]
    fn test_garbage_state_is_rejected() {
        let result = ApiResponse::<ProductPurchase>::from_body(r#"{"purchaseState":"paid"}"#);
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_numeric_timestamp_is_accepted() {
        let purchase = parse(r#"{"purchaseTimeMillis":1434571586008}"#);
        assert_eq!(purchase.purchase_time_millis(), 1_434_571_586_008);
    }

    #[tokio::test]
    async fn test_get_without_access_token_fails_locally() {
        let client = ProductsClient::new(PackageName::new("com.example.package").unwrap(), "");
        let result = client.get("sku", "token").await;
        assert!(matches!(result, Err(PublisherError::MissingAccessToken)));
    }
}
