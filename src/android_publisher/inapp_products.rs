//! In-app product catalogue lookups.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::android_publisher::client::PublisherClient;
use crate::android_publisher::error::PublisherError;
use crate::clients::HttpMethod;
use crate::config::{ClientConfig, PackageName};
use crate::response::de;
use crate::response::display::FieldLines;

/// A price in micro-units of a currency.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(default, deserialize_with = "de::int64")]
    price_micros: i64,
    #[serde(default, deserialize_with = "de::string")]
    currency: String,
}

impl Price {
    #[must_use]
    pub const fn price_micros(&self) -> i64 {
        self.price_micros
    }

    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// Localized title and description of a product.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "de::string")]
    title: String,
    #[serde(default, deserialize_with = "de::string")]
    description: String,
}

impl Listing {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A catalogue entry (`inappproducts` resource).
///
/// ```rust
/// use google_client::android_publisher::InAppProduct;
/// use google_client::response::ApiResponse;
///
/// let body = r#"{
///     "packageName": "com.example.package",
///     "sku": "coins_100",
///     "status": "active",
///     "purchaseType": "managedUser",
///     "defaultPrice": {"priceMicros": "990000", "currency": "USD"},
///     "listings": {"en-US": {"title": "100 coins", "description": "A pile of coins"}},
///     "defaultLanguage": "en-US"
/// }"#;
/// let product = ApiResponse::<InAppProduct>::from_body(body).unwrap().resource().unwrap();
///
/// assert_eq!(product.sku(), "coins_100");
/// assert_eq!(product.default_price().price_micros(), 990_000);
/// assert_eq!(product.listing("en-US").map(|l| l.title()), Some("100 coins"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InAppProduct {
    #[serde(default, deserialize_with = "de::string")]
    package_name: String,
    #[serde(default, deserialize_with = "de::string")]
    sku: String,
    #[serde(default, deserialize_with = "de::string")]
    status: String,
    #[serde(default, deserialize_with = "de::string")]
    purchase_type: String,
    #[serde(default)]
    default_price: Price,
    #[serde(default)]
    listings: BTreeMap<String, Listing>,
    #[serde(default, deserialize_with = "de::string")]
    default_language: String,
    #[serde(default, deserialize_with = "de::string")]
    subscription_period: String,
    #[serde(default, deserialize_with = "de::string")]
    trial_period: String,
}

impl InAppProduct {
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    #[must_use]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// `active` or `inactive`.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// `managedUser` or `subscription`.
    #[must_use]
    pub fn purchase_type(&self) -> &str {
        &self.purchase_type
    }

    #[must_use]
    pub const fn default_price(&self) -> &Price {
        &self.default_price
    }

    /// Listings keyed by BCP-47 language tag.
    #[must_use]
    pub const fn listings(&self) -> &BTreeMap<String, Listing> {
        &self.listings
    }

    #[must_use]
    pub fn listing(&self, language: &str) -> Option<&Listing> {
        self.listings.get(language)
    }

    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// ISO 8601 period, subscriptions only.
    #[must_use]
    pub fn subscription_period(&self) -> &str {
        &self.subscription_period
    }

    #[must_use]
    pub fn trial_period(&self) -> &str {
        &self.trial_period
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

impl fmt::Display for InAppProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = FieldLines::new(16)
            .field("sku:", &self.sku)
            .field("package name:", &self.package_name)
            .field("status:", &self.status)
            .field("purchase type:", &self.purchase_type)
            .field(
                "default price:",
                format_args!(
                    "{} {}",
                    self.default_price.price_micros, self.default_price.currency
                ),
            )
            .field("language:", &self.default_language)
            .finish();
        f.write_str(&text)
    }
}

/// Reads the in-app product catalogue of an application.
#[derive(Debug)]
pub struct InAppProductsClient {
    inner: PublisherClient,
}

impl InAppProductsClient {
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

    /// Replaces the access token, e.g. after an OAuth2 refresh.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.inner.set_access_token(access_token.into());
    }

    /// Fetches the catalogue entry for `sku`.
    ///
    /// # Errors
    ///
    /// See [`PublisherError`].
    pub async fn get(&self, sku: &str) -> Result<InAppProduct, PublisherError> {
        let url = self.inner.url(&["inappproducts", sku]);
        let request = self.inner.request(HttpMethod::Get, url)?;
        self.inner.fetch(request).await
    }
}
