//! Android Publisher API: purchase verification and subscription management.
//!
//! Every client is bound to one application [package](crate::PackageName)
//! and an OAuth2 access token carrying the
//! `https://www.googleapis.com/auth/androidpublisher` scope. Calls fail with
//! [`PublisherError::MissingAccessToken`] before touching the network when
//! the token is empty.
//!
//! - [`ProductsClient`]: one-time purchases ([`ProductPurchase`])
//! - [`SubscriptionsClient`]: subscription purchases ([`SubscriptionPurchase`])
//!   plus `cancel`, `defer`, `refund` and `revoke_subscription`
//! - [`InAppProductsClient`]: catalogue entries ([`InAppProduct`])
//!
//! # Example
//!
//! ```rust,ignore
//! use google_client::android_publisher::{PublisherError, SubscriptionsClient};
//! use google_client::PackageName;
//!
//! let client = SubscriptionsClient::new(PackageName::new("com.example.package")?, access_token);
//! match client.get("com.example.package.product.1", purchase_token).await {
//!     Ok(subscription) => println!("{subscription}"),
//!     Err(PublisherError::InvalidCredentials(_)) => { /* refresh the token */ }
//!     Err(other) => eprintln!("{other}"),
//! }
//! ```

mod client;
mod error;
mod inapp_products;
mod products;
mod subscriptions;

pub use error::PublisherError;
pub use inapp_products::{InAppProduct, InAppProductsClient, Listing, Price};
pub use products::{ConsumptionState, ProductPurchase, ProductsClient, PurchaseState};
pub use subscriptions::{SubscriptionPurchase, SubscriptionsClient};
