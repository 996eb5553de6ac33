pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{BackendClient, LocalStorage, MemoryCatalog, RestCatalog, RestIdentity};
pub use crate::config::toml_config::StorefrontConfig;
pub use crate::core::{
    auth::{AuthStore, Credentials, Route},
    cart::CartStore,
    checkout::CheckoutSummary,
    product_detail::{ProductDetail, QuantityChange},
    snapshot::CartSnapshot,
    storefront::{ActionOutcome, ShopperAction, Storefront},
};
pub use crate::domain::model::{
    AuthState, Category, LineItem, Order, OrderStatus, Product, ProductId, Session, UserProfile,
};
pub use crate::utils::error::{Result, StorefrontError};
