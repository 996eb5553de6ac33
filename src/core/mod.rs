pub mod auth;
pub mod cart;
pub mod checkout;
pub mod product_detail;
pub mod snapshot;
pub mod storefront;

pub use crate::domain::model::{AuthState, LineItem, Order, OrderStatus, Product, ProductId, Session};
pub use crate::domain::ports::{Catalog, IdentityService, Storage};
pub use crate::utils::error::Result;
