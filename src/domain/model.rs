use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One product and its selected quantity inside a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        image: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: ProductId(id),
            title: title.into(),
            image: image.into(),
            price,
            quantity,
        }
    }

    /// A line item for `product` with the given quantity.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            image: product.hero_image.clone(),
            price: product.price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Read-only product record served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub slug: String,
    pub price: f64,
    #[serde(alias = "heroImage")]
    pub hero_image: String,
    #[serde(alias = "maxQuantity")]
    pub max_quantity: u32,
}

/// Catalog category shown in the shop header; links to `/categories/<slug>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(alias = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
    Shipped,
    InTransit,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::InTransit => "In Transit",
        };
        f.write_str(label)
    }
}

/// Read-only order record served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub slug: String,
    pub item: String,
    pub details: String,
    pub status: OrderStatus,
    pub date: NaiveDate,
    #[serde(default)]
    pub items: Vec<Product>,
}

impl Order {
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|p| p.price).sum()
    }
}

/// Handle to an authenticated session issued by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Profile row of the signed-in user, keyed by the session's user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "avatarUrl")]
    pub avatar_url: Option<String>,
}

/// Authentication signal consumed by routing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Loading,
    Authenticated(Session),
    Unauthenticated,
}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}
