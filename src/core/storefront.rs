use crate::core::cart::CartStore;
use crate::core::checkout::CheckoutSummary;
use crate::core::product_detail::{ProductDetail, QuantityChange};
use crate::domain::model::{Category, Order, Product};
use crate::domain::ports::Catalog;
use crate::utils::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};

/// One step of a scripted shopping session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ShopperAction {
    Add {
        slug: String,
        #[serde(default)]
        quantity: Option<u32>,
    },
    Increase {
        slug: String,
    },
    Decrease {
        slug: String,
    },
    Remove {
        slug: String,
    },
    Checkout,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Applied,
    LimitReached,
    /// Increase, decrease or remove on a product that is not in the cart.
    NotInCart,
    CheckedOut(CheckoutSummary),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionReport {
    pub applied: usize,
    pub limits_reached: usize,
    pub not_in_cart: usize,
    pub checkouts: Vec<CheckoutSummary>,
}

pub struct Storefront<C: Catalog> {
    catalog: C,
}

impl<C: Catalog> Storefront<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub async fn product(&self, slug: &str) -> Result<Product> {
        self.catalog
            .product_by_slug(slug)
            .await?
            .ok_or_else(|| StorefrontError::not_found("Product", slug))
    }

    pub async fn category(&self, slug: &str) -> Result<Category> {
        self.catalog
            .category_by_slug(slug)
            .await?
            .ok_or_else(|| StorefrontError::not_found("Category", slug))
    }

    pub async fn order(&self, slug: &str) -> Result<Order> {
        self.catalog
            .order_by_slug(slug)
            .await?
            .ok_or_else(|| StorefrontError::not_found("Order", slug))
    }

    pub async fn apply(&self, cart: &mut CartStore, action: &ShopperAction) -> Result<ActionOutcome> {
        tracing::debug!("Applying {:?}", action);

        let outcome = match action {
            ShopperAction::Add { slug, quantity } => {
                let product = self.product(slug).await?;
                let mut detail = ProductDetail::open(product, cart);
                let mut outcome = ActionOutcome::Applied;
                while detail.quantity() < quantity.unwrap_or(1) {
                    if detail.increase(cart) == QuantityChange::LimitReached {
                        outcome = ActionOutcome::LimitReached;
                        break;
                    }
                }
                detail.add_to_cart(cart);
                outcome
            }
            ShopperAction::Increase { slug } => {
                let product = self.product(slug).await?;
                if !cart.contains(product.id) {
                    ActionOutcome::NotInCart
                } else {
                    match ProductDetail::open(product, cart).increase(cart) {
                        QuantityChange::LimitReached => ActionOutcome::LimitReached,
                        _ => ActionOutcome::Applied,
                    }
                }
            }
            ShopperAction::Decrease { slug } => {
                let product = self.product(slug).await?;
                if !cart.contains(product.id) {
                    ActionOutcome::NotInCart
                } else {
                    ProductDetail::open(product, cart).decrease(cart);
                    ActionOutcome::Applied
                }
            }
            ShopperAction::Remove { slug } => {
                let product = self.product(slug).await?;
                if !cart.contains(product.id) {
                    ActionOutcome::NotInCart
                } else {
                    cart.remove_item(product.id);
                    ActionOutcome::Applied
                }
            }
            ShopperAction::Checkout => ActionOutcome::CheckedOut(CheckoutSummary::from_cart(cart)),
        };

        Ok(outcome)
    }

    pub async fn run(&self, cart: &mut CartStore, actions: &[ShopperAction]) -> Result<SessionReport> {
        tracing::info!("🛍️ Running shopping session with {} actions", actions.len());

        let mut report = SessionReport::default();
        for action in actions {
            match self.apply(cart, action).await? {
                ActionOutcome::Applied => report.applied += 1,
                ActionOutcome::LimitReached => {
                    report.applied += 1;
                    report.limits_reached += 1;
                }
                ActionOutcome::NotInCart => {
                    tracing::debug!("{:?} skipped, product not in cart", action);
                    report.not_in_cart += 1;
                }
                ActionOutcome::CheckedOut(summary) => {
                    report.applied += 1;
                    report.checkouts.push(summary);
                }
            }
        }

        tracing::info!(
            "Session finished: {} items in cart, total Rs {:.2}",
            cart.len(),
            cart.total_price()
        );
        Ok(report)
    }
}
