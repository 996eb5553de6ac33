use crate::domain::model::{Category, Order, Product, ProductId};
use crate::domain::ports::Catalog;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Catalog backed by records loaded up front, e.g. from the TOML config.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    orders: Vec<Order>,
}

impl MemoryCatalog {
    pub fn new(products: Vec<Product>, orders: Vec<Order>) -> Self {
        Self {
            products,
            categories: Vec::new(),
            orders,
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn product_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        Ok(self.products.iter().find(|p| p.slug == slug).cloned())
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn order_by_slug(&self, slug: &str) -> Result<Option<Order>> {
        Ok(self.orders.iter().find(|o| o.slug == slug).cloned())
    }
}
