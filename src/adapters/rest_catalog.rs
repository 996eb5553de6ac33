use crate::adapters::http::BackendClient;
use crate::domain::model::{Category, Order, Product, ProductId};
use crate::domain::ports::Catalog;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Catalog served by the backend's REST interface (`/rest/v1/<table>`).
/// A lookup that matches no rows is "not found"; any non-success status,
/// including a 404 for a missing table, is a backend error.
#[derive(Debug, Clone)]
pub struct RestCatalog {
    backend: BackendClient,
}

impl RestCatalog {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    async fn select<T: DeserializeOwned>(&self, table: &str, filter: Option<(&str, String)>) -> Result<Vec<T>> {
        let mut query = vec![("select".to_string(), "*".to_string())];
        match filter {
            Some((column, value)) => query.push((column.to_string(), format!("eq.{}", value))),
            None => query.push(("order".to_string(), "id.asc".to_string())),
        }

        let response = self
            .backend
            .get(&format!("rest/v1/{}", table))
            .query(&query)
            .send()
            .await?;

        tracing::debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            return Err(BackendClient::error_from(response).await);
        }

        Ok(response.json().await?)
    }

    async fn first<T: DeserializeOwned>(&self, table: &str, column: &str, value: String) -> Result<Option<T>> {
        let rows: Vec<T> = self.select(table, Some((column, value))).await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl Catalog for RestCatalog {
    async fn products(&self) -> Result<Vec<Product>> {
        self.select("products", None).await
    }

    async fn product_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        self.first("products", "id", id.to_string()).await
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        self.first("products", "slug", slug.to_string()).await
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        self.select("categories", None).await
    }

    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        self.first("categories", "slug", slug.to_string()).await
    }

    async fn order_by_slug(&self, slug: &str) -> Result<Option<Order>> {
        self.first("orders", "slug", slug.to_string()).await
    }
}
