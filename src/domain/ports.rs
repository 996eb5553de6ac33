use crate::domain::model::{Category, Order, Product, ProductId, Session, UserProfile};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Read-only product, category and order records. `Ok(None)` means not found.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn products(&self) -> Result<Vec<Product>>;
    async fn product_by_id(&self, id: ProductId) -> Result<Option<Product>>;
    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>>;
    async fn categories(&self) -> Result<Vec<Category>>;
    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>>;
    async fn order_by_slug(&self, slug: &str) -> Result<Option<Order>>;
}

#[async_trait]
pub trait IdentityService: Send + Sync {
    async fn current_session(&self) -> Result<Option<Session>>;
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<Option<Session>>;
    async fn sign_out(&self, session: &Session) -> Result<()>;
    /// Profile row for `session`'s user. `Ok(None)` when the row is missing.
    async fn user_profile(&self, session: &Session) -> Result<Option<UserProfile>>;
}
