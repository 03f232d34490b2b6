mod postgres;

pub use postgres::PgProductStore;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Page, Product, ProductRequest},
};

/// Data access for the `products` table. Every method maps to a single
/// autocommitted statement.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>>;

    /// Products ordered by id, skipping `page.start` rows and returning at
    /// most `page.count`.
    async fn find_page(&self, page: Page) -> Result<Vec<Product>>;

    async fn create(&self, req: &ProductRequest) -> Result<Product>;

    /// `None` when no product has this id.
    async fn update(&self, id: i32, req: &ProductRequest) -> Result<Option<Product>>;

    /// Number of rows removed. Deleting a missing id is not an error.
    async fn delete(&self, id: i32) -> Result<u64>;

    async fn ping(&self) -> Result<()>;
}
