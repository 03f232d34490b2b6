use async_trait::async_trait;
use sqlx::PgPool;

use super::ProductStore;
use crate::{
    database,
    error::Result,
    models::{Page, Product, ProductRequest},
    queries::product_queries,
};

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        product_queries::find_by_id(&self.pool, id).await
    }

    async fn find_page(&self, page: Page) -> Result<Vec<Product>> {
        product_queries::find_page(&self.pool, page).await
    }

    async fn create(&self, req: &ProductRequest) -> Result<Product> {
        product_queries::create_product(&self.pool, req).await
    }

    async fn update(&self, id: i32, req: &ProductRequest) -> Result<Option<Product>> {
        product_queries::update_product(&self.pool, id, req).await
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        product_queries::delete_product(&self.pool, id).await
    }

    async fn ping(&self) -> Result<()> {
        database::check_health(&self.pool).await
    }
}
