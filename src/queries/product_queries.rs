use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Page, Product, ProductRequest},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product =
        sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(product)
}

pub async fn find_page(pool: &PgPool, page: Page) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, price FROM products ORDER BY id ASC LIMIT $1 OFFSET $2",
    )
    .bind(page.count)
    .bind(page.start)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn create_product(pool: &PgPool, req: &ProductRequest) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, price)
        VALUES ($1, $2)
        RETURNING id, name, price
        "#,
    )
    .bind(&req.name)
    .bind(req.price)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Returns `None` when no row has the given id.
pub async fn update_product(
    pool: &PgPool,
    id: i32,
    req: &ProductRequest,
) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET name = $1, price = $2
        WHERE id = $3
        RETURNING id, name, price
        "#,
    )
    .bind(&req.name)
    .bind(req.price)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
