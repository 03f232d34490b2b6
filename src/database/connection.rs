use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{config::DatabaseConfig, error::Result};

/// Opens the pool and brings the `products` table up to date.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;

    run_migrations(&pool).await?;

    tracing::info!(
        "Products database ready ({} max connections, {:?} acquire timeout)",
        config.max_connections,
        config.acquire_timeout
    );

    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    let migrator = sqlx::migrate!();
    migrator.run(pool).await?;

    tracing::debug!("{} migration(s) applied or already present", migrator.iter().count());
    Ok(())
}

pub async fn check_health(pool: &PgPool) -> Result<()> {
    sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
