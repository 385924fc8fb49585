use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, migrate::MigrateError, postgres::PgPoolOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    #[error("Failed to create Postgres connection pool: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Connect to PostgreSQL and bring the schema up to date.
///
/// # Arguments
/// * `url` - Database connection URL
///
/// # Returns
/// A pool ready for [`accounts_adapters::PostgresAccountStore`]
pub async fn configure_postgresql(url: &Secret<String>) -> Result<PgPool, DatabaseSetupError> {
    let pg_pool = get_postgres_pool(url.expose_secret()).await?;

    sqlx::migrate!("../../migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
