//! SQLite storage for doctors and their reviews.
//!
//! The crate root owns pool construction and schema bootstrap; the
//! [`repositories`] module holds the per-table data-access functions.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Table definitions, applied idempotently on startup.
const SCHEMA: &str = include_str!("schema.sql");

/// Create a connection pool from a `sqlite:` database URL.
///
/// The database file is created when it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    connect_with(SqlitePoolOptions::new().max_connections(5), connect_options).await
}

/// Create a connection pool from pre-built options.
///
/// Foreign-key enforcement is switched off on every connection: deleting a
/// doctor keeps its reviews, with their `doctor_id` left dangling.
pub async fn connect_with(
    pool_options: SqlitePoolOptions,
    connect_options: SqliteConnectOptions,
) -> Result<DbPool, sqlx::Error> {
    pool_options
        .connect_with(connect_options.foreign_keys(false))
        .await
}

/// Create the `doctor` and `review` tables if they are missing.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::debug!("Database schema ensured");
    Ok(())
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
