//! # jschs DB
//!
//! Database pool and utilities for the jschs API.
//!
//! This crate provides PostgreSQL connection pool initialization using SQLx.
//! The pool is the only state shared between requests; it is cheaply
//! cloneable and safe for concurrent use.
//!
//! # Example
//!
//! ```ignore
//! use jschs_config::DatabaseConfig;
//! use jschs_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jschs_db::DbError> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//!     // Use pool for database operations
//!     Ok(())
//! }
//! ```

use jschs_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("DATABASE_URL is not set")]
    MissingUrl,

    #[error("timed out connecting to the database")]
    Timeout,

    #[error("failed to connect to the database: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Initializes a PostgreSQL connection pool and verifies connectivity.
///
/// The pool is sized and bounded by [`DatabaseConfig`]. A `SELECT 1` round
/// trip is issued before returning so that a misconfigured database fails
/// startup instead of the first request.
///
/// # Errors
///
/// - [`DbError::MissingUrl`] if no `DATABASE_URL` was configured
/// - [`DbError::Timeout`] if connecting and pinging take longer than the
///   acquire timeout
/// - [`DbError::Connect`] if the connection or ping fails
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    let url = config.url.as_deref().ok_or(DbError::MissingUrl)?;

    let connect = async {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect(url)
            .await?;

        if let Err(e) = ping(&pool).await {
            pool.close().await;
            return Err(e);
        }

        Ok::<_, sqlx::Error>(pool)
    };

    let pool = tokio::time::timeout(config.acquire_timeout(), connect)
        .await
        .map_err(|_| DbError::Timeout)??;

    tracing::info!(
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );

    Ok(pool)
}

/// Round-trips a trivial query to check that the database is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
