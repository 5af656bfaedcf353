//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity-management service uses this module to create the shared SQLx
//! pool and enforce the identity schema before serving account operations.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

fn db_max_connections() -> u32 {
    std::env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
}

/// A connected identity database with the identity schema applied.
///
/// Query execution, pooling, and transaction discipline are SQLx's; this
/// context adds nothing beyond schema enforcement at startup.
#[derive(Clone, Debug)]
pub struct IdentityDb {
    pool: PgPool,
}

impl IdentityDb {
    /// Connect to `PostgreSQL` and apply the identity schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migrations fail.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(db_max_connections())
            .connect(database_url)
            .await?;

        Self::with_pool(pool).await
    }

    /// Apply the identity schema to an existing pool.
    ///
    /// Migrations run in order: the base identity tables first, then any
    /// application-level model customizations. The application declares none
    /// beyond the base today, so the embedded set is exactly the base schema.
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails or was altered after being
    /// applied.
    pub async fn with_pool(pool: PgPool) -> Result<Self, sqlx::Error> {
        sqlx::migrate!("src/db/migrations").run(&pool).await?;
        tracing::info!("identity schema up to date");

        Ok(Self { pool })
    }

    /// The underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
