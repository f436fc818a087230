//! PostgreSQL connection pool initialization.
//!
//! The database URL is read from the `DATABASE_URL` environment variable.
//! The returned pool is cheaply cloneable and lives in [`crate::state::AppState`];
//! all request handlers share it. Queries borrow connections per request, so
//! a cancelled request releases its connection back to the pool when the
//! handler future is dropped.

use sqlx::PgPool;
use std::env;

/// Panics when `DATABASE_URL` is unset or the database is unreachable;
/// called once at startup.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
