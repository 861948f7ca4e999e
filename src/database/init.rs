//! This module defines shared database types and pool construction.
//! The whole persistent state is one SQLite file with one table, created
//! here on connect if it does not exist yet.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

/// A type alias for the database connection pool (`Pool<Sqlite>`).
/// This is used throughout the application to provide a consistent, clear name
/// for the shared database connection state.
pub type DbPool = Pool<Sqlite>;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS stock (
    tela     TEXT PRIMARY KEY,
    cantidad INTEGER NOT NULL DEFAULT 0
)";

/// Open (or create) the stock database at `path` and make sure the schema exists.
///
/// The pool is capped at a single connection: the ledger is a single logical
/// writer, and one SQLite connection serializes every read-modify-write.
pub async fn connect(path: &str) -> sqlx::Result<DbPool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    sqlx::query(SCHEMA).execute(&pool).await?;
    Ok(pool)
}
