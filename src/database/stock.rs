//! The persistent counter store: a durable `tela -> cantidad` mapping.
//! Absence of a row is semantically "zero stock", not an error, so `get`
//! never fails on unknown keys.

use super::init::{self, DbPool};
use sqlx::{Sqlite, Transaction};

/// One row of the stock table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StockEntry {
    pub tela: String,
    pub cantidad: i64,
}

/// Single owner of the stock table. Created once at process start and handed
/// to the ledger; no other component touches the table.
#[derive(Clone)]
pub struct StockStore {
    pool: DbPool,
}

impl StockStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database at `path`, schema included.
    pub async fn connect(path: &str) -> sqlx::Result<Self> {
        Ok(Self::new(init::connect(path).await?))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Stored quantity for `tela`, `0` when the key was never written.
    pub async fn get(&self, tela: &str) -> sqlx::Result<i64> {
        let row: Option<i64> = sqlx::query_scalar("SELECT cantidad FROM stock WHERE tela = ?1")
            .bind(tela)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.unwrap_or(0))
    }

    /// Create-or-replace the stored quantity for `tela`. Durable once this returns.
    pub async fn put(&self, tela: &str, cantidad: i64) -> sqlx::Result<()> {
        sqlx::query("REPLACE INTO stock (tela, cantidad) VALUES (?1, ?2)")
            .bind(tela)
            .bind(cantidad)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Transaction-scoped read used by the ledger's read-modify-write.
    pub async fn get_tx(tx: &mut Transaction<'_, Sqlite>, tela: &str) -> sqlx::Result<i64> {
        let row: Option<i64> = sqlx::query_scalar("SELECT cantidad FROM stock WHERE tela = ?1")
            .bind(tela)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(row.unwrap_or(0))
    }

    /// Transaction-scoped write paired with [`StockStore::get_tx`].
    pub async fn put_tx(
        tx: &mut Transaction<'_, Sqlite>,
        tela: &str,
        cantidad: i64,
    ) -> sqlx::Result<()> {
        sqlx::query("REPLACE INTO stock (tela, cantidad) VALUES (?1, ?2)")
            .bind(tela)
            .bind(cantidad)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// All entries whose key contains `fragmento`, case-insensitively.
    /// `instr` keeps `%` and `_` literal; keys use `_` as separator, so a
    /// `LIKE` pattern would silently turn fragments into wildcards.
    pub async fn scan(&self, fragmento: &str) -> sqlx::Result<Vec<StockEntry>> {
        sqlx::query_as("SELECT tela, cantidad FROM stock WHERE instr(lower(tela), lower(?1)) > 0")
            .bind(fragmento)
            .fetch_all(&self.pool)
            .await
    }
}
