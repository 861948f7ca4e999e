//! The stock ledger: non-negative named counters and the queries over them.
//! This is the only business rule in the bot; everything else is plumbing
//! between Discord and this module.

use crate::database::stock::{StockEntry, StockStore};

/// Clamped counter update. A decrement larger than the current stock floors
/// the quantity at zero instead of failing; the addition saturates so extreme
/// deltas cannot wrap.
pub fn apply_delta(actual: i64, delta: i64) -> i64 {
    actual.saturating_add(delta).max(0)
}

/// Owns the [`StockStore`] and exposes the three ledger operations.
pub struct Ledger {
    store: StockStore,
}

impl Ledger {
    pub fn new(store: StockStore) -> Self {
        Self { store }
    }

    /// Apply a signed delta to `tela` and return the new quantity.
    ///
    /// The read and the write share one transaction, so two adjusts dispatched
    /// concurrently against the same key cannot lose an update.
    pub async fn adjust(&self, tela: &str, delta: i64) -> sqlx::Result<i64> {
        let mut tx = self.store.pool().begin().await?;
        let actual = StockStore::get_tx(&mut tx, tela).await?;
        let nuevo = apply_delta(actual, delta);
        StockStore::put_tx(&mut tx, tela, nuevo).await?;
        tx.commit().await?;
        Ok(nuevo)
    }

    /// Current quantity for `tela`; `0` when never written.
    pub async fn query_exact(&self, tela: &str) -> sqlx::Result<i64> {
        self.store.get(tela).await
    }

    /// All entries whose key contains `fragmento`, case-insensitively.
    /// An empty result is a normal answer, not an error.
    pub async fn query_by_fragment(&self, fragmento: &str) -> sqlx::Result<Vec<StockEntry>> {
        self.store.scan(fragmento).await
    }
}
