//! Contains the core logic for the `stock` command.

use crate::database::stock::StockEntry;
use crate::ledger::Ledger;

/// All entries whose key contains `fragmento`, case-insensitively.
pub async fn buscar(ledger: &Ledger, fragmento: &str) -> sqlx::Result<Vec<StockEntry>> {
    ledger.query_by_fragment(fragmento).await
}
