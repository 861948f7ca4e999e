//! Contains the core logic for the `vendido` command.

use crate::ledger::Ledger;

/// Deduct `cantidad` of `tela` from the ledger and build the confirmation
/// reply. A sale larger than the current stock floors the counter at zero;
/// the reply always shows what is actually left.
pub async fn vender(ledger: &Ledger, tela: &str, cantidad: i64) -> sqlx::Result<String> {
    let queda = ledger.adjust(tela, -cantidad).await?;
    Ok(format!("🛒 Vendido: -{cantidad} de {tela} (Queda: {queda})"))
}
