//! Contains the core logic for the `ingreso` command.

use crate::ledger::Ledger;

/// Add `cantidad` of `tela` to the ledger and build the confirmation reply.
pub async fn ingresar(ledger: &Ledger, tela: &str, cantidad: i64) -> sqlx::Result<String> {
    let nuevo = ledger.adjust(tela, cantidad).await?;
    Ok(format!(
        "✅ Ingresado: +{cantidad} de {tela} (Total: {nuevo})"
    ))
}
