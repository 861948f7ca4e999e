//! Contains the core logic for the `consulta` command.

use crate::ledger::Ledger;

/// Report the current stock of `tela` and whether it covers `cantidad_pedida`.
/// The sufficiency comparison lives here, not in the ledger: the ledger only
/// answers "how much is there".
pub async fn consultar(
    ledger: &Ledger,
    tela: &str,
    cantidad_pedida: i64,
) -> sqlx::Result<String> {
    let actual = ledger.query_exact(tela).await?;
    let veredicto = if actual >= cantidad_pedida {
        "✅ Hay suficiente stock."
    } else {
        "❌ No hay suficiente stock."
    };
    Ok(format!(
        "📦 Stock actual de **{tela}**: {actual}\n{veredicto}"
    ))
}
