//! Reply formatting for the three counter commands, end to end against an
//! in-memory store.

use telabot::commands::{consulta, ingreso, vendido};
use telabot::database::stock::StockStore;
use telabot::ledger::Ledger;

async fn memory_ledger() -> Ledger {
    let store = StockStore::connect(":memory:")
        .await
        .expect("in-memory store should open");
    Ledger::new(store)
}

#[tokio::test]
async fn ingreso_reply_shows_the_new_total() {
    let ledger = memory_ledger().await;
    let reply = ingreso::logic::ingresar(&ledger, "lino_blanco", 10)
        .await
        .unwrap();
    assert_eq!(reply, "✅ Ingresado: +10 de lino_blanco (Total: 10)");
}

#[tokio::test]
async fn vendido_reply_shows_what_is_left() {
    let ledger = memory_ledger().await;
    ledger.adjust("lino_blanco", 10).await.unwrap();
    let reply = vendido::logic::vender(&ledger, "lino_blanco", 3)
        .await
        .unwrap();
    assert_eq!(reply, "🛒 Vendido: -3 de lino_blanco (Queda: 7)");
}

#[tokio::test]
async fn vendido_reply_after_clamp_shows_zero() {
    let ledger = memory_ledger().await;
    ledger.adjust("lino_blanco", 7).await.unwrap();
    let reply = vendido::logic::vender(&ledger, "lino_blanco", 100)
        .await
        .unwrap();
    assert_eq!(reply, "🛒 Vendido: -100 de lino_blanco (Queda: 0)");
}

#[tokio::test]
async fn consulta_reports_sufficiency() {
    let ledger = memory_ledger().await;
    ledger.adjust("lino_blanco", 7).await.unwrap();

    let reply = consulta::logic::consultar(&ledger, "lino_blanco", 5)
        .await
        .unwrap();
    assert!(reply.contains("Stock actual de **lino_blanco**: 7"));
    assert!(reply.contains("✅ Hay suficiente stock."));

    let reply = consulta::logic::consultar(&ledger, "lino_blanco", 8)
        .await
        .unwrap();
    assert!(reply.contains("❌ No hay suficiente stock."));
}

#[tokio::test]
async fn consulta_on_unknown_key_reports_zero() {
    let ledger = memory_ledger().await;
    let reply = consulta::logic::consultar(&ledger, "gasa_verde", 1)
        .await
        .unwrap();
    assert!(reply.contains("Stock actual de **gasa_verde**: 0"));
    assert!(reply.contains("❌ No hay suficiente stock."));
}
