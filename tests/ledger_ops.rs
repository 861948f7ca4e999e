//! Exercises the ledger and the store against an in-memory SQLite database.

use telabot::database::stock::StockStore;
use telabot::ledger::Ledger;

async fn memory_store() -> StockStore {
    StockStore::connect(":memory:")
        .await
        .expect("in-memory store should open")
}

#[tokio::test]
async fn unwritten_key_reads_zero() {
    let ledger = Ledger::new(memory_store().await);
    assert_eq!(ledger.query_exact("lino_crudo").await.unwrap(), 0);
}

#[tokio::test]
async fn adjust_is_additive_not_idempotent() {
    let ledger = Ledger::new(memory_store().await);
    assert_eq!(ledger.adjust("lino_blanco", 5).await.unwrap(), 5);
    assert_eq!(ledger.adjust("lino_blanco", 5).await.unwrap(), 10);
    assert_eq!(ledger.query_exact("lino_blanco").await.unwrap(), 10);
}

#[tokio::test]
async fn oversized_decrement_clamps_to_zero() {
    let ledger = Ledger::new(memory_store().await);
    ledger.adjust("lino_blanco", 7).await.unwrap();
    assert_eq!(ledger.adjust("lino_blanco", -100).await.unwrap(), 0);
    assert_eq!(ledger.query_exact("lino_blanco").await.unwrap(), 0);
}

#[tokio::test]
async fn decrement_on_unknown_key_stays_at_zero() {
    let ledger = Ledger::new(memory_store().await);
    assert_eq!(ledger.adjust("seda_roja", -3).await.unwrap(), 0);
    assert_eq!(ledger.query_exact("seda_roja").await.unwrap(), 0);
}

#[tokio::test]
async fn quantity_stays_non_negative_across_sequences() {
    let ledger = Ledger::new(memory_store().await);
    let deltas = [10, -3, -100, 4, -1, 0, -2, 7];
    let mut expected = 0i64;
    for delta in deltas {
        let nuevo = ledger.adjust("algodon_gris", delta).await.unwrap();
        expected = (expected + delta).max(0);
        assert!(nuevo >= 0);
        assert_eq!(nuevo, expected);
    }
}

#[tokio::test]
async fn fragment_search_is_case_insensitive_substring() {
    let ledger = Ledger::new(memory_store().await);
    ledger.adjust("lino_blanco", 7).await.unwrap();
    ledger.adjust("lino_negro", 2).await.unwrap();
    ledger.adjust("algodon_blanco", 5).await.unwrap();

    let mut linos: Vec<String> = ledger
        .query_by_fragment("LINO")
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.tela)
        .collect();
    linos.sort();
    assert_eq!(linos, vec!["lino_blanco", "lino_negro"]);

    let mut blancos: Vec<String> = ledger
        .query_by_fragment("blan")
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.tela)
        .collect();
    blancos.sort();
    assert_eq!(blancos, vec!["algodon_blanco", "lino_blanco"]);

    assert!(ledger.query_by_fragment("seda").await.unwrap().is_empty());
}

#[tokio::test]
async fn fragment_wildcards_match_themselves() {
    let ledger = Ledger::new(memory_store().await);
    ledger.adjust("telas", 1).await.unwrap();
    ledger.adjust("lino_blanco", 2).await.unwrap();

    // `%` never acts as a wildcard.
    assert!(ledger.query_by_fragment("t%s").await.unwrap().is_empty());
    // `_` only matches a literal underscore in the key.
    assert!(ledger.query_by_fragment("tel_s").await.unwrap().is_empty());
    let hits = ledger.query_by_fragment("o_b").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].tela, "lino_blanco");
}

#[tokio::test]
async fn put_get_round_trip() {
    let store = memory_store().await;
    store.put("seda_roja", 42).await.unwrap();
    assert_eq!(store.get("seda_roja").await.unwrap(), 42);

    // put is create-or-replace, not accumulate.
    store.put("seda_roja", 3).await.unwrap();
    assert_eq!(store.get("seda_roja").await.unwrap(), 3);
}
