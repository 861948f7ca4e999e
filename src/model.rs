//! Shared data structures stored in Serenity's global context.
//! These structs are used as `TypeMapKey`s so every command and event handler
//! reaches the same ledger and prefix without ambient globals.

use crate::ledger::Ledger;
use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A container for the ShardManager, allowing it to be stored in the global context.
/// This provides access to shard-specific information, like gateway latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe access
/// from any command or event handler.
pub struct AppState {
    /// The stock ledger, sole owner of the persistent counter store.
    pub ledger: Ledger,
    /// The current command prefix, changeable at runtime by administrators.
    pub prefix: Arc<RwLock<String>>,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
