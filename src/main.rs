use std::env;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use telabot::database::stock::StockStore;
use telabot::ledger::Ledger;
use telabot::model::{AppState, ShardManagerContainer};
use telabot::{handler, keep_alive};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let server_id_str = env::var("SERVER_ID").expect("Expected SERVER_ID in the environment.");

    let server_id = server_id_str
        .parse::<u64>()
        .expect("SERVER_ID must be a valid number.");
    let allowed_guild_id = GuildId::new(server_id);

    let db_path = env::var("STOCK_DB").unwrap_or_else(|_| "stock.db".to_string());
    let store = StockStore::connect(&db_path)
        .await
        .expect("Failed to open the stock database.");
    tracing::info!(path = %db_path, "stock database ready");

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    keep_alive::spawn(port).await;

    let app_state = Arc::new(AppState {
        ledger: Ledger::new(store),
        prefix: Arc::new(RwLock::new("!".to_string())),
    });

    // In Serenity v0.12, interactions are received by default with GUILDS.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler::Handler { allowed_guild_id })
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        tracing::error!(error = ?why, "client error");
    }
}
