use crate::model::ShardManagerContainer;
use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("ping").description("Latencia del bot.")
}

async fn latency_reply(ctx: &Context) -> String {
    let data = ctx.data.read().await;
    if let Some(shard_manager) = data.get::<ShardManagerContainer>() {
        let runners = shard_manager.runners.lock().await;
        if let Some(runner) = runners.get(&ctx.shard_id) {
            let latency = runner.latency.map_or_else(
                || "N/A".to_string(),
                |latency| format!("{} ms", latency.as_millis()),
            );
            return format!("Pong! Latencia: `{}`", latency);
        }
    }
    "Pong!".to_string()
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let response = latency_reply(ctx).await;
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().content(response),
    );
    interaction.create_response(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let response = latency_reply(ctx).await;
    if let Err(why) = msg.channel_id.say(&ctx.http, response).await {
        tracing::error!(error = ?why, "error sending ping response");
    }
}
