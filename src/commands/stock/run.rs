//! Handles the command logic for `/stock` and `!stock`.

use super::logic::buscar;
use super::ui::create_stock_embed;
use crate::commands::args::parse_fragmento;
use crate::AppState;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponseFollowup, CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub const USAGE: &str = "❌ Tenés que escribir el tipo.\nEjemplo: `/stock lino`";

pub fn register() -> CreateCommand {
    CreateCommand::new("stock")
        .description("Listar todas las telas que contienen un fragmento.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "tipo",
                "Fragmento a buscar, por ejemplo `lino`.",
            )
            .required(true),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let fragmento = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "tipo")
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default()
        .trim()
        .to_string();

    if fragmento.is_empty() {
        let builder = CreateInteractionResponseFollowup::new().content(USAGE);
        interaction.create_followup(&ctx.http, builder).await.ok();
        return;
    }

    let result = buscar(&app_state.ledger, &fragmento).await;
    if let Err(e) = &result {
        tracing::error!(fragmento = %fragmento, error = ?e, "stock search failed");
    }

    let builder =
        CreateInteractionResponseFollowup::new().embed(create_stock_embed(&fragmento, result));
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let fragmento = match parse_fragmento(&args) {
        Ok(fragmento) => fragmento,
        Err(_) => {
            msg.reply(ctx, USAGE).await.ok();
            return;
        }
    };

    let result = buscar(&app_state.ledger, &fragmento).await;
    if let Err(e) = &result {
        tracing::error!(fragmento = %fragmento, error = ?e, "stock search failed");
    }

    let builder = CreateMessage::new()
        .embed(create_stock_embed(&fragmento, result))
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
