//! Handles the command logic for `/consulta` and `!consulta`.

use super::logic::consultar;
use crate::commands::args::{normalize_tela, parse_tela_cantidad};
use crate::AppState;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponseFollowup, CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub const USAGE: &str = "❌ Formato incorrecto.\nUsá: `/consulta tela_color cantidad`";
const STORE_FAIL: &str = "⚠️ No se pudo leer el stock. Probá de nuevo.";

pub fn register() -> CreateCommand {
    CreateCommand::new("consulta")
        .description("Ver el stock de una tela y si alcanza para un pedido.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "tela",
                "La tela, por ejemplo `lino_blanco`.",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "cantidad",
                "Cantidad que se necesita.",
            )
            .required(true)
            .min_int_value(0),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let tela_raw = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "tela")
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default();
    let cantidad = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "cantidad")
        .and_then(|opt| opt.value.as_i64());

    let reply = match (normalize_tela(tela_raw), cantidad) {
        (Ok(tela), Some(cantidad)) if cantidad >= 0 => {
            match consultar(&app_state.ledger, &tela, cantidad).await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::error!(tela = %tela, error = ?e, "consulta failed");
                    STORE_FAIL.to_string()
                }
            }
        }
        _ => USAGE.to_string(),
    };

    let builder = CreateInteractionResponseFollowup::new().content(reply);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };

    let reply = match parse_tela_cantidad(&args) {
        Ok((tela, cantidad)) => match consultar(&app_state.ledger, &tela, cantidad).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(tela = %tela, error = ?e, "consulta failed");
                STORE_FAIL.to_string()
            }
        },
        Err(_) => USAGE.to_string(),
    };

    let builder = CreateMessage::new().content(reply).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
