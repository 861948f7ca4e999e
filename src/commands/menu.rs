//! The `tela` command: a button menu with the usage templates of the four
//! stock commands, mirroring how operators actually discover them.

use crate::interactions::ids;
use serenity::builder::{
    CreateActionRow, CreateButton, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::{ButtonStyle, CommandInteraction};
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("tela").description("Menú de atajos para el stock de telas.")
}

fn menu_components() -> Vec<CreateActionRow> {
    vec![
        CreateActionRow::Buttons(vec![
            CreateButton::new(ids::PLANTILLA_INGRESO)
                .label("✍️ Ingresar")
                .style(ButtonStyle::Primary),
            CreateButton::new(ids::PLANTILLA_CONSULTA)
                .label("🔍 Consultar")
                .style(ButtonStyle::Secondary),
        ]),
        CreateActionRow::Buttons(vec![
            CreateButton::new(ids::PLANTILLA_VENDIDO)
                .label("💸 Venta")
                .style(ButtonStyle::Primary),
            CreateButton::new(ids::PLANTILLA_STOCK)
                .label("📈 Ver Stock")
                .style(ButtonStyle::Secondary),
        ]),
    ]
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content("Elegí una opción:")
            .components(menu_components()),
    );
    if let Err(e) = interaction.create_response(&ctx.http, builder).await {
        tracing::error!(error = ?e, "menu slash response failed");
    }
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let builder = CreateMessage::new()
        .content("Elegí una opción:")
        .components(menu_components())
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
