//! Handles the buttons of the `tela` menu: each one swaps the menu message
//! for the usage template of the chosen command.

use super::ids;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;

pub async fn handle(ctx: &Context, component: &ComponentInteraction) {
    let contenido = ids::template_for(component.data.custom_id.as_str())
        .unwrap_or("Opción no reconocida.");

    let builder = CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .content(contenido)
            .components(vec![]),
    );
    if let Err(e) = component.create_response(&ctx.http, builder).await {
        tracing::error!(cid = %component.data.custom_id, error = ?e, "menu response failed");
    }
}
