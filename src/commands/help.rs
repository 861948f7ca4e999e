//! Static help command listing every command with its usage.

use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

struct CommandInfo {
    name: &'static str,
    description: &'static str,
    usage: &'static str,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "tela",
        description: "Menú con las plantillas de los comandos de stock.",
        usage: "/tela",
    },
    CommandInfo {
        name: "ingreso",
        description: "Registrar tela que entra al taller.",
        usage: "/ingreso tela_color cantidad",
    },
    CommandInfo {
        name: "vendido",
        description: "Registrar una venta que descuenta stock.",
        usage: "/vendido tela_color cantidad",
    },
    CommandInfo {
        name: "consulta",
        description: "Ver el stock de una tela y si alcanza para un pedido.",
        usage: "/consulta tela_color cantidad",
    },
    CommandInfo {
        name: "stock",
        description: "Listar todas las telas que contienen un fragmento.",
        usage: "/stock tipo",
    },
    CommandInfo {
        name: "ping",
        description: "Latencia del bot.",
        usage: "/ping",
    },
    CommandInfo {
        name: "prefix",
        description: "Ver o cambiar el prefijo (solo administradores).",
        usage: "!prefix set <nuevo_prefijo>",
    },
    CommandInfo {
        name: "help",
        description: "Esta ayuda.",
        usage: "/help [comando]",
    },
];

/// Every command name listed in the help table; used by the tests to keep the
/// table in sync with the dispatcher.
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

fn create_help_embed(filter: Option<&str>) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title("📋 Comandos del stock de telas");

    match filter.and_then(|name| COMMANDS.iter().find(|c| c.name == name)) {
        Some(info) => {
            embed = embed
                .description(info.description)
                .field("Uso", format!("`{}`", info.usage), false);
        }
        None => {
            for info in COMMANDS {
                embed = embed.field(
                    info.name,
                    format!("{}\n`{}`", info.description, info.usage),
                    false,
                );
            }
        }
    }
    embed
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help")
        .description("Lista de comandos disponibles.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "comando",
                "Comando puntual para ver en detalle.",
            )
            .required(false),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let filter = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "comando")
        .and_then(|opt| opt.value.as_str());
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().embed(create_help_embed(filter)),
    );
    interaction.create_response(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let builder = CreateMessage::new()
        .embed(create_help_embed(None))
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
