use crate::{commands, interactions, AppState};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;

enum Command {
    Tela,
    Ingreso,
    Vendido,
    Consulta,
    Stock,
    Ping,
    Prefix,
    Help,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tela" | "menu" => Ok(Command::Tela),
            "ingreso" => Ok(Command::Ingreso),
            "vendido" | "venta" => Ok(Command::Vendido),
            "consulta" => Ok(Command::Consulta),
            "stock" => Ok(Command::Stock),
            "ping" => Ok(Command::Ping),
            "prefix" => Ok(Command::Prefix),
            "help" | "ayuda" | "h" => Ok(Command::Help),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler {
    pub allowed_guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = &interaction {
            match command.data.name.as_str() {
                "tela" => commands::menu::run_slash(&ctx, command).await,
                "ingreso" => commands::ingreso::run::run_slash(&ctx, command).await,
                "vendido" => commands::vendido::run::run_slash(&ctx, command).await,
                "consulta" => commands::consulta::run::run_slash(&ctx, command).await,
                "stock" => commands::stock::run::run_slash(&ctx, command).await,
                "ping" => commands::ping::run_slash(&ctx, command).await,
                "help" => commands::help::run_slash(&ctx, command).await,
                _ => {}
            }
        } else if let Interaction::Component(component) = &interaction {
            if interactions::ids::is_plantilla(&component.data.custom_id) {
                interactions::menu_handler::handle(&ctx, component).await;
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.guild_id != Some(self.allowed_guild_id) || msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        let prefix_string = app_state.prefix.read().await.clone();
        let Some(command_body) = msg.content.strip_prefix(&prefix_string) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Tela => commands::menu::run_prefix(&ctx, &msg).await,
            Command::Ingreso => commands::ingreso::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Vendido => commands::vendido::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Consulta => commands::consulta::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Stock => commands::stock::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Ping => commands::ping::run_prefix(&ctx, &msg).await,
            Command::Prefix => commands::prefix::run_prefix(&ctx, &msg, args_vec).await,
            Command::Help => commands::help::run_prefix(&ctx, &msg).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, "connected and ready");
        let commands_to_register = vec![
            commands::menu::register(),
            commands::ingreso::run::register(),
            commands::vendido::run::register(),
            commands::consulta::run::register(),
            commands::stock::run::register(),
            commands::ping::register(),
            commands::help::register(),
        ];
        if let Err(e) = self
            .allowed_guild_id
            .set_commands(&ctx.http, commands_to_register)
            .await
        {
            tracing::error!(error = ?e, "error creating guild commands");
        } else {
            tracing::info!("guild commands registered");
        }
    }
}
