//! The `prefix` command: show or change the runtime command prefix.
//! Restricted to the server owner and administrators.

use crate::AppState;
use serenity::model::channel::Message;
use serenity::model::guild::Role;
use serenity::model::id::{RoleId, UserId};
use serenity::model::permissions::Permissions;
use serenity::prelude::*;
use std::collections::HashMap;

// Snapshot of the guild data we need, taken before any await point since the
// cache reference cannot be held across one.
struct GuildInfo {
    owner_id: UserId,
    roles: HashMap<RoleId, Role>,
}

fn get_guild_info_from_cache(ctx: &Context, msg: &Message) -> Option<GuildInfo> {
    let guild = ctx.cache.guild(msg.guild_id?)?;

    Some(GuildInfo {
        owner_id: guild.owner_id,
        roles: guild.roles.clone(),
    })
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let guild_info = match get_guild_info_from_cache(ctx, msg) {
        Some(info) => info,
        None => {
            let _ = msg
                .reply(ctx, "No pude leer los datos del servidor. Probá de nuevo.")
                .await;
            return;
        }
    };

    let is_owner = msg.author.id == guild_info.owner_id;

    let has_admin_role = if let Some(member) = &msg.member {
        member.roles.iter().any(|role_id| {
            guild_info
                .roles
                .get(role_id)
                .is_some_and(|role| role.permissions.contains(Permissions::ADMINISTRATOR))
        })
    } else {
        false
    };

    if !is_owner && !has_admin_role {
        let _ = msg
            .reply(ctx, "Este comando es solo para administradores.")
            .await;
        return;
    }

    match args.first() {
        Some(&"set") => {
            if let Some(new_prefix) = args.get(1) {
                let mut prefix_guard = app_state.prefix.write().await;
                *prefix_guard = new_prefix.to_string();
                let response = format!("Prefijo actualizado a `{}`", new_prefix);
                let _ = msg.reply(ctx, response).await;
            } else {
                let _ = msg.reply(ctx, "Usá: `!prefix set <nuevo_prefijo>`").await;
            }
        }
        _ => {
            let current_prefix = app_state.prefix.read().await;
            let response = format!(
                "El prefijo actual es `{}`. Usá `!prefix set <nuevo_prefijo>` para cambiarlo.",
                current_prefix
            );
            let _ = msg.reply(ctx, response).await;
        }
    }
}
