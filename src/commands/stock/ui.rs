//! Handles all UI and embed creation for the `stock` command.

use crate::database::stock::StockEntry;
use serenity::builder::CreateEmbed;

const COLOR_OK: u32 = 0x2ECC71; // Green
const COLOR_EMPTY: u32 = 0xF1C40F; // Yellow
const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub fn create_stock_embed(
    fragmento: &str,
    result: Result<Vec<StockEntry>, sqlx::Error>,
) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title("📦 Stock encontrado");

    match result {
        Ok(entries) => {
            if entries.is_empty() {
                embed = embed
                    .description(format!(
                        "⚠️ No se encontró stock relacionado con `{fragmento}`."
                    ))
                    .color(COLOR_EMPTY);
            } else {
                let lineas = entries
                    .iter()
                    .map(|entry| format!("{}: {}", entry.tela, entry.cantidad))
                    .collect::<Vec<_>>()
                    .join("\n");
                embed = embed.description(lineas).color(COLOR_OK);
            }
        }
        Err(_) => {
            embed = embed
                .description("No se pudo leer el stock.")
                .color(COLOR_ALERT);
        }
    }

    embed
}
