//! Centralized custom_id string constants for interaction components.
//! Consolidating here reduces typos and enables future refactors.

pub const PLANTILLA_PREFIX: &str = "plantilla_";
pub const PLANTILLA_INGRESO: &str = "plantilla_ingreso";
pub const PLANTILLA_CONSULTA: &str = "plantilla_consulta";
pub const PLANTILLA_VENDIDO: &str = "plantilla_vendido";
pub const PLANTILLA_STOCK: &str = "plantilla_stock";

/// Utility predicate for routing in the event handler.
pub fn is_plantilla(id: &str) -> bool {
    id.starts_with(PLANTILLA_PREFIX)
}

/// Usage template shown when the matching menu button is pressed.
pub fn template_for(id: &str) -> Option<&'static str> {
    match id {
        PLANTILLA_INGRESO => Some("`/ingreso tela_color cantidad`"),
        PLANTILLA_CONSULTA => Some("`/consulta tela_color cantidad`"),
        PLANTILLA_VENDIDO => Some("`/vendido tela_color cantidad`"),
        PLANTILLA_STOCK => Some("`/stock tipo`"),
        _ => None,
    }
}
