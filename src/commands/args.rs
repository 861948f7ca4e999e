//! Shared argument parsing for the stock commands.
//! Parsing returns an explicit result instead of relying on a catch-all, so
//! every handler can branch on the reason and reply with its usage hint.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("faltan argumentos")]
    Missing,
    #[error("cantidad inválida: `{0}`")]
    InvalidCantidad(String),
}

/// Parse `<tela..> <cantidad>`: the last argument is a non-negative integer,
/// everything before it forms the key joined with `_`, so
/// `ingreso lino blanco 10` and `ingreso lino_blanco 10` are equivalent.
pub fn parse_tela_cantidad(args: &[&str]) -> Result<(String, i64), ArgError> {
    let (&cantidad_str, tela_parts) = args.split_last().ok_or(ArgError::Missing)?;
    if tela_parts.is_empty() {
        return Err(ArgError::Missing);
    }
    let cantidad = cantidad_str
        .parse::<i64>()
        .map_err(|_| ArgError::InvalidCantidad(cantidad_str.to_string()))?;
    if cantidad < 0 {
        return Err(ArgError::InvalidCantidad(cantidad_str.to_string()));
    }
    Ok((tela_parts.join("_"), cantidad))
}

/// Parse the search fragment for `stock`. Multiple words are joined with `_`
/// to match how keys are written.
pub fn parse_fragmento(args: &[&str]) -> Result<String, ArgError> {
    if args.is_empty() {
        return Err(ArgError::Missing);
    }
    Ok(args.join("_"))
}

/// Normalize a free-form slash-command string into key form (spaces to `_`).
/// Returns `ArgError::Missing` when nothing is left after trimming.
pub fn normalize_tela(raw: &str) -> Result<String, ArgError> {
    let tela = raw.split_whitespace().collect::<Vec<_>>().join("_");
    if tela.is_empty() {
        return Err(ArgError::Missing);
    }
    Ok(tela)
}
