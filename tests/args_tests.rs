use telabot::commands::args::{normalize_tela, parse_fragmento, parse_tela_cantidad, ArgError};

#[test]
fn single_token_key_parses() {
    assert_eq!(
        parse_tela_cantidad(&["lino_blanco", "10"]),
        Ok(("lino_blanco".to_string(), 10))
    );
}

#[test]
fn multi_word_key_joins_with_underscore() {
    assert_eq!(
        parse_tela_cantidad(&["lino", "blanco", "10"]),
        Ok(("lino_blanco".to_string(), 10))
    );
}

#[test]
fn zero_cantidad_is_allowed() {
    assert_eq!(
        parse_tela_cantidad(&["lino", "0"]),
        Ok(("lino".to_string(), 0))
    );
}

#[test]
fn missing_cantidad_is_an_error() {
    assert_eq!(parse_tela_cantidad(&["lino"]), Err(ArgError::Missing));
}

#[test]
fn empty_args_are_an_error() {
    assert_eq!(parse_tela_cantidad(&[]), Err(ArgError::Missing));
}

#[test]
fn non_integer_cantidad_is_an_error() {
    assert_eq!(
        parse_tela_cantidad(&["lino", "diez"]),
        Err(ArgError::InvalidCantidad("diez".to_string()))
    );
}

#[test]
fn negative_cantidad_is_an_error() {
    assert_eq!(
        parse_tela_cantidad(&["lino", "-5"]),
        Err(ArgError::InvalidCantidad("-5".to_string()))
    );
}

#[test]
fn fragmento_requires_at_least_one_word() {
    assert_eq!(parse_fragmento(&[]), Err(ArgError::Missing));
    assert_eq!(parse_fragmento(&["lino"]), Ok("lino".to_string()));
    assert_eq!(
        parse_fragmento(&["lino", "blanco"]),
        Ok("lino_blanco".to_string())
    );
}

#[test]
fn normalize_tela_collapses_spaces() {
    assert_eq!(normalize_tela("lino blanco"), Ok("lino_blanco".to_string()));
    assert_eq!(normalize_tela("  lino  "), Ok("lino".to_string()));
    assert_eq!(normalize_tela("   "), Err(ArgError::Missing));
}
