use telabot::interactions::ids::{
    is_plantilla, template_for, PLANTILLA_CONSULTA, PLANTILLA_INGRESO, PLANTILLA_STOCK,
    PLANTILLA_VENDIDO,
};

#[test]
fn every_menu_button_has_a_template() {
    for id in [
        PLANTILLA_INGRESO,
        PLANTILLA_CONSULTA,
        PLANTILLA_VENDIDO,
        PLANTILLA_STOCK,
    ] {
        let template = template_for(id).expect("template should exist");
        assert!(template.starts_with("`/"), "unexpected template: {template}");
    }
}

#[test]
fn unknown_ids_have_no_template() {
    assert!(template_for("plantilla_").is_none());
    assert!(template_for("plantilla_export").is_none());
    assert!(template_for("saga_map").is_none());
}

#[test]
fn plantilla_predicate_matches_only_the_family() {
    assert!(is_plantilla(PLANTILLA_INGRESO));
    assert!(is_plantilla("plantilla_whatever"));
    assert!(!is_plantilla("plant"));
    assert!(!is_plantilla("help_menu"));
}
