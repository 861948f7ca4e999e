//! Ensures the help table lists every command exactly once.
use telabot::commands::help::all_command_names;

#[test]
fn help_command_names_unique_and_present() {
    let names = all_command_names();
    // Ensure uniqueness
    let mut sorted = names.clone();
    sorted.sort();
    for w in sorted.windows(2) {
        assert_ne!(w[0], w[1], "Duplicate help command name: {}", w[0]);
    }
    let expected = [
        "tela", "ingreso", "vendido", "consulta", "stock", "ping", "prefix", "help",
    ];
    for e in expected {
        assert!(sorted.contains(&e), "Missing help entry for `{}`", e);
    }
    assert_eq!(names.len(), expected.len());
}
