// Library entry so integration tests and external tools can reference internal modules.
// The binary (`main.rs`) links against this crate as well.
pub mod commands;
pub mod database;
pub mod handler;
pub mod interactions;
pub mod keep_alive;
pub mod ledger;
pub mod model;

// Convenient re-export for the shared state type.
pub use model::AppState;
