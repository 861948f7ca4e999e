//! Component-interaction handling (the `tela` button menu).

pub mod ids;
pub mod menu_handler;
