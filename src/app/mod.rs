pub mod action;
pub mod blink;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod input;
pub mod keymap;
pub mod logging;
pub mod r#loop;
pub mod menu;
pub mod reducer;
pub mod state;
pub mod ui;
