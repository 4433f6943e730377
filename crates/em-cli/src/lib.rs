//! Event manager CLI library.
//!
//! This crate provides the interactive console for the event manager.

mod cli;
pub mod commands;
mod config;
pub mod input;
pub mod menu;

pub use cli::Cli;
pub use config::Config;
pub use menu::{Controller, MenuState};
