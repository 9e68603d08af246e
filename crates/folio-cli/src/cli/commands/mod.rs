//! CLI command handlers.

pub mod chat;
pub mod commands;
pub mod config;
pub mod run;
