//! Core folio library (animation engines, content, commands, config).

pub mod command;
pub mod config;
pub mod content;
pub mod dates;
pub mod dispatch;
pub mod history;
pub mod intro;
pub mod playback;
pub mod profile;
pub mod prompt;
pub mod reveal;
pub mod style;
pub mod typing;
