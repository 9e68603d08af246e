//! Feature slices: each owns its state, and where it has them, its reducer
//! and render helpers.

pub mod input;
pub mod intro;
pub mod statusline;
pub mod transcript;
