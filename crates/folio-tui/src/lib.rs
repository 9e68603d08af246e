//! Full-screen terminal shell for folio.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
pub use features::{input, intro, statusline, transcript};
use folio_core::config::Config;
use folio_core::profile::Profile;
pub use runtime::TuiRuntime;
use state::AppState;

/// Runs the interactive shell until the visitor leaves.
///
/// # Errors
/// Fails when stdout is not a terminal or the terminal cannot be set up.
pub fn run(config: Config, profile: Profile, today: NaiveDate) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The interactive shell requires a terminal.\n\
             Use `folio run <command>` for non-interactive output."
        );
    }

    tracing::info!(
        intro = config.intro.enabled,
        profile = %profile.name,
        "starting shell"
    );
    let state = AppState::new(config, profile, today, Instant::now());
    let mut runtime = TuiRuntime::new(state)?;
    runtime.run()
}
