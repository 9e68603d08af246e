//! Interactive shell.

use std::io::{Write, stderr};

use anyhow::Result;

use crate::cli::Loaded;

pub fn run(loaded: Loaded) -> Result<()> {
    let Loaded { config, profile } = loaded;
    let today = chrono::Local::now().date_naive();
    folio_tui::run(config, profile, today)?;

    // Terminal is restored by now.
    writeln!(stderr(), "Bye!")?;
    Ok(())
}
