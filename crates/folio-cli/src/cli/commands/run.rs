//! `folio run <COMMAND...>`: a command's output, fully revealed, without
//! the shell.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use folio_core::command::{self, Resolved};
use folio_core::content::ContentContext;
use folio_core::dispatch::{Dispatch, Dispatcher};
use folio_core::intro::{IntroScript, IntroSequencer};
use folio_core::playback::Playback;
use folio_core::style::StyledLine;
use serde::Serialize;

use crate::cli::Loaded;

#[derive(Serialize)]
struct RunOutput<'a> {
    command: &'a str,
    lines: &'a [StyledLine],
}

pub fn run(loaded: &Loaded, input: &str, json: bool) -> Result<()> {
    let input = input.trim();
    if input.is_empty() {
        anyhow::bail!("No command given. Try `folio commands`.");
    }
    if let Resolved::NotFound(_) = command::resolve(input) {
        anyhow::bail!("Command not found: {input}. Try `folio commands`.");
    }

    let today = chrono::Local::now().date_naive();
    let lines = render(loaded, input, today)?;
    tracing::debug!(input, lines = lines.len(), "rendered");

    let mut out = io::stdout().lock();
    if json {
        let output = RunOutput {
            command: input,
            lines: &lines,
        };
        let text = serde_json::to_string_pretty(&output).context("serialize output")?;
        writeln!(out, "{text}")?;
    } else {
        for line in &lines {
            writeln!(out, "{}", line.plain_text())?;
        }
    }
    Ok(())
}

/// Everything the command shows once its animation has finished.
fn render(loaded: &Loaded, input: &str, today: NaiveDate) -> Result<Vec<StyledLine>> {
    let ctx = ContentContext {
        profile: &loaded.profile,
        timing: &loaded.config.timing,
        today,
    };

    match Dispatcher::new().submit(input) {
        Some(Dispatch::Play { block, .. }) => Ok(Playback::immediate(block.script(&ctx)).lines()),
        Some(Dispatch::Repeat) => {
            let script = IntroScript::new(&ctx, &loaded.config.prompt);
            let mut intro = IntroSequencer::new(script, Instant::now());
            intro.skip(Instant::now());
            Ok(intro.lines())
        }
        Some(Dispatch::Clear | Dispatch::Exit) => anyhow::bail!(
            "`{}` only works in the interactive shell",
            command::first_word(input)
        ),
        None => anyhow::bail!("Cannot run `{input}`"),
    }
}
