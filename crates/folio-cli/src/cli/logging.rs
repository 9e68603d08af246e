//! Tracing setup.
//!
//! The interactive shell owns stdout, so it logs to a file in the folio
//! home. One-shot commands log to stderr. `FOLIO_LOG` holds the filter
//! directives (default `warn`).

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const FILTER_ENV: &str = "FOLIO_LOG";
const DEFAULT_FILTER: &str = "warn";

pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

/// Installs the global subscriber.
///
/// Keep the returned guard alive for the whole run; dropping it flushes
/// the file writer.
pub fn init(target: LogTarget<'_>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true);

    match target {
        LogTarget::File(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Log path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder
                .with_writer(writer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
            Ok(Some(guard))
        }
        LogTarget::Stderr => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;
            Ok(None)
        }
    }
}
