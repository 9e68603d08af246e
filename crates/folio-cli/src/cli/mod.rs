//! CLI entry and dispatch.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use folio_core::config::{self, Config};
use folio_core::profile::Profile;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "A portfolio you explore from a shell prompt")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: $FOLIO_HOME/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Profile file; overrides `profile_path` from the config
    #[arg(long, global = true, value_name = "PATH")]
    profile: Option<PathBuf>,

    /// Skip the intro animation
    #[arg(long = "no-intro", global = true)]
    no_intro: bool,

    /// Log file for the interactive shell (default: $FOLIO_HOME/folio.log)
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive shell (default)
    Chat,
    /// Print a command's output without the shell
    Run {
        /// Print styled lines as JSON
        #[arg(long)]
        json: bool,

        /// The command line, e.g. `about` or `exp`
        #[arg(
            value_name = "COMMAND",
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        command: Vec<String>,
    },
    /// List the commands the shell understands
    Commands,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Write a commented default config file (if not present)
    Init,
}

/// Config and profile after command-line overrides.
pub struct Loaded {
    pub config: Config,
    pub profile: Profile,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Cli {
        command,
        config: config_path,
        profile,
        no_intro,
        log_file,
    } = cli;
    let config_path = config_path.unwrap_or_else(config::paths::config_path);

    match command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let log_path = log_file.unwrap_or_else(config::paths::log_path);
            let _guard = logging::init(logging::LogTarget::File(&log_path))?;
            let loaded = load(&config_path, profile.as_deref(), no_intro)?;
            commands::chat::run(loaded)
        }
        Commands::Run { json, command } => {
            let _guard = logging::init(logging::LogTarget::Stderr)?;
            let loaded = load(&config_path, profile.as_deref(), no_intro)?;
            commands::run::run(&loaded, &command.join(" "), json)
        }
        Commands::Commands => {
            commands::commands::list();
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
        },
    }
}

/// Loads the config, applies overrides, and loads the profile it names.
fn load(config_path: &Path, profile: Option<&Path>, no_intro: bool) -> Result<Loaded> {
    let mut config = Config::load_from(config_path)?;
    if no_intro {
        config.intro.enabled = false;
    }

    let profile_path = profile.or(config.profile_path.as_deref());
    let profile = Profile::load(profile_path)?;
    tracing::debug!(
        config = %config_path.display(),
        profile = ?profile_path,
        "loaded"
    );
    Ok(Loaded { config, profile })
}
