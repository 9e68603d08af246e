use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for folio configuration and data.
    //!
    //! FOLIO_HOME resolution order:
    //! 1. FOLIO_HOME environment variable (if set)
    //! 2. ~/.config/folio (default)

    use std::path::PathBuf;

    /// Returns the folio home directory.
    ///
    /// Falls back to `.folio` in the working directory when no home
    /// directory can be determined.
    pub fn folio_home() -> PathBuf {
        if let Ok(home) = std::env::var("FOLIO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".folio"),
            |h| h.join(".config").join("folio"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        folio_home().join("config.toml")
    }

    /// Returns the default log file path.
    pub fn log_path() -> PathBuf {
        folio_home().join("folio.log")
    }
}

/// Shell prompt identity, rendered as `user@host:cwd$`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub user: String,
    pub host: String,
    pub cwd: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user: "visitor".to_string(),
            host: "portfolio".to_string(),
            cwd: "~".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub enabled: bool,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Animation timings in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Per-character delay for typed text lines.
    pub type_ms: u64,
    /// Per-character delay for commands typed at the intro prompt.
    pub prompt_type_ms: u64,
    /// Pauses between intro phases.
    pub pause_ms: u64,
    /// Delay between the last intro phase and handing over the prompt.
    pub done_delay_ms: u64,
    /// Delay before handing over the prompt after a skip.
    pub skip_delay_ms: u64,
    pub about_ms: u64,
    pub experience_ms: u64,
    pub projects_ms: u64,
    pub skills_ms: u64,
    pub contact_ms: u64,
    pub help_ms: u64,
    pub not_found_ms: u64,
    pub easter_egg_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            type_ms: 50,
            prompt_type_ms: 80,
            pause_ms: 500,
            done_delay_ms: 500,
            skip_delay_ms: 100,
            about_ms: 120,
            experience_ms: 150,
            projects_ms: 150,
            skills_ms: 35,
            contact_ms: 150,
            help_ms: 120,
            not_found_ms: 120,
            easter_egg_ms: 120,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt: PromptConfig,
    pub intro: IntroConfig,
    pub timing: TimingConfig,
    /// Commands pre-loaded into the input history.
    pub history_seed: Vec<String>,
    /// Custom profile file; the built-in profile is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: PromptConfig::default(),
            intro: IntroConfig::default(),
            timing: TimingConfig::default(),
            history_seed: vec!["about".into(), "exp".into(), "skills".into()],
            profile_path: None,
        }
    }
}

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

impl Config {
    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Config::default())
        }
    }

    /// Writes the commented default config to `path`.
    ///
    /// Refuses to overwrite an existing file.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}
