//! Portfolio content: who the visitor is reading about.
//!
//! The profile is plain data. It ships embedded as `default_profile.toml`
//! and can be replaced by a user file via `profile_path` or `--profile`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::dates::PeriodEnd;

/// Static portfolio content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Two lines typed at the start of the intro.
    pub intro: Vec<String>,
    /// Paragraph lines revealed by `about`.
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub contact: Contact,
    #[serde(default)]
    pub shell: Shell,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default, rename = "project")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    #[serde(default = "default_contact_intro")]
    pub intro: String,
    pub email: String,
}

/// Text used by the shell easter eggs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Shell {
    /// Directory printed by `pwd`.
    pub home: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            home: "/home/portfolio".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub employment: String,
    pub from: NaiveDate,
    pub to: PeriodEnd,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    Done,
    Active,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Done => "DONE",
            ProjectStatus::Active => "ACTIVE",
        }
    }
}

fn default_contact_intro() -> String {
    "You can reach me at:".to_string()
}

fn builtin_template() -> &'static str {
    include_str!("../default_profile.toml")
}

impl Profile {
    /// The profile shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(builtin_template()).context("Failed to parse built-in profile")
    }

    /// Loads a profile from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse profile: {}", path.display()))
    }

    /// Loads `path` when given, the built-in profile otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::builtin(),
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let profile: Profile = toml::from_str(contents)?;
        if profile.intro.is_empty() {
            anyhow::bail!("Profile must have at least one intro line");
        }
        Ok(profile)
    }

    /// First intro line (the "I am ..." headline).
    pub fn headline(&self) -> &str {
        self.intro.first().map_or("", String::as_str)
    }

    /// Second intro line, empty when the profile only has one.
    pub fn tagline(&self) -> &str {
        self.intro.get(1).map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_builtin_profile_parses() {
        let profile = Profile::builtin().unwrap();
        assert_eq!(profile.headline(), "I am Ada Example");
        assert_eq!(profile.tagline(), "and I like to build stuff...");
        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].to, PeriodEnd::Present);
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.projects[2].status, ProjectStatus::Active);
        assert!(!profile.skills.is_empty());
    }

    #[test]
    fn test_minimal_profile_uses_defaults() {
        let profile = Profile::parse(
            r#"
            name = "X"
            intro = ["I am X"]
            [contact]
            email = "x@example.com"
            "#,
        )
        .unwrap();
        assert_eq!(profile.tagline(), "");
        assert_eq!(profile.contact.intro, "You can reach me at:");
        assert_eq!(profile.shell.home, "/home/portfolio");
        assert!(profile.projects.is_empty());
    }

    #[test]
    fn test_empty_intro_is_rejected() {
        let err = Profile::parse(
            r#"
            name = "X"
            intro = []
            [contact]
            email = "x@example.com"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("intro"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            name = "Y"
            intro = ["I am Y", "hello"]
            [contact]
            email = "y@example.com"
            [[experience]]
            company = "Acme"
            role = "Dev"
            employment = "Contract"
            from = "2020-01-01"
            to = "2021-03-01"
            "#
        )
        .unwrap();

        let profile = Profile::load(Some(file.path())).unwrap();
        assert_eq!(profile.name, "Y");
        assert_eq!(
            profile.experience[0].to,
            PeriodEnd::Date(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap())
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Profile::load_from(Path::new("/nonexistent/profile.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/profile.toml"));
    }
}
