//! Command content blocks.
//!
//! Every block implements [`ContentBlock`]: it turns the profile into a
//! [`Script`] of typed lines, an immediate heading, and an ordered list of
//! items to reveal. [`crate::playback::Playback`] is the one engine that
//! plays any script.

mod about;
mod contact;
mod easter_egg;
mod experience;
mod help;
mod not_found;
mod projects;
mod skills;

use std::time::Duration;

use chrono::NaiveDate;

pub use about::About;
pub use contact::Contact;
pub use easter_egg::EasterEgg;
pub use experience::Experience;
pub use help::Help;
pub use not_found::NotFound;
pub use projects::Projects;
pub use skills::Skills;

use crate::config::TimingConfig;
use crate::profile::Profile;
use crate::style::{Style, StyledLine};

/// Inputs shared by every block.
#[derive(Debug, Clone, Copy)]
pub struct ContentContext<'a> {
    pub profile: &'a Profile,
    pub timing: &'a TimingConfig,
    /// Stands in for "present" in experience periods.
    pub today: NaiveDate,
}

/// A line typed out character by character before the reveal starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedLine {
    pub text: String,
    pub style: Style,
    pub interval: Duration,
}

/// One revealed unit; may span several terminal lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayItem {
    pub lines: Vec<StyledLine>,
}

impl DisplayItem {
    pub fn new(lines: Vec<StyledLine>) -> Self {
        Self { lines }
    }
}

impl From<StyledLine> for DisplayItem {
    fn from(line: StyledLine) -> Self {
        Self { lines: vec![line] }
    }
}

/// Everything a block shows, in order: typed lines, heading, items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub typed: Vec<TypedLine>,
    /// Shown as soon as the reveal starts.
    pub heading: Vec<StyledLine>,
    pub items: Vec<DisplayItem>,
    /// Delay between revealed items.
    pub interval: Duration,
    /// Request a scroll-to-bottom after each revealed item.
    pub follow_lines: bool,
}

impl Script {
    pub fn new(items: Vec<DisplayItem>, interval: Duration) -> Self {
        Self {
            typed: Vec::new(),
            heading: Vec::new(),
            items,
            interval,
            follow_lines: false,
        }
    }

    #[must_use]
    pub fn with_typed(mut self, typed: Vec<TypedLine>) -> Self {
        self.typed = typed;
        self
    }

    #[must_use]
    pub fn with_heading(mut self, heading: Vec<StyledLine>) -> Self {
        self.heading = heading;
        self
    }

    #[must_use]
    pub fn following_lines(mut self) -> Self {
        self.follow_lines = true;
        self
    }

    /// Fully rendered output, as shown once playback has finished.
    pub fn all_lines(&self) -> Vec<StyledLine> {
        let typed = self
            .typed
            .iter()
            .map(|line| StyledLine::single(line.text.clone(), line.style));
        typed
            .chain(self.heading.iter().cloned())
            .chain(self.items.iter().flat_map(|item| item.lines.iter().cloned()))
            .collect()
    }
}

/// A command's content.
pub trait ContentBlock {
    fn script(&self, ctx: &ContentContext<'_>) -> Script;
}

/// Content selected by a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    About,
    Experience,
    Projects,
    Skills,
    Contact,
    Help,
    Ls,
    Pwd,
    NotFound { input: String },
}

impl Block {
    pub fn script(&self, ctx: &ContentContext<'_>) -> Script {
        match self {
            Block::About => About.script(ctx),
            Block::Experience => Experience.script(ctx),
            Block::Projects => Projects.script(ctx),
            Block::Skills => Skills.script(ctx),
            Block::Contact => Contact.script(ctx),
            Block::Help => Help.script(ctx),
            Block::Ls => EasterEgg::Ls.script(ctx),
            Block::Pwd => EasterEgg::Pwd.script(ctx),
            Block::NotFound { input } => NotFound::new(input.clone()).script(ctx),
        }
    }
}

/// `Running: "name"...` banner that opens several blocks.
pub(crate) fn running_banner(name: &str) -> StyledLine {
    StyledLine::single(format!("Running: \"{name}\"..."), Style::Banner)
}
