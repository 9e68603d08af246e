use std::time::Duration;

use super::{ContentBlock, ContentContext, DisplayItem, Script};
use crate::style::{Style, StyledLine};

/// Shell commands visitors try out of habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasterEgg {
    Ls,
    Pwd,
}

fn entry(mode: &str, mode_style: Style, name: &str) -> DisplayItem {
    DisplayItem::from(
        StyledLine::single(mode, mode_style)
            .push("  ", Style::Plain)
            .push(name, Style::File),
    )
}

fn line(text: impl Into<String>, style: Style) -> DisplayItem {
    DisplayItem::from(StyledLine::single(text, style))
}

impl ContentBlock for EasterEgg {
    fn script(&self, ctx: &ContentContext<'_>) -> Script {
        let items = match self {
            EasterEgg::Ls => vec![
                line("total 8", Style::Muted),
                entry("drwx------", Style::Directory, "skills/"),
                entry("drwx------", Style::Directory, "experience/"),
                entry("-rw-------", Style::StatusDone, "README.md"),
                entry("-rw-------", Style::StatusDone, "contact_info.txt"),
                line("", Style::Plain),
                line("Oh, you tried 'ls'?", Style::Quip),
                line(
                    "This isn't actually a shell, but I appreciate the muscle memory.",
                    Style::Muted,
                ),
            ],
            EasterEgg::Pwd => vec![
                line(ctx.profile.shell.home.clone(), Style::Plain),
                line("", Style::Plain),
                line(
                    "Let me guess, checking if you're in the right directory?",
                    Style::Quip,
                ),
                line(
                    "Spoiler alert: you're exactly where you need to be.",
                    Style::Muted,
                ),
            ],
        };

        Script::new(items, Duration::from_millis(ctx.timing.easter_egg_ms)).following_lines()
    }
}
