use std::time::Duration;

use super::{ContentBlock, ContentContext, DisplayItem, Script};
use crate::command;
use crate::style::{Style, StyledLine};

/// `help`: the listed commands and what they do.
#[derive(Debug, Clone, Copy, Default)]
pub struct Help;

impl ContentBlock for Help {
    fn script(&self, ctx: &ContentContext<'_>) -> Script {
        let items = command::listed()
            .map(|def| {
                DisplayItem::from(
                    StyledLine::single("  • ", Style::Plain)
                        .push(def.name, Style::Accent)
                        .push(format!(" – {}", def.description), Style::Plain),
                )
            })
            .collect();

        Script::new(items, Duration::from_millis(ctx.timing.help_ms))
            .with_heading(vec![StyledLine::single("Available commands:", Style::Plain)])
            .following_lines()
    }
}
