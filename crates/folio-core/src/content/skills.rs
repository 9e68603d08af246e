use std::time::Duration;

use super::{ContentBlock, ContentContext, DisplayItem, Script};
use crate::style::{Style, StyledLine};

/// `skills`: core competencies, revealed quickly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Skills;

impl ContentBlock for Skills {
    fn script(&self, ctx: &ContentContext<'_>) -> Script {
        let items = ctx
            .profile
            .skills
            .iter()
            .map(|skill| {
                DisplayItem::from(StyledLine::single(format!("  - {skill}"), Style::Plain))
            })
            .collect();

        Script::new(items, Duration::from_millis(ctx.timing.skills_ms))
            .with_heading(vec![StyledLine::single("Core Competencies:", Style::Banner)])
    }
}
