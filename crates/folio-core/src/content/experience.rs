use std::time::Duration;

use super::{ContentBlock, ContentContext, DisplayItem, Script, running_banner};
use crate::dates::{format_duration, format_period};
use crate::style::{Style, StyledLine};

/// `exp`: work history with computed durations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Experience;

impl ContentBlock for Experience {
    fn script(&self, ctx: &ContentContext<'_>) -> Script {
        let items = ctx
            .profile
            .experience
            .iter()
            .map(|exp| {
                let period = format!(
                    "{} · {}",
                    format_period(exp.from, exp.to),
                    format_duration(exp.from, exp.to, ctx.today)
                );
                let mut lines = vec![
                    StyledLine::single(format!("  {}", exp.role), Style::Strong)
                        .push(format!(" @ {}", exp.company), Style::Accent),
                    StyledLine::single(format!("  {} · {period}", exp.employment), Style::Muted),
                ];
                if !exp.description.is_empty() {
                    lines.push(StyledLine::single(
                        format!("  {}", exp.description),
                        Style::Muted,
                    ));
                }
                lines.push(StyledLine::empty());
                DisplayItem::new(lines)
            })
            .collect();

        Script::new(items, Duration::from_millis(ctx.timing.experience_ms))
            .with_heading(vec![running_banner("experience"), StyledLine::empty()])
    }
}
