use std::time::Duration;

use super::{ContentBlock, ContentContext, DisplayItem, Script, running_banner};
use crate::profile::ProjectStatus;
use crate::style::{Style, StyledLine};

/// Project list played by the intro.
#[derive(Debug, Clone, Copy, Default)]
pub struct Projects;

impl ContentBlock for Projects {
    fn script(&self, ctx: &ContentContext<'_>) -> Script {
        let items = ctx
            .profile
            .projects
            .iter()
            .map(|project| {
                let status_style = match project.status {
                    ProjectStatus::Done => Style::StatusDone,
                    ProjectStatus::Active => Style::StatusActive,
                };
                DisplayItem::new(vec![
                    StyledLine::single(project.title.clone(), Style::Strong)
                        .push("    [", Style::Plain)
                        .push(project.status.label(), status_style)
                        .push("]", Style::Plain),
                    StyledLine::single(format!("  {}", project.description), Style::Muted),
                    StyledLine::empty(),
                ])
            })
            .collect();

        Script::new(items, Duration::from_millis(ctx.timing.projects_ms))
            .with_heading(vec![running_banner("projects"), StyledLine::empty()])
    }
}
