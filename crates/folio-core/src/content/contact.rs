use std::time::Duration;

use super::{ContentBlock, ContentContext, DisplayItem, Script, running_banner};
use crate::style::{Style, StyledLine};

/// `contact`: how to get in touch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contact;

impl ContentBlock for Contact {
    fn script(&self, ctx: &ContentContext<'_>) -> Script {
        let contact = &ctx.profile.contact;
        let items = vec![
            DisplayItem::from(StyledLine::single(format!("  {}", contact.intro), Style::Plain)),
            DisplayItem::from(
                StyledLine::single("  ", Style::Plain).push(contact.email.clone(), Style::Link),
            ),
        ];

        Script::new(items, Duration::from_millis(ctx.timing.contact_ms))
            .with_heading(vec![running_banner("contact")])
            .following_lines()
    }
}
