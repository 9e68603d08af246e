use std::time::Duration;

use super::{ContentBlock, ContentContext, DisplayItem, Script};
use crate::style::{Style, StyledLine};

/// Response to an unrecognized command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    /// The full submitted line, arguments included.
    pub input: String,
}

impl NotFound {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl ContentBlock for NotFound {
    fn script(&self, ctx: &ContentContext<'_>) -> Script {
        let items = vec![
            DisplayItem::from(StyledLine::single(
                format!("Command not found: {}.", self.input),
                Style::Error,
            )),
            DisplayItem::from(
                StyledLine::single("Type ", Style::Plain)
                    .push("help", Style::Accent)
                    .push(".", Style::Plain),
            ),
        ];

        Script::new(items, Duration::from_millis(ctx.timing.not_found_ms)).following_lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_support::{Fixture, texts};

    #[test]
    fn test_echoes_full_input() {
        let fixture = Fixture::new();
        let script = NotFound::new("xyz foo").script(&fixture.ctx());
        assert_eq!(
            texts(&script.all_lines()),
            ["Command not found: xyz foo.", "Type help."]
        );
    }
}
