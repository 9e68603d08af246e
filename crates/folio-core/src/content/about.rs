use std::time::Duration;

use super::{ContentBlock, ContentContext, DisplayItem, Script, TypedLine};
use crate::style::{Style, StyledLine};

/// `about`: retypes the intro headline, then reveals the summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct About;

impl ContentBlock for About {
    fn script(&self, ctx: &ContentContext<'_>) -> Script {
        let type_interval = Duration::from_millis(ctx.timing.type_ms);
        let typed = ctx
            .profile
            .intro
            .iter()
            .take(2)
            .map(|text| TypedLine {
                text: text.clone(),
                style: Style::Headline,
                interval: type_interval,
            })
            .collect();

        let items = ctx
            .profile
            .summary
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                let style = if idx == 0 { Style::Plain } else { Style::Muted };
                DisplayItem::from(StyledLine::single(line.clone(), style))
            })
            .collect();

        Script::new(items, Duration::from_millis(ctx.timing.about_ms))
            .with_typed(typed)
            .with_heading(vec![StyledLine::empty()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::test_support::{Fixture, texts};

    #[test]
    fn test_types_intro_then_reveals_summary() {
        let fixture = Fixture::new();
        let script = About.script(&fixture.ctx());

        let typed: Vec<_> = script.typed.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(typed, ["I am Ada Example", "and I like to build stuff..."]);
        assert_eq!(script.typed[0].interval, Duration::from_millis(50));
        assert_eq!(script.items.len(), fixture.profile.summary.len());
        assert_eq!(script.interval, Duration::from_millis(120));
        assert!(!script.follow_lines);

        let all = texts(&script.all_lines());
        assert_eq!(all[2], "");
        assert!(all[3].starts_with("Hi, I'm a full-stack developer"));
    }
}
