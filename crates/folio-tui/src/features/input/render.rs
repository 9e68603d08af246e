//! The live prompt row.

use std::time::{Duration, Instant};

use folio_core::config::PromptConfig;
use folio_core::prompt;
use folio_core::style::{CARET, Style, StyledLine, StyledSpan};

use super::LineBuffer;

/// Half-period of the caret blink.
pub const CARET_BLINK: Duration = Duration::from_millis(530);

/// Blink phase at `now`; the caret is solid for the first half-period after
/// the last edit.
pub fn caret_visible(since: Instant, now: Instant) -> bool {
    let elapsed = now.saturating_duration_since(since).as_millis();
    (elapsed / CARET_BLINK.as_millis()) % 2 == 0
}

/// Prompt, coloured input, and the caret.
///
/// At the end of the line the caret is a block glyph; inside the line the
/// character under it takes [`Style::Cursor`].
pub fn prompt_line(config: &PromptConfig, buffer: &LineBuffer, caret_on: bool) -> StyledLine {
    let line = prompt::echo(config, buffer.text());
    if !caret_on {
        return line;
    }

    let prefix_chars: usize = prompt::prefix(config)
        .spans
        .iter()
        .map(|s| s.text.chars().count())
        .sum();
    let target = prefix_chars + buffer.cursor();

    let mut out = StyledLine::empty();
    let mut seen = 0;
    let mut placed = false;
    for span in line.spans {
        let len = span.text.chars().count();
        if placed || target >= seen + len {
            seen += len;
            out.spans.push(span);
            continue;
        }
        let at = target - seen;
        let before: String = span.text.chars().take(at).collect();
        let under: String = span.text.chars().skip(at).take(1).collect();
        let after: String = span.text.chars().skip(at + 1).collect();
        for (text, style) in [(before, span.style), (under, Style::Cursor), (after, span.style)] {
            if !text.is_empty() {
                out.spans.push(StyledSpan::new(text, style));
            }
        }
        seen += len;
        placed = true;
    }
    if !placed {
        out.spans.push(StyledSpan::new(CARET, Style::Caret));
    }
    out
}
