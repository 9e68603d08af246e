//! Text measuring and wrapping for terminal output.

use folio_core::style::{StyledLine, StyledSpan};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates to `max_width` terminal columns, ending with `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Hard-wraps a styled line at `width` columns, keeping span styles.
///
/// Wraps by character, the way a terminal does; an empty line stays one
/// empty line.
pub fn wrap_line(line: &StyledLine, width: usize) -> Vec<StyledLine> {
    if width == 0 || line.spans.iter().map(|s| s.text.width()).sum::<usize>() <= width {
        return vec![line.clone()];
    }

    let mut rows = Vec::new();
    let mut row = StyledLine::empty();
    let mut row_width = 0;

    for span in &line.spans {
        let mut chunk = String::new();
        for ch in span.text.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if row_width + ch_width > width && row_width > 0 {
                if !chunk.is_empty() {
                    row.spans
                        .push(StyledSpan::new(std::mem::take(&mut chunk), span.style));
                }
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            chunk.push(ch);
            row_width += ch_width;
        }
        if !chunk.is_empty() {
            row.spans.push(StyledSpan::new(chunk, span.style));
        }
    }
    if !row.spans.is_empty() {
        rows.push(row);
    }
    rows
}
