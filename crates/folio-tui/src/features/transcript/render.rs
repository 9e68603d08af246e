//! Transcript rendering helpers: wrapping and style conversion.

use folio_core::style::{Style as TranscriptStyle, StyledLine};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::common::wrap_line;

/// Wraps every line to `width` columns.
pub fn wrap_lines(lines: &[StyledLine], width: usize) -> Vec<StyledLine> {
    lines.iter().flat_map(|line| wrap_line(line, width)).collect()
}

pub fn convert_styled_line(styled_line: StyledLine) -> Line<'static> {
    let spans: Vec<Span<'static>> = styled_line
        .spans
        .into_iter()
        .map(|span| Span::styled(span.text, convert_style(span.style)))
        .collect();
    Line::from(spans)
}

pub fn convert_style(style: TranscriptStyle) -> Style {
    match style {
        TranscriptStyle::Plain | TranscriptStyle::File | TranscriptStyle::CommandArgs => {
            Style::default()
        }
        TranscriptStyle::Headline => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TranscriptStyle::Caret => Style::default().fg(Color::Green),
        TranscriptStyle::Cursor => Style::default().add_modifier(Modifier::REVERSED),
        TranscriptStyle::PromptUser => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        TranscriptStyle::PromptSeparator => Style::default().fg(Color::White),
        TranscriptStyle::PromptPath => Style::default().fg(Color::Cyan),
        TranscriptStyle::CommandKnown => Style::default().fg(Color::Green),
        TranscriptStyle::CommandUnknown => Style::default().fg(Color::Red),
        TranscriptStyle::Banner => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TranscriptStyle::Strong => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        TranscriptStyle::Muted => Style::default().fg(Color::DarkGray),
        TranscriptStyle::Accent => Style::default().fg(Color::Cyan),
        TranscriptStyle::StatusDone => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TranscriptStyle::StatusActive => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TranscriptStyle::Error => Style::default().fg(Color::Red),
        TranscriptStyle::Link => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
        TranscriptStyle::Directory => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        TranscriptStyle::Quip => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::ITALIC),
    }
}
