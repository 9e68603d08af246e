//! Pure view functions.
//!
//! `render` takes `&AppState`, draws into a ratatui frame, and never
//! mutates state or returns effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::common::Scrollbar;
use crate::state::AppState;
use crate::statusline::render_debug_status_line;
use crate::transcript::convert_styled_line;

/// Height of the debug status line (when enabled).
const DEBUG_STATUS_HEIGHT: u16 = 1;

/// Padding on each side of the transcript.
pub const TRANSCRIPT_MARGIN: u16 = 1;

/// Column reserved for the scrollbar, keeping a gap after the text.
const SCROLLBAR_WIDTH: u16 = 1;

/// Size of the transcript text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

/// Transcript text area for a terminal of `width` x `height`.
pub fn transcript_viewport(width: u16, height: u16, show_debug_status: bool) -> Viewport {
    let debug = if show_debug_status {
        DEBUG_STATUS_HEIGHT
    } else {
        0
    };
    Viewport {
        width: width.saturating_sub(TRANSCRIPT_MARGIN * 2 + SCROLLBAR_WIDTH) as usize,
        height: height.saturating_sub(debug) as usize,
    }
}

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let constraints = if app.show_debug_status {
        vec![Constraint::Min(1), Constraint::Length(DEBUG_STATUS_HEIGHT)]
    } else {
        vec![Constraint::Min(1)]
    };
    let chunks = Layout::vertical(constraints).split(area);

    let viewport = transcript_viewport(area.width, area.height, app.show_debug_status);
    let lines = app.wrapped_lines(viewport.width);
    let total_lines = lines.len();
    let offset = app
        .transcript
        .scroll
        .offset_for(total_lines, viewport.height);

    // Content is pre-wrapped; no Paragraph::wrap here.
    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(offset)
        .take(viewport.height)
        .map(convert_styled_line)
        .collect();

    let transcript_area = Rect {
        x: chunks[0].x + TRANSCRIPT_MARGIN,
        y: chunks[0].y,
        width: chunks[0]
            .width
            .saturating_sub(TRANSCRIPT_MARGIN * 2 + SCROLLBAR_WIDTH),
        height: chunks[0].height,
    };
    frame.render_widget(Paragraph::new(visible), transcript_area);
    frame.render_widget(
        Scrollbar::new(total_lines, viewport.height, offset),
        chunks[0],
    );

    if app.show_debug_status {
        let status = app.status_line.snapshot();
        render_debug_status_line(&status, app.activity(), frame, chunks[1]);
    }
}
