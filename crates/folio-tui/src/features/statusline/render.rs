//! Status line rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::StatusLine;
use crate::common::truncate_with_ellipsis;

/// Renders `fps · frame time · frames · <activity>` into a single row.
pub fn render_debug_status_line(
    status: &StatusLine,
    activity: &str,
    frame: &mut Frame,
    area: Rect,
) {
    let text = format!(
        " {:.1} fps · {} ms · {} frames · {}",
        status.fps, status.frame_ms, status.frames, activity
    );
    let text = truncate_with_ellipsis(&text, area.width as usize);
    let line = Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(line), area);
}
