//! Transcript scrollbar with a stable thumb size.
//!
//! ratatui's built-in Scrollbar rounds both thumb ends separately, so the
//! thumb grows and shrinks while scrolling. This one computes the thumb
//! length once and positions it manually.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

/// Vertical scrollbar drawn on the right edge of its area.
#[derive(Debug, Clone)]
pub struct Scrollbar {
    total_lines: usize,
    viewport_height: usize,
    /// 0 = top.
    scroll_offset: usize,
}

impl Scrollbar {
    pub fn new(total_lines: usize, viewport_height: usize, scroll_offset: usize) -> Self {
        Self {
            total_lines,
            viewport_height,
            scroll_offset,
        }
    }

    /// Only shown when there is something to scroll.
    fn should_display(&self) -> bool {
        self.total_lines > self.viewport_height
    }

    /// Thumb `(start, len)` for a track of `track_len` cells.
    fn thumb(&self, track_len: usize) -> Option<(usize, usize)> {
        let max_scroll = self.total_lines.saturating_sub(self.viewport_height);
        if track_len == 0 || max_scroll == 0 {
            return None;
        }
        let viewport_len = self.viewport_height.min(track_len);

        // round(track * viewport / (total - 1 + viewport))
        let denom = self
            .total_lines
            .saturating_sub(1)
            .saturating_add(viewport_len) as u64;
        let thumb_len = if denom > 0 {
            let numerator = track_len as u64 * viewport_len as u64;
            (((numerator + denom / 2) / denom) as usize).clamp(1, track_len)
        } else {
            track_len
        };

        // Reaches the bottom exactly at max scroll.
        let available = track_len.saturating_sub(thumb_len);
        let offset = self.scroll_offset.min(max_scroll);
        let thumb_start = ((offset as u64 * available as u64) / max_scroll as u64) as usize;
        Some((thumb_start, thumb_len))
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.should_display() {
            return;
        }
        let Some((thumb_start, thumb_len)) = self.thumb(area.height as usize) else {
            return;
        };

        let x = area.x + area.width.saturating_sub(1);
        let thumb_style = Style::default().fg(Color::Gray);
        let track_style = Style::default().fg(Color::DarkGray);
        for (idx, y) in (area.y..area.y + area.height).enumerate() {
            if idx >= thumb_start && idx < thumb_start + thumb_len {
                buf.set_string(x, y, THUMB_SYMBOL, thumb_style);
            } else {
                buf.set_string(x, y, TRACK_SYMBOL, track_style);
            }
        }
    }
}
