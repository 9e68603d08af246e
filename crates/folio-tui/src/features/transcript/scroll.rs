//! Transcript scroll state.

/// Scroll mode for the transcript pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Keep the newest line in view.
    FollowLatest,
    /// User scrolled manually; offset is the first visible line.
    Anchored { offset: usize },
}

/// Scroll mode plus the line count it is measured against.
///
/// The line count is refreshed by the reducer on every frame, so the math
/// here always matches what the renderer is about to draw.
#[derive(Debug, Clone)]
pub struct ScrollState {
    pub mode: ScrollMode,
    pub cached_line_count: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            mode: ScrollMode::FollowLatest,
            cached_line_count: 0,
        }
    }
}

impl ScrollState {
    pub fn is_following(&self) -> bool {
        matches!(self.mode, ScrollMode::FollowLatest)
    }

    /// First visible line for a viewport of `viewport_height` rows.
    pub fn get_offset(&self, viewport_height: usize) -> usize {
        self.offset_for(self.cached_line_count, viewport_height)
    }

    /// Like [`Self::get_offset`], against a freshly measured line count.
    pub fn offset_for(&self, total_lines: usize, viewport_height: usize) -> usize {
        let max_offset = total_lines.saturating_sub(viewport_height);
        match self.mode {
            ScrollMode::FollowLatest => max_offset,
            ScrollMode::Anchored { offset } => offset.min(max_offset),
        }
    }

    pub fn scroll_up(&mut self, lines: usize, viewport_height: usize) {
        let offset = self.get_offset(viewport_height).saturating_sub(lines);
        self.mode = ScrollMode::Anchored { offset };
    }

    /// Returns to follow mode once the bottom is reached.
    pub fn scroll_down(&mut self, lines: usize, viewport_height: usize) {
        if self.is_following() {
            return;
        }
        let max_offset = self.cached_line_count.saturating_sub(viewport_height);
        let offset = (self.get_offset(viewport_height) + lines).min(max_offset);
        self.mode = if offset >= max_offset {
            ScrollMode::FollowLatest
        } else {
            ScrollMode::Anchored { offset }
        };
    }

    pub fn page_up(&mut self, viewport_height: usize) {
        self.scroll_up(viewport_height.max(1), viewport_height);
    }

    pub fn page_down(&mut self, viewport_height: usize) {
        self.scroll_down(viewport_height.max(1), viewport_height);
    }

    pub fn scroll_to_top(&mut self) {
        self.mode = ScrollMode::Anchored { offset: 0 };
    }

    pub fn scroll_to_bottom(&mut self) {
        self.mode = ScrollMode::FollowLatest;
    }

    pub fn set_line_count(&mut self, line_count: usize) {
        self.cached_line_count = line_count;
    }

    /// Back to an empty, following transcript (after `clear`).
    pub fn reset(&mut self) {
        self.mode = ScrollMode::FollowLatest;
        self.cached_line_count = 0;
    }
}
