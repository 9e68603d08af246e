//! Input state: the edit buffer plus command history.

use folio_core::history::History;

use super::LineBuffer;

#[derive(Debug, Clone)]
pub struct InputState {
    pub buffer: LineBuffer,
    pub history: History,
}

impl InputState {
    pub fn new(history_seed: &[String]) -> Self {
        Self {
            buffer: LineBuffer::default(),
            history: History::new(history_seed.iter().cloned()),
        }
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Recalls the previous history entry, if any.
    pub fn navigate_up(&mut self) {
        if let Some(entry) = self.history.older() {
            let entry = entry.to_string();
            self.buffer.set_text(&entry);
        }
    }

    /// Recalls the next entry; past the newest one the line is cleared.
    pub fn navigate_down(&mut self) {
        if let Some(entry) = self.history.newer() {
            let entry = entry.to_string();
            self.buffer.set_text(&entry);
        }
    }

    /// Takes the trimmed line for submission; `None` when it is blank.
    ///
    /// The buffer is emptied and history navigation ends either way.
    pub fn take_submission(&mut self) -> Option<String> {
        self.history.reset_navigation();
        let text = self.buffer.take();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
