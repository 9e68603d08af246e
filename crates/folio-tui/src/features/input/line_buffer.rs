//! Single-line edit buffer with a character-index cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The text typed at the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    /// Cursor position in chars, `0..=len`.
    cursor: usize,
}

impl LineBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replaces the text and puts the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = single_line(text);
        self.cursor = self.len();
    }

    /// Empties the buffer, returning what it held.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Inserts at the cursor; line breaks and tabs become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let text = single_line(text);
        if text.is_empty() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert_str(byte_idx, &text);
        self.cursor += text.chars().count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Backspace.
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.delete_range(self.cursor - 1, self.cursor);
        self.cursor -= 1;
    }

    /// Delete.
    pub fn delete_next_char(&mut self) {
        if self.cursor < self.len() {
            self.delete_range(self.cursor, self.cursor + 1);
        }
    }

    /// Ctrl+U.
    pub fn delete_to_head(&mut self) {
        self.delete_range(0, self.cursor);
        self.cursor = 0;
    }

    /// Ctrl+K.
    pub fn delete_to_end(&mut self) {
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.truncate(byte_idx);
    }

    /// Ctrl+W: deletes the word segment left of the cursor.
    pub fn delete_word_left(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let start = scan_left_segment(&chars, self.cursor);
        self.delete_range(start, self.cursor);
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_head(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn move_word_left(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        self.cursor = scan_left_segment(&chars, self.cursor);
    }

    pub fn move_word_right(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        self.cursor = scan_right_segment(&chars, self.cursor);
    }

    /// Handles plain editing keys. Returns `false` for keys it ignores.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(ch);
            }
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_head(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let start = char_to_byte_index(&self.text, start);
        let end = char_to_byte_index(&self.text, end);
        self.text.replace_range(start..end, "");
    }
}

fn single_line(text: &str) -> String {
    text.replace("\r\n", " ")
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CharClass {
    Whitespace,
    Word,
    Punct,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if is_word_char(c) {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

fn scan_left_segment(chars: &[char], mut idx: usize) -> usize {
    idx = idx.min(chars.len());
    if idx == 0 {
        return 0;
    }
    let class = char_class(chars[idx - 1]);
    while idx > 0 && char_class(chars[idx - 1]) == class {
        idx -= 1;
    }
    idx
}

fn scan_right_segment(chars: &[char], mut idx: usize) -> usize {
    if idx >= chars.len() {
        return chars.len();
    }
    let class = char_class(chars[idx]);
    while idx < chars.len() && char_class(chars[idx]) == class {
        idx += 1;
    }
    idx
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(i, _)| i)
}
