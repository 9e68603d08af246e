//! Input feature reducer: editing keys, history recall, submission.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::InputState;

/// What a key did to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Enter with a non-blank line.
    Submit(String),
    /// Text, cursor, or history position changed (or Enter on a blank line).
    Edited,
    /// Not an input key.
    Ignored,
}

/// Parsed modifiers for cleaner pattern matching.
struct Modifiers {
    ctrl: bool,
    alt: bool,
    shift: bool,
}

impl Modifiers {
    fn from(key: &KeyEvent) -> Self {
        Self {
            ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
            alt: key.modifiers.contains(KeyModifiers::ALT),
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
        }
    }

    fn none(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift
    }

    fn only_ctrl(&self) -> bool {
        self.ctrl && !self.alt && !self.shift
    }

    fn only_alt(&self) -> bool {
        self.alt && !self.ctrl && !self.shift
    }
}

/// Handles a key while the prompt is accepting input.
pub fn handle_key(input: &mut InputState, key: KeyEvent) -> InputAction {
    if matches!(key.kind, KeyEventKind::Release) {
        return InputAction::Ignored;
    }
    let mods = Modifiers::from(&key);

    handle_line_editing(input, key.code, &mods)
        .or_else(|| handle_word_editing(input, key.code, &mods))
        .or_else(|| handle_history(input, key.code, &mods))
        .or_else(|| handle_submission(input, key.code))
        .unwrap_or_else(|| {
            if input.buffer.input(key) {
                InputAction::Edited
            } else {
                InputAction::Ignored
            }
        })
}

/// Pastes at the cursor.
pub fn handle_paste(input: &mut InputState, text: &str) {
    input.buffer.insert_str(text);
}

// Ctrl+A, Ctrl+E, Ctrl+U, Ctrl+K
fn handle_line_editing(
    input: &mut InputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<InputAction> {
    if !mods.only_ctrl() {
        return None;
    }
    let buffer = &mut input.buffer;
    match code {
        KeyCode::Char('a') => buffer.move_head(),
        KeyCode::Char('e') => buffer.move_end(),
        KeyCode::Char('u') => buffer.delete_to_head(),
        KeyCode::Char('k') => buffer.delete_to_end(),
        KeyCode::Char('w') | KeyCode::Backspace => buffer.delete_word_left(),
        KeyCode::Left => buffer.move_word_left(),
        KeyCode::Right => buffer.move_word_right(),
        _ => return None,
    }
    Some(InputAction::Edited)
}

// Alt+B, Alt+F, Alt+Backspace, Alt+Left/Right
fn handle_word_editing(
    input: &mut InputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<InputAction> {
    if !mods.only_alt() {
        return None;
    }
    let buffer = &mut input.buffer;
    match code {
        KeyCode::Char('b') | KeyCode::Left => buffer.move_word_left(),
        KeyCode::Char('f') | KeyCode::Right => buffer.move_word_right(),
        KeyCode::Backspace => buffer.delete_word_left(),
        _ => return None,
    }
    Some(InputAction::Edited)
}

fn handle_history(input: &mut InputState, code: KeyCode, mods: &Modifiers) -> Option<InputAction> {
    if !mods.none() {
        return None;
    }
    match code {
        KeyCode::Up => input.navigate_up(),
        KeyCode::Down => input.navigate_down(),
        _ => return None,
    }
    Some(InputAction::Edited)
}

fn handle_submission(input: &mut InputState, code: KeyCode) -> Option<InputAction> {
    if code != KeyCode::Enter {
        return None;
    }
    Some(match input.take_submission() {
        Some(line) => InputAction::Submit(line),
        None => InputAction::Edited,
    })
}
