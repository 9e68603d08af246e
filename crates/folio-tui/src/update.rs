//! Reducer: `(state, event) -> effects`.
//!
//! All state transitions happen here. Effects are handed back to the
//! runtime; nothing in this module touches the terminal or the clock.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use folio_core::dispatch::Dispatch;
use folio_core::playback::Playback;
use folio_core::prompt;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::input::{self, InputAction};
use crate::render;
use crate::state::AppState;

/// Lines scrolled per mouse wheel notch.
const MOUSE_SCROLL_LINES: usize = 3;

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let effects = match event {
        UiEvent::Frame { width, height, now } => {
            handle_frame(app, width, height, now);
            Vec::new()
        }
        UiEvent::Tick { now } => {
            handle_tick(app, now);
            Vec::new()
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
    };
    sync_line_count(app);
    effects
}

fn handle_frame(app: &mut AppState, width: u16, height: u16, now: Instant) {
    app.now = now;
    let viewport = render::transcript_viewport(width, height, app.show_debug_status);
    app.transcript_width = viewport.width;
    app.transcript.viewport_height = viewport.height;
}

fn handle_tick(app: &mut AppState, now: Instant) {
    app.now = now;

    // The prompt comes back below a replayed intro; bring it into view.
    if app.intro.poll(now) {
        tracing::debug!("prompt handed over after intro");
        app.transcript.scroll.scroll_to_bottom();
    }

    let outcome = app.transcript.poll(now);
    if outcome.follow {
        app.transcript.scroll.scroll_to_bottom();
    }
    for ticket in outcome.finished {
        if app.dispatcher.complete(ticket) {
            tracing::debug!(ticket = ticket.0, "command finished");
        }
    }
}

/// Keeps the scroll math in step with what the renderer will draw.
fn sync_line_count(app: &mut AppState) {
    let count = app.wrapped_lines(app.transcript_width).len();
    app.transcript.scroll.set_line_count(count);
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            Vec::new()
        }
        Event::Paste(text) => {
            if app.input_visible() {
                input::handle_paste(&mut app.input, &text);
                app.caret_epoch = app.now;
            }
            Vec::new()
        }
        // The size arrives with the next Frame.
        _ => Vec::new(),
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if matches!(key.kind, KeyEventKind::Release) {
        return Vec::new();
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return vec![UiEffect::Quit],
        KeyCode::F(2) => {
            app.show_debug_status = !app.show_debug_status;
            return Vec::new();
        }
        _ => {}
    }

    // Any other key skips a running intro.
    if app.intro.is_running() {
        if app.intro.skip(app.now) {
            tracing::debug!("intro skipped by key");
        }
        return Vec::new();
    }

    if handle_scroll_key(app, key.code, ctrl) {
        return Vec::new();
    }

    if !app.input_visible() {
        return Vec::new();
    }

    match key.code {
        KeyCode::Char('d') if ctrl => {
            if app.input.buffer.is_empty() {
                return vec![UiEffect::Quit];
            }
            app.input.buffer.delete_next_char();
            app.caret_epoch = app.now;
            return Vec::new();
        }
        KeyCode::Char('l') if ctrl => {
            clear(app);
            return Vec::new();
        }
        _ => {}
    }

    match input::handle_key(&mut app.input, key) {
        InputAction::Submit(line) => {
            app.caret_epoch = app.now;
            submit(app, &line)
        }
        InputAction::Edited => {
            app.caret_epoch = app.now;
            Vec::new()
        }
        InputAction::Ignored => Vec::new(),
    }
}

/// PgUp/PgDn always scroll; Home/End scroll while the prompt is hidden and
/// with Ctrl otherwise, since the prompt uses them for the cursor.
fn handle_scroll_key(app: &mut AppState, code: KeyCode, ctrl: bool) -> bool {
    let viewport = app.transcript.viewport_height;
    let home_end_scrolls = ctrl || !app.input_visible();
    let scroll = &mut app.transcript.scroll;
    match code {
        KeyCode::PageUp => scroll.page_up(viewport),
        KeyCode::PageDown => scroll.page_down(viewport),
        KeyCode::Home if home_end_scrolls => scroll.scroll_to_top(),
        KeyCode::End if home_end_scrolls => scroll.scroll_to_bottom(),
        _ => return false,
    }
    true
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let skips = matches!(
        mouse.kind,
        MouseEventKind::Down(_) | MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
    );
    if app.intro.is_running() {
        if skips && app.intro.skip(app.now) {
            tracing::debug!(kind = ?mouse.kind, "intro skipped by pointer");
        }
        return;
    }

    let viewport = app.transcript.viewport_height;
    let scroll = &mut app.transcript.scroll;
    match mouse.kind {
        MouseEventKind::ScrollUp => scroll.scroll_up(MOUSE_SCROLL_LINES, viewport),
        MouseEventKind::ScrollDown => scroll.scroll_down(MOUSE_SCROLL_LINES, viewport),
        _ => {}
    }
}

/// Echo, dispatch, then record in history.
fn submit(app: &mut AppState, line: &str) -> Vec<UiEffect> {
    let echo = prompt::echo(&app.config.prompt, line);
    app.transcript.push_echo(echo);
    app.transcript.scroll.scroll_to_bottom();

    let effects = match app.dispatcher.submit(line) {
        Some(Dispatch::Play { block, ticket }) => {
            let script = block.script(&app.content_context());
            let playback = Playback::animated(script, app.now);
            app.transcript.push_output(playback, ticket);
            Vec::new()
        }
        Some(Dispatch::Clear) => {
            clear(app);
            Vec::new()
        }
        Some(Dispatch::Repeat) => {
            app.intro.replay(app.now);
            app.transcript.scroll.scroll_to_top();
            Vec::new()
        }
        Some(Dispatch::Exit) => vec![UiEffect::Quit],
        None => Vec::new(),
    };

    app.input.history.push(line);
    effects
}

/// Empties the transcript, hides the intro, and drops any running playback.
fn clear(app: &mut AppState) {
    app.transcript.clear();
    app.intro.hide();
    app.dispatcher.reset();
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyEventState, MouseButton};
    use folio_core::config::Config;

    use super::*;
    use crate::state::test_support::{app, app_with, texts};

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(ch: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )))
    }

    fn type_line(app: &mut AppState, text: &str) -> Vec<UiEffect> {
        for ch in text.chars() {
            update(app, key(KeyCode::Char(ch)));
        }
        update(app, key(KeyCode::Enter))
    }

    /// Ticks every 10ms for `duration`, starting at `app.now`.
    fn run_for(app: &mut AppState, duration: Duration) {
        let start = app.now;
        let mut elapsed = Duration::ZERO;
        while elapsed <= duration {
            update(app, UiEvent::Tick { now: start + elapsed });
            elapsed += Duration::from_millis(10);
        }
    }

    fn frame(app: &mut AppState, width: u16, height: u16) {
        let now = app.now;
        update(app, UiEvent::Frame { width, height, now });
    }

    #[test]
    fn test_submit_echoes_dispatches_and_records_history() {
        let mut app = app(Instant::now());
        let history_before = app.input.history.len();

        type_line(&mut app, "about");

        assert!(app.dispatcher.is_busy());
        assert!(!app.input_visible());
        assert_eq!(texts(&app)[0], "visitor@portfolio:~$ about");
        assert_eq!(app.input.history.len(), history_before + 1);
        assert_eq!(
            app.input.history.entries().last().map(String::as_str),
            Some("about")
        );
    }

    #[test]
    fn test_empty_submit_is_a_no_op() {
        let mut app = app(Instant::now());
        let history_before = app.input.history.len();
        type_line(&mut app, "   ");
        assert!(app.transcript.entries().is_empty());
        assert_eq!(app.input.history.len(), history_before);
    }

    #[test]
    fn test_busy_ignores_keys_until_playback_finishes() {
        let mut app = app(Instant::now());
        type_line(&mut app, "skills");
        let entries = app.transcript.entries().len();

        type_line(&mut app, "help");
        assert_eq!(app.transcript.entries().len(), entries);

        run_for(&mut app, Duration::from_secs(3));
        assert!(!app.dispatcher.is_busy());
        assert!(app.input_visible());
        assert!(texts(&app).last().is_some_and(|l| l.starts_with("visitor@portfolio")));
    }

    #[test]
    fn test_not_found_blocks_until_revealed() {
        let mut app = app(Instant::now());
        type_line(&mut app, "xyz");
        assert!(app.dispatcher.is_busy());
        run_for(&mut app, Duration::from_secs(1));
        assert!(!app.dispatcher.is_busy());
        let lines = texts(&app);
        assert!(lines.iter().any(|l| l.contains("Command not found: xyz.")));
    }

    #[test]
    fn test_clear_empties_transcript_and_hides_intro() {
        let t0 = Instant::now();
        let mut app = app_with(Config::default(), t0);
        update(&mut app, key(KeyCode::Esc));
        run_for(&mut app, Duration::from_millis(200));
        assert!(app.input_visible());

        type_line(&mut app, "clear");
        assert!(app.transcript.entries().is_empty());
        assert!(!app.intro.is_visible());
        assert_eq!(texts(&app), ["visitor@portfolio:~$ █"]);
        assert_eq!(
            app.input.history.entries().last().map(String::as_str),
            Some("clear")
        );
    }

    #[test]
    fn test_ctrl_l_clears_without_history() {
        let mut app = app(Instant::now());
        type_line(&mut app, "pwd");
        run_for(&mut app, Duration::from_secs(2));
        let history = app.input.history.len();

        update(&mut app, ctrl('l'));
        assert!(app.transcript.entries().is_empty());
        assert_eq!(app.input.history.len(), history);
    }

    #[test]
    fn test_repeat_replays_intro_and_hides_input() {
        let mut app = app(Instant::now());
        assert!(!app.intro.is_visible());

        type_line(&mut app, "repeat");
        assert!(app.intro.is_running());
        assert!(!app.input_visible());
        assert_eq!(app.transcript.entries().len(), 1);
        assert!(!app.transcript.scroll.is_following());

        update(&mut app, key(KeyCode::Char('x')));
        run_for(&mut app, Duration::from_millis(200));
        assert!(app.input_visible());
        assert_eq!(app.input.buffer.text(), "");
    }

    #[test]
    fn test_intro_skip_by_key_then_prompt() {
        let t0 = Instant::now();
        let mut app = app_with(Config::default(), t0);
        update(&mut app, key(KeyCode::Char('a')));
        assert!(app.intro.is_running());
        run_for(&mut app, Duration::from_millis(90));
        assert!(app.intro.is_running());
        run_for(&mut app, Duration::from_millis(20));
        assert!(!app.intro.is_running());
        // The skipping key is not typed.
        assert_eq!(app.input.buffer.text(), "");
    }

    #[test]
    fn test_intro_skip_by_click() {
        let t0 = Instant::now();
        let mut app = app_with(Config::default(), t0);
        update(
            &mut app,
            UiEvent::Terminal(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })),
        );
        assert!(app.intro.sequencer().is_some_and(|s| s.was_skipped()));
    }

    #[test]
    fn test_intro_skip_by_wheel() {
        let mut app = app_with(Config::default(), Instant::now());
        frame(&mut app, 40, 6);
        update(
            &mut app,
            UiEvent::Terminal(Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollUp,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })),
        );
        assert!(app.intro.sequencer().is_some_and(|s| s.was_skipped()));
        assert!(app.transcript.scroll.is_following());
    }

    #[test]
    fn test_prompt_is_followed_after_repeat_finishes() {
        let mut app = app(Instant::now());
        frame(&mut app, 40, 8);
        type_line(&mut app, "skills");
        run_for(&mut app, Duration::from_secs(2));

        type_line(&mut app, "repeat");
        assert!(!app.transcript.scroll.is_following());
        update(&mut app, key(KeyCode::Char('x')));
        run_for(&mut app, Duration::from_millis(200));

        assert!(app.input_visible());
        assert!(app.transcript.scroll.is_following());
    }

    #[test]
    fn test_full_intro_plays_without_input() {
        let t0 = Instant::now();
        let mut app = app_with(Config::default(), t0);
        run_for(&mut app, Duration::from_secs(30));
        assert!(!app.intro.is_running());
        let lines = texts(&app);
        assert!(lines.iter().any(|l| l == "Core Competencies:"));
        assert!(lines.last().is_some_and(|l| l.ends_with("$ █") || l.ends_with("$ ")));
    }

    #[test]
    fn test_exit_and_quit_keys() {
        let mut app = app(Instant::now());
        assert_eq!(type_line(&mut app, "exit"), vec![UiEffect::Quit]);
        assert_eq!(update(&mut app, ctrl('c')), vec![UiEffect::Quit]);
        assert_eq!(update(&mut app, ctrl('d')), vec![UiEffect::Quit]);

        update(&mut app, key(KeyCode::Char('a')));
        assert!(update(&mut app, ctrl('d')).is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_during_intro() {
        let mut app = app_with(Config::default(), Instant::now());
        assert_eq!(update(&mut app, ctrl('c')), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_history_recall() {
        let mut app = app(Instant::now());
        update(&mut app, key(KeyCode::Up));
        assert_eq!(app.input.buffer.text(), "skills");
        update(&mut app, key(KeyCode::Up));
        assert_eq!(app.input.buffer.text(), "exp");
        update(&mut app, key(KeyCode::Down));
        update(&mut app, key(KeyCode::Down));
        assert_eq!(app.input.buffer.text(), "");
    }

    #[test]
    fn test_follow_lines_scroll_to_bottom() {
        let mut app = app(Instant::now());
        frame(&mut app, 40, 6);
        type_line(&mut app, "help");
        update(&mut app, key(KeyCode::PageUp));
        assert!(!app.transcript.scroll.is_following());

        run_for(&mut app, Duration::from_secs(2));
        assert!(app.transcript.scroll.is_following());
    }

    #[test]
    fn test_page_keys_and_ctrl_home() {
        let mut app = app(Instant::now());
        frame(&mut app, 40, 5);
        type_line(&mut app, "skills");
        run_for(&mut app, Duration::from_secs(2));
        assert!(app.transcript.scroll.cached_line_count > 5);

        update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(KeyCode::Home, KeyModifiers::CONTROL))),
        );
        assert_eq!(app.transcript.scroll.get_offset(5), 0);
        update(&mut app, key(KeyCode::PageDown));
        assert_eq!(app.transcript.scroll.get_offset(5), 5);
    }

    #[test]
    fn test_plain_home_moves_the_cursor_when_typing() {
        let mut app = app(Instant::now());
        update(&mut app, key(KeyCode::Char('a')));
        update(&mut app, key(KeyCode::Char('b')));
        update(&mut app, key(KeyCode::Home));
        assert_eq!(app.input.buffer.cursor(), 0);
    }

    #[test]
    fn test_f2_toggles_debug_status() {
        let mut app = app(Instant::now());
        update(&mut app, key(KeyCode::F(2)));
        assert!(app.show_debug_status);
        update(&mut app, key(KeyCode::F(2)));
        assert!(!app.show_debug_status);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app(Instant::now());
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        update(&mut app, UiEvent::Terminal(Event::Key(release)));
        assert_eq!(app.input.buffer.text(), "");
    }

    #[test]
    fn test_paste_goes_to_input() {
        let mut app = app(Instant::now());
        update(&mut app, UiEvent::Terminal(Event::Paste("contact".to_string())));
        assert_eq!(app.input.buffer.text(), "contact");
    }
}
