//! Application state.
//!
//! Everything the reducer mutates and the renderer reads lives here. Time
//! is never read from the clock in this module: `now` arrives with every
//! `Frame` and `Tick` event.

use std::time::Instant;

use chrono::NaiveDate;
use folio_core::config::Config;
use folio_core::content::ContentContext;
use folio_core::dispatch::Dispatcher;
use folio_core::intro::IntroScript;
use folio_core::profile::Profile;
use folio_core::style::StyledLine;

use crate::input::{self, InputState};
use crate::intro::IntroState;
use crate::statusline::StatusLineAccumulator;
use crate::transcript::{TranscriptState, wrap_lines};

pub struct AppState {
    pub config: Config,
    pub profile: Profile,
    /// Stands in for "present" in experience periods.
    pub today: NaiveDate,
    /// Time of the latest `Frame` or `Tick`.
    pub now: Instant,
    pub transcript: TranscriptState,
    pub input: InputState,
    pub intro: IntroState,
    pub dispatcher: Dispatcher,
    pub status_line: StatusLineAccumulator,
    pub show_debug_status: bool,
    pub should_quit: bool,
    /// Last edit; the caret blink restarts from here.
    pub caret_epoch: Instant,
    /// Transcript column width in the last frame.
    pub transcript_width: usize,
}

impl AppState {
    pub fn new(config: Config, profile: Profile, today: NaiveDate, now: Instant) -> Self {
        let ctx = ContentContext {
            profile: &profile,
            timing: &config.timing,
            today,
        };
        let script = IntroScript::new(&ctx, &config.prompt);
        let intro = IntroState::new(script, config.intro.enabled, now);
        let input = InputState::new(&config.history_seed);

        Self {
            config,
            profile,
            today,
            now,
            transcript: TranscriptState::default(),
            input,
            intro,
            dispatcher: Dispatcher::new(),
            status_line: StatusLineAccumulator::new(),
            show_debug_status: false,
            should_quit: false,
            caret_epoch: now,
            transcript_width: 0,
        }
    }

    pub fn content_context(&self) -> ContentContext<'_> {
        ContentContext {
            profile: &self.profile,
            timing: &self.config.timing,
            today: self.today,
        }
    }

    /// The prompt is shown (and accepts keys) only when nothing is playing.
    pub fn input_visible(&self) -> bool {
        !self.intro.is_running() && !self.dispatcher.is_busy()
    }

    /// True while something needs fast ticks.
    pub fn is_animating(&self) -> bool {
        self.intro.is_running() || self.transcript.is_animating()
    }

    /// Short activity label for the debug status line.
    pub fn activity(&self) -> &'static str {
        if self.intro.is_running() {
            "intro"
        } else if self.dispatcher.is_busy() {
            "busy"
        } else {
            "idle"
        }
    }

    /// Unwrapped transcript content: intro, entries, then the live prompt.
    pub fn display_lines(&self) -> Vec<StyledLine> {
        let mut lines = self.intro.lines();
        if self.intro.is_visible() {
            lines.push(StyledLine::empty());
        }
        for entry in self.transcript.entries() {
            lines.extend(entry.lines());
        }
        if self.input_visible() {
            let caret_on = input::caret_visible(self.caret_epoch, self.now);
            lines.push(input::prompt_line(
                &self.config.prompt,
                &self.input.buffer,
                caret_on,
            ));
        }
        lines
    }

    /// Display lines wrapped to `width` columns.
    pub fn wrapped_lines(&self, width: usize) -> Vec<StyledLine> {
        wrap_lines(&self.display_lines(), width)
    }
}
