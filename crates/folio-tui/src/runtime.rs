//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the only place that reads the clock or touches the terminal.
//! Each loop iteration prepends a `Frame` event with the terminal size,
//! feeds terminal input and `Tick`s through the reducer, and redraws when
//! a tick marked the screen dirty.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence while something animates (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Tick cadence when idle; still fast enough for the caret blink.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    last_tick: Instant,
    /// For the FPS readout.
    last_render: Instant,
    /// Recent input keeps ticks fast for snappy echo.
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Takes over the terminal.
    pub fn new(state: AppState) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            last_tick: now,
            last_render: now,
            last_terminal_event: now,
        })
    }

    /// Runs until the reducer asks to quit.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        let result = self.event_loop();
        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                    now: Instant::now(),
                },
            );

            for event in events {
                match &event {
                    UiEvent::Terminal(_) => {
                        self.last_terminal_event = Instant::now();
                        dirty = true;
                    }
                    UiEvent::Tick { .. } => dirty = true,
                    UiEvent::Frame { .. } => {}
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty && !self.state.should_quit {
                let frame_ms = u16::try_from(self.last_render.elapsed().as_millis())
                    .unwrap_or(u16::MAX);
                self.last_render = Instant::now();

                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;

                self.state.status_line.on_frame(frame_ms);
            }
        }

        Ok(())
    }

    /// Waits for terminal input until the next tick is due, then drains
    /// whatever is buffered.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_input = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if self.state.is_animating() || recent_input {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        if event::poll(time_until_tick)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick {
                now: Instant::now(),
            });
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => {
                    tracing::info!("quit requested");
                    self.state.should_quit = true;
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
