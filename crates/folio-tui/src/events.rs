//! UI events consumed by the reducer.

use std::time::Instant;

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Animation tick: advance every running effect to `now`.
    Tick { now: Instant },
    /// Start of a loop iteration, carrying the terminal size.
    Frame { width: u16, height: u16, now: Instant },
    /// Raw terminal input.
    Terminal(Event),
}
