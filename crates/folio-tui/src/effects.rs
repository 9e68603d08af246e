//! UI effect types.
//!
//! Effects are returned by the reducer and executed by the runtime, so the
//! reducer itself never touches the terminal.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Leave the event loop and restore the terminal.
    Quit,
}
