//! Live prompt input: line editing, history recall, and the prompt row.

mod line_buffer;
mod render;
mod state;
mod update;

pub use line_buffer::LineBuffer;
pub use render::{CARET_BLINK, caret_visible, prompt_line};
pub use state::InputState;
pub use update::{InputAction, handle_key, handle_paste};
