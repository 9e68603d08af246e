//! Debug status line (F2): frame rate and shell diagnostics.
//!
//! - `state.rs`: `StatusLineAccumulator` (per-frame counters) and the
//!   immutable `StatusLine` snapshot
//! - `render.rs`: one-row rendering

mod render;
mod state;

pub use render::render_debug_status_line;
pub use state::{StatusLine, StatusLineAccumulator};
