//! Transcript feature slice: submitted prompts and their command output.
//!
//! - `state.rs`: entries, stable entry ids, animation polling
//! - `scroll.rs`: follow/anchored scroll math
//! - `render.rs`: wrapping and semantic style conversion

mod render;
mod scroll;
mod state;

pub use render::{convert_style, convert_styled_line, wrap_lines};
pub use scroll::{ScrollMode, ScrollState};
pub use state::{Entry, EntryId, EntryKind, EntrySeq, PollOutcome, TranscriptState};
