//! Widgets and helpers shared across feature slices.

pub mod scrollbar;
pub mod text;

pub use scrollbar::Scrollbar;
pub use text::{truncate_with_ellipsis, wrap_line};
