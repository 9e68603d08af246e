//! Intro feature slice: visibility and lifecycle of the intro sequence.

mod state;

pub use state::IntroState;
