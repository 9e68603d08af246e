//! Intro visibility wrapper around [`IntroSequencer`].

use std::time::Instant;

use folio_core::intro::{IntroScript, IntroSequencer};
use folio_core::style::StyledLine;

/// The intro at the top of the transcript.
///
/// `sequencer` is `None` while the intro is hidden (after `clear`, or when
/// the intro is disabled at startup).
#[derive(Debug)]
pub struct IntroState {
    script: IntroScript,
    sequencer: Option<IntroSequencer>,
}

impl IntroState {
    pub fn new(script: IntroScript, enabled: bool, now: Instant) -> Self {
        let sequencer = enabled.then(|| IntroSequencer::new(script.clone(), now));
        Self { script, sequencer }
    }

    pub fn is_visible(&self) -> bool {
        self.sequencer.is_some()
    }

    /// True while the sequence has not reported done; input stays hidden.
    pub fn is_running(&self) -> bool {
        self.sequencer.as_ref().is_some_and(IntroSequencer::is_active)
    }

    pub fn sequencer(&self) -> Option<&IntroSequencer> {
        self.sequencer.as_ref()
    }

    /// Hides the intro and drops its timers.
    pub fn hide(&mut self) {
        self.sequencer = None;
    }

    /// Shows the intro again from its first phase.
    pub fn replay(&mut self, now: Instant) {
        match &mut self.sequencer {
            Some(sequencer) => sequencer.restart(now),
            None => self.sequencer = Some(IntroSequencer::new(self.script.clone(), now)),
        }
    }

    /// Returns `true` once, when the sequence reports done.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.sequencer
            .as_mut()
            .is_some_and(|sequencer| sequencer.is_active() && sequencer.poll(now))
    }

    /// Skips a running intro; returns `false` when there is nothing to skip.
    pub fn skip(&mut self, now: Instant) -> bool {
        self.sequencer
            .as_mut()
            .is_some_and(|sequencer| sequencer.skip(now))
    }

    pub fn lines(&self) -> Vec<StyledLine> {
        self.sequencer
            .as_ref()
            .map(IntroSequencer::lines)
            .unwrap_or_default()
    }
}
