//! Character-by-character typing effect.
//!
//! A [`TypingEffect`] reveals a fixed string one grapheme per tick. It owns
//! its own deadline, so dropping or restarting it is the cancellation: no
//! stale tick can reach a discarded effect.

use std::time::{Duration, Instant};

use unicode_segmentation::UnicodeSegmentation;

/// Progressive reveal of a single string.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    text: String,
    /// Byte offset of the end of each grapheme cluster.
    boundaries: Vec<usize>,
    /// Number of graphemes currently visible.
    shown: usize,
    interval: Duration,
    next_tick: Instant,
    /// Full text visible and the completing tick has passed.
    complete: bool,
    /// Completion already handed out by `poll`.
    reported: bool,
}

impl TypingEffect {
    /// Starts typing `text`, first character due one `interval` after `now`.
    pub fn new(text: impl Into<String>, interval: Duration, now: Instant) -> Self {
        let text = text.into();
        let boundaries = grapheme_boundaries(&text);
        Self {
            text,
            boundaries,
            shown: 0,
            interval,
            next_tick: now + interval,
            complete: false,
            reported: false,
        }
    }

    /// Creates an effect that is already fully typed.
    ///
    /// Completion is still reported once by the next `poll`.
    pub fn finished(text: impl Into<String>) -> Self {
        let mut effect = Self::new(text, Duration::ZERO, Instant::now());
        effect.finish();
        effect
    }

    /// Replaces the target and restarts from an empty prefix.
    pub fn restart(&mut self, text: impl Into<String>, now: Instant) {
        *self = Self::new(text, self.interval, now);
    }

    /// Advances the effect to `now`.
    ///
    /// Returns `true` exactly once, when typing has completed. An empty
    /// target completes on the first poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.reported {
            return false;
        }

        if self.boundaries.is_empty() {
            self.complete = true;
        }

        while !self.complete && now >= self.next_tick {
            self.next_tick += self.interval;
            if self.shown < self.boundaries.len() {
                self.shown += 1;
            } else {
                self.complete = true;
            }
        }

        if self.complete {
            self.reported = true;
            return true;
        }
        false
    }

    /// Jumps to the fully typed state. Completion is reported by the next poll.
    pub fn finish(&mut self) {
        self.shown = self.boundaries.len();
        self.complete = true;
    }

    /// Currently visible prefix.
    pub fn visible(&self) -> &str {
        match self.shown {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }

    /// The full target text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of visible graphemes.
    pub fn cursor(&self) -> usize {
        self.shown
    }

    /// Target length in graphemes.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// True while part of the text is still hidden.
    pub fn caret_visible(&self) -> bool {
        self.shown < self.boundaries.len()
    }

    /// True until completion has been reported.
    pub fn is_active(&self) -> bool {
        !self.reported
    }
}

fn grapheme_boundaries(text: &str) -> Vec<usize> {
    text.grapheme_indices(true)
        .map(|(idx, grapheme)| idx + grapheme.len())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(50);

    #[test]
    fn test_types_one_character_per_tick() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new("abc", TICK, t0);
        assert_eq!(typing.visible(), "");
        assert!(typing.caret_visible());

        assert!(!typing.poll(t0 + TICK));
        assert_eq!(typing.visible(), "a");
        assert!(!typing.poll(t0 + TICK * 2));
        assert_eq!(typing.visible(), "ab");
        assert!(!typing.poll(t0 + TICK * 3));
        assert_eq!(typing.visible(), "abc");
        assert!(!typing.caret_visible());

        // Completion fires on the tick after the full string.
        assert!(typing.poll(t0 + TICK * 4));
        assert!(!typing.poll(t0 + TICK * 10));
    }

    #[test]
    fn test_poll_before_deadline_changes_nothing() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new("abc", TICK, t0);
        assert!(!typing.poll(t0 + Duration::from_millis(49)));
        assert_eq!(typing.cursor(), 0);
    }

    #[test]
    fn test_late_poll_catches_up_in_order() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new("hello", TICK, t0);
        assert!(!typing.poll(t0 + TICK * 3));
        assert_eq!(typing.visible(), "hel");
        assert!(typing.poll(t0 + TICK * 20));
        assert_eq!(typing.visible(), "hello");
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new("ab", TICK, t0);
        let fired = (1..20)
            .filter(|k| typing.poll(t0 + TICK * *k))
            .count();
        assert_eq!(fired, 1);
        assert!(!typing.is_active());
    }

    #[test]
    fn test_empty_target_completes_immediately() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new("", TICK, t0);
        assert_eq!(typing.visible(), "");
        assert!(!typing.caret_visible());
        assert!(typing.poll(t0));
        assert!(!typing.poll(t0 + TICK));
    }

    #[test]
    fn test_restart_resets_prefix() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new("abc", TICK, t0);
        typing.poll(t0 + TICK * 2);
        assert_eq!(typing.visible(), "ab");

        let t1 = t0 + TICK * 2;
        typing.restart("xyz", t1);
        assert_eq!(typing.visible(), "");
        assert!(typing.is_active());
        typing.poll(t1 + TICK);
        assert_eq!(typing.visible(), "x");
    }

    #[test]
    fn test_graphemes_are_not_split() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new("👋🏽hi", TICK, t0);
        assert_eq!(typing.len(), 3);
        typing.poll(t0 + TICK);
        assert_eq!(typing.visible(), "👋🏽");
    }

    #[test]
    fn test_finish_reveals_everything() {
        let t0 = Instant::now();
        let mut typing = TypingEffect::new("abc", TICK, t0);
        typing.finish();
        assert_eq!(typing.visible(), "abc");
        assert!(typing.poll(t0));
        assert!(!typing.poll(t0));
    }
}
