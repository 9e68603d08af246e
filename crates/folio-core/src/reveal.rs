//! Item-by-item reveal engine.
//!
//! [`Reveal`] discloses a fixed, ordered list of items one per tick and
//! reports progress as [`RevealEvent`]s from `poll`. Like the typing effect
//! it owns its deadlines, so dropping it cancels every pending tick.

use std::time::{Duration, Instant};

/// Delay between revealing an item and reporting it as rendered.
///
/// Gives the renderer one layout pass before a scroll-to-bottom request.
pub const LINE_SETTLE_DELAY: Duration = Duration::from_millis(10);

/// Progress reported by an animation poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// A newly revealed item has settled (scroll request).
    LineRendered,
    /// Every item is visible. Reported exactly once.
    Finished,
}

/// Progressive reveal of `items`.
#[derive(Debug, Clone)]
pub struct Reveal<T> {
    items: Vec<T>,
    /// Number of visible items (`0..=items.len()`).
    cursor: usize,
    interval: Duration,
    next_tick: Instant,
    /// Pending "line rendered" deadline, when notifications are on.
    settle_at: Option<Instant>,
    notify_lines: bool,
    complete: bool,
    reported: bool,
}

impl<T> Reveal<T> {
    /// Starts an animated reveal; the first item is due one `interval` after `now`.
    pub fn animated(items: Vec<T>, interval: Duration, now: Instant) -> Self {
        Self {
            items,
            cursor: 0,
            interval,
            next_tick: now + interval,
            settle_at: None,
            notify_lines: false,
            complete: false,
            reported: false,
        }
    }

    /// Reveals every item at once. Completion is reported by the first poll.
    pub fn immediate(items: Vec<T>) -> Self {
        let cursor = items.len();
        Self {
            items,
            cursor,
            interval: Duration::ZERO,
            next_tick: Instant::now(),
            settle_at: None,
            notify_lines: false,
            complete: true,
            reported: false,
        }
    }

    /// Enables [`RevealEvent::LineRendered`] after each revealed item.
    #[must_use]
    pub fn with_line_notifications(mut self) -> Self {
        self.notify_lines = true;
        self
    }

    /// Advances the reveal to `now`.
    ///
    /// Ticks are applied strictly in order, one item per elapsed interval.
    /// The tick after the last item completes the reveal.
    pub fn poll(&mut self, now: Instant) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        if self.reported {
            return events;
        }

        if self.items.is_empty() {
            self.complete = true;
        }

        while !self.complete && now >= self.next_tick {
            let tick_at = self.next_tick;
            self.next_tick += self.interval;
            if self.cursor < self.items.len() {
                self.cursor += 1;
                if self.notify_lines {
                    self.settle_at = Some(tick_at + LINE_SETTLE_DELAY);
                }
            } else {
                self.complete = true;
            }
        }

        if let Some(settle_at) = self.settle_at
            && (now >= settle_at || self.complete)
        {
            self.settle_at = None;
            events.push(RevealEvent::LineRendered);
        }

        if self.complete {
            self.reported = true;
            events.push(RevealEvent::Finished);
        }
        events
    }

    /// Reveals the remaining items; completion is reported by the next poll.
    pub fn skip_to_end(&mut self) {
        self.cursor = self.items.len();
        self.settle_at = None;
        self.complete = true;
    }

    /// Currently visible items.
    pub fn visible(&self) -> &[T] {
        &self.items[..self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True until completion has been reported.
    pub fn is_active(&self) -> bool {
        !self.reported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(120);

    fn finished(events: &[RevealEvent]) -> bool {
        events.contains(&RevealEvent::Finished)
    }

    #[test]
    fn test_reveals_in_order_then_finishes() {
        let t0 = Instant::now();
        let mut reveal = Reveal::animated(vec!["a", "b", "c"], TICK, t0);
        assert!(reveal.visible().is_empty());

        let mut previous = 0;
        let mut finished_at = None;
        for k in 1..10u32 {
            let events = reveal.poll(t0 + TICK * k);
            assert!(reveal.cursor() >= previous, "cursor must never decrease");
            previous = reveal.cursor();
            if finished(&events) {
                assert_eq!(reveal.cursor(), 3);
                assert!(finished_at.is_none(), "finished twice");
                finished_at = Some(k);
            }
        }
        assert_eq!(reveal.visible(), &["a", "b", "c"]);
        assert_eq!(finished_at, Some(4));
    }

    #[test]
    fn test_empty_reveal_finishes_on_first_poll() {
        let t0 = Instant::now();
        let mut reveal: Reveal<&str> = Reveal::animated(Vec::new(), TICK, t0);
        assert_eq!(reveal.poll(t0), vec![RevealEvent::Finished]);
        assert!(reveal.poll(t0 + TICK).is_empty());
    }

    #[test]
    fn test_immediate_mode_always_finishes() {
        let t0 = Instant::now();
        let mut reveal = Reveal::immediate(vec![1, 2]);
        assert_eq!(reveal.visible(), &[1, 2]);
        assert_eq!(reveal.poll(t0), vec![RevealEvent::Finished]);
        assert!(reveal.poll(t0).is_empty());
    }

    #[test]
    fn test_line_rendered_follows_settle_delay() {
        let t0 = Instant::now();
        let mut reveal = Reveal::animated(vec!["a", "b"], TICK, t0).with_line_notifications();

        assert!(reveal.poll(t0 + TICK).is_empty());
        assert_eq!(reveal.cursor(), 1);
        assert_eq!(
            reveal.poll(t0 + TICK + LINE_SETTLE_DELAY),
            vec![RevealEvent::LineRendered]
        );
        assert!(reveal.poll(t0 + TICK + LINE_SETTLE_DELAY).is_empty());
    }

    #[test]
    fn test_no_line_events_without_notifications() {
        let t0 = Instant::now();
        let mut reveal = Reveal::animated(vec!["a"], TICK, t0);
        assert!(reveal.poll(t0 + TICK + LINE_SETTLE_DELAY).is_empty());
    }

    #[test]
    fn test_pending_line_event_flushes_with_finish() {
        let t0 = Instant::now();
        let mut reveal = Reveal::animated(vec!["a"], TICK, t0).with_line_notifications();
        let events = reveal.poll(t0 + TICK * 5);
        assert_eq!(
            events,
            vec![RevealEvent::LineRendered, RevealEvent::Finished]
        );
    }

    #[test]
    fn test_skip_to_end_finishes_once() {
        let t0 = Instant::now();
        let mut reveal = Reveal::animated(vec!["a", "b", "c"], TICK, t0);
        reveal.poll(t0 + TICK);
        reveal.skip_to_end();
        assert_eq!(reveal.cursor(), 3);
        assert_eq!(reveal.poll(t0 + TICK), vec![RevealEvent::Finished]);
        assert!(reveal.poll(t0 + TICK * 9).is_empty());
        assert!(!reveal.is_active());
    }
}
