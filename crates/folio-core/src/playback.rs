//! Generic player for content [`Script`]s.
//!
//! Typed lines play first, one after another; once the last one completes
//! the heading appears and the items are revealed. Immediate playback shows
//! everything at once and still reports completion on the first poll.

use std::time::{Duration, Instant};

use crate::content::{DisplayItem, Script, TypedLine};
use crate::reveal::{Reveal, RevealEvent};
use crate::style::{CARET, Style, StyledLine};
use crate::typing::TypingEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Typing the typed line at this index.
    Typing(usize),
    Revealing,
}

#[derive(Debug, Clone)]
pub struct Playback {
    typed: Vec<TypedLine>,
    /// One effect per typed line that has started.
    typing: Vec<TypingEffect>,
    heading: Vec<StyledLine>,
    /// Items waiting for typing to finish.
    pending: Option<Vec<DisplayItem>>,
    reveal: Option<Reveal<DisplayItem>>,
    interval: Duration,
    follow_lines: bool,
    stage: Stage,
}

impl Playback {
    /// Starts animated playback at `now`.
    pub fn animated(script: Script, now: Instant) -> Self {
        let Script {
            typed,
            heading,
            items,
            interval,
            follow_lines,
        } = script;

        let mut playback = Self {
            typing: Vec::with_capacity(typed.len()),
            typed,
            heading,
            pending: Some(items),
            reveal: None,
            interval,
            follow_lines,
            stage: Stage::Typing(0),
        };
        match playback.typed.first() {
            Some(first) => {
                let effect = TypingEffect::new(first.text.clone(), first.interval, now);
                playback.typing.push(effect);
            }
            None => playback.start_reveal(now),
        }
        playback
    }

    /// Shows the whole script at once.
    pub fn immediate(script: Script) -> Self {
        let mut playback = Self::animated(script, Instant::now());
        playback.skip_to_end();
        playback
    }

    fn start_reveal(&mut self, now: Instant) {
        let items = self.pending.take().unwrap_or_default();
        let mut reveal = Reveal::animated(items, self.interval, now);
        if self.follow_lines {
            reveal = reveal.with_line_notifications();
        }
        self.reveal = Some(reveal);
        self.stage = Stage::Revealing;
    }

    /// Advances playback to `now`.
    ///
    /// [`RevealEvent::Finished`] is reported exactly once.
    pub fn poll(&mut self, now: Instant) -> Vec<RevealEvent> {
        loop {
            match self.stage {
                Stage::Typing(idx) => {
                    let Some(effect) = self.typing.get_mut(idx) else {
                        self.start_reveal(now);
                        continue;
                    };
                    if !effect.poll(now) {
                        return Vec::new();
                    }
                    match self.typed.get(idx + 1) {
                        Some(next) => {
                            let effect = TypingEffect::new(next.text.clone(), next.interval, now);
                            self.typing.push(effect);
                            self.stage = Stage::Typing(idx + 1);
                        }
                        None => self.start_reveal(now),
                    }
                }
                Stage::Revealing => {
                    return self
                        .reveal
                        .as_mut()
                        .map(|reveal| reveal.poll(now))
                        .unwrap_or_default();
                }
            }
        }
    }

    /// Jumps to the fully shown state; completion is reported by the next
    /// poll unless it already was.
    pub fn skip_to_end(&mut self) {
        for line in self.typed.iter().skip(self.typing.len()) {
            self.typing.push(TypingEffect::finished(line.text.clone()));
        }
        for effect in &mut self.typing {
            effect.finish();
        }
        if self.reveal.is_none() {
            self.start_reveal(Instant::now());
        }
        self.stage = Stage::Revealing;
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.skip_to_end();
        }
    }

    /// True until completion has been reported.
    pub fn is_active(&self) -> bool {
        self.reveal.as_ref().is_none_or(Reveal::is_active)
    }

    /// Currently visible output.
    pub fn lines(&self) -> Vec<StyledLine> {
        let mut lines = Vec::new();
        for (effect, target) in self.typing.iter().zip(&self.typed) {
            let mut line = StyledLine::single(effect.visible(), target.style);
            if effect.caret_visible() {
                line = line.push(CARET, Style::Caret);
            }
            lines.push(line);
        }

        if let Some(reveal) = &self.reveal {
            lines.extend(self.heading.iter().cloned());
            for item in reveal.visible() {
                lines.extend(item.lines.iter().cloned());
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPE: Duration = Duration::from_millis(10);
    const ITEM: Duration = Duration::from_millis(100);

    fn script(typed: &[&str], items: &[&str]) -> Script {
        Script::new(
            items
                .iter()
                .map(|i| DisplayItem::from(StyledLine::single(*i, Style::Plain)))
                .collect(),
            ITEM,
        )
        .with_typed(
            typed
                .iter()
                .map(|t| TypedLine {
                    text: (*t).to_string(),
                    style: Style::Headline,
                    interval: TYPE,
                })
                .collect(),
        )
        .with_heading(vec![StyledLine::single("head", Style::Banner)])
    }

    fn texts(playback: &Playback) -> Vec<String> {
        playback.lines().iter().map(StyledLine::plain_text).collect()
    }

    /// Polls every millisecond until `end`, collecting events.
    fn run(playback: &mut Playback, start: Instant, end: Duration) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        let mut t = Duration::ZERO;
        while t <= end {
            events.extend(playback.poll(start + t));
            t += Duration::from_millis(1);
        }
        events
    }

    #[test]
    fn test_typed_lines_before_reveal() {
        let t0 = Instant::now();
        let mut playback = Playback::animated(script(&["ab", "c"], &["x", "y"]), t0);
        assert_eq!(texts(&playback), ["█"]);

        playback.poll(t0 + TYPE);
        assert_eq!(texts(&playback), ["a█"]);

        // "ab" completes on its third tick, then "c" starts typing.
        run(&mut playback, t0, TYPE * 3);
        assert_eq!(texts(&playback), ["ab", "█"]);

        let events = run(&mut playback, t0, Duration::from_millis(500));
        assert_eq!(events, vec![RevealEvent::Finished]);
        assert_eq!(texts(&playback), ["ab", "c", "head", "x", "y"]);
        assert!(!playback.is_active());
    }

    #[test]
    fn test_heading_appears_with_reveal() {
        let t0 = Instant::now();
        let playback = Playback::animated(script(&[], &["x"]), t0);
        assert_eq!(texts(&playback), ["head"]);
    }

    #[test]
    fn test_empty_script_finishes_on_first_poll() {
        let t0 = Instant::now();
        let mut playback = Playback::animated(Script::new(Vec::new(), ITEM), t0);
        assert_eq!(playback.poll(t0), vec![RevealEvent::Finished]);
        assert!(playback.poll(t0 + ITEM).is_empty());
    }

    #[test]
    fn test_immediate_shows_everything_and_finishes_once() {
        let t0 = Instant::now();
        let mut playback = Playback::immediate(script(&["ab"], &["x", "y"]));
        assert_eq!(texts(&playback), ["ab", "head", "x", "y"]);
        assert_eq!(playback.poll(t0), vec![RevealEvent::Finished]);
        assert!(playback.poll(t0).is_empty());
    }

    #[test]
    fn test_skip_mid_typing() {
        let t0 = Instant::now();
        let mut playback = Playback::animated(script(&["abc", "de"], &["x"]), t0);
        playback.poll(t0 + TYPE);
        playback.skip_to_end();
        assert_eq!(texts(&playback), ["abc", "de", "head", "x"]);
        assert_eq!(playback.poll(t0 + TYPE), vec![RevealEvent::Finished]);
    }

    #[test]
    fn test_follow_lines_emits_line_rendered() {
        let t0 = Instant::now();
        let mut playback = Playback::animated(script(&[], &["x", "y"]).following_lines(), t0);
        let events = run(&mut playback, t0, ITEM * 4);
        let rendered = events
            .iter()
            .filter(|e| **e == RevealEvent::LineRendered)
            .count();
        assert_eq!(rendered, 2);
        assert_eq!(events.last(), Some(&RevealEvent::Finished));
    }
}
