//! Transcript entries.

use std::time::Instant;

use folio_core::dispatch::Ticket;
use folio_core::playback::Playback;
use folio_core::reveal::RevealEvent;
use folio_core::style::StyledLine;

use super::ScrollState;

/// Stable identity of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

/// Id allocator owned by one transcript.
#[derive(Debug, Default)]
pub struct EntrySeq {
    next: u64,
}

impl EntrySeq {
    pub fn next_id(&mut self) -> EntryId {
        let id = EntryId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone)]
pub enum EntryKind {
    /// A submitted prompt line.
    Echo(StyledLine),
    /// A command's content; `ticket` releases the dispatcher when it finishes.
    Output { playback: Playback, ticket: Ticket },
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub id: EntryId,
    pub kind: EntryKind,
}

impl Entry {
    pub fn lines(&self) -> Vec<StyledLine> {
        match &self.kind {
            EntryKind::Echo(line) => vec![line.clone()],
            EntryKind::Output { playback, .. } => playback.lines(),
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(&self.kind, EntryKind::Output { playback, .. } if playback.is_active())
    }
}

/// What one poll of the transcript produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// Some output asked to follow its newest line.
    pub follow: bool,
    /// Tickets whose playback just finished.
    pub finished: Vec<Ticket>,
}

#[derive(Debug, Default)]
pub struct TranscriptState {
    entries: Vec<Entry>,
    seq: EntrySeq,
    pub scroll: ScrollState,
    /// Rows available to the transcript in the last frame.
    pub viewport_height: usize,
}

impl TranscriptState {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn push_echo(&mut self, line: StyledLine) -> EntryId {
        self.push(EntryKind::Echo(line))
    }

    pub fn push_output(&mut self, playback: Playback, ticket: Ticket) -> EntryId {
        self.push(EntryKind::Output { playback, ticket })
    }

    fn push(&mut self, kind: EntryKind) -> EntryId {
        let id = self.seq.next_id();
        self.entries.push(Entry { id, kind });
        id
    }

    /// Drops every entry, and with them any running playback.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll.reset();
    }

    pub fn is_animating(&self) -> bool {
        self.entries.iter().any(Entry::is_animating)
    }

    /// Advances every running playback to `now`.
    pub fn poll(&mut self, now: Instant) -> PollOutcome {
        let mut outcome = PollOutcome::default();
        for entry in &mut self.entries {
            let EntryKind::Output { playback, ticket } = &mut entry.kind else {
                continue;
            };
            if !playback.is_active() {
                continue;
            }
            for event in playback.poll(now) {
                match event {
                    RevealEvent::LineRendered => outcome.follow = true,
                    RevealEvent::Finished => outcome.finished.push(*ticket),
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use folio_core::content::{DisplayItem, Script};
    use folio_core::style::Style;

    use super::*;

    fn script(follow: bool) -> Script {
        let items = vec![
            DisplayItem::from(StyledLine::single("one", Style::Plain)),
            DisplayItem::from(StyledLine::single("two", Style::Plain)),
        ];
        let script = Script::new(items, Duration::from_millis(100));
        if follow { script.following_lines() } else { script }
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut transcript = TranscriptState::default();
        let a = transcript.push_echo(StyledLine::empty());
        let b = transcript.push_echo(StyledLine::empty());
        assert!(a < b);
        transcript.clear();
        let c = transcript.push_echo(StyledLine::empty());
        assert!(b < c);
    }

    #[test]
    fn test_poll_reports_finished_ticket_once() {
        let t0 = Instant::now();
        let mut transcript = TranscriptState::default();
        transcript.push_output(Playback::animated(script(false), t0), Ticket(7));
        assert!(transcript.is_animating());

        let mut finished = Vec::new();
        for ms in (0..=1000).step_by(10) {
            finished.extend(transcript.poll(t0 + Duration::from_millis(ms)).finished);
        }
        assert_eq!(finished, vec![Ticket(7)]);
        assert!(!transcript.is_animating());
        assert_eq!(transcript.entries()[0].lines().len(), 2);
    }

    #[test]
    fn test_follow_lines_request_scroll() {
        let t0 = Instant::now();
        let mut transcript = TranscriptState::default();
        transcript.push_output(Playback::animated(script(true), t0), Ticket(0));
        let follow = (0..=300)
            .step_by(10)
            .any(|ms| transcript.poll(t0 + Duration::from_millis(ms)).follow);
        assert!(follow);
    }

    #[test]
    fn test_clear_discards_running_playback() {
        let t0 = Instant::now();
        let mut transcript = TranscriptState::default();
        transcript.push_output(Playback::animated(script(false), t0), Ticket(1));
        transcript.clear();
        assert!(!transcript.is_animating());
        assert_eq!(transcript.poll(t0 + Duration::from_secs(5)), PollOutcome::default());
    }
}
