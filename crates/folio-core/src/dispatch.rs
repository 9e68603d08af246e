//! Command dispatcher: the busy gate in front of content playback.
//!
//! Each accepted content command gets a fresh [`Ticket`]. Only completion of
//! the ticket that is currently active releases the gate, so a late signal
//! from a discarded playback can never unlock a newer one.

use crate::command::{self, Command, Resolved};
use crate::content::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Idle,
    Busy { ticket: Ticket },
}

/// What the shell should do with an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Play a content block; release the gate by completing `ticket`.
    Play { block: Block, ticket: Ticket },
    /// Empty the transcript and hide the intro.
    Clear,
    /// Replay the intro.
    Repeat,
    /// Leave the terminal.
    Exit,
}

fn block_for(command: Command) -> Option<Block> {
    match command {
        Command::About => Some(Block::About),
        Command::Experience => Some(Block::Experience),
        Command::Skills => Some(Block::Skills),
        Command::Contact => Some(Block::Contact),
        Command::Help => Some(Block::Help),
        Command::Ls => Some(Block::Ls),
        Command::Pwd => Some(Block::Pwd),
        Command::Clear | Command::Repeat | Command::Exit => None,
    }
}

#[derive(Debug)]
pub struct Dispatcher {
    state: DispatchState,
    next_ticket: u64,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            state: DispatchState::Idle,
            next_ticket: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, DispatchState::Busy { .. })
    }

    /// Resolves and accepts a trimmed, non-empty submission.
    ///
    /// Returns `None` while busy: the submission is refused.
    pub fn submit(&mut self, input: &str) -> Option<Dispatch> {
        if let DispatchState::Busy { ticket } = self.state {
            tracing::warn!(input, ticket = ticket.0, "submission refused while busy");
            return None;
        }

        let block = match command::resolve(input) {
            Resolved::Known(Command::Clear) => return Some(Dispatch::Clear),
            Resolved::Known(Command::Repeat) => return Some(Dispatch::Repeat),
            Resolved::Known(Command::Exit) => return Some(Dispatch::Exit),
            Resolved::Known(cmd) => block_for(cmd)?,
            Resolved::NotFound(input) => Block::NotFound { input },
        };

        let ticket = Ticket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.state = DispatchState::Busy { ticket };
        tracing::debug!(?block, ticket = ticket.0, "dispatch");
        Some(Dispatch::Play { block, ticket })
    }

    /// Releases the gate if `ticket` is the active one.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        let ok = self.state == DispatchState::Busy { ticket };
        if ok {
            self.state = DispatchState::Idle;
        }
        ok
    }

    /// Drops any in-flight ticket (e.g. on `clear`).
    pub fn reset(&mut self) {
        self.state = DispatchState::Idle;
    }
}
