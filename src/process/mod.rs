//! The process chain: whatever currently owns the screen and controls.
//!
//! Exactly one process is active at a time. The [`Navigator`] ticks it;
//! when a tick commits, the process is asked for its successor. A
//! non-empty [`ProcessHandle`] replaces it, an empty one returns to the
//! parent level.

pub mod action;
pub mod handle;
pub mod list;
pub mod message;
pub mod navigator;


pub use action::ActionProcess;
pub use handle::ProcessHandle;
pub use list::{ListProcess, Successor};
pub use message::MessageProcess;
pub use navigator::{Navigator, RootFactory, Step};

use alloc::boxed::Box;

use crate::board::Board;

/// Rebuilds a process that was replaced by its successor, with its
/// selection as it was at the commit.
pub type Resume<B> = Box<dyn FnOnce(&mut B) -> ProcessHandle<B>>;

/// One screen's worth of interaction.
pub trait Process<B: Board> {
    /// Advance by one poll. Returns `true` once the user has committed.
    fn tick(&mut self, board: &mut B) -> bool;

    /// Repaint the whole screen.
    fn draw(&mut self, board: &mut B);

    /// The committed (or currently selected) index.
    fn choice(&self) -> u8;

    /// Build what follows a commit of `choice`. An empty handle means
    /// "go back".
    fn next_process(&mut self, choice: u8, board: &mut B) -> ProcessHandle<B> {
        let _ = (choice, board);
        ProcessHandle::empty()
    }

    /// How to come back here once the successor is done. `None` means
    /// going back skips this process.
    fn resume(&self) -> Option<Resume<B>> {
        None
    }
}
