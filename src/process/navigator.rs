//! Top-level loop state: the active process and the way back up.

use heapless::Vec;

use super::{ProcessHandle, Resume};
use crate::board::Board;
use crate::config::MAX_MENU_DEPTH;

/// Builds the root process with the given selection restored.
pub type RootFactory<B> = fn(&mut B, u8) -> ProcessHandle<B>;

/// What one [`Navigator::poll`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Nothing committed.
    Idle,
    /// A commit of `choice` moved one level deeper.
    Advanced { choice: u8 },
    /// A commit returned to the parent level.
    Popped,
}

/// Owns the active process.
///
/// Parents are not kept alive. Each descent stacks the parent's
/// [`Resume`] instead, and going back rebuilds only that parent with
/// the selection it was committed with. With nothing stacked, going back
/// rebuilds the root through its factory.
pub struct Navigator<B: Board> {
    current: ProcessHandle<B>,
    parents: Vec<Resume<B>, MAX_MENU_DEPTH>,
    root: RootFactory<B>,
    root_choice: u8,
}

impl<B: Board> Navigator<B> {
    /// Build and draw the root.
    pub fn new(board: &mut B, root: RootFactory<B>) -> Self {
        Self {
            current: root(board, 0),
            parents: Vec::new(),
            root,
            root_choice: 0,
        }
    }

    pub fn poll(&mut self, board: &mut B) -> Step {
        if self.current.is_empty() {
            self.pop(board);
            return Step::Popped;
        }
        let Some(process) = self.current.get_mut() else {
            return Step::Idle;
        };

        if !process.tick(board) {
            return Step::Idle;
        }

        let choice = process.choice();
        if self.parents.is_empty() {
            self.root_choice = choice;
        }

        let next = process.next_process(choice, board);
        if next.is_empty() {
            self.pop(board);
            return Step::Popped;
        }

        if let Some(resume) = process.resume() {
            if self.parents.push(resume).is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("menu: more than {} levels, parent dropped", MAX_MENU_DEPTH);
            }
        }

        self.current = next;
        #[cfg(feature = "defmt")]
        defmt::debug!("menu: choice {} -> depth {}", choice, self.parents.len());
        Step::Advanced { choice }
    }

    /// Repaint the active process.
    pub fn redraw(&mut self, board: &mut B) {
        if let Some(process) = self.current.get_mut() {
            process.draw(board);
        }
    }

    /// Parent levels that a commit can return to; 0 on the root.
    pub fn depth(&self) -> u8 {
        self.parents.len() as u8
    }

    /// Last choice committed on the root menu.
    pub fn root_choice(&self) -> u8 {
        self.root_choice
    }

    fn pop(&mut self, board: &mut B) {
        self.current.reset();
        self.current = match self.parents.pop() {
            Some(resume) => resume(board),
            None => (self.root)(board, self.root_choice),
        };
        #[cfg(feature = "defmt")]
        defmt::debug!("menu: back to depth {}", self.parents.len());
    }
}
