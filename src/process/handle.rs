//! Move-only owning handle for the active process.

use alloc::boxed::Box;
use core::fmt;

use super::Process;
use crate::board::Board;

/// Owns at most one process.
///
/// Not `Clone`: ownership moves with the handle, or out of it through
/// [`ProcessHandle::take`], which leaves the source empty. The owned
/// process is dropped exactly once, when the last owner goes away.
pub struct ProcessHandle<B: Board>(Option<Box<dyn Process<B>>>);

impl<B: Board> ProcessHandle<B> {
    pub fn new<P: Process<B> + 'static>(process: P) -> Self {
        Self(Some(Box::new(process)))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn get_mut(&mut self) -> Option<&mut (dyn Process<B> + 'static)> {
        self.0.as_deref_mut()
    }

    /// Move the process out, leaving this handle empty.
    pub fn take(&mut self) -> Self {
        Self(self.0.take())
    }

    /// Drop the owned process, if any.
    pub fn reset(&mut self) {
        self.0 = None;
    }
}

impl<B: Board> Default for ProcessHandle<B> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<B: Board> fmt::Debug for ProcessHandle<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("ProcessHandle(empty)")
        } else {
            f.write_str("ProcessHandle(..)")
        }
    }
}
