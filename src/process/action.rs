//! A process that runs one routine and returns.

use core::marker::PhantomData;

use super::{Process, ProcessHandle};
use crate::board::Board;

/// Runs `action` on its first tick, then commits. Always returns to the
/// level that opened it.
pub struct ActionProcess<B> {
    action: fn(&mut B),
    ran: bool,
    _board: PhantomData<fn(&mut B)>,
}

impl<B: Board + 'static> ActionProcess<B> {
    pub fn new(action: fn(&mut B)) -> Self {
        Self {
            action,
            ran: false,
            _board: PhantomData,
        }
    }

    pub fn build(action: fn(&mut B)) -> ProcessHandle<B> {
        ProcessHandle::new(Self::new(action))
    }
}

impl<B: Board + 'static> Process<B> for ActionProcess<B> {
    fn tick(&mut self, board: &mut B) -> bool {
        if !self.ran {
            (self.action)(board);
            self.ran = true;
        }
        true
    }

    fn draw(&mut self, _board: &mut B) {}

    fn choice(&self) -> u8 {
        0
    }
}
