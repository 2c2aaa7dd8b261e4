//! The set of collaborators a menu process talks to.
//!
//! Every process call receives `&mut B: Board`, so the display, LED and
//! input lines stay singletons owned by the top-level loop rather than
//! by whichever menu happens to be active.

use crate::input::ControlInput;
use crate::ui::{DisplaySurface, StatusIndicator};

/// Monotonic millisecond clock. Wraps after ~49.7 days.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

/// Hardware seen by the menu core.
pub trait Board {
    type Display: DisplaySurface;
    type Status: StatusIndicator;
    type Input: ControlInput;

    fn now_ms(&self) -> u32;
    fn display(&mut self) -> &mut Self::Display;
    fn status(&mut self) -> &mut Self::Status;
    fn input(&mut self) -> &mut Self::Input;
}

/// A [`Board`] assembled from independent parts.
pub struct Devices<D, S, I, C> {
    pub display: D,
    pub status: S,
    pub input: I,
    pub clock: C,
}

impl<D, S, I, C> Board for Devices<D, S, I, C>
where
    D: DisplaySurface,
    S: StatusIndicator,
    I: ControlInput,
    C: Clock,
{
    type Display = D;
    type Status = S;
    type Input = I;

    fn now_ms(&self) -> u32 {
        self.clock.now_ms()
    }

    fn display(&mut self) -> &mut D {
        &mut self.display
    }

    fn status(&mut self) -> &mut S {
        &mut self.status
    }

    fn input(&mut self) -> &mut I {
        &mut self.input
    }
}
