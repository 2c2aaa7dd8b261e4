//! Polled quadrature encoder with push switch.

use embedded_hal::digital::InputPin;

use crate::config::ENCODER_TRANSITIONS_PER_STEP;
use crate::error::{Error, InputLine};
use crate::input::ControlInput;

// Gray-code steps indexed by (prev_ab << 2) | curr_ab. Skipped states
// (both lines changed) count as 0.
const QUADRATURE_TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Encoder on two pulled-up inputs plus an active-low switch.
///
/// The encoder is decoded whenever the position is read, so it must be
/// read at least as often as the fastest expected transition.
pub struct RotaryControl<A, B, S> {
    a: A,
    b: B,
    switch: S,
    prev_ab: u8,
    transition_accum: i8,
    position: i32,
    error: Option<Error>,
}

impl<A, B, S> RotaryControl<A, B, S>
where
    A: InputPin,
    B: InputPin,
    S: InputPin,
{
    pub fn new(a: A, b: B, switch: S) -> Self {
        let mut control = Self {
            a,
            b,
            switch,
            prev_ab: 0,
            transition_accum: 0,
            position: 0,
            error: None,
        };
        control.prev_ab = control.read_ab().unwrap_or(0);
        control
    }

    /// Most recent line read failure since the last call.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    fn read_ab(&mut self) -> Result<u8, Error> {
        let a = self.a.is_high().map_err(|_| Error::from(InputLine::EncoderA))?;
        let b = self.b.is_high().map_err(|_| Error::from(InputLine::EncoderB))?;
        Ok(ab_from_levels(a, b))
    }

    fn poll_rotation(&mut self) {
        let curr_ab = match self.read_ab() {
            Ok(ab) => ab,
            Err(e) => {
                self.error = Some(e);
                return;
            }
        };
        if curr_ab == self.prev_ab {
            return;
        }

        let transition_idx = ((self.prev_ab << 2) | curr_ab) as usize;
        self.prev_ab = curr_ab;
        self.transition_accum = self
            .transition_accum
            .saturating_add(QUADRATURE_TRANSITIONS[transition_idx]);

        if self.transition_accum >= ENCODER_TRANSITIONS_PER_STEP {
            self.transition_accum = 0;
            self.position = self.position.wrapping_add(1);
        } else if self.transition_accum <= -ENCODER_TRANSITIONS_PER_STEP {
            self.transition_accum = 0;
            self.position = self.position.wrapping_sub(1);
        }
    }
}

impl<A, B, S> ControlInput for RotaryControl<A, B, S>
where
    A: InputPin,
    B: InputPin,
    S: InputPin,
{
    fn button_pressed(&mut self) -> bool {
        match self.switch.is_low() {
            Ok(pressed) => pressed,
            Err(_) => {
                self.error = Some(InputLine::Switch.into());
                false
            }
        }
    }

    fn encoder_position(&mut self) -> i32 {
        self.poll_rotation();
        self.position
    }
}

fn ab_from_levels(a_high: bool, b_high: bool) -> u8 {
    ((a_high as u8) << 1) | b_high as u8
}
