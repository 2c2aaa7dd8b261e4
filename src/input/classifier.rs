//! Debounce and event classification for the encoder + push switch.
//!
//! The classifier is polled: each [`InputClassifier::tick`] takes exactly
//! one switch sample and one encoder sample. The owner decides the
//! cadence (the menu controller ticks it once per main-loop iteration).
//!
//! Debounce works on a candidate level: a raw sample that differs from
//! the candidate restarts the timer, and the candidate becomes the
//! accepted level once it has held for `BUTTON_DEBOUNCE_MS`.
//!
//! Timestamps are a wrapping `u32` millisecond counter; every duration
//! is a `wrapping_sub`, so classification is unaffected by the counter
//! rolling over.

use super::{ControlInput, InputEvents};
use crate::config::{BUTTON_DEBOUNCE_MS, LONG_PRESS_MS};

/// Debounced button state plus encoder motion between ticks.
#[derive(Clone, Debug)]
pub struct InputClassifier {
    previous_button: bool,
    current_button: bool,
    debounce_candidate: bool,
    debounce_started_at: u32,
    button_became_active_at: u32,
    rotary_position: i32,
    rotary_previous_position: i32,
    rotary_direction: i8,
    last_tick_at: u32,
}

impl InputClassifier {
    /// Sample the hardware once and start from that state.
    ///
    /// A button already held at construction is taken as pressed
    /// without producing a press edge.
    pub fn new<I: ControlInput>(input: &mut I, now_ms: u32) -> Self {
        let pressed = input.button_pressed();
        let position = input.encoder_position();
        Self {
            previous_button: pressed,
            current_button: pressed,
            debounce_candidate: pressed,
            debounce_started_at: now_ms,
            button_became_active_at: now_ms,
            rotary_position: position,
            rotary_previous_position: position,
            rotary_direction: 0,
            last_tick_at: now_ms,
        }
    }

    /// Take one sample of the switch and the encoder.
    pub fn tick<I: ControlInput>(&mut self, input: &mut I, now_ms: u32) {
        self.last_tick_at = now_ms;
        self.previous_button = self.current_button;

        let raw = input.button_pressed();
        if raw != self.debounce_candidate {
            self.debounce_candidate = raw;
            self.debounce_started_at = now_ms;
        } else if now_ms.wrapping_sub(self.debounce_started_at) >= BUTTON_DEBOUNCE_MS {
            self.current_button = raw;
        }

        if self.current_button && !self.previous_button {
            self.button_became_active_at = now_ms;
        }

        self.rotary_previous_position = self.rotary_position;
        self.rotary_position = input.encoder_position();
        self.rotary_direction = self
            .rotary_position
            .wrapping_sub(self.rotary_previous_position)
            .signum() as i8;
    }

    /// Events between the previous tick and the latest one.
    pub fn current_input_event(&self) -> InputEvents {
        let mut events = InputEvents::NONE;

        if self.current_button {
            events |= InputEvents::BUTTON_PRESS;
        }

        if self.previous_button && !self.current_button {
            let held = self.last_tick_at.wrapping_sub(self.button_became_active_at);
            events |= if held >= LONG_PRESS_MS {
                InputEvents::BUTTON_LONG_RELEASE
            } else {
                InputEvents::BUTTON_SHORT_RELEASE
            };
        }

        match self.rotary_direction {
            1 => events |= InputEvents::ROTARY_POSITIVE,
            -1 => events |= InputEvents::ROTARY_NEGATIVE,
            _ => {}
        }

        events
    }

    /// Debounced button level.
    pub fn is_pressed(&self) -> bool {
        self.current_button
    }

    /// How long the current press has lasted as of the latest tick, or
    /// 0 if the button is up.
    pub fn held_ms(&self) -> u32 {
        if self.current_button {
            self.last_tick_at.wrapping_sub(self.button_became_active_at)
        } else {
            0
        }
    }

    /// Encoder direction of the latest tick: -1, 0 or +1.
    pub fn direction(&self) -> i8 {
        self.rotary_direction
    }
}
