//! Per-tick input handling for a list menu.
//!
//! One [`MenuController::tick`] runs, in order:
//! 1. one classifier sample,
//! 2. the idle animation (or its cancellation when input arrived),
//! 3. press feedback on the status LED,
//! 4. commit on any release, else one step of navigation.
//!
//! Idle animation: after `IDLE_TIMEOUT_MS` without input the LED steps
//! through the idle palette every `IDLE_STEP_MS`, the first step landing
//! one full step after the timeout. Step deadlines are compared as
//! signed wrapping differences, so the animation keeps its cadence
//! across clock rollover.

use super::model::MenuModel;
use super::prompts::PromptSource;
use super::view::MenuView;
use crate::board::Board;
use crate::config::{IDLE_STEP_MS, IDLE_TIMEOUT_MS, LONG_PRESS_MS};
use crate::input::{InputClassifier, InputEvents};
use crate::ui::input_logic::{select_next, select_prev};
use crate::ui::status::{ACTIVE_COLOR, COMMIT_COLOR, LONG_PRESS_COLOR};
use crate::ui::{StatusColor, StatusIndicator};

/// Drives a model/view pair from the encoder and push switch.
#[derive(Clone, Debug)]
pub struct MenuController {
    input: InputClassifier,
    idle_since: u32,
    idle_next_step: Option<u32>,
    idle_color: StatusColor,
}

impl MenuController {
    /// Sample the controls and show the selection colour.
    pub fn new<B, P>(board: &mut B, model: &MenuModel<'_, P>) -> Self
    where
        B: Board,
        P: PromptSource + ?Sized,
    {
        let now = board.now_ms();
        let input = InputClassifier::new(board.input(), now);
        let color = StatusColor::for_choice(model.choice());
        board.status().set_color(color);
        Self {
            input,
            idle_since: now,
            idle_next_step: None,
            idle_color: color,
        }
    }

    /// Run one tick. Returns `true` when the user committed the current
    /// selection with a button release.
    pub fn tick<B, P>(
        &mut self,
        model: &mut MenuModel<'_, P>,
        view: &mut MenuView,
        board: &mut B,
    ) -> bool
    where
        B: Board,
        P: PromptSource + ?Sized,
    {
        let now = board.now_ms();
        self.input.tick(board.input(), now);
        let events = self.input.current_input_event();

        if events.is_empty() {
            self.animate_idle(model, board.status(), now);
        } else {
            self.idle_since = now;
            self.idle_next_step = None;
        }

        if events.contains(InputEvents::BUTTON_PRESS) {
            let color = if self.input.held_ms() >= LONG_PRESS_MS {
                LONG_PRESS_COLOR
            } else {
                ACTIVE_COLOR
            };
            board.status().set_color(color);
        }

        if events.is_release() {
            board.status().set_color(COMMIT_COLOR);
            return true;
        }

        let count = model.max_choices();
        let next = if events.contains(InputEvents::ROTARY_POSITIVE) {
            Some(select_next(model.choice(), count))
        } else if events.contains(InputEvents::ROTARY_NEGATIVE) {
            Some(select_prev(model.choice(), count))
        } else {
            None
        };

        if let Some(index) = next {
            model.update(index);
            view.update(model, board.display());
            board.status().set_color(StatusColor::for_choice(model.choice()));
        }

        false
    }

    /// `true` while the idle animation owns the status LED.
    pub fn is_idle_animating(&self) -> bool {
        self.idle_next_step.is_some()
    }

    fn animate_idle<P, S>(&mut self, model: &MenuModel<'_, P>, status: &mut S, now: u32)
    where
        P: PromptSource + ?Sized,
        S: StatusIndicator,
    {
        let due = match self.idle_next_step {
            Some(deadline) => (now.wrapping_sub(deadline) as i32) >= 0,
            None => {
                let first = IDLE_TIMEOUT_MS + IDLE_STEP_MS;
                if now.wrapping_sub(self.idle_since) < first {
                    return;
                }
                self.idle_color = StatusColor::for_choice(model.choice());
                self.idle_next_step = Some(self.idle_since.wrapping_add(first));
                true
            }
        };

        if let (true, Some(deadline)) = (due, self.idle_next_step) {
            self.idle_color = self.idle_color.next_idle();
            status.set_color(self.idle_color);
            self.idle_next_step = Some(deadline.wrapping_add(IDLE_STEP_MS));
        }
    }
}
