//! Host-side fakes for the collaborator traits.

use std::cell::Cell;
use std::rc::Rc;

use crate::board::{Clock, Devices};
use crate::config::{FIRST_BASELINE, GLYPH_WIDTH};
use crate::input::ControlInput;
use crate::ui::{DisplaySurface, DrawColor, StatusColor, StatusIndicator};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Clear,
    Cursor(i32, i32),
    Print(String),
    Box { x: i32, y: i32, color: DrawColor },
    Color(DrawColor),
    Flush,
}

/// Display surface that records every call.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    cursor: (i32, i32),
    color: Option<DrawColor>,
}

impl RecordingSurface {
    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Clear).count()
    }

    pub fn flushes(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Flush).count()
    }

    /// Printed strings, in order.
    pub fn printed(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Print(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Marker boxes drawn, as `(y, color)`.
    pub fn boxes(&self) -> Vec<(i32, DrawColor)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Box { y, color, .. } => Some((*y, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl DisplaySurface for RecordingSurface {
    fn clear(&mut self) {
        self.cursor = (0, FIRST_BASELINE);
        self.ops.push(Op::Clear);
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
        self.ops.push(Op::Cursor(x, y));
    }

    fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    fn print(&mut self, text: &str) {
        self.cursor.0 += text.chars().count() as i32 * GLYPH_WIDTH;
        self.ops.push(Op::Print(text.to_string()));
    }

    fn print_number(&mut self, value: u32) {
        self.print(&value.to_string());
    }

    fn draw_box(&mut self, x: i32, y: i32, _w: u32, _h: u32) {
        let color = self.color.unwrap_or(DrawColor::Normal);
        self.ops.push(Op::Box { x, y, color });
    }

    fn set_draw_color(&mut self, color: DrawColor) {
        self.color = Some(color);
        self.ops.push(Op::Color(color));
    }

    fn flush(&mut self) {
        self.ops.push(Op::Flush);
    }
}

/// Status LED that remembers every colour it was given.
#[derive(Default)]
pub struct RecordingStatus {
    pub history: Vec<StatusColor>,
}

impl RecordingStatus {
    pub fn last(&self) -> Option<StatusColor> {
        self.history.last().copied()
    }
}

impl StatusIndicator for RecordingStatus {
    fn set_color(&mut self, color: StatusColor) {
        self.history.push(color);
    }
}

/// Switch level and encoder position set directly by the test.
#[derive(Default)]
pub struct FakeControls {
    pub pressed: bool,
    pub position: i32,
}

impl ControlInput for FakeControls {
    fn button_pressed(&mut self) -> bool {
        self.pressed
    }

    fn encoder_position(&mut self) -> i32 {
        self.position
    }
}

/// Clock advanced by hand. Shared so tests can keep a handle after the
/// board takes ownership.
#[derive(Clone, Default)]
pub struct ManualClock(pub Rc<Cell<u32>>);

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

pub type TestBoard = Devices<RecordingSurface, RecordingStatus, FakeControls, ManualClock>;

pub fn board() -> TestBoard {
    Devices {
        display: RecordingSurface::default(),
        status: RecordingStatus::default(),
        input: FakeControls::default(),
        clock: ManualClock::default(),
    }
}

/// Advance the clock in `step_ms` increments for `duration_ms`, calling
/// `tick` after each step. Stops early and returns `true` on commit.
pub fn run_for(
    board: &mut TestBoard,
    duration_ms: u32,
    step_ms: u32,
    mut tick: impl FnMut(&mut TestBoard) -> bool,
) -> bool {
    let mut elapsed = 0;
    while elapsed < duration_ms {
        let now = board.clock.0.get().wrapping_add(step_ms);
        board.clock.0.set(now);
        elapsed += step_ms;
        if tick(board) {
            return true;
        }
    }
    false
}

/// Press, hold for `hold_ms`, release; ticking every 5 ms. Returns `true`
/// if a tick committed.
pub fn click(
    board: &mut TestBoard,
    hold_ms: u32,
    mut tick: impl FnMut(&mut TestBoard) -> bool,
) -> bool {
    board.input.pressed = true;
    if run_for(board, hold_ms, 5, &mut tick) {
        return true;
    }
    board.input.pressed = false;
    run_for(board, 200, 5, &mut tick)
}

/// Turn the encoder one detent and give the controller one tick.
pub fn turn(
    board: &mut TestBoard,
    clockwise: bool,
    mut tick: impl FnMut(&mut TestBoard) -> bool,
) -> bool {
    board.input.position += if clockwise { 1 } else { -1 };
    run_for(board, 5, 5, &mut tick)
}
