//! A static text screen, dismissed with the button.

use core::marker::PhantomData;

use super::{Process, ProcessHandle};
use crate::board::Board;
use crate::config::ROW_HEIGHT;
use crate::input::InputClassifier;
use crate::ui::{DisplaySurface, DrawColor};

/// Title plus body lines, and optionally a labelled number below them.
/// Each body line may wrap once at the right edge. Any button release
/// commits.
pub struct MessageProcess<B> {
    title: &'static str,
    lines: &'static [&'static str],
    value: Option<(&'static str, u32)>,
    input: InputClassifier,
    _board: PhantomData<fn(&mut B)>,
}

impl<B: Board + 'static> MessageProcess<B> {
    /// Draw the message and start listening for a release.
    pub fn new(board: &mut B, title: &'static str, lines: &'static [&'static str]) -> Self {
        Self::open(board, title, lines, None)
    }

    /// [`MessageProcess::new`] with `label` and `value` on the last line.
    pub fn with_value(
        board: &mut B,
        title: &'static str,
        lines: &'static [&'static str],
        label: &'static str,
        value: u32,
    ) -> Self {
        Self::open(board, title, lines, Some((label, value)))
    }

    fn open(
        board: &mut B,
        title: &'static str,
        lines: &'static [&'static str],
        value: Option<(&'static str, u32)>,
    ) -> Self {
        let now = board.now_ms();
        let input = InputClassifier::new(board.input(), now);
        let mut message = Self {
            title,
            lines,
            value,
            input,
            _board: PhantomData,
        };
        message.draw(board);
        message
    }

    pub fn build(
        board: &mut B,
        title: &'static str,
        lines: &'static [&'static str],
    ) -> ProcessHandle<B> {
        ProcessHandle::new(Self::new(board, title, lines))
    }
}

impl<B: Board + 'static> Process<B> for MessageProcess<B> {
    fn tick(&mut self, board: &mut B) -> bool {
        let now = board.now_ms();
        self.input.tick(board.input(), now);
        self.input.current_input_event().is_release()
    }

    fn draw(&mut self, board: &mut B) {
        let display = board.display();
        display.clear();
        display.set_draw_color(DrawColor::Normal);
        display.println(self.title);
        for line in self.lines {
            display.print_wrapped(line);
            let (_, y) = display.cursor();
            display.set_cursor(0, y + ROW_HEIGHT);
        }
        if let Some((label, value)) = self.value {
            display.print(label);
            display.print_number(value);
        }
        display.flush();
    }

    fn choice(&self) -> u8 {
        0
    }
}
