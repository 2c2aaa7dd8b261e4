//! Display surface abstraction.
//!
//! The menu view only ever talks to this trait. The embedded build backs
//! it with the SSD1306 OLED (`hw::display`); tests back it with a
//! recorder.
//!
//! Coordinates follow text-cursor conventions: `y` is the baseline of
//! the next glyph, and `print` advances `x` by one glyph per character.

use crate::config::{DISPLAY_WIDTH, GLYPH_WIDTH, ROW_HEIGHT};

/// Right-most cursor column at which another glyph still fits.
const WRAP_LIMIT: i32 = DISPLAY_WIDTH - GLYPH_WIDTH - 1;

/// Pixel colour used by subsequent drawing calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawColor {
    /// Pixels set (lit).
    Normal,
    /// Pixels cleared; used to erase.
    Inverted,
    /// Pixels toggled.
    Xor,
}

/// A 128×64 monochrome drawing target with a text cursor.
pub trait DisplaySurface {
    /// Clear the frame buffer and home the cursor to the first row.
    fn clear(&mut self);

    fn set_cursor(&mut self, x: i32, y: i32);

    /// Current cursor position `(x, baseline)`.
    fn cursor(&self) -> (i32, i32);

    /// Print text at the cursor and advance it.
    fn print(&mut self, text: &str);

    /// Print a decimal number at the cursor and advance it.
    fn print_number(&mut self, value: u32);

    /// Fill a `w`×`h` rectangle with its top-left corner at `(x, y)`.
    fn draw_box(&mut self, x: i32, y: i32, w: u32, h: u32);

    fn set_draw_color(&mut self, color: DrawColor);

    /// Push the frame buffer to the panel.
    fn flush(&mut self);

    /// Print text, then move the cursor to the start of the next row.
    fn println(&mut self, text: &str) {
        self.print(text);
        let (_, y) = self.cursor();
        self.set_cursor(0, y + ROW_HEIGHT);
    }

    /// Print text, breaking once at the right edge.
    ///
    /// Text that fits is printed as-is. Otherwise glyphs are printed up
    /// to the edge, the cursor moves to the next row, and printing
    /// continues until the edge again; anything left is dropped.
    fn print_wrapped(&mut self, text: &str) {
        let (x, _) = self.cursor();
        let width = text.chars().count() as i32 * GLYPH_WIDTH;
        if x + width <= DISPLAY_WIDTH {
            self.print(text);
            return;
        }

        let mut glyphs = text.char_indices();
        while self.cursor().0 < WRAP_LIMIT {
            let Some((start, ch)) = glyphs.next() else {
                return;
            };
            self.print(&text[start..start + ch.len_utf8()]);
        }

        let (_, y) = self.cursor();
        self.set_cursor(0, y + ROW_HEIGHT);

        while self.cursor().0 < WRAP_LIMIT {
            let Some((start, ch)) = glyphs.next() else {
                return;
            };
            self.print(&text[start..start + ch.len_utf8()]);
        }
    }
}
