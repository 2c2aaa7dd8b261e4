//! SSD1306 OLED behind the [`DisplaySurface`] trait.

use core::fmt::Write as _;

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::config::FIRST_BASELINE;
use crate::error::Error;
use crate::ui::{DisplaySurface, DrawColor};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered 128×64 panel with a text cursor.
///
/// Drawing goes to the frame buffer; only [`DisplaySurface::flush`]
/// touches the bus. The panel has no XOR mode, so `DrawColor::Xor`
/// draws lit pixels.
pub struct OledSurface<I2C> {
    display: Display<I2C>,
    cursor: Point,
    color: BinaryColor,
    error: Option<Error>,
}

impl<I2C> OledSurface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the panel and clear the screen.
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        let mut error = display.init().err().map(|_| Error::Display);
        display.clear_buffer();
        if display.flush().is_err() {
            error = Some(Error::Display);
        }
        Self {
            display,
            cursor: Point::new(0, FIRST_BASELINE),
            color: BinaryColor::On,
            error,
        }
    }

    /// Most recent bus failure since the last call.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }
}

impl<I2C> DisplaySurface for OledSurface<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.display.clear_buffer();
        self.cursor = Point::new(0, FIRST_BASELINE);
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn cursor(&self) -> (i32, i32) {
        (self.cursor.x, self.cursor.y)
    }

    fn print(&mut self, text: &str) {
        let style = MonoTextStyle::new(&FONT_5X8, self.color);
        // Drawing into the frame buffer cannot fail.
        if let Ok(next) = Text::new(text, self.cursor, style).draw(&mut self.display) {
            self.cursor.x = next.x;
        }
    }

    fn print_number(&mut self, value: u32) {
        let mut digits: heapless::String<10> = heapless::String::new();
        let _ = write!(digits, "{}", value);
        self.print(digits.as_str());
    }

    fn draw_box(&mut self, x: i32, y: i32, w: u32, h: u32) {
        let _ = Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(&mut self.display);
    }

    fn set_draw_color(&mut self, color: DrawColor) {
        self.color = match color {
            DrawColor::Normal | DrawColor::Xor => BinaryColor::On,
            DrawColor::Inverted => BinaryColor::Off,
        };
    }

    fn flush(&mut self) {
        if self.display.flush().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("display: flush failed");
            self.error = Some(Error::Display);
        }
    }
}
