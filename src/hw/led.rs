//! Three-pin RGB status LED.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::Error;
use crate::ui::{StatusColor, StatusIndicator};

/// Common-cathode RGB LED, one GPIO per channel, driven high to light.
pub struct RgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    error: Option<Error>,
}

impl<R, G, B> RgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self {
            red,
            green,
            blue,
            error: None,
        }
    }

    /// Most recent channel write failure since the last call.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }
}

impl<R, G, B> StatusIndicator for RgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    fn set_color(&mut self, color: StatusColor) {
        let (r, g, b) = color.rgb();
        let ok = self.red.set_state(PinState::from(r)).is_ok()
            & self.green.set_state(PinState::from(g)).is_ok()
            & self.blue.set_state(PinState::from(b)).is_ok();
        if !ok {
            self.error = Some(Error::Status);
        }
    }
}
