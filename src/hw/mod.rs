//! nRF52840 adapters for the collaborator traits.
//!
//! Each adapter swallows hardware faults at the trait boundary (the menu
//! core has no error paths), falls back to a safe value, and keeps the
//! most recent fault for the main loop to collect with `take_error()`.

pub mod clock;
pub mod display;
pub mod led;
pub mod rotary;

pub use clock::EmbassyClock;
pub use display::OledSurface;
pub use led::RgbLed;
pub use rotary::RotaryControl;
