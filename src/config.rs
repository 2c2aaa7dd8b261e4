//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and display geometry
//! live here so they can be tuned in one place.

// Input timing

/// Raw button level must hold this long before it is accepted (ms).
pub const BUTTON_DEBOUNCE_MS: u32 = 50;

/// Presses held at least this long release as a long press (ms).
pub const LONG_PRESS_MS: u32 = 2_000;

/// Main loop polling interval (ms). Keeps well under the debounce window.
pub const POLL_INTERVAL_MS: u64 = 5;

// Status indicator timing

/// Inactivity before the status LED starts its idle animation (ms).
/// 300 000 ms = 5 minutes.
pub const IDLE_TIMEOUT_MS: u32 = 300_000;

/// Time between idle animation colour steps (ms).
pub const IDLE_STEP_MS: u32 = 4_000;

// Display geometry (128×64 monochrome OLED)

/// Display width in pixels.
pub const DISPLAY_WIDTH: i32 = 128;

/// Display height in pixels.
pub const DISPLAY_HEIGHT: i32 = 64;

/// Height of one text row in pixels.
pub const ROW_HEIGHT: i32 = 8;

/// Advance width of one glyph in pixels (5×8 font).
pub const GLYPH_WIDTH: i32 = 5;

/// Baseline of the first text row (the menu title).
pub const FIRST_BASELINE: i32 = 8;

/// Prompts visible on one menu page: the title takes the top row,
/// leaving seven rows below it.
pub const PAGE_SIZE: u8 = 7;

/// Selection marker: a `MARKER_SIZE` square at column `MARKER_X`,
/// `MARKER_Y_OFFSET` pixels below the top of the page's first row.
pub const MARKER_X: i32 = 1;
pub const MARKER_SIZE: u32 = 3;
pub const MARKER_Y_OFFSET: i32 = 11;

/// Prompts start past the marker with a 3 px gap.
pub const PROMPT_X: i32 = MARKER_X + MARKER_SIZE as i32 + 3;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Encoder A      → P0.03
//   Encoder B      → P0.04
//   Encoder switch → P0.28 (active-low, internal pull-up)
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   RGB LED R/G/B  → P0.13 / P0.14 / P0.15

/// Quadrature transitions per detent of the rotary encoder.
pub const ENCODER_TRANSITIONS_PER_STEP: i8 = 4;

// Navigation

/// Menu levels the navigator can return through. Deeper levels still
/// open, but going back from them skips the levels that did not fit.
pub const MAX_MENU_DEPTH: usize = 8;

// Heap

/// Heap reserved for the menu process chain (bytes). Only one process
/// (plus its successor during hand-over) is alive at a time, next to one
/// small rebuild closure per parent level.
pub const HEAP_SIZE: usize = 4 * 1024;
