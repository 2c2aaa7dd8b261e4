//! RGB status indicator palette.
//!
//! The LED has three on/off channels, giving eight colours. Red is
//! reserved for error states signalled from outside the menu; nothing
//! in the menu core selects it.

/// The eight colours the status LED can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusColor {
    Blue,
    Red,
    Purple,
    Green,
    Turquoise,
    Yellow,
    White,
    /// LED off.
    Black,
}

/// Colours used to tag the selected menu row, cycled by index.
const NAVIGATION_PALETTE: [StatusColor; 6] = [
    StatusColor::Blue,
    StatusColor::Purple,
    StatusColor::Green,
    StatusColor::Turquoise,
    StatusColor::Yellow,
    StatusColor::White,
];

/// Colours the idle animation steps through.
const IDLE_PALETTE: [StatusColor; 4] = [
    StatusColor::Blue,
    StatusColor::Purple,
    StatusColor::Green,
    StatusColor::Turquoise,
];

/// Shown while the button is held.
pub const ACTIVE_COLOR: StatusColor = StatusColor::White;

/// Shown once a held button has passed the long-press threshold.
pub const LONG_PRESS_COLOR: StatusColor = StatusColor::Yellow;

/// Shown when a selection is committed.
pub const COMMIT_COLOR: StatusColor = StatusColor::Black;

/// Reserved for externally signalled errors.
pub const ERROR_COLOR: StatusColor = StatusColor::Red;

impl StatusColor {
    /// Channel levels `(red, green, blue)`.
    pub const fn rgb(self) -> (bool, bool, bool) {
        match self {
            StatusColor::Blue => (false, false, true),
            StatusColor::Red => (true, false, false),
            StatusColor::Purple => (true, false, true),
            StatusColor::Green => (false, true, false),
            StatusColor::Turquoise => (false, true, true),
            StatusColor::Yellow => (true, true, false),
            StatusColor::White => (true, true, true),
            StatusColor::Black => (false, false, false),
        }
    }

    /// Colour that tags menu row `index`.
    pub fn for_choice(index: u8) -> Self {
        NAVIGATION_PALETTE[index as usize % NAVIGATION_PALETTE.len()]
    }

    /// Next colour of the idle animation. Colours outside the idle
    /// palette restart it.
    pub fn next_idle(self) -> Self {
        match IDLE_PALETTE.iter().position(|&c| c == self) {
            Some(i) => IDLE_PALETTE[(i + 1) % IDLE_PALETTE.len()],
            None => IDLE_PALETTE[0],
        }
    }
}

/// Sink for status colour changes.
pub trait StatusIndicator {
    fn set_color(&mut self, color: StatusColor);
}
