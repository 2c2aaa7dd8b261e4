//! Unified error type for cartreader-menu.
//!
//! The menu core itself has no failure modes; these variants describe
//! faults in the hardware adapters behind the collaborator traits.
//! All variants carry only fixed-size data.

/// Hardware adapter fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the display failed; the frame was dropped.
    Display,

    /// Reading an encoder or push-switch line failed; the input was
    /// treated as idle for that poll.
    Input(InputLine),

    /// Driving a status LED channel failed.
    Status,
}

/// Which physical input line failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputLine {
    EncoderA,
    EncoderB,
    Switch,
}

// Convenience conversions

impl From<InputLine> for Error {
    fn from(line: InputLine) -> Self {
        Error::Input(line)
    }
}
