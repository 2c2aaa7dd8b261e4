//! Rotary encoder + push switch input.
//!
//! The hardware adapter resolves electrical details (active-low switch,
//! quadrature decoding) and exposes two raw readings. The
//! [`InputClassifier`] turns those readings into per-tick events.

pub mod classifier;

use core::ops::{BitOr, BitOrAssign};

pub use classifier::InputClassifier;

/// Raw control readings, sampled once per tick.
pub trait ControlInput {
    /// `true` while the push switch is electrically closed.
    fn button_pressed(&mut self) -> bool;

    /// Encoder detent counter. Increases clockwise, wraps freely.
    fn encoder_position(&mut self) -> i32;
}

/// Events observed during one tick, as a bitmask.
///
/// Flags are independent: a tick may report a release and a rotation
/// together.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvents(u8);

impl InputEvents {
    pub const NONE: Self = Self(0);
    /// Button is currently held (debounced).
    pub const BUTTON_PRESS: Self = Self(1 << 0);
    /// Button released before the long-press threshold.
    pub const BUTTON_SHORT_RELEASE: Self = Self(1 << 1);
    /// Button released at or after the long-press threshold.
    pub const BUTTON_LONG_RELEASE: Self = Self(1 << 2);
    /// Encoder moved clockwise since the previous tick.
    pub const ROTARY_POSITIVE: Self = Self(1 << 3);
    /// Encoder moved counter-clockwise since the previous tick.
    pub const ROTARY_NEGATIVE: Self = Self(1 << 4);

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` if every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` if any flag in `other` is set.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// `true` if either release flag is set.
    pub const fn is_release(self) -> bool {
        self.intersects(Self(Self::BUTTON_SHORT_RELEASE.0 | Self::BUTTON_LONG_RELEASE.0))
    }
}

impl BitOr for InputEvents {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for InputEvents {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
