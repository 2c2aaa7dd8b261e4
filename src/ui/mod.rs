//! User interface collaborators - display surface + RGB status LED.
//!
//! The menu core draws through [`DisplaySurface`] and signals state
//! through [`StatusIndicator`]; neither knows which hardware backs it.
//!
//! ## Components
//!
//! - **Surface**: 128×64 monochrome text/box drawing with a cursor
//! - **Status**: 8-colour RGB LED palette
//! - **Input logic**: wrap-around selection and paging arithmetic

pub mod input_logic;
pub mod status;
pub mod surface;

pub use status::{StatusColor, StatusIndicator};
pub use surface::{DisplaySurface, DrawColor};
