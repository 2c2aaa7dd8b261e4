//! Rotary-encoder list menus for a handheld cartridge reader.
//!
//! The menu core is hardware-agnostic and host-testable: it talks to the
//! display, the status LED and the controls only through the traits in
//! [`board`], [`ui`] and [`input`].
//!
//! Usage: `cargo test` on the host, `cargo run --release --features
//! embedded` on the nRF52840.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and supplies the global heap the process chain boxes into.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// ═══════════════════════════════════════════════════════════════════════════
// Menu core
// ═══════════════════════════════════════════════════════════════════════════

pub mod board;
pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod process;
pub mod ui;

// ═══════════════════════════════════════════════════════════════════════════
// Appliance
// ═══════════════════════════════════════════════════════════════════════════

pub mod menus;

#[cfg(feature = "embedded")]
pub mod hw;

#[cfg(test)]
mod testing;

pub use board::{Board, Clock, Devices};
pub use error::Error;
pub use input::{ControlInput, InputClassifier, InputEvents};
pub use menu::{MenuController, MenuModel, MenuView, Redraw};
pub use process::{Navigator, Process, ProcessHandle, Step};
