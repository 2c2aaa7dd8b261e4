//! Paged list menus: model, view and controller.
//!
//! The model owns the selection, the view owns what is on screen, and
//! the controller turns classified input into model updates and view
//! redraws. A [`crate::process::ListProcess`] bundles one of each.

pub mod controller;
pub mod model;
pub mod prompts;
pub mod view;


pub use controller::MenuController;
pub use model::MenuModel;
pub use prompts::{inline_prompt, NulSeparated, PromptSource};
pub use view::{MenuView, Redraw};
