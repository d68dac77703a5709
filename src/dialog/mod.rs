//! Menu-driven conversation logic.

pub mod engine;
pub mod menus;

pub use engine::{DialogEngine, DialogReply, EXIT_COMMAND};
