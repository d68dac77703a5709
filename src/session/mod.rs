//! Session state and storage.

pub mod state;
pub mod store;

pub use state::{DialogStep, SelectedRecord, SelectionOption, Session};
pub use store::{InMemorySessionStore, SessionStore, spawn_expiry_task};
