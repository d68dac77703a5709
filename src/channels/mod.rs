//! Transport boundary: the Twilio webhook and its message codec.

pub mod codec;
pub mod twilio;
pub mod webhook;

pub use codec::{Chunk, DEFAULT_MAX_MESSAGE_LENGTH, chunk, encode, rejoin};
pub use webhook::{WebhookState, webhook_routes};
