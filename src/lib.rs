//! AgriIndia Assistant: menu-driven crop and scheme information over SMS/WhatsApp.

pub mod catalog;
pub mod channels;
pub mod config;
pub mod dialog;
pub mod error;
pub mod format;
pub mod i18n;
pub mod schemes;
pub mod session;
pub mod store;
