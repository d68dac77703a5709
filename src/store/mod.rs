//! Persistence layer: the document store behind the crop catalog.

pub mod libsql_backend;
pub mod memory;
pub mod migrations;
pub mod traits;

pub use libsql_backend::LibSqlBackend;
pub use memory::MemoryDocumentStore;
pub use traits::{CASH_CROPS, CROPS, DocumentStore, FRUIT_CROPS};
