//! `DocumentStore`, the mutable side of the catalog.
//!
//! Collections hold schemaless JSON documents. The assistant only reads
//! them at conversation time; writes come from admin tooling and tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DatabaseError;

/// Collection holding standard (kharif/rabi) crops.
pub const CROPS: &str = "crops";
/// Collection holding cash crops.
pub const CASH_CROPS: &str = "cash_crops";
/// Collection holding fruit crops.
pub const FRUIT_CROPS: &str = "fruit_crops";

/// Backend-agnostic document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in `collection`, in insertion order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, DatabaseError>;

    /// First document whose string `field` equals `value`, compared
    /// case-insensitively after trimming both sides.
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Value>, DatabaseError>;

    /// Insert `document`, or replace the existing document with the same
    /// normalized `key_field` value. Replacement keeps the original position.
    async fn upsert_by_key(
        &self,
        collection: &str,
        key_field: &str,
        document: &Value,
    ) -> Result<(), DatabaseError>;
}

/// Normalized key of `document[key_field]`, or an error when it is missing.
pub(crate) fn document_key(
    collection: &str,
    key_field: &str,
    document: &Value,
) -> Result<String, DatabaseError> {
    document
        .get(key_field)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DatabaseError::MissingKey {
            collection: collection.to_string(),
            field: key_field.to_string(),
        })
}
