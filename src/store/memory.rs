//! In-memory document store, used when no database path is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::traits::{DocumentStore, document_key};
use crate::error::DatabaseError;

/// Collections kept as ordered vectors behind a `RwLock`.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn field_matches(document: &Value, field: &str, wanted: &str) -> bool {
    document
        .get(field)
        .and_then(Value::as_str)
        .is_some_and(|s| s.trim().to_lowercase() == wanted)
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, DatabaseError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Value>, DatabaseError> {
        let wanted = value.trim().to_lowercase();
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| field_matches(d, field, &wanted)))
            .cloned())
    }

    async fn upsert_by_key(
        &self,
        collection: &str,
        key_field: &str,
        document: &Value,
    ) -> Result<(), DatabaseError> {
        let key = document_key(collection, key_field, document)?;
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|d| field_matches(d, key_field, &key)) {
            Some(existing) => *existing = document.clone(),
            None => docs.push(document.clone()),
        }
        Ok(())
    }
}
