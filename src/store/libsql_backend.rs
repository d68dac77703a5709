//! libSQL backend: documents and sessions in a local or in-memory database.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use libsql::{Connection, Database as LibSqlDatabase, params};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::DatabaseError;
use crate::session::{Session, SessionStore};
use crate::store::migrations;
use crate::store::traits::{DocumentStore, document_key};

/// libSQL database backend.
///
/// Stores a single connection that is reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlBackend {
    #[allow(dead_code)]
    db: Arc<LibSqlDatabase>,
    conn: Connection,
}

impl LibSqlBackend {
    /// Open (or create) a local database file and run migrations.
    pub async fn new_local(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Pool(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Pool(format!("Failed to open libSQL database: {e}")))?;

        let backend = Self::from_database(db)?;
        backend.init_schema().await?;
        info!(path = %path.display(), "Database opened");
        Ok(backend)
    }

    /// Create an in-memory database (for tests).
    pub async fn new_memory() -> Result<Self, DatabaseError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| {
                DatabaseError::Pool(format!("Failed to create in-memory database: {e}"))
            })?;

        let backend = Self::from_database(db)?;
        backend.init_schema().await?;
        Ok(backend)
    }

    fn from_database(db: LibSqlDatabase) -> Result<Self, DatabaseError> {
        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Pool(format!("Failed to create connection: {e}")))?;
        Ok(Self {
            db: Arc::new(db),
            conn,
        })
    }

    fn conn(&self) -> &Connection {
        &self.conn
    }

    async fn init_schema(&self) -> Result<(), DatabaseError> {
        migrations::run_migrations(self.conn()).await
    }
}

// ── Helper functions ────────────────────────────────────────────────

/// Parse a stored JSON body.
fn parse_body(op: &str, body: &str) -> Result<Value, DatabaseError> {
    serde_json::from_str(body).map_err(|e| DatabaseError::Serialization(format!("{op}: {e}")))
}

/// JSON path for a top-level field, quoted so any key is addressable.
fn json_path(field: &str) -> String {
    format!("$.\"{}\"", field.replace('"', "\\\""))
}

// ── Documents ───────────────────────────────────────────────────────

#[async_trait]
impl DocumentStore for LibSqlBackend {
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT body FROM documents WHERE collection = ?1 ORDER BY rowid",
                params![collection],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("find_all: {e}")))?;

        let mut documents = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| DatabaseError::Query(format!("find_all: {e}")))?
        {
            let body: String = row
                .get(0)
                .map_err(|e| DatabaseError::Query(format!("find_all: {e}")))?;
            documents.push(parse_body("find_all", &body)?);
        }
        Ok(documents)
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Value>, DatabaseError> {
        let wanted = value.trim().to_lowercase();
        let mut rows = self
            .conn()
            .query(
                "SELECT body FROM documents
                 WHERE collection = ?1 AND lower(trim(json_extract(body, ?2))) = ?3
                 ORDER BY rowid LIMIT 1",
                params![collection, json_path(field), wanted],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("find_by_field: {e}")))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let body: String = row
                    .get(0)
                    .map_err(|e| DatabaseError::Query(format!("find_by_field: {e}")))?;
                parse_body("find_by_field", &body).map(Some)
            }
            Ok(None) => Ok(None),
            Err(e) => Err(DatabaseError::Query(format!("find_by_field: {e}"))),
        }
    }

    async fn upsert_by_key(
        &self,
        collection: &str,
        key_field: &str,
        document: &Value,
    ) -> Result<(), DatabaseError> {
        let key = document_key(collection, key_field, document)?;
        let body = serde_json::to_string(document)
            .map_err(|e| DatabaseError::Serialization(format!("upsert_by_key: {e}")))?;
        let now = Utc::now().to_rfc3339();

        self.conn()
            .execute(
                "INSERT INTO documents (collection, doc_key, body, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)
                 ON CONFLICT(collection, doc_key) DO UPDATE SET
                    body = excluded.body,
                    updated_at = excluded.updated_at",
                params![collection, key.as_str(), body, now],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("upsert_by_key: {e}")))?;

        debug!(collection, key = %key, "Document upserted");
        Ok(())
    }
}

// ── Sessions ────────────────────────────────────────────────────────

#[async_trait]
impl SessionStore for LibSqlBackend {
    async fn get(&self, id: &str) -> Result<Session, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT body FROM sessions WHERE sender = ?1", params![id])
            .await
            .map_err(|e| DatabaseError::Query(format!("get_session: {e}")))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let body: String = row
                    .get(0)
                    .map_err(|e| DatabaseError::Query(format!("get_session: {e}")))?;
                serde_json::from_str(&body)
                    .map_err(|e| DatabaseError::Serialization(format!("get_session: {e}")))
            }
            Ok(None) => Ok(Session::default()),
            Err(e) => Err(DatabaseError::Query(format!("get_session: {e}"))),
        }
    }

    async fn set(&self, id: &str, session: &Session) -> Result<(), DatabaseError> {
        let body = serde_json::to_string(session)
            .map_err(|e| DatabaseError::Serialization(format!("set_session: {e}")))?;
        let now = Utc::now().to_rfc3339();

        self.conn()
            .execute(
                "INSERT INTO sessions (sender, body, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(sender) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
                params![id, body, now],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("set_session: {e}")))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DatabaseError> {
        self.conn()
            .execute("DELETE FROM sessions WHERE sender = ?1", params![id])
            .await
            .map_err(|e| DatabaseError::Query(format!("delete_session: {e}")))?;
        Ok(())
    }
}
