//! Session storage: the `SessionStore` trait and its in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::state::Session;
use crate::error::DatabaseError;

/// Keyed by sender address. Concurrent writes for one sender are
/// last-write-wins.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The stored session, or a fresh default for an unseen sender.
    async fn get(&self, id: &str) -> Result<Session, DatabaseError>;

    async fn set(&self, id: &str, session: &Session) -> Result<(), DatabaseError>;

    async fn delete(&self, id: &str) -> Result<(), DatabaseError>;
}

struct Entry {
    session: Session,
    touched_at: DateTime<Utc>,
}

/// Process-local session map with an optional idle timeout.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Entry>>,
    idle_ttl: Option<chrono::Duration>,
}

impl InMemorySessionStore {
    /// Create a store. `idle_ttl` of `None` keeps sessions until deleted.
    pub fn new(idle_ttl: Option<Duration>) -> Arc<Self> {
        Arc::new(Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl: idle_ttl.and_then(|d| chrono::Duration::from_std(d).ok()),
        })
    }

    fn is_expired(&self, entry: &Entry, now: DateTime<Utc>) -> bool {
        self.idle_ttl
            .is_some_and(|ttl| now - entry.touched_at > ttl)
    }

    /// Drop sessions idle for longer than the TTL. Returns how many were removed.
    pub async fn expire_idle(&self) -> usize {
        if self.idle_ttl.is_none() {
            return 0;
        }
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        let removed = before - sessions.len();
        if removed > 0 {
            info!(removed, remaining = sessions.len(), "Expired idle sessions");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &str) -> Result<Session, DatabaseError> {
        let sessions = self.sessions.read().await;
        match sessions.get(id) {
            Some(entry) if !self.is_expired(entry, Utc::now()) => Ok(entry.session.clone()),
            Some(_) => {
                debug!(sender = %id, "Session idle past TTL, starting fresh");
                Ok(Session::default())
            }
            None => Ok(Session::default()),
        }
    }

    async fn set(&self, id: &str, session: &Session) -> Result<(), DatabaseError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id.to_string(),
            Entry {
                session: session.clone(),
                touched_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DatabaseError> {
        self.sessions.write().await.remove(id);
        Ok(())
    }
}

/// Spawn a background task that sweeps idle sessions every `every`.
pub fn spawn_expiry_task(
    store: Arc<InMemorySessionStore>,
    every: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            store.expire_idle().await;
        }
    })
}
