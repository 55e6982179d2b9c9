//! In-memory data layer for Syllabus Tracker.
//!
//! There is no database: every login seeds a fresh [`Session`] with the fixed
//! sample data in [`seed`], and all mutations happen on that in-memory tree.
//! [`SessionStore`] is the shared handle the API keeps where a persistent
//! backend would keep a connection pool.

pub mod models;
pub mod seed;
pub mod session;

pub use session::Session;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Shared handle to all live sessions.
///
/// Cloning is cheap; all clones point at the same map. Lock scopes are kept
/// to single operations - mutations go through [`SessionStore::with`], which
/// holds the write lock only for the closure's duration.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session, returning its id.
    pub async fn insert(&self, session: Session) -> Uuid {
        let id = session.id;
        self.sessions.write().await.insert(id, session);
        id
    }

    /// Snapshot a session by id.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Run a mutation against a session, returning the closure's result, or
    /// `None` when the session does not exist (expired or logged out).
    pub async fn with<F, T>(&self, id: Uuid, f: F) -> Option<T>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(f)
    }

    /// Drop a session. Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Number of live sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
