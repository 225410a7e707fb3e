//! Live pagination sessions keyed by the id embedded in their buttons.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use paginator_core::Interactive;
use tokio::sync::Mutex;
use tracing::debug;

type SessionMap = HashMap<u64, Arc<dyn Interactive>>;

/// Shared registry of running sessions.
///
/// Sessions are inserted after they start and dropped once they report
/// themselves inactive.
#[derive(Default)]
pub struct SessionRegistry {
    next_key: AtomicU64,
    sessions: Mutex<SessionMap>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a key to bake into a new session's custom ids.
    pub fn allocate_key(&self) -> u64 {
        self.next_key.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Register a started session, pruning stopped ones first.
    pub async fn insert(&self, key: u64, session: Arc<dyn Interactive>) {
        self.prune().await;
        self.sessions.lock().await.insert(key, session);
    }

    pub async fn get(&self, key: u64) -> Option<Arc<dyn Interactive>> {
        self.sessions.lock().await.get(&key).cloned()
    }

    pub async fn remove(&self, key: u64) {
        self.sessions.lock().await.remove(&key);
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    /// Drop every session that no longer owns a live message.
    pub async fn prune(&self) -> usize {
        let snapshot: Vec<(u64, Arc<dyn Interactive>)> = self
            .sessions
            .lock()
            .await
            .iter()
            .map(|(key, session)| (*key, Arc::clone(session)))
            .collect();

        let mut stale = Vec::new();
        for (key, session) in snapshot {
            if !session.is_active().await {
                stale.push(key);
            }
        }

        if !stale.is_empty() {
            let mut sessions = self.sessions.lock().await;
            for key in &stale {
                sessions.remove(key);
            }
            debug!(count = stale.len(), "pruned stopped pagination sessions");
        }

        stale.len()
    }
}
