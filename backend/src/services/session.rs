//! In-memory session store
//!
//! Sessions are volatile: they live for the lifetime of the process and are
//! never written anywhere. A session idle for longer than the configured
//! timeout is dropped.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use shared::SessionContext;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Idle timeout used by [`SessionStore::new`]
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

struct SessionEntry {
    context: SessionContext,
    last_seen: Instant,
}

/// Shared map from session id to session context
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Snapshot of a session; unknown or expired ids get a fresh context
    pub async fn load(&self, id: Uuid) -> SessionContext {
        self.sessions
            .read()
            .await
            .get(&id)
            .filter(|entry| entry.last_seen.elapsed() < self.idle_timeout)
            .map(|entry| entry.context.clone())
            .unwrap_or_default()
    }

    /// Apply one transition to a session and store the result
    ///
    /// The write lock is held for the whole transition so two requests of
    /// the same session never interleave. Idle sessions are swept first.
    pub async fn update<F, R>(&self, id: Uuid, transition: F) -> R
    where
        F: FnOnce(&mut SessionContext) -> R,
    {
        let mut sessions = self.sessions.write().await;
        Self::sweep(&mut sessions, self.idle_timeout);

        let entry = sessions.entry(id).or_insert_with(|| {
            tracing::debug!("Creating session {}", id);
            SessionEntry {
                context: SessionContext::new(),
                last_seen: Instant::now(),
            }
        });
        entry.last_seen = Instant::now();
        transition(&mut entry.context)
    }

    /// Drop every session idle for longer than the timeout
    ///
    /// Returns the number of evicted sessions.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        Self::sweep(&mut sessions, self.idle_timeout)
    }

    /// Periodically evict idle sessions for as long as the process runs
    pub fn spawn_eviction(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle().await;
                if evicted > 0 {
                    tracing::debug!(evicted, "Evicted idle sessions");
                }
            }
        })
    }

    fn sweep(sessions: &mut HashMap<Uuid, SessionEntry>, idle_timeout: Duration) -> usize {
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_seen.elapsed() < idle_timeout);
        before - sessions.len()
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.sessions.read().await.contains_key(&id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_does_not_create_sessions() {
        let store = SessionStore::new();
        let session = store.load(Uuid::new_v4()).await;
        assert!(session.chat.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn update_persists_transition() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();

        let appended = store.update(id, |s| s.send_chat("oi")).await;
        assert_eq!(appended, 2);
        assert!(store.contains(id).await);
        assert_eq!(store.load(id).await.chat.len(), 2);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.update(a, |s| s.send_chat("só para a")).await;
        store.update(b, |_| ()).await;

        assert_eq!(store.load(a).await.chat.len(), 2);
        assert!(store.load(b).await.chat.is_empty());
        assert_eq!(store.len().await, 2);
    }

    #[test]
    fn concurrent_submissions_all_land() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();

        tokio_test::block_on(async {
            let tasks: Vec<_> = (0..8)
                .map(|i| {
                    let store = store.clone();
                    tokio::spawn(async move {
                        store.update(id, |s| s.send_chat(&format!("mensagem {}", i))).await
                    })
                })
                .collect();
            for task in tasks {
                task.await.unwrap();
            }
        });

        let chat = tokio_test::block_on(store.load(id)).chat;
        assert_eq!(chat.len(), 16);
        assert!(chat.messages().iter().step_by(2).all(|m| m.author.is_user()));
    }

    #[tokio::test]
    async fn idle_sessions_are_evicted() {
        let store = SessionStore::with_idle_timeout(Duration::from_millis(50));
        let idle = Uuid::new_v4();
        let active = Uuid::new_v4();

        store.update(idle, |s| s.send_chat("oi")).await;
        tokio::time::sleep(Duration::from_millis(80)).await;
        store.update(active, |s| s.send_chat("oi")).await;

        assert!(!store.contains(idle).await);
        assert!(store.contains(active).await);
        assert!(store.load(idle).await.chat.is_empty());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn evict_idle_sweeps_without_writes() {
        let store = SessionStore::with_idle_timeout(Duration::from_millis(20));
        for _ in 0..5 {
            store.update(Uuid::new_v4(), |_| ()).await;
        }
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(store.evict_idle().await, 5);
        assert!(store.is_empty().await);
    }
}
