use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::session::{ResumeSession, SessionView};

/// In-memory sessions keyed by id. Nothing outlives the process.
///
/// A session whose document has not changed within `idle_timeout` counts as
/// abandoned and is evicted the next time a session is opened.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, ResumeSession>>>,
    max_sessions: usize,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
            idle_timeout,
        }
    }

    /// Opens a session with the empty document. `None` when the store is full.
    pub async fn open(&self) -> Option<SessionView> {
        self.open_at(Utc::now()).await
    }

    async fn open_at(&self, now: DateTime<Utc>) -> Option<SessionView> {
        let mut sessions = self.sessions.write().await;
        let idle_timeout = self.idle_timeout;
        sessions.retain(|id, session| {
            let idle = now - session.updated_at();
            if idle > idle_timeout {
                info!("Evicted resume session {id} after {}s idle", idle.num_seconds());
                false
            } else {
                true
            }
        });
        if sessions.len() >= self.max_sessions {
            return None;
        }
        let session = ResumeSession::new();
        let view = session.view();
        sessions.insert(session.id(), session);
        info!("Opened resume session {} ({} active)", view.id, sessions.len());
        Some(view)
    }

    pub async fn view(&self, id: Uuid) -> Option<SessionView> {
        self.sessions.read().await.get(&id).map(ResumeSession::view)
    }

    /// Runs `f` against the session while holding the write lock.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut ResumeSession) -> R,
    ) -> Option<R> {
        self.sessions.write().await.get_mut(&id).map(f)
    }

    pub async fn close(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Closed resume session {id}");
        }
        removed
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::personal::PersonalField;
    use crate::editor::RandomIds;
    use crate::session::EditCommand;

    #[tokio::test]
    async fn test_open_edit_close() {
        let store = SessionStore::new(4, Duration::hours(1));
        let view = store.open().await.unwrap();
        assert_eq!(view.revision, 0);

        let applied = store
            .with_session(view.id, |s| {
                s.apply(
                    EditCommand::PersonalInfo(PersonalField::Email("a@b.io".into())),
                    &mut RandomIds,
                )
            })
            .await;
        assert!(matches!(applied, Some(Ok(()))));

        let after = store.view(view.id).await.unwrap();
        assert_eq!(after.revision, 1);
        assert_eq!(after.document.personal_info.email, "a@b.io");

        assert!(store.close(view.id).await);
        assert!(!store.close(view.id).await);
        assert!(store.view(view.id).await.is_none());
    }

    #[tokio::test]
    async fn test_capacity_is_enforced() {
        let store = SessionStore::new(1, Duration::hours(1));
        assert!(store.open().await.is_some());
        assert!(store.open().await.is_none());
        assert_eq!(store.active_count().await, 1);
    }

    #[tokio::test]
    async fn test_abandoned_sessions_are_evicted_on_open() {
        let store = SessionStore::new(2, Duration::hours(1));
        let first = store.open().await.unwrap();
        let second = store.open().await.unwrap();
        assert!(store.open().await.is_none());

        let later = Utc::now() + Duration::days(30);
        let view = store.open_at(later).await.unwrap();
        assert_eq!(store.active_count().await, 1);
        assert!(store.view(first.id).await.is_none());
        assert!(store.view(second.id).await.is_none());
        assert!(store.view(view.id).await.is_some());
    }

    #[tokio::test]
    async fn test_recent_sessions_survive_eviction() {
        let store = SessionStore::new(2, Duration::hours(1));
        let kept = store.open().await.unwrap();
        let soon = Utc::now() + Duration::minutes(10);
        assert!(store.open_at(soon).await.is_some());
        assert!(store.view(kept.id).await.is_some());
        assert!(store.open_at(soon).await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let store = SessionStore::new(1, Duration::hours(1));
        assert!(store.with_session(Uuid::new_v4(), |_| ()).await.is_none());
    }
}
