use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::{
    quiz::{error::QuizError, session::QuizSession},
    server::error::ServerError,
};

struct SessionEntry {
    session: QuizSession,
    touched_at: DateTime<Utc>,
}

/// In-memory session storage with a per-entry idle TTL. An entry that has
/// outlived the TTL is treated as absent on access; a background task sweeps
/// the rest.
pub struct SessionStore {
    entries: DashMap<Uuid, SessionEntry>,
    ttl: Duration,
}

impl SessionStore {
    pub fn from_ttl(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Creates a fresh idle session and returns its id.
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.insert(
            id,
            SessionEntry {
                session: QuizSession::new(),
                touched_at: Utc::now(),
            },
        );

        id
    }

    /// Runs an operation against one session while holding its map entry,
    /// which serializes concurrent mutations of the same session.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut QuizSession) -> Result<T, QuizError>,
    ) -> Result<T, ServerError> {
        let now = Utc::now();

        let Some(mut entry) = self.entries.get_mut(&id) else {
            return Err(ServerError::NotFound(format!(
                "No quiz session with id {}",
                id
            )));
        };

        if now - entry.touched_at > self.ttl {
            drop(entry);
            self.entries.remove(&id);
            return Err(ServerError::NotFound(format!(
                "Quiz session {} has expired",
                id
            )));
        }

        entry.touched_at = now;
        let result = f(&mut entry.session)?;

        Ok(result)
    }

    pub fn remove(&self, id: Uuid) {
        self.entries.remove(&id);
    }

    pub fn evict_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now - entry.touched_at <= self.ttl);

        let evicted = before - self.entries.len();
        if evicted > 0 {
            debug!("Evicted {} expired quiz sessions", evicted);
        }

        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
