//! Server-side session map.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use ozilly_core::models::SessionState;
use uuid::Uuid;

/// Sessions untouched for this long are dropped.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Clone, Debug)]
struct Slot {
    state: SessionState,
    last_seen: Instant,
}

/// Per-user [`SessionState`] keyed by an opaque id handed to the browser.
///
/// Handlers take a copy with [`get`](Self::get), run the action, and write
/// the result back with [`put`](Self::put). The lock is never held across an
/// upstream call. Every access refreshes the session and evicts the ones idle
/// for longer than the TTL.
#[derive(Clone)]
pub struct SessionStore {
    ttl: Duration,
    inner: Arc<Mutex<HashMap<Uuid, Slot>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn create(&self) -> Uuid {
        self.create_at(Instant::now())
    }

    pub fn get(&self, id: Uuid) -> Option<SessionState> {
        self.get_at(id, Instant::now())
    }

    /// Store `state` for an existing session. Returns false if the id is
    /// unknown or expired.
    pub fn put(&self, id: Uuid, state: SessionState) -> bool {
        self.put_at(id, state, Instant::now())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("session lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn create_at(&self, now: Instant) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.inner.lock().expect("session lock poisoned");
        self.evict_idle(&mut sessions, now);
        sessions.insert(
            id,
            Slot {
                state: SessionState::default(),
                last_seen: now,
            },
        );
        id
    }

    fn get_at(&self, id: Uuid, now: Instant) -> Option<SessionState> {
        let mut sessions = self.inner.lock().expect("session lock poisoned");
        self.evict_idle(&mut sessions, now);
        sessions.get_mut(&id).map(|slot| {
            slot.last_seen = now;
            slot.state.clone()
        })
    }

    fn put_at(&self, id: Uuid, state: SessionState, now: Instant) -> bool {
        let mut sessions = self.inner.lock().expect("session lock poisoned");
        self.evict_idle(&mut sessions, now);
        match sessions.get_mut(&id) {
            Some(slot) => {
                slot.state = state;
                slot.last_seen = now;
                true
            }
            None => false,
        }
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, Slot>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, slot| now.saturating_duration_since(slot.last_seen) <= self.ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!("Evicted {} idle sessions", evicted);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
