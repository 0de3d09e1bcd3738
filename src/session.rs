//! Session manager - named registry of live drag sessions.
//!
//! Box views are recreated on every render, so gesture state cannot live in
//! the view. Each interactive box instead holds a [`BoxId`] and a shared
//! handle to a [`SessionManager`] owned by the nearest common ancestor in
//! the component tree; the manager hands out the one [`DragSession`] for
//! that id across all re-creations. The manager's lifetime is explicit: it
//! is constructed alongside the owning screen and dropped when that screen
//! is torn down.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::input::DragSession;

/// Stable identity of one interactive box.
///
/// The id is the only identity that survives re-creation of the view, so two
/// live boxes must never share one: their sessions would corrupt each other.
/// This is a caller contract, not runtime-checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxId(String);

impl BoxId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BoxId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry mapping box ids to their drag sessions.
///
/// Sessions are created lazily on first access and kept for the manager's
/// lifetime; the set is bounded by the number of distinct box ids, which is
/// small and static in a well-formed tree. The mutex makes the manager
/// freely cloneable by handle across box instances; it does not license
/// concurrent drags on one id.
#[derive(Default)]
pub struct SessionManager {
    sessions: Mutex<HashMap<BoxId, Arc<Mutex<DragSession>>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session for `id`, created idle on first use.
    ///
    /// Always returns the same instance for the same id within this
    /// manager's lifetime.
    pub fn session(&self, id: &BoxId) -> Arc<Mutex<DragSession>> {
        let mut sessions = self.sessions.lock();
        if let Some(session) = sessions.get(id) {
            return Arc::clone(session);
        }
        let session = Arc::new(Mutex::new(DragSession::default()));
        sessions.insert(id.clone(), Arc::clone(&session));
        session
    }

    /// Number of sessions created so far.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}
