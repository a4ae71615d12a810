//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the config and a map of live sessions. Each session owns its own
//! `FormState` and the most recent submission; nothing is shared across
//! sessions. The map lock is held only to find, insert, or evict a session;
//! each session carries its own mutex, held for one user action, so actions
//! within a session apply one at a time while other sessions proceed.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::form::FormState;
use crate::submission::SubmissionSnapshot;

// =============================================================================
// SESSION STATE
// =============================================================================

/// Per-session state. `last_submission` is `None` until the first submit;
/// each later submit replaces it.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub form: FormState,
    pub last_submission: Option<SubmissionSnapshot>,
    pub last_seen: Instant,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self { form: FormState::new(), last_submission: None, last_seen: Instant::now() }
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// A live session as stored in the map.
pub type SharedSession = Arc<Mutex<SessionState>>;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<RwLock<HashMap<Uuid, SharedSession>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config: Arc::new(config), sessions: Arc::new(RwLock::new(HashMap::new())) }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(AppConfig::default())
    }

    /// Insert a fresh session and return its ID.
    pub async fn seed_session(state: &AppState) -> Uuid {
        let id = Uuid::new_v4();
        state.sessions.write().await.insert(id, Arc::new(Mutex::new(SessionState::new())));
        id
    }

    /// Handle to a stored session; panics if `id` is not live.
    pub async fn session(state: &AppState, id: Uuid) -> SharedSession {
        Arc::clone(&state.sessions.read().await[&id])
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
