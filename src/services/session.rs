//! Session cookie resolution and idle-session eviction.
//!
//! DESIGN
//! ======
//! A session is identified by a random UUID carried in an HTTP-only cookie.
//! Only routes that edit or render the form create sessions (`with_session`);
//! an unknown or malformed cookie there gets a fresh session rather than an
//! error. Read-only routes (`read_form`, `with_existing_session`) never
//! create one, so requests without a cookie leave the session map untouched.
//!
//! The map lock is held just long enough to find or insert a session. The
//! user action itself runs under that session's own mutex, so it is applied
//! in full before the next action on the same session, and other sessions
//! are never blocked behind it.
//!
//! A background task wakes every `session_sweep` and drops sessions idle
//! longer than `session_idle`. Form data is never persisted, so eviction
//! discards it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::form::FormState;
use crate::state::{AppState, SessionState, SharedSession};

pub const COOKIE_NAME: &str = "audio_agenda_session";

fn cookie_session_id(jar: &CookieJar) -> Option<Uuid> {
    jar.get(COOKIE_NAME).and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

async fn find_session(state: &AppState, id: Uuid) -> Option<SharedSession> {
    state.sessions.read().await.get(&id).map(Arc::clone)
}

/// Run `f` against the caller's session, creating one if needed.
///
/// Returns the cookie jar to send back (with a new cookie when a session was
/// minted), the session ID, and `f`'s result.
pub async fn with_session<R>(
    state: &AppState,
    jar: CookieJar,
    f: impl FnOnce(&mut SessionState) -> R,
) -> (CookieJar, Uuid, R) {
    if let Some(id) = cookie_session_id(&jar) {
        if let Some(session) = find_session(state, id).await {
            let mut session = session.lock().await;
            session.touch();
            let out = f(&mut *session);
            return (jar, id, out);
        }
        debug!(%id, "session cookie refers to unknown session; minting a new one");
    }

    let id = Uuid::new_v4();
    let mut session = SessionState::new();
    let out = f(&mut session);
    state.sessions.write().await.insert(id, Arc::new(Mutex::new(session)));

    info!(%id, "session created");
    let cookie = session_cookie(id, state.config.cookie_secure, state.config.session_idle);
    (jar.add(cookie), id, out)
}

/// Run `f` against the caller's session only if it already exists.
///
/// Returns `None` when the request carries no cookie for a live session.
/// Never creates a session and never sets a cookie.
pub async fn with_existing_session<R>(
    state: &AppState,
    jar: &CookieJar,
    f: impl FnOnce(&mut SessionState) -> R,
) -> Option<R> {
    let session = find_session(state, cookie_session_id(jar)?).await?;
    let mut session = session.lock().await;
    session.touch();
    Some(f(&mut *session))
}

/// Read the caller's form without creating a session. Visitors without a
/// live session read a default form.
pub async fn read_form<R>(state: &AppState, jar: &CookieJar, f: impl FnOnce(&FormState) -> R) -> R {
    let existing = match cookie_session_id(jar) {
        Some(id) => find_session(state, id).await,
        None => None,
    };
    let Some(session) = existing else {
        return f(&FormState::new());
    };
    let mut session = session.lock().await;
    session.touch();
    f(&session.form)
}

/// The cookie expires together with the idle window of its session.
pub(crate) fn session_cookie(id: Uuid, secure: bool, idle: Duration) -> Cookie<'static> {
    let max_age = time::Duration::seconds(i64::try_from(idle.as_secs()).unwrap_or(i64::MAX));
    Cookie::build((COOKIE_NAME, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

// =============================================================================
// IDLE EVICTION
// =============================================================================

/// Spawn the background idle-session sweeper. Returns a handle for shutdown.
pub fn spawn_session_sweeper(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(state.config.session_sweep);
        loop {
            interval.tick().await;
            let evicted = evict_idle(&state, Instant::now()).await;
            if evicted > 0 {
                info!(evicted, "idle sessions evicted");
            }
        }
    })
}

/// Drop sessions whose `last_seen` is older than the configured idle window
/// as of `now`. Returns the number removed.
///
/// A session some request still holds a handle to is in use and is kept.
pub(crate) async fn evict_idle(state: &AppState, now: Instant) -> usize {
    let idle: Duration = state.config.session_idle;
    let mut sessions = state.sessions.write().await;
    let before = sessions.len();
    sessions.retain(|_, session| {
        if Arc::strong_count(session) > 1 {
            return true;
        }
        session.try_lock().map_or(true, |s| now.saturating_duration_since(s.last_seen) <= idle)
    });
    before - sessions.len()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
