use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use chrono::{DateTime, Duration, Utc};

use crate::{
    error::{ClinicError, ClinicResult},
    models::sessions::{Role, Session},
    storage::{JsonStore, MemoryBackend},
};

const KEY_CURRENT_USER: &str = "currentUser";

/// The single "current user" slot of one tab-session.
///
/// Memory only: it never outlives the process and no two tab-sessions share
/// one.
pub struct SessionStore {
    store: JsonStore<MemoryBackend>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            store: JsonStore::new(MemoryBackend::default()),
        }
    }

    pub fn set_current_user(&mut self, session: &Session) -> anyhow::Result<()> {
        self.store.save(KEY_CURRENT_USER, session)
    }

    pub fn get_current_user(&mut self) -> Option<Session> {
        self.store.load(KEY_CURRENT_USER).ok().flatten()
    }

    pub fn clear_current_user(&mut self) -> anyhow::Result<()> {
        self.store.remove(KEY_CURRENT_USER)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

struct TabSession {
    store: SessionStore,
    last_seen: DateTime<Utc>,
}

/// Live tab-sessions, keyed by the token handed out at login.
pub struct TabSessions {
    tabs: Mutex<HashMap<String, TabSession>>,
    idle_limit: Duration,
}

impl TabSessions {
    pub fn new(idle_limit: Duration) -> Self {
        Self {
            tabs: Mutex::new(HashMap::new()),
            idle_limit,
        }
    }

    /// Registers `store` as a new tab-session and returns its token. Tabs
    /// already past the idle limit are dropped first.
    pub fn open(&self, mut store: SessionStore) -> String {
        let token = match store.get_current_user() {
            Some(session) => {
                crate::utils::generate_login_token(&session.email, session.role.as_str())
            }
            None => crate::utils::generate_login_token("", "anonymous"),
        };
        let now = Utc::now();
        let mut tabs = self.lock();
        let before = tabs.len();
        tabs.retain(|_, tab| now.signed_duration_since(tab.last_seen) < self.idle_limit);
        if tabs.len() < before {
            tracing::debug!(dropped = before - tabs.len(), "Pruned idle tab-sessions");
        }
        tabs.insert(
            token.clone(),
            TabSession {
                store,
                last_seen: now,
            },
        );
        token
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.lock().len()
    }

    /// The session of the tab behind `token`. A tab idle for at least the
    /// idle limit has ended and is dropped here.
    pub fn current_user(&self, token: &str) -> Option<Session> {
        let mut tabs = self.lock();
        let now = Utc::now();
        let expired = match tabs.get_mut(token) {
            Some(tab) if now.signed_duration_since(tab.last_seen) < self.idle_limit => {
                tab.last_seen = now;
                return tab.store.get_current_user();
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            if let Some(mut tab) = tabs.remove(token) {
                if let Err(err) = crate::auth::logout(&mut tab.store) {
                    tracing::warn!(%err, "Failed to clear expired tab-session");
                }
            }
            tracing::debug!("Tab-session expired");
        }
        None
    }

    pub fn require(&self, token: &str, role: Role) -> ClinicResult<Session> {
        match self.current_user(token) {
            Some(session) if session.role == role => Ok(session),
            _ => Err(ClinicError::NotAuthorized(role)),
        }
    }

    /// Ends the tab behind `token`. Returns whether it was still open.
    pub fn close(&self, token: &str) -> anyhow::Result<bool> {
        match self.lock().remove(token) {
            Some(mut tab) => {
                crate::auth::logout(&mut tab.store)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, TabSession>> {
        self.tabs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
