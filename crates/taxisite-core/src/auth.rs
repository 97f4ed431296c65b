//! Admin access gate.
//!
//! A single operator-provided secret unlocks the admin API. A correct secret
//! yields an opaque session token; live tokens are persisted under
//! [`SESSIONS_KEY`] and never expire on their own.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::storage::{read_json, write_json, KeyValueStore, SESSIONS_KEY};
use taxisite_types::models::current_timestamp_ms;
use taxisite_types::AuthError;

const TOKEN_PREFIX: &str = "ts-";
const TOKEN_LEN: usize = 32;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    fn generate() -> Self {
        let body: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        Self(format!("{TOKEN_PREFIX}{body}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens are credentials; keep them out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({}…)", self.0.get(..TOKEN_PREFIX.len() + 4).unwrap_or("?"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    LoggedOut,
    LoggedIn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionRecord {
    token: String,
    created_at: i64,
}

pub struct AuthGate {
    secret: String,
    storage: Arc<dyn KeyValueStore>,
    sessions: DashMap<String, i64>,
    /// Serializes snapshot + write so a stale snapshot never lands last.
    persist_lock: Mutex<()>,
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

impl AuthGate {
    /// Gate for `secret`, restoring sessions persisted by a previous run.
    /// An empty secret disables login.
    pub fn new(secret: impl Into<String>, storage: Arc<dyn KeyValueStore>) -> Self {
        let sessions = DashMap::new();
        match read_json::<Vec<SessionRecord>>(storage.as_ref(), SESSIONS_KEY) {
            Ok(records) => {
                for record in records.unwrap_or_default() {
                    sessions.insert(record.token, record.created_at);
                }
            }
            Err(e) => tracing::warn!("⚠️ Discarding unreadable admin sessions: {}", e),
        }

        let gate =
            Self { secret: secret.into(), storage, sessions, persist_lock: Mutex::new(()) };
        if !gate.is_enabled() {
            tracing::warn!("🔒 No admin secret configured, admin login disabled");
        }
        gate
    }

    pub fn is_enabled(&self) -> bool {
        !self.secret.is_empty()
    }

    /// Exact, constant-time match against the secret.
    pub fn login(&self, password: &str) -> Result<SessionToken, AuthError> {
        if !self.is_enabled() {
            return Err(AuthError::Disabled);
        }
        if !constant_time_compare(password, &self.secret) {
            tracing::warn!("🔐 Rejected admin login attempt");
            return Err(AuthError::InvalidPassword);
        }

        let token = SessionToken::generate();
        self.sessions.insert(token.0.clone(), current_timestamp_ms());
        if let Err(e) = self.persist() {
            self.sessions.remove(token.as_str());
            return Err(e);
        }
        tracing::info!("🔓 Admin logged in ({} active sessions)", self.sessions.len());
        Ok(token)
    }

    /// Drop a session. Returns whether the token was live.
    pub fn logout(&self, token: &str) -> Result<bool, AuthError> {
        if self.sessions.remove(token).is_none() {
            return Ok(false);
        }
        self.persist()?;
        tracing::info!("🔒 Admin logged out");
        Ok(true)
    }

    pub fn state(&self, token: Option<&str>) -> AuthState {
        match token {
            Some(t) if self.is_enabled() && self.sessions.contains_key(t) => AuthState::LoggedIn,
            _ => AuthState::LoggedOut,
        }
    }

    pub fn authorize(&self, token: Option<&str>) -> Result<(), AuthError> {
        match self.state(token) {
            AuthState::LoggedIn => Ok(()),
            AuthState::LoggedOut => Err(AuthError::Unauthenticated),
        }
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn persist(&self) -> Result<(), AuthError> {
        let _write = self.persist_lock.lock();
        let mut records: Vec<SessionRecord> = self
            .sessions
            .iter()
            .map(|entry| SessionRecord { token: entry.key().clone(), created_at: *entry.value() })
            .collect();
        records.sort_by_key(|r| r.created_at);

        write_json(self.storage.as_ref(), SESSIONS_KEY, &records)
            .map_err(|e| AuthError::Storage { message: e.to_string() })
    }
}
