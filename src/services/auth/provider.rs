//! Session lookup and auth change notifications.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
#[cfg(test)]
use mockall::automock;
use serde::Serialize;
use strum::Display;
use tokio::sync::{broadcast, RwLock};

use crate::models::{AuthError, Session};

const AUTH_EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AuthEventKind {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// A change to the session identified by `access_token`.
///
/// `session` is the new session for sign-in and refresh events and `None` on sign-out.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthEvent {
    pub kind: AuthEventKind,
    pub access_token: String,
    pub session: Option<Session>,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The live session for `access_token`, or `None` when it is unknown or expired.
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// Receiver for every auth change emitted after this call.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}

/// Sessions held in process memory, seeded from configuration.
#[derive(Debug, Clone)]
pub struct InMemoryAuthProvider {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    events: broadcast::Sender<AuthEvent>,
}

impl Default for InMemoryAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAuthProvider {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(AUTH_EVENT_CHANNEL_CAPACITY);
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            events,
        }
    }

    pub fn with_sessions(sessions: impl IntoIterator<Item = Session>) -> Self {
        let provider = Self::new();
        let sessions = sessions
            .into_iter()
            .map(|session| (session.access_token.clone(), session))
            .collect();
        Self {
            sessions: Arc::new(RwLock::new(sessions)),
            ..provider
        }
    }

    fn emit(&self, kind: AuthEventKind, access_token: &str, session: Option<Session>) {
        // No subscribers is not an error.
        if self
            .events
            .send(AuthEvent {
                kind,
                access_token: access_token.to_string(),
                session,
            })
            .is_err()
        {
            debug!("No subscribers for {} event", kind);
        }
    }

    pub async fn sign_in(&self, session: Session) {
        let token = session.access_token.clone();
        self.sessions
            .write()
            .await
            .insert(token.clone(), session.clone());
        self.emit(AuthEventKind::SignedIn, &token, Some(session));
    }

    /// Replaces the session stored under `access_token`. The new session keeps the
    /// old token as its key so existing holders stay attached.
    pub async fn refresh(&self, access_token: &str, session: Session) {
        self.sessions
            .write()
            .await
            .insert(access_token.to_string(), session.clone());
        self.emit(AuthEventKind::TokenRefreshed, access_token, Some(session));
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(access_token)
            .filter(|session| !session.is_expired(Utc::now()))
            .cloned())
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.sessions.write().await.remove(access_token);
        self.emit(AuthEventKind::SignedOut, access_token, None);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}
