//! Authentication: session lookup against an auth backend and the per-token
//! session state used by the admin gate.

mod provider;
pub use provider::*;

mod remote;
pub use remote::*;

mod session;
pub use session::*;

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::models::{AuthError, Session};

/// Enum wrapper for the configured auth backend.
#[derive(Debug, Clone)]
pub enum AuthProviderStorage {
    InMemory(InMemoryAuthProvider),
    Remote(RemoteAuthProvider),
}

impl AuthProviderStorage {
    pub fn new_in_memory(sessions: impl IntoIterator<Item = Session>) -> Self {
        Self::InMemory(InMemoryAuthProvider::with_sessions(sessions))
    }

    pub fn new_remote(config: RemoteAuthConfig) -> Self {
        Self::Remote(RemoteAuthProvider::new(config))
    }
}

#[async_trait]
impl AuthProvider for AuthProviderStorage {
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError> {
        match self {
            AuthProviderStorage::InMemory(provider) => provider.get_session(access_token).await,
            AuthProviderStorage::Remote(provider) => provider.get_session(access_token).await,
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        match self {
            AuthProviderStorage::InMemory(provider) => provider.sign_out(access_token).await,
            AuthProviderStorage::Remote(provider) => provider.sign_out(access_token).await,
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        match self {
            AuthProviderStorage::InMemory(provider) => provider.subscribe(),
            AuthProviderStorage::Remote(provider) => provider.subscribe(),
        }
    }
}
