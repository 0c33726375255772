//! Per-token session tracking.
//!
//! An [`AuthSession`] follows one access token. It resolves in two phases: first
//! whether a session exists, then which roles its user holds. Both phases are
//! published through a `watch` channel as an [`AuthState`], so a gate can either
//! read the current state or wait until it is resolved.
//!
//! Auth events for the tracked token supersede the eager lookup made at start.
//! Role lookups are tagged with a generation; a result that arrives after the
//! session changed again is discarded.

use std::{sync::Arc, time::Duration};

use log::{debug, warn};
use tokio::{
    sync::{broadcast::error::RecvError, watch},
    task::JoinHandle,
};

use crate::{
    models::{AuthUser, RoleSet, Session, SessionResponse},
    repositories::UserRoleRepository,
};

use super::{AuthEvent, AuthEventKind, AuthProvider};

/// Outcome of the staff gate for a given [`AuthState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session or roles still loading.
    Pending,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub roles: RoleSet,
    pub session_known: bool,
    pub roles_known: bool,
    generation: u64,
}

impl AuthState {
    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn is_admin(&self) -> bool {
        self.roles.is_admin()
    }

    pub fn is_shelter_staff(&self) -> bool {
        self.roles.is_shelter_staff()
    }

    pub fn is_resolved(&self) -> bool {
        self.session_known && self.roles_known
    }

    pub fn staff_access(&self) -> AccessDecision {
        if !self.is_resolved() {
            AccessDecision::Pending
        } else if self.session.is_some() && self.roles.can_manage_cats() {
            AccessDecision::Granted
        } else {
            AccessDecision::Denied
        }
    }

    pub fn to_response(&self) -> SessionResponse {
        match self.user() {
            Some(user) => SessionResponse::authenticated(user.clone(), self.roles.clone()),
            None => SessionResponse::anonymous(),
        }
    }
}

type StatePublisher = Arc<watch::Sender<AuthState>>;

fn apply_session<R>(publisher: &StatePublisher, roles: &Arc<R>, session: Option<Session>)
where
    R: UserRoleRepository + 'static,
{
    let user_id = session.as_ref().map(|s| s.user.id.clone());
    let mut generation = 0;
    publisher.send_modify(|state| {
        state.generation += 1;
        generation = state.generation;
        state.session_known = true;
        state.roles = RoleSet::empty();
        state.roles_known = session.is_none();
        state.session = session;
    });

    let Some(user_id) = user_id else {
        return;
    };

    let publisher = publisher.clone();
    let roles = roles.clone();
    tokio::spawn(async move {
        let fetched = match roles.roles_for_user(&user_id).await {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!("Role lookup for user {} failed: {}", user_id, e);
                RoleSet::empty()
            }
        };
        let applied = publisher.send_if_modified(|state| {
            if state.generation != generation {
                return false;
            }
            state.roles = fetched;
            state.roles_known = true;
            true
        });
        if !applied {
            debug!("Discarding roles for superseded session of user {}", user_id);
        }
    });
}

fn apply_event<R>(publisher: &StatePublisher, roles: &Arc<R>, event: AuthEvent)
where
    R: UserRoleRepository + 'static,
{
    debug!("Applying {} event", event.kind);
    match event.kind {
        AuthEventKind::SignedOut => apply_session(publisher, roles, None),
        AuthEventKind::SignedIn | AuthEventKind::TokenRefreshed => {
            apply_session(publisher, roles, event.session)
        }
    }
}

pub struct AuthSession<P: AuthProvider + 'static> {
    provider: Arc<P>,
    access_token: String,
    publisher: StatePublisher,
    state: watch::Receiver<AuthState>,
    driver: JoinHandle<()>,
}

impl<P: AuthProvider + 'static> AuthSession<P> {
    /// Subscribes to auth events, then looks up the current session once.
    pub fn start<R>(provider: Arc<P>, roles: Arc<R>, access_token: String) -> Self
    where
        R: UserRoleRepository + 'static,
    {
        let (sender, state) = watch::channel(AuthState::default());
        let publisher: StatePublisher = Arc::new(sender);
        let mut events = provider.subscribe();

        let driver = tokio::spawn({
            let provider = provider.clone();
            let publisher = publisher.clone();
            let token = access_token.clone();
            async move {
                let initial = provider.get_session(&token);
                tokio::pin!(initial);
                let mut initial_pending = true;
                let mut superseded = false;
                let mut events_open = true;

                while initial_pending || events_open {
                    tokio::select! {
                        result = &mut initial, if initial_pending => {
                            initial_pending = false;
                            if superseded {
                                continue;
                            }
                            let session = result.unwrap_or_else(|e| {
                                warn!("Session lookup failed: {}", e);
                                None
                            });
                            apply_session(&publisher, &roles, session);
                        }
                        event = events.recv(), if events_open => match event {
                            Ok(event) if event.access_token == token => {
                                superseded = true;
                                apply_event(&publisher, &roles, event);
                            }
                            Ok(_) => {}
                            Err(RecvError::Lagged(skipped)) => {
                                warn!("Auth event subscriber lagged, skipped {} events", skipped);
                            }
                            Err(RecvError::Closed) => events_open = false,
                        },
                    }
                }
            }
        });

        Self {
            provider,
            access_token,
            publisher,
            state,
            driver,
        }
    }

    /// Current state, resolved or not.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<AuthState> {
        self.state.clone()
    }

    /// Waits until both phases are known, or returns the state as it stands when
    /// `timeout` elapses.
    pub async fn resolved(&self, timeout: Duration) -> AuthState {
        let mut state = self.state.clone();
        let resolved = match tokio::time::timeout(timeout, state.wait_for(AuthState::is_resolved))
            .await
        {
            Ok(Ok(resolved)) => Some(AuthState::clone(&resolved)),
            Ok(Err(_)) | Err(_) => None,
        };
        resolved.unwrap_or_else(|| self.state())
    }

    /// Clears the local session immediately and revokes the token in the background.
    pub fn sign_out(&self) {
        self.publisher.send_modify(|state| {
            state.generation += 1;
            state.session = None;
            state.roles = RoleSet::empty();
            state.session_known = true;
            state.roles_known = true;
        });

        let provider = self.provider.clone();
        let token = self.access_token.clone();
        tokio::spawn(async move {
            if let Err(e) = provider.sign_out(&token).await {
                warn!("Sign-out request failed: {}", e);
            }
        });
    }
}

impl<P: AuthProvider + 'static> Drop for AuthSession<P> {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{AuthError, RepositoryError, UserRole},
        repositories::{InMemoryUserRoleRepository, MockUserRoleRepository},
        services::{InMemoryAuthProvider, MockAuthProvider},
        utils::mocks::mockutils::create_mock_session,
    };
    use async_trait::async_trait;
    use tokio::sync::{broadcast, Notify};

    const WAIT: Duration = Duration::from_secs(2);

    /// Role lookup that blocks until released.
    struct GatedRoles {
        release: Notify,
        roles: RoleSet,
    }

    #[async_trait]
    impl UserRoleRepository for GatedRoles {
        async fn roles_for_user(&self, _user_id: &str) -> Result<RoleSet, RepositoryError> {
            self.release.notified().await;
            Ok(self.roles.clone())
        }

        async fn assign(&self, _user_id: &str, _role: UserRole) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    async fn roles_with(user_id: &str, role: UserRole) -> Arc<InMemoryUserRoleRepository> {
        let repo = InMemoryUserRoleRepository::new();
        repo.assign(user_id, role).await.unwrap();
        Arc::new(repo)
    }

    async fn wait_until(
        session: &AuthSession<InMemoryAuthProvider>,
        f: impl Fn(&AuthState) -> bool,
    ) {
        let mut state = session.watch();
        tokio::time::timeout(WAIT, state.wait_for(|s| f(s)))
            .await
            .expect("state never reached")
            .expect("state channel closed");
    }

    #[test]
    fn test_staff_access_decision() {
        let mut state = AuthState::default();
        assert_eq!(state.staff_access(), AccessDecision::Pending);

        state.session_known = true;
        state.session = Some(create_mock_session("tok", "user-1"));
        assert_eq!(state.staff_access(), AccessDecision::Pending);

        state.roles_known = true;
        assert_eq!(state.staff_access(), AccessDecision::Denied);

        state.roles = RoleSet::new([UserRole::ShelterStaff]);
        assert_eq!(state.staff_access(), AccessDecision::Granted);
        assert!(state.is_shelter_staff());
        assert!(!state.is_admin());

        state.session = None;
        assert_eq!(state.staff_access(), AccessDecision::Denied);
    }

    #[test]
    fn test_to_response_never_exposes_token() {
        let mut state = AuthState::default();
        assert!(!state.to_response().authenticated);

        state.session = Some(create_mock_session("secret-token", "user-1"));
        state.roles = RoleSet::new([UserRole::Admin]);
        let response = state.to_response();
        assert!(response.authenticated);
        assert!(response.is_admin);
        assert!(!serde_json::to_string(&response).unwrap().contains("secret-token"));
    }

    #[tokio::test]
    async fn test_staff_session_resolves_to_granted() {
        let provider = Arc::new(InMemoryAuthProvider::with_sessions([create_mock_session(
            "tok-1", "user-1",
        )]));
        let roles = roles_with("user-1", UserRole::ShelterStaff).await;

        let session = AuthSession::start(provider, roles, "tok-1".to_string());
        let state = session.resolved(WAIT).await;

        assert_eq!(state.staff_access(), AccessDecision::Granted);
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("user-1"));
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_to_denied() {
        let provider = Arc::new(InMemoryAuthProvider::new());
        let session = AuthSession::start(
            provider,
            Arc::new(InMemoryUserRoleRepository::new()),
            "nope".to_string(),
        );

        let state = session.resolved(WAIT).await;
        assert!(state.session.is_none());
        assert!(state.roles.is_empty());
        assert_eq!(state.staff_access(), AccessDecision::Denied);
    }

    #[tokio::test]
    async fn test_roles_pending_until_lookup_completes() {
        let provider = Arc::new(InMemoryAuthProvider::with_sessions([create_mock_session(
            "tok-1", "user-1",
        )]));
        let roles = Arc::new(GatedRoles {
            release: Notify::new(),
            roles: RoleSet::new([UserRole::Admin]),
        });

        let session = AuthSession::start(provider, roles.clone(), "tok-1".to_string());
        wait_until(&session, |s| s.session_known).await;

        let state = session.state();
        assert!(state.session.is_some());
        assert!(!state.roles_known);
        assert_eq!(state.staff_access(), AccessDecision::Pending);

        roles.release.notify_one();
        let state = session.resolved(WAIT).await;
        assert!(state.is_admin());
        assert_eq!(state.staff_access(), AccessDecision::Granted);
    }

    #[tokio::test]
    async fn test_resolved_returns_pending_state_on_timeout() {
        let provider = Arc::new(InMemoryAuthProvider::with_sessions([create_mock_session(
            "tok-1", "user-1",
        )]));
        let roles = Arc::new(GatedRoles {
            release: Notify::new(),
            roles: RoleSet::empty(),
        });

        let session = AuthSession::start(provider, roles, "tok-1".to_string());
        let state = session.resolved(Duration::from_millis(50)).await;

        assert_eq!(state.staff_access(), AccessDecision::Pending);
    }

    #[tokio::test]
    async fn test_role_lookup_failure_yields_no_roles() {
        let provider = Arc::new(InMemoryAuthProvider::with_sessions([create_mock_session(
            "tok-1", "user-1",
        )]));
        let mut roles = MockUserRoleRepository::new();
        roles
            .expect_roles_for_user()
            .returning(|_| Err(RepositoryError::ConnectionError("down".to_string())));

        let session = AuthSession::start(provider, Arc::new(roles), "tok-1".to_string());
        let state = session.resolved(WAIT).await;

        assert!(state.session.is_some());
        assert!(state.roles_known);
        assert!(state.roles.is_empty());
        assert_eq!(state.staff_access(), AccessDecision::Denied);
    }

    #[tokio::test]
    async fn test_session_lookup_failure_resolves_signed_out() {
        let (events, _) = broadcast::channel(4);
        let mut provider = MockAuthProvider::new();
        provider
            .expect_subscribe()
            .returning(move || events.subscribe());
        provider
            .expect_get_session()
            .returning(|_| Err(AuthError::Unavailable("connection refused".to_string())));

        let session = AuthSession::start(
            Arc::new(provider),
            Arc::new(InMemoryUserRoleRepository::new()),
            "tok-1".to_string(),
        );
        let state = session.resolved(WAIT).await;

        assert!(state.session.is_none());
        assert_eq!(state.staff_access(), AccessDecision::Denied);
    }

    #[tokio::test]
    async fn test_sign_in_event_for_tracked_token_updates_state() {
        let provider = Arc::new(InMemoryAuthProvider::new());
        let roles = roles_with("user-1", UserRole::Admin).await;
        let session = AuthSession::start(provider.clone(), roles, "tok-1".to_string());
        assert!(session.resolved(WAIT).await.session.is_none());

        provider.sign_in(create_mock_session("tok-2", "user-2")).await;
        provider.sign_in(create_mock_session("tok-1", "user-1")).await;

        wait_until(&session, |s| s.is_resolved() && s.session.is_some()).await;
        let state = session.state();
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("user-1"));
        assert!(state.is_admin());
    }

    #[tokio::test]
    async fn test_sign_out_clears_state_synchronously() {
        let provider = Arc::new(InMemoryAuthProvider::with_sessions([create_mock_session(
            "tok-1", "user-1",
        )]));
        let roles = roles_with("user-1", UserRole::ShelterStaff).await;
        let session = AuthSession::start(provider.clone(), roles, "tok-1".to_string());
        assert_eq!(
            session.resolved(WAIT).await.staff_access(),
            AccessDecision::Granted
        );

        session.sign_out();

        let state = session.state();
        assert!(state.session.is_none());
        assert!(state.roles.is_empty());
        assert_eq!(state.staff_access(), AccessDecision::Denied);

        tokio::time::timeout(WAIT, async {
            while provider.get_session("tok-1").await.unwrap().is_some() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("token was never revoked");
    }

    #[tokio::test]
    async fn test_roles_for_superseded_session_are_discarded() {
        let provider = Arc::new(InMemoryAuthProvider::with_sessions([create_mock_session(
            "tok-1", "user-1",
        )]));
        let roles = Arc::new(GatedRoles {
            release: Notify::new(),
            roles: RoleSet::new([UserRole::Admin]),
        });
        let session = AuthSession::start(provider, roles.clone(), "tok-1".to_string());
        wait_until(&session, |s| s.session_known && s.session.is_some()).await;

        session.sign_out();
        roles.release.notify_one();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let state = session.state();
        assert!(state.session.is_none());
        assert!(!state.is_admin());
    }
}
