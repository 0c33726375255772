//! Auth provider backed by a GoTrue-compatible HTTP service.
//!
//! `GET {url}/auth/v1/user` resolves a bearer token to its user and
//! `POST {url}/auth/v1/logout` revokes it. Both requests carry the project API key
//! in the `apikey` header.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::broadcast;

use crate::models::{AuthError, AuthUser, Session};

use super::{AuthEvent, AuthEventKind, AuthProvider};

const API_KEY_HEADER: &str = "apikey";
const AUTH_EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct RemoteAuthConfig {
    pub url: String,
    pub api_key: String,
}

impl RemoteAuthConfig {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RemoteAuthProvider {
    client: Client,
    config: RemoteAuthConfig,
    events: broadcast::Sender<AuthEvent>,
}

impl RemoteAuthProvider {
    pub fn new(config: RemoteAuthConfig) -> Self {
        let (events, _) = broadcast::channel(AUTH_EVENT_CHANNEL_CAPACITY);
        Self {
            client: Client::new(),
            config,
            events,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }
}

#[async_trait]
impl AuthProvider for RemoteAuthProvider {
    async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AuthError> {
        let response = self
            .client
            .get(self.endpoint("user"))
            .header(API_KEY_HEADER, &self.config.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let user: UserResponse = response.json().await.map_err(|e| {
                    AuthError::UnexpectedResponse(format!("Invalid user payload: {}", e))
                })?;
                Ok(Some(Session {
                    access_token: access_token.to_string(),
                    user: AuthUser {
                        id: user.id,
                        email: user.email,
                    },
                    expires_at: None,
                }))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!("Auth service rejected access token");
                Ok(None)
            }
            status => Err(AuthError::UnexpectedResponse(format!(
                "GET /auth/v1/user returned {}",
                status
            ))),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.endpoint("logout"))
            .header(API_KEY_HEADER, &self.config.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        // An already revoked token is signed out as far as callers are concerned.
        if !status.is_success() && status != StatusCode::UNAUTHORIZED {
            warn!("Auth service logout returned {}", status);
            return Err(AuthError::UnexpectedResponse(format!(
                "POST /auth/v1/logout returned {}",
                status
            )));
        }

        let _ = self.events.send(AuthEvent {
            kind: AuthEventKind::SignedOut,
            access_token: access_token.to_string(),
            session: None,
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}
