//! `AuthProvider` implementation over the hosted auth API. The client keeps
//! the issued access token in a client-local signal only; the rest of the
//! app sees the non-sensitive `Session` summary through `get_session` and
//! the session context. Nothing here persists across a page reload.

use auth_flow::{AuthProvider, ProviderError, Session};
use leptos::prelude::*;

use crate::app_lib::{config::AppConfig, post_empty_with_headers, post_json_with_headers_response};
use crate::features::auth::types::{
    ApiUser, PasswordGrantRequest, SignupMetadata, SignupRequest, SignupResponse, TokenResponse,
};

#[derive(Clone)]
/// Session plus the bearer token backing it. Never leaves this module.
struct StoredSession {
    access_token: String,
    session: Session,
}

#[derive(Clone)]
/// Thin client over the hosted auth endpoints. Cheap to clone; clones share
/// the same session slot.
pub struct HostedAuthClient {
    config: AppConfig,
    store: RwSignal<Option<StoredSession>>,
}

impl HostedAuthClient {
    pub fn new() -> Self {
        Self::with_config(AppConfig::load())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            store: RwSignal::new(None),
        }
    }

    /// Session summary currently held in memory, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.store
            .with_untracked(|stored| stored.as_ref().map(|stored| stored.session.clone()))
    }

    fn api_headers(&self) -> Vec<(String, String)> {
        vec![("apikey".to_string(), self.config.auth_api_key.clone())]
    }

    fn remember(&self, access_token: String, user: ApiUser) -> Session {
        let session = Session {
            user_id: user.id,
            email: user.email.unwrap_or_default(),
        };
        self.store.set(Some(StoredSession {
            access_token,
            session: session.clone(),
        }));
        session
    }

    fn forget(&self) {
        self.store.set(None);
    }
}

impl Default for HostedAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for HostedAuthClient {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Session>, ProviderError> {
        let request = PasswordGrantRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: TokenResponse = post_json_with_headers_response(
            "/auth/v1/token?grant_type=password",
            &request,
            &self.api_headers(),
        )
        .await
        .map_err(ProviderError::from)?;

        Ok(Some(self.remember(response.access_token, response.user)))
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<(), ProviderError> {
        let request = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            data: SignupMetadata {
                full_name: display_name.map(str::to_string),
            },
        };
        let response: SignupResponse =
            post_json_with_headers_response("/auth/v1/signup", &request, &self.api_headers())
                .await
                .map_err(ProviderError::from)?;

        // Auto-confirming deployments return the session inline; keep it so
        // the follow-up get_session sees it.
        if let (Some(access_token), Some(user)) = (response.access_token, response.user) {
            self.remember(access_token, user);
        }
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>, ProviderError> {
        Ok(self.current_session())
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        let access_token = self
            .store
            .with_untracked(|stored| stored.as_ref().map(|stored| stored.access_token.clone()));
        let Some(access_token) = access_token else {
            return Ok(());
        };

        let mut headers = self.api_headers();
        headers.push(("Authorization".to_string(), format!("Bearer {access_token}")));
        let result = post_empty_with_headers("/auth/v1/logout", &headers).await;

        // The local session is gone either way.
        self.forget();
        result.map_err(ProviderError::from)
    }
}
