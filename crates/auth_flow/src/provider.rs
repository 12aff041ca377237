//! Capability traits the orchestrator consumes. The web app implements
//! [`AuthProvider`] over the hosted auth API and [`AuthEffects`] against its
//! session context; tests implement both with scripted mocks.

use crate::types::{ProviderError, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How much cached view state an invalidation covers.
pub enum InvalidationScope {
    Page,
    Layout,
}

/// Hosted authentication capability surface.
///
/// `sign_up` alone does not report a session: providers that auto-confirm
/// accounts expose the resulting session through `get_session`, which is how
/// the orchestrator re-checks after a successful signup.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Session>, ProviderError>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<(), ProviderError>;

    async fn get_session(&self) -> Result<Option<Session>, ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;
}

/// Host-side cache effects. Invalidation is issued before the orchestrator
/// returns a redirect so the next render reflects the new auth state.
pub trait AuthEffects {
    fn invalidate_cached_view(&self, path: &str, scope: InvalidationScope);
}
