//! Session state and context for the frontend. The provider client and the
//! session signal are provided together at the app root; only non-sensitive
//! session metadata lives in the shared signal, tokens stay inside the
//! client. Sessions are in-memory only and do not survive a reload.

use auth_flow::{AuthEffects, InvalidationScope, Session};
use leptos::prelude::*;

use crate::features::auth::client::HostedAuthClient;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub session: RwSignal<Option<Session>>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    fn new(session: RwSignal<Option<Session>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Replaces the in-memory session with the provider's current view.
    pub fn sync(&self, session: Option<Session>) {
        self.session.set(session);
    }

    /// Clears the in-memory session, typically on sign-out.
    pub fn clear_session(&self) {
        self.session.set(None);
    }
}

/// Provides the session context and the shared provider client.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(None);
    provide_context(SessionContext::new(session));
    provide_context(HostedAuthClient::new());

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let session = RwSignal::new(None);
        SessionContext::new(session)
    })
}

/// Returns the shared provider client or a detached one.
pub fn use_auth_client() -> HostedAuthClient {
    use_context::<HostedAuthClient>().unwrap_or_default()
}

/// Cache-invalidation effects for the orchestrator. A layout-scoped
/// invalidation of `/` re-syncs the session context from the provider so the
/// chrome re-renders with the new auth state before navigation happens.
pub struct SessionEffects {
    client: HostedAuthClient,
    session: SessionContext,
}

impl SessionEffects {
    pub fn new(client: HostedAuthClient, session: SessionContext) -> Self {
        Self { client, session }
    }
}

impl AuthEffects for SessionEffects {
    fn invalidate_cached_view(&self, path: &str, scope: InvalidationScope) {
        if scope == InvalidationScope::Layout || path == "/" {
            self.session.sync(self.client.current_session());
        }
    }
}
