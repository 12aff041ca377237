//! Request/response logic for login and signup submissions. Each call is a
//! stateless transaction: validate locally, call the provider, fold the
//! result into one [`AuthOutcome`]. View state lives in the presenter.

use crate::provider::{AuthEffects, AuthProvider, InvalidationScope};
use crate::types::{AuthOutcome, Credentials, MIN_PASSWORD_LENGTH, ProviderError, SignupProfile};

/// Destination after a successful sign-in.
pub const DASHBOARD_PATH: &str = "/dashboard";

const MSG_FIELDS_REQUIRED: &str = "Email and password are required.";
const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long.";
const MSG_UNEXPECTED: &str = "An unexpected error occurred. Please try again later.";
const MSG_VERIFY_EMAIL: &str = "Check your email to verify your account.";

/// Drives one submission against the auth provider and the host effects.
pub struct AuthOrchestrator<P, E> {
    provider: P,
    effects: E,
}

impl<P: AuthProvider, E: AuthEffects> AuthOrchestrator<P, E> {
    pub fn new(provider: P, effects: E) -> Self {
        Self { provider, effects }
    }

    /// Signs in with the given credentials.
    ///
    /// Empty fields fail locally without touching the provider. Provider
    /// rejections pass their message through verbatim; anything else is
    /// logged and reported with a generic message.
    pub async fn submit_login(&self, credentials: &Credentials) -> AuthOutcome {
        if !credentials.is_complete() {
            return AuthOutcome::Failure(MSG_FIELDS_REQUIRED.to_string());
        }

        match self
            .provider
            .sign_in_with_password(credentials.email.trim(), &credentials.password)
            .await
        {
            Ok(Some(_session)) => self.redirect_to_dashboard(),
            Ok(None) => {
                log::error!("sign-in reported success without a session");
                AuthOutcome::Failure(MSG_UNEXPECTED.to_string())
            }
            Err(ProviderError::Rejected(message)) => AuthOutcome::Failure(message),
            Err(ProviderError::Unexpected(detail)) => {
                log::error!("sign-in failed: {detail}");
                AuthOutcome::Failure(MSG_UNEXPECTED.to_string())
            }
        }
    }

    /// Creates an account, with login-first semantics.
    ///
    /// If the submitted email/password pair already matches an account, the
    /// pre-check sign-in succeeds and signup behaves exactly like a login
    /// instead of erroring "already registered". Otherwise the account is
    /// created and the session is re-checked: providers that auto-confirm
    /// yield a redirect, the rest yield a pending verification prompt.
    pub async fn submit_signup(&self, profile: &SignupProfile) -> AuthOutcome {
        let credentials = &profile.credentials;
        if !credentials.is_complete() {
            return AuthOutcome::Failure(MSG_FIELDS_REQUIRED.to_string());
        }
        if credentials.password.chars().count() < MIN_PASSWORD_LENGTH {
            return AuthOutcome::Failure(MSG_PASSWORD_TOO_SHORT.to_string());
        }

        match self
            .provider
            .sign_in_with_password(credentials.email.trim(), &credentials.password)
            .await
        {
            Ok(Some(_session)) => return self.redirect_to_dashboard(),
            // No matching account or wrong password: proceed with signup.
            Ok(None) | Err(ProviderError::Rejected(_)) => {}
            Err(ProviderError::Unexpected(detail)) => {
                log::error!("signup pre-check failed: {detail}");
                return AuthOutcome::Failure(MSG_UNEXPECTED.to_string());
            }
        }

        if let Err(err) = self
            .provider
            .sign_up(
                credentials.email.trim(),
                &credentials.password,
                profile.display_name.as_deref(),
            )
            .await
        {
            return match err {
                ProviderError::Rejected(message) => AuthOutcome::Failure(message),
                ProviderError::Unexpected(detail) => {
                    log::error!("signup failed: {detail}");
                    AuthOutcome::Failure(MSG_UNEXPECTED.to_string())
                }
            };
        }

        match self.provider.get_session().await {
            Ok(Some(_session)) => self.redirect_to_dashboard(),
            Ok(None) => AuthOutcome::Pending(MSG_VERIFY_EMAIL.to_string()),
            Err(err) => {
                // The account exists at this point; fall back to the
                // verification prompt rather than reporting a failure.
                log::warn!("session check after signup failed: {err}");
                AuthOutcome::Pending(MSG_VERIFY_EMAIL.to_string())
            }
        }
    }

    /// Invalidation of the root layout happens-before the redirect is
    /// returned, on every success path.
    fn redirect_to_dashboard(&self) -> AuthOutcome {
        self.effects
            .invalidate_cached_view("/", InvalidationScope::Layout);
        AuthOutcome::Redirect(DASHBOARD_PATH.to_string())
    }
}
