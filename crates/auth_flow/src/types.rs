//! Data types shared between the orchestrator, the presenter, and the
//! provider implementations. Credentials are transient: they live only for
//! the duration of a submission and are never persisted or logged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum password length accepted at signup, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Email and password captured from the auth form.
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields present after trimming. Address-shape feedback is left to
    /// the form markup (`type="email"`).
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Signup form payload: credentials plus an optional display name.
pub struct SignupProfile {
    pub credentials: Credentials,
    pub display_name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Non-sensitive summary of the active session. Token material stays inside
/// the provider client and never crosses this boundary.
pub struct Session {
    pub user_id: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of one submission. Exactly one variant per submission; a redirect
/// and an error are never produced together.
pub enum AuthOutcome {
    /// Authentication succeeded; navigate to the given path.
    Redirect(String),
    /// Validation or provider rejection. The message is user-facing text.
    Failure(String),
    /// Signup succeeded but needs external confirmation before a session
    /// exists. Surfaced outside the modal since the modal closes.
    Pending(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Errors reported by the hosted auth provider.
pub enum ProviderError {
    /// The provider rejected the request with a user-safe message. Shown to
    /// the user verbatim.
    Rejected(String),
    /// Transport, decode, or any other failure the user should not see. The
    /// detail is a diagnostic for logs only.
    Unexpected(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Rejected(message) => write!(formatter, "provider rejection: {message}"),
            ProviderError::Unexpected(detail) => {
                write!(formatter, "unexpected provider failure: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}
