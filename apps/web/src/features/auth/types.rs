//! Request and response types for the hosted auth API. These payloads carry
//! credentials and tokens, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct PasswordGrantRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub data: SignupMetadata,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
/// Successful password-grant response.
pub struct TokenResponse {
    pub access_token: String,
    pub user: ApiUser,
}

#[derive(Clone, Debug, Deserialize)]
/// Signup response. With auto-confirm enabled the body is a full session
/// (`access_token` + `user`); otherwise it is just the created user record
/// and no session fields are present.
pub struct SignupResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<ApiUser>,
}
