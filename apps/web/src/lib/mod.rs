//! Shared frontend utilities for API access, configuration, errors, theming,
//! and build metadata.
//!
//! ## Auth flow at a glance
//!
//! The auth modal collects credentials and hands them to
//! `auth_flow::AuthOrchestrator`, which calls the hosted auth API through
//! [`crate::features::auth::client::HostedAuthClient`]. Signup tries a
//! sign-in first, so an existing email/password pair logs in instead of
//! erroring; fresh accounts either redirect straight to the dashboard (when
//! the provider auto-confirms) or prompt for email verification.
//!
//! Centralizing the HTTP helpers here keeps network behavior consistent
//! across feature clients. None of these utilities store secrets, but
//! callers must still avoid logging credential or token material.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod theme;

pub(crate) use api::{post_empty_with_headers, post_json_with_headers_response};
