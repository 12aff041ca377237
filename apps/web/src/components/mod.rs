//! Shared UI components exported for routes and features.

pub(crate) mod auth_modal;
pub(crate) mod layout;
pub(crate) mod modal_context;
pub(crate) mod ui;

pub(crate) use ui::{Alert, AlertKind, Button, Spinner};
