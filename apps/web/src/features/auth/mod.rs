//! Auth feature module: the hosted-provider client, session context, and
//! wire types. Authentication decisions live in the `auth_flow` crate; this
//! module only supplies its capability implementations. It touches security
//! boundaries and must avoid logging credential or token material.

pub(crate) mod client;
pub(crate) mod state;
pub(crate) mod types;
