//! Authentication flow core shared by the Loftline frontend.
//!
//! The crate has two halves. [`orchestrator::AuthOrchestrator`] turns a
//! submitted login or signup form into a single [`types::AuthOutcome`] by
//! calling the hosted auth provider through the [`provider::AuthProvider`]
//! capability trait. [`presenter::ModalViewState`] is the view-state machine
//! behind the auth modal: tab selection, field values, the in-flight flag,
//! and how each outcome maps back onto the open modal.
//!
//! Nothing in here touches the DOM or the network; the web app supplies both
//! through the capability traits, and tests supply scripted mocks.

pub mod orchestrator;
pub mod presenter;
pub mod provider;
pub mod types;

pub use orchestrator::AuthOrchestrator;
pub use presenter::{AuthTab, FormFields, HostEffect, ModalViewState, SubmissionTicket};
pub use provider::{AuthEffects, AuthProvider, InvalidationScope};
pub use types::{AuthOutcome, Credentials, ProviderError, Session, SignupProfile};
