//! View-state machine for the auth modal: visibility, active tab, field
//! values, the submission-in-flight flag, and how orchestrator outcomes map
//! back onto the modal.
//!
//! Every submission carries a [`SubmissionTicket`] stamped with the state's
//! epoch. Opening or closing the modal bumps the epoch, so an outcome that
//! arrives for a submission started in a previous life of the modal is
//! silently discarded and can never reopen or mutate a closed modal.

use crate::types::{AuthOutcome, Credentials, SignupProfile};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Which form the modal is showing.
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Raw field values as typed. Preserved across tab switches, cleared when
/// the modal opens.
pub struct FormFields {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Proof that a submission was started against the current modal epoch.
pub struct SubmissionTicket {
    epoch: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Side effect the host must perform after an outcome closed the modal.
pub enum HostEffect {
    /// Navigate to the given path. Issued for successful sign-ins.
    Navigate(String),
    /// Show a one-shot notice outside the modal, e.g. the email verification
    /// prompt after signup.
    Notice(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// State behind the auth modal. Mutated only through its methods, by user
/// events or resolved orchestrator outcomes.
pub struct ModalViewState {
    is_open: bool,
    active_tab: AuthTab,
    fields: FormFields,
    reveal_password: bool,
    submitting: bool,
    error: Option<String>,
    epoch: u64,
}

impl Default for ModalViewState {
    fn default() -> Self {
        Self {
            is_open: false,
            active_tab: AuthTab::Login,
            fields: FormFields::default(),
            reveal_password: false,
            submitting: false,
            error: None,
            epoch: 0,
        }
    }
}

impl ModalViewState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn active_tab(&self) -> AuthTab {
        self.active_tab
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn reveal_password(&self) -> bool {
        self.reveal_password
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Error banner shown inside the open modal, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Opens the modal on the given tab. Always starts from a clean slate:
    /// fields, banner, and the in-flight flag are reset regardless of prior
    /// state.
    pub fn open(&mut self, tab: AuthTab) {
        self.is_open = true;
        self.active_tab = tab;
        self.fields = FormFields::default();
        self.reveal_password = false;
        self.submitting = false;
        self.error = None;
        self.epoch += 1;
    }

    /// Closes the modal. Legal at any time, including while a submission is
    /// in flight; the pending outcome is orphaned by the epoch bump.
    pub fn close(&mut self) {
        self.is_open = false;
        self.submitting = false;
        self.epoch += 1;
    }

    /// Switches tabs in place. Clears the error banner but keeps whatever
    /// the user already typed.
    pub fn switch_tab(&mut self, tab: AuthTab) {
        if !self.is_open {
            return;
        }
        self.active_tab = tab;
        self.error = None;
    }

    pub fn set_email(&mut self, value: String) {
        self.fields.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.fields.password = value;
    }

    pub fn set_full_name(&mut self, value: String) {
        self.fields.full_name = value;
    }

    pub fn toggle_reveal_password(&mut self) {
        self.reveal_password = !self.reveal_password;
    }

    /// Marks a submission as started. Returns `None` while the modal is
    /// closed or another submission is already in flight; the flag is the
    /// sole mutual exclusion for submissions.
    pub fn begin_submit(&mut self) -> Option<SubmissionTicket> {
        if !self.is_open || self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(SubmissionTicket { epoch: self.epoch })
    }

    /// Applies an orchestrator outcome. Stale tickets are discarded without
    /// touching the state. Failures keep the modal open with an error
    /// banner; redirects and pending confirmations close it and hand the
    /// rest back to the host.
    pub fn resolve(&mut self, ticket: SubmissionTicket, outcome: AuthOutcome) -> Option<HostEffect> {
        if !self.is_open || ticket.epoch != self.epoch {
            return None;
        }
        self.submitting = false;
        match outcome {
            AuthOutcome::Redirect(path) => {
                self.close();
                Some(HostEffect::Navigate(path))
            }
            AuthOutcome::Pending(message) => {
                self.close();
                Some(HostEffect::Notice(message))
            }
            AuthOutcome::Failure(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    /// Credentials for the current submission, email trimmed.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.fields.email.trim(), self.fields.password.clone())
    }

    /// Signup payload; a blank display name becomes `None`.
    pub fn signup_profile(&self) -> SignupProfile {
        let full_name = self.fields.full_name.trim();
        SignupProfile {
            credentials: self.credentials(),
            display_name: (!full_name.is_empty()).then(|| full_name.to_string()),
        }
    }
}
