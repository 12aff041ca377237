//! Shared handle for the auth modal. The view-state machine itself lives in
//! `auth_flow`; this wraps it in a signal so any component (header buttons,
//! homepage CTAs) can open the modal, and carries the one-shot notice shown
//! after the modal closes with a pending confirmation.

use auth_flow::{AuthTab, ModalViewState};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ModalContext {
    pub state: RwSignal<ModalViewState>,
    notice: RwSignal<Option<String>>,
}

impl ModalContext {
    pub fn open(&self, tab: AuthTab) {
        self.notice.set(None);
        self.state.update(|state| state.open(tab));
    }

    pub fn close(&self) {
        self.state.update(|state| state.close());
    }

    pub fn notice(&self) -> RwSignal<Option<String>> {
        self.notice
    }

    pub fn show_notice(&self, message: String) {
        self.notice.set(Some(message));
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

/// Creates and provides the modal context at the app root.
pub fn provide_modal_context() -> ModalContext {
    let context = ModalContext {
        state: RwSignal::new(ModalViewState::closed()),
        notice: RwSignal::new(None),
    };
    provide_context(context);
    context
}

/// Returns the modal context or a detached fallback.
pub fn use_modal() -> ModalContext {
    use_context::<ModalContext>().unwrap_or_else(|| ModalContext {
        state: RwSignal::new(ModalViewState::closed()),
        notice: RwSignal::new(None),
    })
}
