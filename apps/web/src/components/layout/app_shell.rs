//! Shared page wrapper: header, footer, the auth modal, and the one-shot
//! notice area. The notice surfaces pending-confirmation messages after the
//! modal has closed, so it lives at the shell level rather than inside the
//! modal.

use leptos::prelude::*;

use crate::components::auth_modal::AuthModal;
use crate::components::layout::{SiteFooter, SiteHeader};
use crate::components::modal_context::use_modal;
use crate::components::{Alert, AlertKind};

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let modal = use_modal();
    let notice = modal.notice();

    view! {
        <div class="min-h-screen flex flex-col bg-white text-slate-900 dark:bg-gray-950 dark:text-white">
            <SiteHeader />
            {move || {
                notice
                    .get()
                    .map(|message| {
                        view! {
                            <div class="container mx-auto mt-4 flex items-start gap-3 px-4">
                                <div class="flex-1">
                                    <Alert kind=AlertKind::Success message />
                                </div>
                                <button
                                    type="button"
                                    class="mt-2 text-sm text-slate-500 hover:text-slate-900 dark:hover:text-white"
                                    on:click=move |_| modal.dismiss_notice()
                                >
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
            }}
            <main class="flex-1">{children()}</main>
            <SiteFooter />
            <AuthModal />
        </div>
    }
}
