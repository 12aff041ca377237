//! Login/signup modal. Rendering is driven entirely by the
//! `auth_flow::ModalViewState` machine; user events dispatch into it and
//! submissions run through the orchestrator off the UI thread. A submission
//! left in flight when the modal closes resolves against a stale ticket and
//! is discarded by the presenter.

use auth_flow::{AuthOrchestrator, AuthTab, HostEffect};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::modal_context::use_modal;
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::auth::state::{use_auth_client, use_session, SessionEffects};

const INPUT_CLASS: &str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-indigo-400 focus:ring-2 focus:ring-indigo-200 dark:border-gray-700 dark:bg-gray-800 dark:text-white";
const LABEL_CLASS: &str = "block mb-2 text-xs font-semibold uppercase tracking-wide text-slate-500 dark:text-slate-400";
const TAB_CLASS: &str = "px-4 py-1.5 rounded-full text-sm font-medium transition-colors";

#[component]
pub fn AuthModal() -> impl IntoView {
    let modal = use_modal();
    let session = use_session();
    let client = use_auth_client();
    let navigate = use_navigate();
    let state = modal.state;

    // Background scrolling is suspended while the modal is open and restored
    // unconditionally on close, including forced closes and unmount.
    Effect::new(move |_| set_body_scroll_locked(state.with(|s| s.is_open())));
    on_cleanup(|| set_body_scroll_locked(false));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        // `submitting` is the only mutual exclusion: a second submit while
        // one is in flight gets no ticket and is dropped here.
        let Some(ticket) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        let tab = state.with_untracked(|s| s.active_tab());
        let credentials = state.with_untracked(|s| s.credentials());
        let profile = state.with_untracked(|s| s.signup_profile());

        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let effects = SessionEffects::new(client.clone(), session);
            let orchestrator = AuthOrchestrator::new(client, effects);
            let outcome = match tab {
                AuthTab::Login => orchestrator.submit_login(&credentials).await,
                AuthTab::Signup => orchestrator.submit_signup(&profile).await,
            };

            match state.try_update(|s| s.resolve(ticket, outcome)).flatten() {
                Some(HostEffect::Navigate(path)) => navigate(&path, Default::default()),
                Some(HostEffect::Notice(message)) => modal.show_notice(message),
                None => {}
            }
        });
    };

    view! {
        <Show when=move || state.with(|s| s.is_open())>
            <div class="fixed inset-0 z-50 flex items-center justify-center px-4">
                <div
                    class="absolute inset-0 bg-slate-900/60 backdrop-blur-sm"
                    on:click=move |_| modal.close()
                ></div>

                <div class="relative w-full max-w-md rounded-2xl bg-white p-6 shadow-2xl dark:bg-gray-900 sm:p-8">
                    <button
                        type="button"
                        class="absolute right-4 top-4 text-slate-400 hover:text-slate-900 dark:hover:text-white"
                        aria-label="Close modal"
                        on:click=move |_| modal.close()
                    >
                        "\u{2715}"
                    </button>

                    <div class="flex items-start justify-between gap-4 pr-8">
                        <div>
                            <h2 class="text-2xl font-semibold text-slate-900 dark:text-white">
                                {move || {
                                    match state.with(|s| s.active_tab()) {
                                        AuthTab::Login => "Sign In",
                                        AuthTab::Signup => "Create Account",
                                    }
                                }}
                            </h2>
                            <p class="mt-1 text-sm text-slate-500 dark:text-slate-400">
                                {move || {
                                    match state.with(|s| s.active_tab()) {
                                        AuthTab::Login => "Enter your details to proceed",
                                        AuthTab::Signup => "Get started for free today",
                                    }
                                }}
                            </p>
                        </div>
                        <div class="flex rounded-full bg-slate-100 p-1 dark:bg-gray-800">
                            <button
                                type="button"
                                class=TAB_CLASS
                                class:bg-white=move || state.with(|s| s.active_tab() == AuthTab::Login)
                                class:shadow=move || state.with(|s| s.active_tab() == AuthTab::Login)
                                on:click=move |_| state.update(|s| s.switch_tab(AuthTab::Login))
                            >
                                "Login"
                            </button>
                            <button
                                type="button"
                                class=TAB_CLASS
                                class:bg-white=move || state.with(|s| s.active_tab() == AuthTab::Signup)
                                class:shadow=move || state.with(|s| s.active_tab() == AuthTab::Signup)
                                on:click=move |_| state.update(|s| s.switch_tab(AuthTab::Signup))
                            >
                                "Sign Up"
                            </button>
                        </div>
                    </div>

                    <form class="mt-6 space-y-4" on:submit=on_submit.clone()>
                        {move || {
                            state
                                .with(|s| s.error().map(str::to_string))
                                .map(|message| {
                                    view! { <Alert kind=AlertKind::Error message /> }
                                })
                        }}

                        <Show when=move || state.with(|s| s.active_tab() == AuthTab::Signup)>
                            <div>
                                <label class=LABEL_CLASS for="fullName">
                                    "Full name"
                                </label>
                                <input
                                    id="fullName"
                                    name="fullName"
                                    type="text"
                                    class=INPUT_CLASS
                                    placeholder="Ada Lovelace"
                                    autocomplete="name"
                                    prop:value=move || state.with(|s| s.fields().full_name.clone())
                                    on:input=move |event| {
                                        state.update(|s| s.set_full_name(event_target_value(&event)));
                                    }
                                />
                            </div>
                        </Show>

                        <div>
                            <label class=LABEL_CLASS for="email">
                                "Email"
                            </label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                class=INPUT_CLASS
                                placeholder="you@company.com"
                                autocomplete="email"
                                required
                                prop:value=move || state.with(|s| s.fields().email.clone())
                                on:input=move |event| {
                                    state.update(|s| s.set_email(event_target_value(&event)));
                                }
                            />
                        </div>

                        <div>
                            <label class=LABEL_CLASS for="password">
                                "Password"
                            </label>
                            <div class="relative">
                                <input
                                    id="password"
                                    name="password"
                                    type=move || {
                                        if state.with(|s| s.reveal_password()) { "text" } else { "password" }
                                    }
                                    class=INPUT_CLASS
                                    placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                                    autocomplete=move || {
                                        match state.with(|s| s.active_tab()) {
                                            AuthTab::Login => "current-password",
                                            AuthTab::Signup => "new-password",
                                        }
                                    }
                                    required
                                    prop:value=move || state.with(|s| s.fields().password.clone())
                                    on:input=move |event| {
                                        state.update(|s| s.set_password(event_target_value(&event)));
                                    }
                                />
                                <button
                                    type="button"
                                    class="absolute inset-y-0 right-3 text-xs font-medium text-slate-500 hover:text-slate-900 dark:hover:text-white"
                                    on:click=move |_| state.update(|s| s.toggle_reveal_password())
                                >
                                    {move || {
                                        if state.with(|s| s.reveal_password()) { "Hide" } else { "Show" }
                                    }}
                                </button>
                            </div>
                        </div>

                        <Button
                            button_type="submit"
                            disabled=Signal::derive(move || state.with(|s| s.submitting()))
                        >
                            {move || {
                                match state.with(|s| s.active_tab()) {
                                    AuthTab::Login => "Sign In",
                                    AuthTab::Signup => "Create Account",
                                }
                            }}
                        </Button>

                        {move || {
                            state
                                .with(|s| s.submitting())
                                .then_some(view! { <div class="mt-2 text-center"><Spinner /></div> })
                        }}
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Toggles the page scroll lock on the document body.
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        log::warn!("failed to toggle page scroll lock");
    }
}
