//! Dashboard stub shown after sign-in. Content is intentionally minimal;
//! the page exists to prove the session round-trip.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::AppShell;
use crate::features::auth::state::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    // UX-only guard; real access control lives with the auth provider.
    Effect::new(move |_| {
        if !session.is_authenticated.get() {
            navigate("/", Default::default());
        }
    });

    view! {
        <AppShell>
            <Show when=move || session.is_authenticated.get()>
                <section class="max-w-screen-md mx-auto px-4 py-12">
                    <h1 class="text-3xl font-bold">
                        {move || {
                            session
                                .session
                                .get()
                                .map(|active| format!("Hello, {}", active.email))
                                .unwrap_or_default()
                        }}
                    </h1>
                    <div class="mt-8 rounded-2xl border border-slate-200 p-6 dark:border-gray-800">
                        <h2 class="text-lg font-semibold">"Account"</h2>
                        <dl class="mt-4 space-y-2 text-sm">
                            <div class="flex gap-2">
                                <dt class="font-medium text-slate-500 dark:text-slate-400">
                                    "Email:"
                                </dt>
                                <dd>
                                    {move || {
                                        session
                                            .session
                                            .get()
                                            .map(|active| active.email)
                                            .unwrap_or_default()
                                    }}
                                </dd>
                            </div>
                            <div class="flex gap-2">
                                <dt class="font-medium text-slate-500 dark:text-slate-400">
                                    "User ID:"
                                </dt>
                                <dd class="font-mono">
                                    {move || {
                                        session
                                            .session
                                            .get()
                                            .map(|active| active.user_id)
                                            .unwrap_or_default()
                                    }}
                                </dd>
                            </div>
                        </dl>
                        <p class="mt-6 text-sm text-slate-600 dark:text-slate-300">
                            "You are securely signed in. This page is only visible with an active session."
                        </p>
                    </div>
                </section>
            </Show>
        </AppShell>
    }
}
