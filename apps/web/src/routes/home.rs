//! Marketing homepage. Every call to action funnels into the auth modal;
//! the sections themselves are presentational.

use auth_flow::AuthTab;
use leptos::prelude::*;

use crate::components::layout::AppShell;
use crate::components::modal_context::use_modal;

const FEATURES: [(&str, &str); 6] = [
    (
        "Shared workspaces",
        "Bring projects, notes, and tasks together so the whole team works from the same page.",
    ),
    (
        "Realtime updates",
        "Changes land for everyone instantly. No refresh, no stale boards.",
    ),
    (
        "Flexible views",
        "Switch between lists, boards, and timelines without restructuring anything.",
    ),
    (
        "Integrations",
        "Connect the tools you already use and keep your workflow in one place.",
    ),
    (
        "Granular permissions",
        "Decide who can see, comment, and edit at the workspace or project level.",
    ),
    (
        "Audit-friendly history",
        "Every change is tracked, so you always know what happened and when.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let modal = use_modal();

    view! {
        <AppShell>
            <section class="max-w-screen-xl mx-auto px-4 py-20 text-center">
                <h1 class="mx-auto max-w-3xl text-4xl font-bold tracking-tight sm:text-5xl">
                    "Streamline your workflow. Grow faster."
                </h1>
                <p class="mx-auto mt-4 max-w-2xl text-lg text-slate-600 dark:text-slate-300">
                    "Access your projects, manage your work, and collaborate with your team all in one place."
                </p>
                <div class="mt-8 flex items-center justify-center gap-3">
                    <button
                        type="button"
                        class="rounded-lg bg-indigo-600 px-6 py-3 font-medium text-white hover:bg-indigo-700"
                        on:click=move |_| modal.open(AuthTab::Signup)
                    >
                        "Get started for free"
                    </button>
                    <button
                        type="button"
                        class="rounded-lg border border-slate-300 px-6 py-3 font-medium hover:bg-slate-50 dark:border-gray-700 dark:hover:bg-gray-800"
                        on:click=move |_| modal.open(AuthTab::Login)
                    >
                        "Sign in"
                    </button>
                </div>
            </section>

            <section id="features" class="border-t border-slate-200 dark:border-gray-800">
                <div class="max-w-screen-xl mx-auto px-4 py-16">
                    <h2 class="text-center text-3xl font-bold">"Everything in one place"</h2>
                    <div class="mt-10 grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        {FEATURES
                            .iter()
                            .map(|(title, blurb)| {
                                view! {
                                    <div class="rounded-2xl border border-slate-200 p-6 dark:border-gray-800">
                                        <h3 class="font-semibold">{*title}</h3>
                                        <p class="mt-2 text-sm text-slate-600 dark:text-slate-300">
                                            {*blurb}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="pricing" class="border-t border-slate-200 dark:border-gray-800">
                <div class="max-w-screen-xl mx-auto px-4 py-16 text-center">
                    <h2 class="text-3xl font-bold">"Start free, upgrade when you grow"</h2>
                    <p class="mx-auto mt-3 max-w-xl text-slate-600 dark:text-slate-300">
                        "Join thousands of teams already running their work here. No credit card required."
                    </p>
                    <button
                        type="button"
                        class="mt-6 rounded-lg bg-indigo-600 px-6 py-3 font-medium text-white hover:bg-indigo-700"
                        on:click=move |_| modal.open(AuthTab::Signup)
                    >
                        "Create your account"
                    </button>
                </div>
            </section>
        </AppShell>
    }
}
