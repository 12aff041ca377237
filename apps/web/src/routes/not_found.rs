use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::AppShell;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="max-w-screen-md mx-auto px-4 py-20 text-center">
                <h1 class="text-4xl font-bold">"404"</h1>
                <p class="mt-3 text-slate-600 dark:text-slate-300">
                    "That page does not exist."
                </p>
                <A href="/" {..} class="mt-6 inline-block text-indigo-600 hover:underline">
                    "Back to the homepage"
                </A>
            </section>
        </AppShell>
    }
}
