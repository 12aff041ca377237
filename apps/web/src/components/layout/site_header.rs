//! Marketing header: brand, section links, theme toggle, and the auth
//! entry points. Signed-out visitors get Sign In / Get Started buttons that
//! open the modal on the matching tab; signed-in users get the dashboard
//! link and sign-out. Navigation is client-side only.

use auth_flow::{AuthProvider, AuthTab};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::app_lib::config::AppConfig;
use crate::app_lib::theme::{use_theme, Theme};
use crate::components::modal_context::use_modal;
use crate::features::auth::state::{use_auth_client, use_session};

const NAV_LINK_CLASS: &str = "block py-2 px-3 text-slate-700 rounded hover:bg-slate-100 md:hover:bg-transparent md:p-0 md:hover:text-indigo-600 dark:text-slate-200 dark:hover:bg-gray-800 md:dark:hover:bg-transparent md:dark:hover:text-indigo-400";

#[component]
pub fn SiteHeader() -> impl IntoView {
    let modal = use_modal();
    let session = use_session();
    let client = use_auth_client();
    let theme = use_theme();
    let (menu_open, set_menu_open) = signal(false);

    let site_name = AppConfig::load().site_name;
    let is_authenticated = session.is_authenticated;

    let toggle_theme = {
        let theme = theme.clone();
        move |_| theme.toggle()
    };
    let theme_label = move || {
        if theme.theme() == Theme::Dark {
            "Light mode"
        } else {
            "Dark mode"
        }
    };

    let sign_out = move |_| {
        let client = client.clone();
        set_menu_open.set(false);
        spawn_local(async move {
            if let Err(err) = client.sign_out().await {
                log::warn!("sign-out failed: {err}");
            }
            session.clear_session();
        });
    };

    view! {
        <header class="border-b border-slate-200 dark:border-gray-800">
            <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                <A
                    href="/"
                    {..}
                    class="flex items-center gap-2"
                    on:click=move |_| set_menu_open.set(false)
                >
                    <span class="inline-flex h-8 w-8 items-center justify-center rounded-lg bg-indigo-600 font-bold text-white">
                        "L"
                    </span>
                    <span class="text-lg font-semibold tracking-tight">{site_name}</span>
                </A>

                <div class="flex items-center gap-2 md:order-2">
                    <button type="button" class=NAV_LINK_CLASS on:click=toggle_theme>
                        {theme_label}
                    </button>

                    <Show
                        when=move || is_authenticated.get()
                        fallback=move || {
                            view! {
                                <button
                                    type="button"
                                    class=NAV_LINK_CLASS
                                    on:click=move |_| modal.open(AuthTab::Login)
                                >
                                    "Sign in"
                                </button>
                                <button
                                    type="button"
                                    class="rounded-lg bg-indigo-600 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-700"
                                    on:click=move |_| modal.open(AuthTab::Signup)
                                >
                                    "Get started"
                                </button>
                            }
                        }
                    >
                        <A href="/dashboard" {..} class=NAV_LINK_CLASS>
                            "Dashboard"
                        </A>
                        <button type="button" class=NAV_LINK_CLASS on:click=sign_out.clone()>
                            "Sign out"
                        </button>
                    </Show>

                    <button
                        type="button"
                        class="inline-flex h-10 w-10 items-center justify-center rounded-lg p-2 text-sm text-slate-500 hover:bg-slate-100 md:hidden dark:text-slate-400 dark:hover:bg-gray-800"
                        aria-controls="site-nav"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        "\u{2630}"
                    </button>
                </div>

                <div
                    id="site-nav"
                    class="w-full md:block md:w-auto md:order-1"
                    class:hidden=move || !menu_open.get()
                >
                    <ul class="mt-4 flex flex-col rounded-lg border border-slate-100 bg-slate-50 p-4 font-medium md:mt-0 md:flex-row md:gap-8 md:border-0 md:bg-transparent md:p-0 dark:border-gray-800 dark:bg-gray-900 md:dark:bg-transparent">
                        <li>
                            <a
                                href="/#features"
                                class=NAV_LINK_CLASS
                                on:click=move |_| set_menu_open.set(false)
                            >
                                "Features"
                            </a>
                        </li>
                        <li>
                            <a
                                href="/#pricing"
                                class=NAV_LINK_CLASS
                                on:click=move |_| set_menu_open.set(false)
                            >
                                "Pricing"
                            </a>
                        </li>
                        <li>
                            <a
                                href="/#faq"
                                class=NAV_LINK_CLASS
                                on:click=move |_| set_menu_open.set(false)
                            >
                                "FAQ"
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </header>
    }
}
