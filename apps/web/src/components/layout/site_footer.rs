//! Marketing footer: link columns and the build line. Links are
//! presentational anchors; only the build metadata is live data.

use leptos::prelude::*;

use crate::app_lib::build_info;
use crate::app_lib::config::AppConfig;

const COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Product", ["Features", "Pricing", "Changelog", "Roadmap"]),
    ("Resources", ["Docs", "Guides", "Status", "Support"]),
    ("Company", ["About", "Blog", "Careers", "Contact"]),
];

#[component]
pub fn SiteFooter() -> impl IntoView {
    let site_name = AppConfig::load().site_name;

    view! {
        <footer class="border-t border-slate-200 bg-slate-50 dark:border-gray-800 dark:bg-gray-900">
            <div class="max-w-screen-xl mx-auto grid gap-8 px-4 py-10 sm:grid-cols-2 md:grid-cols-4">
                <div>
                    <span class="text-lg font-semibold tracking-tight">{site_name.clone()}</span>
                    <p class="mt-2 text-sm text-slate-500 dark:text-slate-400">
                        "One workspace for your projects, your team, and your momentum."
                    </p>
                </div>
                {COLUMNS
                    .iter()
                    .map(|(title, links)| {
                        view! {
                            <div>
                                <h3 class="text-xs font-semibold uppercase tracking-wide text-slate-500 dark:text-slate-400">
                                    {*title}
                                </h3>
                                <ul class="mt-3 space-y-2 text-sm">
                                    {links
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <li>
                                                    <a
                                                        href="#"
                                                        class="text-slate-600 hover:text-slate-900 dark:text-slate-300 dark:hover:text-white"
                                                    >
                                                        {*link}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="border-t border-slate-200 dark:border-gray-800">
                <div class="max-w-screen-xl mx-auto flex flex-wrap items-center justify-between gap-2 px-4 py-4 text-xs text-slate-500 dark:text-slate-400">
                    <span>{format!("\u{a9} {site_name}. All rights reserved.")}</span>
                    <span>
                        {format!("v{} ({})", build_info::VERSION, build_info::short_sha())}
                    </span>
                </div>
            </div>
        </footer>
    }
}
