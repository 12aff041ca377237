mod dashboard;
mod home;
mod not_found;

pub(crate) use dashboard::DashboardPage;
pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::modal_context::use_modal;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let modal = use_modal();
    let location = use_location();

    // The pending-confirmation notice is one-shot: it belongs to the page it
    // appeared on and does not survive a route change.
    Effect::new(move |previous: Option<String>| {
        let path = location.pathname.get();
        if previous.is_some_and(|previous| previous != path) {
            modal.dismiss_notice();
        }
        path
    });

    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
