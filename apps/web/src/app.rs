use crate::app_lib::theme::ThemeProvider;
use crate::components::modal_context::provide_modal_context;
use crate::features::auth::state::SessionProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    provide_modal_context();

    view! {
        <ThemeProvider>
            <SessionProvider>
                <Router>
                    <AppRoutes />
                </Router>
            </SessionProvider>
        </ThemeProvider>
    }
}
