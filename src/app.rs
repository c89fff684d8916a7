use leptos::prelude::*;
use leptos_router::components::Router;

use crate::features::auth::state::SessionProvider;
use crate::routes::AppRoutes;

/// Application root: the restored session context wrapping the router.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <Router>
                <AppRoutes />
            </Router>
        </SessionProvider>
    }
}
