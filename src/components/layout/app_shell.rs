//! Shared layout wrapper with the header, role-aware navigation, and the
//! content container. Navigation is client-side only; the API enforces
//! access on every request regardless of which links are visible.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app_lib::session::{BrowserSession, SessionStore};
use crate::app_lib::{build_info, theme::Theme};
use crate::features::auth::state::use_session;
use crate::routes::paths;

/// Wraps a page with the Flegi header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="bg-white shadow-sm">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-2">
                        <span class="text-xl" aria-hidden="true">"💜"</span>
                        <span class="font-semibold text-violet-900 whitespace-nowrap">
                            "Flegi"
                        </span>
                    </A>
                    <nav>
                        <ul class="font-medium flex flex-row items-center space-x-4 md:space-x-6">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <A href={paths::LOGIN} {..} class=Theme::NAV_LINK>
                                                "Sign In"
                                            </A>
                                        </li>
                                        <li>
                                            <A href={paths::REGISTER} {..} class=Theme::NAV_LINK>
                                                "Sign Up"
                                            </A>
                                        </li>
                                    }
                                }
                            >
                                {move || {
                                    session
                                        .session
                                        .get()
                                        .map(|current| {
                                            paths::nav_links(current.role)
                                                .iter()
                                                .map(|(label, href)| {
                                                    view! {
                                                        <li>
                                                            <A href={*href} {..} class=Theme::NAV_LINK>
                                                                {*label}
                                                            </A>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()
                                        })
                                }}
                                <li>
                                    <A
                                        href={paths::LOGIN}
                                        {..}
                                        class=Theme::NAV_LINK
                                        on:click=move |_| {
                                            BrowserSession.clear();
                                            session.clear_session();
                                        }
                                    >
                                        "Sign Out"
                                    </A>
                                </li>
                            </Show>
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto max-w-3xl p-4 mt-6">{children()}</div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400">
                {format!(
                    "Flegi v{} ({})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::short_commit_hash(),
                )}
            </footer>
        </div>
    }
}
