//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::AppShell;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-9xl font-black text-violet-100 select-none">"404"</h1>
                <p class="text-2xl font-bold text-gray-900">"Page not found"</p>

                <div class="mt-6 space-y-6">
                    <p class="text-gray-500 max-w-sm mx-auto">
                        "This page does not exist. If you followed a link inside Flegi, sign in again and retry."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A
                            href="/"
                            {..}
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-violet-800 rounded-xl hover:bg-violet-900 focus:ring-4 focus:outline-none focus:ring-violet-300 transition-all"
                        >
                            "Go Home"
                        </A>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    if let Ok(history) = window.history() {
                                        let _ = history.back();
                                    }
                                }
                            }
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-xl hover:bg-gray-100 hover:text-violet-800 focus:z-10 focus:ring-4 focus:ring-gray-100 transition-all"
                        >
                            "Go Back"
                        </button>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
