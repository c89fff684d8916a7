use leptos::prelude::*;

/// Spinning placeholder shown while a fetch or form action is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-violet-200 border-t-violet-700"
            role="status"
        >
            <span class="sr-only">"Loading"</span>
        </div>
    }
}
