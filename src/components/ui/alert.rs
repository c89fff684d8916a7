//! Alert banners for form feedback. Messages must already be safe to
//! show; never pass tokens or raw payloads through here.

use leptos::prelude::*;

/// Supported alert styles.
#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Success,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-xl border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
        }
        AlertKind::Success => {
            "rounded-xl border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
