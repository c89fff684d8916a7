use leptos::logging;
use leptos::prelude::*;

use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireSession;
use crate::features::sos::client;

/// The SOS page: one large button that alerts the care team.
#[component]
pub fn PatientSosPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <SosButton />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn SosButton() -> impl IntoView {
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (sent, set_sent) = signal(false);

    let sos_action = Action::new_local(move |_: &()| async move { client::send_sos().await });

    Effect::new(move |_| {
        if let Some(result) = sos_action.value().get() {
            match result {
                Ok(()) => set_sent.set(true),
                Err(err) => {
                    logging::error!("SOS error: {err}");
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_click = move |_| {
        set_error.set(None);
        set_sent.set(false);
        sos_action.dispatch(());
    };

    view! {
        <div class="flex flex-col items-center text-center space-y-6 mt-8">
            <h1 class=Theme::TITLE>"Need help right now?"</h1>
            <p class="text-gray-500 max-w-sm">
                "Press the button and your caretaker will be notified immediately."
            </p>
            <button
                type="button"
                class="h-40 w-40 rounded-full bg-red-600 text-2xl font-bold text-white shadow-lg hover:bg-red-700 focus:ring-4 focus:outline-none focus:ring-red-300"
                class:opacity-70=move || sos_action.pending().get()
                disabled=move || sos_action.pending().get()
                on:click=on_click
            >
                "SOS"
            </button>
            {move || {
                sos_action
                    .pending()
                    .get()
                    .then_some(view! { <Spinner /> })
            }}
            {move || {
                sent.get()
                    .then_some(
                        view! {
                            <Alert
                                kind=AlertKind::Success
                                message="SOS sent. Your caretaker has been notified.".to_string()
                            />
                        },
                    )
            }}
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                    })
            }}
        </div>
    }
}
