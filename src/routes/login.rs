use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app_lib::session::BrowserSession;
use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner, SubmitButton};
use crate::features::auth::client;
use crate::features::auth::state::use_session;
use crate::routes::paths;

#[derive(Clone)]
struct Credentials {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        async move {
            client::login(&BrowserSession, &credentials.email, &credentials.password).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(signed_in) => {
                    let target = paths::dashboard(signed_in.role);
                    session.set_session(signed_in);
                    navigate(target, Default::default());
                }
                Err(err) => {
                    logging::error!("Login error: {err}");
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        match client::validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok((email_value, password_value)) => {
                login_action.dispatch(Credentials {
                    email: email_value,
                    password: password_value,
                });
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-center text-2xl font-semibold text-violet-900">
                    "Sign in to Flegi"
                </h1>
                <div class="mb-5">
                    <label class=Theme::LABEL for="email">
                        "Your email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=Theme::INPUT
                        autocomplete="email"
                        placeholder="name@example.com"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="password">
                        "Your password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=Theme::INPUT
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <SubmitButton disabled=login_action.pending()>
                    "Sign in"
                </SubmitButton>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.user_message() />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
