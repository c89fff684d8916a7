use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner, SubmitButton};
use crate::features::auth::client;
use crate::features::auth::types::RegisterRequest;
use crate::routes::paths;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window
                            .alert_with_message("Registration successful! Please login.");
                    }
                    navigate(paths::LOGIN, Default::default());
                }
                Err(err) => {
                    logging::error!("Register error: {err}");
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let request = client::validate_register(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &role.get_untracked(),
        );
        match request {
            Ok(request) => {
                register_action.dispatch(request);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-center text-2xl font-semibold text-violet-900">
                    "Create your Flegi account"
                </h1>
                <div class="mb-5">
                    <label class=Theme::LABEL for="name">
                        "Your name"
                    </label>
                    <input
                        id="name"
                        type="text"
                        class=Theme::INPUT
                        autocomplete="name"
                        required
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                </div>
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
                        autocomplete="new-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=Theme::LABEL for="role">
                        "I am a"
                    </label>
                    <select
                        id="role"
                        class=Theme::INPUT
                        on:change=move |event| set_role.set(event_target_value(&event))
                    >
                        <option value="">"Choose a role"</option>
                        <option value="patient">"Patient"</option>
                        <option value="caretaker">"Caretaker"</option>
                    </select>
                </div>
                <SubmitButton disabled=register_action.pending()>
                    "Sign up"
                </SubmitButton>
                {move || {
                    register_action
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
