use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;

use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner, SubmitButton};
use crate::features::auth::RequireSession;
use crate::features::moods::client;
use crate::features::moods::types::{validate_new_mood, NewMood, MOOD_CHOICES};

/// Patient mood check-in: a mood choice, an optional note, one submit.
#[component]
pub fn PatientMoodPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <MoodForm />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn MoodForm() -> impl IntoView {
    let (mood, set_mood) = signal(String::new());
    let (note, set_note) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (saved, set_saved) = signal(false);

    let submit_action = Action::new_local(move |check_in: &NewMood| {
        let check_in = check_in.clone();
        async move { client::submit_mood(&check_in).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => set_saved.set(true),
                Err(err) => {
                    logging::error!("Mood check-in error: {err}");
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_saved.set(false);

        match validate_new_mood(&mood.get_untracked(), &note.get_untracked()) {
            Ok(check_in) => {
                submit_action.dispatch(check_in);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <form class="max-w-sm mx-auto" on:submit=on_submit>
            <h1 class="mb-6 text-center text-2xl font-semibold text-violet-900">
                "How are you feeling today?"
            </h1>
            <div class="mb-5">
                <label class=Theme::LABEL for="mood">
                    "Your mood"
                </label>
                <select
                    id="mood"
                    class=Theme::INPUT
                    on:change=move |event| set_mood.set(event_target_value(&event))
                >
                    <option value="">"Choose a mood"</option>
                    {MOOD_CHOICES
                        .iter()
                        .map(|choice| view! { <option value=*choice>{*choice}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="mb-5">
                <label class=Theme::LABEL for="note">
                    "Anything you want to add?"
                </label>
                <textarea
                    id="note"
                    rows="3"
                    class=Theme::INPUT
                    placeholder="Optional note for your caretaker"
                    on:input=move |event| set_note.set(event_target_value(&event))
                ></textarea>
            </div>
            <SubmitButton disabled=submit_action.pending()>
                "Save check-in"
            </SubmitButton>
            {move || {
                submit_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                saved
                    .get()
                    .then_some(
                        view! {
                            <div class="mt-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="Mood saved. Thank you for checking in.".to_string()
                                />
                            </div>
                        },
                    )
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
    }
}
