use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;

use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, LogList, Spinner, SubmitButton};
use crate::features::auth::RequireSession;
use crate::features::logs::client;
use crate::features::logs::types::{validate_new_log_entry, NewLogEntry};
use crate::features::moods::types::MOOD_CHOICES;

/// Caretaker observation logs: the list plus a form to record one.
#[component]
pub fn CaretakerLogsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <LogsPanel />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn LogsPanel() -> impl IntoView {
    let refresh = RwSignal::new(0u64);
    let (patient_name, set_patient_name) = signal(String::new());
    let (mood, set_mood) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let create_action = Action::new_local(move |entry: &NewLogEntry| {
        let entry = entry.clone();
        async move { client::create_log(&entry).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(()) => refresh.update(|version| *version += 1),
                Err(err) => {
                    logging::error!("Log create error: {err}");
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let entry = validate_new_log_entry(
            &patient_name.get_untracked(),
            &mood.get_untracked(),
            &notes.get_untracked(),
        );
        match entry {
            Ok(entry) => {
                create_action.dispatch(entry);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <div class="space-y-8">
            <section class=Theme::CARD>
                <h2 class=Theme::SECTION_TITLE>"Record an observation"</h2>
                <form class="mt-4 space-y-4" on:submit=on_submit>
                    <div>
                        <label class=Theme::LABEL for="log-patient-name">
                            "Patient name"
                        </label>
                        <input
                            id="log-patient-name"
                            type="text"
                            class=Theme::INPUT
                            required
                            on:input=move |event| set_patient_name.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="log-mood">
                            "Observed mood (optional)"
                        </label>
                        <select
                            id="log-mood"
                            class=Theme::INPUT
                            on:change=move |event| set_mood.set(event_target_value(&event))
                        >
                            <option value="">"Not observed"</option>
                            {MOOD_CHOICES
                                .iter()
                                .map(|choice| view! { <option value=*choice>{*choice}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class=Theme::LABEL for="log-notes">
                            "Notes"
                        </label>
                        <textarea
                            id="log-notes"
                            rows="3"
                            class=Theme::INPUT
                            placeholder="Slept well, ate breakfast, short walk"
                            required
                            on:input=move |event| set_notes.set(event_target_value(&event))
                        ></textarea>
                    </div>
                    <SubmitButton disabled=create_action.pending()>
                        "Save log"
                    </SubmitButton>
                    {move || {
                        create_action
                            .pending()
                            .get()
                            .then_some(view! { <Spinner /> })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <Alert kind=AlertKind::Error message=err.user_message() />
                                }
                            })
                    }}
                </form>
            </section>
            <section class="space-y-4">
                <h2 class=Theme::SECTION_TITLE>"Observation log"</h2>
                <LogList refresh=refresh />
            </section>
        </div>
    }
}
