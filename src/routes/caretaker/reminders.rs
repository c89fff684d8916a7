use leptos::ev::SubmitEvent;
use leptos::logging;
use leptos::prelude::*;

use crate::app_lib::theme::Theme;
use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, ReminderList, Spinner, SubmitButton};
use crate::features::auth::RequireSession;
use crate::features::reminders::client;
use crate::features::reminders::types::{validate_new_reminder, NewReminder};

/// Caretaker reminders: the shared list plus a form to add one. Creating
/// a reminder bumps the refresh counter so the list refetches.
#[component]
pub fn CaretakerRemindersPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <RemindersPanel />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn RemindersPanel() -> impl IntoView {
    let refresh = RwSignal::new(0u64);
    let (patient_name, set_patient_name) = signal(String::new());
    let (text, set_text) = signal(String::new());
    let (time, set_time) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let create_action = Action::new_local(move |reminder: &NewReminder| {
        let reminder = reminder.clone();
        async move { client::create_reminder(&reminder).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(()) => refresh.update(|version| *version += 1),
                Err(err) => {
                    logging::error!("Reminder create error: {err}");
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let reminder = validate_new_reminder(
            &patient_name.get_untracked(),
            &text.get_untracked(),
            &time.get_untracked(),
        );
        match reminder {
            Ok(reminder) => {
                create_action.dispatch(reminder);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <div class="space-y-8">
            <section class=Theme::CARD>
                <h2 class=Theme::SECTION_TITLE>"Add a reminder"</h2>
                <form class="mt-4 space-y-4" on:submit=on_submit>
                    <div>
                        <label class=Theme::LABEL for="patient-name">
                            "Patient name"
                        </label>
                        <input
                            id="patient-name"
                            type="text"
                            class=Theme::INPUT
                            required
                            on:input=move |event| set_patient_name.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="reminder-text">
                            "Reminder"
                        </label>
                        <input
                            id="reminder-text"
                            type="text"
                            class=Theme::INPUT
                            placeholder="Take the evening medication"
                            required
                            on:input=move |event| set_text.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="reminder-time">
                            "Time (optional)"
                        </label>
                        <input
                            id="reminder-time"
                            type="time"
                            class=Theme::INPUT
                            on:input=move |event| set_time.set(event_target_value(&event))
                        />
                    </div>
                    <SubmitButton disabled=create_action.pending()>
                        "Add reminder"
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
                <h2 class=Theme::SECTION_TITLE>"All reminders"</h2>
                <ReminderList refresh=refresh />
            </section>
        </div>
    }
}
