use leptos::prelude::*;

use crate::app_lib::theme::Theme;
use crate::components::{AppShell, ReminderList};
use crate::features::auth::RequireSession;

/// Full reminder list for the signed-in patient.
#[component]
pub fn PatientRemindersPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <section class="space-y-4">
                    <h2 class=Theme::SECTION_TITLE>"Reminders"</h2>
                    <ReminderList />
                </section>
            </RequireSession>
        </AppShell>
    }
}
