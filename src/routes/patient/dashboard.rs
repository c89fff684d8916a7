use leptos::prelude::*;

use crate::app_lib::theme::Theme;
use crate::components::{AppShell, ReminderList, WelcomeBanner};
use crate::features::auth::RequireSession;

/// Patient home: the greeting and the reminders due for the patient.
#[component]
pub fn PatientDashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <WelcomeBanner />
                <section class="space-y-4">
                    <h2 class=Theme::SECTION_TITLE>"Your reminders"</h2>
                    <ReminderList />
                </section>
            </RequireSession>
        </AppShell>
    }
}
