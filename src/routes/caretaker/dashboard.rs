use leptos::prelude::*;

use crate::app_lib::theme::Theme;
use crate::components::{AppShell, LogList, ReminderList, WelcomeBanner};
use crate::features::auth::RequireSession;

/// Caretaker home: the greeting, shared reminders, and recent
/// observation logs.
#[component]
pub fn CaretakerDashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <WelcomeBanner />
                <section class="space-y-4">
                    <h2 class=Theme::SECTION_TITLE>"Patient reminders"</h2>
                    <ReminderList />
                </section>
                <section class="space-y-4 mt-10">
                    <h2 class=Theme::SECTION_TITLE>"Recent logs"</h2>
                    <LogList />
                </section>
            </RequireSession>
        </AppShell>
    }
}
