//! Reminder cards fed by the reminders endpoint.
//!
//! The list owns its fetch and never errors: a failed request renders the
//! same placeholder as an empty list, and each card falls back per field
//! so one sparse item cannot break the page.

use leptos::prelude::*;

use crate::app_lib::theme::Theme;
use crate::components::Spinner;
use crate::features::reminders::client;

/// Renders the reminders visible to the signed-in user. Bump `refresh`
/// to fetch again, for example after creating a reminder.
#[component]
pub fn ReminderList(
    #[prop(optional, into, default = Signal::from(0u64))] refresh: Signal<u64>,
) -> impl IntoView {
    let reminders = LocalResource::new(move || {
        let _version = refresh.get();
        async move { client::fetch_reminders().await }
    });

    view! {
        <Suspense fallback=move || view! { <Spinner /> }>
            {move || match reminders.get() {
                Some(list) if list.is_empty() => {
                    view! { <p class="text-gray-500 text-center">"No reminders found."</p> }
                        .into_any()
                }
                Some(list) => {
                    view! {
                        <div class="space-y-3">
                            {list
                                .into_iter()
                                .map(|reminder| {
                                    let patient = reminder.patient_label().to_string();
                                    let time = reminder.time_label().to_string();
                                    let text = reminder.text;
                                    view! {
                                        <div class=Theme::CARD>
                                            <h4 class="text-lg font-bold text-violet-900">
                                                {patient}
                                            </h4>
                                            <p class="text-sm text-gray-600 mt-1">{text}</p>
                                            <p class="text-xs text-gray-400 mt-2">{time}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
                None => view! { <Spinner /> }.into_any(),
            }}
        </Suspense>
    }
}
