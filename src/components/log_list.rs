//! Observation log cards fed by the logs endpoint. Same contract as the
//! reminder list: failures render the placeholder, fields fall back one
//! by one.

use leptos::prelude::*;

use crate::app_lib::theme::Theme;
use crate::components::Spinner;
use crate::features::logs::client;

/// Renders the observation log entries visible to the signed-in user.
/// Bump `refresh` to fetch again after recording an entry.
#[component]
pub fn LogList(
    #[prop(optional, into, default = Signal::from(0u64))] refresh: Signal<u64>,
) -> impl IntoView {
    let entries = LocalResource::new(move || {
        let _version = refresh.get();
        async move { client::fetch_logs().await }
    });

    view! {
        <Suspense fallback=move || view! { <Spinner /> }>
            {move || match entries.get() {
                Some(list) if list.is_empty() => {
                    view! { <p class="text-gray-500 text-center">"No logs found yet."</p> }
                        .into_any()
                }
                Some(list) => {
                    view! {
                        <div class="space-y-3">
                            {list
                                .into_iter()
                                .map(|entry| {
                                    let patient = entry.patient_label().to_string();
                                    let mood = entry.mood_label().to_string();
                                    let timestamp = entry.timestamp_label().to_string();
                                    let notes = entry.notes_label().to_string();
                                    view! {
                                        <div class=Theme::CARD>
                                            <div class="flex items-baseline justify-between">
                                                <h4 class="text-lg font-bold text-violet-900">
                                                    {patient}
                                                </h4>
                                                <span class="text-xs text-gray-400">{timestamp}</span>
                                            </div>
                                            <p class="text-sm text-gray-600 mt-1">
                                                "Mood: " {mood}
                                            </p>
                                            <p class="text-sm text-gray-600 mt-1">
                                                "📝 " {notes}
                                            </p>
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
