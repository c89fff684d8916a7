use leptos::prelude::*;

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireSession;
use crate::features::patients::client;

/// Roster of the signed-in caretaker's patients.
#[component]
pub fn CaretakerPatientsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <PatientsTable />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn PatientsTable() -> impl IntoView {
    let patients = LocalResource::new(move || async move { client::list_patients().await });

    view! {
        <section class="space-y-4">
            <h2 class=Theme::SECTION_TITLE>"Your patients"</h2>
            <div class="overflow-hidden bg-white shadow-sm border border-gray-200 rounded-2xl">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-violet-50">
                        <tr>
                            <th
                                scope="col"
                                class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider"
                            >
                                "Name"
                            </th>
                            <th
                                scope="col"
                                class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider"
                            >
                                "Safe zone radius"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200">
                        <Suspense fallback=move || {
                            view! {
                                <tr>
                                    <td colspan="2" class="px-6 py-12 text-center">
                                        <Spinner />
                                    </td>
                                </tr>
                            }
                        }>
                            {move || match patients.get() {
                                Some(Ok(list)) if list.is_empty() => {
                                    view! {
                                        <tr>
                                            <td
                                                colspan="2"
                                                class="px-6 py-12 text-center text-sm text-gray-500"
                                            >
                                                "No patients found."
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                Some(Ok(list)) => {
                                    view! {
                                        <For
                                            each=move || list.clone()
                                            key=|patient| patient.id.clone()
                                            children=|patient| {
                                                let name = patient.name_label().to_string();
                                                let radius = patient.safe_radius_label();
                                                view! {
                                                    <tr class="hover:bg-violet-50 transition-colors">
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">
                                                            {name}
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm text-gray-500">
                                                            {radius}
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    }
                                        .into_any()
                                }
                                Some(Err(err)) => {
                                    view! {
                                        <tr>
                                            <td colspan="2" class="px-6 py-4">
                                                <Alert
                                                    kind=AlertKind::Error
                                                    message=err.user_message()
                                                />
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <tr>
                                            <td colspan="2" class="px-6 py-12 text-center">
                                                <Spinner />
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>
        </section>
    }
}
