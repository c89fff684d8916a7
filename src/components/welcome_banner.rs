//! Personalized greeting for the dashboards, shown only after the guard
//! has admitted the user.

use leptos::prelude::*;

use crate::app_lib::theme::Theme;
use crate::features::auth::guards::{signed_in_subtitle, welcome_message};
use crate::features::auth::state::use_session;

/// Greets the signed-in user by role and names the account. Renders
/// nothing without a session.
#[component]
pub fn WelcomeBanner() -> impl IntoView {
    let session = use_session();

    view! {
        {move || {
            session
                .session
                .get()
                .map(|current| {
                    view! {
                        <div class="mb-6">
                            <h1 class=Theme::TITLE>
                                {welcome_message(current.role)}
                            </h1>
                            <p class="text-sm text-gray-500">
                                {signed_in_subtitle(&current.email)}
                            </p>
                        </div>
                    }
                })
        }}
    }
}
