use leptos::prelude::*;

/// Submit button for the app's forms. Disable it while the form's action
/// is pending so a slow network cannot double-submit.
#[component]
pub fn SubmitButton(
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="text-white bg-violet-800 hover:bg-violet-900 focus:ring-4 focus:outline-none focus:ring-violet-300 font-medium rounded-xl text-sm w-full sm:w-auto px-5 py-2.5 text-center"
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
