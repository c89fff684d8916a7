mod caretaker;
mod login;
mod not_found;
mod patient;
mod register;

pub mod paths;

pub(crate) use caretaker::{
    CaretakerDashboardPage, CaretakerLogsPage, CaretakerPatientsPage, CaretakerRemindersPage,
};
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use patient::{
    PatientDashboardPage, PatientMoodPage, PatientRemindersPage, PatientSosPage,
};
pub(crate) use register::RegisterPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/patient/dashboard") view=PatientDashboardPage />
            <Route path=path!("/patient/mood") view=PatientMoodPage />
            <Route path=path!("/patient/reminders") view=PatientRemindersPage />
            <Route path=path!("/patient/sos") view=PatientSosPage />
            <Route path=path!("/caretaker/dashboard") view=CaretakerDashboardPage />
            <Route path=path!("/caretaker/reminders") view=CaretakerRemindersPage />
            <Route path=path!("/caretaker/logs") view=CaretakerLogsPage />
            <Route path=path!("/caretaker/patients") view=CaretakerPatientsPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
