//! Shared UI components exported for routes and features.

pub(crate) mod layout;
pub(crate) mod ui;

mod log_list;
mod reminder_list;
mod welcome_banner;

pub(crate) use layout::AppShell;
pub(crate) use log_list::LogList;
pub(crate) use reminder_list::ReminderList;
pub(crate) use ui::{Alert, AlertKind, Spinner, SubmitButton};
pub(crate) use welcome_banner::WelcomeBanner;
