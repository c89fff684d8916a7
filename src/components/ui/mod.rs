mod alert;
mod button;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::SubmitButton;
pub(crate) use spinner::Spinner;
