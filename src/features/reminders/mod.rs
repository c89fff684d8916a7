//! Reminders shared between patients and their caretakers.

pub mod client;
pub mod types;
