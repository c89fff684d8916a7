//! Feature modules, each pairing an API client with its payload types.

pub mod auth;
pub mod logs;
pub mod moods;
pub mod patients;
pub mod reminders;
pub mod sos;
