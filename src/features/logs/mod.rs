//! Caretaker observation logs.

pub mod client;
pub mod types;
