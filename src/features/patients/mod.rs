//! The caretaker's patient roster.

pub mod client;
pub mod types;
