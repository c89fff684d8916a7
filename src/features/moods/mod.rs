//! Patient mood check-ins.

pub mod client;
pub mod types;
