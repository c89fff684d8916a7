//! The patient SOS button.

pub mod client;
