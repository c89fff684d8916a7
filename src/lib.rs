//! Flegi web client.
//!
//! A Leptos (CSR) single-page application for patients and caretakers:
//! sign in, reminders, mood check-ins, SOS alerts, and caretaker
//! overviews. All state lives in the browser; the Flegi API is the only
//! backend this crate talks to.

pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod components;
pub mod features;
pub mod routes;

pub use app::App;
