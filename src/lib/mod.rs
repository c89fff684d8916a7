//! Shared client plumbing: configuration, session storage, the JSON API
//! layer, and error types. Feature modules build on these; nothing here
//! knows about specific pages or payloads.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod session;
pub mod theme;

pub use api::{get_json, post_empty, post_json, post_json_discard};
pub use errors::AppError;
