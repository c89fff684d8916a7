//! Observation log API calls. Reads degrade to an empty list, writes
//! surface their errors. As with reminders, entries decode one by one so
//! a single bad item cannot sink the batch.

use leptos::logging;
use serde_json::Value;

use crate::app_lib::{get_json, post_json_discard, AppError};
use crate::features::logs::types::{LogEntry, NewLogEntry};

/// Fetches the observation log entries visible to the signed-in user.
pub async fn fetch_logs() -> Vec<LogEntry> {
    logs_or_empty(get_json("/api/logs").await)
}

fn logs_or_empty(fetched: Result<Vec<Value>, AppError>) -> Vec<LogEntry> {
    match fetched {
        Ok(items) => items.into_iter().map(decode_log_entry).collect(),
        Err(err) => {
            logging::warn!("Failed to fetch logs: {err}");
            Vec::new()
        }
    }
}

fn decode_log_entry(item: Value) -> LogEntry {
    serde_json::from_value(item).unwrap_or_default()
}

/// Records an observation about a patient. Caretakers only, enforced by
/// the API.
pub async fn create_log(entry: &NewLogEntry) -> Result<(), AppError> {
    post_json_discard("/api/logs", entry).await
}
