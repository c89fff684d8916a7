//! Reminder API calls.
//!
//! Reads degrade to an empty list so the page shows its placeholder
//! instead of an error; writes surface their errors to the caller's
//! form. List items decode one by one, so an item the read model cannot
//! make sense of renders with fallback labels instead of sinking the
//! rest of the batch.

use leptos::logging;
use serde_json::Value;

use crate::app_lib::{get_json, post_json_discard, AppError};
use crate::features::reminders::types::{NewReminder, Reminder};

/// Fetches the reminders visible to the signed-in user.
pub async fn fetch_reminders() -> Vec<Reminder> {
    reminders_or_empty(get_json("/api/reminders").await)
}

fn reminders_or_empty(fetched: Result<Vec<Value>, AppError>) -> Vec<Reminder> {
    match fetched {
        Ok(items) => items.into_iter().map(decode_reminder).collect(),
        Err(err) => {
            logging::warn!("Failed to fetch reminders: {err}");
            Vec::new()
        }
    }
}

fn decode_reminder(item: Value) -> Reminder {
    serde_json::from_value(item).unwrap_or_default()
}

/// Creates a reminder for a patient. The API only accepts this from
/// caretakers.
pub async fn create_reminder(reminder: &NewReminder) -> Result<(), AppError> {
    post_json_discard("/api/reminders", reminder).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn failed_fetch_degrades_to_empty_list() {
        let fetched = Err(AppError::Network("connection refused".to_string()));
        assert!(reminders_or_empty(fetched).is_empty());
    }

    #[test]
    fn successful_fetch_passes_through() {
        let reminders = reminders_or_empty(Ok(vec![json!({
            "patient_name": "Ada",
            "text": "Take morning medication",
            "time": "08:00",
        })]));
        assert_eq!(
            reminders,
            vec![Reminder {
                patient_name: Some("Ada".to_string()),
                text: "Take morning medication".to_string(),
                time: Some("08:00".to_string()),
            }]
        );
    }

    #[test]
    fn malformed_item_keeps_the_rest_of_the_batch() {
        let reminders = reminders_or_empty(Ok(vec![
            json!({"patient_name": "Ada", "text": "Short walk", "time": "9am"}),
            json!({"text": null}),
        ]));
        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].patient_label(), "Ada");
        assert_eq!(reminders[1], Reminder::default());
        assert_eq!(reminders[1].patient_label(), "Unknown");
        assert_eq!(reminders[1].time_label(), "Not specified");
    }
}
