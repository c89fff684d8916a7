//! Observation log payloads. Every read field tolerates absence; the
//! label helpers supply the fallback text the cards show.

use serde::{Deserialize, Serialize};

use crate::app_lib::AppError;

/// One observation entry as served by `GET /api/logs`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LogEntry {
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl LogEntry {
    pub fn patient_label(&self) -> &str {
        non_empty(&self.patient_name).unwrap_or("Unknown")
    }

    pub fn mood_label(&self) -> &str {
        non_empty(&self.mood).unwrap_or("No mood data")
    }

    pub fn timestamp_label(&self) -> &str {
        non_empty(&self.timestamp).unwrap_or("Unknown time")
    }

    pub fn notes_label(&self) -> &str {
        non_empty(&self.notes).unwrap_or("No notes provided")
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Body for `POST /api/logs`.
#[derive(Clone, Debug, Serialize)]
pub struct NewLogEntry {
    pub patient_name: String,
    pub mood: Option<String>,
    pub notes: String,
}

/// Checks the caretaker's log form; the mood is optional.
pub fn validate_new_log_entry(
    patient_name: &str,
    mood: &str,
    notes: &str,
) -> Result<NewLogEntry, AppError> {
    let patient_name = patient_name.trim();
    let notes = notes.trim();
    if patient_name.is_empty() || notes.is_empty() {
        return Err(AppError::Validation(
            "Please enter a patient name and your notes.".to_string(),
        ));
    }

    let mood = mood.trim();
    Ok(NewLogEntry {
        patient_name: patient_name.to_string(),
        mood: (!mood.is_empty()).then(|| mood.to_string()),
        notes: notes.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_with_defaults() {
        let entry: LogEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry, LogEntry::default());
    }

    #[test]
    fn labels_fall_back_per_field() {
        let entry = LogEntry::default();
        assert_eq!(entry.patient_label(), "Unknown");
        assert_eq!(entry.mood_label(), "No mood data");
        assert_eq!(entry.timestamp_label(), "Unknown time");
        assert_eq!(entry.notes_label(), "No notes provided");
    }

    #[test]
    fn labels_pass_real_values_through() {
        let entry = LogEntry {
            patient_name: Some("Alma".to_string()),
            mood: Some("okay".to_string()),
            timestamp: Some("2026-08-25T09:30:00Z".to_string()),
            notes: Some("Slept through the night".to_string()),
        };
        assert_eq!(entry.patient_label(), "Alma");
        assert_eq!(entry.mood_label(), "okay");
        assert_eq!(entry.timestamp_label(), "2026-08-25T09:30:00Z");
        assert_eq!(entry.notes_label(), "Slept through the night");
    }

    #[test]
    fn partial_item_keeps_what_it_has() {
        let entry: LogEntry =
            serde_json::from_str(r#"{"patient_name":"Alma","mood":null}"#).unwrap();
        assert_eq!(entry.patient_label(), "Alma");
        assert_eq!(entry.mood_label(), "No mood data");
    }

    #[test]
    fn validate_requires_patient_and_notes() {
        assert!(validate_new_log_entry("", "good", "notes").is_err());
        assert!(validate_new_log_entry("Alma", "good", "   ").is_err());
    }

    #[test]
    fn validate_drops_blank_mood() {
        let entry = validate_new_log_entry("Alma", "", "Quiet afternoon").unwrap();
        assert_eq!(entry.mood, None);
        assert_eq!(entry.notes, "Quiet afternoon");

        let with_mood = validate_new_log_entry("Alma", "low", "Restless").unwrap();
        assert_eq!(with_mood.mood.as_deref(), Some("low"));
    }
}
