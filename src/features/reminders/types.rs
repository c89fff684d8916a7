//! Reminder payloads.
//!
//! The read model tolerates absence on every field so one sparse item
//! from the API never breaks the whole list; the label helpers supply
//! the fallback text the cards show.

use serde::{Deserialize, Serialize};

use crate::app_lib::AppError;

/// One reminder as served by `GET /api/reminders`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Reminder {
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub time: Option<String>,
}

impl Reminder {
    /// Patient the reminder belongs to, or `Unknown`.
    pub fn patient_label(&self) -> &str {
        match self.patient_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown",
        }
    }

    /// Scheduled time, or `Not specified`.
    pub fn time_label(&self) -> &str {
        match self.time.as_deref() {
            Some(time) if !time.is_empty() => time,
            _ => "Not specified",
        }
    }
}

/// Body for `POST /api/reminders`.
#[derive(Clone, Debug, Serialize)]
pub struct NewReminder {
    pub patient_name: String,
    pub text: String,
    pub time: Option<String>,
}

/// Checks the caretaker's reminder form; the time is optional.
pub fn validate_new_reminder(
    patient_name: &str,
    text: &str,
    time: &str,
) -> Result<NewReminder, AppError> {
    let patient_name = patient_name.trim();
    let text = text.trim();
    if patient_name.is_empty() || text.is_empty() {
        return Err(AppError::Validation(
            "Please enter a patient name and reminder text.".to_string(),
        ));
    }

    let time = time.trim();
    Ok(NewReminder {
        patient_name: patient_name.to_string(),
        text: text.to_string(),
        time: (!time.is_empty()).then(|| time.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_with_defaults() {
        let reminder: Reminder = serde_json::from_str("{}").unwrap();
        assert_eq!(reminder.patient_name, None);
        assert_eq!(reminder.text, "");
        assert_eq!(reminder.time, None);
    }

    #[test]
    fn labels_fall_back_when_fields_are_missing_or_empty() {
        let reminder = Reminder::default();
        assert_eq!(reminder.patient_label(), "Unknown");
        assert_eq!(reminder.time_label(), "Not specified");

        let blank = Reminder {
            patient_name: Some(String::new()),
            time: Some(String::new()),
            ..Reminder::default()
        };
        assert_eq!(blank.patient_label(), "Unknown");
        assert_eq!(blank.time_label(), "Not specified");
    }

    #[test]
    fn labels_pass_real_values_through() {
        let reminder = Reminder {
            patient_name: Some("Alma".to_string()),
            text: "Take the morning pills".to_string(),
            time: Some("08:00".to_string()),
        };
        assert_eq!(reminder.patient_label(), "Alma");
        assert_eq!(reminder.time_label(), "08:00");
    }

    #[test]
    fn validate_requires_patient_and_text() {
        assert!(validate_new_reminder("", "drink water", "").is_err());
        assert!(validate_new_reminder("Alma", "  ", "").is_err());
    }

    #[test]
    fn validate_drops_blank_time() {
        let reminder = validate_new_reminder(" Alma ", " drink water ", "  ").unwrap();
        assert_eq!(reminder.patient_name, "Alma");
        assert_eq!(reminder.text, "drink water");
        assert_eq!(reminder.time, None);

        let timed = validate_new_reminder("Alma", "drink water", "14:30").unwrap();
        assert_eq!(timed.time.as_deref(), Some("14:30"));
    }
}
