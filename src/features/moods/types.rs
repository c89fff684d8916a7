//! Mood check-in payloads.

use serde::Serialize;

use crate::app_lib::AppError;

/// Mood vocabulary the server accepts, in the order the form offers it.
pub const MOOD_CHOICES: &[&str] = &["good", "okay", "low"];

/// Body for `POST /api/moods`.
#[derive(Clone, Debug, Serialize)]
pub struct NewMood {
    pub mood: String,
    pub note: Option<String>,
}

/// Checks the patient's check-in form; the note is optional.
pub fn validate_new_mood(mood: &str, note: &str) -> Result<NewMood, AppError> {
    let mood = mood.trim();
    if mood.is_empty() {
        return Err(AppError::Validation(
            "Please select how you feel.".to_string(),
        ));
    }

    let note = note.trim();
    Ok(NewMood {
        mood: mood.to_string(),
        note: (!note.is_empty()).then(|| note.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_requires_a_mood() {
        assert!(matches!(
            validate_new_mood("", "fine"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_new_mood("   ", ""),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn validate_drops_blank_note() {
        let check_in = validate_new_mood("good", "  ").unwrap();
        assert_eq!(check_in.mood, "good");
        assert_eq!(check_in.note, None);

        let with_note = validate_new_mood("low", " rough morning ").unwrap();
        assert_eq!(with_note.note.as_deref(), Some("rough morning"));
    }

    #[test]
    fn serialized_note_is_null_when_absent() {
        let check_in = validate_new_mood("okay", "").unwrap();
        let value = serde_json::to_value(&check_in).unwrap();
        assert_eq!(value["mood"], "okay");
        assert!(value["note"].is_null());
    }
}
