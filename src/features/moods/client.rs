//! Mood check-in API calls.

use crate::app_lib::{post_json_discard, AppError};
use crate::features::moods::types::NewMood;

/// Records how the signed-in patient feels right now.
pub async fn submit_mood(check_in: &NewMood) -> Result<(), AppError> {
    post_json_discard("/api/moods", check_in).await
}
