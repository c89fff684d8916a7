//! Patient roster API calls. Unlike the passive lists, a failure here is
//! returned to the page so the caretaker sees what went wrong.

use crate::app_lib::{get_json, AppError};
use crate::features::patients::types::PatientSummary;

/// Fetches the signed-in caretaker's patients.
pub async fn list_patients() -> Result<Vec<PatientSummary>, AppError> {
    get_json("/api/patients").await
}
