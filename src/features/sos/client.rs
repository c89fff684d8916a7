//! SOS alerting. One tap tells the care team the patient needs help; the
//! server works out who the patient is from the bearer token, so the
//! request carries no body.

use crate::app_lib::{post_empty, AppError};

/// Raises an SOS alert for the signed-in patient.
pub async fn send_sos() -> Result<(), AppError> {
    post_empty("/api/sos").await
}
