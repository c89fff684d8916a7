//! Payloads for the auth endpoints. Passwords pass through these types on
//! their way to the API and must never end up in logs.

use serde::{Deserialize, Serialize};

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token grant returned by a successful login. Both fields tolerate
/// absence: a missing token means the credentials were rejected no matter
/// what the status code said, and a missing role falls back to patient.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}
