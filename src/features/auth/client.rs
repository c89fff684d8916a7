//! Login and registration flows.
//!
//! The async wrappers keep endpoint paths and storage writes in one
//! place. The pure helpers hold the rules the form pages apply around
//! the network call (field validation, the token check) so they can be
//! tested without a browser.

use crate::app_lib::session::{Role, Session, SessionStore};
use crate::app_lib::{post_json, post_json_discard, AppError};
use crate::features::auth::types::{LoginRequest, LoginResponse, RegisterRequest};

/// Exchanges credentials for a bearer token and persists the session.
pub async fn login(
    store: &dyn SessionStore,
    email: &str,
    password: &str,
) -> Result<Session, AppError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response: LoginResponse = post_json("/api/auth/login", &request).await?;
    let session = session_from_login(email, &response)?;
    store.save(&session);
    Ok(session)
}

/// Creates an account. Never signs the user in; the caller decides what
/// happens next.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    post_json_discard("/api/auth/register", request).await
}

/// Applies the login response rules: no token (or an empty one) means the
/// credentials were rejected, and an unknown or absent role falls back to
/// patient.
pub fn session_from_login(email: &str, response: &LoginResponse) -> Result<Session, AppError> {
    let token = response
        .access_token
        .clone()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Auth("Invalid credentials".to_string()))?;
    let role = response.role.as_deref().map(Role::parse).unwrap_or(Role::Patient);
    Ok(Session {
        token,
        role,
        email: email.to_string(),
    })
}

/// Checks the login form before any request goes out. Returns the
/// trimmed values that should actually be sent.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), AppError> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Please enter email and password.".to_string(),
        ));
    }
    Ok((email.to_string(), password.to_string()))
}

/// Checks the registration form. The role is lowercased for the API and
/// a blank selection falls back to patient; anything else is the
/// server's to accept or reject.
pub fn validate_register(
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<RegisterRequest, AppError> {
    let name = name.trim();
    let email = email.trim();
    let password = password.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AppError::Validation("Please fill all fields.".to_string()));
    }

    let role = role.trim().to_lowercase();
    let role = if role.is_empty() {
        Role::Patient.as_str().to_string()
    } else {
        role
    };

    Ok(RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::session::MemorySession;

    #[test]
    fn validate_login_requires_both_fields() {
        assert!(matches!(
            validate_login("", "secret"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_login("pat@flegi.example", "   "),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn validate_login_trims_what_it_returns() {
        let (email, password) = validate_login("  pat@flegi.example ", " secret ").unwrap();
        assert_eq!(email, "pat@flegi.example");
        assert_eq!(password, "secret");
    }

    #[test]
    fn validate_register_requires_name_email_password() {
        for (name, email, password) in [
            ("", "pat@flegi.example", "secret"),
            ("Pat", "", "secret"),
            ("Pat", "pat@flegi.example", ""),
        ] {
            let result = validate_register(name, email, password, "patient");
            match result {
                Err(AppError::Validation(message)) => {
                    assert_eq!(message, "Please fill all fields.");
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn validate_register_lowercases_the_role() {
        let request = validate_register("Cara", "cara@flegi.example", "secret", "Caretaker")
            .unwrap();
        assert_eq!(request.role, "caretaker");
    }

    #[test]
    fn validate_register_defaults_blank_role_to_patient() {
        let request = validate_register("Pat", "pat@flegi.example", "secret", "  ").unwrap();
        assert_eq!(request.role, "patient");
    }

    #[test]
    fn session_from_login_rejects_missing_token() {
        let response = LoginResponse {
            access_token: None,
            role: Some("patient".to_string()),
        };
        match session_from_login("pat@flegi.example", &response) {
            Err(AppError::Auth(message)) => assert_eq!(message, "Invalid credentials"),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[test]
    fn session_from_login_rejects_empty_token() {
        let response = LoginResponse {
            access_token: Some(String::new()),
            role: None,
        };
        assert!(session_from_login("pat@flegi.example", &response).is_err());
    }

    #[test]
    fn session_from_login_defaults_role_to_patient() {
        let response = LoginResponse {
            access_token: Some("tok".to_string()),
            role: Some("supervisor".to_string()),
        };
        let session = session_from_login("pat@flegi.example", &response).unwrap();
        assert_eq!(session.role, Role::Patient);
        assert_eq!(session.email, "pat@flegi.example");
    }

    #[test]
    fn session_from_login_reads_caretaker_role_case_insensitively() {
        let response = LoginResponse {
            access_token: Some("tok".to_string()),
            role: Some("CARETAKER".to_string()),
        };
        let session = session_from_login("cara@flegi.example", &response).unwrap();
        assert_eq!(session.role, Role::Caretaker);
    }

    #[test]
    fn saved_session_survives_store_round_trip() {
        let store = MemorySession::default();
        let response = LoginResponse {
            access_token: Some("tok".to_string()),
            role: Some("caretaker".to_string()),
        };
        let session = session_from_login("cara@flegi.example", &response).unwrap();
        store.save(&session);
        assert_eq!(store.load(), Some(session));
    }
}
