//! Session persistence.
//!
//! A signed-in session is three strings (token, role, email) under fixed
//! keys in origin-scoped `localStorage`. Nothing here expires or encrypts:
//! the server decides on every request whether the token is still good,
//! and the browser's origin isolation keeps other sites out. The store is
//! a trait so flows and tests can swap in an in-memory stand-in.

use std::fmt;

pub const TOKEN_KEY: &str = "flegi_token";
pub const ROLE_KEY: &str = "flegi_role";
pub const EMAIL_KEY: &str = "flegi_email";

/// User category gating page access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Patient,
    Caretaker,
}

impl Role {
    /// Parses a stored or server-sent role. Matching is case-insensitive
    /// and anything unrecognized falls back to `Patient`, the less
    /// privileged of the two.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("caretaker") {
            Role::Caretaker
        } else {
            Role::Patient
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Caretaker => "caretaker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed-in user state carried across reloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub email: String,
}

/// Storage contract for the session.
pub trait SessionStore {
    fn save(&self, session: &Session);
    /// `None` whenever no usable token is stored.
    fn load(&self) -> Option<Session>;
    fn clear(&self);
}

/// Builds a session from the three raw storage fields. An absent or empty
/// token, or an absent role, means no session; a stored but unrecognized
/// role parses leniently to patient; a missing email shows up as an empty
/// string.
fn session_from_fields(
    token: Option<String>,
    role: Option<String>,
    email: Option<String>,
) -> Option<Session> {
    let token = token.filter(|token| !token.is_empty())?;
    let role = Role::parse(&role?);
    Some(Session {
        token,
        role,
        email: email.unwrap_or_default(),
    })
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok()).flatten()
}

/// `localStorage`-backed store used by the running app. Storage write
/// failures (private mode, quota) are ignored; the session then simply
/// does not survive a reload.
#[derive(Clone, Copy, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn save(&self, session: &Session) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &session.token);
            let _ = storage.set_item(ROLE_KEY, session.role.as_str());
            let _ = storage.set_item(EMAIL_KEY, &session.email);
        }
    }

    fn load(&self) -> Option<Session> {
        let storage = local_storage()?;
        session_from_fields(
            storage.get_item(TOKEN_KEY).ok().flatten(),
            storage.get_item(ROLE_KEY).ok().flatten(),
            storage.get_item(EMAIL_KEY).ok().flatten(),
        )
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(ROLE_KEY);
            let _ = storage.remove_item(EMAIL_KEY);
        }
    }
}

/// Token for the bearer header, read without building a full session.
pub fn stored_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemorySession {
    slot: std::cell::RefCell<Option<Session>>,
}

#[cfg(test)]
impl SessionStore for MemorySession {
    fn save(&self, session: &Session) {
        *self.slot.borrow_mut() = Some(session.clone());
    }

    fn load(&self) -> Option<Session> {
        self.slot.borrow().clone()
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("caretaker"), Role::Caretaker);
        assert_eq!(Role::parse("CARETAKER"), Role::Caretaker);
        assert_eq!(Role::parse(" Caretaker "), Role::Caretaker);
        assert_eq!(Role::parse("patient"), Role::Patient);
    }

    #[test]
    fn role_parse_defaults_unknown_to_patient() {
        assert_eq!(Role::parse("admin"), Role::Patient);
        assert_eq!(Role::parse(""), Role::Patient);
    }

    #[test]
    fn missing_token_means_no_session() {
        assert_eq!(
            session_from_fields(None, Some("caretaker".to_string()), None),
            None
        );
        assert_eq!(
            session_from_fields(Some(String::new()), Some("caretaker".to_string()), None),
            None
        );
    }

    #[test]
    fn missing_role_means_no_session() {
        assert_eq!(session_from_fields(Some("tok".to_string()), None, None), None);
    }

    #[test]
    fn stored_unknown_role_reads_as_patient() {
        let session =
            session_from_fields(Some("tok".to_string()), Some("admin".to_string()), None)
                .unwrap();
        assert_eq!(session.role, Role::Patient);
        assert_eq!(session.email, "");
    }

    #[test]
    fn full_fields_round_trip() {
        let session = session_from_fields(
            Some("tok".to_string()),
            Some("caretaker".to_string()),
            Some("cara@flegi.example".to_string()),
        )
        .unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.role, Role::Caretaker);
        assert_eq!(session.email, "cara@flegi.example");
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemorySession::default();
        assert!(store.load().is_none());

        let session = Session {
            token: "tok".to_string(),
            role: Role::Patient,
            email: "pat@flegi.example".to_string(),
        };
        store.save(&session);
        assert_eq!(store.load(), Some(session));

        store.clear();
        assert!(store.load().is_none());
    }
}
