//! Page-entry guard for protected routes.
//!
//! The guard runs once per page load: it reads the persisted session,
//! checks the role policy for the current path, and either renders the
//! page or alerts and sends the visitor to the login page. This is a UX
//! convenience only; real access control lives on the API, which checks
//! the bearer token on every request.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app_lib::session::{BrowserSession, Role, Session, SessionStore};
use crate::features::auth::policy::{self, Access};
use crate::routes::paths;

/// Outcome of the guard check for one page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    NotSignedIn,
    WrongRole { required: Role },
}

impl GuardOutcome {
    /// Alert text shown before redirecting, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            GuardOutcome::Allow => None,
            GuardOutcome::NotSignedIn => Some("Please login to continue."),
            GuardOutcome::WrongRole {
                required: Role::Caretaker,
            } => Some("Access denied. Only caretakers allowed."),
            GuardOutcome::WrongRole {
                required: Role::Patient,
            } => Some("Access denied. Only patients allowed."),
        }
    }
}

/// Decides what happens for a session and path pair.
pub fn guard_decision(session: Option<&Session>, path: &str) -> GuardOutcome {
    let Some(session) = session else {
        return GuardOutcome::NotSignedIn;
    };
    match policy::evaluate(path, session.role) {
        Access::Granted => GuardOutcome::Allow,
        Access::Denied { allowed } => GuardOutcome::WrongRole {
            required: allowed.first().copied().unwrap_or(Role::Patient),
        },
    }
}

/// Role-conditioned greeting for the dashboards.
pub fn welcome_message(role: Role) -> &'static str {
    match role {
        Role::Caretaker => "Welcome back, Caretaker 💙",
        Role::Patient => "Welcome, dear friend 💜",
    }
}

/// Subtitle naming the signed-in account.
pub fn signed_in_subtitle(email: &str) -> String {
    format!("Signed in as {email}")
}

/// Gates a protected page. Children render only when the stored session
/// passes the role policy for the current path; otherwise the visitor is
/// told why and sent to the login page.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let decision = guard_decision(
        BrowserSession.load().as_ref(),
        &location.pathname.get_untracked(),
    );

    Effect::new(move |_| {
        if let Some(message) = decision.message() {
            alert(message);
            navigate(paths::LOGIN, Default::default());
        }
    });

    view! { {(decision == GuardOutcome::Allow).then(|| children())} }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            token: "tok".to_string(),
            role,
            email: "someone@flegi.example".to_string(),
        }
    }

    #[test]
    fn no_session_means_not_signed_in() {
        assert_eq!(
            guard_decision(None, "/patient/dashboard"),
            GuardOutcome::NotSignedIn
        );
        assert_eq!(
            guard_decision(None, "/caretaker/logs"),
            GuardOutcome::NotSignedIn
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        assert_eq!(
            guard_decision(Some(&session(Role::Patient)), "/patient/mood"),
            GuardOutcome::Allow
        );
        assert_eq!(
            guard_decision(Some(&session(Role::Caretaker)), "/caretaker/patients"),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn wrong_role_names_the_required_one() {
        assert_eq!(
            guard_decision(Some(&session(Role::Patient)), "/caretaker/logs"),
            GuardOutcome::WrongRole {
                required: Role::Caretaker
            }
        );
        assert_eq!(
            guard_decision(Some(&session(Role::Caretaker)), "/patient/sos"),
            GuardOutcome::WrongRole {
                required: Role::Patient
            }
        );
    }

    #[test]
    fn messages_match_each_outcome() {
        assert_eq!(GuardOutcome::Allow.message(), None);
        assert_eq!(
            GuardOutcome::NotSignedIn.message(),
            Some("Please login to continue.")
        );
        assert_eq!(
            GuardOutcome::WrongRole {
                required: Role::Caretaker
            }
            .message(),
            Some("Access denied. Only caretakers allowed.")
        );
        assert_eq!(
            GuardOutcome::WrongRole {
                required: Role::Patient
            }
            .message(),
            Some("Access denied. Only patients allowed.")
        );
    }

    #[test]
    fn welcome_messages_are_role_specific() {
        assert_eq!(welcome_message(Role::Caretaker), "Welcome back, Caretaker 💙");
        assert_eq!(welcome_message(Role::Patient), "Welcome, dear friend 💜");
    }

    #[test]
    fn subtitle_names_the_account() {
        assert_eq!(
            signed_in_subtitle("pat@flegi.example"),
            "Signed in as pat@flegi.example"
        );
    }
}
