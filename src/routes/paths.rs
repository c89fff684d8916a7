//! Route paths shared by navigation, redirects, and the router table.

use crate::app_lib::session::Role;

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";

pub const PATIENT_DASHBOARD: &str = "/patient/dashboard";
pub const PATIENT_MOOD: &str = "/patient/mood";
pub const PATIENT_REMINDERS: &str = "/patient/reminders";
pub const PATIENT_SOS: &str = "/patient/sos";

pub const CARETAKER_DASHBOARD: &str = "/caretaker/dashboard";
pub const CARETAKER_REMINDERS: &str = "/caretaker/reminders";
pub const CARETAKER_LOGS: &str = "/caretaker/logs";
pub const CARETAKER_PATIENTS: &str = "/caretaker/patients";

/// Landing page for a role right after login.
pub fn dashboard(role: Role) -> &'static str {
    match role {
        Role::Patient => PATIENT_DASHBOARD,
        Role::Caretaker => CARETAKER_DASHBOARD,
    }
}

/// Header links for a signed-in role, as label and target pairs.
pub fn nav_links(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Patient => &[
            ("Dashboard", PATIENT_DASHBOARD),
            ("Reminders", PATIENT_REMINDERS),
            ("Mood", PATIENT_MOOD),
            ("SOS", PATIENT_SOS),
        ],
        Role::Caretaker => &[
            ("Dashboard", CARETAKER_DASHBOARD),
            ("Reminders", CARETAKER_REMINDERS),
            ("Logs", CARETAKER_LOGS),
            ("Patients", CARETAKER_PATIENTS),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_targets_follow_the_role() {
        assert_eq!(dashboard(Role::Patient), "/patient/dashboard");
        assert_eq!(dashboard(Role::Caretaker), "/caretaker/dashboard");
    }

    #[test]
    fn nav_links_stay_inside_the_role_section() {
        for (_, href) in nav_links(Role::Patient) {
            assert!(href.starts_with("/patient/"));
        }
        for (_, href) in nav_links(Role::Caretaker) {
            assert!(href.starts_with("/caretaker/"));
        }
    }
}
