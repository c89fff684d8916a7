//! Page permissions.
//!
//! One table maps protected route suffixes to the roles allowed on them;
//! [`evaluate`] is the only code that reads it. Paths not listed are open
//! to any signed-in user. Suffix matching is case-insensitive so casing
//! quirks in a pasted URL cannot widen or deny access.

use crate::app_lib::session::Role;

/// One protected page and who may view it.
struct RoutePermission {
    suffix: &'static str,
    allowed: &'static [Role],
}

const PATIENT: &[Role] = &[Role::Patient];
const CARETAKER: &[Role] = &[Role::Caretaker];

const ROUTE_PERMISSIONS: &[RoutePermission] = &[
    RoutePermission { suffix: "/patient/dashboard", allowed: PATIENT },
    RoutePermission { suffix: "/patient/mood", allowed: PATIENT },
    RoutePermission { suffix: "/patient/reminders", allowed: PATIENT },
    RoutePermission { suffix: "/patient/sos", allowed: PATIENT },
    RoutePermission { suffix: "/caretaker/dashboard", allowed: CARETAKER },
    RoutePermission { suffix: "/caretaker/reminders", allowed: CARETAKER },
    RoutePermission { suffix: "/caretaker/logs", allowed: CARETAKER },
    RoutePermission { suffix: "/caretaker/patients", allowed: CARETAKER },
];

/// Outcome of checking a path against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// The page is reserved for `allowed` roles and the caller is not one
    /// of them.
    Denied { allowed: &'static [Role] },
}

/// Evaluates the permission table for a signed-in role on a page path.
pub fn evaluate(path: &str, role: Role) -> Access {
    let path = path.to_lowercase();
    for entry in ROUTE_PERMISSIONS {
        if path.ends_with(entry.suffix) {
            return if entry.allowed.contains(&role) {
                Access::Granted
            } else {
                Access::Denied {
                    allowed: entry.allowed,
                }
            };
        }
    }
    Access::Granted
}
