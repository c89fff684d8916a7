//! Authentication: the login and registration flows, the persisted
//! session, and the role-based page guard.
//!
//! Login exchanges credentials for a bearer token and stores it; every
//! later API call picks the token up from storage. The guard re-checks
//! storage on each protected page load, so an expired or cleared session
//! bounces to login no matter how the page was reached.

pub mod client;
pub mod guards;
pub mod policy;
pub mod state;
pub mod types;

pub use guards::RequireSession;
