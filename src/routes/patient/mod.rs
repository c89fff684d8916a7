//! Pages reserved for patients.

mod dashboard;
mod mood;
mod reminders;
mod sos;

pub use dashboard::PatientDashboardPage;
pub use mood::PatientMoodPage;
pub use reminders::PatientRemindersPage;
pub use sos::PatientSosPage;
