//! Pages reserved for caretakers.

mod dashboard;
mod logs;
mod patients;
mod reminders;

pub use dashboard::CaretakerDashboardPage;
pub use logs::CaretakerLogsPage;
pub use patients::CaretakerPatientsPage;
pub use reminders::CaretakerRemindersPage;
