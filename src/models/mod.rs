pub mod record;
pub mod report;
pub mod status;
pub mod time_of_day;

pub use record::AttendanceRecord;
pub use report::{Report, ReportRow};
pub use status::{ArrivalStatus, DepartureStatus};
pub use time_of_day::TimeOfDay;
