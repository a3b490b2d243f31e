pub mod appointment;
pub mod appointment_type;
pub mod day_schedule;
pub mod notifications;
pub mod status;

pub use appointment::{Appointment, NewAppointment};
pub use appointment_type::AppointmentType;
pub use day_schedule::{DaySchedule, DayStats, HourMark, PositionedBlock};
pub use notifications::{Notification, NotificationsSent};
pub use status::{AppointmentStatus, StatusAction};
