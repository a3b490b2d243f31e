use crate::models::{Appointment, AppointmentStatus, DayStats};

pub fn count_by_status<'a, I>(appointments: I) -> DayStats
where
    I: IntoIterator<Item = &'a Appointment>,
{
    appointments
        .into_iter()
        .fold(DayStats::default(), |mut s, a| {
            s.total += 1;
            match a.status {
                AppointmentStatus::Confirmed => s.confirmed += 1,
                AppointmentStatus::Pending => s.pending += 1,
                AppointmentStatus::Completed => s.completed += 1,
                AppointmentStatus::NoShow => s.no_show += 1,
                AppointmentStatus::Cancelled => s.cancelled += 1,
            }
            s
        })
}
