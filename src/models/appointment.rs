use super::{
    appointment_type::AppointmentType, notifications::NotificationsSent,
    status::AppointmentStatus,
};
use crate::utils::time::{hhmm, minutes_of_day};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A booked visit as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub phone: String,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(with = "hhmm")]
    pub time: NaiveTime, // "HH:MM"
    pub duration: u32,   // minutes
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub device: String,
    pub service: String,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        default,
        rename = "googleCalendarId",
        skip_serializing_if = "Option::is_none"
    )]
    pub calendar_id: Option<String>,
    #[serde(default)]
    pub notifications_sent: NotificationsSent,
}

impl Appointment {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Minutes since midnight at which the appointment starts.
    pub fn start_minutes(&self) -> u32 {
        minutes_of_day(self.time)
    }

    /// Minutes since midnight at which the appointment ends (exclusive).
    pub fn end_minutes(&self) -> u32 {
        self.start_minutes().saturating_add(self.duration)
    }

    /// Half-open `[start, end)` interval in minutes of day.
    pub fn interval(&self) -> Range<u32> {
        self.start_minutes()..self.end_minutes()
    }

    pub fn end_time_str(&self) -> String {
        let end = self.end_minutes();
        format!("{:02}:{:02}", end / 60, end % 60)
    }

    pub fn overlaps(&self, other: &Appointment) -> bool {
        self.date == other.date
            && self.status.occupies_slot()
            && other.status.occupies_slot()
            && intervals_intersect(&self.interval(), &other.interval())
    }
}

pub(crate) fn intervals_intersect(a: &Range<u32>, b: &Range<u32>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Input record for `AppointmentStore::add`.
///
/// `status` defaults to `Pendiente` when omitted; notification flags start
/// cleared unless the record says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub id: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub phone: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, rename = "googleCalendarId")]
    pub calendar_id: Option<String>,
    #[serde(default)]
    pub notifications_sent: NotificationsSent,
}

impl NewAppointment {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        duration: u32,
        kind: AppointmentType,
    ) -> Self {
        Self {
            id: id.into(),
            client_id: String::new(),
            client_name: String::new(),
            phone: String::new(),
            date,
            time,
            duration,
            kind,
            device: String::new(),
            service: String::new(),
            status: None,
            notes: None,
            calendar_id: None,
            notifications_sent: NotificationsSent::default(),
        }
    }

    pub fn with_client(
        mut self,
        client_id: impl Into<String>,
        client_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        self.client_id = client_id.into();
        self.client_name = client_name.into();
        self.phone = phone.into();
        self
    }

    pub fn with_device(mut self, device: impl Into<String>, service: impl Into<String>) -> Self {
        self.device = device.into();
        self.service = service.into();
        self
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub(crate) fn into_appointment(self) -> Appointment {
        Appointment {
            id: self.id,
            client_id: self.client_id,
            client_name: self.client_name,
            phone: self.phone,
            date: self.date,
            time: self.time,
            duration: self.duration,
            kind: self.kind,
            device: self.device,
            service: self.service,
            status: self.status.unwrap_or_default(),
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            calendar_id: self.calendar_id,
            notifications_sent: self.notifications_sent,
        }
    }
}
