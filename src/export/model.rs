// src/export/model.rs

use crate::models::Appointment;
use serde::Serialize;

/// Flat record for CSV / JSON export of appointments.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AppointmentExport {
    pub id: String,
    pub date: String,
    pub time: String,
    pub end: String,
    pub duration: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub client_id: String,
    pub client_name: String,
    pub phone: String,
    pub device: String,
    pub service: String,
    pub notes: String,
    pub confirmation_sent: bool,
    pub reminder_24h_sent: bool,
    pub reminder_2h_sent: bool,
}

impl From<&Appointment> for AppointmentExport {
    fn from(a: &Appointment) -> Self {
        Self {
            id: a.id.clone(),
            date: a.date_str(),
            time: a.time_str(),
            end: a.end_time_str(),
            duration: a.duration,
            kind: a.kind.label().to_string(),
            status: a.status.label().to_string(),
            client_id: a.client_id.clone(),
            client_name: a.client_name.clone(),
            phone: a.phone.clone(),
            device: a.device.clone(),
            service: a.service.clone(),
            notes: a.notes.clone().unwrap_or_default(),
            confirmation_sent: a.notifications_sent.confirmation,
            reminder_24h_sent: a.notifications_sent.reminder_24h,
            reminder_2h_sent: a.notifications_sent.reminder_2h,
        }
    }
}
