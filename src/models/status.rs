use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an appointment.
///
/// `Pendiente` is the initial state. `Cancelado`, `Completado` and `NoShow`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Confirmado")]
    Confirmed,
    #[serde(rename = "Cancelado")]
    Cancelled,
    #[serde(rename = "Completado")]
    Completed,
    #[serde(rename = "NoShow")]
    NoShow,
}

/// A requested status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Confirm,
    Cancel,
    Complete,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 5] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
        AppointmentStatus::NoShow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pendiente",
            AppointmentStatus::Confirmed => "Confirmado",
            AppointmentStatus::Cancelled => "Cancelado",
            AppointmentStatus::Completed => "Completado",
            AppointmentStatus::NoShow => "NoShow",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(s))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Cancelled | AppointmentStatus::Completed | AppointmentStatus::NoShow
        )
    }

    /// Cancelled bookings free their slot: they never overlap anything.
    pub fn occupies_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }

    /// Target status for `action`, or None when the transition is not allowed.
    pub fn apply(&self, action: StatusAction) -> Option<AppointmentStatus> {
        use AppointmentStatus as S;
        use StatusAction as A;

        match (self, action) {
            (S::Pending, A::Confirm) => Some(S::Confirmed),
            (S::Pending | S::Confirmed, A::Cancel) => Some(S::Cancelled),
            (S::Confirmed, A::Complete) => Some(S::Completed),
            (S::Confirmed, A::NoShow) => Some(S::NoShow),
            _ => None,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl StatusAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusAction::Confirm => "confirm",
            StatusAction::Cancel => "cancel",
            StatusAction::Complete => "complete",
            StatusAction::NoShow => "no-show",
        }
    }
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
