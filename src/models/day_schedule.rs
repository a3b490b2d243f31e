use super::appointment::Appointment;
use chrono::NaiveDate;
use serde::Serialize;

/// Per-status counters for one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub completed: usize,
    pub no_show: usize,
    pub cancelled: usize,
}

/// An appointment placed on the vertical grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedBlock {
    pub top: f64,
    pub height: f64,
    /// True when the block shares time with another non-cancelled booking.
    pub conflict: bool,
    pub appointment: Appointment,
}

impl PositionedBlock {
    pub fn id(&self) -> &str {
        &self.appointment.id
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Hour label drawn on the left gutter of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourMark {
    pub hour: u32,
    pub offset: f64,
}

/// Immutable snapshot of one day of the agenda, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub total_height: f64,
    pub hour_marks: Vec<HourMark>,
    pub blocks: Vec<PositionedBlock>,
    pub out_of_window: Vec<Appointment>,
    pub overlaps: Vec<(String, String)>,
    pub stats: DayStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub now_marker_offset: Option<f64>,
}

impl DaySchedule {
    pub fn block(&self, id: &str) -> Option<&PositionedBlock> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    pub fn has_conflicts(&self) -> bool {
        !self.overlaps.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.out_of_window.is_empty()
    }
}
