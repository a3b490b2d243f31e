//! In-memory appointment collection.
//!
//! The store exclusively owns every `Appointment`. Records are never removed:
//! cancelling is a status change. Mutations (`add`, `transition`,
//! `reschedule`, `record_notification`) take `&mut self`, queries take
//! `&self`, so a multi-threaded host only needs to wrap the store in a
//! `RwLock` to get the single-writer / multiple-reader discipline.

use crate::core::calculator::{overlaps, slots, stats};
use crate::core::rules::BookingRules;
use crate::core::time_grid::TimeGrid;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Appointment, AppointmentStatus, DayStats, NewAppointment, Notification, StatusAction,
};
use chrono::{NaiveDate, NaiveTime, Timelike};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AppointmentStore {
    grid: TimeGrid,
    rules: BookingRules,
    /// Insertion order; the position is the stable tie-breaker for equal times.
    appointments: Vec<Appointment>,
    by_id: HashMap<String, usize>,
    /// Per-date positions into `appointments`, kept sorted by (time, position).
    days: BTreeMap<NaiveDate, Vec<usize>>,
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new(TimeGrid::default(), BookingRules::default())
    }
}

impl AppointmentStore {
    pub fn new(grid: TimeGrid, rules: BookingRules) -> Self {
        Self {
            grid,
            rules,
            appointments: Vec::new(),
            by_id: HashMap::new(),
            days: BTreeMap::new(),
        }
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn rules(&self) -> &BookingRules {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// All appointments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    // ------------------------------------------------
    // Mutations
    // ------------------------------------------------

    /// Validates and stores a new appointment, returning its id.
    ///
    /// Status defaults to `Pendiente`. On error the store is left unchanged.
    pub fn add(&mut self, appt: NewAppointment) -> AppResult<String> {
        if appt.id.trim().is_empty() {
            return Err(AppError::Validation("id must not be empty".into()));
        }
        if self.by_id.contains_key(&appt.id) {
            return Err(AppError::DuplicateId(appt.id));
        }
        require_text("device", &appt.device)?;
        require_text("service", &appt.service)?;
        self.check_placement(appt.date, appt.time, appt.duration)?;

        let appointment = appt.into_appointment();
        let id = appointment.id.clone();
        let pos = self.appointments.len();

        debug!(
            id = %id,
            date = %appointment.date,
            time = %appointment.time_str(),
            duration = appointment.duration,
            status = %appointment.status,
            "appointment added"
        );

        self.appointments.push(appointment);
        self.by_id.insert(id.clone(), pos);
        self.index_into_day(pos);

        Ok(id)
    }

    /// Applies a status change and returns the updated record.
    pub fn transition(&mut self, id: &str, action: StatusAction) -> AppResult<&Appointment> {
        let pos = self.position(id)?;
        let appt = &mut self.appointments[pos];

        let next = appt
            .status
            .apply(action)
            .ok_or_else(|| AppError::InvalidTransition {
                id: id.to_string(),
                from: appt.status.label().to_string(),
                action: action.as_str().to_string(),
            })?;

        debug!(id, from = %appt.status, to = %next, "status transition");
        appt.status = next;

        Ok(&self.appointments[pos])
    }

    /// Moves an appointment to a new date/time/duration.
    ///
    /// Validated exactly like `add`; the record is untouched on failure.
    /// Terminal appointments cannot be moved.
    pub fn reschedule(
        &mut self,
        id: &str,
        new_date: NaiveDate,
        new_time: NaiveTime,
        new_duration: u32,
    ) -> AppResult<&Appointment> {
        let pos = self.position(id)?;

        let status = self.appointments[pos].status;
        if status.is_terminal() {
            return Err(AppError::InvalidTransition {
                id: id.to_string(),
                from: status.label().to_string(),
                action: "reschedule".into(),
            });
        }

        self.check_placement(new_date, new_time, new_duration)?;

        self.unindex_from_day(pos);
        {
            let appt = &mut self.appointments[pos];
            debug!(
                id,
                from = %format!("{} {}", appt.date, appt.time_str()),
                to = %format!("{} {}", new_date, new_time.format("%H:%M")),
                duration = new_duration,
                "appointment rescheduled"
            );
            appt.date = new_date;
            appt.time = new_time;
            appt.duration = new_duration;
        }
        self.index_into_day(pos);

        Ok(&self.appointments[pos])
    }

    /// Records that the external notifier sent `kind`.
    /// Returns false when the flag was already set.
    pub fn record_notification(&mut self, id: &str, kind: Notification) -> AppResult<bool> {
        let pos = self.position(id)?;
        let changed = self.appointments[pos].notifications_sent.mark(kind);
        if changed {
            debug!(id, notification = ?kind, "notification recorded");
        }
        Ok(changed)
    }

    // ------------------------------------------------
    // Queries
    // ------------------------------------------------

    pub fn get(&self, id: &str) -> AppResult<&Appointment> {
        self.position(id).map(|pos| &self.appointments[pos])
    }

    /// Appointments on `date`, ascending by time, equal times in insertion
    /// order. Each call yields a fresh iterator over the same sequence.
    pub fn by_date(&self, date: NaiveDate) -> impl Iterator<Item = &Appointment> + Clone + '_ {
        self.days
            .get(&date)
            .map(|positions| positions.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&pos| &self.appointments[pos])
    }

    /// Appointments in `[from, to]`, ordered by date then time.
    pub fn in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Iterator<Item = &Appointment> + '_ {
        self.days
            .range(from..=to)
            .flat_map(move |(_, positions)| positions.iter().map(move |&p| &self.appointments[p]))
    }

    /// Distinct dates holding at least one appointment, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn overlaps_of(&self, date: NaiveDate) -> Vec<(String, String)> {
        overlaps::find_overlaps(self.by_date(date))
    }

    pub fn stats_for(&self, date: NaiveDate) -> DayStats {
        stats::count_by_status(self.by_date(date))
    }

    /// Slot-occupying appointments a booking at `time` for `duration`
    /// minutes would intersect. `exclude` skips one id (the record being
    /// moved). The store never blocks on this; callers decide the policy.
    pub fn conflicts_for(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        duration: u32,
        exclude: Option<&str>,
    ) -> Vec<&Appointment> {
        let start = crate::utils::time::minutes_of_day(time);
        let end = start.saturating_add(duration);

        self.by_date(date)
            .filter(|a| Some(a.id.as_str()) != exclude)
            .filter(|a| a.status.occupies_slot())
            .filter(|a| a.start_minutes() < end && start < a.end_minutes())
            .collect()
    }

    /// Start times a new booking of `duration` minutes could take on `date`.
    pub fn free_slots(&self, date: NaiveDate, duration: u32) -> AppResult<Vec<NaiveTime>> {
        self.rules.check_duration(duration)?;
        if !self.rules.is_open(date) {
            return Ok(Vec::new());
        }
        Ok(slots::free_slots(
            &self.grid,
            &self.rules,
            self.by_date(date),
            duration,
        ))
    }

    pub fn count_with_status(&self, status: AppointmentStatus) -> usize {
        self.appointments
            .iter()
            .filter(|a| a.status == status)
            .count()
    }

    // ------------------------------------------------
    // Internals
    // ------------------------------------------------

    fn position(&self, id: &str) -> AppResult<usize> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    fn check_placement(&self, date: NaiveDate, time: NaiveTime, duration: u32) -> AppResult<()> {
        self.rules.check_duration(duration)?;

        if time.second() != 0 || time.nanosecond() != 0 {
            return Err(AppError::Validation(format!(
                "start time {} has sub-minute precision",
                time.format("%H:%M:%S%.f")
            )));
        }

        if !self.grid.contains(time) {
            return Err(AppError::Validation(format!(
                "start time {} is outside the agenda window {}",
                time.format("%H:%M"),
                self.grid.window_label()
            )));
        }
        if !self.grid.fits(time, duration) {
            return Err(AppError::Validation(format!(
                "{} + {duration} min ends after {:02}:00",
                time.format("%H:%M"),
                self.grid.end_hour()
            )));
        }
        if self.rules.hits_lunch_block(time, duration) {
            return Err(AppError::Validation(format!(
                "{} + {duration} min falls into the lunch block",
                time.format("%H:%M")
            )));
        }

        self.rules.check_day(date)
    }

    fn index_into_day(&mut self, pos: usize) {
        let key = {
            let a = &self.appointments[pos];
            (a.time, pos)
        };
        let date = self.appointments[pos].date;
        let appointments = &self.appointments;
        let slots = self.days.entry(date).or_default();
        let at = slots.partition_point(|&p| (appointments[p].time, p) < key);
        slots.insert(at, pos);
    }

    fn unindex_from_day(&mut self, pos: usize) {
        let date = self.appointments[pos].date;
        if let Some(slots) = self.days.get_mut(&date) {
            slots.retain(|&p| p != pos);
            if slots.is_empty() {
                self.days.remove(&date);
            }
        }
    }
}

fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
