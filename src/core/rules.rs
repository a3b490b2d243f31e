//! Booking rules applied on top of the grid window when validating a record.

use crate::errors::{AppError, AppResult};
use crate::utils::date::weekday_code;
use crate::utils::time::minutes_of_day;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

pub const DEFAULT_SLOT_MINUTES: u32 = 15;
const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRules {
    /// Durations must be a positive multiple of this.
    pub slot_minutes: u32,
    /// No booking may intersect `[start, end)` when set.
    pub lunch_block: Option<(NaiveTime, NaiveTime)>,
    /// Empty means every weekday is open.
    pub open_days: Vec<Weekday>,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            slot_minutes: DEFAULT_SLOT_MINUTES,
            lunch_block: None,
            open_days: Vec::new(),
        }
    }
}

impl BookingRules {
    pub fn new(slot_minutes: u32) -> AppResult<Self> {
        if slot_minutes == 0 || slot_minutes > 24 * 60 {
            return Err(AppError::Config(format!(
                "slot size must be between 1 and 1440 minutes, got {slot_minutes}"
            )));
        }
        Ok(Self {
            slot_minutes,
            ..Self::default()
        })
    }

    pub fn with_lunch_block(mut self, start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::Config(format!(
                "lunch block start {} must be before end {}",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }
        self.lunch_block = Some((start, end));
        Ok(self)
    }

    pub fn with_open_days(mut self, days: Vec<Weekday>) -> Self {
        self.open_days = days;
        self
    }

    pub fn is_open(&self, date: NaiveDate) -> bool {
        self.open_days.is_empty() || self.open_days.contains(&date.weekday())
    }

    pub fn hits_lunch_block(&self, time: NaiveTime, duration: u32) -> bool {
        match self.lunch_block {
            Some((ls, le)) => {
                let start = minutes_of_day(time);
                let end = start.saturating_add(duration);
                start < minutes_of_day(le) && minutes_of_day(ls) < end
            }
            None => false,
        }
    }

    pub fn check_duration(&self, duration: u32) -> AppResult<()> {
        if duration == 0 {
            return Err(AppError::Validation(
                "duration must be greater than zero".into(),
            ));
        }
        if duration > MINUTES_PER_DAY {
            return Err(AppError::Validation(format!(
                "duration {duration} min is longer than a day"
            )));
        }
        if duration % self.slot_minutes != 0 {
            return Err(AppError::Validation(format!(
                "duration {duration} min is not a multiple of the {} min slot",
                self.slot_minutes
            )));
        }
        Ok(())
    }

    pub fn check_day(&self, date: NaiveDate) -> AppResult<()> {
        if self.is_open(date) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "{date} is a closed day ({})",
                weekday_code(date.weekday())
            )))
        }
    }
}
