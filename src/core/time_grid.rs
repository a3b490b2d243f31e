//! Conversion between clock time and vertical layout coordinates.
//!
//! The grid covers the half-open window `[start_hour:00, end_hour:00)`.
//! Offsets are measured in pixels from the top of the grid.

use crate::errors::{AppError, AppResult};
use crate::models::HourMark;
use crate::utils::time::minutes_of_day;
use chrono::NaiveTime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start_hour: u32,
    end_hour: u32,
    pixels_per_hour: f64,
}

impl TimeGrid {
    pub fn new(start_hour: u32, end_hour: u32, pixels_per_hour: f64) -> AppResult<Self> {
        if start_hour >= end_hour {
            return Err(AppError::Config(format!(
                "start hour ({start_hour}) must be before end hour ({end_hour})"
            )));
        }
        if end_hour > 24 {
            return Err(AppError::Config(format!(
                "end hour ({end_hour}) must not exceed 24"
            )));
        }
        if !pixels_per_hour.is_finite() || pixels_per_hour <= 0.0 {
            return Err(AppError::Config(format!(
                "pixels per hour must be positive, got {pixels_per_hour}"
            )));
        }

        Ok(Self {
            start_hour,
            end_hour,
            pixels_per_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn pixels_per_hour(&self) -> f64 {
        self.pixels_per_hour
    }

    pub fn pixels_per_minute(&self) -> f64 {
        self.pixels_per_hour / 60.0
    }

    pub fn window_start_minutes(&self) -> u32 {
        self.start_hour * 60
    }

    pub fn window_end_minutes(&self) -> u32 {
        self.end_hour * 60
    }

    pub fn window_label(&self) -> String {
        format!("{:02}:00-{:02}:00", self.start_hour, self.end_hour)
    }

    /// True when `time` lies in `[start, end)`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let m = minutes_of_day(time);
        m >= self.window_start_minutes() && m < self.window_end_minutes()
    }

    /// True when a booking starting at `time` and lasting `duration` minutes
    /// ends no later than the window end.
    pub fn fits(&self, time: NaiveTime, duration: u32) -> bool {
        self.contains(time)
            && minutes_of_day(time)
                .checked_add(duration)
                .is_some_and(|end| end <= self.window_end_minutes())
    }

    pub fn offset_of(&self, time: NaiveTime) -> AppResult<f64> {
        if !self.contains(time) {
            return Err(AppError::OutOfRange {
                time: time.format("%H:%M").to_string(),
                window: self.window_label(),
            });
        }
        let since_start = minutes_of_day(time) - self.window_start_minutes();
        Ok(since_start as f64 * self.pixels_per_minute())
    }

    pub fn height_of(&self, duration_minutes: i64) -> AppResult<f64> {
        if duration_minutes <= 0 {
            return Err(AppError::InvalidDuration(duration_minutes));
        }
        Ok(duration_minutes as f64 * self.pixels_per_minute())
    }

    pub fn total_height(&self) -> f64 {
        (self.end_hour - self.start_hour) as f64 * self.pixels_per_hour
    }

    /// One mark per hour line, `start_hour..=end_hour`; the last one sits at
    /// `total_height()`.
    pub fn hour_marks(&self) -> Vec<HourMark> {
        (self.start_hour..=self.end_hour)
            .map(|hour| HourMark {
                hour,
                offset: (hour - self.start_hour) as f64 * self.pixels_per_hour,
            })
            .collect()
    }
}

impl Default for TimeGrid {
    /// The agenda page layout: 09:00-19:00 at 120 px per hour.
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 19,
            pixels_per_hour: 120.0,
        }
    }
}
