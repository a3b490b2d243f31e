//! Builds the renderable snapshot of one agenda day.

use crate::core::calculator::overlaps::conflicting_ids;
use crate::core::store::AppointmentStore;
use crate::core::time_grid::TimeGrid;
use crate::errors::{AppError, AppResult};
use crate::models::{DaySchedule, PositionedBlock};
use chrono::{NaiveDate, NaiveDateTime};

/// Read-only view combining a grid with a store.
///
/// The grid usually is the store's own, but a caller may lay the day out on
/// a different one (e.g. a narrower, zoomed window); appointments the view
/// grid cannot place end up in `out_of_window`.
pub struct DayScheduleView<'a> {
    grid: TimeGrid,
    store: &'a AppointmentStore,
}

impl<'a> DayScheduleView<'a> {
    pub fn new(store: &'a AppointmentStore) -> Self {
        Self {
            grid: *store.grid(),
            store,
        }
    }

    pub fn with_grid(store: &'a AppointmentStore, grid: TimeGrid) -> Self {
        Self { grid, store }
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn build(&self, date: NaiveDate, now: Option<NaiveDateTime>) -> DaySchedule {
        let overlaps = self.store.overlaps_of(date);
        let conflicts = conflicting_ids(&overlaps);

        let mut blocks = Vec::new();
        let mut out_of_window = Vec::new();

        for appt in self.store.by_date(date) {
            // a block must start and end inside the view window
            if !self.grid.fits(appt.time, appt.duration) {
                out_of_window.push(appt.clone());
                continue;
            }

            let placed = self.grid.offset_of(appt.time).and_then(|top| {
                self.grid
                    .height_of(i64::from(appt.duration))
                    .map(|height| (top, height))
            });

            match placed {
                Ok((top, height)) => blocks.push(PositionedBlock {
                    top,
                    height,
                    conflict: conflicts.contains(appt.id.as_str()),
                    appointment: appt.clone(),
                }),
                Err(_) => out_of_window.push(appt.clone()),
            }
        }

        let now_marker_offset = now
            .filter(|n| n.date() == date)
            .and_then(|n| self.grid.offset_of(n.time()).ok());

        DaySchedule {
            date,
            total_height: self.grid.total_height(),
            hour_marks: self.grid.hour_marks(),
            blocks,
            out_of_window,
            stats: self.store.stats_for(date),
            overlaps,
            now_marker_offset,
        }
    }

    /// Offset of the "now" line when the caller insists on having one.
    ///
    /// Unlike `build`, a `now` on another date or outside the window is an
    /// error here.
    pub fn now_marker(&self, date: NaiveDate, now: NaiveDateTime) -> AppResult<f64> {
        if now.date() != date {
            return Err(AppError::OutOfRange {
                time: now.format("%Y-%m-%d %H:%M").to_string(),
                window: format!("{} {}", date, self.grid.window_label()),
            });
        }
        self.grid.offset_of(now.time())
    }
}
