//! Free start times for a new booking, as offered by the "Hora" picker of
//! the new-appointment form.

use crate::core::rules::BookingRules;
use crate::core::time_grid::TimeGrid;
use crate::models::Appointment;
use chrono::NaiveTime;

/// Slot-aligned start times inside the grid window at which a booking of
/// `duration` minutes would fit without touching the lunch block or any
/// slot-occupying appointment in `day`.
pub fn free_slots<'a, I>(
    grid: &TimeGrid,
    rules: &BookingRules,
    day: I,
    duration: u32,
) -> Vec<NaiveTime>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let busy: Vec<(u32, u32)> = day
        .into_iter()
        .filter(|a| a.status.occupies_slot())
        .map(|a| (a.start_minutes(), a.end_minutes()))
        .collect();

    let window = grid.window_end_minutes() - grid.window_start_minutes();
    if duration > window {
        return Vec::new();
    }

    let step = rules.slot_minutes.max(1);
    let last_start = grid.window_end_minutes() - duration;

    (grid.window_start_minutes()..=last_start)
        .step_by(step as usize)
        .filter(|&start| {
            let end = start + duration;
            busy.iter().all(|&(bs, be)| end <= bs || be <= start)
        })
        .filter_map(|start| NaiveTime::from_hms_opt(start / 60, start % 60, 0))
        .filter(|&t| !rules.hits_lunch_block(t, duration))
        .collect()
}
