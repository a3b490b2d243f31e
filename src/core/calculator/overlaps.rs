//! Detection of double bookings within a single day.

use crate::models::Appointment;
use crate::models::appointment::intervals_intersect;
use std::collections::BTreeSet;

/// Every pair of slot-occupying appointments whose `[time, time+duration)`
/// intervals intersect.
///
/// `day` must be ordered by start time (as `AppointmentStore::by_date`
/// yields it). Each pair is `(earlier, later)` in that order.
pub fn find_overlaps<'a, I>(day: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let active: Vec<&Appointment> = day
        .into_iter()
        .filter(|a| a.status.occupies_slot())
        .collect();

    let mut pairs = Vec::new();

    for (i, a) in active.iter().enumerate() {
        for b in &active[i + 1..] {
            // sorted by start: nothing further down can reach back into `a`
            if b.start_minutes() >= a.end_minutes() {
                break;
            }
            if intervals_intersect(&a.interval(), &b.interval()) {
                pairs.push((a.id.clone(), b.id.clone()));
            }
        }
    }

    pairs
}

/// Ids appearing in at least one overlapping pair.
pub fn conflicting_ids(pairs: &[(String, String)]) -> BTreeSet<&str> {
    pairs
        .iter()
        .flat_map(|(a, b)| [a.as_str(), b.as_str()])
        .collect()
}
