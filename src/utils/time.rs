//! Time utilities: strict HH:MM parsing, minutes-of-day arithmetic, formatting.

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

fn hhmm_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").expect("static regex"))
}

/// Parses `H:MM` / `HH:MM` (24h). Seconds are not accepted.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let caps = hhmm_regex().captures(t.trim())?;
    let h: u32 = caps[1].parse().ok()?;
    let m: u32 = caps[2].parse().ok()?;
    NaiveTime::from_hms_opt(h, m, 0)
}

pub fn minutes_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Parses a `HH:MM-HH:MM` window (e.g. a lunch block).
pub fn parse_time_window(s: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (a, b) = s.split_once('-')?;
    let start = parse_time(a)?;
    let end = parse_time(b)?;
    (start < end).then_some((start, end))
}

/// serde adapter storing a NaiveTime as "HH:MM".
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid time '{raw}', expected HH:MM")))
    }
}
