pub mod check;
pub mod config;
pub mod day;
pub mod export;
pub mod init;
pub mod list;
pub mod slots;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Resolves a date argument: `YYYY-MM-DD` or `today`.
pub(crate) fn resolve_date(arg: &str) -> AppResult<NaiveDate> {
    if arg.eq_ignore_ascii_case("today") {
        return Ok(date::today());
    }
    date::parse_date(arg).ok_or_else(|| AppError::InvalidDate(arg.to_string()))
}
