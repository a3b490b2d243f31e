use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// First and last day covered by a period string.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM`, `YYYY`.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    if let Some(first) = parse_date(&format!("{p}-01")) {
        let last = last_day_of_month(first.year(), first.month())
            .ok_or_else(|| format!("Invalid period: {p}"))?;
        return Ok((first, last));
    }

    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {p}"))
}

/// Resolves `a:b` ranges (each side any period form) or a single period.
pub fn range_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    match p.split_once(':') {
        Some((a, b)) => {
            let (start, _) = period_bounds(a)?;
            let (_, end) = period_bounds(b)?;
            if start > end {
                return Err(format!("Invalid range: {p} (start after end)"));
            }
            Ok((start, end))
        }
        None => period_bounds(p),
    }
}

pub fn current_month_bounds() -> Result<(NaiveDate, NaiveDate), String> {
    let t = today();
    period_bounds(&format!("{:04}-{:02}", t.year(), t.month()))
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// Short Spanish weekday code used by the settings page ("Lun".."Dom").
pub fn weekday_code(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "Lun",
        Weekday::Tue => "Mar",
        Weekday::Wed => "Mié",
        Weekday::Thu => "Jue",
        Weekday::Fri => "Vie",
        Weekday::Sat => "Sáb",
        Weekday::Sun => "Dom",
    }
}

/// Accepts Spanish codes (with or without accent) or English three-letter names.
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "lun" | "mon" => Some(Weekday::Mon),
        "mar" | "tue" => Some(Weekday::Tue),
        "mié" | "mie" | "wed" => Some(Weekday::Wed),
        "jue" | "thu" => Some(Weekday::Thu),
        "vie" | "fri" => Some(Weekday::Fri),
        "sáb" | "sab" | "sat" => Some(Weekday::Sat),
        "dom" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
