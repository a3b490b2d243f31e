use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::open_store;
use crate::errors::{AppError, AppResult};
use crate::models::{Appointment, AppointmentStatus};
use crate::ui::messages::{header, info};
use crate::ui::status_style::colorize_status;
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, status } = cmd {
        let status_filter = match status {
            Some(s) => Some(
                AppointmentStatus::from_label(s)
                    .ok_or_else(|| AppError::Validation(format!("unknown status '{s}'")))?,
            ),
            None => None,
        };

        let (store, _) = open_store(cfg)?;
        let bounds = resolve_period(period.as_deref())?;

        let dates: Vec<NaiveDate> = store
            .dates()
            .filter(|d| bounds.is_none_or(|(from, to)| *d >= from && *d <= to))
            .collect();

        let mut shown = 0;
        for d in dates {
            let rows: Vec<&Appointment> = store
                .by_date(d)
                .filter(|a| status_filter.is_none_or(|s| a.status == s))
                .collect();

            if rows.is_empty() {
                continue;
            }

            shown += rows.len();
            print_date(d, &rows, cfg);
        }

        if shown == 0 {
            info("No appointments for the selected period.");
        }
    }
    Ok(())
}

/// `None` means no date filtering (`all`).
fn resolve_period(period: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => date::range_bounds(p).map(Some).map_err(AppError::InvalidDate),
        None => date::current_month_bounds()
            .map(Some)
            .map_err(AppError::InvalidDate),
    }
}

fn print_date(d: NaiveDate, rows: &[&Appointment], cfg: &Config) {
    header(d);

    let mut table = Table::new(vec![
        Column::new("TIME", 5),
        Column::new("LENGTH", 6),
        Column::new("ID", 8),
        Column::new("STATUS", 10),
        Column::new("CLIENT", 16),
        Column::new("PHONE", 16),
        Column::new("SERVICE", 20),
    ])
    .with_separator(&cfg.separator_char);

    for a in rows {
        table.add_row(vec![
            a.time_str(),
            mins2readable(a.duration),
            a.id.clone(),
            colorize_status(a.status),
            colorize_optional(&a.client_name),
            colorize_optional(&a.phone),
            a.service.clone(),
        ]);
    }

    println!("{}", table.render());
}
