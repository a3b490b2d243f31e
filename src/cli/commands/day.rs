use crate::cli::commands::resolve_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DayScheduleView;
use crate::data::open_store;
use crate::errors::{AppError, AppResult};
use crate::models::{DaySchedule, DayStats};
use crate::ui::messages::{header, info, warning};
use crate::ui::status_style::{badge, colorize_status};
use crate::utils::colors::{RESET, color_for_conflict};
use crate::utils::date::{today, weekday_code};
use crate::utils::formatting::{mins2readable, px, wrap_notes};
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_time;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date, now, json } = cmd {
        let d = resolve_date(date)?;
        let now = resolve_now(d, now.as_deref())?;

        let (store, report) = open_store(cfg)?;
        if !report.is_clean() {
            warning(format!(
                "{} record(s) rejected while loading; run `rturnos check` for details",
                report.rejected.len()
            ));
        }

        let schedule = DayScheduleView::new(&store).build(d, now);

        if *json {
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        } else {
            print_day(&schedule, cfg);
        }
    }
    Ok(())
}

/// `--now` wins; otherwise the wall clock is used when viewing today.
fn resolve_now(date: NaiveDate, arg: Option<&str>) -> AppResult<Option<NaiveDateTime>> {
    match arg {
        Some(raw) => {
            if let Some(t) = parse_time(raw) {
                return Ok(Some(date.and_time(t)));
            }
            NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M")
                .map(Some)
                .map_err(|_| AppError::InvalidTime(raw.to_string()))
        }
        None if date == today() => Ok(Some(Local::now().naive_local())),
        None => Ok(None),
    }
}

fn print_day(schedule: &DaySchedule, cfg: &Config) {
    header(format!(
        "{} ({}) · {:02}:00-{:02}:00 · {}",
        schedule.date,
        weekday_code(schedule.date.weekday()),
        cfg.start_hour,
        cfg.end_hour,
        px(schedule.total_height)
    ));

    if schedule.is_empty() {
        info("No appointments for this day.");
        print_stats(&schedule.stats);
        return;
    }

    let mut table = Table::new(vec![
        Column::new("TOP", 7),
        Column::new("HEIGHT", 7),
        Column::new("TIME", 11),
        Column::new("ID", 8),
        Column::new("STATUS", 10),
        Column::new("CLIENT", 16),
        Column::new("TYPE", 11),
        Column::new("DEVICE", 14),
    ])
    .with_separator(&cfg.separator_char);

    for block in &schedule.blocks {
        let a = &block.appointment;
        let mark = color_for_conflict(block.conflict);
        table.add_row(vec![
            px(block.top),
            px(block.height),
            format!("{mark}{}-{}{RESET}", a.time_str(), a.end_time_str()),
            a.id.clone(),
            format!("{} {}", badge(a.status), colorize_status(a.status)),
            a.client_name.clone(),
            a.kind.label().to_string(),
            a.device.clone(),
        ]);
    }

    print!("{}", table.render());

    for block in schedule.blocks.iter() {
        if let Some(notes) = &block.appointment.notes {
            println!(
                "📝 {} ({}): \n{}",
                block.appointment.id,
                mins2readable(block.appointment.duration),
                wrap_notes(notes, 60, "   ")
            );
        }
    }

    if let Some(offset) = schedule.now_marker_offset {
        println!("\n🔴 Now marker at {}", px(offset));
    }

    for a in &schedule.out_of_window {
        warning(format!(
            "{} at {} is outside the agenda window",
            a.id,
            a.time_str()
        ));
    }

    for (a, b) in &schedule.overlaps {
        warning(format!("Overlap: {a} ↔ {b}"));
    }

    print_stats(&schedule.stats);
}

fn print_stats(s: &DayStats) {
    println!(
        "\nTotal: {} | Confirmados: {} | Pendientes: {} | Completados: {} | NoShow: {} | Cancelados: {}",
        s.total, s.confirmed, s.pending, s.completed, s.no_show, s.cancelled
    );
}
