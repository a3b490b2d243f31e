use crate::cli::commands::resolve_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Slots { date, duration } = cmd {
        let d = resolve_date(date)?;
        let minutes = duration.unwrap_or(cfg.default_booking_minutes);

        let (store, _) = open_store(cfg)?;
        let free = store.free_slots(d, minutes)?;

        header(format!("Free slots on {d} for {}", mins2readable(minutes)));

        if free.is_empty() {
            info("No free slots.");
            return Ok(());
        }

        let line = free
            .iter()
            .map(|t| t.format("%H:%M").to_string())
            .collect::<Vec<_>>()
            .join("  ");
        println!("{line}");
    }
    Ok(())
}
