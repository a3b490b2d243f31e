use crate::cli::commands::resolve_date;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::data::open_store;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        day,
        force,
    } = cmd
    {
        let (store, _) = open_store(cfg)?;

        match day {
            Some(d) => {
                let d = resolve_date(d)?;
                ExportLogic::export_day(&store, d, *format, file, *force)?;
            }
            None => {
                ExportLogic::export_appointments(&store, *format, file, range.as_deref(), *force)?;
            }
        }
    }
    Ok(())
}
