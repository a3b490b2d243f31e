use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - a sample appointments file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    info("Initializing rTurnos…");
    if !cli.test {
        println!("📄 Config file  : {}", Config::config_file().display());
    }
    println!("🗓️  Appointments : {}", cfg.appointments_file);
    println!(
        "🕘 Agenda window: {:02}:00-{:02}:00, {} min slots",
        cfg.start_hour, cfg.end_hour, cfg.slot_minutes
    );

    success("rTurnos initialization completed!");
    Ok(())
}
