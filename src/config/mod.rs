use crate::core::{BookingRules, TimeGrid};
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_weekday;
use crate::utils::time::parse_time_window;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "RTURNOS_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// YAML fixture holding the appointment records.
    #[serde(default = "default_appointments_file")]
    pub appointments_file: String,
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
    #[serde(default = "default_pixels_per_hour")]
    pub pixels_per_hour: f64,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
    /// Duration proposed for new bookings (the settings page "slot" select).
    #[serde(default = "default_booking_minutes")]
    pub default_booking_minutes: u32,
    /// "HH:MM-HH:MM", empty to disable.
    #[serde(default)]
    pub lunch_block: String,
    /// Weekday codes ("Lun".."Dom"); empty means open every day.
    #[serde(default)]
    pub open_days: Vec<String>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_appointments_file() -> String {
    Config::appointments_file_default()
        .to_string_lossy()
        .to_string()
}
fn default_start_hour() -> u32 {
    9
}
fn default_end_hour() -> u32 {
    19
}
fn default_pixels_per_hour() -> f64 {
    120.0
}
fn default_slot_minutes() -> u32 {
    15
}
fn default_booking_minutes() -> u32 {
    30
}
fn default_log_filter() -> String {
    "warn".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            appointments_file: default_appointments_file(),
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
            pixels_per_hour: default_pixels_per_hour(),
            slot_minutes: default_slot_minutes(),
            default_booking_minutes: default_booking_minutes(),
            lunch_block: String::new(),
            open_days: Vec::new(),
            log_filter: default_log_filter(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Configuration directory: `$RTURNOS_HOME`, else the platform config dir.
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rturnos")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rturnos.conf")
    }

    pub fn appointments_file_default() -> PathBuf {
        Self::config_dir().join("appointments.yaml")
    }

    /// Load the configuration file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Create the config directory, the config file (unless `is_test`) and a
    /// sample appointments file when none exists. Returns the config used.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_path = match custom_data {
            Some(name) => {
                let p = PathBuf::from(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::appointments_file_default(),
        };

        let cfg = Config {
            appointments_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            cfg.save_to(&Self::config_file())?;
        }

        if !data_path.exists() {
            if let Some(parent) = data_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&data_path, crate::data::fixture::SAMPLE_FIXTURE)?;
        }

        Ok(cfg)
    }

    pub fn grid(&self) -> AppResult<TimeGrid> {
        TimeGrid::new(self.start_hour, self.end_hour, self.pixels_per_hour)
    }

    pub fn rules(&self) -> AppResult<BookingRules> {
        let mut rules = BookingRules::new(self.slot_minutes)?;

        let lunch = self.lunch_block.trim();
        if !lunch.is_empty() {
            let (start, end) = parse_time_window(lunch).ok_or_else(|| {
                AppError::Config(format!("invalid lunch_block '{lunch}', expected HH:MM-HH:MM"))
            })?;
            rules = rules.with_lunch_block(start, end)?;
        }

        let days = self
            .open_days
            .iter()
            .map(|code| {
                parse_weekday(code)
                    .ok_or_else(|| AppError::Config(format!("invalid weekday in open_days: '{code}'")))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(rules.with_open_days(days))
    }
}
