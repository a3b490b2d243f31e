#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rturnos::core::{AppointmentStore, BookingRules, TimeGrid};
use rturnos::models::{AppointmentType, NewAppointment};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary under test, isolated from the user's real configuration.
pub fn rt(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rturnos");
    cmd.env("RTURNOS_HOME", home).env_remove("RUST_LOG");
    cmd
}

pub fn scratch() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Write an appointments file inside `dir` and return its path.
pub fn write_fixture(dir: &Path, name: &str, yaml: &str) -> String {
    let path: PathBuf = dir.join(name);
    fs::write(&path, yaml).expect("write fixture");
    path.to_string_lossy().to_string()
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

/// A valid record: only the scheduling fields vary between tests.
pub fn appt(id: &str, date: &str, time: &str, duration: u32) -> NewAppointment {
    NewAppointment::new(id, d(date), t(time), duration, AppointmentType::Repair)
        .with_client("cli-1", "Juan Pérez", "+54 11 5555-0101")
        .with_device("iPhone 13", "Cambio de pantalla")
}

/// The agenda page grid: 09:00-19:00, 120 px/h, 15 min slots.
pub fn shop_store() -> AppointmentStore {
    AppointmentStore::new(
        TimeGrid::new(9, 19, 120.0).expect("grid"),
        BookingRules::new(15).expect("rules"),
    )
}

pub const SMALL_AGENDA: &str = r#"
- id: a1
  clientName: Juan Pérez
  phone: "+54 11 5555-0101"
  date: 2025-12-04
  time: "10:00"
  duration: 60
  type: Reparación
  device: iPhone 13
  service: Cambio de pantalla
  status: Confirmado
- id: a2
  clientName: María González
  date: 2025-12-04
  time: "10:30"
  duration: 30
  type: Diagnóstico
  device: Samsung S21
  service: No enciende
- id: a3
  clientName: Carlos Rodríguez
  date: 2025-12-04
  time: "12:15"
  duration: 30
  type: Entrega
  device: MacBook Air
  service: Retiro
- id: a4
  clientName: Lucía Fernández
  date: 2025-12-05
  time: "15:00"
  duration: 90
  type: Colocación
  device: iPad Pro
  service: Vidrio templado
  status: Completado
"#;
