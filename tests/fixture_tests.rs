mod common;
use common::{SMALL_AGENDA, d, scratch, shop_store, write_fixture};
use rturnos::config::Config;
use rturnos::data::fixture::{SAMPLE_FIXTURE, parse_fixture, populate, read_fixture};
use rturnos::data::open_store;
use rturnos::errors::AppError;
use rturnos::models::{AppointmentStatus, AppointmentType};
use std::path::Path;

#[test]
fn test_parse_small_agenda() {
    let records = parse_fixture(SMALL_AGENDA).unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].kind, AppointmentType::Repair);
    assert_eq!(records[0].status, Some(AppointmentStatus::Confirmed));
    assert_eq!(records[1].status, None);
    assert_eq!(records[3].kind, AppointmentType::Installation);
}

#[test]
fn test_sample_fixture_loads_cleanly() {
    let mut store = shop_store();
    let report = populate(&mut store, parse_fixture(SAMPLE_FIXTURE).unwrap());

    assert!(report.is_clean(), "{:?}", report.rejected);
    assert_eq!(store.len(), 8);

    let s = store.stats_for(d("2025-12-04"));
    assert_eq!((s.total, s.confirmed, s.pending, s.completed, s.cancelled), (5, 1, 2, 1, 1));
    assert_eq!(store.overlaps_of(d("2025-12-04")).len(), 1);
    assert!(store.get("apt-001").unwrap().notifications_sent.reminder_24h);
}

#[test]
fn test_invalid_records_are_collected() {
    let yaml = r#"
- id: ok
  date: 2025-12-04
  time: "10:00"
  duration: 30
  type: Entrega
  device: iPhone
  service: Retiro
- id: ok
  date: 2025-12-04
  time: "11:00"
  duration: 30
  type: Entrega
  device: iPhone
  service: Retiro
- id: too-late
  date: 2025-12-04
  time: "18:45"
  duration: 30
  type: Reparación
  device: Moto G
  service: Pantalla
"#;
    let mut store = shop_store();
    let report = populate(&mut store, parse_fixture(yaml).unwrap());

    assert_eq!(report.loaded, vec!["ok".to_string()]);
    assert_eq!(report.rejected.len(), 2);
    assert!(matches!(report.rejected[0].1, AppError::DuplicateId(_)));
    assert!(matches!(report.rejected[1].1, AppError::Validation(_)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_malformed_time_is_a_parse_error() {
    let yaml = r#"
- id: x
  date: 2025-12-04
  time: "10:00:30"
  duration: 30
  type: Entrega
"#;
    assert!(matches!(parse_fixture(yaml), Err(AppError::Yaml(_))));
}

#[test]
fn test_open_store_uses_config() {
    let dir = scratch();
    let path = write_fixture(dir.path(), "agenda.yaml", SMALL_AGENDA);

    let cfg = Config {
        appointments_file: path,
        start_hour: 10,
        ..Config::default()
    };

    let (store, report) = open_store(&cfg).unwrap();

    assert_eq!(store.grid().start_hour(), 10);
    assert_eq!(report.loaded.len(), 4);
    assert_eq!(store.by_date(d("2025-12-04")).count(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = scratch();
    let missing = dir.path().join("nope.yaml");
    assert!(matches!(read_fixture(Path::new(&missing)), Err(AppError::Io(_))));
}

#[test]
fn test_config_rules_from_yaml() {
    let cfg: Config = serde_yaml::from_str(
        r#"
appointments_file: /tmp/agenda.yaml
slot_minutes: 30
lunch_block: "13:00-14:00"
open_days: [Lun, Mar, Mié, Jue, Vie]
"#,
    )
    .unwrap();

    let rules = cfg.rules().unwrap();
    assert_eq!(rules.slot_minutes, 30);
    assert!(rules.lunch_block.is_some());
    assert_eq!(rules.open_days.len(), 5);
    assert_eq!(cfg.start_hour, 9);
    assert_eq!(cfg.end_hour, 19);

    let bad = Config {
        lunch_block: "14:00-13:00".into(),
        ..Config::default()
    };
    assert!(matches!(bad.rules(), Err(AppError::Config(_))));

    let bad_grid = Config {
        start_hour: 20,
        ..Config::default()
    };
    assert!(matches!(bad_grid.grid(), Err(AppError::Config(_))));
}
