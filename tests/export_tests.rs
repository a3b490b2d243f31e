mod common;
use common::{SMALL_AGENDA, rt, scratch, write_fixture};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_range() {
    let home = scratch();
    let data = write_fixture(home.path(), "agenda.yaml", SMALL_AGENDA);
    let out = home.path().join("december.csv");

    rt(home.path())
        .args(["--data", &data, "export", "--format", "csv", "--range", "2025-12-04"])
        .arg("--file")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Appointments (csv) exported to"));

    let csv = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 4, "header + 3 rows:\n{csv}");
    assert!(lines[0].contains("id"));
    assert!(lines[1].starts_with("a1,"));
    assert!(lines[3].starts_with("a3,"));
    assert!(!csv.contains("a4"));
}

#[test]
fn test_export_json_all() {
    let home = scratch();
    let data = write_fixture(home.path(), "agenda.yaml", SMALL_AGENDA);
    let out = home.path().join("all.json");

    rt(home.path())
        .args(["--data", &data, "export", "--format", "json", "--range", "all"])
        .arg("--file")
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let rows = json.as_array().unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3]["id"], "a4");
    assert_eq!(rows[3]["status"], "Completado");
}

#[test]
fn test_export_day_snapshot() {
    let home = scratch();
    let data = write_fixture(home.path(), "agenda.yaml", SMALL_AGENDA);
    let out = home.path().join("day.json");

    rt(home.path())
        .args(["--data", &data, "export", "--format", "json", "--day", "2025-12-04"])
        .arg("--file")
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["blocks"].as_array().unwrap().len(), 3);
    assert_eq!(json["blocks"][2]["top"], 390.0);
    assert_eq!(json["overlaps"][0][0], "a1");
}

#[test]
fn test_export_day_requires_json() {
    let home = scratch();
    let data = write_fixture(home.path(), "agenda.yaml", SMALL_AGENDA);
    let out = home.path().join("day.csv");

    rt(home.path())
        .args(["--data", &data, "export", "--format", "csv", "--day", "2025-12-04"])
        .arg("--file")
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("only be exported as json"));

    assert!(!out.exists());
}

#[test]
fn test_export_relative_path_rejected() {
    let home = scratch();
    let data = write_fixture(home.path(), "agenda.yaml", SMALL_AGENDA);

    rt(home.path())
        .args(["--data", &data, "export", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites() {
    let home = scratch();
    let data = write_fixture(home.path(), "agenda.yaml", SMALL_AGENDA);
    let out = home.path().join("existing.csv");
    fs::write(&out, "old content").unwrap();

    rt(home.path())
        .args(["--data", &data, "export", "--range", "2025-12-05", "--force"])
        .arg("--file")
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    assert!(!csv.contains("old content"));
    assert!(csv.contains("a4"));
}

#[test]
fn test_export_existing_file_declined() {
    let home = scratch();
    let data = write_fixture(home.path(), "agenda.yaml", SMALL_AGENDA);
    let out = home.path().join("keep.csv");
    fs::write(&out, "keep me").unwrap();

    rt(home.path())
        .args(["--data", &data, "export"])
        .arg("--file")
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let home = scratch();
    let data = write_fixture(home.path(), "agenda.yaml", SMALL_AGENDA);
    let out = home.path().join("empty.csv");

    rt(home.path())
        .args(["--data", &data, "export", "--range", "2024-01"])
        .arg("--file")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("No appointments found"));

    assert!(!out.exists());
}
