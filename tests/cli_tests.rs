use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{id_from_add_output, init_db_with_data, rwo, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rwo()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_running_with_position() {
    let db_path = setup_test_db("cli_add_running");

    rwo()
        .args([
            "--db", &db_path, "add", "running", "5.2", "24", "178", "--at", "40.7,-74.0",
        ])
        .assert()
        .success()
        .stdout(contains("Running on"))
        .stdout(contains("recorded (id "))
        .stdout(contains("4.6 min/km"))
        .stdout(contains("178 spm"));
}

#[test]
fn test_add_cycling_accepts_negative_elevation() {
    let db_path = setup_test_db("cli_add_cycling_negative");

    rwo()
        .args([
            "--db", &db_path, "add", "cycling", "25", "95", "-40", "--at", "-33.86,151.2",
        ])
        .assert()
        .success()
        .stdout(contains("Cycling on"))
        .stdout(contains("15.8 km/h"))
        .stdout(contains("-40 m"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("cli_add_invalid");

    rwo()
        .args([
            "--db", &db_path, "add", "running", "0", "24", "178", "--at", "40.7,-74.0",
        ])
        .assert()
        .failure()
        .stderr(contains("Inputs have to be positive numbers!"));

    rwo()
        .args([
            "--db", &db_path, "add", "running", "5", "24", "-1", "--at", "40.7,-74.0",
        ])
        .assert()
        .failure()
        .stderr(contains("Inputs have to be positive numbers!"));

    // nothing was stored
    rwo()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No workouts recorded yet."));
}

#[test]
fn test_add_rejects_invalid_coordinates() {
    let db_path = setup_test_db("cli_add_bad_coords");

    rwo()
        .args([
            "--db", &db_path, "add", "running", "5", "24", "170", "--at", "123,456",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinates"));
}

#[test]
fn test_add_without_any_position_fails() {
    let db_path = setup_test_db("cli_add_no_position");

    rwo()
        .args(["--db", &db_path, "add", "running", "5", "24", "170"])
        .assert()
        .failure()
        .stderr(contains("Could not get your location"));
}

#[test]
fn test_add_uses_current_position_and_renders_marker() {
    let db_path = setup_test_db("cli_add_current_position");

    rwo()
        .args([
            "--db",
            &db_path,
            "--position",
            "51.5,-0.12",
            "add",
            "cycling",
            "12",
            "40",
            "80",
        ])
        .assert()
        .success()
        .stdout(contains("Map centred at 51.5000, -0.1200"))
        .stdout(contains("[cycling-popup]"))
        .stdout(contains("Cycling on"));
}

#[test]
fn test_list_shows_all_workouts() {
    let db_path = setup_test_db("cli_list_all");
    init_db_with_data(&db_path);

    rwo()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Running on"))
        .stdout(contains("Cycling on"))
        .stdout(contains("Total: 2 workout(s)"));
}

#[test]
fn test_list_filter_by_type() {
    let db_path = setup_test_db("cli_list_type");
    init_db_with_data(&db_path);

    rwo()
        .args(["--db", &db_path, "list", "--type", "cycling", "--details"])
        .assert()
        .success()
        .stdout(contains("Cycling on"))
        .stdout(contains("523 m"))
        .stdout(contains("Running on").not())
        .stdout(contains("Total: 1 workout(s)"));
}

#[test]
fn test_show_known_and_unknown_id() {
    let db_path = setup_test_db("cli_show");

    let out = rwo()
        .args([
            "--db", &db_path, "add", "running", "5.2", "24", "178", "--at", "40.7,-74.0",
        ])
        .output()
        .expect("run add");
    assert!(out.status.success());
    let id = id_from_add_output(&out.stdout);

    rwo()
        .args(["--db", &db_path, "--position", "41.9,12.5", "show", &id])
        .assert()
        .success()
        .stdout(contains("Panning to 40.7000, -74.0000"));

    rwo()
        .args(["--db", &db_path, "--position", "41.9,12.5", "show", "0000000000"])
        .assert()
        .success()
        .stdout(contains("Panning to").not());
}

#[test]
fn test_map_without_position_alerts_but_succeeds() {
    let db_path = setup_test_db("cli_map_no_position");
    init_db_with_data(&db_path);

    rwo()
        .args(["--db", &db_path, "map"])
        .assert()
        .success()
        .stderr(contains("Could not get your location"))
        .stdout(contains("2 workout(s) loaded"));
}

#[test]
fn test_map_renders_markers() {
    let db_path = setup_test_db("cli_map_markers");
    init_db_with_data(&db_path);

    rwo()
        .args(["--db", &db_path, "--position", "40.7,-74.0", "map"])
        .assert()
        .success()
        .stdout(contains("openstreetmap.org/#map=13/40.7/-74"))
        .stdout(contains("[running-popup]"))
        .stdout(contains("[cycling-popup]"));
}

#[test]
fn test_reset_removes_everything() {
    let db_path = setup_test_db("cli_reset");
    init_db_with_data(&db_path);

    rwo()
        .args(["--db", &db_path, "reset", "--force"])
        .assert()
        .success()
        .stdout(contains("2 workout(s) removed."));

    rwo()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No workouts recorded yet."));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("cli_export");
    init_db_with_data(&db_path);

    let json_out = temp_out("cli_export", "json");
    rwo()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&json_out).expect("read exported json");
    let records: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(records.as_array().map(|a| a.len()), Some(2));
    assert_eq!(records[0]["type"], "running");
    assert_eq!(records[1]["elevationGain"], 523.0);

    let csv_out = temp_out("cli_export", "csv");
    rwo()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    let mut lines = content.lines();
    let header = lines.next().expect("header");
    assert!(header.starts_with("id,type,created_at,description,lat,lng"));
    assert!(header.contains("distance_km"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    rwo()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("add"))
        .stdout(contains("Running on"));
}
