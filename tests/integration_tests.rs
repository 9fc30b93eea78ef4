use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add, init_db_with_data, ojt, read_raw_blob, setup_test_db, write_raw_blob};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    ojt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('storage','log')",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(tables, 2);
}

#[test]
fn test_add_and_report_scenario() {
    let db_path = setup_test_db("add_report_scenario");
    ojt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ojt()
        .args([
            "--db", &db_path, "add", "A", "--in", "09:10", "--out", "18:05", "--date", "1/1/2024",
        ])
        .assert()
        .success()
        .stdout(contains("OJT record added"));

    ojt()
        .args(["--db", &db_path, "report", "--name", "A"])
        .assert()
        .success()
        .stdout(contains("1/1/2024"))
        .stdout(contains("On Time"))
        .stdout(contains("Out"))
        .stdout(contains("8.92 hrs"));

    let blob = read_raw_blob(&db_path).expect("blob written");
    assert_eq!(
        blob,
        r#"[{"name":"A","date":"1/1/2024","timeIn":"09:10","timeOut":"18:05"}]"#
    );
}

#[test]
fn test_report_defaults_to_first_name_and_sums_hours() {
    let db_path = setup_test_db("report_default");
    init_db_with_data(&db_path);

    // Ana: 8.9167 + 8.1667 + 0 (no out)
    ojt()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("Report for Ana"))
        .stdout(contains("Late"))
        .stdout(contains("Early Out"))
        .stdout(contains("No Out"))
        .stdout(contains("17.08 hrs"))
        .stdout(contains("Ben").not());

    ojt()
        .args(["--db", &db_path, "report", "--name", "Ben"])
        .assert()
        .success()
        .stdout(contains("Early In"))
        .stdout(contains("Overtime"))
        .stdout(contains("10.75 hrs"));
}

#[test]
fn test_report_unknown_name_has_zero_total() {
    let db_path = setup_test_db("report_unknown");
    init_db_with_data(&db_path);

    ojt()
        .args(["--db", &db_path, "report", "--name", "Nobody"])
        .assert()
        .success()
        .stdout(contains("No records for Nobody"))
        .stdout(contains("0.00 hrs"));
}

#[test]
fn test_names_first_occurrence_order() {
    let db_path = setup_test_db("names_order");
    init_db_with_data(&db_path);
    add(&db_path, "Cy", "1/4/2024", "09:00", None);
    add(&db_path, "Ben", "1/4/2024", "09:00", None);

    let out = ojt()
        .args(["--db", &db_path, "names"])
        .assert()
        .success()
        .stdout(contains("(default)"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Ana"));
    assert_eq!(lines[1], "Ben");
    assert_eq!(lines[2], "Cy");
}

#[test]
fn test_names_empty_store() {
    let db_path = setup_test_db("names_empty");
    ojt()
        .args(["--db", &db_path, "names"])
        .assert()
        .success()
        .stdout(contains("No trainees recorded yet"));
}

#[test]
fn test_add_rejects_blank_name() {
    let db_path = setup_test_db("add_blank_name");
    init_db_with_data(&db_path);
    let before = read_raw_blob(&db_path);

    ojt()
        .args(["--db", &db_path, "add", "   ", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("name is required"));

    assert_eq!(read_raw_blob(&db_path), before);
}

#[test]
fn test_add_requires_time_in() {
    let db_path = setup_test_db("add_no_in");
    init_db_with_data(&db_path);
    let before = read_raw_blob(&db_path);

    ojt()
        .args(["--db", &db_path, "add", "Ana", "--out", "18:00"])
        .assert()
        .failure()
        .stderr(contains("time in is required"));

    assert_eq!(read_raw_blob(&db_path), before);
}

#[test]
fn test_add_rejects_malformed_time() {
    let db_path = setup_test_db("add_bad_time");
    init_db_with_data(&db_path);
    let before = read_raw_blob(&db_path);

    ojt()
        .args(["--db", &db_path, "add", "Ana", "--in", "9am"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    ojt()
        .args(["--db", &db_path, "add", "Ana", "--in", "09:00", "--out", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    assert_eq!(read_raw_blob(&db_path), before);
}

#[test]
fn test_add_defaults_date_to_today() {
    let db_path = setup_test_db("add_today");
    let today = || chrono::Local::now().date_naive().format("%-m/%-d/%Y").to_string();

    // the run may cross midnight
    let before = today();
    ojt()
        .args(["--db", &db_path, "add", "Ana", "--in", "09:00"])
        .assert()
        .success();
    let after = today();

    let blob = read_raw_blob(&db_path).unwrap();
    assert!(
        blob.contains(&format!(r#""date":"{}""#, before))
            || blob.contains(&format!(r#""date":"{}""#, after))
    );
    assert!(blob.contains(r#""timeOut":"""#));
}

#[test]
fn test_duplicate_entries_are_kept() {
    let db_path = setup_test_db("duplicates");
    add(&db_path, "Ana", "1/1/2024", "09:00", Some("17:00"));
    add(&db_path, "Ana", "1/1/2024", "09:00", Some("17:00"));

    ojt()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("16.00 hrs"));
}

#[test]
fn test_overnight_shift_reports_negative_hours() {
    let db_path = setup_test_db("overnight");
    add(&db_path, "Night", "1/1/2024", "22:00", Some("06:00"));

    ojt()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("-16.00 hrs"));
}

#[test]
fn test_corrupt_state_falls_back_for_reads_and_blocks_writes() {
    let db_path = setup_test_db("corrupt_state");
    init_db_with_data(&db_path);
    write_raw_blob(&db_path, "{oops");

    ojt()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stderr(contains("Corrupt stored state"))
        .stdout(contains("No trainees recorded yet"));

    ojt()
        .args(["--db", &db_path, "add", "Ana", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Corrupt stored state"));

    assert_eq!(read_raw_blob(&db_path).as_deref(), Some("{oops"));
}

#[test]
fn test_reads_browser_exported_blob() {
    let db_path = setup_test_db("browser_blob");
    ojt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    write_raw_blob(
        &db_path,
        r#"[{"name":"Juan","date":"3/4/2024","timeIn":"09:16","timeOut":""},
            {"name":"Juan","date":"3/5/2024","timeIn":"09:00","timeOut":"19:00"}]"#,
    );

    ojt()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("Report for Juan"))
        .stdout(contains("Late"))
        .stdout(contains("No Out"))
        .stdout(contains("Overtime"))
        .stdout(contains("10.00 hrs"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    ojt()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("Ana"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    ojt()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total records:"))
        .stdout(contains("4"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Stored records readable (4)"));
}
