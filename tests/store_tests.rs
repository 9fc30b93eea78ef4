mod common;
use common::setup_test_db;
use ojtlogger::core::add::AddLogic;
use ojtlogger::core::classifier::{classify_arrival, classify_departure};
use ojtlogger::core::report::{build_report, hours_worked, list_distinct_names};
use ojtlogger::db::storage::SqliteStorage;
use ojtlogger::db::store::{DEFAULT_STORAGE_KEY, RecordStore};
use ojtlogger::errors::AppError;
use ojtlogger::models::AttendanceRecord;

fn open(db_path: &str) -> RecordStore<SqliteStorage> {
    RecordStore::new(SqliteStorage::open(db_path).expect("open db"), DEFAULT_STORAGE_KEY)
}

#[test]
fn test_policy_labels() {
    let arrivals = [
        (Some("09:00"), "On Time"),
        (Some("09:15"), "On Time"),
        (Some("08:59"), "Early In"),
        (Some("09:16"), "Late"),
        (None, "No In"),
    ];
    for (input, label) in arrivals {
        assert_eq!(classify_arrival(input).unwrap().label(), label, "{input:?}");
    }

    let departures = [
        (Some("17:59"), "Early Out"),
        (Some("18:00"), "Out"),
        (Some("19:00"), "Overtime"),
        (Some("18:30"), "Out"),
        (None, "No Out"),
    ];
    for (input, label) in departures {
        assert_eq!(classify_departure(input).unwrap().label(), label, "{input:?}");
    }
}

#[test]
fn test_records_survive_reopen() {
    let db_path = setup_test_db("store_reopen");

    {
        let mut store = open(&db_path);
        AddLogic::apply(&mut store, "A", Some("09:10"), Some("18:05"), "1/1/2024").unwrap();
        AddLogic::apply(&mut store, "B", Some("09:00"), None, "1/1/2024").unwrap();
    }

    let store = open(&db_path);
    let records = store.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(list_distinct_names(&records), vec!["A", "B"]);

    let report = build_report(&records, "A").unwrap();
    assert_eq!(report.rows.len(), 1);
    assert!((report.total_hours - 8.9167).abs() < 1e-3);
}

#[test]
fn test_rejected_append_is_idempotent() {
    let db_path = setup_test_db("store_rejected");
    let mut store = open(&db_path);
    AddLogic::apply(&mut store, "A", Some("09:00"), None, "1/1/2024").unwrap();
    let before = store.load().unwrap();

    for _ in 0..3 {
        let res = AddLogic::apply(&mut store, "", Some("09:00"), None, "1/1/2024");
        assert!(matches!(res, Err(AppError::Validation(_))));
    }

    assert_eq!(store.load().unwrap(), before);
}

#[test]
fn test_every_read_sees_latest_write() {
    let db_path = setup_test_db("store_fresh_reads");
    let reader = open(&db_path);
    let mut writer = open(&db_path);

    assert!(reader.load().unwrap().is_empty());
    writer
        .append(AttendanceRecord::new("A", "1/1/2024", Some("09:00".into()), None))
        .unwrap();
    assert_eq!(reader.load().unwrap().len(), 1);
    assert_eq!(reader.query("A").unwrap().len(), 1);
}

#[test]
fn test_nine_to_five() {
    let rec = AttendanceRecord::new("A", "1/1/2024", Some("09:00".into()), Some("17:00".into()));
    assert_eq!(hours_worked(&rec).unwrap(), 8.0);
}
