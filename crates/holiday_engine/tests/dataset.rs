use std::fs;

use chrono::NaiveDate;
use holiday_core::{HolidayRecord, HolidayType, YearlyHolidays};
use holiday_engine::{write_atomic, write_holidays_json, Dataset, DatasetError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_years_day() -> HolidayRecord {
    HolidayRecord::new(
        ymd(2024, 1, 1),
        Some("New Year's Day".into()),
        HolidayType::RegularHoliday,
    )
}

#[test]
fn merge_marks_only_matching_rows() {
    let csv = "date,sales\n2024-01-01,10\n2024-01-02,12\n";
    let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

    let merged = dataset.merge(&[new_years_day()], false);
    let out = String::from_utf8(merged.to_csv_bytes().unwrap()).unwrap();

    assert_eq!(
        out,
        "date,sales,is_holiday,holiday_type\n\
         2024-01-01,10,true,regular_holiday\n\
         2024-01-02,12,false,\n"
    );
}

#[test]
fn merge_can_carry_event_names() {
    let csv = "id,Date\n1,2024-01-01\n2,2024-07-04\n";
    let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

    let merged = dataset.merge(&[new_years_day()], true);

    assert_eq!(
        merged.headers().iter().collect::<Vec<_>>(),
        vec!["id", "Date", "event", "is_holiday", "holiday_type"]
    );
    assert_eq!(
        merged.rows()[0].iter().collect::<Vec<_>>(),
        vec!["1", "2024-01-01", "New Year's Day", "true", "regular_holiday"]
    );
    assert_eq!(
        merged.rows()[1].iter().collect::<Vec<_>>(),
        vec!["2", "2024-07-04", "", "false", ""]
    );
}

#[test]
fn years_are_distinct_and_sorted() {
    let csv = "date\n2025-03-01\n2023-12-31\n2025-01-01 08:30:00\n01/15/2023\n";
    let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.years(), vec![2023, 2025]);
}

#[test]
fn missing_date_column_is_reported() {
    let err = Dataset::from_reader("day,value\n2024-01-01,1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DatasetError::MissingDateColumn));
}

#[test]
fn unparseable_date_reports_line() {
    let csv = "date,value\n2024-01-01,1\nsoon,2\n";
    let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
    match err {
        DatasetError::InvalidDate { line, value } => {
            assert_eq!(line, 3);
            assert_eq!(value, "soon");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn read_and_write_through_files() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("data.csv");
    let output = temp.path().join("out").join("new_data.csv");
    fs::write(&input, "date,note\n2024-01-01,\"quoted, text\"\n").unwrap();

    let dataset = Dataset::read(&input).unwrap();
    let written = dataset.merge(&[new_years_day()], false).write(&output).unwrap();

    assert_eq!(written, output);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "date,note,is_holiday,holiday_type\n2024-01-01,\"quoted, text\",true,regular_holiday\n"
    );
}

#[test]
fn missing_input_file_is_an_open_error() {
    let temp = TempDir::new().unwrap();
    let err = Dataset::read(&temp.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DatasetError::Open { .. }));
}

#[test]
fn atomic_write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("new_data.csv");

    write_atomic(&target, b"first").unwrap();
    write_atomic(&target, b"second").unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "second");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn atomic_write_fails_when_parent_is_a_file() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    assert!(write_atomic(&blocker.join("new_data.csv"), b"data").is_err());
}

#[test]
fn holidays_json_is_keyed_by_year() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("holidays.json");
    let mut yearly = YearlyHolidays::new();
    yearly.insert(2024, vec![new_years_day()]);
    yearly.insert(2025, Vec::new());

    write_holidays_json(&path, &yearly).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "2024": [{
                "date": "2024-01-01",
                "event": "New Year's Day",
                "holiday_type": "regular_holiday"
            }],
            "2025": []
        })
    );
}
