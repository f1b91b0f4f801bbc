use std::sync::Once;

use chrono::{Datelike, NaiveDate};
use holiday_core::{
    flatten_years, left_join, normalize_date, HolidayRecord, HolidayType, YearlyHolidays,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(holiday_logging::initialize_for_tests);
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

#[test]
fn normalizer_agrees_with_calendar_for_every_day() {
    init_logging();
    for year in [2023, 2024] {
        let mut date = ymd(year, 1, 1);
        while date.year() == year {
            let text = format!("{} {} (Someday)", MONTHS[date.month0() as usize], date.day());
            assert_eq!(
                normalize_date(&text, year).unwrap(),
                date.format("%Y-%m-%d").to_string(),
                "input {text:?}"
            );
            date = date.succ_opt().unwrap();
        }
    }
}

#[test]
fn normalizer_rejects_days_out_of_range() {
    init_logging();
    for text in ["April 31", "June 0", "January 32", "November 31 (Friday)"] {
        assert!(normalize_date(text, 2024).is_err(), "{text} should fail");
    }
}

#[test]
fn holiday_type_is_total() {
    init_logging();
    for heading in ["Regular Holidays", "Special (Non-Working) Holidays", "Foo", "", "REGULAR HOLIDAYS"] {
        let code = HolidayType::from_heading(heading).code();
        assert!(
            ["regular_holiday", "special_non_working_holiday", "unknown"].contains(&code),
            "{heading:?} -> {code}"
        );
    }
    assert_eq!(HolidayType::from_heading("Foo"), HolidayType::Unknown);
}

#[test]
fn left_join_marks_matches_and_keeps_unmatched_rows() {
    init_logging();
    let holidays = vec![HolidayRecord::new(
        ymd(2024, 1, 1),
        None,
        HolidayType::RegularHoliday,
    )];
    let dates = vec![ymd(2024, 1, 1), ymd(2024, 1, 2)];

    let joined = left_join(&dates, &holidays);

    assert_eq!(joined.len(), 2);
    assert_eq!(joined[0].row, 0);
    assert!(joined[0].is_holiday());
    assert_eq!(joined[0].holiday_type(), Some(HolidayType::RegularHoliday));
    assert_eq!(joined[1].row, 1);
    assert!(!joined[1].is_holiday());
    assert_eq!(joined[1].holiday_type(), None);
}

#[test]
fn left_join_repeats_rows_for_shared_dates() {
    init_logging();
    let holidays = vec![
        HolidayRecord::new(
            ymd(2024, 4, 9),
            Some("Araw ng Kagitingan".into()),
            HolidayType::RegularHoliday,
        ),
        HolidayRecord::new(
            ymd(2024, 4, 9),
            Some("Eid'l Fitr".into()),
            HolidayType::RegularHoliday,
        ),
    ];
    let dates = vec![ymd(2024, 4, 8), ymd(2024, 4, 9), ymd(2024, 4, 10)];

    let joined = left_join(&dates, &holidays);
    let rows: Vec<(usize, Option<&str>)> = joined.iter().map(|j| (j.row, j.event_name())).collect();

    assert_eq!(
        rows,
        vec![
            (0, None),
            (1, Some("Araw ng Kagitingan")),
            (1, Some("Eid'l Fitr")),
            (2, None),
        ]
    );
}

#[test]
fn flatten_orders_by_year_then_document_order() {
    init_logging();
    let mut yearly = YearlyHolidays::new();
    yearly.insert(
        2025,
        vec![HolidayRecord::new(ymd(2025, 1, 1), None, HolidayType::RegularHoliday)],
    );
    yearly.insert(
        2024,
        vec![
            HolidayRecord::new(ymd(2024, 12, 25), None, HolidayType::RegularHoliday),
            HolidayRecord::new(ymd(2024, 2, 10), None, HolidayType::SpecialNonWorkingHoliday),
        ],
    );

    let dates: Vec<String> = flatten_years(&yearly)
        .iter()
        .map(HolidayRecord::date_string)
        .collect();
    assert_eq!(dates, vec!["2024-12-25", "2024-02-10", "2025-01-01"]);
}

#[test]
fn record_serializes_with_codes() {
    init_logging();
    let named = HolidayRecord::new(
        ymd(2025, 1, 1),
        Some("New Year's Day".into()),
        HolidayType::RegularHoliday,
    );
    let unnamed = HolidayRecord::new(ymd(2025, 1, 29), None, HolidayType::SpecialNonWorkingHoliday);

    assert_eq!(
        serde_json::to_value(&named).unwrap(),
        serde_json::json!({
            "date": "2025-01-01",
            "event": "New Year's Day",
            "holiday_type": "regular_holiday"
        })
    );
    assert_eq!(
        serde_json::to_value(&unnamed).unwrap(),
        serde_json::json!({
            "date": "2025-01-29",
            "holiday_type": "special_non_working_holiday"
        })
    );
}
