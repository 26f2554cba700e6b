use chrono::{Local, NaiveDate, NaiveTime, Weekday};
use rpaylogger::core::aggregate::{daily_rollup, month_view};
use rpaylogger::core::calendar::{CalendarCell, leading_blanks, project, weeks};
use rpaylogger::core::duration::{hours_from_clock, hours_from_span, salary_for};
use rpaylogger::core::settlement::{SettlementBook, compute_net};
use rpaylogger::core::storage::MemoryStorage;
use rpaylogger::core::store::{LogStore, MAX_ENTRY_ID};
use rpaylogger::core::tracker::{ClockForm, SpanForm, Tracker};
use rpaylogger::errors::AppError;
use rpaylogger::models::day_kind::DayKind;
use rpaylogger::models::entry::{EntryKind, LogEntry, WorkDetail};
use rpaylogger::models::entry_kind::LeaveKind;
use rpaylogger::models::month::YearMonth;
use rpaylogger::models::preferences::Preferences;
use rpaylogger::models::settlement::MonthlySettlement;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn ym(s: &str) -> YearMonth {
    YearMonth::parse(s).unwrap()
}

fn work(hours: f64, salary: f64) -> EntryKind {
    EntryKind::Work {
        total_hours: hours,
        salary,
        detail: WorkDetail::Span {
            hours: hours as u32,
            minutes: 0,
        },
    }
}

fn tracker_with_rate(rate: f64) -> Tracker<MemoryStorage> {
    let mut storage = MemoryStorage::new();
    storage.preferences.hourly_rate = rate;
    Tracker::open(storage).unwrap()
}

// ------------------------------------------------
// Duration
// ------------------------------------------------

#[test]
fn test_clock_hours_subtract_break() {
    let h = hours_from_clock(t("09:00"), t("17:00"), 60).unwrap();
    assert_eq!(h, 7.0);
    assert_eq!(salary_for(h, 200.0), 1400.0);
}

#[test]
fn test_clock_hours_reject_negative_result() {
    let err = hours_from_clock(t("09:00"), t("10:00"), 90).unwrap_err();
    assert!(matches!(err, AppError::NegativeDuration(-30)));

    let err = hours_from_clock(t("17:00"), t("09:00"), 0).unwrap_err();
    assert!(matches!(err, AppError::NegativeDuration(_)));
}

#[test]
fn test_span_hours() {
    assert_eq!(hours_from_span(1, 30).unwrap(), 1.5);
    assert!(matches!(
        hours_from_span(0, 0).unwrap_err(),
        AppError::EmptyDuration
    ));
    assert!(matches!(
        hours_from_span(1, 60).unwrap_err(),
        AppError::InvalidTime(_)
    ));
}

// ------------------------------------------------
// YearMonth
// ------------------------------------------------

#[test]
fn test_year_month_parse_and_shift() {
    assert_eq!(ym("2024-02").days_in_month(), 29);
    assert_eq!(ym("2023-02").days_in_month(), 28);
    assert_eq!(ym("1900-02").days_in_month(), 28);
    assert_eq!(ym("2000-02").days_in_month(), 29);

    assert!(YearMonth::parse("2024-2").is_err());
    assert!(YearMonth::parse("2024-13").is_err());
    assert!(YearMonth::parse("24-01").is_err());

    assert_eq!(ym("2024-01").shift(-1).unwrap(), ym("2023-12"));
    assert_eq!(ym("2024-11").shift(3).unwrap(), ym("2025-02"));
    assert_eq!(ym("2024-05").shift(0).unwrap().key(), "2024-05");

    assert!(ym("2024-02").contains(d("2024-02-29")));
    assert!(!ym("2024-02").contains(d("2024-03-01")));
}

// ------------------------------------------------
// Log store
// ------------------------------------------------

#[test]
fn test_store_delete_by_id_and_position() {
    let mut store = LogStore::new();
    let a = store.append(d("2024-02-01"), work(1.0, 100.0)).unwrap();
    let b = store.append(d("2024-02-02"), work(2.0, 200.0)).unwrap();
    let c = store.append(d("2024-02-03"), work(3.0, 300.0)).unwrap();

    let removed = store.delete(b).unwrap();
    assert_eq!(removed.date, d("2024-02-02"));
    assert_eq!(
        store.entries().iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![a, c]
    );

    let next = store.append(d("2024-02-04"), work(1.0, 100.0)).unwrap();
    assert!(next > c);

    assert!(matches!(
        store.delete(b).unwrap_err(),
        AppError::EntryNotFound(_)
    ));
    assert!(matches!(
        store.delete_at(3).unwrap_err(),
        AppError::InvalidPosition(3)
    ));

    let first = store.delete_at(0).unwrap();
    assert_eq!(first.id, a);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_store_upsert_leave_replaces_in_place() {
    let mut store = LogStore::new();
    let w = store.append(d("2024-03-05"), work(4.0, 800.0)).unwrap();
    let l = store.upsert_leave(d("2024-03-05"), LeaveKind::Leave).unwrap();
    store.append(d("2024-03-06"), work(4.0, 800.0)).unwrap();

    let again = store.upsert_leave(d("2024-03-05"), LeaveKind::ScheduledOff).unwrap();
    assert_eq!(again, l);
    assert_eq!(store.len(), 3);
    assert_eq!(store.position_of(l), Some(1));
    assert_eq!(store.get(l).unwrap().kind, EntryKind::ScheduledOff);

    // work on the same date is untouched
    assert!(store.get(w).unwrap().is_work());
}

// ------------------------------------------------
// Aggregation
// ------------------------------------------------

#[test]
fn test_month_view_filters_and_totals() {
    let mut store = LogStore::new();
    store.append(d("2024-01-31"), work(8.0, 1600.0)).unwrap();
    store.append(d("2024-02-01"), work(7.0, 1400.0)).unwrap();
    store.append(d("2024-02-01"), work(1.5, 300.0)).unwrap();
    store.upsert_leave(d("2024-02-02"), LeaveKind::Leave).unwrap();
    store.upsert_leave(d("2024-02-03"), LeaveKind::ScheduledOff).unwrap();
    store.append(d("2024-03-01"), work(8.0, 1600.0)).unwrap();

    let view = month_view(store.entries(), ym("2024-02"));
    assert_eq!(view.entries.len(), 4);
    assert_eq!(view.totals.hours, 8.5);
    assert_eq!(view.totals.salary, 1700.0);
    assert_eq!(view.totals.work_entries, 2);
    assert_eq!(view.totals.leave_days, 1);
    assert_eq!(view.totals.off_days, 1);
    assert_eq!(view.payable(), 1700.0);

    let day1 = view.daily[&1];
    assert_eq!(day1.kind, DayKind::Work);
    assert_eq!(day1.hours, 8.5);
}

#[test]
fn test_absence_wins_over_work_regardless_of_order() {
    let mut leave_first = LogStore::new();
    leave_first.upsert_leave(d("2024-02-10"), LeaveKind::Leave).unwrap();
    leave_first.append(d("2024-02-10"), work(2.0, 400.0)).unwrap();

    let mut work_first = LogStore::new();
    work_first.append(d("2024-02-10"), work(2.0, 400.0)).unwrap();
    work_first.upsert_leave(d("2024-02-10"), LeaveKind::Leave).unwrap();

    for store in [leave_first, work_first] {
        let daily = daily_rollup(store.entries());
        let day = daily[&10];
        assert_eq!(day.kind, DayKind::Leave);
        assert_eq!(day.hours, 2.0);
        assert_eq!(day.salary, 400.0);
    }
}

// ------------------------------------------------
// Settlement
// ------------------------------------------------

#[test]
fn test_compute_net_floors_at_zero() {
    assert_eq!(compute_net(100.0, 80.0, 80.0), 0.0);
    assert_eq!(compute_net(1400.0, 100.0, 50.0), 1250.0);
}

#[test]
fn test_settlement_book_upserts_and_sorts() {
    let mut book = SettlementBook::new();
    let now = Local::now();

    book.save(ym("2024-01"), 1000.0, 0.0, 0.0, now).unwrap();
    book.save(ym("2024-03"), 1000.0, 0.0, 0.0, now).unwrap();
    book.save(ym("2023-12"), 1000.0, 0.0, 0.0, now).unwrap();
    let updated = book.save(ym("2024-01"), 1000.0, 100.0, 50.0, now).unwrap();

    assert_eq!(updated.net, 850.0);
    assert_eq!(book.len(), 3);
    assert_eq!(
        book.records().iter().map(|r| r.month.key()).collect::<Vec<_>>(),
        vec!["2024-03", "2024-01", "2023-12"]
    );
    assert_eq!(book.get(ym("2024-01")).unwrap().labor_deduction, 100.0);

    assert!(matches!(
        book.save(ym("2024-02"), 0.0, 0.0, 0.0, now).unwrap_err(),
        AppError::ZeroPayable(_)
    ));
    assert!(matches!(
        book.save(ym("2024-02"), 10.0, -1.0, 0.0, now).unwrap_err(),
        AppError::InvalidAmount(_)
    ));
    assert_eq!(book.len(), 3);
}

// ------------------------------------------------
// Calendar
// ------------------------------------------------

#[test]
fn test_leading_blanks_monday_first() {
    assert_eq!(leading_blanks(Weekday::Mon), 0);
    assert_eq!(leading_blanks(Weekday::Thu), 3);
    assert_eq!(leading_blanks(Weekday::Sun), 6);
}

#[test]
fn test_calendar_projection_february_2024() {
    let mut store = LogStore::new();
    store.append(d("2024-02-05"), work(7.0, 1400.0)).unwrap();

    let month = ym("2024-02");
    let view = month_view(store.entries(), month);
    let cells = project(month, &view.daily);

    // 2024-02-01 is a Thursday
    assert_eq!(cells.len(), 3 + 29);
    assert!(cells[..3].iter().all(|c| *c == CalendarCell::Blank));
    assert_eq!(
        cells[3],
        CalendarCell::Day {
            day: 1,
            rollup: None
        }
    );

    match cells[3 + 4] {
        CalendarCell::Day {
            day: 5,
            rollup: Some(r),
        } => {
            assert_eq!(r.kind, DayKind::Work);
            assert_eq!(r.salary, 1400.0);
        }
        other => panic!("unexpected cell {:?}", other),
    }

    let rows = weeks(&cells);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4].len(), 4);
}

#[test]
fn test_calendar_month_starting_sunday() {
    // 2024-09-01 is a Sunday
    let month = ym("2024-09");
    let cells = project(month, &Default::default());
    assert_eq!(cells.len(), 6 + 30);
}

// ------------------------------------------------
// Tracker
// ------------------------------------------------

#[test]
fn test_tracker_add_clock_entry() {
    let mut tracker = tracker_with_rate(200.0);

    let entry = tracker
        .add_work_clock(ClockForm {
            date: Some("2024-03-04"),
            start: Some("09:00"),
            end: Some("17:00"),
            break_minutes: Some(60),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(entry.total_hours(), 7.0);
    assert_eq!(entry.salary(), 1400.0);
    assert_eq!(tracker.entries().len(), 1);
    assert_eq!(tracker.storage().entries.len(), 1);
}

#[test]
fn test_tracker_rejects_missing_fields_without_saving() {
    let mut tracker = tracker_with_rate(0.0);

    let err = tracker
        .add_work_span(SpanForm {
            date: Some("2024-03-04"),
            hours: 2,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, AppError::MissingField("hourly rate")));

    let err = tracker
        .add_work_span(SpanForm {
            rate: Some(100.0),
            hours: 2,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, AppError::MissingField("date")));

    let err = tracker.add_leave(None, LeaveKind::Leave).unwrap_err();
    assert!(matches!(err, AppError::MissingField("date")));

    let err = tracker
        .add_work_clock(ClockForm {
            rate: Some(100.0),
            date: Some("2024-03-04"),
            start: Some("09:00"),
            end: Some("08:00"),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, AppError::NegativeDuration(-60)));

    assert!(tracker.entries().is_empty());
    assert_eq!(tracker.storage().saves, 0);
}

#[test]
fn test_tracker_settle_defaults_to_saved_deductions() {
    let mut tracker = tracker_with_rate(100.0);
    tracker
        .update_preferences(None, Some(30.0), Some(20.0))
        .unwrap();
    tracker
        .add_work_span(SpanForm {
            date: Some("2024-02-10"),
            hours: 10,
            ..Default::default()
        })
        .unwrap();

    let record = tracker
        .settle(ym("2024-02"), None, None, Local::now())
        .unwrap();
    assert_eq!(record.payable, 1000.0);
    assert_eq!(record.net, 950.0);

    let record = tracker
        .settle(ym("2024-02"), Some(0.0), None, Local::now())
        .unwrap();
    assert_eq!(record.net, 980.0);
    assert_eq!(tracker.settlements().len(), 1);

    let err = tracker
        .settle(ym("2024-03"), None, None, Local::now())
        .unwrap_err();
    assert!(matches!(err, AppError::ZeroPayable(_)));
    assert_eq!(tracker.settlements().len(), 1);
}

#[test]
fn test_tracker_delete_by_id_in_filtered_view() {
    let mut tracker = tracker_with_rate(100.0);
    for date in ["2024-01-31", "2024-02-01", "2024-02-02"] {
        tracker
            .add_work_span(SpanForm {
                date: Some(date),
                hours: 1,
                ..Default::default()
            })
            .unwrap();
    }

    // second row of the February view is the third entry overall
    let target = tracker.month_view(ym("2024-02")).entries[1].id;
    let removed = tracker.delete_entry(target).unwrap();
    assert_eq!(removed.date, d("2024-02-02"));

    let removed = tracker.delete_entry_at(0).unwrap();
    assert_eq!(removed.date, d("2024-01-31"));
    assert_eq!(tracker.entries().len(), 1);

    assert_eq!(tracker.clear_logs().unwrap(), 1);
    assert!(tracker.into_storage().entries.is_empty());
}

#[test]
fn test_tracker_replace_all_rejects_duplicate_ids() {
    let mut tracker = tracker_with_rate(100.0);
    tracker
        .add_work_span(SpanForm {
            date: Some("2024-02-01"),
            hours: 1,
            ..Default::default()
        })
        .unwrap();

    let mut entries = tracker.entries().to_vec();
    entries.push(entries[0].clone());

    let err = tracker
        .replace_all(entries, Vec::new(), tracker.preferences())
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidSnapshot(_)));
    assert_eq!(tracker.entries().len(), 1);
}

fn settlement(month: &str, payable: f64, labor: f64, net: f64) -> MonthlySettlement {
    MonthlySettlement {
        month: ym(month),
        payable,
        labor_deduction: labor,
        health_deduction: 0.0,
        net,
        saved_at: Local::now(),
    }
}

#[test]
fn test_tracker_replace_all_enforces_store_rules() {
    let mut tracker = tracker_with_rate(100.0);
    tracker
        .add_work_span(SpanForm {
            date: Some("2024-02-01"),
            hours: 1,
            ..Default::default()
        })
        .unwrap();
    let saves = tracker.storage().saves;
    let prefs = tracker.preferences();

    let two_absences = vec![
        LogEntry::new(1, d("2024-03-05"), EntryKind::Leave),
        LogEntry::new(2, d("2024-03-05"), EntryKind::ScheduledOff),
    ];
    assert!(matches!(
        tracker.replace_all(two_absences, Vec::new(), prefs).unwrap_err(),
        AppError::InvalidSnapshot(_)
    ));

    let zero_payable = vec![settlement("2024-03", 0.0, 0.0, 0.0)];
    assert!(matches!(
        tracker.replace_all(Vec::new(), zero_payable, prefs).unwrap_err(),
        AppError::ZeroPayable(_)
    ));

    let negative_deduction = vec![settlement("2024-03", 100.0, -5.0, 105.0)];
    assert!(matches!(
        tracker.replace_all(Vec::new(), negative_deduction, prefs).unwrap_err(),
        AppError::InvalidAmount(_)
    ));

    let negative_rate = Preferences {
        hourly_rate: -10.0,
        ..prefs
    };
    assert!(matches!(
        tracker.replace_all(Vec::new(), Vec::new(), negative_rate).unwrap_err(),
        AppError::InvalidAmount(_)
    ));

    let huge_id = vec![LogEntry::new(u64::MAX, d("2024-03-05"), EntryKind::Leave)];
    assert!(matches!(
        tracker.replace_all(huge_id, Vec::new(), prefs).unwrap_err(),
        AppError::InvalidId(_)
    ));

    let negative_hours = vec![LogEntry::new(1, d("2024-03-05"), work(-2.0, -200.0))];
    assert!(matches!(
        tracker.replace_all(negative_hours, Vec::new(), prefs).unwrap_err(),
        AppError::InvalidAmount(_)
    ));

    // nothing was written
    assert_eq!(tracker.storage().saves, saves);
    assert_eq!(tracker.entries().len(), 1);
    assert!(tracker.settlements().is_empty());
    assert_eq!(tracker.preferences().hourly_rate, 100.0);
}

#[test]
fn test_tracker_replace_all_recomputes_net() {
    let mut tracker = tracker_with_rate(100.0);
    let records = vec![
        settlement("2024-01", 1000.0, 100.0, 999.0),
        settlement("2024-03", 50.0, 80.0, 7.0),
    ];

    tracker
        .replace_all(Vec::new(), records, tracker.preferences())
        .unwrap();

    let stored = tracker.settlements();
    assert_eq!(stored[0].month.key(), "2024-03");
    assert_eq!(stored[0].net, 0.0);
    assert_eq!(stored[1].net, 900.0);
    assert_eq!(tracker.storage().settlements[1].net, 900.0);
}

#[test]
fn test_store_refuses_new_ids_past_the_limit() {
    let mut store = LogStore::from_entries(vec![LogEntry::new(
        u64::MAX,
        d("2024-02-01"),
        EntryKind::Leave,
    )]);
    assert!(matches!(
        store.append(d("2024-02-02"), work(1.0, 100.0)).unwrap_err(),
        AppError::IdsExhausted
    ));

    let mut store = LogStore::from_entries(vec![LogEntry::new(
        MAX_ENTRY_ID - 1,
        d("2024-02-01"),
        EntryKind::Leave,
    )]);
    assert_eq!(
        store.append(d("2024-02-02"), work(1.0, 100.0)).unwrap(),
        MAX_ENTRY_ID
    );
    assert!(matches!(
        store.upsert_leave(d("2024-02-03"), LeaveKind::Leave).unwrap_err(),
        AppError::IdsExhausted
    ));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_preferences_reset_restores_placeholder_rate() {
    let mut tracker = tracker_with_rate(250.0);
    tracker.update_preferences(None, Some(10.0), None).unwrap();

    let prefs = tracker.reset_preferences().unwrap();
    assert_eq!(prefs.hourly_rate, 183.0);
    assert_eq!(prefs.labor_deduction, 0.0);

    assert!(matches!(
        tracker
            .update_preferences(Some(-1.0), None, None)
            .unwrap_err(),
        AppError::InvalidAmount(_)
    ));
    assert_eq!(tracker.preferences().hourly_rate, 183.0);
}
