use chrono::{Local, NaiveTime};
use rpaylogger::core::storage::Storage;
use rpaylogger::core::tracker::{ClockForm, SpanForm, Tracker};
use rpaylogger::db::pool::DbPool;
use rpaylogger::db::storage::SqliteStorage;
use rpaylogger::models::entry::{EntryKind, WorkDetail};
use rpaylogger::models::entry_kind::LeaveKind;
use rpaylogger::models::month::YearMonth;

fn memory_db() -> SqliteStorage {
    SqliteStorage::from_pool(DbPool::in_memory().unwrap()).unwrap()
}

#[test]
fn test_fresh_database_loads_empty() {
    let mut storage = memory_db();

    assert!(storage.load_entries().unwrap().is_empty());
    assert!(storage.load_settlements().unwrap().is_empty());

    let prefs = storage.load_preferences().unwrap();
    assert_eq!(prefs.hourly_rate, 0.0);
    assert_eq!(prefs.labor_deduction, 0.0);
    assert_eq!(prefs.health_deduction, 0.0);
}

#[test]
fn test_state_survives_reload() {
    let mut tracker = Tracker::open(memory_db()).unwrap();
    tracker
        .update_preferences(Some(200.0), Some(100.0), None)
        .unwrap();

    tracker
        .add_work_clock(ClockForm {
            date: Some("2024-02-05"),
            start: Some("09:00"),
            end: Some("17:30"),
            break_minutes: Some(30),
            ..Default::default()
        })
        .unwrap();
    tracker.add_leave(Some("2024-02-06"), LeaveKind::ScheduledOff).unwrap();
    tracker
        .add_work_span(SpanForm {
            date: Some("2024-02-01"),
            hours: 1,
            minutes: 15,
            ..Default::default()
        })
        .unwrap();
    tracker
        .settle(YearMonth::parse("2024-02").unwrap(), None, None, Local::now())
        .unwrap();

    let before = tracker.entries().to_vec();
    let reloaded = Tracker::open(tracker.into_storage()).unwrap();

    // insertion order, ids and details are kept
    assert_eq!(reloaded.entries(), before.as_slice());
    assert_eq!(
        reloaded.entries().iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    match &reloaded.entries()[0].kind {
        EntryKind::Work {
            total_hours,
            detail: WorkDetail::Clock { start, .. },
            ..
        } => {
            assert_eq!(*total_hours, 8.0);
            assert_eq!(*start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        }
        other => panic!("unexpected kind {:?}", other),
    }
    assert_eq!(reloaded.entries()[1].kind, EntryKind::ScheduledOff);

    let prefs = reloaded.preferences();
    assert_eq!(prefs.hourly_rate, 200.0);
    assert_eq!(prefs.labor_deduction, 100.0);

    let settlements = reloaded.settlements();
    assert_eq!(settlements.len(), 1);
    assert_eq!(settlements[0].month.key(), "2024-02");
    assert_eq!(settlements[0].payable, 1850.0);
    assert_eq!(settlements[0].net, 1750.0);
}

#[test]
fn test_mutations_are_written_to_internal_log() {
    let mut tracker = Tracker::open(memory_db()).unwrap();
    tracker.add_leave(Some("2024-02-06"), LeaveKind::Leave).unwrap();
    tracker.add_leave(Some("2024-02-06"), LeaveKind::ScheduledOff).unwrap();

    let storage = tracker.into_storage();
    let ops: Vec<String> = rpaylogger::db::log::load_log(storage.conn())
        .unwrap()
        .into_iter()
        .map(|(_, _, op, _, _)| op)
        .filter(|op| op != "migration_applied")
        .collect();

    assert_eq!(ops, vec!["leave", "edit"]);
}

#[test]
fn test_negative_entry_id_is_reported_not_wrapped() {
    let mut storage = memory_db();
    storage
        .conn()
        .execute(
            "INSERT INTO entries (id, seq, date, kind, created_at)
             VALUES (-1, 0, '2024-02-01', 'leave', '2024-02-01T08:00:00+00:00')",
            [],
        )
        .unwrap();

    assert!(storage.load_entries().is_err());
    assert!(Tracker::open(storage).is_err());
}
