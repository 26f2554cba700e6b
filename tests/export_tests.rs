use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db, init_db_with_data, rpl, setup_test_db, temp_out};

#[test]
fn test_export_csv_month() {
    let db_path = setup_test_db("export_csv_month");
    init_db_with_data(&db_path);
    common::add_clock(&db_path, "2024-03-01", "09:00", "17:00", "0", "200");
    let out = temp_out("export_csv_month", "csv");

    rpl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2024-02",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,date,kind,total_hours,salary,start,end,break_minutes,span_hours,span_minutes")
    );
    assert!(content.contains("1,2024-02-05,work,7,1400,09:00,17:00,60,,"));
    assert!(content.contains("2024-02-06"));
    assert!(!content.contains("2024-03-01"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_data(&db_path);

    rpl()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&db_path);
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").expect("write placeholder");

    rpl()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    rpl()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).expect("read").starts_with("id,date"));
}

#[test]
fn test_export_json_then_import_restores_state() {
    let src_db = setup_test_db("snapshot_src");
    init_db_with_data(&src_db);
    rpl()
        .args(["--db", &src_db, "leave", "2024-02-07", "--kind", "off"])
        .assert()
        .success();
    rpl()
        .args(["--db", &src_db, "pref", "--rate", "222", "--labor", "50"])
        .assert()
        .success();
    rpl()
        .args(["--db", &src_db, "settle", "--month", "2024-02"])
        .assert()
        .success();

    let snap = temp_out("snapshot_roundtrip", "json");
    rpl()
        .args([
            "--db", &src_db, "export", "--format", "json", "--file", &snap,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let json = fs::read_to_string(&snap).expect("read json");
    assert!(json.contains("\"version\": 1"));
    assert!(json.contains("\"kind\": \"scheduled_off\""));

    let dst_db = setup_test_db("snapshot_dst");
    init_db(&dst_db);

    rpl()
        .args(["--db", &dst_db, "import", "--file", &snap])
        .assert()
        .success()
        .stdout(contains("Imported 3 entries and 1 settlements"));

    rpl()
        .args(["--db", &dst_db, "list", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(contains("2024-02-05"))
        .stdout(contains("Days off: 1"));

    rpl()
        .args(["--db", &dst_db, "history"])
        .assert()
        .success()
        .stdout(contains("2024-02"))
        .stdout(contains("2050"));

    rpl()
        .args(["--db", &dst_db, "pref", "--print"])
        .assert()
        .success()
        .stdout(contains("222"));
}

#[test]
fn test_import_over_existing_data_asks_first() {
    let db_path = setup_test_db("import_asks");
    init_db_with_data(&db_path);

    let snap = temp_out("import_asks", "json");
    fs::write(
        &snap,
        r#"{"version":1,"exported_at":"2024-03-01T10:00:00+00:00","entries":[]}"#,
    )
    .expect("write snapshot");

    rpl()
        .args(["--db", &db_path, "import", "--file", &snap])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rpl()
        .args(["--db", &db_path, "list", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(contains("2024-02-05"));

    rpl()
        .args(["--db", &db_path, "import", "--file", &snap, "--force"])
        .assert()
        .success()
        .stdout(contains("Imported 0 entries and 0 settlements"));

    rpl()
        .args(["--db", &db_path, "list", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(contains("No entries for 2024-02"));
}

#[test]
fn test_import_rejects_unknown_version() {
    let db_path = setup_test_db("import_bad_version");
    init_db(&db_path);

    let snap = temp_out("import_bad_version", "json");
    fs::write(
        &snap,
        r#"{"version":99,"exported_at":"2024-03-01T10:00:00+00:00","entries":[]}"#,
    )
    .expect("write snapshot");

    rpl()
        .args(["--db", &db_path, "import", "--file", &snap])
        .assert()
        .failure()
        .stderr(contains("Unsupported snapshot version: 99"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup_db");
    init_db_with_data(&db_path);

    let plain = temp_out("backup_plain", "sqlite");
    rpl()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&plain).exists());

    let zipped = temp_out("backup_zipped", "zip");
    let base = zipped.trim_end_matches(".zip").to_string() + ".sqlite";
    rpl()
        .args(["--db", &db_path, "backup", "--file", &base, "--compress"])
        .assert()
        .success();
    assert!(Path::new(&zipped).exists());

    rpl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("backup"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check_info");
    init_db_with_data(&db_path);

    rpl()
        .args(["--db", &db_path, "db", "--check", "--info", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."))
        .stdout(contains("Entries:"))
        .stdout(contains("schema is up to date"));
}

#[test]
fn test_import_rejects_two_absences_on_one_date() {
    let db_path = setup_test_db("import_two_absences");
    init_db_with_data(&db_path);

    let snap = temp_out("import_two_absences", "json");
    fs::write(
        &snap,
        r#"{"version":1,"exported_at":"2024-03-01T10:00:00+00:00","entries":[
            {"id":1,"date":"2024-03-05","kind":"leave","created_at":"2024-03-01T10:00:00+00:00"},
            {"id":2,"date":"2024-03-05","kind":"scheduled_off","created_at":"2024-03-01T10:00:00+00:00"}
        ]}"#,
    )
    .expect("write snapshot");

    rpl()
        .args(["--db", &db_path, "import", "--file", &snap, "--force"])
        .assert()
        .failure()
        .stderr(contains("more than one leave/off entry on 2024-03-05"));

    // previous data is untouched
    rpl()
        .args(["--db", &db_path, "list", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(contains("2024-02-05"));
}
