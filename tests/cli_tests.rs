use predicates::str::contains;
use std::fs;

mod common;
use common::{pl_with, read, setup_data_file, this_december};

#[test]
fn test_init_creates_empty_data_file() {
    let (_dir, data) = setup_data_file("init");

    pl_with(&data, &["init"]).assert().success();

    assert_eq!(read(&data), "date,morning,afternoon,evening,total\n");
}

#[test]
fn test_add_then_add_again_sums_counts() {
    let (_dir, data) = setup_data_file("add_sum");
    let day = this_december(1);

    pl_with(&data, &["add", &day, "-m", "10", "-a", "5"])
        .assert()
        .success()
        .stdout(contains("total 15"));

    pl_with(&data, &["add", &day, "-m", "2", "-e", "3"])
        .assert()
        .success()
        .stdout(contains("Existing record"))
        .stdout(contains("total 20"));

    assert!(read(&data).contains(&format!("{day},12,5,3,20")));
}

#[test]
fn test_add_outside_december_is_rejected() {
    let (_dir, data) = setup_data_file("add_range");
    let day = this_december(3);
    pl_with(&data, &["add", &day, "-m", "1"]).assert().success();
    let before = read(&data);

    let november = this_december(1).replace("-12-", "-11-");
    pl_with(&data, &["add", &november, "-m", "5"])
        .assert()
        .failure()
        .stderr(contains("outside the accepted range"));

    assert_eq!(read(&data), before);
}

#[test]
fn test_add_with_bad_date_fails() {
    let (_dir, data) = setup_data_file("add_bad_date");

    pl_with(&data, &["add", "12/01", "-m", "5"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_zero_warns_and_saves() {
    let (_dir, data) = setup_data_file("add_zero");
    let day = this_december(24);

    pl_with(&data, &["add", &day])
        .assert()
        .success()
        .stdout(contains("is 0"));

    assert!(read(&data).contains(&format!("{day},0,0,0,0")));
}

#[test]
fn test_set_replaces_values() {
    let (_dir, data) = setup_data_file("set");
    let day = this_december(2);
    pl_with(&data, &["add", &day, "-m", "10", "-a", "5"])
        .assert()
        .success();

    pl_with(&data, &["set", &day, "-m", "99", "-a", "5"])
        .assert()
        .success();

    assert!(read(&data).contains(&format!("{day},99,5,0,104")));
}

#[test]
fn test_del_removes_row() {
    let (_dir, data) = setup_data_file("del");
    let keep = this_december(1);
    let gone = this_december(5);
    pl_with(&data, &["add", &keep, "-m", "1"]).assert().success();
    pl_with(&data, &["add", &gone, "-m", "1"]).assert().success();

    pl_with(&data, &["del", &gone, "--yes"]).assert().success();

    let content = read(&data);
    assert!(content.contains(&keep));
    assert!(!content.contains(&gone));
}

#[test]
fn test_del_cancelled_keeps_row() {
    let (_dir, data) = setup_data_file("del_cancel");
    let day = this_december(6);
    pl_with(&data, &["add", &day, "-m", "1"]).assert().success();

    pl_with(&data, &["del", &day])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    assert!(read(&data).contains(&day));
}

#[test]
fn test_import_replaces_table_and_recomputes_totals() {
    let (dir, data) = setup_data_file("import");
    pl_with(&data, &["add", &this_december(9), "-m", "7"])
        .assert()
        .success();

    let src = dir.path().join("edited.csv");
    fs::write(
        &src,
        "\u{feff}date,morning,afternoon,evening,total\n2024-12-01,99,5,0,15\n",
    )
    .unwrap();

    pl_with(&data, &["import", "--from", src.to_str().unwrap(), "--yes"])
        .assert()
        .success();

    let content = read(&data);
    assert!(content.contains("2024-12-01,99,5,0,104"));
    assert!(!content.contains(&this_december(9)));
}

#[test]
fn test_import_with_duplicate_dates_fails() {
    let (dir, data) = setup_data_file("import_dup");
    let src = dir.path().join("dup.csv");
    fs::write(
        &src,
        "date,morning,afternoon,evening,total\n2024-12-01,1,0,0,1\n2024-12-01,2,0,0,2\n",
    )
    .unwrap();

    pl_with(&data, &["import", "--from", src.to_str().unwrap(), "--yes"])
        .assert()
        .failure()
        .stderr(contains("more than once"));
}

#[cfg(unix)]
#[test]
fn test_edit_unchanged_reports_no_changes() {
    let (_dir, data) = setup_data_file("edit_noop");
    pl_with(&data, &["add", &this_december(4), "-m", "4"])
        .assert()
        .success();

    pl_with(&data, &["edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("No changes"));
}

#[cfg(unix)]
#[test]
fn test_edit_applies_editor_changes() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, data) = setup_data_file("edit_apply");
    pl_with(&data, &["add", &this_december(4), "-m", "4"])
        .assert()
        .success();

    // "editor" that swaps the table for a single hand-written row
    let script = dir.path().join("fake_editor.sh");
    fs::write(
        &script,
        "#!/bin/sh\nprintf 'date,morning,afternoon,evening,total\\n2024-12-20,1,2,3,0\\n' > \"$1\"\n",
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    pl_with(&data, &["edit", "--editor", script.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Table saved"));

    assert_eq!(
        read(&data),
        "date,morning,afternoon,evening,total\n2024-12-20,1,2,3,6\n"
    );
}

#[test]
fn test_list_and_chart() {
    let (_dir, data) = setup_data_file("list");
    let a = this_december(1);
    let b = this_december(2);
    pl_with(&data, &["add", &a, "-m", "10"]).assert().success();
    pl_with(&data, &["add", &b, "-e", "20"]).assert().success();

    pl_with(&data, &["list", "--chart"])
        .assert()
        .success()
        .stdout(contains(a.as_str()))
        .stdout(contains(b.as_str()))
        .stdout(contains("Daily totals"))
        .stdout(contains("█"));
}

#[test]
fn test_list_empty() {
    let (_dir, data) = setup_data_file("list_empty");

    pl_with(&data, &["list"])
        .assert()
        .success()
        .stdout(contains("No records yet"));
}

#[test]
fn test_stats_json() {
    let (_dir, data) = setup_data_file("stats_json");
    pl_with(&data, &["add", &this_december(1), "-m", "10", "-a", "5"])
        .assert()
        .success();
    pl_with(&data, &["add", &this_december(2), "-e", "5"])
        .assert()
        .success();

    let out = pl_with(&data, &["stats", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");

    assert_eq!(v["total"], 20);
    assert_eq!(v["record_days"], 2);
    assert_eq!(v["best"]["total"], 15);
    assert_eq!(v["slot_max"]["evening"], 5);
}

#[test]
fn test_stats_text() {
    let (_dir, data) = setup_data_file("stats_text");
    pl_with(&data, &["add", &this_december(1), "-m", "10"])
        .assert()
        .success();

    pl_with(&data, &["stats"])
        .assert()
        .success()
        .stdout(contains("Weekly totals"))
        .stdout(contains("Best day"));
}

#[test]
fn test_corrupt_data_file_still_lists() {
    let (_dir, data) = setup_data_file("corrupt_list");
    fs::write(&data, "this is not,a table\n\"broken").unwrap();

    pl_with(&data, &["list"])
        .assert()
        .success()
        .stderr(contains("Failed to load"))
        .stdout(contains("No records yet"));
}

/// Shell script standing in for an editor: replaces the file with `body`.
#[cfg(unix)]
fn fake_editor(dir: &std::path::Path, name: &str, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join(name);
    fs::write(&script, format!("#!/bin/sh\nprintf '{body}' > \"$1\"\n")).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script.to_string_lossy().to_string()
}

#[cfg(unix)]
#[test]
fn test_edit_accepts_file_saved_with_bom() {
    let (dir, data) = setup_data_file("edit_bom");
    pl_with(&data, &["add", &this_december(4), "-m", "4"])
        .assert()
        .success();

    let editor = fake_editor(
        dir.path(),
        "bom_editor.sh",
        "\\357\\273\\277date,morning,afternoon,evening,total\\n2024-12-20,1,2,3,6\\n",
    );

    pl_with(&data, &["edit", "--editor", &editor])
        .assert()
        .success()
        .stdout(contains("Table saved"));

    assert_eq!(
        read(&data),
        "date,morning,afternoon,evening,total\n2024-12-20,1,2,3,6\n"
    );
}

#[cfg(unix)]
#[test]
fn test_edit_failed_save_reports_kept_edits() {
    let (dir, data) = setup_data_file("edit_save_fail");
    pl_with(&data, &["add", &this_december(4), "-m", "4"])
        .assert()
        .success();
    let before = read(&data);

    // a directory where the temporary save file would go makes the save fail
    fs::create_dir(dir.path().join(".edit_save_fail_records.csv.tmp")).unwrap();

    let editor = fake_editor(
        dir.path(),
        "save_fail_editor.sh",
        "date,morning,afternoon,evening,total\\n2024-12-20,1,2,3,6\\n",
    );

    let out = pl_with(&data, &["edit", "--editor", &editor])
        .assert()
        .failure()
        .stderr(contains("Failed to save"))
        .stdout(contains("Your edits are kept in"))
        .get_output()
        .stdout
        .clone();

    assert_eq!(read(&data), before);

    let stdout = String::from_utf8(out).unwrap();
    let kept = stdout
        .lines()
        .find_map(|l| l.split("Your edits are kept in ").nth(1))
        .unwrap()
        .trim();
    assert!(fs::read_to_string(kept).unwrap().contains("2024-12-20,1,2,3,6"));
    fs::remove_file(kept).unwrap();
}
