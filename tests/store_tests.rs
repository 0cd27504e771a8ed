mod common;
use common::{d, read, record, setup_data_file, table};
use pushlog::errors::AppError;
use pushlog::models::RecordTable;
use pushlog::store::{RecordStore, TableCache, codec};
use std::fs;

#[test]
fn test_open_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("records.csv");

    let store = RecordStore::open(&path).unwrap();
    assert!(path.parent().unwrap().is_dir());
    assert!(!store.exists());

    // second open over the same location is fine
    RecordStore::open(&path).unwrap();
}

#[test]
fn test_missing_file_loads_empty_table() {
    let (_dir, path) = setup_data_file("missing");
    let store = RecordStore::open(&path).unwrap();

    assert!(store.load().is_empty());
    assert!(store.try_load().unwrap().is_empty());
}

#[test]
fn test_save_then_load_round_trips() {
    let (_dir, path) = setup_data_file("round_trip");
    let store = RecordStore::open(&path).unwrap();
    let t = table(vec![
        record(d(2024, 12, 1), 10, 5, 0),
        record(d(2024, 12, 7), 0, 20, 15),
    ]);

    store.save(&t).unwrap();

    assert_eq!(store.load(), t);
    assert_eq!(
        read(&path),
        "date,morning,afternoon,evening,total\n2024-12-01,10,5,0,15\n2024-12-07,0,20,15,35\n"
    );
}

#[test]
fn test_empty_table_keeps_header() {
    let (_dir, path) = setup_data_file("empty_header");
    let store = RecordStore::open(&path).unwrap();

    store.save(&RecordTable::new()).unwrap();

    assert_eq!(read(&path), "date,morning,afternoon,evening,total\n");
    assert!(store.load().is_empty());
}

#[test]
fn test_save_replaces_previous_content() {
    let (_dir, path) = setup_data_file("replace");
    let store = RecordStore::open(&path).unwrap();

    store
        .save(&table(vec![record(d(2024, 12, 5), 1, 1, 1)]))
        .unwrap();
    store
        .save(&table(vec![record(d(2024, 12, 1), 2, 2, 2)]))
        .unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.get(d(2024, 12, 5)).is_none());
}

#[test]
fn test_corrupt_file_is_reported_and_treated_as_empty() {
    let (_dir, path) = setup_data_file("corrupt");
    fs::write(&path, "date,morning,afternoon,evening,total\nnot-a-date,1,2,3,6\n").unwrap();
    let store = RecordStore::open(&path).unwrap();

    assert!(matches!(store.try_load(), Err(AppError::Load { .. })));
    assert!(store.load().is_empty());
}

#[test]
fn test_negative_count_is_a_load_error() {
    let (_dir, path) = setup_data_file("negative");
    fs::write(&path, "date,morning,afternoon,evening,total\n2024-12-01,-1,0,0,-1\n").unwrap();
    let store = RecordStore::open(&path).unwrap();

    assert!(store.try_load().is_err());
}

#[test]
fn test_load_normalizes_hand_edited_file() {
    let (_dir, path) = setup_data_file("normalize");
    fs::write(
        &path,
        "\u{feff}date,morning,afternoon,evening,total\n\
         2024-12-03 00:00:00,1,1,1,999\n\
         2024-12-01,2,0,0,2\n\
         2024-12-03,1,0,0,1\n",
    )
    .unwrap();
    let store = RecordStore::open(&path).unwrap();

    let t = store.try_load().unwrap();

    assert_eq!(
        t.records(),
        &[record(d(2024, 12, 1), 2, 0, 0), record(d(2024, 12, 3), 2, 1, 1)]
    );
}

#[test]
fn test_missing_total_column_is_derived() {
    let rows = codec::read_csv("date,morning,afternoon,evening\n2024-12-10,3,4,5\n".as_bytes())
        .unwrap();

    assert_eq!(rows.get(d(2024, 12, 10)).unwrap().total, 12);
}

#[test]
fn test_read_rows_keeps_duplicates_for_validation() {
    let rows = codec::read_rows(
        "date,morning,afternoon,evening,total\n2024-12-01,1,0,0,1\n2024-12-01,2,0,0,2\n"
            .as_bytes(),
    )
    .unwrap();

    assert_eq!(rows.len(), 2);
}

#[test]
fn test_failed_save_leaves_previous_file_untouched() {
    let (dir, path) = setup_data_file("atomic");
    let store = RecordStore::open(&path).unwrap();
    let original = table(vec![record(d(2024, 12, 1), 10, 5, 0)]);
    store.save(&original).unwrap();
    let before = read(&path);

    // a directory where the scratch file should go makes the write fail
    fs::create_dir(dir.path().join(".atomic_records.csv.tmp")).unwrap();

    let err = store
        .save(&table(vec![record(d(2024, 12, 2), 1, 1, 1)]))
        .unwrap_err();

    assert!(matches!(err, AppError::Save { .. }));
    assert_eq!(read(&path), before);
    assert_eq!(store.load(), original);
}

#[test]
fn test_cache_loads_once_until_invalidated() {
    let (_dir, path) = setup_data_file("cache");
    let store = RecordStore::open(&path).unwrap();
    store
        .save(&table(vec![record(d(2024, 12, 1), 1, 0, 0)]))
        .unwrap();

    let mut cache = TableCache::new();
    assert!(!cache.is_populated());

    assert_eq!(cache.get_or_load(&store).len(), 1);
    assert_eq!(cache.get_or_load(&store).len(), 1);
    assert_eq!(cache.load_count(), 1);

    // stale until invalidated
    store
        .save(&table(vec![
            record(d(2024, 12, 1), 1, 0, 0),
            record(d(2024, 12, 2), 1, 0, 0),
        ]))
        .unwrap();
    assert_eq!(cache.get_or_load(&store).len(), 1);

    cache.invalidate();
    assert!(!cache.is_populated());
    assert_eq!(cache.get_or_load(&store).len(), 2);
    assert_eq!(cache.load_count(), 2);
}
