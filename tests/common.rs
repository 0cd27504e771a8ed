#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Datelike, NaiveDate};
use pushlog::models::{DailyRecord, RecordTable, SlotCounts};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn pl() -> Command {
    cargo_bin_cmd!("pushlog")
}

/// Fresh temp dir plus the path of a (not yet created) data file inside it.
pub fn setup_data_file(name: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path: PathBuf = dir.path().join(format!("{name}_records.csv"));
    (dir, path.to_string_lossy().to_string())
}

/// `pushlog --test --file <path> <args...>`
pub fn pl_with(data: &str, args: &[&str]) -> Command {
    let mut cmd = pl();
    cmd.args(["--test", "--file", data]).args(args);
    cmd
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

/// `YYYY-12-DD` of the current local year, the only range `add` accepts.
pub fn this_december(day: u32) -> String {
    let year = chrono::Local::now().year();
    format!("{year}-12-{day:02}")
}

pub fn record(date: NaiveDate, m: u32, a: u32, e: u32) -> DailyRecord {
    DailyRecord::from_counts(date, SlotCounts::new(m, a, e)).expect("no overflow")
}

pub fn table(rows: Vec<DailyRecord>) -> RecordTable {
    RecordTable::from_records(rows)
}

pub fn read(path: &str) -> String {
    fs::read_to_string(path).expect("read file")
}
