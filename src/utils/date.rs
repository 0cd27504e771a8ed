use chrono::{NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `YYYY-MM-DD`, used for command-line input.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Date column of a data file: `YYYY-MM-DD`, or a timestamp whose time part
/// is dropped (files written by spreadsheet tools often carry one).
pub fn parse_stored_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Some(d) = parse_date(s) {
        return Some(d);
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// `YYYYMMDD`, used in export file names.
pub fn compact(d: NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}

/// Three-letter weekday name ("Mon", "Tue", ...).
pub fn weekday_short(d: NaiveDate) -> String {
    d.format("%a").to_string()
}
