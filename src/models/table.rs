use super::record::DailyRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Ordered collection of daily records, unique by date.
///
/// Uniqueness is maintained by the merger and the store; the table itself
/// only offers the lookups they need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordTable {
    records: Vec<DailyRecord>,
}

impl RecordTable {
    /// Column set of the persisted table, in file order.
    pub const COLUMNS: [&'static str; 5] = ["date", "morning", "afternoon", "evening", "total"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `records` as given; no sorting or deduplication happens here.
    pub fn from_records(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [DailyRecord] {
        &mut self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    pub(crate) fn get_mut(&mut self, date: NaiveDate) -> Option<&mut DailyRecord> {
        self.records.iter_mut().find(|r| r.date == date)
    }

    pub fn push(&mut self, record: DailyRecord) {
        self.records.push(record);
    }

    /// Removes the row for `date`, returning it when present.
    pub fn remove(&mut self, date: NaiveDate) -> Option<DailyRecord> {
        let idx = self.records.iter().position(|r| r.date == date)?;
        Some(self.records.remove(idx))
    }

    /// Stable sort ascending by date.
    pub fn sort_by_date(&mut self) {
        self.records.sort_by_key(|r| r.date);
    }

    /// First date that occurs more than once, if any.
    pub fn first_duplicate(&self) -> Option<NaiveDate> {
        let mut seen = std::collections::HashSet::with_capacity(self.records.len());
        self.records
            .iter()
            .map(|r| r.date)
            .find(|d| !seen.insert(*d))
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
