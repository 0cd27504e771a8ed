use super::slot::Slot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three slot values of one day, without the date.
///
/// Used both as submission deltas (`add`) and as full values (`set`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotCounts {
    pub morning: u32,
    pub afternoon: u32,
    pub evening: u32,
}

impl SlotCounts {
    pub fn new(morning: u32, afternoon: u32, evening: u32) -> Self {
        Self {
            morning,
            afternoon,
            evening,
        }
    }

    pub fn get(&self, slot: Slot) -> u32 {
        match slot {
            Slot::Morning => self.morning,
            Slot::Afternoon => self.afternoon,
            Slot::Evening => self.evening,
        }
    }

    /// Sum of the three slots, `None` on overflow.
    pub fn checked_total(&self) -> Option<u32> {
        self.morning
            .checked_add(self.afternoon)?
            .checked_add(self.evening)
    }

    /// Element-wise sum, `None` on overflow.
    pub fn checked_add(&self, other: &SlotCounts) -> Option<SlotCounts> {
        Some(SlotCounts {
            morning: self.morning.checked_add(other.morning)?,
            afternoon: self.afternoon.checked_add(other.afternoon)?,
            evening: self.evening.checked_add(other.evening)?,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.morning == 0 && self.afternoon == 0 && self.evening == 0
    }
}

/// One row of the table: a date, its three slot counts and the derived total.
///
/// Field order matches the column order of the persisted CSV
/// (`date,morning,afternoon,evening,total`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,   // ⇔ "YYYY-MM-DD"
    pub morning: u32,
    pub afternoon: u32,
    pub evening: u32,
    pub total: u32,        // always morning + afternoon + evening
}

impl DailyRecord {
    /// Builds a record whose total is derived from `counts`.
    ///
    /// Returns `None` when the three counts overflow a `u32` once summed.
    pub fn from_counts(date: NaiveDate, counts: SlotCounts) -> Option<Self> {
        let total = counts.checked_total()?;
        Some(Self {
            date,
            morning: counts.morning,
            afternoon: counts.afternoon,
            evening: counts.evening,
            total,
        })
    }

    pub fn counts(&self) -> SlotCounts {
        SlotCounts::new(self.morning, self.afternoon, self.evening)
    }

    pub fn slot(&self, slot: Slot) -> u32 {
        self.counts().get(slot)
    }

    /// Re-derives `total` from the slots, discarding whatever was stored.
    pub fn recompute_total(&mut self) -> Option<u32> {
        self.total = self.counts().checked_total()?;
        Some(self.total)
    }

    pub fn is_consistent(&self) -> bool {
        self.counts().checked_total() == Some(self.total)
    }
}
