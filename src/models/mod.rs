pub mod record;
pub mod slot;
pub mod table;

pub use record::{DailyRecord, SlotCounts};
pub use slot::Slot;
pub use table::RecordTable;
