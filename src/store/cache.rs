use super::RecordStore;
use crate::models::RecordTable;
use tracing::debug;

/// Read cache in front of a [`RecordStore`].
///
/// Populated on the first `get_or_load`, dropped by `invalidate` after every
/// successful save, repopulated on the next read.
#[derive(Debug, Default)]
pub struct TableCache {
    table: Option<RecordTable>,
    loads: u32,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&mut self, store: &RecordStore) -> &RecordTable {
        let loads = &mut self.loads;
        self.table.get_or_insert_with(|| {
            *loads += 1;
            debug!(loads = *loads, "table cache miss");
            store.load()
        })
    }

    pub fn invalidate(&mut self) {
        if self.table.take().is_some() {
            debug!("table cache invalidated");
        }
    }

    pub fn is_populated(&self) -> bool {
        self.table.is_some()
    }

    /// Number of times the cache went to storage.
    pub fn load_count(&self) -> u32 {
        self.loads
    }
}
