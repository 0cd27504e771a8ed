use crate::core::merge::{self, Mutation, Warning};
use crate::core::window::SubmitWindow;
use crate::errors::AppResult;
use crate::models::RecordTable;
use crate::store::{RecordStore, TableCache};
use tracing::{info, instrument, warn};

/// Outcome of a successful [`Session::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub table: RecordTable,
    pub warnings: Vec<Warning>,
}

/// One user session over the record store.
///
/// Every mutation runs the same cycle: read (cached) → validate → merge →
/// save → invalidate. A failure at any step leaves both the file and the
/// cache as they were.
pub struct Session {
    store: RecordStore,
    cache: TableCache,
    window: SubmitWindow,
}

impl Session {
    pub fn new(store: RecordStore, window: SubmitWindow) -> Self {
        Self {
            store,
            cache: TableCache::new(),
            window,
        }
    }

    pub fn cache(&self) -> &TableCache {
        &self.cache
    }

    /// Current table, loaded from storage on first use.
    pub fn table(&mut self) -> &RecordTable {
        self.cache.get_or_load(&self.store)
    }

    /// Validates, merges and persists `mutation`.
    ///
    /// The mutation is borrowed so a caller can retry after a save failure.
    #[instrument(skip_all, fields(kind = mutation.name()))]
    pub fn apply(&mut self, mutation: &Mutation) -> AppResult<Applied> {
        if let Mutation::Submit(sub) = mutation {
            self.window.check(sub.date)?;
        }

        let merged = merge::apply(self.table(), mutation)?;

        for w in &merged.warnings {
            warn!(warning = %w, "merge warning");
        }

        self.store.save(&merged.table)?;
        self.cache.invalidate();

        info!(rows = merged.table.len(), "mutation applied");
        Ok(Applied {
            table: merged.table,
            warnings: merged.warnings,
        })
    }
}
