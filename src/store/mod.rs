mod json;
mod memory;

pub use json::JsonLogStore;
pub use memory::MemoryLogStore;

use std::collections::BTreeMap;

use anyhow::Result;

use crate::models::DailyRecord;

/// The whole persisted log: one mapping from `YYYY-MM-DD` to that day's
/// aggregate record.
pub type LogMap = BTreeMap<String, DailyRecord>;

/// Persistence seam for the daily log. Load and save move the entire mapping,
/// so callers never depend on partial-field updates being visible.
pub trait LogStore: Send + Sync {
    fn load(&self) -> Result<LogMap>;
    fn save(&self, logs: &LogMap) -> Result<()>;

    /// Replace the store with an empty mapping.
    fn clear(&self) -> Result<()> {
        self.save(&LogMap::new())
    }
}

/// On-demand dump of the entire store for inspection.
pub fn dump_json(store: &dyn LogStore) -> Result<String> {
    let logs = store.load()?;
    Ok(serde_json::to_string_pretty(&logs)?)
}
