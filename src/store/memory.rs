use std::sync::RwLock;

use anyhow::Result;

use super::{LogMap, LogStore};

/// In-memory log store, used in tests and anywhere durability is not needed.
#[derive(Default)]
pub struct MemoryLogStore {
    logs: RwLock<LogMap>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogStore for MemoryLogStore {
    fn load(&self) -> Result<LogMap> {
        Ok(self.logs.read().unwrap().clone())
    }

    fn save(&self, logs: &LogMap) -> Result<()> {
        *self.logs.write().unwrap() = logs.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyRecord;

    #[test]
    fn behaves_like_a_store() {
        let store = MemoryLogStore::new();
        assert!(store.load().unwrap().is_empty());

        let mut logs = LogMap::new();
        logs.insert("2026-08-23".into(), DailyRecord::new("2026-08-23"));
        store.save(&logs).unwrap();
        assert_eq!(store.load().unwrap(), logs);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
