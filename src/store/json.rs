use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::{LogMap, LogStore};

/// File-backed log store: the whole mapping lives in a single pretty-printed
/// JSON object, rewritten on every save.
pub struct JsonLogStore {
    path: PathBuf,
}

impl JsonLogStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl LogStore for JsonLogStore {
    fn load(&self) -> Result<LogMap> {
        if !self.path.exists() {
            return Ok(LogMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read logs from {}", self.path.display()))?;
        let mut logs: LogMap = serde_json::from_str(&contents)
            .with_context(|| format!("invalid log file {}", self.path.display()))?;

        for record in logs.values_mut() {
            record.normalize();
        }

        Ok(logs)
    }

    fn save(&self, logs: &LogMap) -> Result<()> {
        let serialized = serde_json::to_string_pretty(logs)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("failed to write logs to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::merge_into;
    use crate::models::{IntervalKind, IntervalResult};
    use chrono::{Local, TimeZone};
    use uuid::Uuid;

    fn temp_store() -> JsonLogStore {
        let path = std::env::temp_dir()
            .join(format!("devbalance-test-{}", Uuid::new_v4()))
            .join("history.json");
        JsonLogStore::new(path).unwrap()
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let store = temp_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_load_round_trip_preserves_the_mapping() {
        let store = temp_store();

        let completed = Local.with_ymd_and_hms(2026, 8, 23, 9, 30, 0).unwrap();
        let mut logs = LogMap::new();
        merge_into(
            &mut logs,
            &IntervalResult::new(IntervalKind::Work, 120, completed),
        );
        store.save(&logs).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, logs);

        // save(load()) is a no-op on the content
        store.save(&loaded).unwrap();
        assert_eq!(store.load().unwrap(), logs);
    }

    #[test]
    fn clear_replaces_with_an_empty_mapping() {
        let store = temp_store();

        let completed = Local.with_ymd_and_hms(2026, 8, 23, 9, 30, 0).unwrap();
        let mut logs = LogMap::new();
        merge_into(
            &mut logs,
            &IntervalResult::new(IntervalKind::Break, 60, completed),
        );
        store.save(&logs).unwrap();

        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn dump_contains_the_date_key() {
        let store = temp_store();

        let completed = Local.with_ymd_and_hms(2026, 8, 23, 9, 30, 0).unwrap();
        let mut logs = LogMap::new();
        merge_into(
            &mut logs,
            &IntervalResult::new(IntervalKind::Work, 120, completed),
        );
        store.save(&logs).unwrap();

        let dump = crate::store::dump_json(&store).unwrap();
        assert!(dump.contains("2026-08-23"));
        assert!(dump.contains("\"codingSeconds\": 120"));
    }

    #[test]
    fn corrupt_file_surfaces_an_error() {
        let store = temp_store();
        fs::write(store.path(), "not json").unwrap();
        assert!(store.load().is_err());
    }
}
