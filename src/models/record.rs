use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: usize = 24;
pub const MINUTES_PER_HOUR: usize = 60;

/// Local-time calendar date key used throughout the log store (`YYYY-MM-DD`).
pub fn date_key(moment: DateTime<Local>) -> String {
    moment.format("%Y-%m-%d").to_string()
}

/// Persisted aggregate of all completed intervals for one calendar day.
///
/// The hourly/minute histograms attribute each interval wholly to the
/// hour/minute it completed in, so the buckets are not guaranteed to sum to
/// `coding_seconds` when an interval spans a boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: String,
    pub coding_seconds: u64,
    pub breaks_taken: u64,
    pub hourly_seconds: Vec<u64>,
    pub hourly_breaks: Vec<u64>,
    pub minute_logs: Vec<u64>,
    pub minute_breaks: Vec<u64>,
}

impl DailyRecord {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            coding_seconds: 0,
            breaks_taken: 0,
            hourly_seconds: vec![0; HOURS_PER_DAY],
            hourly_breaks: vec![0; HOURS_PER_DAY],
            minute_logs: vec![0; MINUTES_PER_HOUR],
            minute_breaks: vec![0; MINUTES_PER_HOUR],
        }
    }

    /// Pad histograms that came in short from an older or hand-edited store
    /// file, so bucket indexing never panics.
    pub fn normalize(&mut self) {
        if self.hourly_seconds.len() < HOURS_PER_DAY {
            self.hourly_seconds.resize(HOURS_PER_DAY, 0);
        }
        if self.hourly_breaks.len() < HOURS_PER_DAY {
            self.hourly_breaks.resize(HOURS_PER_DAY, 0);
        }
        if self.minute_logs.len() < MINUTES_PER_HOUR {
            self.minute_logs.resize(MINUTES_PER_HOUR, 0);
        }
        if self.minute_breaks.len() < MINUTES_PER_HOUR {
            self.minute_breaks.resize(MINUTES_PER_HOUR, 0);
        }
    }

    /// Total break seconds for the day, derived from the minute histogram.
    pub fn break_seconds(&self) -> u64 {
        self.minute_breaks.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_zero_filled() {
        let record = DailyRecord::new("2026-08-23");
        assert_eq!(record.coding_seconds, 0);
        assert_eq!(record.breaks_taken, 0);
        assert_eq!(record.hourly_seconds, vec![0; 24]);
        assert_eq!(record.minute_breaks, vec![0; 60]);
    }

    #[test]
    fn normalize_pads_short_histograms() {
        let mut record = DailyRecord::new("2026-08-23");
        record.hourly_seconds.truncate(3);
        record.minute_breaks.truncate(10);

        record.normalize();

        assert_eq!(record.hourly_seconds.len(), HOURS_PER_DAY);
        assert_eq!(record.minute_breaks.len(), MINUTES_PER_HOUR);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = DailyRecord::new("2026-08-23");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"codingSeconds\""));
        assert!(json.contains("\"breaksTaken\""));
        assert!(json.contains("\"hourlySeconds\""));
        assert!(json.contains("\"minuteLogs\""));
    }
}
