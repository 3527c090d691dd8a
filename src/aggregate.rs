//! Merges completed interval results into the date-keyed daily log.

use crate::models::{DailyRecord, IntervalKind, IntervalResult};
use crate::store::LogMap;

/// Fold one completed interval into a day's record. Every field is a plain
/// saturating sum, so merges for the same date commute. Merging the same
/// result twice double-counts; the state machine emits each result once.
pub fn merge(record: &mut DailyRecord, result: &IntervalResult) {
    record.normalize();

    let hour = result.completed_at_hour as usize;
    let minute = result.completed_at_minute as usize;

    match result.kind {
        IntervalKind::Work => {
            record.coding_seconds = record.coding_seconds.saturating_add(result.total_seconds);
            record.hourly_seconds[hour] =
                record.hourly_seconds[hour].saturating_add(result.total_seconds);
            record.minute_logs[minute] =
                record.minute_logs[minute].saturating_add(result.total_seconds);
        }
        IntervalKind::Break => {
            record.breaks_taken = record.breaks_taken.saturating_add(1);
            record.hourly_breaks[hour] =
                record.hourly_breaks[hour].saturating_add(result.total_seconds);
            record.minute_breaks[minute] =
                record.minute_breaks[minute].saturating_add(result.total_seconds);
        }
    }
}

/// Merge into the whole store mapping, zero-filling a fresh record the first
/// time a date is seen. The record is replaced wholesale under its key.
pub fn merge_into(logs: &mut LogMap, result: &IntervalResult) {
    let record = logs
        .entry(result.date.clone())
        .or_insert_with(|| DailyRecord::new(result.date.clone()));
    merge(record, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn work_at(hour: u32, minute: u32, seconds: u64) -> IntervalResult {
        let completed = Local.with_ymd_and_hms(2026, 8, 23, hour, minute, 0).unwrap();
        IntervalResult::new(IntervalKind::Work, seconds, completed)
    }

    fn break_at(hour: u32, minute: u32, seconds: u64) -> IntervalResult {
        let completed = Local.with_ymd_and_hms(2026, 8, 23, hour, minute, 0).unwrap();
        IntervalResult::new(IntervalKind::Break, seconds, completed)
    }

    #[test]
    fn work_then_break_into_an_empty_date() {
        let mut logs = LogMap::new();
        merge_into(&mut logs, &work_at(9, 30, 120));
        merge_into(&mut logs, &break_at(9, 31, 60));

        let record = &logs["2026-08-23"];
        assert_eq!(record.coding_seconds, 120);
        assert_eq!(record.breaks_taken, 1);
        assert_eq!(record.hourly_seconds[9], 120);
        assert_eq!(record.hourly_breaks[9], 60);
        assert_eq!(record.minute_logs[30], 120);
        assert_eq!(record.minute_breaks[31], 60);
    }

    #[test]
    fn merge_order_does_not_matter() {
        let r1 = work_at(9, 30, 120);
        let r2 = work_at(10, 15, 300);
        let r3 = break_at(10, 20, 60);

        let mut forward = LogMap::new();
        for r in [&r1, &r2, &r3] {
            merge_into(&mut forward, r);
        }

        let mut backward = LogMap::new();
        for r in [&r3, &r2, &r1] {
            merge_into(&mut backward, r);
        }

        assert_eq!(forward, backward);
    }

    #[test]
    fn repeated_merges_accumulate() {
        let mut record = DailyRecord::new("2026-08-23");
        merge(&mut record, &work_at(9, 30, 120));
        merge(&mut record, &work_at(9, 30, 120));

        assert_eq!(record.coding_seconds, 240);
        assert_eq!(record.hourly_seconds[9], 240);
    }

    #[test]
    fn merge_tolerates_truncated_histograms() {
        let mut record = DailyRecord::new("2026-08-23");
        record.hourly_seconds.truncate(2);
        record.minute_logs.clear();

        merge(&mut record, &work_at(23, 59, 10));

        assert_eq!(record.hourly_seconds[23], 10);
        assert_eq!(record.minute_logs[59], 10);
    }
}
