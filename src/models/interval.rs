use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

use super::record::date_key;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum IntervalKind {
    Work,
    Break,
}

/// Finalized outcome of one completed working or break phase. Produced by the
/// state machine exactly once per completion and consumed by the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntervalResult {
    pub kind: IntervalKind,
    pub date: String,
    pub total_seconds: u64,
    pub completed_at_hour: u32,
    pub completed_at_minute: u32,
}

impl IntervalResult {
    pub fn new(kind: IntervalKind, total_seconds: u64, completed_at: DateTime<Local>) -> Self {
        Self {
            kind,
            date: date_key(completed_at),
            total_seconds,
            completed_at_hour: completed_at.hour(),
            completed_at_minute: completed_at.minute(),
        }
    }
}
