//! Read-only roll-ups over the daily log: totals plus chartable bucket
//! series for daily (24 hours), monthly (one bucket per calendar day) and
//! yearly (12 months) views. Total functions — an empty store yields zeroed
//! summaries, never an error.

use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::models::{date_key, HOURS_PER_DAY};
use crate::store::LogMap;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parallel label/value arrays shaped for a bar chart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSeries {
    pub labels: Vec<String>,
    pub coding_seconds: Vec<u64>,
    pub break_seconds: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: String,
    pub coding_seconds: u64,
    pub coding_minutes: u64,
    pub breaks_taken: u64,
    pub break_seconds: u64,
    pub break_minutes: u64,
    pub series: ReportSeries,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub year_month: String,
    pub coding_seconds: u64,
    pub coding_minutes: u64,
    pub breaks_taken: u64,
    pub break_seconds: u64,
    pub break_minutes: u64,
    pub series: ReportSeries,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YearlySummary {
    pub year: String,
    pub coding_seconds: u64,
    pub coding_minutes: u64,
    pub breaks_taken: u64,
    pub break_seconds: u64,
    pub break_minutes: u64,
    pub series: ReportSeries,
}

/// Today's record, or `None` when nothing was logged today. The series has
/// one bucket per hour of the day.
pub fn daily(logs: &LogMap, now: DateTime<Local>) -> Option<DailySummary> {
    let key = date_key(now);
    let record = logs.get(&key)?;

    let break_seconds = record.break_seconds();

    let mut series = ReportSeries {
        labels: Vec::with_capacity(HOURS_PER_DAY),
        coding_seconds: Vec::with_capacity(HOURS_PER_DAY),
        break_seconds: Vec::with_capacity(HOURS_PER_DAY),
    };
    for hour in 0..HOURS_PER_DAY {
        series.labels.push(format!("{hour:02}"));
        series
            .coding_seconds
            .push(record.hourly_seconds.get(hour).copied().unwrap_or(0));
        series
            .break_seconds
            .push(record.hourly_breaks.get(hour).copied().unwrap_or(0));
    }

    Some(DailySummary {
        date: key,
        coding_seconds: record.coding_seconds,
        coding_minutes: record.coding_seconds / 60,
        breaks_taken: record.breaks_taken,
        break_seconds,
        break_minutes: break_seconds / 60,
        series,
    })
}

/// Roll-up of every record sharing `now`'s year-month, with one bucket per
/// calendar day of that month (zero for days without a record).
pub fn monthly(logs: &LogMap, now: DateTime<Local>) -> MonthlySummary {
    let year_month = now.format("%Y-%m").to_string();

    let mut coding_seconds = 0u64;
    let mut breaks_taken = 0u64;
    let mut break_seconds = 0u64;
    for (date, record) in logs {
        if date.starts_with(&year_month) {
            coding_seconds = coding_seconds.saturating_add(record.coding_seconds);
            breaks_taken = breaks_taken.saturating_add(record.breaks_taken);
            break_seconds = break_seconds.saturating_add(record.break_seconds());
        }
    }

    let days = days_in_month(now.year(), now.month());
    let mut series = ReportSeries {
        labels: Vec::with_capacity(days as usize),
        coding_seconds: Vec::with_capacity(days as usize),
        break_seconds: Vec::with_capacity(days as usize),
    };
    for day in 1..=days {
        let key = format!("{year_month}-{day:02}");
        let record = logs.get(&key);
        series.labels.push(format!("{day:02}"));
        series
            .coding_seconds
            .push(record.map_or(0, |r| r.coding_seconds));
        series
            .break_seconds
            .push(record.map_or(0, |r| r.break_seconds()));
    }

    MonthlySummary {
        year_month,
        coding_seconds,
        coding_minutes: coding_seconds / 60,
        breaks_taken,
        break_seconds,
        break_minutes: break_seconds / 60,
        series,
    }
}

/// Roll-up of every record in `now`'s year, bucketed into 12 months.
pub fn yearly(logs: &LogMap, now: DateTime<Local>) -> YearlySummary {
    let year = now.format("%Y").to_string();

    let mut coding_seconds = 0u64;
    let mut breaks_taken = 0u64;
    let mut break_seconds = 0u64;
    let mut monthly_coding = [0u64; 12];
    let mut monthly_breaks = [0u64; 12];

    for (date, record) in logs {
        if !date.starts_with(&year) {
            continue;
        }
        // skip keys that are not real dates rather than failing the report
        let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
            continue;
        };
        let month = parsed.month0() as usize;

        let record_breaks = record.break_seconds();
        coding_seconds = coding_seconds.saturating_add(record.coding_seconds);
        breaks_taken = breaks_taken.saturating_add(record.breaks_taken);
        break_seconds = break_seconds.saturating_add(record_breaks);
        monthly_coding[month] = monthly_coding[month].saturating_add(record.coding_seconds);
        monthly_breaks[month] = monthly_breaks[month].saturating_add(record_breaks);
    }

    let series = ReportSeries {
        labels: MONTH_LABELS.iter().map(|label| label.to_string()).collect(),
        coding_seconds: monthly_coding.to_vec(),
        break_seconds: monthly_breaks.to_vec(),
    };

    YearlySummary {
        year,
        coding_seconds,
        coding_minutes: coding_seconds / 60,
        breaks_taken,
        break_seconds,
        break_minutes: break_seconds / 60,
        series,
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}
