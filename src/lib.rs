//! Core of a developer work/break cadence tracker: a tick-driven timer state
//! machine (idle → working → break), a log aggregator that merges completed
//! intervals into a persisted date-keyed daily log, and read-only
//! daily/monthly/yearly report roll-ups.
//!
//! The editor shell, sound playback and chart rendering stay outside this
//! crate behind the [`notify::Notifier`] and [`store::LogStore`] seams.

pub mod aggregate;
pub mod config;
pub mod models;
pub mod notify;
pub mod reports;
pub mod store;
pub mod timer;

pub use config::TimerSettings;
pub use models::{DailyRecord, IntervalKind, IntervalResult};
pub use notify::{LogNotifier, Notifier, NullNotifier};
pub use reports::{DailySummary, MonthlySummary, ReportSeries, YearlySummary};
pub use store::{JsonLogStore, LogMap, LogStore, MemoryLogStore};
pub use timer::{Phase, TimerController, TimerEvent, TimerSession};
