use std::{sync::Arc, time::Duration};

use anyhow::Result;
use chrono::Local;
use log::{error, info};
use tokio::{sync::Mutex, task::JoinHandle, time};
use uuid::Uuid;

use crate::{
    aggregate::merge_into,
    config::TimerSettings,
    models::IntervalResult,
    notify::Notifier,
    reports::{self, DailySummary, MonthlySummary, YearlySummary},
    store::{dump_json, LogStore},
};

use super::{TimerEvent, TimerSession};

const BREAK_DUE_MESSAGE: &str = "Time to take a short break!";
const BREAK_OVER_MESSAGE: &str = "Break over, time to focus!";
const PERSIST_FAILED_MESSAGE: &str = "Could not save your activity log.";

/// Drives the state machine from a real clock: owns the shared session, the
/// once-per-second ticker task, and the store/notifier collaborators. All
/// session updates happen under one lock, so tick and activity handling stay
/// serialized.
#[derive(Clone)]
pub struct TimerController {
    session: Arc<Mutex<TimerSession>>,
    store: Arc<dyn LogStore>,
    notifier: Arc<dyn Notifier>,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
    tick_interval: Duration,
}

impl TimerController {
    pub fn new(
        settings: TimerSettings,
        store: Arc<dyn LogStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(TimerSession::new(settings))),
            store,
            notifier,
            ticker: Arc::new(Mutex::new(None)),
            tick_interval: Duration::from_secs(1),
        }
    }

    /// Shorten the tick quantum. Intended for tests; the default is 1 second.
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub async fn snapshot(&self) -> TimerSession {
        self.session.lock().await.clone()
    }

    /// Typing-activity signal from the host. Starts the ticker when a fresh
    /// work phase begins; otherwise a no-op.
    pub async fn signal_activity(&self) {
        let started = { self.session.lock().await.on_activity() };
        if started.is_some() {
            let interval_id = Uuid::new_v4().to_string();
            info!("Activity detected; starting work interval {interval_id}");
            self.spawn_ticker(interval_id).await;
        }
    }

    pub async fn pause(&self) {
        self.session.lock().await.pause();
    }

    pub async fn resume(&self) {
        self.session.lock().await.resume();
    }

    /// Return to idle and stop the ticker so no stale tick can finalize the
    /// abandoned phase.
    pub async fn reset(&self) {
        self.cancel_ticker().await;
        self.session.lock().await.reset();
    }

    /// Apply new settings. The running phase (if any) is discarded.
    pub async fn update_settings(&self, settings: TimerSettings) {
        self.cancel_ticker().await;
        self.session.lock().await.set_settings(settings);
    }

    pub fn clear_logs(&self) -> Result<()> {
        self.store.clear()
    }

    /// Pretty-printed dump of the whole store for inspection.
    pub fn dump_logs(&self) -> Result<String> {
        dump_json(self.store.as_ref())
    }

    pub fn daily_report(&self) -> Result<Option<DailySummary>> {
        let logs = self.store.load()?;
        Ok(reports::daily(&logs, Local::now()))
    }

    pub fn monthly_report(&self) -> Result<MonthlySummary> {
        let logs = self.store.load()?;
        Ok(reports::monthly(&logs, Local::now()))
    }

    pub fn yearly_report(&self) -> Result<YearlySummary> {
        let logs = self.store.load()?;
        Ok(reports::yearly(&logs, Local::now()))
    }

    async fn spawn_ticker(&self, interval_id: String) {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some(handle) = ticker_guard.take() {
            handle.abort();
        }

        let session = self.session.clone();
        let store = self.store.clone();
        let notifier = self.notifier.clone();
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(tick_interval);
            // the first tick completes immediately; the quantum starts now
            interval.tick().await;

            loop {
                interval.tick().await;

                let (events, sound_enabled) = {
                    let mut guard = session.lock().await;
                    if !guard.is_active() {
                        // phase changed under us (reset or completion); stop
                        break;
                    }
                    let sound_enabled = guard.settings().sound_enabled;
                    (guard.on_tick(Local::now()), sound_enabled)
                };

                for event in events {
                    match event {
                        TimerEvent::WorkCompleted(result) => {
                            info!(
                                "Work interval {interval_id} completed after {}s",
                                result.total_seconds
                            );
                            finalize_interval(
                                store.as_ref(),
                                notifier.as_ref(),
                                &result,
                                sound_enabled,
                                BREAK_DUE_MESSAGE,
                            );
                        }
                        TimerEvent::BreakStarted => {
                            info!("Break interval {interval_id} started");
                        }
                        TimerEvent::BreakCompleted(result) => {
                            info!(
                                "Break interval {interval_id} completed after {}s",
                                result.total_seconds
                            );
                            finalize_interval(
                                store.as_ref(),
                                notifier.as_ref(),
                                &result,
                                sound_enabled,
                                BREAK_OVER_MESSAGE,
                            );
                        }
                        TimerEvent::WorkStarted => {}
                    }
                }
            }
        });

        *ticker_guard = Some(handle);
    }

    async fn cancel_ticker(&self) {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
        }
    }
}

/// Merge a completed interval into the store and tell the user. A persistence
/// failure is logged and notified but never unwinds into the tick loop; the
/// phase transition already happened.
fn finalize_interval(
    store: &dyn LogStore,
    notifier: &dyn Notifier,
    result: &IntervalResult,
    sound_enabled: bool,
    message: &str,
) {
    if let Err(err) = persist_interval(store, result) {
        error!("Failed to persist interval for {}: {err:#}", result.date);
        notifier.notify(PERSIST_FAILED_MESSAGE);
    }

    if sound_enabled {
        notifier.chime();
    }
    notifier.notify(message);
}

fn persist_interval(store: &dyn LogStore, result: &IntervalResult) -> Result<()> {
    let mut logs = store.load()?;
    merge_into(&mut logs, result);
    store.save(&logs)
}
