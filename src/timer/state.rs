use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::config::TimerSettings;
use crate::models::{IntervalKind, IntervalResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    #[default]
    Idle,
    Working,
    Break,
}

/// Transition outcomes surfaced to the controller. Completed-interval events
/// carry the finalized result for the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    WorkStarted,
    WorkCompleted(IntervalResult),
    BreakStarted,
    BreakCompleted(IntervalResult),
}

/// The timer state machine. Advances only on two inbound messages — an
/// activity signal and a once-per-second tick — so it stays pure and
/// unit-testable without a real clock (`now` is injected for completion
/// stamping).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSession {
    pub phase: Phase,
    pub elapsed_seconds: u64,
    pub paused: bool,
    settings: TimerSettings,
}

impl TimerSession {
    pub fn new(settings: TimerSettings) -> Self {
        Self {
            phase: Phase::Idle,
            elapsed_seconds: 0,
            paused: false,
            settings: settings.sanitized(),
        }
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    /// Swap in new settings. They take effect only for phases started
    /// afterwards; the running phase is discarded rather than recomputed.
    pub fn set_settings(&mut self, settings: TimerSettings) {
        self.settings = settings.sanitized();
        self.reset();
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Typing activity. Starts a work phase from idle; ignored while a break
    /// is running, and a no-op while already working so concurrent activity
    /// signals cannot stack duplicate timers.
    pub fn on_activity(&mut self) -> Option<TimerEvent> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Working;
                self.elapsed_seconds = 0;
                self.paused = false;
                Some(TimerEvent::WorkStarted)
            }
            Phase::Working | Phase::Break => None,
        }
    }

    /// One quantum of elapsed time. Ticks while paused or idle are guarded
    /// no-ops, so a stale tick delivered after a phase ended cannot fire a
    /// second completion.
    pub fn on_tick(&mut self, now: DateTime<Local>) -> Vec<TimerEvent> {
        if self.paused {
            return Vec::new();
        }

        match self.phase {
            Phase::Idle => Vec::new(),
            Phase::Working => {
                self.elapsed_seconds += 1;
                if self.elapsed_seconds >= self.settings.work_duration_secs() {
                    let result =
                        IntervalResult::new(IntervalKind::Work, self.elapsed_seconds, now);
                    self.phase = Phase::Break;
                    self.elapsed_seconds = 0;
                    self.paused = false;
                    vec![TimerEvent::WorkCompleted(result), TimerEvent::BreakStarted]
                } else {
                    Vec::new()
                }
            }
            Phase::Break => {
                self.elapsed_seconds += 1;
                if self.elapsed_seconds >= self.settings.break_duration_secs() {
                    let result =
                        IntervalResult::new(IntervalKind::Break, self.elapsed_seconds, now);
                    // The next work phase begins only on a fresh activity
                    // signal; breaks never auto-restart working.
                    self.phase = Phase::Idle;
                    self.elapsed_seconds = 0;
                    self.paused = false;
                    vec![TimerEvent::BreakCompleted(result)]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Freeze the elapsed counter. No-op from idle.
    pub fn pause(&mut self) {
        if self.phase != Phase::Idle {
            self.paused = true;
        }
    }

    /// Continue from the frozen counter. Only clears a flag that is set.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
        }
    }

    /// Force-transition to idle from any state, zeroing transient counters.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.elapsed_seconds = 0;
        self.paused = false;
    }
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}
