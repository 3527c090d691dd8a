use serde::{Deserialize, Serialize};

pub const DEFAULT_WORK_MINUTES: u32 = 30;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// User-facing timer configuration. Durations are minutes; non-positive
/// values fall back to the defaults via [`TimerSettings::sanitized`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerSettings {
    pub work_duration_minutes: u32,
    pub break_duration_minutes: u32,
    pub sound_enabled: bool,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_duration_minutes: DEFAULT_WORK_MINUTES,
            break_duration_minutes: DEFAULT_BREAK_MINUTES,
            sound_enabled: true,
        }
    }
}

impl TimerSettings {
    /// Replace invalid durations with the defaults. A zero-length phase would
    /// complete on its first tick, so it is rejected here rather than at tick
    /// time.
    pub fn sanitized(mut self) -> Self {
        if self.work_duration_minutes == 0 {
            self.work_duration_minutes = DEFAULT_WORK_MINUTES;
        }
        if self.break_duration_minutes == 0 {
            self.break_duration_minutes = DEFAULT_BREAK_MINUTES;
        }
        self
    }

    pub fn work_duration_secs(&self) -> u64 {
        self.work_duration_minutes as u64 * 60
    }

    pub fn break_duration_secs(&self) -> u64 {
        self.break_duration_minutes as u64 * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations_are_thirty_and_five() {
        let settings = TimerSettings::default();
        assert_eq!(settings.work_duration_minutes, 30);
        assert_eq!(settings.break_duration_minutes, 5);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn sanitize_replaces_zero_durations() {
        let settings = TimerSettings {
            work_duration_minutes: 0,
            break_duration_minutes: 0,
            sound_enabled: false,
        }
        .sanitized();

        assert_eq!(settings.work_duration_minutes, DEFAULT_WORK_MINUTES);
        assert_eq!(settings.break_duration_minutes, DEFAULT_BREAK_MINUTES);
        assert!(!settings.sound_enabled);
    }

    #[test]
    fn sanitize_keeps_valid_durations() {
        let settings = TimerSettings {
            work_duration_minutes: 25,
            break_duration_minutes: 10,
            sound_enabled: true,
        }
        .sanitized();

        assert_eq!(settings.work_duration_secs(), 1500);
        assert_eq!(settings.break_duration_secs(), 600);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let settings: TimerSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, TimerSettings::default());
    }
}
