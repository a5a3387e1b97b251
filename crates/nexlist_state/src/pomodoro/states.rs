use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MINUTES: u32 = 25;

/// Timer state.
///
/// `started` is true between `Start` and either `Clear` or the countdown
/// reaching zero; `running` is false while paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroState {
    pub remaining_seconds: u32,
    pub target_seconds: u32,
    pub running: bool,
    pub started: bool,
}

impl Default for PomodoroState {
    fn default() -> Self {
        Self::with_minutes(DEFAULT_MINUTES)
    }
}

impl PomodoroState {
    pub fn with_minutes(minutes: u32) -> Self {
        Self::with_seconds(minutes.saturating_mul(60))
    }

    /// Back to the full target, stopped.
    pub fn cleared(&self) -> Self {
        Self::with_seconds(self.target_seconds)
    }

    fn with_seconds(target_seconds: u32) -> Self {
        Self {
            remaining_seconds: target_seconds,
            target_seconds,
            running: false,
            started: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.started && !self.running
    }

    /// Ran all the way down and stopped.
    pub fn is_finished(&self) -> bool {
        self.remaining_seconds == 0 && !self.started
    }

    pub fn minutes(&self) -> u32 {
        self.remaining_seconds / 60
    }

    pub fn seconds(&self) -> u32 {
        self.remaining_seconds % 60
    }
}

impl fmt::Display for PomodoroState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_twenty_five_minutes() {
        let state = PomodoroState::default();
        assert_eq!(state.remaining_seconds, 25 * 60);
        assert_eq!(state.to_string(), "25:00");
        assert!(!state.started);
    }

    #[test]
    fn test_display_pads() {
        let state = PomodoroState {
            remaining_seconds: 65,
            ..PomodoroState::with_minutes(5)
        };
        assert_eq!(state.to_string(), "01:05");
    }
}
