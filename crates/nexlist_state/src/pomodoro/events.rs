use serde::{Deserialize, Serialize};

/// Inputs to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PomodoroEvent {
    /// Begin counting down from the current remaining time.
    Start,
    Pause,
    Resume,
    /// One second elapsed.
    Tick,
    /// Back to the target time, stopped.
    Clear,
    /// New target in minutes; also clears.
    SetDuration(u32),
}
