//! Pomodoro timer module
//!
//! The countdown is an explicit state value moved by a pure transition
//! function. Whoever drives the clock sends `Tick` once per second.

mod events;
mod states;
mod transitions;

pub use events::PomodoroEvent;
pub use states::{PomodoroState, DEFAULT_MINUTES};
pub use transitions::{transition, PomodoroTimer, PomodoroTransition, TimerError};
