//! nexlist_state - Client-side state for NexList
//!
//! This crate keeps the local view of the user's data in sync with the
//! backend:
//! - `todos` - the to-do cache and the manager that mutates it after each
//!   confirmed server call
//! - `pomodoro` - the countdown timer as a reducer over an explicit state
//! - `memo` - the memo pad draft

pub mod memo;
pub mod pomodoro;
pub mod todos;

// Re-export commonly used types
pub use memo::MemoPad;
pub use pomodoro::{PomodoroEvent, PomodoroState, PomodoroTimer, PomodoroTransition, TimerError};
pub use todos::{TodoEntry, TodoError, TodoManager, TodoStore, ValidationError};
