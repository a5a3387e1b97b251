//! Pomodoro transitions
//!
//! `transition` is the whole timer: a pure function from state and event to
//! the next state. `PomodoroTimer` keeps the current state and a short
//! history on top of it.

use thiserror::Error;

use super::events::PomodoroEvent;
use super::states::PomodoroState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("Duration must be a positive number of minutes")]
    InvalidDuration,
}

/// Represents a state transition result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroTransition {
    pub from: PomodoroState,
    pub to: PomodoroState,
    pub event: PomodoroEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

impl PomodoroTransition {
    /// This tick brought the countdown to zero.
    pub fn finished(&self) -> bool {
        self.changed && self.event == PomodoroEvent::Tick && self.to.is_finished()
    }
}

/// Next state. Events that do not apply in the current state leave it
/// unchanged.
pub fn transition(
    state: &PomodoroState,
    event: PomodoroEvent,
) -> Result<PomodoroState, TimerError> {
    use PomodoroEvent::*;

    let next = match event {
        Start if !state.started && state.remaining_seconds > 0 => PomodoroState {
            running: true,
            started: true,
            ..*state
        },
        Pause if state.running => PomodoroState {
            running: false,
            ..*state
        },
        Resume if state.is_paused() => PomodoroState {
            running: true,
            ..*state
        },
        Tick if state.running => {
            let remaining_seconds = state.remaining_seconds.saturating_sub(1);
            if remaining_seconds == 0 {
                PomodoroState {
                    remaining_seconds,
                    running: false,
                    started: false,
                    ..*state
                }
            } else {
                PomodoroState {
                    remaining_seconds,
                    ..*state
                }
            }
        }
        Clear => state.cleared(),
        SetDuration(0) => return Err(TimerError::InvalidDuration),
        SetDuration(minutes) => PomodoroState::with_minutes(minutes),
        _ => *state,
    };
    Ok(next)
}

/// Timer holding the current state and a bounded transition history.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    current_state: PomodoroState,
    history: Vec<PomodoroTransition>,
    max_history: usize,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl PomodoroTimer {
    pub fn new() -> Self {
        Self::with_state(PomodoroState::default())
    }

    pub fn with_minutes(minutes: u32) -> Result<Self, TimerError> {
        if minutes == 0 {
            return Err(TimerError::InvalidDuration);
        }
        Ok(Self::with_state(PomodoroState::with_minutes(minutes)))
    }

    pub fn with_state(state: PomodoroState) -> Self {
        Self {
            current_state: state,
            history: Vec::new(),
            max_history: 50,
        }
    }

    pub fn state(&self) -> &PomodoroState {
        &self.current_state
    }

    pub fn history(&self) -> &[PomodoroTransition] {
        &self.history
    }

    /// Apply an event. A rejected event leaves the timer untouched.
    pub fn handle_event(&mut self, event: PomodoroEvent) -> Result<PomodoroTransition, TimerError> {
        let old_state = self.current_state;
        let new_state = transition(&old_state, event)?;

        self.current_state = new_state;
        let transition = PomodoroTransition {
            from: old_state,
            to: new_state,
            event,
            changed: old_state != new_state,
        };

        // Ticks would flood the history
        if event != PomodoroEvent::Tick || transition.finished() {
            self.history.push(transition.clone());
            if self.history.len() > self.max_history {
                self.history.remove(0);
            }
        }

        if transition.finished() {
            tracing::info!("Pomodoro finished");
        }
        Ok(transition)
    }

    pub fn can_transition(&self, event: PomodoroEvent) -> bool {
        transition(&self.current_state, event).is_ok_and(|next| next != self.current_state)
    }
}
