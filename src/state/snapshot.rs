//! Presentation payload published on every timer change

use serde::{Deserialize, Serialize};

use super::{Phase, TimerState};
use crate::utils::format_time;

/// Everything a renderer needs to draw the timer: progress ring, readout and
/// the enabled state of the four controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub total_seconds: u32,
    pub is_running: bool,
    pub progress_fraction: f64,
    /// `MM:SS` readout of the remaining time
    pub display: String,
    pub can_increment: bool,
    pub can_decrement: bool,
}

impl From<&TimerState> for TimerSnapshot {
    fn from(state: &TimerState) -> Self {
        Self {
            phase: state.phase,
            remaining_seconds: state.remaining_seconds,
            total_seconds: state.total_seconds(),
            is_running: state.is_running,
            progress_fraction: state.progress_fraction(),
            display: format_time(state.remaining_seconds),
            can_increment: state.can_increment(),
            can_decrement: state.can_decrement(),
        }
    }
}
