//! State management module
//! 
//! This module contains the Pomodoro state machine, its shared controller
//! and the application-level state served by the API.

pub mod phase;
pub mod timer_state;
pub mod snapshot;
pub mod controller;
pub mod app_state;

// Re-export main types
pub use phase::Phase;
pub use timer_state::TimerState;
pub use snapshot::TimerSnapshot;
pub use controller::{RunSignal, TimerAction, TimerController};
pub use app_state::AppState;
