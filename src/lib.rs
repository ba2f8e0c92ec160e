//! Pomodoro Timer - A work/break countdown with a local control API
//! 
//! This library provides the Pomodoro state machine, the cancellable
//! per-second countdown task that drives it, and an HTTP adapter that
//! publishes the timer to a presentation layer.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Phase, TimerController, TimerSnapshot};
pub use api::create_router;
pub use utils::{format_time, signals::shutdown_signal};
