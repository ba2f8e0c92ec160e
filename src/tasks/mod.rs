//! Background tasks module
//! 
//! This module contains background tasks that run alongside the HTTP server.

pub mod countdown;
pub mod state_logger;

// Re-export main functions
pub use countdown::{countdown_task, TICK_INTERVAL};
pub use state_logger::state_logger_task;
