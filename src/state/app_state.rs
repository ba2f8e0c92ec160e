//! Main application state management

use std::time::Instant;

use super::TimerController;

/// Main application state shared with the HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// The single timer this service manages
    pub timer: TimerController,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    /// Create a new AppState with a fresh timer
    pub fn new(port: u16, host: String) -> Self {
        Self::with_timer(TimerController::new(), port, host)
    }

    /// Create an AppState around an existing timer controller
    pub fn with_timer(timer: TimerController, port: u16, host: String) -> Self {
        Self {
            timer,
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;
        
        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
