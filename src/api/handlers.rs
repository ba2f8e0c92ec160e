//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream, StreamExt};
use tracing::{debug, error};

use crate::state::{AppState, TimerAction};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Apply a control to the timer and wrap the result for the client
fn control(state: &AppState, action: TimerAction, message: &str) -> Result<Json<ApiResponse>, StatusCode> {
    match state.timer.apply(action) {
        Ok(timer) => Ok(Json(ApiResponse::for_timer(message.to_string(), timer))),
        Err(e) => {
            error!("Failed to apply {}: {}", action.as_str(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /toggle - Start or stop the countdown
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    control(&state, TimerAction::ToggleRun, "Timer toggled")
}

/// Handle POST /reset - Return to a paused work phase
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    control(&state, TimerAction::Reset, "Timer reset")
}

/// Handle POST /increment - Add one minute (ignored while running)
pub async fn increment_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    control(&state, TimerAction::Increment, "Increment requested")
}

/// Handle POST /decrement - Remove one minute (ignored while running)
pub async fn decrement_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    control(&state, TimerAction::Decrement, "Decrement requested")
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let (timer, last_action, last_action_time) = match state.timer.status() {
        Ok(status) => status,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(Json(StatusResponse {
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /events - Stream a snapshot on every timer change
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    debug!("Presentation client subscribed to timer events");
    let mut rx = state.timer.subscribe();
    let initial = rx.borrow_and_update().clone();

    let updates = stream::unfold(rx, |mut rx| async move {
        rx.changed().await.ok()?;
        let snapshot = rx.borrow_and_update().clone();
        Some((snapshot, rx))
    });

    let events = stream::once(async move { initial })
        .chain(updates)
        .map(|snapshot| Event::default().event("snapshot").json_data(&snapshot));

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
