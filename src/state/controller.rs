//! Shared timer controller
//!
//! Owns the single `TimerState`, applies transitions under a lock and
//! publishes the results: a `TimerSnapshot` for renderers and a `RunSignal`
//! that tells the countdown task when to (re)schedule its ticks.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{TimerSnapshot, TimerState};

/// Running flag as seen by the countdown task.
///
/// `generation` is bumped on every change of `running` so that a stop/start
/// pair, however quick, still reschedules the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSignal {
    pub running: bool,
    pub generation: u64,
}

/// A user-facing control that was applied to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    ToggleRun,
    Reset,
    Increment,
    Decrement,
}

impl TimerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerAction::ToggleRun => "toggle",
            TimerAction::Reset => "reset",
            TimerAction::Increment => "increment",
            TimerAction::Decrement => "decrement",
        }
    }
}

/// Last user control and when it was applied
type LastAction = Option<(TimerAction, DateTime<Utc>)>;

/// Everything guarded by the controller lock
#[derive(Debug)]
struct Guarded {
    timer: TimerState,
    last_action: LastAction,
}

/// Cloneable handle to the timer state machine
#[derive(Debug, Clone)]
pub struct TimerController {
    state: Arc<Mutex<Guarded>>,
    snapshot_tx: Arc<watch::Sender<TimerSnapshot>>,
    run_tx: Arc<watch::Sender<RunSignal>>,
}

impl TimerController {
    /// Create a controller holding a fresh, paused work phase
    pub fn new() -> Self {
        let timer = TimerState::new();
        let (snapshot_tx, _) = watch::channel(TimerSnapshot::from(&timer));
        let (run_tx, _) = watch::channel(RunSignal::default());

        Self {
            state: Arc::new(Mutex::new(Guarded { timer, last_action: None })),
            snapshot_tx: Arc::new(snapshot_tx),
            run_tx: Arc::new(run_tx),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Guarded>, String> {
        self.state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Apply a transition and publish the resulting state.
    ///
    /// Publication happens while the lock is held so that watchers always
    /// observe changes in the order they were applied.
    fn update<F>(&self, action: Option<TimerAction>, updater: F) -> Result<TimerSnapshot, String>
    where
        F: FnOnce(&mut TimerState),
    {
        let mut state = self.lock()?;

        let was_running = state.timer.is_running;
        updater(&mut state.timer);
        let running = state.timer.is_running;
        let snapshot = TimerSnapshot::from(&state.timer);

        if let Some(action) = action {
            state.last_action = Some((action, Utc::now()));
        }
        if running != was_running {
            self.run_tx.send_modify(|signal| {
                signal.running = running;
                signal.generation = signal.generation.wrapping_add(1);
            });
        }
        self.snapshot_tx.send_replace(snapshot.clone());
        drop(state);

        Ok(snapshot)
    }

    /// Apply a user control and record it as the last action
    pub fn apply(&self, action: TimerAction) -> Result<TimerSnapshot, String> {
        let snapshot = self.update(Some(action), |state| {
            let changed = match action {
                TimerAction::ToggleRun => {
                    state.toggle_run();
                    true
                }
                TimerAction::Reset => {
                    state.reset();
                    true
                }
                TimerAction::Increment => state.increment(),
                TimerAction::Decrement => state.decrement(),
            };
            if !changed {
                debug!("{} ignored at {}s (running={})",
                       action.as_str(), state.remaining_seconds, state.is_running);
            }
        })?;

        info!("Applied {}: {} {} (running={})",
              action.as_str(), snapshot.phase, snapshot.display, snapshot.is_running);
        Ok(snapshot)
    }

    pub fn toggle_run(&self) -> Result<TimerSnapshot, String> {
        self.apply(TimerAction::ToggleRun)
    }

    pub fn reset(&self) -> Result<TimerSnapshot, String> {
        self.apply(TimerAction::Reset)
    }

    pub fn increment(&self) -> Result<TimerSnapshot, String> {
        self.apply(TimerAction::Increment)
    }

    pub fn decrement(&self) -> Result<TimerSnapshot, String> {
        self.apply(TimerAction::Decrement)
    }

    /// Consume one elapsed second, completing the phase when it runs out
    pub fn tick(&self) -> Result<TimerSnapshot, String> {
        self.update(None, |state| {
            let finished = state.phase;
            if state.tick() {
                info!("{} phase complete, switching to {} (running={})",
                      finished, state.phase, state.is_running);
            }
        })
    }

    /// Get current timer state
    pub fn snapshot(&self) -> Result<TimerSnapshot, String> {
        self.lock().map(|state| TimerSnapshot::from(&state.timer))
    }

    /// Current snapshot together with the control that produced it, read
    /// under a single lock
    pub fn status(&self) -> Result<(TimerSnapshot, Option<String>, Option<DateTime<Utc>>), String> {
        let state = self.lock()?;
        let snapshot = TimerSnapshot::from(&state.timer);
        let (action, at) = describe(state.last_action);
        Ok((snapshot, action, at))
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Receive running-flag changes that drive the countdown task
    pub fn subscribe_run_signal(&self) -> watch::Receiver<RunSignal> {
        self.run_tx.subscribe()
    }

    /// Get last action information
    pub fn last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.lock() {
            Ok(state) => describe(state.last_action),
            Err(e) => {
                warn!("Failed to read last action: {}", e);
                (None, None)
            }
        }
    }
}

fn describe(last: LastAction) -> (Option<String>, Option<DateTime<Utc>>) {
    match last {
        Some((action, at)) => (Some(action.as_str().to_string()), Some(at)),
        None => (None, None),
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new()
    }
}
