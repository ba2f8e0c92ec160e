//! Countdown background task

use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::TimerController;

/// Real time between two ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that ticks the timer once per second while it is running.
///
/// At most one interval exists at a time. Every change of the run signal drops
/// the current interval and, if the timer is still running, schedules a new one
/// whose first tick lands a full second later.
pub async fn countdown_task(timer: TimerController) {
    info!("Starting countdown task");

    let mut run_rx = timer.subscribe_run_signal();

    loop {
        let signal = *run_rx.borrow_and_update();

        if !signal.running {
            debug!("Timer paused (generation {}), waiting for start", signal.generation);
            if run_rx.changed().await.is_err() {
                break;
            }
            continue;
        }

        debug!("Scheduling ticks (generation {})", signal.generation);
        let mut ticker = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                // Run state changed - cancel this interval and re-evaluate
                changed = run_rx.changed() => {
                    if changed.is_err() {
                        info!("Timer controller dropped, stopping countdown task");
                        return;
                    }
                    break;
                }

                _ = ticker.tick() => {
                    if let Err(e) = timer.tick() {
                        error!("Failed to apply tick: {}", e);
                    }
                }
            }
        }
    }

    info!("Timer controller dropped, stopping countdown task");
}
