//! Logs timer snapshots as they are published

use tracing::{debug, info};

use crate::state::TimerController;

/// Background task that traces every published snapshot.
/// Phase and run-state changes are logged at info, plain ticks at debug.
pub async fn state_logger_task(timer: TimerController) {
    let mut rx = timer.subscribe();
    let mut previous = rx.borrow_and_update().clone();

    while rx.changed().await.is_ok() {
        let current = rx.borrow_and_update().clone();

        if current.phase != previous.phase || current.is_running != previous.is_running {
            info!("Timer now {} {} ({})",
                  current.phase,
                  current.display,
                  if current.is_running { "running" } else { "paused" });
        } else {
            debug!("{} {} ({:.0}%)",
                   current.phase, current.display, current.progress_fraction * 100.0);
        }

        previous = current;
    }
}
