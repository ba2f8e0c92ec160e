//! Timer state structure and transitions

use super::phase::{Phase, WORK_SECONDS};

/// Seconds added or removed by one manual adjustment
pub const ADJUST_STEP_SECONDS: u32 = 60;
/// Manual increments never push the countdown past this value
pub const INCREMENT_CAP_SECONDS: u32 = 1440;
/// Manual decrements never take the countdown below this value
pub const DECREMENT_FLOOR_SECONDS: u32 = 60;

/// Countdown state for the Pomodoro cycle
///
/// Every transition is total: requests that do not apply to the current state
/// (adjusting while running, ticking while paused) leave it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub is_running: bool,
}

impl TimerState {
    /// Create a paused timer at the start of a work phase
    pub fn new() -> Self {
        Self {
            phase: Phase::Work,
            remaining_seconds: WORK_SECONDS,
            is_running: false,
        }
    }

    /// Full duration of the current phase
    pub fn total_seconds(&self) -> u32 {
        self.phase.total_seconds()
    }

    /// Remaining time over the phase duration, used to drive the progress ring.
    /// Exceeds 1.0 when a break has been extended past its default length.
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.remaining_seconds) / f64::from(self.total_seconds())
    }

    /// Consume one elapsed second. Returns `true` if this tick completed the phase.
    pub fn tick(&mut self) -> bool {
        if !self.is_running || self.remaining_seconds == 0 {
            return false;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.complete_phase();
            return true;
        }
        false
    }

    /// Switch to the next phase with a full countdown.
    /// Breaks start automatically, work waits for an explicit start.
    pub fn complete_phase(&mut self) {
        let finished = self.phase;
        self.phase = finished.next();
        self.remaining_seconds = self.phase.total_seconds();
        self.is_running = finished.next_starts_running();
    }

    pub fn toggle_run(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Return to a paused, full-length work phase regardless of current state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn can_increment(&self) -> bool {
        !self.is_running && self.remaining_seconds < INCREMENT_CAP_SECONDS
    }

    pub fn can_decrement(&self) -> bool {
        !self.is_running && self.remaining_seconds > DECREMENT_FLOOR_SECONDS
    }

    /// Add a minute, clamped at the increment cap. Returns `true` if anything changed.
    pub fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.remaining_seconds =
            (self.remaining_seconds + ADJUST_STEP_SECONDS).min(INCREMENT_CAP_SECONDS);
        true
    }

    /// Remove a minute, floored at one minute. Returns `true` if anything changed.
    pub fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.remaining_seconds = self
            .remaining_seconds
            .saturating_sub(ADJUST_STEP_SECONDS)
            .max(DECREMENT_FLOOR_SECONDS);
        true
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::phase::BREAK_SECONDS;

    fn running() -> TimerState {
        let mut state = TimerState::new();
        state.toggle_run();
        state
    }

    #[test]
    fn starts_paused_in_work_phase() {
        let state = TimerState::new();
        assert_eq!(state.phase, Phase::Work);
        assert_eq!(state.remaining_seconds, 1500);
        assert!(!state.is_running);
        assert_eq!(state.progress_fraction(), 1.0);
    }

    #[test]
    fn tick_is_ignored_while_paused() {
        let mut state = TimerState::new();
        assert!(!state.tick());
        assert_eq!(state.remaining_seconds, 1500);
    }

    #[test]
    fn remaining_never_increases_while_running() {
        let mut state = running();
        let mut previous = state.remaining_seconds;
        for _ in 0..1499 {
            state.tick();
            assert!(state.remaining_seconds <= previous);
            previous = state.remaining_seconds;
        }
        assert_eq!(state.remaining_seconds, 1);
        assert_eq!(state.phase, Phase::Work);
    }

    #[test]
    fn work_completion_starts_break_automatically() {
        let mut state = running();
        let completed = (0..1500).filter(|_| state.tick()).count();
        assert_eq!(completed, 1);
        assert_eq!(
            state,
            TimerState { phase: Phase::Break, remaining_seconds: BREAK_SECONDS, is_running: true }
        );
    }

    #[test]
    fn break_completion_returns_to_paused_work() {
        let mut state = TimerState { phase: Phase::Break, remaining_seconds: 300, is_running: true };
        for _ in 0..300 {
            state.tick();
        }
        assert_eq!(state, TimerState::new());

        // Work does not resume on its own
        assert!(!state.tick());
        assert_eq!(state.remaining_seconds, 1500);
    }

    #[test]
    fn reset_from_any_state() {
        let candidates = [
            running(),
            TimerState { phase: Phase::Break, remaining_seconds: 42, is_running: true },
            TimerState { phase: Phase::Break, remaining_seconds: 1440, is_running: false },
            TimerState { phase: Phase::Work, remaining_seconds: 60, is_running: false },
        ];
        for mut state in candidates {
            state.reset();
            assert_eq!(state, TimerState::new());
        }
    }

    #[test]
    fn decrement_floors_at_one_minute() {
        let mut state = TimerState::new();
        while state.decrement() {}
        assert_eq!(state.remaining_seconds, 60);

        let mut odd = TimerState { phase: Phase::Work, remaining_seconds: 90, is_running: false };
        assert!(odd.decrement());
        assert_eq!(odd.remaining_seconds, 60);

        // Below the floor already (paused mid-countdown): left alone
        let mut low = TimerState { phase: Phase::Work, remaining_seconds: 30, is_running: false };
        assert!(!low.decrement());
        assert_eq!(low.remaining_seconds, 30);
    }

    #[test]
    fn increment_clamps_at_cap() {
        let mut state = TimerState { phase: Phase::Break, remaining_seconds: 300, is_running: false };
        assert!(state.increment());
        assert_eq!(state.remaining_seconds, 360);

        while state.increment() {}
        assert_eq!(state.remaining_seconds, INCREMENT_CAP_SECONDS);
        assert!(!state.can_increment());
        assert!(state.progress_fraction() > 1.0);

        let mut near = TimerState { phase: Phase::Work, remaining_seconds: 1410, is_running: false };
        assert!(near.increment());
        assert_eq!(near.remaining_seconds, 1440);
    }

    #[test]
    fn increment_never_shrinks_a_full_work_phase() {
        let mut state = TimerState::new();
        assert!(!state.increment());
        assert_eq!(state.remaining_seconds, 1500);
    }

    #[test]
    fn adjustments_are_ignored_while_running() {
        let mut state = running();
        state.tick();
        let before = state.clone();
        assert!(!state.increment());
        assert!(!state.decrement());
        assert_eq!(state, before);
    }

    #[test]
    fn progress_fraction_tracks_phase_total() {
        let state = TimerState { phase: Phase::Break, remaining_seconds: 150, is_running: true };
        assert_eq!(state.progress_fraction(), 0.5);
    }
}
