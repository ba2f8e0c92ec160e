//! Pomodoro phase definitions

use serde::{Deserialize, Serialize};

/// Length of the focus interval in seconds (25 minutes)
pub const WORK_SECONDS: u32 = 25 * 60;
/// Length of the rest interval in seconds (5 minutes)
pub const BREAK_SECONDS: u32 = 5 * 60;

/// The two alternating Pomodoro phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    /// Full duration of this phase in seconds
    pub fn total_seconds(self) -> u32 {
        match self {
            Phase::Work => WORK_SECONDS,
            Phase::Break => BREAK_SECONDS,
        }
    }

    /// The phase that follows this one once it runs out
    pub fn next(self) -> Self {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    /// Whether the next phase starts counting without user input
    pub fn next_starts_running(self) -> bool {
        matches!(self, Phase::Work)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Work => "WORK",
            Phase::Break => "BREAK",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_match_pomodoro_defaults() {
        assert_eq!(Phase::Work.total_seconds(), 1500);
        assert_eq!(Phase::Break.total_seconds(), 300);
    }

    #[test]
    fn phases_alternate() {
        assert_eq!(Phase::Work.next(), Phase::Break);
        assert_eq!(Phase::Break.next(), Phase::Work);
        assert!(Phase::Work.next_starts_running());
        assert!(!Phase::Break.next_starts_running());
    }

    #[test]
    fn serializes_as_uppercase_name() {
        assert_eq!(serde_json::to_string(&Phase::Break).unwrap(), "\"BREAK\"");
        assert_eq!(Phase::Work.to_string(), "WORK");
    }
}
