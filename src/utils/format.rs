//! Readout formatting helpers

/// Format a second count as a zero-padded `MM:SS` readout
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
