//! Application-level configuration constants.

// Tick source
pub const TICK_INTERVAL_MS: u32 = 10;
pub const TICK_INCREMENT_MS: u64 = 10;

// Time decomposition
pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60_000;
pub const SECONDS_PER_MINUTE: u64 = 60;

// Labels
pub const HEADING: &str = "Stopwatch ⏱️";
pub const LABEL_START: &str = "Start";
pub const LABEL_STOP: &str = "Stop";
pub const LABEL_RESET: &str = "Reset";
pub const LABEL_LAP: &str = "Lap";

// CSS classes picked up by the host page stylesheet
pub const CLASS_ROOT: &str = "stopwatch";
pub const CLASS_HEADING: &str = "stopwatch-heading";
pub const CLASS_PANEL: &str = "stopwatch-panel";
pub const CLASS_TIME_DISPLAY: &str = "time-display";
pub const CLASS_CONTROLS: &str = "controls";
pub const CLASS_LAP_LIST: &str = "lap-list";
