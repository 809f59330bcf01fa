// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines crate-wide constants used throughout the codebase.
// - ANSI escape codes for every named color token, plus the reset code
// - DEFAULT_LOG_NAME / LOG_EXTENSION: how the log file name is resolved
// - TIMESTAMP_FORMAT: chrono format shared by the console and file sinks

pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const GREEN: &str = "\x1b[32m";
pub const MAGENTA: &str = "\x1b[35m";
pub const RED: &str = "\x1b[31m";
pub const WHITE: &str = "\x1b[37m";
pub const YELLOW: &str = "\x1b[33m";

pub const LIGHT_BLUE: &str = "\x1b[94m";
pub const LIGHT_CYAN: &str = "\x1b[96m";
pub const LIGHT_GRAY: &str = "\x1b[37m";
pub const LIGHT_GREEN: &str = "\x1b[92m";
pub const LIGHT_MAGENTA: &str = "\x1b[95m";
pub const LIGHT_RED: &str = "\x1b[91m";
pub const LIGHT_WHITE: &str = "\x1b[97m";
pub const LIGHT_YELLOW: &str = "\x1b[93m";

pub const RESET: &str = "\x1b[0m";

pub const DEFAULT_LOG_NAME: &str = "logger.log";
pub const LOG_EXTENSION: &str = "log";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Second line of a traceback debug call when no error was supplied.
pub const NO_ACTIVE_ERROR: &str = "No active error";
