// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                COLORLOG                                      ║
// ║                  Leveled, Color-Coded Console & File Logger                  ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// A small logger that stamps each message with local time and a level name,
// prints it to the terminal in the level's color, and optionally appends the
// same line, uncolored, to a log file.
//
// 📦 HOW IT WORKS
// ---------------
//   log(level, color, message)
//     ├─ level < minimum?  → dropped
//     ├─ console           → <color>YYYY-MM-DD HH:MM:SS LEVEL: message<reset>
//     └─ file (optional)   → YYYY-MM-DD HH:MM:SS LEVEL: message
//
// Levels, lowest first: DEBUG, INFO, SUCCESS, WARNING, ERROR, NONE.
// Setting the minimum to NONE silences everything except print_color.
//
// 🗂️ FILE SINK
// ------------
// - The file path is fixed when the logger is built. Names without an
//   extension get `.log` appended.
// - The directory is created only when file logging is enabled.
// - Every record reopens the file in append mode; nothing is ever truncated.
//
// 📜 LICENSE: MIT
//
// ══════════════════════════════════════════════════════════════════════════════

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod severity;
pub mod sink;

pub use color::Color;
pub use config::{LoggerConfig, LoggerOptions};
pub use error::LoggerError;
pub use logger::{describe_error, level_color, print_color, Logger, LoggerBuilder};
pub use severity::Severity;
pub use sink::write_color;
