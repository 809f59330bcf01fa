// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Typed errors surfaced by construction and by every logging call.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Pseudo-path reported when the console sink fails.
pub const CONSOLE_PATH: &str = "<console>";

#[derive(Error, Debug)]
pub enum LoggerError {
	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),

	#[error("I/O error on '{}': {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl LoggerError {
	/// Wraps an I/O error with the path it happened on.
	pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
		LoggerError::Io { path: path.as_ref().to_path_buf(), source }
	}

	pub fn console(source: std::io::Error) -> Self {
		Self::io(CONSOLE_PATH, source)
	}
}
