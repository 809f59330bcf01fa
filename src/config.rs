// ══════════════════════════════════════════════════════════════════════════════
// CONFIG MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Resolves constructor options into an immutable LoggerConfig. The level name
// is validated before anything touches the filesystem; the log directory is
// only created when file logging is enabled.

use std::fs;
use std::path::{Path, PathBuf};
use crate::constants::{DEFAULT_LOG_NAME, LOG_EXTENSION};
use crate::error::LoggerError;
use crate::severity::Severity;

/// Raw, unvalidated constructor options.
#[derive(Debug, Clone)]
pub struct LoggerOptions {
	pub log_name: String,
	pub log_dir: Option<PathBuf>,
	pub level: String,
	pub log_to_file: bool,
}

impl Default for LoggerOptions {
	fn default() -> Self {
		Self {
			log_name: DEFAULT_LOG_NAME.to_string(),
			log_dir: None,
			level: Severity::default().as_str().to_string(),
			log_to_file: false,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
	minimum_level: Severity,
	log_dir: PathBuf,
	log_file: Option<PathBuf>,
}

impl LoggerConfig {
	/// Validates the options and prepares the file sink location.
	pub fn resolve(options: LoggerOptions) -> Result<Self, LoggerError> {
		let minimum_level: Severity = options.level.parse()?;

		let log_dir = match options.log_dir {
			Some(dir) => dir,
			None => std::env::current_dir().map_err(|e| LoggerError::io(".", e))?,
		};

		let log_file = if options.log_to_file {
			fs::create_dir_all(&log_dir).map_err(|e| LoggerError::io(&log_dir, e))?;
			Some(log_dir.join(file_name_with_extension(&options.log_name)))
		} else {
			None
		};

		Ok(Self { minimum_level, log_dir, log_file })
	}

	pub fn minimum_level(&self) -> Severity {
		self.minimum_level
	}

	pub fn log_dir(&self) -> &Path {
		&self.log_dir
	}

	pub fn log_to_file(&self) -> bool {
		self.log_file.is_some()
	}

	/// Present only when file logging is enabled.
	pub fn log_file(&self) -> Option<&Path> {
		self.log_file.as_deref()
	}
}

/// Appends `.log` to names without an extension. Existing extensions are kept.
pub fn file_name_with_extension(log_name: &str) -> String {
	if Path::new(log_name).extension().is_some() {
		log_name.to_string()
	} else {
		format!("{}.{}", log_name, LOG_EXTENSION)
	}
}
