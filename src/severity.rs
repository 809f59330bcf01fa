// ══════════════════════════════════════════════════════════════════════════════
// SEVERITY MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Ordered log levels. The numeric value drives filtering; NONE is a sentinel
// that, used as a minimum level, silences every concrete level.

use std::fmt;
use std::str::FromStr;
use crate::error::LoggerError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
	Debug = 1,
	#[default]
	Info = 2,
	Success = 3,
	Warning = 4,
	Error = 5,
	None = 6,
}

impl Severity {
	pub const ALL: [Severity; 6] = [
		Severity::Debug,
		Severity::Info,
		Severity::Success,
		Severity::Warning,
		Severity::Error,
		Severity::None,
	];

	pub fn value(self) -> u8 {
		self as u8
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Severity::Debug => "DEBUG",
			Severity::Info => "INFO",
			Severity::Success => "SUCCESS",
			Severity::Warning => "WARNING",
			Severity::Error => "ERROR",
			Severity::None => "NONE",
		}
	}

	/// Whether a message at `self` passes a `minimum` threshold.
	pub fn passes(self, minimum: Severity) -> bool {
		self.value() >= minimum.value()
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Strict parse: only the six upper-case names are recognized.
impl FromStr for Severity {
	type Err = LoggerError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Severity::ALL
			.into_iter()
			.find(|level| level.as_str() == s)
			.ok_or_else(|| LoggerError::InvalidConfiguration(format!("Invalid log level: {}", s)))
	}
}

impl From<log::Level> for Severity {
	fn from(level: log::Level) -> Self {
		match level {
			log::Level::Error => Severity::Error,
			log::Level::Warn => Severity::Warning,
			log::Level::Info => Severity::Info,
			log::Level::Debug | log::Level::Trace => Severity::Debug,
		}
	}
}

impl Severity {
	/// The most verbose `log` facade filter that still reaches this minimum.
	pub fn level_filter(self) -> log::LevelFilter {
		match self {
			Severity::Debug => log::LevelFilter::Trace,
			Severity::Info => log::LevelFilter::Info,
			// The facade has no SUCCESS level, so INFO records are gated out here.
			Severity::Success | Severity::Warning => log::LevelFilter::Warn,
			Severity::Error => log::LevelFilter::Error,
			Severity::None => log::LevelFilter::Off,
		}
	}
}
