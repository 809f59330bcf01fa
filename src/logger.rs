// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Provides colored, timestamped logging with level gating. Every record that
// passes the minimum level goes to the console wrapped in its color, and, when
// file logging is on, to the log file as a plain line.

use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use chrono::Local;
use crate::color::Color;
use crate::config::{LoggerConfig, LoggerOptions};
use crate::constants::{NO_ACTIVE_ERROR, TIMESTAMP_FORMAT};
use crate::error::LoggerError;
use crate::severity::Severity;
use crate::sink::{write_color, ConsoleSink, FileSink};

/// Color each level-specific wrapper uses.
pub fn level_color(level: Severity) -> Color {
	match level {
		Severity::Debug => Color::LightBlue,
		Severity::Info => Color::LightMagenta,
		Severity::Success => Color::LightGreen,
		Severity::Warning => Color::Yellow,
		Severity::Error => Color::LightRed,
		Severity::None => Color::Reset,
	}
}

/// Renders an error followed by one `Caused by:` line per source.
pub fn describe_error(error: &(dyn Error + 'static)) -> String {
	let mut text = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		text.push_str(&format!("\nCaused by: {}", cause));
		source = cause.source();
	}
	text
}

/// Writes `<color><message><reset>` to stdout. Not subject to any level.
pub fn print_color(color: Color, message: &str) -> Result<(), LoggerError> {
	write_color(&mut io::stdout().lock(), color, message).map_err(LoggerError::console)
}

pub struct Logger {
	config: LoggerConfig,
	console: ConsoleSink,
	file: Option<FileSink>,
}

impl std::fmt::Debug for Logger {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Logger").field("config", &self.config).finish_non_exhaustive()
	}
}

impl Logger {
	/// Logger with every option at its default: INFO, console only.
	pub fn new() -> Result<Self, LoggerError> {
		Self::builder().build()
	}

	pub fn builder() -> LoggerBuilder {
		LoggerBuilder::default()
	}

	pub fn from_config(config: LoggerConfig) -> Self {
		Self::with_console(config, ConsoleSink::stdout())
	}

	fn with_console(config: LoggerConfig, console: ConsoleSink) -> Self {
		let file = config.log_file().map(FileSink::new);
		Self { config, console, file }
	}

	pub fn config(&self) -> &LoggerConfig {
		&self.config
	}

	pub fn minimum_level(&self) -> Severity {
		self.config.minimum_level()
	}

	pub fn log_file(&self) -> Option<&Path> {
		self.file.as_ref().map(FileSink::path)
	}

	/// Logs `message` at `level` in `color`. Below the minimum level this does
	/// nothing. A file failure is returned after the console line was written.
	pub fn log(&self, level: Severity, color: Color, message: &str) -> Result<(), LoggerError> {
		if !level.passes(self.config.minimum_level()) {
			return Ok(());
		}

		let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
		let line = format!("{} {}: {}", timestamp, level, message);

		self.console.write_line(color, &line)?;

		if let Some(file) = &self.file {
			file.append_line(&line)?;
		}
		Ok(())
	}

	pub fn debug(&self, message: &str) -> Result<(), LoggerError> {
		self.log(Severity::Debug, level_color(Severity::Debug), message)
	}

	/// Logs `message`, then a second DEBUG line with the error and its causes.
	/// With no error the second line is a placeholder.
	pub fn debug_with_error(&self, message: &str, error: Option<&(dyn Error + 'static)>) -> Result<(), LoggerError> {
		self.debug(message)?;
		let trace = match error {
			Some(error) => describe_error(error),
			None => NO_ACTIVE_ERROR.to_string(),
		};
		self.debug(&trace)
	}

	pub fn info(&self, message: &str) -> Result<(), LoggerError> {
		self.log(Severity::Info, level_color(Severity::Info), message)
	}

	pub fn success(&self, message: &str) -> Result<(), LoggerError> {
		self.log(Severity::Success, level_color(Severity::Success), message)
	}

	pub fn warning(&self, message: &str) -> Result<(), LoggerError> {
		self.log(Severity::Warning, level_color(Severity::Warning), message)
	}

	pub fn error(&self, message: &str) -> Result<(), LoggerError> {
		self.log(Severity::Error, level_color(Severity::Error), message)
	}

	/// Same as [`print_color`], routed through this logger's console sink.
	pub fn print_color_to_console(&self, color: Color, message: &str) -> Result<(), LoggerError> {
		self.console.write_line(color, message)
	}

	/// Installs this logger as the backend of the `log` facade.
	pub fn install(self) -> Result<(), log::SetLoggerError> {
		let max_level = self.config.minimum_level().level_filter();
		log::set_boxed_logger(Box::new(self))?;
		log::set_max_level(max_level);
		Ok(())
	}
}

impl log::Log for Logger {
	fn enabled(&self, metadata: &log::Metadata) -> bool {
		Severity::from(metadata.level()).passes(self.config.minimum_level())
	}

	fn log(&self, record: &log::Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let level = Severity::from(record.level());
		// log::Log has no error channel.
		if let Err(e) = Logger::log(self, level, level_color(level), &record.args().to_string()) {
			eprintln!("colorlog: {}", e);
		}
	}

	fn flush(&self) {}
}

/// Keyword-style construction. Every option is optional.
#[derive(Default)]
pub struct LoggerBuilder {
	options: LoggerOptions,
	console: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
	pub fn log_name(mut self, log_name: impl Into<String>) -> Self {
		self.options.log_name = log_name.into();
		self
	}

	pub fn log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
		self.options.log_dir = Some(log_dir.into());
		self
	}

	/// Minimum level by name; validated in [`LoggerBuilder::build`].
	pub fn level(mut self, level: impl Into<String>) -> Self {
		self.options.level = level.into();
		self
	}

	pub fn min_level(mut self, level: Severity) -> Self {
		self.options.level = level.as_str().to_string();
		self
	}

	pub fn log_to_file(mut self, enabled: bool) -> Self {
		self.options.log_to_file = enabled;
		self
	}

	/// Replaces stdout as the console sink.
	pub fn console(mut self, writer: impl Write + Send + 'static) -> Self {
		self.console = Some(Box::new(writer));
		self
	}

	pub fn build(self) -> Result<Logger, LoggerError> {
		let config = LoggerConfig::resolve(self.options)?;
		let console = match self.console {
			Some(writer) => ConsoleSink::new(writer),
			None => ConsoleSink::stdout(),
		};
		Ok(Logger::with_console(config, console))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fmt;
	use std::sync::Arc;
	use parking_lot::Mutex;

	#[derive(Clone, Default)]
	struct Capture(Arc<Mutex<Vec<u8>>>);

	impl Capture {
		fn text(&self) -> String {
			String::from_utf8(self.0.lock().clone()).unwrap()
		}
	}

	impl Write for Capture {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.0.lock().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[derive(Debug)]
	struct Outer(io::Error);

	impl fmt::Display for Outer {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("loading settings failed")
		}
	}

	impl Error for Outer {
		fn source(&self) -> Option<&(dyn Error + 'static)> {
			Some(&self.0)
		}
	}

	fn logger_at(level: &str) -> (Logger, Capture) {
		let capture = Capture::default();
		let logger = Logger::builder().level(level).console(capture.clone()).build().unwrap();
		(logger, capture)
	}

	#[test]
	fn wrapper_colors() {
		assert_eq!(level_color(Severity::Debug), Color::LightBlue);
		assert_eq!(level_color(Severity::Info), Color::LightMagenta);
		assert_eq!(level_color(Severity::Success), Color::LightGreen);
		assert_eq!(level_color(Severity::Warning), Color::Yellow);
		assert_eq!(level_color(Severity::Error), Color::LightRed);
	}

	#[test]
	fn console_line_is_wrapped_in_color() {
		let (logger, capture) = logger_at("DEBUG");
		logger.warning("disk almost full").unwrap();

		let text = capture.text();
		assert!(text.starts_with("\x1b[33m"));
		assert!(text.ends_with(" WARNING: disk almost full\x1b[0m\n"));
	}

	#[test]
	fn messages_below_minimum_are_dropped() {
		let (logger, capture) = logger_at("WARNING");
		logger.debug("d").unwrap();
		logger.info("i").unwrap();
		logger.success("s").unwrap();
		assert!(capture.text().is_empty());

		logger.error("e").unwrap();
		assert_eq!(capture.text().lines().count(), 1);
	}

	#[test]
	fn gating_matches_severity_values() {
		for minimum in Severity::ALL {
			for level in Severity::ALL {
				let (logger, capture) = logger_at(minimum.as_str());
				logger.log(level, Color::White, "probe").unwrap();
				assert_eq!(!capture.text().is_empty(), level.value() >= minimum.value(), "{level} at {minimum}");
			}
		}
	}

	#[test]
	fn debug_with_error_renders_cause_chain() {
		let (logger, capture) = logger_at("DEBUG");
		let err = Outer(io::Error::new(io::ErrorKind::NotFound, "settings.toml missing"));
		logger.debug_with_error("startup", Some(&err)).unwrap();

		let text = capture.text();
		assert!(text.contains("DEBUG: startup"));
		assert!(text.contains("DEBUG: loading settings failed\nCaused by: settings.toml missing"));
	}

	#[test]
	fn debug_without_error_logs_placeholder() {
		let (logger, capture) = logger_at("DEBUG");
		logger.debug_with_error("nothing went wrong", None).unwrap();

		let text = capture.text();
		assert_eq!(text.lines().count(), 2);
		assert!(text.contains(&format!("DEBUG: {}", NO_ACTIVE_ERROR)));
	}

	#[test]
	fn print_to_console_ignores_minimum_level() {
		let (logger, capture) = logger_at("NONE");
		logger.info("hidden").unwrap();
		logger.print_color_to_console(Color::Cyan, "shown").unwrap();
		assert_eq!(capture.text(), "\x1b[36mshown\x1b[0m\n");
	}

	#[test]
	fn facade_records_respect_minimum_level() {
		use log::Log;

		let (logger, capture) = logger_at("SUCCESS");
		Log::log(&logger, &log::Record::builder().level(log::Level::Info).args(format_args!("quiet")).build());
		Log::log(&logger, &log::Record::builder().level(log::Level::Warn).args(format_args!("loud")).build());

		let text = capture.text();
		assert!(!text.contains("quiet"));
		assert!(text.contains("WARNING: loud"));
	}
}
