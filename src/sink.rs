// ══════════════════════════════════════════════════════════════════════════════
// SINK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The two destinations a record can reach. The console sink wraps each line
// in a color escape; the file sink writes the plain line, reopening the file in
// append mode for every record so no handle outlives a call. Each sink holds a
// mutex so concurrent callers never interleave partial lines.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use parking_lot::Mutex;
use crate::color::Color;
use crate::constants::RESET;
use crate::error::LoggerError;

/// Writes `<color><message><reset>` followed by a newline.
pub fn write_color<W: Write + ?Sized>(writer: &mut W, color: Color, message: &str) -> io::Result<()> {
	writeln!(writer, "{}{}{}", color.ansi(), message, RESET)?;
	writer.flush()
}

pub struct ConsoleSink {
	writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
	pub fn new(writer: Box<dyn Write + Send>) -> Self {
		Self { writer: Mutex::new(writer) }
	}

	pub fn stdout() -> Self {
		Self::new(Box::new(io::stdout()))
	}

	pub fn write_line(&self, color: Color, line: &str) -> Result<(), LoggerError> {
		let mut writer = self.writer.lock();
		write_color(&mut **writer, color, line).map_err(LoggerError::console)
	}
}

impl Default for ConsoleSink {
	fn default() -> Self {
		Self::stdout()
	}
}

pub struct FileSink {
	path: PathBuf,
	guard: Mutex<()>,
}

impl FileSink {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into(), guard: Mutex::new(()) }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Opens the file for appending, writes one line, and closes it again.
	pub fn append_line(&self, line: &str) -> Result<(), LoggerError> {
		let _guard = self.guard.lock();
		let mut file = open_append(&self.path)?;
		writeln!(file, "{}", line).map_err(|e| LoggerError::io(&self.path, e))
	}
}

/// Opens (creating if needed) a file in append mode with the path in the error.
fn open_append(path: &Path) -> Result<File, LoggerError> {
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(|e| LoggerError::io(path, e))
}
