// ══════════════════════════════════════════════════════════════════════════════
// COLORLOG CLI
// ══════════════════════════════════════════════════════════════════════════════
//
// Thin command-line front end over the library: log a single record, print a
// colored line, or preview every color token.

use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use colored::*;
use colorlog::{level_color, print_color, Color, Logger, LoggerError, Severity};
use colorlog::constants::DEFAULT_LOG_NAME;

/// Leveled, color-coded logging from the shell
#[derive(Parser)]
#[command(name = "colorlog")]
#[command(version)]
#[command(about = "Write timestamped, color-coded log lines to the console and a file", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Log a message at a level (DEBUG, INFO, SUCCESS, WARNING, ERROR, NONE)
	Log {
		/// Level of this message
		level: String,

		/// Message text
		message: String,

		/// Minimum level; lower messages are dropped
		#[arg(long, env = "COLORLOG_LEVEL", default_value = "INFO")]
		min_level: String,

		/// Directory for the log file (defaults to the current directory)
		#[arg(long, env = "COLORLOG_DIR")]
		log_dir: Option<PathBuf>,

		/// Log file name; `.log` is appended when it has no extension
		#[arg(long, default_value = DEFAULT_LOG_NAME)]
		log_name: String,

		/// Also append the line to the log file
		#[arg(short, long)]
		file: bool,
	},

	/// Print a message in a color, ignoring levels
	Print {
		/// Color token, e.g. light_green
		color: String,

		/// Message text
		message: String,
	},

	/// Show every color token in its own color
	Palette,
}

fn run(cli: Cli) -> Result<(), LoggerError> {
	match cli.command {
		Commands::Log { level, message, min_level, log_dir, log_name, file } => {
			let level: Severity = level.parse()?;

			let mut builder = Logger::builder()
				.level(min_level)
				.log_name(log_name)
				.log_to_file(file);
			if let Some(dir) = log_dir {
				builder = builder.log_dir(dir);
			}

			let logger = builder.build()?;
			logger.log(level, level_color(level), &message)
		}

		Commands::Print { color, message } => {
			let color: Color = color.parse()?;
			print_color(color, &message)
		}

		Commands::Palette => {
			for color in Color::ALL {
				let code = color.ansi().escape_debug().to_string();
				print_color(color, &format!("{:<14} {}", color.name(), code.dimmed()))?;
			}
			Ok(())
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{} {}", "✘".red().bold(), e);
			ExitCode::FAILURE
		}
	}
}
