// ══════════════════════════════════════════════════════════════════════════════
// COLOR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Named color tokens and their ANSI escape sequences. Tokens are plain values,
// independent of any logger instance, so callers can pass them to `log` or
// `print_color` directly.

use std::fmt;
use std::str::FromStr;
use crate::constants::*;
use crate::error::LoggerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
	Blue,
	Cyan,
	Green,
	Magenta,
	Red,
	White,
	Yellow,
	LightBlue,
	LightCyan,
	LightGray,
	LightGreen,
	LightMagenta,
	LightRed,
	LightWhite,
	LightYellow,
	Reset,
}

impl Color {
	pub const ALL: [Color; 16] = [
		Color::Blue,
		Color::Cyan,
		Color::Green,
		Color::Magenta,
		Color::Red,
		Color::White,
		Color::Yellow,
		Color::LightBlue,
		Color::LightCyan,
		Color::LightGray,
		Color::LightGreen,
		Color::LightMagenta,
		Color::LightRed,
		Color::LightWhite,
		Color::LightYellow,
		Color::Reset,
	];

	/// The raw ANSI escape sequence for this token.
	pub fn ansi(self) -> &'static str {
		match self {
			Color::Blue => BLUE,
			Color::Cyan => CYAN,
			Color::Green => GREEN,
			Color::Magenta => MAGENTA,
			Color::Red => RED,
			Color::White => WHITE,
			Color::Yellow => YELLOW,
			Color::LightBlue => LIGHT_BLUE,
			Color::LightCyan => LIGHT_CYAN,
			Color::LightGray => LIGHT_GRAY,
			Color::LightGreen => LIGHT_GREEN,
			Color::LightMagenta => LIGHT_MAGENTA,
			Color::LightRed => LIGHT_RED,
			Color::LightWhite => LIGHT_WHITE,
			Color::LightYellow => LIGHT_YELLOW,
			Color::Reset => RESET,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Color::Blue => "blue",
			Color::Cyan => "cyan",
			Color::Green => "green",
			Color::Magenta => "magenta",
			Color::Red => "red",
			Color::White => "white",
			Color::Yellow => "yellow",
			Color::LightBlue => "light_blue",
			Color::LightCyan => "light_cyan",
			Color::LightGray => "light_gray",
			Color::LightGreen => "light_green",
			Color::LightMagenta => "light_magenta",
			Color::LightRed => "light_red",
			Color::LightWhite => "light_white",
			Color::LightYellow => "light_yellow",
			Color::Reset => "reset",
		}
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.ansi())
	}
}

/// Accepts `light_blue`, `light-blue`, `LIGHT_BLUE` and `lightblue`.
impl FromStr for Color {
	type Err = LoggerError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted: String = s
			.chars()
			.filter(|c| *c != '_' && *c != '-')
			.map(|c| c.to_ascii_lowercase())
			.collect();

		Color::ALL
			.into_iter()
			.find(|color| color.name().replace('_', "") == wanted)
			.ok_or_else(|| LoggerError::InvalidConfiguration(format!("Invalid color: {}", s)))
	}
}
