//! ANSI color rendering for line headers.

use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Escape sequence that resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// The eight standard terminal foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// ANSI color number (0-7), used as the second digit of `ESC[3nm`.
    pub const fn code(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
        }
    }

    /// Lower-case color name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

impl FromStr for Color {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            _ => Err(LogError::UnknownColor(s.to_string())),
        }
    }
}

/// Wraps `text` in the escape sequence for `color`.
pub fn colored(color: Color, text: &str) -> String {
    format!("\x1b[3{}m{}{}", color.code(), text, RESET)
}

/// Like [`colored`], but returns `text` untouched when `enabled` is false.
pub fn paint(enabled: bool, color: Color, text: &str) -> String {
    if enabled {
        colored(color, text)
    } else {
        text.to_string()
    }
}
