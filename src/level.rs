//! Log severity levels
//!
//! A totally ordered enum used both for filtering and for picking the
//! per-level console color.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color;

/// Log severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    /// Get the display name for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Bracketed level tag padded to the fixed console column width.
    pub fn padded_tag(&self) -> &'static str {
        match self {
            Level::Debug => "[DEBUG] ",
            Level::Info => "[INFO]  ",
            Level::Warning => "[WARN]  ",
            Level::Error => "[ERROR] ",
        }
    }

    /// ANSI color used for this level's console tag.
    pub fn color(&self) -> &'static str {
        match self {
            Level::Debug => color::BLUE,
            Level::Info => color::GREEN,
            Level::Warning => color::YELLOW,
            Level::Error => color::RED,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized level name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_totally_ordered() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Level::Debug.as_str(), "DEBUG");
        assert_eq!(Level::Info.as_str(), "INFO");
        assert_eq!(Level::Warning.as_str(), "WARN");
        assert_eq!(Level::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_padded_tags_share_width() {
        for level in [Level::Debug, Level::Info, Level::Warning, Level::Error] {
            assert_eq!(level.padded_tag().len(), 8);
            assert!(level.padded_tag().starts_with(&format!("[{}]", level)));
        }
    }

    #[test]
    fn test_parse_accepts_both_warning_spellings() {
        assert_eq!("warn".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("Error".parse::<Level>(), Ok(Level::Error));
        assert!("fatal".parse::<Level>().is_err());
    }
}
