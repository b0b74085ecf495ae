//! Log level definitions

use super::error::LogManagerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical level names, indexed by rank.
const LEVEL_NAMES: [&str; 7] = ["TRACE2", "TRACE1", "DEBUG", "INFO", "WARNING", "ERROR", "NONE"];

/// Severity of a log message, ordered from most verbose to `None`.
///
/// `None` is a threshold sentinel: setting it as the minimum level
/// suppresses every message. It is never attached to an emitted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogLevel {
    Trace2 = 0,
    Trace1 = 1,
    Debug = 2,
    #[default]
    Info = 3,
    Warning = 4,
    Error = 5,
    None = 6,
}

impl LogLevel {
    /// All levels in ascending rank order.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace2,
        LogLevel::Trace1,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::None,
    ];

    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Convert a raw rank back into a level.
    ///
    /// Ranks above `None` clamp to `None`, so a corrupted value can never
    /// select a more verbose threshold than intended.
    pub const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => LogLevel::Trace2,
            1 => LogLevel::Trace1,
            2 => LogLevel::Debug,
            3 => LogLevel::Info,
            4 => LogLevel::Warning,
            5 => LogLevel::Error,
            _ => LogLevel::None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        rank_name(self.rank())
    }

    /// Whether a message at `self` passes a `threshold`.
    #[inline]
    pub fn admits(self, threshold: LogLevel) -> bool {
        self >= threshold
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace2 => BrightBlack,
            LogLevel::Trace1 => Cyan,
            LogLevel::Debug => BrightCyan,
            LogLevel::Info => BrightGreen,
            LogLevel::Warning => BrightYellow,
            LogLevel::Error => BrightRed,
            LogLevel::None => White,
        }
    }
}

/// Canonical name for a raw rank; anything past `NONE` renders as `"NONE"`.
pub fn rank_name(rank: u8) -> &'static str {
    let none = LogLevel::None.rank();
    LEVEL_NAMES[rank.min(none) as usize]
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogManagerError;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LEVEL_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|rank| LogLevel::from_rank(rank as u8))
            .ok_or_else(|| LogManagerError::unknown_level(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_str().parse::<LogLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "info".parse::<LogLevel>(),
            Err(LogManagerError::UnknownLevel { .. })
        ));
        assert!("Warning".parse::<LogLevel>().is_err());
        assert!("WARN".parse::<LogLevel>().is_err());
        assert!("".parse::<LogLevel>().is_err());
        assert!(" INFO".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_unknown_level_message() {
        let err = "VERBOSE".parse::<LogLevel>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown log level 'VERBOSE'");
    }

    #[test]
    fn test_ranks_are_contiguous() {
        for (i, level) in LogLevel::ALL.iter().enumerate() {
            assert_eq!(level.rank() as usize, i);
        }
    }

    #[test]
    fn test_out_of_range_rank_clamps_to_none() {
        assert_eq!(LogLevel::from_rank(7), LogLevel::None);
        assert_eq!(LogLevel::from_rank(u8::MAX), LogLevel::None);
        assert_eq!(rank_name(42), "NONE");
        assert_eq!(rank_name(3), "INFO");
    }

    #[test]
    fn test_admission_predicate() {
        assert!(LogLevel::Error.admits(LogLevel::Info));
        assert!(LogLevel::Info.admits(LogLevel::Info));
        assert!(!LogLevel::Debug.admits(LogLevel::Info));
        assert!(!LogLevel::Error.admits(LogLevel::None));
    }

    #[test]
    fn test_display_respects_padding() {
        assert_eq!(format!("{:7}|", LogLevel::Info), "INFO   |");
        assert_eq!(LogLevel::Warning.to_string(), "WARNING");
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
