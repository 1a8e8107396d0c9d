// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::str::FromStr;

/// The severity of a log message.
///
/// Levels are ordered from the most verbose to the least verbose:
///
/// - `Debug`
/// - `Info`
/// - `Error`
///
/// If the minimum level is set to `Info`, `Info` and `Error` messages are written while `Debug`
/// messages are dropped.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Designates lower priority information.
    #[default]
    Debug = 0,
    /// Designates useful information.
    Info = 1,
    /// Designates serious errors.
    Error = 2,
}

impl Level {
    /// The tag that starts every line written at this level.
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Debug => "[DEBUG]",
            Level::Info => "[INFO]",
            Level::Error => "[ERROR]",
        }
    }

    /// Returns the string representation of the level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The minimum level a logger writes.
///
/// Besides the three [`Level`]s, `Off` rejects every message.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LevelFilter {
    /// Write everything.
    #[default]
    Debug = 0,
    /// Write info and error messages.
    Info = 1,
    /// Write error messages only.
    Error = 2,
    /// Write nothing.
    Off = 3,
}

impl LevelFilter {
    /// Returns whether messages of `level` pass this filter.
    pub const fn allows(self, level: Level) -> bool {
        level as u8 >= self as u8
    }

    /// Returns the string representation of the filter.
    pub const fn as_str(self) -> &'static str {
        match self {
            LevelFilter::Debug => "DEBUG",
            LevelFilter::Info => "INFO",
            LevelFilter::Error => "ERROR",
            LevelFilter::Off => "OFF",
        }
    }

    pub(crate) const fn from_u8(n: u8) -> LevelFilter {
        match n {
            0 => LevelFilter::Debug,
            1 => LevelFilter::Info,
            2 => LevelFilter::Error,
            _ => LevelFilter::Off,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => LevelFilter::Debug,
            Level::Info => LevelFilter::Info,
            Level::Error => LevelFilter::Error,
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The error returned when parsing a [`Level`] or [`LevelFilter`] from an unknown string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown log level {:?}, expected one of: debug, info, error, off",
            self.0
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s.trim();
        if level.eq_ignore_ascii_case("debug") {
            Ok(Level::Debug)
        } else if level.eq_ignore_ascii_case("info") {
            Ok(Level::Info)
        } else if level.eq_ignore_ascii_case("error") {
            Ok(Level::Error)
        } else {
            Err(ParseLevelError(s.to_string()))
        }
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("off") {
            Ok(LevelFilter::Off)
        } else {
            Level::from_str(s).map(LevelFilter::from)
        }
    }
}

#[cfg(feature = "bridge-log")]
impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error | log::Level::Warn => Level::Error,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Error);
    }

    #[test]
    fn test_level_filter_allows() {
        assert!(LevelFilter::Debug.allows(Level::Debug));
        assert!(LevelFilter::Info.allows(Level::Error));
        assert!(!LevelFilter::Info.allows(Level::Debug));
        assert!(!LevelFilter::Error.allows(Level::Info));
        for level in [Level::Debug, Level::Info, Level::Error] {
            assert!(!LevelFilter::Off.allows(level));
            assert!(LevelFilter::from(level).allows(level));
        }
        for filter in [
            LevelFilter::Debug,
            LevelFilter::Info,
            LevelFilter::Error,
            LevelFilter::Off,
        ] {
            assert_eq!(LevelFilter::from_u8(filter as u8), filter);
        }
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
        assert_eq!(" INFO ".parse::<Level>(), Ok(Level::Info));
        assert_eq!("Error".parse::<Level>(), Ok(Level::Error));

        assert_eq!("off".parse::<LevelFilter>(), Ok(LevelFilter::Off));
        assert_eq!("info".parse::<LevelFilter>(), Ok(LevelFilter::Info));
        assert!("off".parse::<Level>().is_err());

        let err = "warn".parse::<Level>().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"unknown log level "warn", expected one of: debug, info, error, off"#
        );
    }

    #[test]
    fn test_tags() {
        assert_eq!(Level::Debug.tag(), "[DEBUG]");
        assert_eq!(Level::Info.tag(), "[INFO]");
        assert_eq!(Level::Error.tag(), "[ERROR]");
        assert_eq!(format!("{:>5}", Level::Info), " INFO");
    }

    #[cfg(feature = "bridge-log")]
    #[test]
    fn test_from_log_level() {
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::from(log::Level::Info), Level::Info);
        assert_eq!(Level::from(log::Level::Warn), Level::Error);
        assert_eq!(Level::from(log::Level::Error), Level::Error);
    }
}
