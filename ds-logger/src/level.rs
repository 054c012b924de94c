use crate::error::LevelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log call, ordered by increasing verbosity.
///
/// A call at level `L` is emitted when `L <= threshold`, so `Error` passes
/// every threshold and `Debug` only passes a `Debug` threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Error, Level::Warn, Level::Info, Level::Debug];

    /// Threshold used when the configuration is absent or unrecognised.
    pub const DEFAULT: Level = Level::Warn;

    /// Lowercase configuration name.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Uppercase name used in the `[LEVEL] ` prefix.
    pub fn label(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Whether a call at `self` passes `threshold`.
    pub fn passes(self, threshold: Level) -> bool {
        self <= threshold
    }

    /// Resolves a raw configuration value to a threshold, falling back to
    /// [`Level::DEFAULT`] for missing, empty or unknown values. The fallback
    /// is silent.
    pub fn resolve(raw: Option<&str>) -> Level {
        match raw {
            None => Level::DEFAULT,
            Some(value) => value.parse().unwrap_or(Level::DEFAULT),
        }
    }
}

impl FromStr for Level {
    type Err = LevelError;

    // ASCII case-insensitive, no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LevelError::Unknown {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => tracing::Level::ERROR,
            Level::Warn => tracing::Level::WARN,
            Level::Info => tracing::Level::INFO,
            Level::Debug => tracing::Level::DEBUG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_by_verbosity() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Debug);
        assert_eq!(Level::Error as u8, 0);
        assert_eq!(Level::Debug as u8, 3);
    }

    #[test]
    fn test_passes_matrix() {
        for threshold in Level::ALL {
            for level in Level::ALL {
                assert_eq!(
                    level.passes(threshold),
                    (level as u8) <= (threshold as u8),
                    "level {} threshold {}",
                    level,
                    threshold
                );
            }
        }
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
        assert_eq!("warn".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("info".parse::<Level>(), Ok(Level::Info));
        assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("DEBUG".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("Info".parse::<Level>(), Ok(Level::Info));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(
            err,
            LevelError::Unknown {
                value: "verbose".to_string()
            }
        );
        assert!(" debug".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_resolve_falls_back_to_warn() {
        assert_eq!(Level::resolve(None), Level::Warn);
        assert_eq!(Level::resolve(Some("")), Level::Warn);
        assert_eq!(Level::resolve(Some("trace")), Level::Warn);
        assert_eq!(Level::resolve(Some("debug")), Level::Debug);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Level::Warn.label(), "WARN");
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(tracing::Level::from(Level::Info), tracing::Level::INFO);
    }
}
