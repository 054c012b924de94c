use crate::error::ConfigError;
use crate::level::Level;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the logger threshold.
pub const LEVEL_ENV_VAR: &str = "DS_LOG_LEVEL";

/// Raw logger configuration, resolved to a [`Level`] at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub level: Option<String>,
}

impl LoggerConfig {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: Some(level.into()),
        }
    }

    /// Reads `DS_LOG_LEVEL` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads `DS_LOG_LEVEL` through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        Self {
            level: lookup(LEVEL_ENV_VAR),
        }
    }

    /// Reads `DS_LOG_LEVEL` from a dotenv file. The process environment is
    /// left untouched.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let env_file_error = |e: dotenv::Error| ConfigError::EnvFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        let mut level = None;
        #[allow(deprecated)]
        let items = dotenv::from_path_iter(path).map_err(env_file_error)?;
        for item in items {
            let (key, value) = item.map_err(env_file_error)?;
            if key == LEVEL_ENV_VAR {
                level = Some(value);
            }
        }

        Ok(Self { level })
    }

    pub fn threshold(&self) -> Level {
        Level::resolve(self.level.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_lookup_reads_level_var() {
        let config = LoggerConfig::from_lookup(|key| {
            assert_eq!(key, "DS_LOG_LEVEL");
            Some("info".to_string())
        });
        assert_eq!(config.level.as_deref(), Some("info"));
        assert_eq!(config.threshold(), Level::Info);
    }

    #[test]
    fn test_missing_value_defaults_to_warn() {
        let config = LoggerConfig::from_lookup(|_| None);
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.threshold(), Level::Warn);
    }

    #[test]
    fn test_unknown_value_defaults_to_warn() {
        assert_eq!(LoggerConfig::new("loud").threshold(), Level::Warn);
        assert_eq!(LoggerConfig::new("").threshold(), Level::Warn);
    }

    #[test]
    fn test_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "OTHER=1").unwrap();
        writeln!(file, "DS_LOG_LEVEL=debug").unwrap();

        let config = LoggerConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.threshold(), Level::Debug);
    }

    #[test]
    fn test_from_env_file_without_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "OTHER=1").unwrap();

        let config = LoggerConfig::from_env_file(file.path()).unwrap();
        assert!(config.level.is_none());
        assert_eq!(config.threshold(), Level::Warn);
    }

    #[test]
    fn test_from_env_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = LoggerConfig::from_env_file(dir.path().join("absent.env"));
        assert!(matches!(result, Err(ConfigError::EnvFile { .. })));
    }

    #[test]
    fn test_deserialize() {
        let config: LoggerConfig = serde_json::from_str(r#"{"level":"error"}"#).unwrap();
        assert_eq!(config.threshold(), Level::Error);

        let config: LoggerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.level, None);
    }
}
