//! # Error Types
//!
//! Logging itself never fails. These errors cover the edges around it:
//! parsing a level name, reading a dotenv file, installing a subscriber.

use thiserror::Error;

/// Errors from installing the `tracing` bridge.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to install tracing subscriber: {reason}")]
    SubscriberInstall { reason: String },
}

/// Level name parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Unknown log level: '{value}' (expected error, warn, info or debug)")]
    Unknown { value: String },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read env file '{path}': {reason}")]
    EnvFile { path: String, reason: String },
}
