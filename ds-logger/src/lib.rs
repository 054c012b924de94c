//! # ds-logger - Leveled Console Logging
//!
//! A small logger whose severity threshold comes from `DS_LOG_LEVEL` and is
//! fixed for the lifetime of each [`Logger`].
//!
//! ## Modules
//!
//! - [`config`] - Where the threshold string is read from
//! - [`error`] - Typed error handling with thiserror
//! - [`level`] - Severity levels and threshold resolution
//! - [`logger`] - The leveled logger and the process-wide default instance
//! - [`sink`] - Output sinks (stderr, in-memory capture)
//! - `utils` - `tracing` subscriber that honours the same threshold

pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod sink;
pub(crate) mod utils;

pub use config::{LoggerConfig, LEVEL_ENV_VAR};
pub use error::{ConfigError, LevelError, LoggerError};
pub use level::Level;
pub use logger::{debug, error, global, info, warn, Logger};
pub use sink::{Emitted, MemorySink, Sink, StderrSink};

pub use utils::{console_layer, setup_logger, setup_logger_with_level, PrefixFormatter};
