use crate::config::LoggerConfig;
use crate::level::Level;
use crate::sink::{Sink, StderrSink};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Leveled logger with a threshold fixed at construction.
///
/// Calls at or above the threshold's severity produce exactly one sink write
/// of `"[LEVEL] message"` plus the extra arguments; everything else is a
/// no-op. There is no way to change the threshold of a live instance: build a
/// new `Logger` instead.
#[derive(Clone)]
pub struct Logger {
    threshold: Level,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Builds a stderr logger from `DS_LOG_LEVEL`.
    pub fn from_env() -> Self {
        Self::new(&LoggerConfig::from_env())
    }

    pub fn new(config: &LoggerConfig) -> Self {
        Self::with_sink(config.threshold(), Arc::new(StderrSink))
    }

    pub fn with_sink(threshold: Level, sink: Arc<dyn Sink>) -> Self {
        Self { threshold, sink }
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.threshold)
    }

    pub fn log(&self, level: Level, message: &str, args: &[&dyn fmt::Debug]) {
        if !self.enabled(level) {
            return;
        }
        let line = format!("[{}] {}", level.label(), message);
        self.sink.write(&line, args);
    }

    pub fn error(&self, message: &str, args: &[&dyn fmt::Debug]) {
        self.log(Level::Error, message, args);
    }

    pub fn warn(&self, message: &str, args: &[&dyn fmt::Debug]) {
        self.log(Level::Warn, message, args);
    }

    pub fn info(&self, message: &str, args: &[&dyn fmt::Debug]) {
        self.log(Level::Info, message, args);
    }

    pub fn debug(&self, message: &str, args: &[&dyn fmt::Debug]) {
        self.log(Level::Debug, message, args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_env()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Process-wide logger, built from `DS_LOG_LEVEL` on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::from_env)
}

pub fn error(message: &str, args: &[&dyn fmt::Debug]) {
    global().error(message, args);
}

pub fn warn(message: &str, args: &[&dyn fmt::Debug]) {
    global().warn(message, args);
}

pub fn info(message: &str, args: &[&dyn fmt::Debug]) {
    global().info(message, args);
}

pub fn debug(message: &str, args: &[&dyn fmt::Debug]) {
    global().debug(message, args);
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ds_log {
    ($method:ident, $logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.$method($message, &[$(&$arg as &dyn ::std::fmt::Debug),*])
    };
}

/// `ds_error!(logger, "message", extra, args)`
#[macro_export]
macro_rules! ds_error {
    ($($tt:tt)+) => { $crate::__ds_log!(error, $($tt)+) };
}

/// `ds_warn!(logger, "message", extra, args)`
#[macro_export]
macro_rules! ds_warn {
    ($($tt:tt)+) => { $crate::__ds_log!(warn, $($tt)+) };
}

/// `ds_info!(logger, "message", extra, args)`
#[macro_export]
macro_rules! ds_info {
    ($($tt:tt)+) => { $crate::__ds_log!(info, $($tt)+) };
}

/// `ds_debug!(logger, "message", extra, args)`
#[macro_export]
macro_rules! ds_debug {
    ($($tt:tt)+) => { $crate::__ds_log!(debug, $($tt)+) };
}
