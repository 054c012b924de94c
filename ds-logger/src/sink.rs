//! # Output Sinks
//!
//! A sink receives the prefixed line and the extra arguments of every call
//! that passes the threshold. Arguments arrive as discrete values; joining
//! them for display is the sink's business.

use std::fmt;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

pub trait Sink: Send + Sync {
    fn write(&self, line: &str, args: &[&dyn fmt::Debug]);
}

/// Writes each call straight to the process's standard error stream.
///
/// The line is followed by each argument rendered with `{:?}`, so string
/// arguments appear quoted (`[INFO] x "ctx"`) and stay distinguishable from
/// the message text.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write(&self, line: &str, args: &[&dyn fmt::Debug]) {
        let mut rendered = String::from(line);
        for arg in args {
            rendered.push(' ');
            rendered.push_str(&format!("{:?}", arg));
        }
        rendered.push('\n');

        // A single write per call; failures are dropped so logging stays total.
        let _ = std::io::stderr().lock().write_all(rendered.as_bytes());
    }
}

/// One captured sink write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub line: String,
    pub args: Vec<String>,
}

impl Emitted {
    pub fn new<I, S>(line: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            line: line.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Records every write in memory, arguments rendered with `{:?}`.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Emitted>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Emitted> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Emitted>> {
        // A poisoned buffer is still a valid Vec.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Sink for MemorySink {
    fn write(&self, line: &str, args: &[&dyn fmt::Debug]) {
        let record = Emitted {
            line: line.to_string(),
            args: args.iter().map(|arg| format!("{:?}", arg)).collect(),
        };
        self.lock().push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_args_discrete() {
        let sink = MemorySink::new();
        sink.write("[INFO] hello", &[&1, &"two", &3.5]);

        assert_eq!(sink.len(), 1);
        assert_eq!(
            sink.records(),
            vec![Emitted::new("[INFO] hello", ["1", "\"two\"", "3.5"])]
        );
    }

    #[test]
    fn test_memory_sink_clear() {
        let sink = MemorySink::new();
        sink.write("[WARN] a", &[]);
        sink.write("[WARN] b", &[]);
        assert_eq!(sink.len(), 2);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_stderr_sink_never_panics() {
        StderrSink.write("[ERROR] to stderr", &[&42, &vec![1, 2]]);
    }
}
