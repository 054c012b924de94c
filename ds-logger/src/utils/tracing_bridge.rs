use crate::error::LoggerError;
use crate::level::Level;
use nu_ansi_term::{Color, Style};
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields, MakeWriter},
    prelude::*,
    registry::LookupSpan,
    Layer,
};

/// Installs a global `tracing` subscriber that writes `[LEVEL] message` lines
/// to stderr, filtered by `DS_LOG_LEVEL`.
pub fn setup_logger() -> Result<Level, LoggerError> {
    let threshold = crate::config::LoggerConfig::from_env().threshold();
    setup_logger_with_level(threshold, false)?;
    Ok(threshold)
}

pub fn setup_logger_with_level(threshold: Level, ansi: bool) -> Result<(), LoggerError> {
    tracing_subscriber::registry()
        .with(console_layer(threshold, std::io::stderr, ansi))
        .try_init()
        .map_err(|e| LoggerError::SubscriberInstall {
            reason: e.to_string(),
        })
}

/// Console layer filtered to `threshold`, writing through `writer`.
pub fn console_layer<S, W>(threshold: Level, writer: W, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .event_format(PrefixFormatter { ansi })
        .with_filter(LevelFilter::from_level(threshold.into()))
}

// --- Formatter ---

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<String>,
}

impl tracing::field::Visit for EventVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.record_debug(field, &value);
        }
    }
}

/// Formats events as `[LEVEL] message key=value ...`.
pub struct PrefixFormatter {
    ansi: bool,
}

impl PrefixFormatter {
    fn tag_style(level: &tracing::Level) -> Style {
        match *level {
            tracing::Level::ERROR => Style::new().fg(Color::LightRed).bold(),
            tracing::Level::WARN => Style::new().fg(Color::Yellow).bold(),
            tracing::Level::INFO => Style::new().fg(Color::LightGreen),
            _ => Style::new().fg(Color::LightBlue),
        }
    }
}

impl<S, N> FormatEvent<S, N> for PrefixFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = event.metadata().level();
        let tag = format!("[{}]", level.as_str());
        if self.ansi {
            write!(writer, "{} ", Self::tag_style(level).paint(tag))?;
        } else {
            write!(writer, "{} ", tag)?;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        write!(writer, "{}", visitor.message)?;
        for field in &visitor.fields {
            write!(writer, " {}", field)?;
        }
        writeln!(writer)
    }
}
