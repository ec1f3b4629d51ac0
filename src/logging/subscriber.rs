//! Tracing subscriber setup: console formatter and initialisation.
use std::io::IsTerminal as _;

use super::level::Level;

/// Extracts the `message` and `tag` fields from a [`tracing::Event`].
#[derive(Default)]
struct FieldExtractor {
    message: String,
    tag: Option<String>,
}

impl tracing::field::Visit for FieldExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "tag" => self.tag = Some(format!("{value:?}").trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "tag" => self.tag = Some(value.to_string()),
            _ => {}
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that prints
/// `"{tag:>5}: {message}"`, colouring the tag when `ansi` is set.
///
/// Events without a `tag` field (e.g. from dependencies) fall back to the
/// tracing level name.
#[derive(Debug, Clone, Copy)]
pub(super) struct TagFormatter {
    pub(super) ansi: bool,
}

impl TagFormatter {
    fn colour(level: tracing::Level) -> &'static str {
        match level {
            tracing::Level::ERROR => "\x1b[31m",
            tracing::Level::WARN => "\x1b[33m",
            tracing::Level::INFO => "\x1b[32m",
            _ => "\x1b[2m",
        }
    }
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for TagFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();

        let mut extractor = FieldExtractor::default();
        event.record(&mut extractor);
        let tag = extractor
            .tag
            .unwrap_or_else(|| level.as_str().to_string());
        let msg = &extractor.message;

        if self.ansi {
            writeln!(writer, "{}{tag:>5}\x1b[0m: {msg}", Self::colour(level))
        } else {
            writeln!(writer, "{tag:>5}: {msg}")
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Every line goes to stderr so that stdout carries only generated output.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(min_level: Level) {
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_layer = fmt::layer()
        .event_format(TagFormatter {
            ansi: std::io::stderr().is_terminal(),
        })
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::from_level(min_level.tracing_level()));

    tracing_subscriber::registry().with(console_layer).init();
}
