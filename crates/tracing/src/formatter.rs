use std::{
    fmt::{self, Display},
    io::IsTerminal,
};

use clap::ValueEnum;
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::layers::BoxedLayer;

/// The output format of a tracing layer.
#[derive(Debug, Copy, Clone, ValueEnum, Eq, PartialEq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,

    /// `key=value` pairs, one event per line.
    LogFmt,

    /// Human readable output, colored when the writer supports it.
    Terminal,
}

impl LogFormat {
    /// Builds a layer emitting this format, filtered by `filter`.
    ///
    /// Events go to `file_writer` when one is given and to stdout otherwise. Colors follow
    /// `color` (`always`, `auto` or `never`); `None` disables them.
    pub fn apply(
        &self,
        filter: EnvFilter,
        color: Option<String>,
        file_writer: Option<NonBlocking>,
    ) -> BoxedLayer<Registry> {
        let ansi = use_ansi(color.as_deref(), std::io::stdout().is_terminal());
        let target = std::env::var("RUST_LOG_TARGET").map(|val| val != "0").unwrap_or(true);

        match self {
            LogFormat::Json => {
                let layer =
                    tracing_subscriber::fmt::layer().json().with_ansi(ansi).with_target(target);
                match file_writer {
                    Some(writer) => layer.with_writer(writer).with_filter(filter).boxed(),
                    None => layer.with_filter(filter).boxed(),
                }
            }
            LogFormat::LogFmt => match file_writer {
                Some(writer) => tracing_logfmt::builder()
                    .layer()
                    .with_writer(writer)
                    .with_filter(filter)
                    .boxed(),
                None => tracing_logfmt::layer().with_filter(filter).boxed(),
            },
            LogFormat::Terminal => {
                let layer = tracing_subscriber::fmt::layer().with_ansi(ansi).with_target(target);
                match file_writer {
                    Some(writer) => layer.with_writer(writer).with_filter(filter).boxed(),
                    None => layer.with_filter(filter).boxed(),
                }
            }
        }
    }
}

/// Whether to emit ANSI colors for the color mode `color`. `RUST_LOG_STYLE` overrides the mode,
/// and `auto` only colors when stdout is a terminal.
fn use_ansi(color: Option<&str>, stdout_is_terminal: bool) -> bool {
    let Some(color) = color else { return false };
    let mode = std::env::var("RUST_LOG_STYLE").unwrap_or_else(|_| color.to_string());
    match mode.as_str() {
        "never" => false,
        "auto" => stdout_is_terminal,
        _ => true,
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::LogFmt => write!(f, "log-fmt"),
            LogFormat::Terminal => write!(f, "terminal"),
        }
    }
}
