//! Tracing setup for the Lunar toolkit.
//!
//! Builds the global [`tracing`] subscriber out of a stdout layer and an optional file layer,
//! each with its own format and filter.
//!
//! ```no_run
//! use lunar_tracing::{LayerInfo, LogFormat, LunarTracer, Tracer};
//!
//! let stdout = LayerInfo::new(LogFormat::Terminal, "info".to_string(), String::new(), None);
//! let _guard = LunarTracer::new().with_stdout(stdout).init().expect("failed to init tracing");
//! ```

mod formatter;
mod layers;

pub use formatter::LogFormat;
pub use layers::{FileInfo, FileWorkerGuard};
pub use tracing;
pub use tracing_subscriber;

use layers::Layers;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Settings of a single tracing layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Creates a new [LayerInfo].
    ///
    /// `default_directive` applies when neither `RUST_LOG` nor `filters` match an event,
    /// `filters` is a comma separated list of extra directives, and `color` is the color mode
    /// (`always`, `auto` or `never`), with `None` disabling colors.
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: "info".to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}

/// Something that can install the global tracing subscriber.
pub trait Tracer {
    /// Installs the subscriber. The returned guard, if any, must be kept alive for file logs to
    /// be flushed.
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>>;
}

/// The [Tracer] used by the Lunar binaries.
#[derive(Debug, Clone, Default)]
pub struct LunarTracer {
    stdout: LayerInfo,
    file: Option<(LayerInfo, FileInfo)>,
}

impl LunarTracer {
    /// Creates a tracer logging `info` and above to stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stdout layer settings.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }

    /// Also writes logs to the file described by `file_info`.
    pub fn with_file(mut self, config: LayerInfo, file_info: FileInfo) -> Self {
        self.file = Some((config, file_info));
        self
    }
}

impl Tracer for LunarTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut layers = Layers::new();

        layers.stdout(
            self.stdout.format,
            self.stdout.default_directive.parse()?,
            &self.stdout.filters,
            self.stdout.color,
        )?;

        let log_file = self.file.as_ref().map(|(_, file_info)| file_info.path());
        let file_guard = match self.file {
            Some((config, file_info)) => {
                Some(layers.file(config.format, &config.filters, file_info)?)
            }
            None => None,
        };

        // a subscriber may already be installed, e.g. by a test harness
        let _ = tracing_subscriber::registry().with(layers.into_inner()).try_init();
        if let Some(path) = log_file {
            tracing::debug!(path = %path.display(), "writing logs to file");
        }
        Ok(file_guard)
    }
}
