//! Logging infrastructure: a thin structured logger over [`tracing`].

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Console level defaults to INFO, raised to DEBUG with `verbose`.
/// `RESUMAKE_LOG` overrides both (standard env-filter syntax).
pub fn init_subscriber(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("RESUMAKE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Structured logger handed through the pipeline.
///
/// Wraps [`tracing`] macros so pipeline code logs through one interface;
/// warnings are counted so commands can report a degraded build.
#[derive(Debug, Default)]
pub struct Logger {
    warnings: std::sync::atomic::AtomicUsize,
}

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a stage header (major pipeline phase).
    pub fn stage(&self, msg: &str) {
        tracing::info!("==> {msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        self.warnings
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        tracing::warn!("{msg}");
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Number of warnings emitted so far.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.load(std::sync::atomic::Ordering::Relaxed)
    }
}
