use std::path::PathBuf;

use crate::error::BikeshareError;
use crate::selector::City;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Error-level event (the load failed).
    Error,
    /// Critical error (missing source or other I/O failures).
    Critical,
}

impl LoadSeverity {
    /// Severity of a failed load.
    pub fn for_error(e: &BikeshareError) -> Self {
        match e {
            BikeshareError::SourceNotFound { .. } | BikeshareError::Io(_) => LoadSeverity::Critical,
            BikeshareError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
                _ => LoadSeverity::Error,
            },
            BikeshareError::CityNotConfigured { .. }
            | BikeshareError::SchemaMismatch { .. }
            | BikeshareError::ParseError { .. }
            | BikeshareError::Config { .. } => LoadSeverity::Error,
        }
    }
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    pub city: City,
    /// Resolved source path.
    pub path: PathBuf,
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of loaded rows.
    pub rows: usize,
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait LoadObserver: Send + Sync {
    /// Called when loading succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when loading fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &BikeshareError) {}

    /// Called when a load failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &BikeshareError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Reports load events through the `log` facade.
#[derive(Debug, Default)]
pub struct LogObserver;

impl LoadObserver for LogObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        log::info!(
            "[load][ok] city={} path={} rows={}",
            ctx.city,
            ctx.path.display(),
            stats.rows
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &BikeshareError) {
        log::error!(
            "[load][{:?}] city={} path={} err={}",
            severity,
            ctx.city,
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &BikeshareError) {
        log::error!(
            "[ALERT][load][{:?}] city={} path={} err={}",
            severity,
            ctx.city,
            ctx.path.display(),
            error
        );
    }
}
