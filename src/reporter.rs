//! Output sinks for user-observable catalog events
//!
//! Every performed behavior, computed cost and lifecycle stage is emitted as a
//! single line through a [`Reporter`]. The core never writes to the console
//! directly, so the same entity can run against stdout, a `tracing`
//! subscriber, a capturing buffer in tests, or nothing at all.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Arc;

/// Text sink for catalog events.
///
/// `report` has no failure mode. Implementations doing I/O swallow and log
/// their own errors.
pub trait Reporter: Send + Sync {
    /// Emit one line of output
    fn report(&self, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, message: &str) {
        (**self).report(message)
    }
}

/// Severity used by [`TracingReporter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Writes each line to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, message: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(err) = writeln!(handle, "{}", message) {
            tracing::warn!(error = %err, "failed to write report line to stdout");
        }
    }
}

/// Forwards each line to the active `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter {
    level: ReportLevel,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: ReportLevel) -> Self {
        self.level = level;
        self
    }

    pub fn level(&self) -> ReportLevel {
        self.level
    }
}

impl Reporter for TracingReporter {
    fn report(&self, message: &str) {
        match self.level {
            ReportLevel::Debug => tracing::debug!(target: "catalog", "{}", message),
            ReportLevel::Info => tracing::info!(target: "catalog", "{}", message),
            ReportLevel::Warn => tracing::warn!(target: "catalog", "{}", message),
            ReportLevel::Error => tracing::error!(target: "catalog", "{}", message),
        }
    }
}

/// In-memory reporter that keeps every line it receives.
///
/// Clones share the same buffer, so a test can hand one clone to the code
/// under test and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured lines in arrival order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drain the captured lines
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.lock().last().cloned()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _message: &str) {}
}

/// Convert any reporter into the shared form the catalog types hold
pub fn shared_reporter<R: Reporter + 'static>(reporter: R) -> Arc<dyn Reporter> {
    Arc::new(reporter)
}
