//! Diagnostic notices emitted while loading and reading values.
//!
//! Notices never affect results. They exist so a caller can see why a getter
//! fell back to its default or why a load stopped.

use std::fmt;
use std::sync::Arc;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => f.write_str("INFO"),
            Level::Error => f.write_str("ERROR"),
        }
    }
}

/// Sink for leveled diagnostic messages.
pub trait Notifier: Send + Sync + fmt::Debug {
    fn notify(&self, level: Level, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, level: Level, message: &str) {
        (**self).notify(level, message)
    }
}

/// Discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _level: Level, _message: &str) {}
}

/// Forwards notices to `tracing` under the `envparse` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: Level, message: &str) {
        match level {
            Level::Info => tracing::info!(target: "envparse", "{message}"),
            Level::Error => tracing::error!(target: "envparse", "{message}"),
        }
    }
}
