//! Package-level access to a shared default [`EnvParser`].

use std::path::Path;
use std::sync::OnceLock;

use crate::env::{EnvParser, LoadError, LoadReport};
use crate::notify::TracingNotifier;

static DEFAULT: OnceLock<EnvParser> = OnceLock::new();

/// Returns the process-wide default parser.
///
/// It reads and writes the process environment, caches loaded entries, and
/// reports notices through `tracing`.
pub fn default_parser() -> &'static EnvParser {
    DEFAULT.get_or_init(|| EnvParser::builder().with_notifier(TracingNotifier).build())
}

/// Loads `path` through the default parser.
pub fn load(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    default_parser().load(path)
}

pub fn get_string(key: &str, default: &str) -> String {
    default_parser().get_string(key, default)
}

pub fn get_int(key: &str, default: isize) -> isize {
    default_parser().get_int(key, default)
}

pub fn get_int32(key: &str, default: i32) -> i32 {
    default_parser().get_int32(key, default)
}

pub fn get_int64(key: &str, default: i64) -> i64 {
    default_parser().get_int64(key, default)
}

pub fn get_float32(key: &str, default: f32) -> f32 {
    default_parser().get_float32(key, default)
}

pub fn get_float64(key: &str, default: f64) -> f64 {
    default_parser().get_float64(key, default)
}

pub fn get_bool(key: &str, default: bool) -> bool {
    default_parser().get_bool(key, default)
}
