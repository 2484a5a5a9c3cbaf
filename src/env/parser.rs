use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::builder::EnvParserBuilder;
use super::coerce::FromEnvStr;
use super::line::{parse_line, SplitPolicy};
use super::provider::EnvProvider;
use super::LoadError;
use crate::notify::{Level, Notifier};

/// Counts from a successful [`EnvParser::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Entries written to the environment.
    pub loaded: usize,
    /// Empty or whitespace-only lines that were skipped.
    pub blank_lines: usize,
}

/// Loads `KEY=VALUE` files into an environment and reads typed values back.
///
/// Every getter returns a usable value. A key that is unset, set to an empty
/// string, or set to something that does not parse as the requested type
/// resolves to the caller's default.
///
/// When the cache is enabled, keys written by [`load`](Self::load) are also
/// kept in memory and answered from there without consulting the provider.
///
/// ## Example
///
/// ```no_run
/// use envparse::EnvParser;
///
/// let env = EnvParser::new();
/// env.load("app.env")?;
///
/// let port = env.get_int32("PORT", 8080);
/// let ratio = env.get_float64("RATIO", 1.0);
/// let show_prices = env.get_bool("SHOW_PRICES", false);
/// # Ok::<(), envparse::LoadError>(())
/// ```
#[derive(Debug)]
pub struct EnvParser {
    pub(super) provider: Arc<dyn EnvProvider>,
    pub(super) notifier: Arc<dyn Notifier>,
    pub(super) cache: Option<Mutex<HashMap<String, String>>>,
    pub(super) split_policy: SplitPolicy,
}

impl Default for EnvParser {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EnvParser {
    /// Creates a parser over the process environment with the cache enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for a customised parser.
    pub fn builder() -> EnvParserBuilder {
        EnvParserBuilder::default()
    }

    /// Reads `path` line by line and sets each entry in the environment.
    ///
    /// Blank lines are skipped. The first bad line aborts the load; entries
    /// from earlier lines are not rolled back.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let result = self.load_file(path);

        match &result {
            Ok(report) => tracing::debug!(
                path = %path.display(),
                loaded = report.loaded,
                blank_lines = report.blank_lines,
                "Loaded env file"
            ),
            Err(err) => self.notifier.notify(Level::Error, &err.to_string()),
        }

        result
    }

    fn load_file(&self, path: &Path) -> Result<LoadReport, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let mut report = LoadReport::default();

        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| LoadError::Scan {
                path: path.to_path_buf(),
                line: line_no,
                source,
            })?;

            let parsed =
                parse_line(&line, self.split_policy).map_err(|kind| LoadError::MalformedLine {
                    path: path.to_path_buf(),
                    line: line_no,
                    kind,
                })?;
            let Some((key, value)) = parsed else {
                report.blank_lines += 1;
                continue;
            };

            self.provider
                .set(key, value)
                .map_err(|reason| LoadError::EnvironmentWrite {
                    key: key.to_owned(),
                    reason,
                })?;
            if let Some(mut cache) = self.lock_cache() {
                cache.insert(key.to_owned(), value.to_owned());
            }
            report.loaded += 1;
        }

        Ok(report)
    }

    /// Returns the value for `key` converted to `T`, or `default`.
    pub fn get<T: FromEnvStr>(&self, key: &str, default: T) -> T {
        let Some(candidate) = self.candidate(key) else {
            return default;
        };

        match T::from_env_str(&candidate) {
            Some(value) => value,
            None => {
                self.notifier.notify(
                    Level::Info,
                    &format!(
                        "{key} is set but is not a {}, using default value",
                        T::TYPE_NAME
                    ),
                );
                default
            }
        }
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        match self.candidate(key) {
            Some(value) => value,
            None => default.to_owned(),
        }
    }

    /// Platform-width integer.
    pub fn get_int(&self, key: &str, default: isize) -> isize {
        self.get(key, default)
    }

    pub fn get_int32(&self, key: &str, default: i32) -> i32 {
        self.get(key, default)
    }

    pub fn get_int64(&self, key: &str, default: i64) -> i64 {
        self.get(key, default)
    }

    pub fn get_float32(&self, key: &str, default: f32) -> f32 {
        self.get(key, default)
    }

    pub fn get_float64(&self, key: &str, default: f64) -> f64 {
        self.get(key, default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key, default)
    }

    /// Returns the raw non-empty value for `key` without emitting notices.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.raw(key).filter(|value| !value.is_empty())
    }

    /// Whether `key` was loaded into this parser's cache.
    pub fn is_cached(&self, key: &str) -> bool {
        self.lock_cache()
            .is_some_and(|cache| cache.contains_key(key))
    }

    /// Number of cached entries; zero when the cache is disabled.
    pub fn cached_len(&self) -> usize {
        self.lock_cache().map_or(0, |cache| cache.len())
    }

    fn candidate(&self, key: &str) -> Option<String> {
        match self.raw(key) {
            None => {
                self.notifier
                    .notify(Level::Info, &format!("{key} not set, using default value"));
                None
            }
            Some(value) if value.is_empty() => {
                self.notifier.notify(
                    Level::Info,
                    &format!("{key} is set but empty, using default value"),
                );
                None
            }
            Some(value) => Some(value),
        }
    }

    fn raw(&self, key: &str) -> Option<String> {
        if let Some(value) = self.lock_cache().and_then(|cache| cache.get(key).cloned()) {
            return Some(value);
        }
        self.provider.get(key)
    }

    fn lock_cache(&self) -> Option<MutexGuard<'_, HashMap<String, String>>> {
        let cache = self.cache.as_ref()?;
        Some(cache.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
