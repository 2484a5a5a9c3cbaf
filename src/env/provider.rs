//! Backing stores for environment entries.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::WriteError;

/// Read/write access to a table of environment variables.
///
/// [`ProcessEnv`] is the real thing; [`MemoryEnv`] keeps everything in a map
/// so tests never touch process-wide state.
pub trait EnvProvider: Send + Sync + std::fmt::Debug {
    /// Returns the value for `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`.
    fn set(&self, key: &str, value: &str) -> Result<(), WriteError>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<P: EnvProvider + ?Sized> EnvProvider for Arc<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WriteError> {
        (**self).set(key, value)
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }
}

/// The current process environment.
///
/// Writes go through [`std::env::set_var`], which is not synchronized with
/// other threads reading or writing the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WriteError> {
        WriteError::check(key, value)?;
        std::env::set_var(key, value);
        Ok(())
    }
}

/// An in-memory environment table.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: Mutex<BTreeMap<String, String>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        Self {
            vars: Mutex::new(map),
        }
    }

    /// Returns a copy of every entry currently set.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.vars.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (key, value) in iter {
            map.insert(key.into(), value.into());
        }
        Self::from_map(map)
    }
}

impl EnvProvider for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WriteError> {
        WriteError::check(key, value)?;
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_env_set_and_get() {
        let env = MemoryEnv::new();
        env.set("HOST", "localhost").unwrap();

        assert_eq!(env.get("HOST").as_deref(), Some("localhost"));
        assert!(env.contains("HOST"));
        assert!(!env.contains("PORT"));
    }

    #[test]
    fn test_memory_env_rejects_invalid_key() {
        let env = MemoryEnv::new();

        assert_eq!(env.set("", "x"), Err(WriteError::EmptyKey));
        assert!(env.snapshot().is_empty());
    }

    #[test]
    fn test_memory_env_from_iter() {
        let env: MemoryEnv = [("A", "1"), ("B", "2")].into_iter().collect();

        assert_eq!(env.snapshot().len(), 2);
        assert_eq!(env.get("B").as_deref(), Some("2"));
    }

    #[test]
    fn test_process_env_rejects_before_writing() {
        assert_eq!(
            ProcessEnv.set("ENVPARSE_BAD=KEY", "x"),
            Err(WriteError::InvalidKey)
        );
        assert_eq!(
            ProcessEnv.set("ENVPARSE_PROVIDER_NUL", "a\0b"),
            Err(WriteError::InvalidValue)
        );
        assert_eq!(ProcessEnv.get("ENVPARSE_PROVIDER_NUL"), None);
    }

    #[test]
    fn test_process_env_get_invalid_key_is_unset() {
        assert_eq!(ProcessEnv.get(""), None);
        assert_eq!(ProcessEnv.get("A=B"), None);
    }
}
