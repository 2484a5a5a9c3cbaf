use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::line::SplitPolicy;
use super::parser::EnvParser;
use super::provider::{EnvProvider, ProcessEnv};
use crate::notify::{NoopNotifier, Notifier};

/// Builder for an [`EnvParser`].
///
/// Defaults: the process environment, the cache enabled, the strict split
/// policy, and no diagnostics.
///
/// ## Example
///
/// ```
/// use envparse::{EnvParser, MemoryEnv, SplitPolicy, TracingNotifier};
///
/// let env = EnvParser::builder()
///     .with_provider(MemoryEnv::new())
///     .with_notifier(TracingNotifier)
///     .with_split_policy(SplitPolicy::FirstSeparator)
///     .with_cache(false)
///     .build();
///
/// assert_eq!(env.get_int32("PORT", 8080), 8080);
/// ```
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct EnvParserBuilder {
    provider: Arc<dyn EnvProvider>,
    notifier: Arc<dyn Notifier>,
    cache: bool,
    split_policy: SplitPolicy,
}

impl Default for EnvParserBuilder {
    fn default() -> Self {
        Self {
            provider: Arc::new(ProcessEnv),
            notifier: Arc::new(NoopNotifier),
            cache: true,
            split_policy: SplitPolicy::default(),
        }
    }
}

impl EnvParserBuilder {
    /// Sets the environment entries are written to and read from.
    ///
    /// Pass an `Arc` to keep a handle on the provider after building.
    pub fn with_provider(mut self, provider: impl EnvProvider + 'static) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// Sets the sink for diagnostic notices.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// Enables or disables the in-memory cache of loaded entries.
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Self {
        self.split_policy = policy;
        self
    }

    pub fn build(self) -> EnvParser {
        EnvParser {
            provider: self.provider,
            notifier: self.notifier,
            cache: self.cache.then(|| Mutex::new(HashMap::new())),
            split_policy: self.split_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnv;

    #[test]
    fn test_cache_enabled_by_default() {
        let parser = EnvParser::builder().with_provider(MemoryEnv::new()).build();

        assert!(parser.cache.is_some());
        assert_eq!(parser.split_policy, SplitPolicy::Strict);
    }

    #[test]
    fn test_cache_can_be_disabled() {
        let parser = EnvParser::builder()
            .with_provider(MemoryEnv::new())
            .with_cache(false)
            .build();

        assert!(parser.cache.is_none());
        assert_eq!(parser.cached_len(), 0);
    }

    #[test]
    fn test_shared_provider_stays_reachable() {
        let env = Arc::new(MemoryEnv::new());
        let parser = EnvParser::builder().with_provider(Arc::clone(&env)).build();

        env.set("SHARED", "yes").unwrap();
        assert_eq!(parser.get_string("SHARED", "no"), "yes");
    }
}
