use super::config::EngineConfig;
use super::estimate::EstimateSize;
use super::memory::{HeapProbe, MemoryStats, NullProbe};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, trace};

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    size: usize,
    /// Logical access clock value at the entry's last touch. The clock
    /// increments on every cache operation, so recency is a strict total
    /// order and eviction is deterministic.
    last_access: u64,
}

/// A size-budgeted, least-recently-used cache for derived analysis results.
///
/// The cache is an explicitly constructed, explicitly owned store — there is
/// no ambient global instance. Entries are keyed by a caller-chosen string
/// identity (e.g., `"{structure-id}:{operation}:{params}"`), accounted by a
/// caller-supplied or estimated byte size, and evicted strictly
/// least-recently-used once the running total exceeds the configured budget.
///
/// One policy boundary is deliberate: an entry is never evicted by its own
/// insertion, even when it alone exceeds the budget. Oversized single
/// results stay usable; the budget re-asserts itself on the next insert.
///
/// This type is single-owner; [`SharedMemoryCache`] is the synchronized
/// variant for concurrent hosts.
pub struct MemoryCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    total_size: usize,
    config: EngineConfig,
    probe: Arc<dyn HeapProbe>,
    clock: u64,
}

impl<V: EstimateSize> MemoryCache<V> {
    /// Creates a cache with the given configuration and no heap signal.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_probe(config, Arc::new(NullProbe))
    }

    /// Creates a cache that consults the given probe for memory statistics.
    pub fn with_probe(config: EngineConfig, probe: Arc<dyn HeapProbe>) -> Self {
        Self {
            entries: HashMap::new(),
            total_size: 0,
            config,
            probe,
            clock: 0,
        }
    }

    /// Inserts or overwrites the entry for `key`, sizing the value with its
    /// [`EstimateSize`] implementation.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let size = value.estimated_bytes();
        self.insert_with_size(key, value, size);
    }

    /// Inserts or overwrites the entry for `key` with a caller-supplied size.
    ///
    /// After insertion, least-recently-used entries are evicted until the
    /// total is at or under budget or only the just-inserted entry remains.
    pub fn insert_with_size(&mut self, key: impl Into<String>, value: V, size: usize) {
        let key = key.into();
        self.clock += 1;
        let entry = CacheEntry {
            value,
            size,
            last_access: self.clock,
        };
        if let Some(old) = self.entries.insert(key.clone(), entry) {
            self.total_size -= old.size;
        }
        self.total_size += size;
        self.evict_to_budget(&key);
    }

    /// Returns the stored value for `key`, marking it most-recently-used.
    ///
    /// A miss is `None`, never a fault, and is distinct from any stored
    /// value.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        self.clock += 1;
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.last_access = self.clock;
                trace!(key, "cache hit");
                Some(&entry.value)
            }
            None => {
                trace!(key, "cache miss");
                None
            }
        }
    }

    /// Removes and returns the entry for `key`; a no-op on absent keys.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let entry = self.entries.remove(key)?;
        self.total_size -= entry.size;
        Some(entry.value)
    }

    /// Empties the entire store.
    ///
    /// Used for explicit lifecycle resets — test isolation, or navigation
    /// away from a memory-heavy view.
    pub fn clear(&mut self) {
        let evicted = self.entries.len();
        self.entries.clear();
        self.total_size = 0;
        debug!(evicted, "cache cleared");
    }

    /// True when `key` currently has an entry, without refreshing recency.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the stored entries' accounted sizes, in bytes.
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// The configuration the cache was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current host heap figures, or `None` when the host reports none.
    pub fn memory_stats(&self) -> Option<MemoryStats> {
        self.probe.sample()
    }

    /// True when host heap usage exceeds the configured threshold fraction
    /// of the heap limit.
    ///
    /// Advisory only: callers may clear the cache or skip optional
    /// memoization, but the cache never self-evicts on pressure outside the
    /// per-insert budget check. Without a heap signal this is always false.
    pub fn is_memory_pressure(&self) -> bool {
        self.probe
            .sample()
            .is_some_and(|stats| stats.usage_ratio() > self.config.pressure_threshold)
    }

    /// Evicts least-recently-used entries until the total fits the budget,
    /// never evicting `just_inserted`.
    fn evict_to_budget(&mut self, just_inserted: &str) {
        while self.total_size > self.config.max_cache_bytes {
            let victim = self
                .entries
                .iter()
                .filter(|(key, _)| key.as_str() != just_inserted)
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(key, _)| key.clone());
            let Some(victim) = victim else { break };
            if let Some(entry) = self.entries.remove(&victim) {
                self.total_size -= entry.size;
                debug!(
                    key = %victim,
                    bytes = entry.size,
                    total = self.total_size,
                    "evicted least-recently-used entry"
                );
            }
        }
    }
}

/// The mutex-synchronized cache variant for concurrent hosts.
///
/// All operations — inserts, lookups, removals, clears, and statistics —
/// pass through a single mutual-exclusion boundary, so the size accounting
/// can never diverge from the sum of entry sizes under concurrent use.
/// Lookups return clones of the stored value.
pub struct SharedMemoryCache<V> {
    inner: Arc<Mutex<MemoryCache<V>>>,
}

impl<V> Clone for SharedMemoryCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: EstimateSize + Clone> SharedMemoryCache<V> {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryCache::new(config))),
        }
    }

    pub fn with_probe(config: EngineConfig, probe: Arc<dyn HeapProbe>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryCache::with_probe(config, probe))),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryCache<V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, key: impl Into<String>, value: V) {
        self.lock().insert(key, value);
    }

    pub fn insert_with_size(&self, key: impl Into<String>, value: V, size: usize) {
        self.lock().insert_with_size(key, value, size);
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.lock().get(key).cloned()
    }

    pub fn remove(&self, key: &str) -> Option<V> {
        self.lock().remove(key)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn total_size(&self) -> usize {
        self.lock().total_size()
    }

    pub fn memory_stats(&self) -> Option<MemoryStats> {
        self.lock().memory_stats()
    }

    pub fn is_memory_pressure(&self) -> bool {
        self.lock().is_memory_pressure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::EngineConfigBuilder;
    use crate::engine::memory::FakeProbe;

    fn cache_with_budget(max_bytes: usize) -> MemoryCache<String> {
        let config = EngineConfigBuilder::new()
            .max_cache_bytes(max_bytes)
            .build()
            .unwrap();
        MemoryCache::new(config)
    }

    mod storage {
        use super::*;

        #[test]
        fn get_returns_stored_value_and_miss_is_none() {
            let mut cache = cache_with_budget(1024);
            cache.insert_with_size("a", String::from("alpha"), 10);

            assert_eq!(cache.get("a").map(String::as_str), Some("alpha"));
            assert_eq!(cache.get("missing"), None);
        }

        #[test]
        fn insert_overwrites_and_replaces_accounted_size() {
            let mut cache = cache_with_budget(1024);
            cache.insert_with_size("a", String::from("one"), 100);
            cache.insert_with_size("a", String::from("two"), 30);

            assert_eq!(cache.len(), 1);
            assert_eq!(cache.total_size(), 30);
            assert_eq!(cache.get("a").map(String::as_str), Some("two"));
        }

        #[test]
        fn remove_deletes_entry_and_is_noop_when_absent() {
            let mut cache = cache_with_budget(1024);
            cache.insert_with_size("a", String::from("alpha"), 10);

            assert_eq!(cache.remove("a"), Some(String::from("alpha")));
            assert_eq!(cache.remove("a"), None);
            assert_eq!(cache.total_size(), 0);
            assert!(cache.is_empty());
        }

        #[test]
        fn clear_empties_the_store() {
            let mut cache = cache_with_budget(1024);
            cache.insert_with_size("a", String::new(), 10);
            cache.insert_with_size("b", String::new(), 10);

            cache.clear();

            assert!(cache.is_empty());
            assert_eq!(cache.total_size(), 0);
            assert_eq!(cache.get("a"), None);
        }

        #[test]
        fn insert_without_size_uses_the_estimator() {
            let mut cache = cache_with_budget(1024);
            let value = String::from("hello");
            let expected = value.estimated_bytes();
            cache.insert("a", value);
            assert_eq!(cache.total_size(), expected);
        }
    }

    mod eviction {
        use super::*;

        #[test]
        fn least_recently_used_entries_go_first() {
            let mut cache = cache_with_budget(100);
            cache.insert_with_size("a", String::new(), 40);
            cache.insert_with_size("b", String::new(), 40);

            // Touch "a" so "b" becomes the least recently used.
            cache.get("a");

            cache.insert_with_size("c", String::new(), 40);

            assert_eq!(cache.get("b"), None);
            assert!(cache.contains_key("a"));
            assert!(cache.contains_key("c"));
            assert!(cache.total_size() <= 100);
        }

        #[test]
        fn eviction_proceeds_in_access_order_until_budget_fits() {
            let mut cache = cache_with_budget(100);
            cache.insert_with_size("a", String::new(), 40);
            cache.insert_with_size("b", String::new(), 40);
            cache.insert_with_size("c", String::new(), 90);

            // Both older entries had to go.
            assert_eq!(cache.get("a"), None);
            assert_eq!(cache.get("b"), None);
            assert!(cache.contains_key("c"));
            assert_eq!(cache.total_size(), 90);
        }

        #[test]
        fn just_inserted_entry_survives_even_when_alone_over_budget() {
            let mut cache = cache_with_budget(100);
            cache.insert_with_size("huge", String::new(), 500);

            assert!(cache.contains_key("huge"));
            assert_eq!(cache.total_size(), 500);

            // The next insert re-asserts the budget and evicts it.
            cache.insert_with_size("small", String::new(), 10);
            assert_eq!(cache.get("huge"), None);
            assert!(cache.contains_key("small"));
        }

        #[test]
        fn overwriting_within_budget_evicts_nothing() {
            let mut cache = cache_with_budget(100);
            cache.insert_with_size("a", String::new(), 60);
            cache.insert_with_size("a", String::new(), 80);

            assert_eq!(cache.len(), 1);
            assert_eq!(cache.total_size(), 80);
        }

        #[test]
        fn recency_is_a_strict_order_under_rapid_operations() {
            // Entries inserted back-to-back get distinct logical clock
            // ticks, so eviction order stays deterministic.
            let mut cache = cache_with_budget(100);
            for (i, key) in ["a", "b", "c", "d", "e"].iter().enumerate() {
                cache.insert_with_size(*key, String::new(), 20 + i);
            }
            // Budget 100 against 20+21+22+23+24 = 110: exactly "a" goes.
            assert_eq!(cache.get("a"), None);
            for key in ["b", "c", "d", "e"] {
                assert!(cache.contains_key(key), "expected {key} to survive");
            }
        }
    }

    mod pressure {
        use super::*;

        fn stats(used: u64, limit: u64) -> MemoryStats {
            MemoryStats {
                used_bytes: used,
                total_bytes: used,
                limit_bytes: limit,
            }
        }

        #[test]
        fn no_probe_means_no_stats_and_no_pressure() {
            let cache = cache_with_budget(100);
            assert_eq!(cache.memory_stats(), None);
            assert!(!cache.is_memory_pressure());
        }

        #[test]
        fn pressure_flips_when_usage_crosses_the_threshold() {
            let probe = Arc::new(FakeProbe::new(Some(stats(700, 1000))));
            let config = EngineConfigBuilder::new()
                .pressure_threshold(0.8)
                .build()
                .unwrap();
            let cache: MemoryCache<String> = MemoryCache::with_probe(config, probe.clone());

            assert!(!cache.is_memory_pressure());

            probe.set(Some(stats(850, 1000)));
            assert!(cache.is_memory_pressure());
        }

        #[test]
        fn pressure_with_unknown_limit_is_false() {
            let probe = Arc::new(FakeProbe::new(Some(stats(900, 0))));
            let cache: MemoryCache<String> =
                MemoryCache::with_probe(EngineConfig::default(), probe);
            assert!(!cache.is_memory_pressure());
        }
    }

    mod shared {
        use super::*;
        use std::thread;

        #[test]
        fn shared_cache_round_trips_values() {
            let cache = SharedMemoryCache::new(EngineConfig::default());
            cache.insert("a", String::from("alpha"));
            assert_eq!(cache.get("a"), Some(String::from("alpha")));
            assert_eq!(cache.get("missing"), None);

            cache.clear();
            assert!(cache.is_empty());
        }

        #[test]
        fn concurrent_inserts_keep_size_accounting_consistent() {
            let config = EngineConfigBuilder::new()
                .max_cache_bytes(usize::MAX)
                .build()
                .unwrap();
            let cache = SharedMemoryCache::new(config);

            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let cache = cache.clone();
                    thread::spawn(move || {
                        for i in 0..50 {
                            cache.insert_with_size(
                                format!("{t}:{i}"),
                                String::new(),
                                10,
                            );
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            assert_eq!(cache.len(), 200);
            assert_eq!(cache.total_size(), 200 * 10);
        }

        #[test]
        fn racing_writes_to_the_same_key_never_corrupt_the_total() {
            let cache = SharedMemoryCache::new(EngineConfig::default());

            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let cache = cache.clone();
                    thread::spawn(move || {
                        for _ in 0..100 {
                            cache.insert_with_size("contended", String::new(), 32);
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            assert_eq!(cache.len(), 1);
            assert_eq!(cache.total_size(), 32);
        }
    }
}
