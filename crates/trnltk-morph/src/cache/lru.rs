// Least-recently-used cache
//
// Entries are spread over `concurrency_level` shards, each behind its own
// mutex and holding `maximum_size / concurrency_level` entries (rounded
// up). With one shard the bound is exact; with more, eviction is
// least-recently-used per shard. Bulk writes take a cache-wide write lock
// so two bulk writes never interleave; a single put only locks its shard.

use std::collections::BTreeMap;
use std::hash::BuildHasher;

use hashbrown::{DefaultHashBuilder, HashMap};
use parking_lot::Mutex;

use super::{Analyses, ParseCache};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LruCacheOptions {
    /// Number of independently locked shards.
    pub concurrency_level: usize,
    pub initial_capacity: usize,
    pub maximum_size: usize,
}

impl Default for LruCacheOptions {
    fn default() -> Self {
        Self {
            concurrency_level: 1,
            initial_capacity: 1000,
            maximum_size: 10_000,
        }
    }
}

struct Entry {
    analyses: Analyses,
    tick: u64,
}

/// One shard: the entries and their access order.
struct Shard {
    entries: HashMap<String, Entry>,
    recency: BTreeMap<u64, String>,
    clock: u64,
    capacity: usize,
}

impl Shard {
    fn new(initial_capacity: usize, capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(initial_capacity.min(capacity)),
            recency: BTreeMap::new(),
            clock: 0,
            capacity,
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn get(&mut self, key: &str) -> Option<Analyses> {
        let tick = self.next_tick();
        let entry = self.entries.get_mut(key)?;
        self.recency.remove(&entry.tick);
        entry.tick = tick;
        self.recency.insert(tick, key.to_string());
        Some(entry.analyses.clone())
    }

    fn insert(&mut self, key: String, analyses: Analyses) {
        if self.capacity == 0 {
            return;
        }
        let tick = self.next_tick();
        if let Some(old) = self.entries.insert(key.clone(), Entry { analyses, tick }) {
            self.recency.remove(&old.tick);
        }
        self.recency.insert(tick, key);

        while self.entries.len() > self.capacity {
            let Some((_, evicted)) = self.recency.pop_first() else {
                break;
            };
            self.entries.remove(&evicted);
        }
    }
}

/// Bounded cache evicting the least recently used surface.
pub struct LruCache {
    shards: Vec<Mutex<Shard>>,
    hasher: DefaultHashBuilder,
    write_lock: Mutex<()>,
}

impl LruCache {
    pub fn new(options: LruCacheOptions) -> Self {
        let levels = options.concurrency_level.max(1);
        let capacity = options.maximum_size.div_ceil(levels);
        let initial = options.initial_capacity.div_ceil(levels);
        Self {
            shards: (0..levels).map(|_| Mutex::new(Shard::new(initial, capacity))).collect(),
            hasher: DefaultHashBuilder::default(),
            write_lock: Mutex::new(()),
        }
    }

    fn shard(&self, key: &str) -> &Mutex<Shard> {
        let index = (self.hasher.hash_one(key) % self.shards.len() as u64) as usize;
        &self.shards[index]
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.lock().entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `input` is cached. Does not count as a use.
    pub fn contains(&self, input: &str) -> bool {
        self.shard(input).lock().entries.contains_key(input)
    }
}

impl ParseCache for LruCache {
    fn get(&self, input: &str) -> Option<Analyses> {
        self.shard(input).lock().get(input)
    }

    fn put(&self, input: &str, analyses: Analyses) {
        self.shard(input).lock().insert(input.to_string(), analyses);
    }

    fn put_all(&self, entries: HashMap<String, Analyses>) {
        let _guard = self.write_lock.lock();
        for (input, analyses) in entries {
            self.shard(&input).lock().insert(input, analyses);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::tests::analyses;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    fn small(maximum_size: usize) -> LruCache {
        LruCache::new(LruCacheOptions {
            concurrency_level: 1,
            initial_capacity: 4,
            maximum_size,
        })
    }

    #[test]
    fn evicts_exactly_the_least_recently_used() {
        let cache = small(3);
        for word in ["a", "b", "c"] {
            cache.put(word, analyses(word));
        }
        assert!(cache.get("a").is_some());
        cache.put("d", analyses("d"));

        assert_eq!(cache.len(), 3);
        assert!(cache.get("b").is_none());
        for word in ["a", "c", "d"] {
            assert!(cache.contains(word), "{word}");
        }
    }

    #[test]
    fn overwriting_keeps_one_entry() {
        let cache = small(2);
        cache.put("a", analyses("a"));
        cache.put("a", analyses("a"));
        cache.put("b", analyses("b"));
        assert_eq!(cache.len(), 2);
        assert!(cache.contains("a"));
    }

    #[test]
    fn bulk_writes_respect_the_bound() {
        let cache = small(5);
        let value = analyses("w");
        let entries: HashMap<String, Analyses> = (0..8).map(|i| (format!("w{i}"), Analyses::clone(&value))).collect();
        cache.put_all(entries);
        assert_eq!(cache.len(), 5);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let cache = small(0);
        cache.put("a", analyses("a"));
        assert!(cache.is_empty());
    }

    #[test]
    fn single_puts_do_not_wait_for_bulk_writes() {
        let cache = small(4);
        let (tx, rx) = mpsc::channel();
        thread::scope(|s| {
            let _bulk = cache.write_lock.lock();
            s.spawn(|| {
                cache.put("a", analyses("a"));
                let _ = tx.send(());
            });
            assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
        });
        assert!(cache.contains("a"));
    }

    #[test]
    fn concurrent_writers_and_readers() {
        let cache = LruCache::new(LruCacheOptions {
            concurrency_level: 4,
            initial_capacity: 16,
            maximum_size: 4000,
        });
        let value = analyses("x");
        thread::scope(|s| {
            for t in 0..4 {
                let (cache, value) = (&cache, &value);
                s.spawn(move || {
                    for i in 0..100 {
                        let key = format!("{t}-{i}");
                        cache.put(&key, Analyses::clone(value));
                        assert!(cache.get(&key).is_some());
                    }
                });
            }
        });
        assert_eq!(cache.len(), 400);
    }
}
