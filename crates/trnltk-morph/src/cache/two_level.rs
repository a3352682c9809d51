// Two-level cache
//
// Each worker owns a `TwoLevelCache`: writes go to its private buffer (L2)
// and reach the shared cache (L1) in one bulk write once the buffer holds
// `flush_threshold` surfaces. Reads look in L2, then in L1. Buffer writes
// and the flush hold the same lock, so a flush is atomic to other writers.

use std::mem;
use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;

use super::{Analyses, ParseCache};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoLevelCacheOptions {
    /// Buffered surfaces that trigger a flush into L1.
    pub flush_threshold: usize,
}

impl Default for TwoLevelCacheOptions {
    fn default() -> Self {
        Self { flush_threshold: 1000 }
    }
}

pub struct TwoLevelCache {
    l1: Arc<dyn ParseCache>,
    l2: RwLock<HashMap<String, Analyses>>,
    flush_threshold: usize,
}

impl TwoLevelCache {
    pub fn new(options: TwoLevelCacheOptions, l1: Arc<dyn ParseCache>) -> Self {
        Self {
            l1,
            l2: RwLock::new(HashMap::with_capacity(options.flush_threshold)),
            flush_threshold: options.flush_threshold,
        }
    }

    pub fn l1(&self) -> &Arc<dyn ParseCache> {
        &self.l1
    }

    /// Number of buffered surfaces.
    pub fn buffered(&self) -> usize {
        self.l2.read().len()
    }

    /// Write the buffer to L1 now.
    pub fn flush(&self) {
        let mut l2 = self.l2.write();
        if l2.is_empty() {
            return;
        }
        let drained = mem::take(&mut *l2);
        log::debug!("flushing {} cached surfaces", drained.len());
        self.l1.put_all(drained);
    }
}

impl ParseCache for TwoLevelCache {
    fn get(&self, input: &str) -> Option<Analyses> {
        if let Some(hit) = self.l2.read().get(input) {
            return Some(Arc::clone(hit));
        }
        self.l1.get(input)
    }

    fn put(&self, input: &str, analyses: Analyses) {
        let mut l2 = self.l2.write();
        l2.insert(input.to_string(), analyses);
        if l2.len() >= self.flush_threshold {
            let drained = mem::take(&mut *l2);
            log::debug!("flushing {} cached surfaces", drained.len());
            self.l1.put_all(drained);
        }
    }

    fn put_all(&self, entries: HashMap<String, Analyses>) {
        let mut l2 = self.l2.write();
        if l2.len() + entries.len() >= self.flush_threshold {
            let mut drained = mem::take(&mut *l2);
            drained.extend(entries);
            log::debug!("flushing {} cached surfaces", drained.len());
            self.l1.put_all(drained);
        } else {
            l2.extend(entries);
        }
    }
}

impl Drop for TwoLevelCache {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::tests::analyses;
    use crate::cache::{LruCache, LruCacheOptions};
    use std::thread;

    fn shared() -> Arc<LruCache> {
        Arc::new(LruCache::new(LruCacheOptions::default()))
    }

    #[test]
    fn flushes_at_the_threshold() {
        let l1 = shared();
        let cache = TwoLevelCache::new(TwoLevelCacheOptions { flush_threshold: 3 }, l1.clone());
        let value = analyses("x");

        cache.put("a", value.clone());
        cache.put("b", value.clone());
        assert_eq!(cache.buffered(), 2);
        assert!(l1.is_empty());
        assert!(cache.get("a").is_some());

        cache.put("c", value.clone());
        assert_eq!(cache.buffered(), 0);
        assert_eq!(l1.len(), 3);
        for word in ["a", "b", "c"] {
            assert!(cache.get(word).is_some(), "{word}");
        }
    }

    #[test]
    fn bulk_writes_flush_together() {
        let l1 = shared();
        let cache = TwoLevelCache::new(TwoLevelCacheOptions { flush_threshold: 4 }, l1.clone());
        let value = analyses("x");
        cache.put("a", value.clone());

        let small: HashMap<String, Analyses> = [("b".to_string(), value.clone())].into_iter().collect();
        cache.put_all(small);
        assert_eq!(cache.buffered(), 2);

        let large: HashMap<String, Analyses> = ["c", "d", "e"].iter().map(|w| (w.to_string(), value.clone())).collect();
        cache.put_all(large);
        assert_eq!(cache.buffered(), 0);
        assert_eq!(l1.len(), 5);
    }

    #[test]
    fn dropping_flushes_the_buffer() {
        let l1 = shared();
        {
            let cache = TwoLevelCache::new(TwoLevelCacheOptions::default(), l1.clone());
            cache.put("a", analyses("a"));
            assert!(l1.is_empty());
        }
        assert!(l1.contains("a"));
    }

    #[test]
    fn workers_share_one_l1() {
        let l1 = shared();
        let value = analyses("x");
        thread::scope(|s| {
            for t in 0..4 {
                let (l1, value) = (l1.clone(), &value);
                s.spawn(move || {
                    let cache = TwoLevelCache::new(TwoLevelCacheOptions { flush_threshold: 10 }, l1);
                    for i in 0..25 {
                        cache.put(&format!("{t}-{i}"), Arc::clone(value));
                    }
                    assert_eq!(cache.buffered(), 5);
                });
            }
        });
        assert_eq!(l1.len(), 100);
    }
}
