// Parse result caches
//
// A `CachingParser` puts a `ParseCache` in front of any parser. Parsing is
// pure, so two threads missing the same surface at once both parse it and
// the later write wins; results are identical either way.
//
// Three caches:
//
// - `LruCache`: bounded, evicts the least recently used surface.
// - `TwoLevelCache`: a private write buffer flushed in bulk into a shared
//   cache once it reaches a threshold.
// - `OfflineCache`: filled once for a fixed word list, read-only after.

mod lru;
mod offline;
mod two_level;

pub use lru::{LruCache, LruCacheOptions};
pub use offline::OfflineCache;
pub use two_level::{TwoLevelCache, TwoLevelCacheOptions};

use std::sync::Arc;

use hashbrown::HashMap;

use crate::container::MorphemeContainer;
use crate::parser::MorphologicParser;

/// Analyses of one surface, shared between the cache and its readers.
pub type Analyses = Arc<Vec<MorphemeContainer>>;

/// Error type for cache construction.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("offline cache needs at least one word")]
    EmptyWordList,
}

// ---------------------------------------------------------------------------
// Cache trait
// ---------------------------------------------------------------------------

/// Storage for parse results, keyed by surface.
pub trait ParseCache: Send + Sync {
    fn get(&self, input: &str) -> Option<Analyses>;

    fn put(&self, input: &str, analyses: Analyses);

    /// Store every entry. No reader sees part of the batch while another
    /// batch is being written.
    fn put_all(&self, entries: HashMap<String, Analyses>);

    /// Fill the cache up front. Most caches fill lazily and do nothing here.
    fn build(&self, _parser: &dyn MorphologicParser) {}

    fn is_built(&self) -> bool {
        true
    }
}

impl<C: ParseCache + ?Sized> ParseCache for Arc<C> {
    fn get(&self, input: &str) -> Option<Analyses> {
        (**self).get(input)
    }

    fn put(&self, input: &str, analyses: Analyses) {
        (**self).put(input, analyses)
    }

    fn put_all(&self, entries: HashMap<String, Analyses>) {
        (**self).put_all(entries)
    }

    fn build(&self, parser: &dyn MorphologicParser) {
        (**self).build(parser)
    }

    fn is_built(&self) -> bool {
        (**self).is_built()
    }
}

// ---------------------------------------------------------------------------
// CachingParser
// ---------------------------------------------------------------------------

/// A parser answering from a cache, parsing with `delegate` on a miss.
pub struct CachingParser<C, P> {
    cache: C,
    delegate: P,
    use_local_cache: bool,
}

impl<C: ParseCache, P: MorphologicParser> CachingParser<C, P> {
    /// Builds `cache` with `delegate` before returning. With
    /// `use_local_cache`, [`parse_all`](MorphologicParser::parse_all)
    /// remembers the surfaces it parsed during the call and writes them to
    /// the cache in one batch at the end.
    pub fn new(cache: C, delegate: P, use_local_cache: bool) -> Self {
        if !cache.is_built() {
            cache.build(&delegate);
        }
        Self {
            cache,
            delegate,
            use_local_cache,
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn delegate(&self) -> &P {
        &self.delegate
    }

    /// Analyses of `input` without copying cached results.
    pub fn parse_shared(&self, input: &str) -> Analyses {
        if let Some(hit) = self.cache.get(input) {
            return hit;
        }
        let analyses = Arc::new(self.delegate.parse(input));
        self.cache.put(input, Arc::clone(&analyses));
        analyses
    }

    /// Analyses of every input, in input order, without copying cached
    /// results.
    pub fn parse_all_shared(&self, inputs: &[String]) -> Vec<Analyses> {
        let mut fresh: HashMap<String, Analyses> = HashMap::new();
        let results = if self.use_local_cache {
            let mut results = Vec::with_capacity(inputs.len());
            for input in inputs {
                let analyses = match fresh.get(input.as_str()) {
                    Some(local) => Arc::clone(local),
                    None => match self.cache.get(input) {
                        Some(hit) => hit,
                        None => {
                            let parsed = Arc::new(self.delegate.parse(input));
                            fresh.insert(input.clone(), Arc::clone(&parsed));
                            parsed
                        }
                    },
                };
                results.push(analyses);
            }
            results
        } else {
            let parsed: Vec<Analyses> = self.delegate.parse_all(inputs).into_iter().map(Arc::new).collect();
            for (input, analyses) in inputs.iter().zip(&parsed) {
                fresh.insert(input.clone(), Arc::clone(analyses));
            }
            parsed
        };
        if !fresh.is_empty() {
            self.cache.put_all(fresh);
        }
        results
    }
}

impl<C: ParseCache, P: MorphologicParser> MorphologicParser for CachingParser<C, P> {
    fn parse(&self, input: &str) -> Vec<MorphemeContainer> {
        self.parse_shared(input).as_ref().clone()
    }

    fn parse_all(&self, inputs: &[String]) -> Vec<Vec<MorphemeContainer>> {
        self.parse_all_shared(inputs)
            .into_iter()
            .map(|analyses| analyses.as_ref().clone())
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use trnltk_core::{Lexeme, LexemeAttributes, PhoneticAttributes, PhoneticExpectations, PrimaryPos, Root};

    use crate::graph::{GraphOptions, SuffixGraph};

    /// A parser returning one root-only container per input and counting
    /// its calls.
    pub(crate) struct CountingParser {
        graph: SuffixGraph,
        pub(crate) calls: AtomicUsize,
    }

    impl CountingParser {
        pub(crate) fn new() -> Self {
            Self {
                graph: SuffixGraph::new(&GraphOptions::basic()).unwrap(),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl MorphologicParser for CountingParser {
        fn parse(&self, input: &str) -> Vec<MorphemeContainer> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if input.is_empty() {
                return Vec::new();
            }
            let lexeme = Lexeme::new(input, input, PrimaryPos::Noun, None, LexemeAttributes::EMPTY);
            let root = Root::new(input, Arc::new(lexeme), PhoneticAttributes::EMPTY, PhoneticExpectations::EMPTY);
            let Some(state) = self.graph.default_state(&root) else {
                return Vec::new();
            };
            vec![MorphemeContainer::new(Arc::new(root), state, input)]
        }
    }

    pub(crate) fn analyses(input: &str) -> Analyses {
        Arc::new(CountingParser::new().parse(input))
    }

    fn inputs(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cached_results_equal_delegate_results() {
        let delegate = CountingParser::new();
        let expected = delegate.parse("kitap");
        let parser = CachingParser::new(LruCache::new(LruCacheOptions::default()), CountingParser::new(), false);
        assert_eq!(parser.parse("kitap"), expected);
        assert_eq!(parser.parse("kitap"), expected);
        assert_eq!(parser.delegate().calls(), 1);
        assert!(parser.parse("").is_empty());
    }

    #[test]
    fn local_cache_parses_each_surface_once() {
        let parser = CachingParser::new(LruCache::new(LruCacheOptions::default()), CountingParser::new(), true);
        let results = parser.parse_all(&inputs(&["ev", "kitap", "ev", "ev"]));
        assert_eq!(results.len(), 4);
        assert_eq!(results[0], results[2]);
        assert_eq!(results[1][0].root().sequence, "kitap");
        assert_eq!(parser.delegate().calls(), 2);

        parser.parse_all(&inputs(&["kitap", "ev"]));
        assert_eq!(parser.delegate().calls(), 2);
        assert!(parser.cache().get("ev").is_some());
    }

    #[test]
    fn without_local_cache_every_input_is_parsed() {
        let parser = CachingParser::new(LruCache::new(LruCacheOptions::default()), CountingParser::new(), false);
        let results = parser.parse_all(&inputs(&["ev", "ev", "kitap"]));
        assert_eq!(results.len(), 3);
        assert_eq!(parser.delegate().calls(), 3);
        assert!(parser.cache().get("kitap").is_some());
    }

    #[test]
    fn offline_cache_is_built_on_construction() {
        let cache = OfflineCache::new(inputs(&["ev", "kitap"])).unwrap();
        assert!(!cache.is_built());
        let parser = CachingParser::new(cache, CountingParser::new(), false);
        assert!(parser.cache().is_built());
        assert_eq!(parser.delegate().calls(), 2);

        parser.parse("ev");
        assert_eq!(parser.delegate().calls(), 2);
        parser.parse("elma");
        parser.parse("elma");
        assert_eq!(parser.delegate().calls(), 4);
    }
}
