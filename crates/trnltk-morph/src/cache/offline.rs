// Offline cache
//
// Holds the analyses of a fixed word list, typically the most frequent
// surfaces of a corpus. The cache is built once with a parser and never
// written afterwards; surfaces outside the list always miss.

use std::mem;

use hashbrown::HashMap;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use rayon::prelude::*;

use super::{Analyses, CacheError, ParseCache};
use crate::parser::MorphologicParser;

pub struct OfflineCache {
    words: Mutex<Vec<String>>,
    entries: OnceCell<HashMap<String, Analyses>>,
}

impl OfflineCache {
    pub fn new(words: Vec<String>) -> Result<Self, CacheError> {
        if words.is_empty() {
            return Err(CacheError::EmptyWordList);
        }
        Ok(Self {
            words: Mutex::new(words),
            entries: OnceCell::new(),
        })
    }

    /// One word per line; blank lines are skipped.
    pub fn from_lines(text: &str) -> Result<Self, CacheError> {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self::new(words)
    }

    /// Number of cached surfaces, zero before the cache is built.
    pub fn len(&self) -> usize {
        self.entries.get().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ParseCache for OfflineCache {
    fn get(&self, input: &str) -> Option<Analyses> {
        self.entries.get()?.get(input).cloned()
    }

    fn put(&self, _input: &str, _analyses: Analyses) {}

    fn put_all(&self, _entries: HashMap<String, Analyses>) {}

    fn build(&self, parser: &dyn MorphologicParser) {
        self.entries.get_or_init(|| {
            let words = mem::take(&mut *self.words.lock());
            let entries: HashMap<String, Analyses> = words
                .into_par_iter()
                .map(|word| {
                    let analyses = Analyses::new(parser.parse(&word));
                    (word, analyses)
                })
                .collect();
            log::info!("offline cache built for {} surfaces", entries.len());
            entries
        });
    }

    fn is_built(&self) -> bool {
        self.entries.get().is_some()
    }
}
