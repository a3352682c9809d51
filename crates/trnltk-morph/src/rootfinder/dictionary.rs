// Dictionary root finder: roots generated from the lexicon, looked up by
// their sequence. A capitalized prefix is also looked up with its first
// letter lower-cased, so sentence-initial words find their roots.

use std::sync::Arc;

use trnltk_core::{alphabet, Root};

use super::RootFinder;
use crate::lexicon::RootMap;

#[derive(Debug, Clone)]
pub struct DictionaryRootFinder {
    roots: Arc<RootMap>,
}

impl DictionaryRootFinder {
    pub fn new(roots: Arc<RootMap>) -> Self {
        Self { roots }
    }
}

impl RootFinder for DictionaryRootFinder {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    fn handles(&self, partial: &str, _whole: &str) -> bool {
        !partial.trim().is_empty()
    }

    fn find(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        let mut roots = self.roots.get(partial).to_vec();
        let mut chars = partial.chars();
        if let Some(first) = chars.next().filter(|c| c.is_uppercase()) {
            let lowered: String = std::iter::once(alphabet::to_lower(first)).chain(chars).collect();
            roots.extend(self.roots.get(&lowered).iter().cloned());
        }
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon;

    fn finder() -> DictionaryRootFinder {
        let lexemes = lexicon::parse_lexemes("kitap\nırmak [P:Noun]\nışık\n").unwrap();
        DictionaryRootFinder::new(Arc::new(RootMap::from_lexemes(&lexemes).unwrap()))
    }

    #[test]
    fn finds_voiced_and_plain_roots() {
        let finder = finder();
        assert_eq!(finder.find("kitap", "kitap").len(), 1);
        let voiced = finder.find("kitab", "kitabı");
        assert_eq!(voiced.len(), 1);
        assert_eq!(voiced[0].lexeme.lemma, "kitap");
        assert!(finder.find("kita", "kitabı").is_empty());
    }

    #[test]
    fn capitalized_prefixes_use_turkish_lower_case() {
        let finder = finder();
        assert_eq!(finder.find("Kitap", "Kitap").len(), 1);
        let found = finder.find("Işık", "Işık");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].sequence, "ışık");
        assert!(!finder.handles(" ", " "));
    }
}
