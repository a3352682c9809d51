// Punctuation root finder. Only a whole input made of punctuation and
// symbol characters is a punctuation root.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use trnltk_core::{Lexeme, LexemeAttributes, PhoneticAttributes, PhoneticExpectations, PrimaryPos, Root};

use super::RootFinder;

static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Pc}\p{Pd}\p{Pe}\p{Pf}\p{Pi}\p{Po}\p{Ps}\p{Sm}\p{So}]+$").expect("valid punctuation pattern"));

#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationRootFinder;

impl RootFinder for PunctuationRootFinder {
    fn name(&self) -> &'static str {
        "punctuation"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        partial == whole && PUNCTUATION.is_match(partial)
    }

    fn find(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        let lexeme = Lexeme::new(partial, whole, PrimaryPos::Punctuation, None, LexemeAttributes::EMPTY);
        vec![Arc::new(Root::new(
            partial,
            Arc::new(lexeme),
            PhoneticAttributes::EMPTY,
            PhoneticExpectations::EMPTY,
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_punctuation_inputs_only() {
        let finder = PunctuationRootFinder;
        for input in [".", "...", "?!", "(", "\"", "«", "-", "+", "%"] {
            assert!(finder.handles(input, input), "{input}");
        }
        assert!(!finder.handles(".", ".a"));
        assert!(!finder.handles("a", "a"));
        assert!(!finder.handles("3", "3"));

        let roots = finder.find("...", "...");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].lexeme.primary_pos, PrimaryPos::Punctuation);
        assert!(roots[0].phonetic_attributes.is_empty());
    }
}
