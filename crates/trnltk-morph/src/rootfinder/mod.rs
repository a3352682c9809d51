// Root finders
//
// A root finder proposes the roots a prefix of the input may start with.
// Finders are strategies; the chain folds them left to right, each paired
// with a policy:
//
// - `StopWhenHandled`: when the finder handles the prefix, no later finder
//   runs, even if it found nothing. Punctuation and digits use this.
// - `ContinueOnChain`: results accumulate and later finders still run.
//   The dictionary and the heuristic guessers use this.
//
// Every stopping finder must come before the first continuing one. Roots
// that cannot start the prefix, or whose phonetic attributes describe no
// real sequence, are dropped before they reach the parser.

mod brute_force;
mod dictionary;
mod digits;
pub mod numeral_text;
mod proper_noun;
mod punctuation;

pub use brute_force::{BruteForceCompoundNounRootFinder, BruteForceNounRootFinder, BruteForceVerbRootFinder};
pub use dictionary::DictionaryRootFinder;
pub use digits::{CardinalDigitsRootFinder, OrdinalDigitsRootFinder, RangeDigitsRootFinder};
pub use proper_noun::{ProperNounFromApostropheRootFinder, ProperNounWithoutApostropheRootFinder};
pub use punctuation::PunctuationRootFinder;

use std::fmt;
use std::sync::Arc;

use trnltk_core::{alphabet, sequence, LexemeAttribute, Root};

/// Error type for root finder chain configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RootFinderError {
    #[error("finder '{finder}' stops the chain but follows a continuing finder")]
    StopAfterContinue { finder: String },
}

// ---------------------------------------------------------------------------
// Strategy trait
// ---------------------------------------------------------------------------

/// A strategy proposing roots for a prefix (`partial`) of the input
/// (`whole`).
pub trait RootFinder: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Whether this finder is responsible for `partial` at all.
    fn handles(&self, partial: &str, whole: &str) -> bool;

    /// Roots for `partial`. Only called when [`RootFinder::handles`] is true.
    fn find(&self, partial: &str, whole: &str) -> Vec<Arc<Root>>;
}

/// What the chain does after a finder handled a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    StopWhenHandled,
    ContinueOnChain,
}

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RootFinderChain {
    finders: Vec<(Box<dyn RootFinder>, Policy)>,
}

impl RootFinderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finder. Returns [`RootFinderError::StopAfterContinue`] when
    /// a stopping finder follows a continuing one.
    pub fn add(&mut self, finder: Box<dyn RootFinder>, policy: Policy) -> Result<&mut Self, RootFinderError> {
        let continues = self.finders.iter().any(|(_, p)| *p == Policy::ContinueOnChain);
        if policy == Policy::StopWhenHandled && continues {
            return Err(RootFinderError::StopAfterContinue {
                finder: finder.name().to_string(),
            });
        }
        self.finders.push((finder, policy));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.finders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finders.is_empty()
    }

    /// All valid roots the chain proposes for `partial`.
    pub fn find(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        let mut roots = Vec::new();
        for (finder, policy) in &self.finders {
            if !finder.handles(partial, whole) {
                continue;
            }
            roots.extend(finder.find(partial, whole));
            if *policy == Policy::StopWhenHandled {
                log::trace!("'{}' handled by {}, chain stops", partial, finder.name());
                break;
            }
        }
        roots.retain(|root| {
            let valid = is_valid_root(partial, root);
            if !valid {
                log::trace!("dropping invalid root '{}' for '{}'", root.sequence, partial);
            }
            valid
        });
        roots
    }
}

impl fmt::Debug for RootFinderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.finders.iter().map(|(finder, policy)| (finder.name(), policy)))
            .finish()
    }
}

/// Whether `root` can start `partial`. Compound roots are shorter than
/// the prefix they were guessed from, so only their length is checked.
fn is_valid_root(partial: &str, root: &Root) -> bool {
    if root.char_len() > sequence::char_len(partial) {
        return false;
    }
    if !root.lexeme.has_attribute(LexemeAttribute::CompoundP3sg)
        && !alphabet::lowercase(partial).starts_with(&alphabet::lowercase(&root.sequence))
    {
        return false;
    }
    let attrs = root.phonetic_attributes;
    attrs.is_empty() || attrs.is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trnltk_core::{phonetic, Lexeme, LexemeAttributes, PhoneticExpectations, PrimaryPos};

    fn noun(seq: &str) -> Arc<Root> {
        let lexeme = Lexeme::new(seq, seq, PrimaryPos::Noun, None, LexemeAttributes::EMPTY);
        let attrs = phonetic::calculate(seq, LexemeAttributes::EMPTY);
        Arc::new(Root::new(seq, Arc::new(lexeme), attrs, PhoneticExpectations::EMPTY))
    }

    struct Fixed {
        name: &'static str,
        handles: bool,
        roots: Vec<&'static str>,
    }

    impl RootFinder for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        fn handles(&self, _partial: &str, _whole: &str) -> bool {
            self.handles
        }

        fn find(&self, _partial: &str, _whole: &str) -> Vec<Arc<Root>> {
            self.roots.iter().map(|s| noun(s)).collect()
        }
    }

    fn fixed(name: &'static str, handles: bool, roots: &[&'static str]) -> Box<dyn RootFinder> {
        Box::new(Fixed {
            name,
            handles,
            roots: roots.to_vec(),
        })
    }

    fn sequences(roots: &[Arc<Root>]) -> Vec<&str> {
        roots.iter().map(|r| r.sequence.as_str()).collect()
    }

    #[test]
    fn handled_stop_skips_later_finders() {
        let mut chain = RootFinderChain::new();
        chain
            .add(fixed("stop", true, &[]), Policy::StopWhenHandled)
            .unwrap()
            .add(fixed("dict", true, &["ev"]), Policy::ContinueOnChain)
            .unwrap();
        assert!(chain.find("ev", "ev").is_empty());
    }

    #[test]
    fn unhandled_stop_lets_the_chain_continue() {
        let mut chain = RootFinderChain::new();
        chain
            .add(fixed("stop", false, &["xx"]), Policy::StopWhenHandled)
            .unwrap()
            .add(fixed("a", true, &["ev"]), Policy::ContinueOnChain)
            .unwrap()
            .add(fixed("b", true, &["e"]), Policy::ContinueOnChain)
            .unwrap();
        assert_eq!(sequences(&chain.find("ev", "evde")), vec!["ev", "e"]);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn stop_after_continue_is_rejected() {
        let mut chain = RootFinderChain::new();
        chain.add(fixed("dict", true, &[]), Policy::ContinueOnChain).unwrap();
        let err = chain.add(fixed("punc", true, &[]), Policy::StopWhenHandled).unwrap_err();
        assert_eq!(err, RootFinderError::StopAfterContinue { finder: "punc".into() });
    }

    #[test]
    fn roots_that_cannot_start_the_prefix_are_dropped() {
        let mut chain = RootFinderChain::new();
        chain
            .add(fixed("dict", true, &["kitap", "kita", "elma"]), Policy::ContinueOnChain)
            .unwrap();
        assert_eq!(sequences(&chain.find("kita", "kitaba")), vec!["kita"]);
    }
}
