// Analyzer: top-level integration point for Turkish morphological analysis.
//
// `AnalyzerBuilder` wires the pieces in dependency order: lexemes, the
// root map, the suffix graph, the form graph, predefined paths, the root
// finder chain and finally the contextless parser. Any construction error
// stops the build; an `Analyzer` is never half-initialized.
//
// The finder chain always starts with the finders that claim an input
// outright (punctuation, digits, proper nouns with an apostrophe) and
// continues with the ones that only add candidates (capitalized proper
// nouns, the dictionary, the brute-force guessers).

use std::path::Path;
use std::sync::Arc;

use trnltk_core::Lexeme;

use crate::container::MorphemeContainer;
use crate::format::Notation;
use crate::formgraph::SuffixFormGraph;
use crate::graph::{GraphError, GraphOptions, SuffixGraph};
use crate::lexicon::{self, LexiconError, RootMap};
use crate::parser::{ContextlessParser, MorphologicParser, PredefinedPaths};
use crate::rootfinder::{
    BruteForceCompoundNounRootFinder, BruteForceNounRootFinder, BruteForceVerbRootFinder,
    CardinalDigitsRootFinder, DictionaryRootFinder, OrdinalDigitsRootFinder, Policy,
    ProperNounFromApostropheRootFinder, ProperNounWithoutApostropheRootFinder,
    PunctuationRootFinder, RangeDigitsRootFinder, RootFinderChain, RootFinderError,
};

/// Error type for analyzer construction failures.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The dictionary could not be read or generated into roots.
    #[error("failed to load lexicon: {0}")]
    Lexicon(#[from] LexiconError),

    /// The suffix graph or predefined paths are inconsistent.
    #[error("failed to build suffix graph: {0}")]
    Graph(#[from] GraphError),

    #[error("failed to build root finder chain: {0}")]
    RootFinder(#[from] RootFinderError),
}

/// Which root finders join the dictionary finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainOptions {
    pub brute_force_nouns: bool,
    pub brute_force_verbs: bool,
    pub brute_force_compounds: bool,
    pub proper_nouns: bool,
    pub digits: bool,
    pub punctuation: bool,
}

impl Default for ChainOptions {
    /// Everything except the brute-force guessers.
    fn default() -> Self {
        Self {
            brute_force_nouns: false,
            brute_force_verbs: false,
            brute_force_compounds: false,
            proper_nouns: true,
            digits: true,
            punctuation: true,
        }
    }
}

impl ChainOptions {
    /// The dictionary finder alone.
    pub fn dictionary_only() -> Self {
        Self {
            brute_force_nouns: false,
            brute_force_verbs: false,
            brute_force_compounds: false,
            proper_nouns: false,
            digits: false,
            punctuation: false,
        }
    }

    /// Every finder, guessing roots missing from the dictionary.
    pub fn brute_force() -> Self {
        Self {
            brute_force_nouns: true,
            brute_force_verbs: true,
            brute_force_compounds: true,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    graph_options: GraphOptions,
    chain_options: ChainOptions,
    predefined_paths: bool,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            graph_options: GraphOptions::default(),
            chain_options: ChainOptions::default(),
            predefined_paths: true,
        }
    }
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph_options(mut self, options: GraphOptions) -> Self {
        self.graph_options = options;
        self
    }

    pub fn chain_options(mut self, options: ChainOptions) -> Self {
        self.chain_options = options;
        self
    }

    /// Whether irregular roots use their prebuilt paths. On by default.
    pub fn predefined_paths(mut self, enabled: bool) -> Self {
        self.predefined_paths = enabled;
        self
    }

    /// Build from a dictionary file.
    pub fn build_from_file(self, path: impl AsRef<Path>) -> Result<Analyzer, AnalyzerError> {
        let lexemes = lexicon::load_lexemes(path)?;
        self.build(&lexemes)
    }

    /// Build from dictionary text.
    pub fn build_from_text(self, text: &str) -> Result<Analyzer, AnalyzerError> {
        let lexemes = lexicon::parse_lexemes(text)?;
        self.build(&lexemes)
    }

    pub fn build(self, lexemes: &[Arc<Lexeme>]) -> Result<Analyzer, AnalyzerError> {
        let roots = Arc::new(RootMap::from_lexemes(lexemes)?);
        let graph = Arc::new(SuffixGraph::new(&self.graph_options)?);
        let predefined = if self.predefined_paths {
            Some(Arc::new(PredefinedPaths::build(&graph, &roots)?))
        } else {
            None
        };
        let chain = self.chain(&roots)?;
        let form_graph = Arc::new(SuffixFormGraph::extract(graph));
        let parser = ContextlessParser::new(form_graph, chain, predefined)?;
        log::info!(
            "analyzer ready: {} lexemes, {} roots, {} finders",
            lexemes.len(),
            roots.len(),
            parser.chain().len()
        );
        Ok(Analyzer {
            parser: Arc::new(parser),
            roots,
        })
    }

    fn chain(&self, roots: &Arc<RootMap>) -> Result<RootFinderChain, RootFinderError> {
        let o = self.chain_options;
        let mut chain = RootFinderChain::new();
        if o.punctuation {
            chain.add(Box::new(PunctuationRootFinder), Policy::StopWhenHandled)?;
        }
        if o.digits {
            chain.add(Box::new(RangeDigitsRootFinder), Policy::StopWhenHandled)?;
            chain.add(Box::new(OrdinalDigitsRootFinder), Policy::StopWhenHandled)?;
            chain.add(Box::new(CardinalDigitsRootFinder), Policy::StopWhenHandled)?;
        }
        if o.proper_nouns {
            chain.add(Box::new(ProperNounFromApostropheRootFinder), Policy::StopWhenHandled)?;
            chain.add(Box::new(ProperNounWithoutApostropheRootFinder), Policy::ContinueOnChain)?;
        }
        chain.add(Box::new(DictionaryRootFinder::new(Arc::clone(roots))), Policy::ContinueOnChain)?;
        if o.brute_force_nouns {
            chain.add(Box::new(BruteForceNounRootFinder), Policy::ContinueOnChain)?;
        }
        if o.brute_force_compounds {
            chain.add(Box::new(BruteForceCompoundNounRootFinder), Policy::ContinueOnChain)?;
        }
        if o.brute_force_verbs {
            chain.add(Box::new(BruteForceVerbRootFinder), Policy::ContinueOnChain)?;
        }
        Ok(chain)
    }
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// A ready parser together with the lexicon it was built from.
#[derive(Clone)]
pub struct Analyzer {
    parser: Arc<ContextlessParser>,
    roots: Arc<RootMap>,
}

impl Analyzer {
    /// The parser, shareable across threads and cache decorators.
    pub fn parser(&self) -> &Arc<ContextlessParser> {
        &self.parser
    }

    pub fn graph(&self) -> &SuffixGraph {
        self.parser.graph()
    }

    pub fn roots(&self) -> &RootMap {
        &self.roots
    }

    pub fn parse(&self, word: &str) -> Vec<MorphemeContainer> {
        self.parser.parse(word)
    }

    /// Formatted analyses of `word`, sorted.
    pub fn analyze(&self, word: &str, notation: Notation) -> Vec<String> {
        let mut out: Vec<String> = self
            .parse(word)
            .iter()
            .map(|c| notation.render(c, self.graph()))
            .collect();
        out.sort();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEXICON: &str = "\
kitap
ev
elma
gelmek [A:Aorist_I]
ben [P:Pron,Pers; A:RootChange]
";

    #[test]
    fn default_build_parses_dictionary_words() {
        let analyzer = AnalyzerBuilder::new().build_from_text(LEXICON).unwrap();
        let kitaba = analyzer.analyze("kitaba", Notation::Plain);
        assert!(kitaba.contains(&"kitap+Noun+A3sg+Pnon+Dat".to_string()), "{kitaba:?}");
        assert!(analyzer.analyze("bana", Notation::Plain).contains(&"ben+Pron+Pers+A1sg+Pnon+Dat".to_string()));
        assert!(analyzer.parse("xyzw").is_empty());
        assert!(analyzer.roots().len() >= 6);
    }

    #[test]
    fn stop_finders_claim_digits_and_punctuation() {
        let analyzer = AnalyzerBuilder::new().build_from_text(LEXICON).unwrap();
        let three = analyzer.analyze("3", Notation::Plain);
        assert!(!three.is_empty());
        assert!(three.iter().all(|a| a.starts_with("3+Num+DigitsC")), "{three:?}");

        let comma = analyzer.analyze(",", Notation::Plain);
        assert!(comma.iter().all(|a| a.starts_with(",+Punc")), "{comma:?}");
    }

    #[test]
    fn proper_nouns_with_apostrophe() {
        let analyzer = AnalyzerBuilder::new().build_from_text(LEXICON).unwrap();
        let ankaraya = analyzer.analyze("Ankara'ya", Notation::Plain);
        assert!(ankaraya.iter().any(|a| a.starts_with("Ankara+Noun+Prop")), "{ankaraya:?}");
    }

    #[test]
    fn brute_force_guesses_unknown_words() {
        let plain = AnalyzerBuilder::new()
            .chain_options(ChainOptions::dictionary_only())
            .build_from_text(LEXICON)
            .unwrap();
        assert!(plain.parse("masaya").is_empty());

        let guessing = AnalyzerBuilder::new()
            .chain_options(ChainOptions::brute_force())
            .build_from_text(LEXICON)
            .unwrap();
        let masaya = guessing.analyze("masaya", Notation::Plain);
        assert!(masaya.contains(&"masa+Noun+A3sg+Pnon+Dat".to_string()), "{masaya:?}");
    }

    #[test]
    fn lexicon_errors_stop_the_build() {
        let err = AnalyzerBuilder::new().build_from_text("ev [P:Nown]").err().unwrap();
        assert!(matches!(err, AnalyzerError::Lexicon(_)));
        let err = AnalyzerBuilder::new().build_from_file("/nonexistent/master-dictionary.dict").err().unwrap();
        assert!(matches!(err, AnalyzerError::Lexicon(LexiconError::Io { .. })));
    }
}
