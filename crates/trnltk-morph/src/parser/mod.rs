// Contextless morphologic parser
//
// Finds every analysis of a single surface, ignoring the sentence around
// it. Parsing runs in two phases:
//
// 1. Every prefix of the input is handed to the root finder chain. Each
//    root found becomes a candidate container at the root's default state,
//    or one container per predefined path of the root that the input
//    starts with. Mandatory transitions are applied to the candidates.
// 2. A depth-first search walks the suffix form graph from each candidate.
//    An edge is followed when its realization is a prefix of the unconsumed
//    input and the suffix applier accepts it. A container reaching a
//    terminal state with nothing left to consume is a result.
//
// The parser holds no mutable state; one instance may serve any number of
// threads.

pub(crate) mod applier;
pub(crate) mod mandatory;
pub mod predefined;

use std::sync::Arc;

use rayon::prelude::*;
use trnltk_core::{alphabet, sequence};

use crate::container::MorphemeContainer;
use crate::formgraph::{FormEdge, SuffixFormGraph};
use crate::graph::{GraphError, StateType, SuffixGraph};
use crate::rootfinder::RootFinderChain;

use applier::SuffixApplier;
use mandatory::MandatoryTransitions;
pub use predefined::PredefinedPaths;

// ---------------------------------------------------------------------------
// Parser trait
// ---------------------------------------------------------------------------

/// Anything that turns a surface into its analyses.
pub trait MorphologicParser: Send + Sync {
    /// All analyses of `input`. An unparsable input yields an empty list.
    fn parse(&self, input: &str) -> Vec<MorphemeContainer>;

    /// Analyses of every input, in input order. Inputs are parsed in
    /// parallel.
    fn parse_all(&self, inputs: &[String]) -> Vec<Vec<MorphemeContainer>> {
        inputs.par_iter().map(|input| self.parse(input)).collect()
    }
}

impl<P: MorphologicParser + ?Sized> MorphologicParser for Arc<P> {
    fn parse(&self, input: &str) -> Vec<MorphemeContainer> {
        (**self).parse(input)
    }

    fn parse_all(&self, inputs: &[String]) -> Vec<Vec<MorphemeContainer>> {
        (**self).parse_all(inputs)
    }
}

// ---------------------------------------------------------------------------
// ContextlessParser
// ---------------------------------------------------------------------------

pub struct ContextlessParser {
    form_graph: Arc<SuffixFormGraph>,
    chain: RootFinderChain,
    predefined: Option<Arc<PredefinedPaths>>,
    mandatory: MandatoryTransitions,
}

impl ContextlessParser {
    /// Returns [`GraphError`] if the graph lacks a state or suffix the
    /// mandatory transitions need.
    pub fn new(
        form_graph: Arc<SuffixFormGraph>,
        chain: RootFinderChain,
        predefined: Option<Arc<PredefinedPaths>>,
    ) -> Result<Self, GraphError> {
        let mandatory = MandatoryTransitions::new(form_graph.graph())?;
        Ok(Self {
            form_graph,
            chain,
            predefined,
            mandatory,
        })
    }

    pub fn graph(&self) -> &SuffixGraph {
        self.form_graph.graph()
    }

    pub fn form_graph(&self) -> &SuffixFormGraph {
        &self.form_graph
    }

    pub fn chain(&self) -> &RootFinderChain {
        &self.chain
    }

    fn initial_candidates(&self, input: &str) -> Vec<MorphemeContainer> {
        let graph = self.graph();
        let lower_input = alphabet::lowercase(input);
        let mut candidates = Vec::new();

        for i in 1..=sequence::char_len(input) {
            let partial = sequence::prefix(input, i);
            let roots = self.chain.find(partial, input);
            if !roots.is_empty() {
                log::debug!("{} root candidates for '{}'", roots.len(), partial);
            }

            for root in roots {
                let Some(state) = graph.default_state(&root) else {
                    log::warn!(
                        "no default state for root '{}' ({}), skipping",
                        root.sequence,
                        root.lexeme.primary_pos
                    );
                    continue;
                };
                let predefined = self.predefined.as_deref().and_then(|p| p.paths(&root));
                let Some(paths) = predefined else {
                    candidates.push(MorphemeContainer::new(root, state, input));
                    continue;
                };
                for path in paths {
                    if lower_input.starts_with(&alphabet::lowercase(path.surface_so_far())) {
                        let mut c = path.clone();
                        c.resume_on(input);
                        candidates.push(c);
                    }
                }
            }
        }
        candidates
    }

    /// The containers one edge further than `c`.
    fn advance(&self, applier: &SuffixApplier<'_>, c: &MorphemeContainer, input: &str) -> Vec<MorphemeContainer> {
        let Some(edges) = self.form_graph.edges(c.last_state(), c.phonetic_attributes()) else {
            log::debug!(
                "no form graph node for {} with {:?}, dropping '{}'",
                self.graph().state(c.last_state()).name,
                c.phonetic_attributes(),
                c.surface_so_far()
            );
            return Vec::new();
        };

        edges
            .iter()
            .filter(|edge| c.remaining().starts_with(edge.applied.as_str()))
            .filter(|edge| !c.suffix_applied_since_derivation(edge.suffix))
            .filter(|edge| !self.repeats_blank_cycle(c, edge))
            .filter_map(|edge| {
                log::trace!(
                    "  '{}' + {}('{}')",
                    c.surface_so_far(),
                    self.graph().suffix(edge.suffix).name,
                    edge.applied
                );
                applier.try_edge(c, edge, input)
            })
            .collect()
    }

    // A blank edge consumes nothing, so a suffix may only be taken blank
    // once after the last letters were consumed.
    fn repeats_blank_cycle(&self, c: &MorphemeContainer, edge: &FormEdge) -> bool {
        if !edge.applied.is_empty() {
            return false;
        }
        c.transitions()
            .iter()
            .rev()
            .take_while(|t| t.actual.is_empty())
            .any(|t| t.suffix == edge.suffix)
    }
}

impl MorphologicParser for ContextlessParser {
    fn parse(&self, input: &str) -> Vec<MorphemeContainer> {
        if input.trim().is_empty() {
            return Vec::new();
        }
        let graph = self.graph();
        let applier = SuffixApplier::new(graph);
        let candidates = self.initial_candidates(input);
        let candidates = self.mandatory.apply(&applier, graph, candidates, input);
        log::debug!("{} initial candidates for '{}'", candidates.len(), input);

        let mut results = Vec::new();
        let mut stack: Vec<MorphemeContainer> = candidates.into_iter().rev().collect();
        while let Some(c) = stack.pop() {
            if c.is_complete(graph) {
                log::debug!("result for '{}' from root '{}'", input, c.root().sequence);
                results.push(c);
                continue;
            }
            if graph.state(c.last_state()).state_type == StateType::Terminal {
                continue;
            }
            let next = self.advance(&applier, &c, input);
            stack.extend(next.into_iter().rev());
        }
        results
    }
}

impl std::fmt::Debug for ContextlessParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextlessParser")
            .field("form_graph", &self.form_graph)
            .field("chain", &self.chain)
            .field("predefined", &self.predefined.as_ref().map(|p| p.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphOptions;
    use crate::lexicon::{self, RootMap};
    use crate::format;
    use crate::rootfinder::{DictionaryRootFinder, Policy};

    const LEXICON: &str = "\
kitap
elma
ev
kalem
yemek [A:RootChange]
başlamak
ben [P:Pron,Pers; A:RootChange]
";

    fn parser_with(text: &str, options: GraphOptions) -> ContextlessParser {
        let graph = Arc::new(SuffixGraph::new(&options).unwrap());
        let lexemes = lexicon::parse_lexemes(text).unwrap();
        let roots = Arc::new(RootMap::from_lexemes(&lexemes).unwrap());
        let predefined = PredefinedPaths::build(&graph, &roots).unwrap();
        let mut chain = RootFinderChain::new();
        chain
            .add(Box::new(DictionaryRootFinder::new(Arc::clone(&roots))), Policy::ContinueOnChain)
            .unwrap();
        let form_graph = Arc::new(SuffixFormGraph::extract(graph));
        ContextlessParser::new(form_graph, chain, Some(Arc::new(predefined))).unwrap()
    }

    fn parser_for(text: &str) -> ContextlessParser {
        parser_with(text, GraphOptions::default())
    }

    fn formatted(parser: &ContextlessParser, input: &str) -> Vec<String> {
        let mut out: Vec<String> = parser
            .parse(input)
            .iter()
            .map(|c| format::format(c, parser.graph()))
            .collect();
        out.sort();
        out
    }

    #[test]
    fn kitaba_has_one_analysis() {
        let parser = parser_with(LEXICON, GraphOptions::basic());
        assert_eq!(formatted(&parser, "kitaba"), vec!["kitap+Noun+A3sg+Pnon+Dat"]);

        let parser = parser_for(LEXICON);
        let analyses = formatted(&parser, "kitaba");
        assert!(analyses.contains(&"kitap+Noun+A3sg+Pnon+Dat".to_string()));
    }

    #[test]
    fn results_reproduce_the_input() {
        let parser = parser_for(LEXICON);
        for input in ["kitaplarımızdan", "evdekiler", "elmalı", "kaleme", "başlıyor", "kitaplar", "Kitaba", "bana"] {
            let results = parser.parse(input);
            assert!(!results.is_empty(), "{input}");
            for c in &results {
                assert_eq!(c.surface_so_far(), input);
                assert!(c.remaining().is_empty());
                let rebuilt: String = std::iter::once(c.root_surface())
                    .chain(c.transitions().iter().map(|t| t.actual.as_str()))
                    .collect();
                assert_eq!(rebuilt, input, "{}", format::format(c, parser.graph()));
            }
        }
    }

    #[test]
    fn capitalized_input_keeps_its_case_on_the_root_surface() {
        let parser = parser_for(LEXICON);
        let results = parser.parse("Kitaba");
        assert!(!results.is_empty());
        for c in &results {
            assert_eq!(c.root_surface(), "Kitab");
            assert_eq!(c.root().sequence, "kitab");
        }
    }

    #[test]
    fn empty_dictionary_parses_nothing() {
        let parser = parser_for("");
        assert!(parser.parse("elma").is_empty());
        assert!(parser.parse("").is_empty());
    }

    #[test]
    fn parsing_is_deterministic() {
        let parser = parser_for(LEXICON);
        let first = formatted(&parser, "evde");
        for _ in 0..3 {
            assert_eq!(formatted(&parser, "evde"), first);
        }
    }

    #[test]
    fn predefined_roots_resume_their_paths() {
        let parser = parser_for(LEXICON);
        let analyses = formatted(&parser, "bana");
        assert!(analyses.contains(&"ben+Pron+Pers+A1sg+Pnon+Dat".to_string()));
        let benler = formatted(&parser, "benler");
        assert!(!benler.iter().any(|a| a.starts_with("ben+Pron+Pers+A3pl")), "{benler:?}");
        let yiyor = formatted(&parser, "yiyor");
        assert!(yiyor.iter().all(|a| a.starts_with("ye+Verb+Pos+Prog")), "{yiyor:?}");
    }

    #[test]
    fn progressive_vowel_drop_takes_the_progressive() {
        let parser = parser_for(LEXICON);
        let analyses = formatted(&parser, "başlıyor");
        assert!(analyses.iter().any(|a| a.starts_with("başla+Verb+Pos+Prog")), "{analyses:?}");
    }

    #[test]
    fn parse_all_keeps_input_order() {
        let parser = parser_for(LEXICON);
        let inputs: Vec<String> = ["ev", "xyz", "kitaba"].iter().map(|s| s.to_string()).collect();
        let all = parser.parse_all(&inputs);
        assert_eq!(all.len(), 3);
        assert!(!all[0].is_empty());
        assert!(all[1].is_empty());
        assert_eq!(all[2].len(), parser.parse("kitaba").len());
    }
}
