// Suffix form graph
//
// The suffix graph expanded into the edges the parser actually walks. A
// node is a (state, phonetic attribute set) pair; each of its edges is one
// realization of one form of one suffix leaving that state, already applied
// to that attribute set. Every phonetic combination is computed here, once,
// so that parsing only compares prefixes.

use std::sync::Arc;

use hashbrown::HashMap;
use trnltk_core::phonetic::{self, PhoneticAttributes, PhoneticExpectations};

use crate::graph::{StateId, SuffixGraph, SuffixId};
use crate::phonetics;

/// One concrete realization of a suffix form leaving a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormEdge {
    pub suffix: SuffixId,
    /// Index of the form in its suffix.
    pub form_index: usize,
    pub target: StateId,
    /// The letters that must appear next in the input.
    pub applied: String,
    /// The letters before voicing by the next suffix.
    pub fitting: String,
    /// Attributes of the surface after the edge.
    pub target_attributes: PhoneticAttributes,
    /// Constraint on the next form.
    pub expectations: PhoneticExpectations,
}

/// The expanded graph. Immutable and shared by every parser built on it.
#[derive(Debug)]
pub struct SuffixFormGraph {
    graph: Arc<SuffixGraph>,
    nodes: HashMap<(StateId, PhoneticAttributes), Vec<FormEdge>>,
    edge_count: usize,
}

impl SuffixFormGraph {
    /// Expand `graph` over every state and every valid attribute set, plus
    /// the empty set that roots without letters carry.
    pub fn extract(graph: Arc<SuffixGraph>) -> Self {
        let attribute_sets: Vec<PhoneticAttributes> = phonetic::valid_sets()
            .iter()
            .copied()
            .chain(std::iter::once(PhoneticAttributes::EMPTY))
            .collect();

        let mut nodes = HashMap::new();
        let mut edge_count = 0;
        for (state_id, state) in graph.states() {
            for &attrs in &attribute_sets {
                let mut edges = Vec::new();
                for edge in &state.edges {
                    let suffix = graph.suffix(edge.suffix);
                    for (form_index, form) in suffix.forms.iter().enumerate() {
                        if !phonetics::is_suffix_form_applicable(attrs, &form.sequence) {
                            continue;
                        }
                        for r in phonetics::realizations(&form.sequence, attrs) {
                            edges.push(FormEdge {
                                suffix: edge.suffix,
                                form_index,
                                target: edge.target,
                                applied: r.applied,
                                fitting: r.fitting,
                                target_attributes: r.target_attributes,
                                expectations: r.expectations,
                            });
                        }
                    }
                }
                edge_count += edges.len();
                nodes.insert((state_id, attrs), edges);
            }
        }
        log::debug!(
            "suffix form graph extracted: {} nodes, {} edges",
            nodes.len(),
            edge_count
        );
        Self {
            graph,
            nodes,
            edge_count,
        }
    }

    pub fn graph(&self) -> &SuffixGraph {
        &self.graph
    }

    /// Edges leaving a node, in form registration order. `None` when the
    /// attribute set is not one the graph was expanded over.
    pub fn edges(&self, state: StateId, attrs: PhoneticAttributes) -> Option<&[FormEdge]> {
        self.nodes.get(&(state, attrs)).map(Vec::as_slice)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphOptions;
    use trnltk_core::{LexemeAttributes, PhoneticExpectation};

    fn form_graph() -> SuffixFormGraph {
        let graph = SuffixGraph::new(&GraphOptions::default()).unwrap();
        SuffixFormGraph::extract(Arc::new(graph))
    }

    fn applied<'a>(fg: &'a SuffixFormGraph, state: &str, word: &str, suffix: &str) -> Vec<&'a str> {
        let graph = fg.graph();
        let state = graph.state_by_name(state).unwrap();
        let suffix = graph.suffix_by_name(suffix).unwrap();
        let attrs = phonetic::calculate(word, LexemeAttributes::EMPTY);
        fg.edges(state, attrs)
            .unwrap()
            .iter()
            .filter(|e| e.suffix == suffix)
            .map(|e| e.applied.as_str())
            .collect()
    }

    #[test]
    fn every_state_has_a_node_per_attribute_set() {
        let fg = form_graph();
        assert_eq!(fg.node_count(), fg.graph().state_count() * (phonetic::valid_sets().len() + 1));
        assert!(fg.edge_count() > fg.graph().state_count());
    }

    #[test]
    fn forms_are_realized_by_harmony() {
        let fg = form_graph();
        assert_eq!(applied(&fg, "NOUN_WITH_AGREEMENT", "ev", "A3Pl_Noun"), Vec::<&str>::new());
        assert_eq!(applied(&fg, "NOUN_ROOT", "ev", "A3Pl_Noun"), vec!["ler"]);
        assert_eq!(applied(&fg, "NOUN_ROOT", "kitap", "A3Pl_Noun"), vec!["lar"]);
        assert_eq!(applied(&fg, "NOUN_WITH_POSSESSION", "kitap", "Abl_Noun"), vec!["tan", "ndan"]);
        assert_eq!(applied(&fg, "NOUN_WITH_POSSESSION", "elma", "Dat_Noun"), vec!["ya", "na"]);
    }

    #[test]
    fn voiceable_forms_get_a_voiced_edge_expecting_a_vowel() {
        let fg = form_graph();
        let graph = fg.graph();
        let state = graph.state_by_name("NOUN_NOM_DERIV").unwrap();
        let dim = graph.suffix_by_name("Dim").unwrap();
        let attrs = phonetic::calculate("ev", LexemeAttributes::EMPTY);
        let edges: Vec<&FormEdge> = fg
            .edges(state, attrs)
            .unwrap()
            .iter()
            .filter(|e| e.suffix == dim && e.fitting == "cik")
            .collect();
        assert_eq!(edges.len(), 2);
        assert!(edges[0].expectations.is_empty());
        assert_eq!(edges[1].applied, "ciğ");
        assert!(edges[1].expectations.contains(PhoneticExpectation::VowelStart));
    }

    #[test]
    fn empty_attributes_allow_only_blank_forms() {
        let fg = form_graph();
        let state = fg.graph().state_by_name("NOUN_WITH_AGREEMENT").unwrap();
        let edges = fg.edges(state, PhoneticAttributes::EMPTY).unwrap();
        assert!(!edges.is_empty());
        assert!(edges.iter().all(|e| e.applied.is_empty()));
    }
}
