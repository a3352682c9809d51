// Morpheme container
//
// One (possibly partial) analysis: a root, the state it started from and
// the ordered transitions applied so far. The parser clones a container for
// every branch it takes; a container added to the results is never changed
// again.
//
// Besides the transition list, a container keeps the state the next suffix
// depends on: the unconsumed input, the phonetic expectations placed by the
// root or by a voiced form, and the effective lexeme and phonetic
// attributes of the current tail.

use std::sync::Arc;

use trnltk_core::phonetic::{self, PhoneticAttributes, PhoneticExpectations};
use trnltk_core::sequence;
use trnltk_core::{LexemeAttribute, LexemeAttributes, PrimaryPos, Root};

use crate::graph::{GroupId, StateId, StateType, SuffixGraph, SuffixId};

/// A suffix form as it was applied to a surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Application {
    pub suffix: SuffixId,
    /// Index of the form in its suffix; `None` for a literal form forced by
    /// a predefined path.
    pub form_index: Option<usize>,
    /// The form as declared (`+yA`, `lAr`).
    pub form: String,
    /// The letters the form took in the input.
    pub actual: String,
    /// The letters the form produced before voicing by the next suffix.
    pub fitting: String,
}

/// One step of an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: StateId,
    pub suffix: SuffixId,
    pub group: Option<GroupId>,
    pub form_index: Option<usize>,
    pub form: String,
    pub actual: String,
    pub fitting: String,
    pub to: StateId,
    /// Whether the transition leaves a derivational state.
    pub derivational: bool,
}

impl Transition {
    /// Whether the declared form has letters.
    pub fn has_form(&self) -> bool {
        !self.form.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MorphemeContainer {
    root: Arc<Root>,
    root_state: StateId,
    surface_so_far: String,
    remaining: String,
    transitions: Vec<Transition>,
    last_state: StateId,
    expectations: PhoneticExpectations,
    lexeme_attributes: LexemeAttributes,
    phonetic_attributes: PhoneticAttributes,
    last_derivation: Option<usize>,
    last_non_blank_derivation: Option<usize>,
    last_non_blank: Option<usize>,
}

impl MorphemeContainer {
    /// A container holding only `root`, starting at `root_state`. The
    /// surface is the first `root.char_len()` characters of `input`, so the
    /// input's letter case is kept.
    pub fn new(root: Arc<Root>, root_state: StateId, input: &str) -> Self {
        let root_len = root.char_len();
        Self {
            surface_so_far: sequence::prefix(input, root_len).to_string(),
            remaining: sequence::suffix_from(input, root_len).to_string(),
            transitions: Vec::new(),
            last_state: root_state,
            expectations: root.phonetic_expectations,
            lexeme_attributes: root.lexeme.attributes,
            phonetic_attributes: root.phonetic_attributes,
            last_derivation: None,
            last_non_blank_derivation: None,
            last_non_blank: None,
            root_state,
            root,
        }
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn root_state(&self) -> StateId {
        self.root_state
    }

    pub fn surface_so_far(&self) -> &str {
        &self.surface_so_far
    }

    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    /// The input letters the root covers, in the input's letter case. This
    /// followed by every transition's `actual` rebuilds the surface;
    /// `root().sequence` is the lexicon spelling and can differ in case
    /// (`Kitaba` starts with `Kitab`, the root is `kitab`).
    pub fn root_surface(&self) -> &str {
        sequence::prefix(&self.surface_so_far, self.root.char_len())
    }

    /// Move a container built on another input onto `input`, which must
    /// start with the container's surface (letter case aside).
    pub fn resume_on(&mut self, input: &str) {
        let consumed = sequence::char_len(&self.surface_so_far);
        self.surface_so_far = sequence::prefix(input, consumed).to_string();
        self.remaining = sequence::suffix_from(input, consumed).to_string();
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn last_transition(&self) -> Option<&Transition> {
        self.transitions.last()
    }

    pub fn last_state(&self) -> StateId {
        self.last_state
    }

    /// Transitions after the last derivational one.
    pub fn transitions_since_derivation(&self) -> &[Transition] {
        let start = self.last_derivation.map_or(0, |i| i + 1);
        &self.transitions[start..]
    }

    /// The last derivational transition and everything after it.
    pub fn transitions_from_derivation(&self) -> &[Transition] {
        &self.transitions[self.last_derivation.unwrap_or(0)..]
    }

    pub fn last_derivation(&self) -> Option<&Transition> {
        self.last_derivation.map(|i| &self.transitions[i])
    }

    pub fn last_non_blank_derivation(&self) -> Option<&Transition> {
        self.last_non_blank_derivation.map(|i| &self.transitions[i])
    }

    pub fn last_non_blank_transition(&self) -> Option<&Transition> {
        self.last_non_blank.map(|i| &self.transitions[i])
    }

    pub fn last_derivation_suffix(&self) -> Option<SuffixId> {
        self.last_derivation().map(|t| t.suffix)
    }

    pub fn suffix_applied_since_derivation(&self, suffix: SuffixId) -> bool {
        self.transitions_since_derivation().iter().any(|t| t.suffix == suffix)
    }

    pub fn group_applied_since_derivation(&self, group: GroupId) -> bool {
        self.transitions_since_derivation()
            .iter()
            .any(|t| t.group == Some(group))
    }

    pub fn phonetic_attributes(&self) -> PhoneticAttributes {
        self.phonetic_attributes
    }

    pub fn lexeme_attributes(&self) -> LexemeAttributes {
        self.lexeme_attributes
    }

    pub fn expectations(&self) -> PhoneticExpectations {
        self.expectations
    }

    pub fn set_expectations(&mut self, expectations: PhoneticExpectations) {
        self.expectations = expectations;
    }

    /// Whether the container ends at a terminal state with the whole input
    /// consumed.
    pub fn is_complete(&self, graph: &SuffixGraph) -> bool {
        self.remaining.is_empty() && graph.state(self.last_state).state_type == StateType::Terminal
    }

    /// Append a transition from the last state to `to`.
    pub fn add_transition(&mut self, graph: &SuffixGraph, application: Application, to: StateId) {
        let derivational = graph.state(self.last_state).state_type == StateType::Derivational;
        let transition = Transition {
            from: self.last_state,
            suffix: application.suffix,
            group: graph.suffix(application.suffix).group,
            form_index: application.form_index,
            form: application.form,
            actual: application.actual,
            fitting: application.fitting,
            to,
            derivational,
        };

        self.surface_so_far.push_str(&transition.actual);
        let consumed = sequence::char_len(&transition.actual);
        self.remaining = sequence::suffix_from(&self.remaining, consumed).to_string();
        if transition.has_form() {
            self.expectations = PhoneticExpectations::EMPTY;
        }
        self.last_state = to;

        let index = self.transitions.len();
        if derivational {
            self.last_derivation = Some(index);
            if transition.has_form() {
                self.last_non_blank_derivation = Some(index);
            }
        }
        if transition.has_form() {
            self.last_non_blank = Some(index);
        }
        self.transitions.push(transition);

        self.phonetic_attributes = self.find_phonetic_attributes();
        self.lexeme_attributes = self.find_lexeme_attributes(graph);
    }

    // Uses the lexeme attributes of the previous tail.
    fn find_phonetic_attributes(&self) -> PhoneticAttributes {
        if self.transitions.is_empty() {
            return self.root.phonetic_attributes;
        }
        let suffix_so_far = sequence::suffix_from(&self.surface_so_far, self.root.char_len());
        if suffix_so_far.trim().is_empty() {
            return self.root.phonetic_attributes;
        }
        if suffix_so_far.chars().all(char::is_alphanumeric) {
            return phonetic::calculate(&self.surface_so_far, self.lexeme_attributes);
        }
        // Ankara'ya: only the letters after the last mark count.
        let tail = suffix_so_far
            .rsplit(|c: char| !c.is_alphanumeric())
            .next()
            .unwrap_or_default();
        if tail.is_empty() {
            self.root.phonetic_attributes
        } else {
            phonetic::calculate_new(self.root.phonetic_attributes, tail)
        }
    }

    fn find_lexeme_attributes(&self, graph: &SuffixGraph) -> LexemeAttributes {
        if self.last_non_blank.is_none() {
            return self.root.lexeme.attributes;
        }
        let state = graph.state(self.last_state);
        if state.pos != PrimaryPos::Verb {
            return LexemeAttributes::EMPTY;
        }
        let last_blank = self
            .transitions
            .last()
            .is_some_and(|t| t.actual.trim().is_empty());
        if state.state_type == StateType::Derivational || last_blank {
            LexemeAttributes::of(&[LexemeAttribute::NoVoicing])
        } else {
            LexemeAttributes::EMPTY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphOptions;
    use trnltk_core::{Lexeme, PhoneticAttribute, PrimaryPos};

    fn root_of(text: &str) -> Arc<Root> {
        let lexeme = Lexeme::new(text, text, PrimaryPos::Noun, None, LexemeAttributes::EMPTY);
        Arc::new(Root::new(
            text,
            Arc::new(lexeme),
            phonetic::calculate(text, LexemeAttributes::EMPTY),
            PhoneticExpectations::EMPTY,
        ))
    }

    fn apply(c: &mut MorphemeContainer, graph: &SuffixGraph, suffix: &str, form: &str, actual: &str, to: &str) {
        let suffix = graph.suffix_by_name(suffix).unwrap();
        let application = Application {
            suffix,
            form_index: Some(0),
            form: form.to_string(),
            actual: actual.to_string(),
            fitting: actual.to_string(),
        };
        c.add_transition(graph, application, graph.state_by_name(to).unwrap());
    }

    #[test]
    fn transitions_consume_the_input() {
        let graph = SuffixGraph::new(&GraphOptions::default()).unwrap();
        let noun_root = graph.state_by_name("NOUN_ROOT").unwrap();
        let mut c = MorphemeContainer::new(root_of("ev"), noun_root, "evler");
        assert_eq!(c.surface_so_far(), "ev");
        assert_eq!(c.remaining(), "ler");

        apply(&mut c, &graph, "A3Pl_Noun", "lAr", "ler", "NOUN_WITH_AGREEMENT");
        assert_eq!(c.surface_so_far(), "evler");
        assert_eq!(c.remaining(), "");
        assert_eq!(c.transitions().len(), 1);
        assert!(c.last_non_blank_transition().is_some());
        assert!(c.phonetic_attributes().contains(PhoneticAttribute::LastLetterConsonant));
        assert!(c.lexeme_attributes().is_empty());
    }

    #[test]
    fn derivation_resets_since_derivation_window() {
        let graph = SuffixGraph::new(&GraphOptions::default()).unwrap();
        let noun_root = graph.state_by_name("NOUN_ROOT").unwrap();
        let mut c = MorphemeContainer::new(root_of("ev"), noun_root, "evli");
        apply(&mut c, &graph, "A3Sg_Noun", "", "", "NOUN_WITH_AGREEMENT");
        apply(&mut c, &graph, "Pnon_Noun", "", "", "NOUN_WITH_POSSESSION");
        apply(&mut c, &graph, "Nom_Deriv_Noun", "", "", "NOUN_NOM_DERIV");
        assert_eq!(c.transitions_since_derivation().len(), 3);
        assert!(c.last_derivation().is_none());
        assert!(c.last_non_blank_transition().is_none());

        apply(&mut c, &graph, "With", "lI", "li", "ADJECTIVE_ROOT");
        assert!(c.transitions_since_derivation().is_empty());
        assert_eq!(c.transitions_from_derivation().len(), 1);
        assert_eq!(c.last_derivation_suffix(), graph.suffix_by_name("With"));
        assert!(c.last_non_blank_derivation().is_some());
        assert!(!c.suffix_applied_since_derivation(graph.suffix_by_name("A3Sg_Noun").unwrap()));
    }

    #[test]
    fn apostrophe_keeps_attributes_of_the_following_letters() {
        let graph = SuffixGraph::new(&GraphOptions::default()).unwrap();
        let proper = graph.state_by_name("PROPER_NOUN_ROOT").unwrap();
        let mut c = MorphemeContainer::new(root_of("ankara"), proper, "Ankara'dan");
        assert_eq!(c.surface_so_far(), "Ankara");

        apply(&mut c, &graph, "Apos_Proper_Noun", "'", "'", "NOUN_ROOT");
        assert_eq!(c.phonetic_attributes(), c.root().phonetic_attributes);

        let attrs = phonetic::calculate("Ankara", LexemeAttributes::EMPTY);
        apply(&mut c, &graph, "A3Sg_Noun", "", "", "NOUN_WITH_AGREEMENT");
        apply(&mut c, &graph, "Pnon_Noun", "", "", "NOUN_WITH_POSSESSION");
        apply(&mut c, &graph, "Abl_Noun", "dAn", "dan", "NOUN_WITH_CASE");
        assert_eq!(c.phonetic_attributes(), phonetic::calculate_new(attrs, "dan"));
    }
}
