// Mandatory transitions
//
// Some roots only exist in front of one particular suffix chain: a verb
// root with progressive vowel drop (`başl` of `başlamak`, `yürü` of
// `yürümek` realized as `yür`) must take the positive polarity and the
// progressive `Iyor` right away. These chains are applied to the initial
// candidates before the search starts; a candidate that cannot take its
// chain is dropped.

use crate::container::MorphemeContainer;
use crate::graph::{Condition, GraphError, StateId, SuffixGraph, SuffixId};
use crate::parser::applier::{DeclaredForm, SuffixApplier};

use trnltk_core::PrimaryPos;

struct Step {
    suffix: SuffixId,
    form_index: usize,
    target: StateId,
}

struct Rule {
    condition: Condition,
    source: StateId,
    steps: Vec<Step>,
}

pub(crate) struct MandatoryTransitions {
    rules: Vec<Rule>,
}

impl MandatoryTransitions {
    pub fn new(graph: &SuffixGraph) -> Result<Self, GraphError> {
        let progressive_vowel_drop = Rule {
            condition: Condition::RootPrimaryPos(PrimaryPos::Verb)
                & Condition::RootHasProgressiveVowelDrop,
            source: state(graph, "VERB_ROOT")?,
            steps: vec![
                step(graph, "Pos", "", "VERB_WITH_POLARITY")?,
                step(graph, "Prog", "Iyor", "VERB_WITH_TENSE")?,
            ],
        };
        Ok(Self {
            rules: vec![progressive_vowel_drop],
        })
    }

    /// Apply the matching rules to every candidate, dropping candidates
    /// that fail a step.
    pub fn apply(
        &self,
        applier: &SuffixApplier<'_>,
        graph: &SuffixGraph,
        candidates: Vec<MorphemeContainer>,
        input: &str,
    ) -> Vec<MorphemeContainer> {
        candidates
            .into_iter()
            .filter_map(|c| self.apply_one(applier, graph, c, input))
            .collect()
    }

    fn apply_one(
        &self,
        applier: &SuffixApplier<'_>,
        graph: &SuffixGraph,
        mut c: MorphemeContainer,
        input: &str,
    ) -> Option<MorphemeContainer> {
        for rule in &self.rules {
            if c.last_state() != rule.source || !rule.condition.is_satisfied_by(&c, graph) {
                continue;
            }
            for step in &rule.steps {
                if !applier.suffix_allowed(&c, step.suffix) {
                    log::warn!(
                        "mandatory suffix {} cannot follow '{}'",
                        graph.suffix(step.suffix).name,
                        c.surface_so_far()
                    );
                    return None;
                }
                let sequence = &graph.suffix(step.suffix).forms[step.form_index].sequence;
                let form = DeclaredForm {
                    suffix: step.suffix,
                    form_index: Some(step.form_index),
                    sequence,
                    target: step.target,
                    lexeme_attributes: None,
                };
                match applier.try_form(&c, &form, input) {
                    Some(next) => c = next,
                    None => {
                        log::debug!(
                            "mandatory form '{}' does not apply to '{}'",
                            sequence.as_str(),
                            c.surface_so_far()
                        );
                        return None;
                    }
                }
            }
        }
        Some(c)
    }
}

fn state(graph: &SuffixGraph, name: &str) -> Result<StateId, GraphError> {
    graph
        .state_by_name(name)
        .ok_or_else(|| GraphError::UnknownState(name.to_string()))
}

fn step(graph: &SuffixGraph, suffix: &str, form: &str, target: &str) -> Result<Step, GraphError> {
    let id = graph
        .suffix_by_name(suffix)
        .ok_or_else(|| GraphError::UnknownSuffix(suffix.to_string()))?;
    let form_index = graph
        .suffix(id)
        .forms
        .iter()
        .position(|f| f.sequence.as_str() == form)
        .ok_or_else(|| GraphError::MalformedForm {
            form: form.to_string(),
            reason: format!("not a form of {suffix}"),
        })?;
    Ok(Step {
        suffix: id,
        form_index,
        target: state(graph, target)?,
    })
}
