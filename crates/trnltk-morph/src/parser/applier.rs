// Suffix applier
//
// The checks every transition goes through, whether it comes from a form
// graph edge during search or from a declared form applied directly
// (mandatory transitions, predefined paths):
//
// - the suffix's group is not already used since the last derivation, and
//   a non-repeatable suffix does not follow itself across a derivation;
// - the form's precondition holds, the container's expectations accept the
//   form, and the form is applicable to the current tail;
// - after the transition, the previous form's postcondition holds, and when
//   leaving a derivational state, every post-derivative condition of the
//   transitions since the previous derivation holds.

use trnltk_core::{LexemeAttribute, LexemeAttributes};

use crate::container::{Application, MorphemeContainer};
use crate::formgraph::FormEdge;
use crate::graph::{StateId, StateType, SuffixGraph, SuffixId};
use crate::phonetics::{self, SuffixFormSequence};

/// A form to apply directly, without a form graph edge.
pub(crate) struct DeclaredForm<'a> {
    pub suffix: SuffixId,
    /// `None` for a literal form that carries no conditions.
    pub form_index: Option<usize>,
    pub sequence: &'a SuffixFormSequence,
    pub target: StateId,
    /// Lexeme attributes used when applying the form instead of the
    /// container's.
    pub lexeme_attributes: Option<LexemeAttributes>,
}

pub(crate) struct SuffixApplier<'g> {
    graph: &'g SuffixGraph,
}

impl<'g> SuffixApplier<'g> {
    pub fn new(graph: &'g SuffixGraph) -> Self {
        Self { graph }
    }

    /// Whether `suffix` may be added to `c` at all.
    pub fn suffix_allowed(&self, c: &MorphemeContainer, suffix: SuffixId) -> bool {
        let s = self.graph.suffix(suffix);
        if s.group.is_some_and(|g| c.group_applied_since_derivation(g)) {
            log::trace!("    group of {} already used since derivation", s.name);
            return false;
        }
        if !s.allow_repetition && c.last_derivation_suffix() == Some(suffix) {
            log::trace!("    {} repeats the last derivation", s.name);
            return false;
        }
        true
    }

    fn form_allowed(
        &self,
        c: &MorphemeContainer,
        suffix: SuffixId,
        form_index: Option<usize>,
        sequence: &SuffixFormSequence,
    ) -> bool {
        let precondition = form_index
            .and_then(|i| self.graph.suffix(suffix).forms[i].conditions.pre.as_ref());
        if precondition.is_some_and(|pre| !pre.is_satisfied_by(c, self.graph)) {
            log::trace!("    precondition of '{}' not satisfied", sequence.as_str());
            return false;
        }
        if !sequence.is_blank() && !phonetics::expectations_satisfied(c.expectations(), sequence) {
            log::trace!("    '{}' does not meet the expectations", sequence.as_str());
            return false;
        }
        phonetics::is_suffix_form_applicable(c.phonetic_attributes(), sequence)
    }

    /// Follow a form graph edge from `c`.
    pub fn try_edge(&self, c: &MorphemeContainer, edge: &FormEdge, input: &str) -> Option<MorphemeContainer> {
        if !self.suffix_allowed(c, edge.suffix) {
            return None;
        }
        let form = &self.graph.suffix(edge.suffix).forms[edge.form_index];
        if !self.form_allowed(c, edge.suffix, Some(edge.form_index), &form.sequence) {
            return None;
        }
        let applied = format!("{}{}", c.surface_so_far(), edge.applied);
        if !phonetics::application_matches(input, &applied, false) {
            return None;
        }

        let mut next = c.clone();
        let application = Application {
            suffix: edge.suffix,
            form_index: Some(edge.form_index),
            form: form.sequence.as_str().to_string(),
            actual: edge.applied.clone(),
            fitting: edge.fitting.clone(),
        };
        next.add_transition(self.graph, application, edge.target);
        if !self.conditions_hold_after(c, &next) {
            return None;
        }
        if !edge.expectations.is_empty() {
            next.set_expectations(edge.expectations);
        }
        Some(next)
    }

    /// Apply a declared form to `c`, voicing the surface where the form
    /// requires it.
    pub fn try_form(&self, c: &MorphemeContainer, form: &DeclaredForm<'_>, input: &str) -> Option<MorphemeContainer> {
        if !self.form_allowed(c, form.suffix, form.form_index, form.sequence) {
            return None;
        }
        let lexeme_attributes = form.lexeme_attributes.unwrap_or(c.lexeme_attributes());
        let (surface, fitting) = phonetics::apply(
            c.surface_so_far(),
            c.phonetic_attributes(),
            form.sequence,
            lexeme_attributes,
        )?;
        let applied = format!("{surface}{fitting}");
        let voicing_allowed = self.graph.state(form.target).name != "VERB_ROOT";
        if !phonetics::application_matches(input, &applied, voicing_allowed) {
            return None;
        }
        let so_far = c.surface_so_far().chars().count();
        let actual: String = input
            .chars()
            .skip(so_far)
            .take(applied.chars().count().saturating_sub(so_far))
            .collect();

        let mut next = c.clone();
        let application = Application {
            suffix: form.suffix,
            form_index: form.form_index,
            form: form.sequence.as_str().to_string(),
            actual,
            fitting,
        };
        next.add_transition(self.graph, application, form.target);
        if !self.conditions_hold_after(c, &next) {
            return None;
        }
        Some(next)
    }

    fn conditions_hold_after(&self, before: &MorphemeContainer, after: &MorphemeContainer) -> bool {
        let Some(previous) = before.last_transition() else {
            return true;
        };
        let post = previous
            .form_index
            .and_then(|i| self.graph.suffix(previous.suffix).forms[i].conditions.post.as_ref());
        if post.is_some_and(|p| !p.is_satisfied_by(after, self.graph)) {
            log::trace!("    postcondition of {} not satisfied", self.graph.suffix(previous.suffix).name);
            return false;
        }
        if self.graph.state(before.last_state()).state_type != StateType::Derivational {
            return true;
        }
        before.transitions_from_derivation().iter().all(|t| {
            let condition = t
                .form_index
                .and_then(|i| self.graph.suffix(t.suffix).forms[i].conditions.post_derivative.as_ref());
            condition.is_none_or(|p| p.is_satisfied_by(after, self.graph))
        })
    }
}

/// Lexeme attributes under which literal forms are applied.
pub(crate) fn literal_form_attributes() -> LexemeAttributes {
    LexemeAttributes::of(&[LexemeAttribute::NoVoicing])
}
