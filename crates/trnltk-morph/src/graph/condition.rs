// Suffix form conditions
//
// A condition is a predicate over a morpheme container. Preconditions are
// checked before a form is applied, postconditions on the container after
// the next transition, post-derivative conditions on the container after
// the next derivation. "Since derivation" means the transitions added after
// the last derivational transition.

use std::ops::{BitAnd, BitOr, Not};

use trnltk_core::{LexemeAttributes, PrimaryPos, SecondaryPos, sequence};

use super::{GroupId, StateType, SuffixGraph, SuffixId, SuffixKind};
use crate::container::{MorphemeContainer, Transition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The suffix (optionally with this exact form text) was applied since
    /// the last derivation. Used for both "comes after" and "followed by".
    SinceDerivation { suffix: SuffixId, form: Option<String> },
    /// Some suffix of the group was applied since the last derivation.
    GroupSinceDerivation(GroupId),
    /// The last derivational transition used the suffix (and form).
    LastDerivation { suffix: SuffixId, form: Option<String> },
    /// The last derivational transition with a non-blank form used the
    /// suffix (and form).
    LastNonBlankDerivation { suffix: SuffixId, form: Option<String> },
    /// The root sequence is exactly this text.
    AppliesToRoot(String),
    RootPrimaryPos(PrimaryPos),
    RootSecondaryPos(SecondaryPos),
    /// While no non-blank suffix is applied, the root lexeme has all of
    /// these attributes.
    HasLexemeAttributes(LexemeAttributes),
    /// While no non-blank suffix is applied, the root lexeme has none of
    /// these attributes.
    DoesntHaveLexemeAttributes(LexemeAttributes),
    /// The root is the vowel-dropped realization of its lemma (başl/başla).
    RootHasProgressiveVowelDrop,
    /// The last transition ends in a state of this type.
    LastTransitionGoesTo(StateType),
    And(Vec<Condition>),
    Or(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn is_satisfied_by(&self, c: &MorphemeContainer, graph: &SuffixGraph) -> bool {
        match self {
            Self::SinceDerivation { suffix, form } => c
                .transitions_since_derivation()
                .iter()
                .any(|t| matches_transition(t, *suffix, form.as_deref())),
            Self::GroupSinceDerivation(group) => c
                .transitions_since_derivation()
                .iter()
                .any(|t| t.group == Some(*group)),
            Self::LastDerivation { suffix, form } => c
                .last_derivation()
                .is_some_and(|t| matches_transition(t, *suffix, form.as_deref())),
            Self::LastNonBlankDerivation { suffix, form } => c
                .last_non_blank_derivation()
                .is_some_and(|t| matches_transition(t, *suffix, form.as_deref())),
            Self::AppliesToRoot(text) => c.root().sequence == *text,
            Self::RootPrimaryPos(pos) => c.root().lexeme.primary_pos == *pos,
            Self::RootSecondaryPos(pos) => c.root().lexeme.secondary_pos == Some(*pos),
            Self::HasLexemeAttributes(attrs) => {
                if passed_root(c, graph) {
                    return true;
                }
                let own = c.root().lexeme.attributes;
                !own.is_empty() && own.contains_all(*attrs)
            }
            Self::DoesntHaveLexemeAttributes(attrs) => {
                if passed_root(c, graph) {
                    return true;
                }
                let own = c.root().lexeme.attributes;
                !own.is_empty() && !own.contains_any(*attrs)
            }
            Self::RootHasProgressiveVowelDrop => {
                let root = c.root();
                root.lexeme.has_attribute(trnltk_core::LexemeAttribute::ProgressiveVowelDrop)
                    && root.char_len() + 1 == sequence::char_len(&root.lexeme.lemma_root)
            }
            Self::LastTransitionGoesTo(state_type) => c
                .transitions()
                .last()
                .is_some_and(|t| graph.state(t.to).state_type == *state_type),
            Self::And(all) => all.iter().all(|x| x.is_satisfied_by(c, graph)),
            Self::Or(any) => any.iter().any(|x| x.is_satisfied_by(c, graph)),
            Self::Not(inner) => !inner.is_satisfied_by(c, graph),
        }
    }
}

fn matches_transition(t: &Transition, suffix: SuffixId, form: Option<&str>) -> bool {
    t.suffix == suffix && form.is_none_or(|f| t.form == f)
}

/// Whether a non-empty regular suffix is already applied, after which the
/// root's lexeme attributes no longer constrain anything.
fn passed_root(c: &MorphemeContainer, graph: &SuffixGraph) -> bool {
    c.transitions().iter().any(|t| {
        let kind = graph.suffix(t.suffix).kind;
        !kind.is_free() && kind != SuffixKind::Zero && !t.actual.trim().is_empty()
    })
}

impl Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        match self {
            Condition::Not(inner) => *inner,
            other => Condition::Not(Box::new(other)),
        }
    }
}

impl BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        match self {
            Condition::And(mut all) => {
                all.push(rhs);
                Condition::And(all)
            }
            lhs => Condition::And(vec![lhs, rhs]),
        }
    }
}

impl BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Condition {
        match self {
            Condition::Or(mut any) => {
                any.push(rhs);
                Condition::Or(any)
            }
            lhs => Condition::Or(vec![lhs, rhs]),
        }
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

pub fn comes_after(suffix: SuffixId) -> Condition {
    Condition::SinceDerivation { suffix, form: None }
}

pub fn comes_after_form(suffix: SuffixId, form: &str) -> Condition {
    Condition::SinceDerivation {
        suffix,
        form: Some(form.to_string()),
    }
}

/// Postcondition spelling of [`comes_after`].
pub fn followed_by(suffix: SuffixId) -> Condition {
    comes_after(suffix)
}

pub fn followed_by_form(suffix: SuffixId, form: &str) -> Condition {
    comes_after_form(suffix, form)
}

pub fn followed_by_one_from_group(group: GroupId) -> Condition {
    Condition::GroupSinceDerivation(group)
}

pub fn comes_after_derivation(suffix: SuffixId) -> Condition {
    Condition::LastDerivation { suffix, form: None }
}

pub fn comes_after_derivation_form(suffix: SuffixId, form: &str) -> Condition {
    Condition::LastDerivation {
        suffix,
        form: Some(form.to_string()),
    }
}

pub fn followed_by_derivation(suffix: SuffixId) -> Condition {
    comes_after_derivation(suffix)
}

pub fn followed_by_derivation_form(suffix: SuffixId, form: &str) -> Condition {
    comes_after_derivation_form(suffix, form)
}

pub fn comes_after_last_non_blank_derivation(suffix: SuffixId) -> Condition {
    Condition::LastNonBlankDerivation { suffix, form: None }
}

pub fn followed_by_suffix_goes_to(state_type: StateType) -> Condition {
    Condition::LastTransitionGoesTo(state_type)
}

pub fn applies_to_root(text: &str) -> Condition {
    Condition::AppliesToRoot(text.to_string())
}

pub fn root_has_secondary_pos(pos: SecondaryPos) -> Condition {
    Condition::RootSecondaryPos(pos)
}

pub fn has_lexeme_attributes(attrs: LexemeAttributes) -> Condition {
    Condition::HasLexemeAttributes(attrs)
}

pub fn doesnt_have_lexeme_attributes(attrs: LexemeAttributes) -> Condition {
    Condition::DoesntHaveLexemeAttributes(attrs)
}

/// `comes_after` for any of `suffixes`.
pub fn comes_after_any(suffixes: &[SuffixId]) -> Condition {
    Condition::Or(suffixes.iter().map(|&s| comes_after(s)).collect())
}

/// `comes_after` for none of `suffixes`.
pub fn comes_after_none(suffixes: &[SuffixId]) -> Condition {
    !comes_after_any(suffixes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(i: u16) -> SuffixId {
        SuffixId(i)
    }

    #[test]
    fn operators_flatten() {
        let c = comes_after(sid(1)) & comes_after(sid(2)) & comes_after(sid(3));
        assert!(matches!(&c, Condition::And(v) if v.len() == 3));
        let c = comes_after(sid(1)) | comes_after(sid(2)) | comes_after(sid(3));
        assert!(matches!(&c, Condition::Or(v) if v.len() == 3));
    }

    #[test]
    fn double_negation_cancels() {
        let c = !!comes_after(sid(4));
        assert_eq!(c, comes_after(sid(4)));
    }

    #[test]
    fn none_of_is_negated_any_of() {
        let c = comes_after_none(&[sid(1), sid(2)]);
        assert!(matches!(c, Condition::Not(inner) if matches!(*inner, Condition::Or(_))));
    }
}
