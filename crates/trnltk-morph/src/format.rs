// Analysis formatting
//
// String notations for a morpheme container. Free transitions never show;
// a derivational transition is prefixed by the part of speech it derives.
//
//     plain        kitap+Noun+A3sg+Pnon+Dat
//     with forms   kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])
//     grouped      (1,"elma+Noun+A3sg+Pnon+Nom")(2,"Adj+With")

use std::fmt::Write as _;

use trnltk_core::{PrimaryPos, SecondaryPos};

use crate::container::{MorphemeContainer, Transition};
use crate::graph::SuffixGraph;

/// Output notation for analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Plain,
    WithForms,
    Grouped,
}

impl Notation {
    pub fn render(self, c: &MorphemeContainer, graph: &SuffixGraph) -> String {
        match self {
            Self::Plain => format(c, graph),
            Self::WithForms => format_with_forms(c, graph),
            Self::Grouped => format_grouped(c, graph),
        }
    }
}

/// `kitap+Noun+A3sg+Pnon+Dat` for `kitaba`.
pub fn format(c: &MorphemeContainer, graph: &SuffixGraph) -> String {
    let lexeme = &c.root().lexeme;
    let mut out = format!("{}+{}", lexeme.lemma_root, graph.state(c.root_state()).pos);
    if let Some(secondary) = lexeme.secondary_pos {
        let _ = write!(out, "+{secondary}");
    }
    append_transitions(&mut out, c, graph, false);
    out
}

/// `kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])` for `kitaba`: the root as it
/// appears with its lemma, and each suffix with its declared and actual
/// form.
pub fn format_with_forms(c: &MorphemeContainer, graph: &SuffixGraph) -> String {
    let root = c.root();
    let mut out = format!(
        "{}({})+{}",
        root.sequence,
        root.lexeme.lemma,
        graph.state(c.root_state()).pos
    );
    if let Some(secondary) = root.lexeme.secondary_pos {
        let _ = write!(out, "+{secondary}");
    }
    append_transitions(&mut out, c, graph, true);
    out
}

fn append_transitions(out: &mut String, c: &MorphemeContainer, graph: &SuffixGraph, with_forms: bool) {
    for t in c.transitions() {
        let suffix = graph.suffix(t.suffix);
        if suffix.kind.is_free() {
            continue;
        }
        out.push('+');
        if t.derivational {
            let _ = write!(out, "{}+", graph.state(t.to).pos);
        }
        out.push_str(&suffix.pretty_name);
        if with_forms && shows_form(t) {
            let _ = write!(out, "({}[{}])", t.form, t.actual);
        }
    }
}

// Punctuation and apostrophes in the applied form are left out.
fn shows_form(t: &Transition) -> bool {
    !t.actual.trim().is_empty() && t.actual.chars().all(char::is_alphanumeric)
}

/// `(1,"elma+Noun+A3sg+Pnon+Nom")(2,"Adj+With")` for `elmalı`: one group
/// per derivation.
pub fn format_grouped(c: &MorphemeContainer, graph: &SuffixGraph) -> String {
    let lexeme = &c.root().lexeme;
    let mut head = vec![lexeme.lemma_root.clone(), lexeme.primary_pos.to_string()];
    if let Some(secondary) = lexeme.secondary_pos {
        if !skips_secondary_in_groups(lexeme.primary_pos, secondary) {
            head.push(secondary.to_string());
        }
    }

    let mut groups = vec![head];
    for t in c.transitions() {
        if t.derivational {
            groups.push(vec![graph.state(t.to).pos.to_string()]);
        }
        let suffix = graph.suffix(t.suffix);
        if suffix.kind.is_free() {
            continue;
        }
        if let Some(group) = groups.last_mut() {
            group.push(suffix.pretty_name.clone());
        }
    }

    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        let _ = write!(out, "({},\"{}\")", i + 1, group.join("+"));
    }
    out
}

fn skips_secondary_in_groups(primary: PrimaryPos, secondary: SecondaryPos) -> bool {
    matches!(
        (primary, secondary),
        (PrimaryPos::Adverb, SecondaryPos::QuestionPronoun)
            | (PrimaryPos::Adverb, SecondaryPos::Time)
            | (PrimaryPos::Adjective, SecondaryPos::QuestionPronoun)
    )
}
