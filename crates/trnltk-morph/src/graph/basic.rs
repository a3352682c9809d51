// Base suffix graph
//
// Morphotactics of nouns, verbs, adjectives, adverbs, pronouns and question
// particles, plus the terminal-only parts of speech. States and suffixes are
// declared in tables; edges, forms and conditions are registered per word
// class below. Pronoun agreements and question particles carry no forms of
// their own: their roots are reached only through predefined paths.

use trnltk_core::{LexemeAttribute, LexemeAttributes, PrimaryPos, Root, SecondaryPos};

use super::condition::*;
use super::{
    FormConditions, GraphError, GraphModule, StateId, StateType, SuffixGraph, SuffixGraphBuilder,
};

use PrimaryPos::*;
use StateType::*;

/// The base graph every configuration starts from.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicGraph;

const STATES: &[(&str, StateType, PrimaryPos)] = &[
    ("NOUN_ROOT", Transfer, Noun),
    ("NOUN_WITH_AGREEMENT", Transfer, Noun),
    ("NOUN_WITH_POSSESSION", Transfer, Noun),
    ("NOUN_WITH_CASE", Transfer, Noun),
    ("NOUN_TERMINAL_TRANSFER", Transfer, Noun),
    ("NOUN_TERMINAL", Terminal, Noun),
    ("NOUN_NOM_DERIV", Derivational, Noun),
    ("NOUN_POSSESSIVE_NOM_DERIV", Derivational, Noun),
    ("NOUN_DERIV_WITH_CASE", Derivational, Noun),
    ("NOUN_COMPOUND_ROOT", Transfer, Noun),
    ("NOUN_COMPOUND_WITH_AGREEMENT", Transfer, Noun),
    ("NOUN_COMPOUND_WITH_POSSESSION", Transfer, Noun),
    ("VERB_ROOT", Transfer, Verb),
    ("VERB_WITH_POLARITY", Transfer, Verb),
    ("VERB_WITH_TENSE", Transfer, Verb),
    ("VERB_WITH_SWAPPED_A3PL", Transfer, Verb),
    ("VERB_WITH_SWAPPED_PAST_COND", Transfer, Verb),
    ("VERB_TERMINAL", Terminal, Verb),
    ("VERB_TERMINAL_TRANSFER", Transfer, Verb),
    ("VERB_PLAIN_DERIV", Derivational, Verb),
    ("VERB_POLARITY_DERIV", Derivational, Verb),
    ("VERB_WITH_TENSE_BEFORE_DERIV", Transfer, Verb),
    ("VERB_TENSE_DERIV", Derivational, Verb),
    ("VERB_TENSE_ADJ_DERIV", Derivational, Verb),
    ("ADJECTIVE_ROOT", Transfer, Adjective),
    ("ADJECTIVE_PART_WITHOUT_POSSESSION", Transfer, Adjective),
    ("ADJECTIVE_TERMINAL", Terminal, Adjective),
    ("ADJECTIVE_TERMINAL_TRANSFER", Transfer, Adjective),
    ("ADJECTIVE_DERIV", Derivational, Adjective),
    ("ADVERB_ROOT", Transfer, Adverb),
    ("ADVERB_TERMINAL", Terminal, Adverb),
    ("ADVERB_TERMINAL_TRANSFER", Transfer, Adverb),
    ("ADVERB_DERIV", Derivational, Adverb),
    ("PRONOUN_ROOT", Transfer, Pronoun),
    ("PRONOUN_WITH_AGREEMENT", Transfer, Pronoun),
    ("PRONOUN_WITH_POSSESSION", Transfer, Pronoun),
    ("PRONOUN_WITH_CASE", Transfer, Pronoun),
    ("PRONOUN_NOM_DERIV", Derivational, Pronoun),
    ("PRONOUN_TERMINAL", Terminal, Pronoun),
    ("PRONOUN_TERMINAL_TRANSFER", Transfer, Pronoun),
    ("PRONOUN_DERIV_WITH_CASE", Derivational, Pronoun),
    ("DETERMINER_ROOT_TERMINAL", Terminal, Determiner),
    ("INTERJECTION_ROOT_TERMINAL", Terminal, Interjection),
    ("CONJUNCTION_ROOT_TERMINAL", Terminal, Conjunction),
    ("QUESTION_ROOT", Transfer, Question),
    ("QUESTION_WITH_TENSE", Transfer, Question),
    ("QUESTION_WITH_AGREEMENT", Transfer, Question),
    ("QUESTION_TERMINAL", Terminal, Question),
    ("DUP_ROOT_TERMINAL", Terminal, Duplicator),
    ("PUNC_ROOT_TERMINAL", Terminal, Punctuation),
    ("POSTP_ROOT_TERMINAL", Terminal, PostPositive),
];

/// State a root of each part of speech starts from.
const ROOT_STATES: &[(PrimaryPos, &str)] = &[
    (Noun, "NOUN_ROOT"),
    (Verb, "VERB_ROOT"),
    (Adverb, "ADVERB_ROOT"),
    (Adjective, "ADJECTIVE_ROOT"),
    (Pronoun, "PRONOUN_ROOT"),
    (Determiner, "DETERMINER_ROOT_TERMINAL"),
    (Interjection, "INTERJECTION_ROOT_TERMINAL"),
    (Conjunction, "CONJUNCTION_ROOT_TERMINAL"),
    (Punctuation, "PUNC_ROOT_TERMINAL"),
    (Duplicator, "DUP_ROOT_TERMINAL"),
    (PostPositive, "POSTP_ROOT_TERMINAL"),
    (Question, "QUESTION_ROOT"),
];

const NOUN_AGREEMENTS: &str = "Noun_Agreements_Group";
const NOUN_POSSESSIONS: &str = "Noun_Possession_Group";
const NOUN_CASES: &str = "Noun_Case_Group";
const RELATIVE_NOUN_PRONOUNS: &str = "Relative_Noun_Pronoun_Group";
const VERB_AGREEMENTS: &str = "Verb_Agreements_Group";
const VERB_AGREEMENTS_SWAPPED: &str = "Verb_Agreements_Swapped_Group";
const VERB_POLARITY: &str = "Verb_Conditions_Group";
const ADJECTIVE_POSSESSIONS: &str = "Adjective_Possessions_Group";
const PRONOUN_AGREEMENTS: &str = "Pronoun_Agreements_Group";
const PRONOUN_POSSESSIONS: &str = "Pronoun_Possessions_Group";
const PRONOUN_CASES: &str = "Pronoun_Case_Group";
const RELATIVE_PRON_PRONOUNS: &str = "Relative_Pron_Pronoun_Group";
const QUESTION_TENSES: &str = "Question_Tense_Group";
const QUESTION_AGREEMENTS: &str = "Question_Agreements_Group";

/// (name, pretty name, group). An empty pretty name means the name itself.
const SUFFIXES: &[(&str, &str, Option<&str>)] = &[
    ("A3Sg_Noun", "A3sg", Some(NOUN_AGREEMENTS)),
    ("A3Pl_Noun", "A3pl", Some(NOUN_AGREEMENTS)),
    ("Pnon_Noun", "Pnon", Some(NOUN_POSSESSIONS)),
    ("P1Sg_Noun", "P1sg", Some(NOUN_POSSESSIONS)),
    ("P2Sg_Noun", "P2sg", Some(NOUN_POSSESSIONS)),
    ("P3Sg_Noun", "P3sg", Some(NOUN_POSSESSIONS)),
    ("P1Pl_Noun", "P1pl", Some(NOUN_POSSESSIONS)),
    ("P2Pl_Noun", "P2pl", Some(NOUN_POSSESSIONS)),
    ("P3Pl_Noun", "P3pl", Some(NOUN_POSSESSIONS)),
    ("Nom_Noun", "Nom", Some(NOUN_CASES)),
    ("Nom_Deriv_Noun", "Nom", Some(NOUN_CASES)),
    ("Nom_Deriv_Possessive_Noun", "Nom", Some(NOUN_CASES)),
    ("Acc_Noun", "Acc", Some(NOUN_CASES)),
    ("Dat_Noun", "Dat", Some(NOUN_CASES)),
    ("Loc_Noun", "Loc", Some(NOUN_CASES)),
    ("Abl_Noun", "Abl", Some(NOUN_CASES)),
    ("Gen_Noun", "Gen", Some(NOUN_CASES)),
    ("Ins_Noun", "Ins", Some(NOUN_CASES)),
    ("Dim", "", None),
    ("Prof", "", None),
    ("FitFor", "", None),
    ("Title", "", None),
    ("Acquire", "", None),
    ("Become_Noun", "Become", None),
    ("Agt_Noun_to_Adj", "Agt", None),
    ("With", "", None),
    ("Without", "", None),
    ("Related", "", None),
    ("PointQual_Noun", "PointQual", None),
    ("JustLike_Noun", "JustLike", None),
    ("Equ_Noun", "Equ", None),
    ("Y", "", None),
    ("For", "", None),
    ("DurationOf", "", None),
    ("OfUnit_Noun", "OfUnit", None),
    ("InTermsOf", "", None),
    ("By_Pnon", "By", None),
    ("By_Possessive", "By", None),
    ("ManyOf", "", None),
    ("ForALotOfTime", "", None),
    ("RelPron_A3Sg_Noun", "A3sg", Some(RELATIVE_NOUN_PRONOUNS)),
    ("RelPron_A3Pl_Noun", "A3pl", Some(RELATIVE_NOUN_PRONOUNS)),
    ("A3Sg_Noun_Compound", "A3sg", None),
    ("Pnon_Noun_Compound", "Pnon", None),
    ("P3Sg_Noun_Compound", "P3sg", None),
    ("P3Pl_Noun_Compound", "P3pl", None),
    ("Nom_Noun_Compound_Deriv", "Nom", None),
    ("A1Sg_Verb", "A1sg", Some(VERB_AGREEMENTS)),
    ("A2Sg_Verb", "A2sg", Some(VERB_AGREEMENTS)),
    ("A3Sg_Verb", "A3sg", Some(VERB_AGREEMENTS)),
    ("A1Pl_Verb", "A1pl", Some(VERB_AGREEMENTS)),
    ("A2Pl_Verb", "A2pl", Some(VERB_AGREEMENTS)),
    ("A3Pl_Verb", "A3pl", Some(VERB_AGREEMENTS)),
    ("A1Sg_Verb_Swapped", "A1sg", Some(VERB_AGREEMENTS_SWAPPED)),
    ("A2Sg_Verb_Swapped", "A2sg", Some(VERB_AGREEMENTS_SWAPPED)),
    ("A1Pl_Verb_Swapped", "A1pl", Some(VERB_AGREEMENTS_SWAPPED)),
    ("A2Pl_Verb_Swapped", "A2pl", Some(VERB_AGREEMENTS_SWAPPED)),
    ("Neg", "", Some(VERB_POLARITY)),
    ("Pos", "", Some(VERB_POLARITY)),
    ("Aor", "", None),
    ("Prog", "", None),
    ("Fut", "", None),
    ("Narr", "", None),
    ("Past", "", None),
    ("Pres", "", None),
    ("Cond", "", None),
    ("Imp", "", None),
    ("Neces", "", None),
    ("Opt", "", None),
    ("Desr", "", None),
    ("Inf", "", None),
    ("PastPart_Noun", "PastPart", None),
    ("FutPart_Noun", "FutPart", None),
    ("Able", "", None),
    ("Pass", "", None),
    ("Recip", "", None),
    ("Caus", "", None),
    ("Hastily", "", None),
    ("EverSince", "", None),
    ("Stay", "", None),
    ("Almost", "", None),
    ("Once", "", None),
    ("Gone", "", None),
    ("Start", "", None),
    ("AfterDoingSo", "", None),
    ("WithoutHavingDoneSo", "", None),
    ("AsLongAs", "", None),
    ("ByDoingSo", "", None),
    ("When", "", None),
    ("Until", "", None),
    ("SinceDoingSo", "", None),
    ("While", "", None),
    ("AsIf", "", None),
    ("A3Pl_Verb_For_Adv", "A3pl", None),
    ("PresPart", "", None),
    ("PastPart_Adj", "PastPart", None),
    ("FutPart_Adj", "FutPart", None),
    ("Agt_Verb_to_Adj", "Agt", None),
    ("Aorist_to_Adj", "Aor", None),
    ("Future_to_Adj", "Fut", None),
    ("Narr_to_Adj", "Narr", None),
    ("JustLike_Adj", "JustLike", None),
    ("Equ_Adj", "Equ", None),
    ("Quite", "", None),
    ("Ly", "", None),
    ("Ness", "", None),
    ("Become_Adj", "Become", None),
    ("Pnon_Adj", "Pnon", Some(ADJECTIVE_POSSESSIONS)),
    ("P1Sg_Adj", "P1sg", Some(ADJECTIVE_POSSESSIONS)),
    ("P2Sg_Adj", "P2sg", Some(ADJECTIVE_POSSESSIONS)),
    ("P3Sg_Adj", "P3sg", Some(ADJECTIVE_POSSESSIONS)),
    ("P1Pl_Adj", "P1pl", Some(ADJECTIVE_POSSESSIONS)),
    ("P2Pl_Adj", "P2pl", Some(ADJECTIVE_POSSESSIONS)),
    ("P3Pl_Adj", "P3pl", Some(ADJECTIVE_POSSESSIONS)),
    ("A1Sg_Pron", "A1sg", Some(PRONOUN_AGREEMENTS)),
    ("A2Sg_Pron", "A2sg", Some(PRONOUN_AGREEMENTS)),
    ("A3Sg_Pron", "A3sg", Some(PRONOUN_AGREEMENTS)),
    ("A1Pl_Pron", "A1pl", Some(PRONOUN_AGREEMENTS)),
    ("A2Pl_Pron", "A2pl", Some(PRONOUN_AGREEMENTS)),
    ("A3Pl_Pron", "A3pl", Some(PRONOUN_AGREEMENTS)),
    ("Pnon_Pron", "Pnon", Some(PRONOUN_POSSESSIONS)),
    ("P1Sg_Pron", "P1sg", Some(PRONOUN_POSSESSIONS)),
    ("P2Sg_Pron", "P2sg", Some(PRONOUN_POSSESSIONS)),
    ("P3Sg_Pron", "P3sg", Some(PRONOUN_POSSESSIONS)),
    ("P1Pl_Pron", "P1pl", Some(PRONOUN_POSSESSIONS)),
    ("P2Pl_Pron", "P2pl", Some(PRONOUN_POSSESSIONS)),
    ("P3Pl_Pron", "P3pl", Some(PRONOUN_POSSESSIONS)),
    ("Nom_Pron", "Nom", Some(PRONOUN_CASES)),
    ("Nom_Pron_Deriv", "Nom", Some(PRONOUN_CASES)),
    ("Acc_Pron", "Acc", Some(PRONOUN_CASES)),
    ("Dat_Pron", "Dat", Some(PRONOUN_CASES)),
    ("Loc_Pron", "Loc", Some(PRONOUN_CASES)),
    ("Abl_Pron", "Abl", Some(PRONOUN_CASES)),
    ("Gen_Pron", "Gen", Some(PRONOUN_CASES)),
    ("Ins_Pron", "Ins", Some(PRONOUN_CASES)),
    ("AccordingTo", "", Some(PRONOUN_CASES)),
    ("Without_Pron", "Without", None),
    ("PointQual_Pron", "PointQual", None),
    ("RelPron_A3Sg_Pron", "A3sg", Some(RELATIVE_PRON_PRONOUNS)),
    ("RelPron_A3Pl_Pron", "A3pl", Some(RELATIVE_PRON_PRONOUNS)),
    ("PointQual_Adv", "PointQual", None),
    ("Pres_Ques", "Pres", Some(QUESTION_TENSES)),
    ("Past_Ques", "Past", Some(QUESTION_TENSES)),
    ("Narr_Ques", "Narr", Some(QUESTION_TENSES)),
    ("A1Sg_Ques", "A1sg", Some(QUESTION_AGREEMENTS)),
    ("A2Sg_Ques", "A2sg", Some(QUESTION_AGREEMENTS)),
    ("A3Sg_Ques", "A3sg", Some(QUESTION_AGREEMENTS)),
    ("A1Pl_Ques", "A1pl", Some(QUESTION_AGREEMENTS)),
    ("A2Pl_Ques", "A2pl", Some(QUESTION_AGREEMENTS)),
    ("A3Pl_Ques", "A3pl", Some(QUESTION_AGREEMENTS)),
];

/// (name, from, to) of the unprinted empty transitions.
const FREE_TRANSITIONS: &[(&str, &str, &str)] = &[
    ("Noun_Free_Transition_1", "NOUN_WITH_CASE", "NOUN_TERMINAL_TRANSFER"),
    ("Noun_Free_Transition_2", "NOUN_WITH_CASE", "NOUN_DERIV_WITH_CASE"),
    ("Verb_Free_Transition_1", "VERB_ROOT", "VERB_PLAIN_DERIV"),
    ("Verb_Free_Transition_2", "VERB_WITH_POLARITY", "VERB_POLARITY_DERIV"),
    ("Verb_Free_Transition_3", "VERB_WITH_TENSE", "VERB_WITH_TENSE_BEFORE_DERIV"),
    ("Verb_Free_Transition_4", "VERB_WITH_TENSE_BEFORE_DERIV", "VERB_TENSE_DERIV"),
    ("Verb_Free_Transition_5", "VERB_TERMINAL_TRANSFER", "VERB_TERMINAL"),
    ("Adj_Free_Transition_1", "ADJECTIVE_ROOT", "ADJECTIVE_TERMINAL_TRANSFER"),
    ("Adj_Free_Transition_2", "ADJECTIVE_TERMINAL_TRANSFER", "ADJECTIVE_TERMINAL"),
    ("Adj_Free_Transition_3", "ADJECTIVE_ROOT", "ADJECTIVE_DERIV"),
    ("Adv_Free_Transition_1", "ADVERB_ROOT", "ADVERB_TERMINAL_TRANSFER"),
    ("Adv_Free_Transition_2", "ADVERB_TERMINAL_TRANSFER", "ADVERB_TERMINAL"),
    ("Adv_Free_Transition_3", "ADVERB_ROOT", "ADVERB_DERIV"),
    ("Pronoun_Free_Transition_1", "PRONOUN_WITH_CASE", "PRONOUN_TERMINAL_TRANSFER"),
    ("Pronoun_Free_Transition_2", "PRONOUN_TERMINAL_TRANSFER", "PRONOUN_TERMINAL"),
    ("Pronoun_Free_Transition_3", "PRONOUN_WITH_CASE", "PRONOUN_DERIV_WITH_CASE"),
    ("Question_Free_Transition_1", "QUESTION_WITH_AGREEMENT", "QUESTION_TERMINAL"),
];

impl GraphModule for BasicGraph {
    fn register(&self, b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
        for &(name, state_type, pos) in STATES {
            b.add_state(name, state_type, pos)?;
        }
        for &(name, pretty, group) in SUFFIXES {
            let group = group.map(|g| b.group(g));
            let pretty = if pretty.is_empty() { name } else { pretty };
            b.add_suffix(name, pretty, group)?;
        }
        let caus = b.suffix("Caus")?;
        b.allow_repetition(caus);

        let compound_root = b.state("NOUN_COMPOUND_ROOT")?;
        b.add_root_state(compound_root);
        for &(_, name) in ROOT_STATES {
            let state = b.state(name)?;
            b.add_root_state(state);
        }

        for &(name, from, to) in FREE_TRANSITIONS {
            let [from, to] = b.states([from, to])?;
            b.add_free_transition(name, from, to)?;
        }
        let [adj_deriv, noun_root, verb_tense_adj_deriv, adj_root] = b.states([
            "ADJECTIVE_DERIV",
            "NOUN_ROOT",
            "VERB_TENSE_ADJ_DERIV",
            "ADJECTIVE_ROOT",
        ])?;
        b.add_zero_transition("Adj_to_Noun_Zero_Transition", adj_deriv, noun_root)?;
        b.add_zero_transition("Verb_to_Adj_Zero_Transition", verb_tense_adj_deriv, adj_root)?;

        register_noun_agreements(b)?;
        register_noun_possessions(b)?;
        register_noun_cases(b)?;
        register_noun_derivations(b)?;
        register_noun_to_pronoun_derivations(b)?;
        register_noun_compounds(b)?;
        register_noun_terminal_transition(b)?;

        register_verb_agreements(b)?;
        register_verb_polarity(b)?;
        register_verb_tenses(b)?;
        register_swapped_past_cond(b)?;
        register_modal_verbs(b)?;
        register_swapped_a3pl_verbs(b)?;
        register_verb_to_verb_derivations(b)?;
        register_verb_to_other_derivations(b)?;

        register_adjective_derivations(b)?;
        register_adjective_possessions(b)?;

        register_pronoun_agreements(b)?;
        register_pronoun_possessions(b)?;
        register_pronoun_cases(b)?;
        register_pronoun_derivations(b)?;

        register_adverb_derivations(b)?;
        register_question_suffixes(b)?;
        Ok(())
    }

    fn default_state(&self, root: &Root, graph: &SuffixGraph) -> Option<StateId> {
        let pos = root.lexeme.primary_pos;
        if pos == Noun && root.lexeme.has_attribute(LexemeAttribute::CompoundP3sg) {
            return graph.state_by_name("NOUN_COMPOUND_ROOT");
        }
        ROOT_STATES
            .iter()
            .find(|(p, _)| *p == pos)
            .and_then(|(_, name)| graph.state_by_name(name))
    }
}

fn attrs(attrs: &[LexemeAttribute]) -> LexemeAttributes {
    LexemeAttributes::of(attrs)
}

/// Connect `from` to `to` with `suffix`, all by name.
fn connect(b: &mut SuffixGraphBuilder, from: &str, suffix: &str, to: &str) -> Result<(), GraphError> {
    let [from, to] = b.states([from, to])?;
    let suffix = b.suffix(suffix)?;
    b.add_edge(from, suffix, to);
    Ok(())
}

// ---------------------------------------------------------------------------
// Nouns
// ---------------------------------------------------------------------------

fn register_noun_agreements(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [a3sg, a3pl] = b.suffixes(["A3Sg_Noun", "A3Pl_Noun"])?;
    connect(b, "NOUN_ROOT", "A3Sg_Noun", "NOUN_WITH_AGREEMENT")?;
    b.add_form(a3sg, "")?;
    connect(b, "NOUN_ROOT", "A3Pl_Noun", "NOUN_WITH_AGREEMENT")?;
    b.add_form(a3pl, "lAr")
}

fn register_noun_possessions(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [qual_adv, qual_noun, qual_pron, a3pl] =
        b.suffixes(["PointQual_Adv", "PointQual_Noun", "PointQual_Pron", "A3Pl_Noun"])?;
    let not_after_point_qual = !comes_after_last_non_blank_derivation(qual_adv)
        & !comes_after_last_non_blank_derivation(qual_noun)
        & !comes_after_last_non_blank_derivation(qual_pron);

    let forms = [
        ("Pnon_Noun", ""),
        ("P1Sg_Noun", "+Im"),
        ("P2Sg_Noun", "+In"),
        ("P3Sg_Noun", "+sI"),
        ("P1Pl_Noun", "+ImIz"),
        ("P2Pl_Noun", "+InIz"),
        ("P3Pl_Noun", "lAr!I"),
    ];
    for (name, form) in forms {
        connect(b, "NOUN_WITH_AGREEMENT", name, "NOUN_WITH_POSSESSION")?;
        let suffix = b.suffix(name)?;
        if form.is_empty() {
            b.add_form(suffix, form)?;
        } else {
            b.add_form_if(suffix, form, not_after_point_qual.clone())?;
        }
    }
    let p3pl = b.suffix("P3Pl_Noun")?;
    b.add_form_if(p3pl, "!I", comes_after(a3pl) & not_after_point_qual)
}

fn register_noun_cases(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [p3sg, p3pl, p3sg_compound, p3pl_compound] =
        b.suffixes(["P3Sg_Noun", "P3Pl_Noun", "P3Sg_Noun_Compound", "P3Pl_Noun_Compound"])?;
    let [qual_adv, qual_noun, qual_pron] =
        b.suffixes(["PointQual_Adv", "PointQual_Noun", "PointQual_Pron"])?;
    let [a3sg, a3sg_compound, a3pl, pnon] =
        b.suffixes(["A3Sg_Noun", "A3Sg_Noun_Compound", "A3Pl_Noun", "Pnon_Noun"])?;

    let after_p3 = comes_after_any(&[p3sg, p3pl, p3sg_compound, p3pl_compound]);
    let after_point_qual = comes_after_last_non_blank_derivation(qual_adv)
        | comes_after_last_non_blank_derivation(qual_noun)
        | comes_after_last_non_blank_derivation(qual_pron);
    let after_point_qual_a3sg = after_point_qual.clone() & comes_after_any(&[a3sg, a3sg_compound]);
    let after_point_qual_a3pl = after_point_qual & comes_after(a3pl);

    // Buffer letter y after plain stems, n after third person possessives.
    let with_y = (!after_p3.clone() & !after_point_qual_a3sg.clone()) | after_point_qual_a3pl;
    let with_n = after_p3 | after_point_qual_a3sg;

    connect(b, "NOUN_WITH_POSSESSION", "Nom_Noun", "NOUN_WITH_CASE")?;
    let nom = b.suffix("Nom_Noun")?;
    b.add_form(nom, "")?;

    connect(b, "NOUN_WITH_POSSESSION", "Nom_Deriv_Noun", "NOUN_NOM_DERIV")?;
    let nom_deriv = b.suffix("Nom_Deriv_Noun")?;
    b.add_form_if(nom_deriv, "", comes_after(pnon))?;

    connect(b, "NOUN_WITH_POSSESSION", "Nom_Deriv_Possessive_Noun", "NOUN_POSSESSIVE_NOM_DERIV")?;
    let nom_possessive = b.suffix("Nom_Deriv_Possessive_Noun")?;
    b.add_form_if(nom_possessive, "", !comes_after(pnon))?;

    for (name, y_form, n_form) in [
        ("Acc_Noun", "+yI", "nI"),
        ("Dat_Noun", "+yA", "nA"),
        ("Loc_Noun", "dA", "ndA"),
        ("Abl_Noun", "dAn", "ndAn"),
    ] {
        connect(b, "NOUN_WITH_POSSESSION", name, "NOUN_WITH_CASE")?;
        let suffix = b.suffix(name)?;
        b.add_form_if(suffix, y_form, with_y.clone())?;
        b.add_form_if(suffix, n_form, with_n.clone())?;
    }

    for (name, form) in [("Gen_Noun", "+nIn"), ("Ins_Noun", "+ylA")] {
        connect(b, "NOUN_WITH_POSSESSION", name, "NOUN_WITH_CASE")?;
        let suffix = b.suffix(name)?;
        b.add_form(suffix, form)?;
    }
    Ok(())
}

fn register_noun_derivations(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [a3pl, loc] = b.suffixes(["A3Pl_Noun", "Loc_Noun"])?;

    let plain = [
        ("Dim", "cIk", "NOUN_ROOT"),
        ("Prof", "lIk", "NOUN_ROOT"),
        ("FitFor", "lIk", "NOUN_ROOT"),
        ("Title", "lIk", "NOUN_ROOT"),
        ("Acquire", "lAn", "VERB_ROOT"),
        ("Become_Noun", "lAş", "VERB_ROOT"),
        ("Agt_Noun_to_Adj", "cI", "ADJECTIVE_ROOT"),
        ("With", "lI", "ADJECTIVE_ROOT"),
    ];
    for (name, form, to) in plain {
        connect(b, "NOUN_NOM_DERIV", name, to)?;
        let suffix = b.suffix(name)?;
        b.add_form(suffix, form)?;
    }

    for name in ["Without", "Related"] {
        connect(b, "NOUN_NOM_DERIV", name, "ADJECTIVE_ROOT")?;
    }
    let [without, related] = b.suffixes(["Without", "Related"])?;
    b.add_form_if(without, "sIz", !comes_after(a3pl))?;
    b.add_form_if(related, "sAl", !comes_after(a3pl))?;

    let to_adjective = [
        ("JustLike_Noun", "+ImsI"),
        ("Equ_Noun", "cA"),
        ("Y", "lIk"),
        ("For", "lIk"),
        ("DurationOf", "lIk"),
        ("OfUnit_Noun", "lIk"),
    ];
    for (name, form) in to_adjective {
        connect(b, "NOUN_NOM_DERIV", name, "ADJECTIVE_ROOT")?;
        let suffix = b.suffix(name)?;
        b.add_form(suffix, form)?;
    }

    connect(b, "NOUN_DERIV_WITH_CASE", "PointQual_Noun", "ADJECTIVE_ROOT")?;
    let point_qual = b.suffix("PointQual_Noun")?;
    b.add_form_if(point_qual, "ki", comes_after(loc))?;

    for (name, form) in [("InTermsOf", "cA"), ("By_Pnon", "cA"), ("ManyOf", "lArcA")] {
        connect(b, "NOUN_NOM_DERIV", name, "ADVERB_ROOT")?;
        let suffix = b.suffix(name)?;
        b.add_form(suffix, form)?;
    }
    connect(b, "NOUN_POSSESSIVE_NOM_DERIV", "By_Possessive", "ADVERB_ROOT")?;
    let by_possessive = b.suffix("By_Possessive")?;
    b.add_form(by_possessive, "ncA")?;

    connect(b, "NOUN_NOM_DERIV", "ForALotOfTime", "ADVERB_ROOT")?;
    let lot_of_time = b.suffix("ForALotOfTime")?;
    b.add_form_if(lot_of_time, "lArcA", root_has_secondary_pos(SecondaryPos::Time))
}

fn register_noun_to_pronoun_derivations(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [gen_noun, pnon_pron] = b.suffixes(["Gen_Noun", "Pnon_Pron"])?;
    // masanınki, kardeşiminkiler; never masanınkim
    let conditions = FormConditions::pre(comes_after(gen_noun)).with_post(followed_by(pnon_pron));
    for (name, form) in [("RelPron_A3Sg_Noun", "ki"), ("RelPron_A3Pl_Noun", "kiler")] {
        connect(b, "NOUN_DERIV_WITH_CASE", name, "PRONOUN_WITH_AGREEMENT")?;
        let suffix = b.suffix(name)?;
        b.add_form_with(suffix, form, conditions.clone())?;
    }
    Ok(())
}

fn register_noun_compounds(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let edges = [
        ("NOUN_COMPOUND_ROOT", "A3Sg_Noun_Compound", "NOUN_COMPOUND_WITH_AGREEMENT", ""),
        ("NOUN_COMPOUND_WITH_AGREEMENT", "P3Sg_Noun_Compound", "NOUN_WITH_POSSESSION", "+sI"),
        ("NOUN_COMPOUND_WITH_AGREEMENT", "P3Pl_Noun_Compound", "NOUN_WITH_POSSESSION", "lAr!I"),
        ("NOUN_COMPOUND_WITH_AGREEMENT", "Pnon_Noun_Compound", "NOUN_COMPOUND_WITH_POSSESSION", ""),
        ("NOUN_COMPOUND_WITH_POSSESSION", "Nom_Noun_Compound_Deriv", "NOUN_NOM_DERIV", ""),
    ];
    for (from, name, to, form) in edges {
        connect(b, from, name, to)?;
        let suffix = b.suffix(name)?;
        b.add_form(suffix, form)?;
    }
    Ok(())
}

fn register_noun_terminal_transition(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [adj_to_noun, a3sg, pnon, nom] =
        b.suffixes(["Adj_to_Noun_Zero_Transition", "A3Sg_Noun", "Pnon_Noun", "Nom_Noun"])?;
    // A bare adjective used as a noun is left to the adjective analysis.
    let bare_adjective_noun =
        comes_after_derivation(adj_to_noun) & comes_after(a3sg) & comes_after(pnon) & comes_after(nom);
    let [from, to] = b.states(["NOUN_TERMINAL_TRANSFER", "NOUN_TERMINAL"])?;
    b.add_conditional_free_transition(
        "Noun_Terminal_Conditional_Free_Transition",
        from,
        to,
        !bare_adjective_noun,
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Verbs
// ---------------------------------------------------------------------------

fn register_verb_agreements(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [imp, opt, past, past_ques, cond, desr] =
        b.suffixes(["Imp", "Opt", "Past", "Past_Ques", "Cond", "Desr"])?;
    let after_imp = comes_after(imp);
    let after_empty_imp = comes_after_form(imp, "");

    for name in ["A1Sg_Verb", "A2Sg_Verb", "A3Sg_Verb", "A1Pl_Verb", "A2Pl_Verb", "A3Pl_Verb"] {
        connect(b, "VERB_WITH_TENSE", name, "VERB_TERMINAL_TRANSFER")?;
    }
    let [a1sg, a2sg, a3sg, a1pl, a2pl, a3pl] = b.suffixes([
        "A1Sg_Verb", "A2Sg_Verb", "A3Sg_Verb", "A1Pl_Verb", "A2Pl_Verb", "A3Pl_Verb",
    ])?;

    b.add_form(a1sg, "+Im")?;
    b.add_form(a1sg, "yIm")?; // yapmaktayım, gelmeliyim

    b.add_form_if(a2sg, "n", !after_imp.clone() & !comes_after(opt))?;
    b.add_form_if(a2sg, "sIn", !after_imp.clone())?;
    b.add_form_if(a2sg, "", after_imp.clone())?;

    b.add_form_if(a3sg, "", !after_imp.clone())?;
    b.add_form_if(a3sg, "sIn", after_imp.clone())?;

    b.add_form_if(a1pl, "+Iz", !comes_after(opt))?;
    // geldik, gelmiş miydik, gelsek
    b.add_form_if(a1pl, "!k", comes_after_any(&[past, past_ques, cond, desr]))?;
    b.add_form_if(a1pl, "yIz", !comes_after(opt))?;
    b.add_form_if(a1pl, "lIm", comes_after(opt))?;

    b.add_form_if(a2pl, "", after_imp.clone() & !after_empty_imp.clone())?;
    b.add_form_if(a2pl, "sInIz", !after_imp.clone())?;
    b.add_form_if(a2pl, "nIz", !after_imp.clone())?;
    b.add_form_if(a2pl, "+yIn", after_empty_imp.clone())?;
    b.add_form_if(a2pl, "+yInIz", after_empty_imp)?;

    b.add_form_if(a3pl, "lAr", !after_imp.clone())?;
    b.add_form_if(a3pl, "sInlAr", after_imp)
}

fn register_verb_polarity(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [neg, pos, able, imp, past, narr, without_having] =
        b.suffixes(["Neg", "Pos", "Able", "Imp", "Past", "Narr", "WithoutHavingDoneSo"])?;
    connect(b, "VERB_ROOT", "Neg", "VERB_WITH_POLARITY")?;
    b.add_form_with(
        neg,
        "m",
        FormConditions::post(!followed_by_suffix_goes_to(Derivational)),
    )?;
    b.add_form(neg, "mA")?;
    // yapamadan: the negative after Able "+yA" is folded into "mAdAn"
    b.add_form_with(
        neg,
        "",
        FormConditions::pre(comes_after_derivation_form(able, "+yA"))
            .with_post(!followed_by(imp) & !followed_by(past) & !followed_by(narr))
            .with_post_derivative(followed_by_derivation_form(without_having, "mAdAn")),
    )?;
    connect(b, "VERB_ROOT", "Pos", "VERB_WITH_POLARITY")?;
    b.add_form(pos, "")
}

fn register_verb_tenses(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [neg, a1sg, a1pl, a2sg, a3sg, a2pl, a3pl] = b.suffixes([
        "Neg", "A1Sg_Verb", "A1Pl_Verb", "A2Sg_Verb", "A3Sg_Verb", "A2Pl_Verb", "A3Pl_Verb",
    ])?;
    let [aor, prog, fut, narr, past, cond, imp, pres] =
        b.suffixes(["Aor", "Prog", "Fut", "Narr", "Past", "Cond", "Imp", "Pres"])?;
    let followed_by_a1 = followed_by_form(a1sg, "+Im") | followed_by_form(a1pl, "yIz");

    b.add_form_if(
        aor,
        "+Ir",
        has_lexeme_attributes(attrs(&[LexemeAttribute::AoristI])) & !comes_after(neg),
    )?;
    b.add_form_if(aor, "+Ar", !comes_after(neg))?;
    // gelmez, gelmezsin
    b.add_form_with(
        aor,
        "z",
        FormConditions::pre(comes_after(neg)).with_post(!followed_by_a1.clone()),
    )?;
    // gelmem, gelmeyiz
    b.add_form_with(aor, "", FormConditions::pre(comes_after(neg)).with_post(followed_by_a1))?;

    b.add_form(prog, "Iyor")?;
    b.add_form(prog, "mAktA")?;
    b.add_form(fut, "+yAcAk")?;
    b.add_form(narr, "mIş")?;
    b.add_form(narr, "ymIş")?;
    b.add_form(past, "dI")?;
    b.add_form(past, "ydI")?;
    b.add_form(cond, "+ysA")?;
    b.add_form_with(
        imp,
        "",
        FormConditions::post(
            followed_by(a2sg) | followed_by(a3sg) | followed_by(a2pl) | followed_by(a3pl),
        ),
    )?;
    b.add_form_with(imp, "sAnA", FormConditions::post(followed_by(a2sg)))?;
    b.add_form_with(imp, "sAnIzA", FormConditions::post(followed_by(a2pl)))?;
    b.add_form(pres, "")?;

    for name in ["Aor", "Prog", "Fut", "Narr", "Past", "Cond", "Imp"] {
        connect(b, "VERB_WITH_POLARITY", name, "VERB_WITH_TENSE")?;
    }
    for name in ["Cond", "Narr", "Past"] {
        connect(b, "VERB_WITH_TENSE", name, "VERB_WITH_TENSE")?;
    }
    Ok(())
}

fn register_swapped_past_cond(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let past = b.suffix("Past")?;
    let after_past_di = comes_after_form(past, "dI");
    for (name, form) in [
        ("A1Sg_Verb_Swapped", "m"),
        ("A2Sg_Verb_Swapped", "n"),
        ("A1Pl_Verb_Swapped", "!k"),
        ("A2Pl_Verb_Swapped", "nIz"),
    ] {
        connect(b, "VERB_WITH_TENSE", name, "VERB_WITH_SWAPPED_PAST_COND")?;
        let suffix = b.suffix(name)?;
        b.add_form_if(suffix, form, after_past_di.clone())?;
    }
    connect(b, "VERB_WITH_SWAPPED_PAST_COND", "Cond", "VERB_TERMINAL")
}

fn register_modal_verbs(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [neces, opt, desr, past, narr, neg] =
        b.suffixes(["Neces", "Opt", "Desr", "Past", "Narr", "Neg"])?;
    let agreements = b.group(VERB_AGREEMENTS);
    let modal_followers =
        followed_by(past) | followed_by(narr) | followed_by_one_from_group(agreements);

    connect(b, "VERB_WITH_POLARITY", "Neces", "VERB_WITH_TENSE")?;
    b.add_form(neces, "mAl!I")?;
    connect(b, "VERB_WITH_POLARITY", "Opt", "VERB_WITH_TENSE")?;
    b.add_form(opt, "Ay")?;
    b.add_form_with(
        opt,
        "A",
        FormConditions::pre(!comes_after(neg)).with_post(modal_followers.clone()),
    )?;
    b.add_form_with(opt, "yA", FormConditions::post(modal_followers))?;
    connect(b, "VERB_WITH_POLARITY", "Desr", "VERB_WITH_TENSE")?;
    b.add_form(desr, "sA")
}

fn register_swapped_a3pl_verbs(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    connect(b, "VERB_WITH_TENSE", "A3Pl_Verb", "VERB_WITH_SWAPPED_A3PL")?;
    for name in ["Cond", "Narr", "Past"] {
        connect(b, "VERB_WITH_SWAPPED_A3PL", name, "VERB_TERMINAL_TRANSFER")?;
    }
    Ok(())
}

fn register_verb_to_verb_derivations(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [able, neg, pass, recip, caus] = b.suffixes(["Able", "Neg", "Pass", "Recip", "Caus"])?;

    connect(b, "VERB_PLAIN_DERIV", "Able", "VERB_ROOT")?;
    b.add_form_with(able, "+yAbil", FormConditions::post(!followed_by(neg)))?;
    b.add_form_with(able, "+yA", FormConditions::post(followed_by(neg)))?;

    // yapıver, olageldi, bakakaldı, düşeyazdı, yapagörsün, gidegitti, çalışakoy
    let auxiliaries = [
        ("Hastily", &["+yIver"][..]),
        ("EverSince", &["+yAgel"][..]),
        ("Stay", &["+yAkal"][..]),
        ("Almost", &["+yAyaz"][..]),
        ("Once", &["+yAgör"][..]),
        ("Gone", &["+yAgi!t", "+yAgid"][..]),
        ("Start", &["+yAkoy"][..]),
    ];
    for (name, forms) in auxiliaries {
        connect(b, "VERB_POLARITY_DERIV", name, "VERB_ROOT")?;
        let suffix = b.suffix(name)?;
        for form in forms {
            b.add_form(suffix, form)?;
        }
    }

    let passive_il = has_lexeme_attributes(attrs(&[LexemeAttribute::PassiveIl]))
        | (doesnt_have_lexeme_attributes(attrs(&[LexemeAttribute::PassiveIn]))
            & doesnt_have_lexeme_attributes(attrs(&[LexemeAttribute::PassiveInIl])));
    connect(b, "VERB_PLAIN_DERIV", "Pass", "VERB_ROOT")?;
    b.add_form_if(pass, "+In", has_lexeme_attributes(attrs(&[LexemeAttribute::PassiveIn])))?;
    b.add_form_if(pass, "+nIl", passive_il)?;
    b.add_form_if(pass, "+InIl", has_lexeme_attributes(attrs(&[LexemeAttribute::PassiveInIl])))?;

    connect(b, "VERB_PLAIN_DERIV", "Recip", "VERB_ROOT")?;
    b.add_form_with(
        recip,
        "+Iş",
        FormConditions::default().with_post_derivative(
            !followed_by_derivation(caus) | followed_by_derivation_form(caus, "dIr"),
        ),
    )?;

    connect(b, "VERB_PLAIN_DERIV", "Caus", "VERB_ROOT")?;
    let caus_attr = |a| has_lexeme_attributes(attrs(&[a]));
    b.add_form_if(
        caus,
        "!t",
        caus_attr(LexemeAttribute::CausativeT)
            & !comes_after_derivation_form(caus, "!t")
            & !comes_after_derivation_form(caus, "I!t"),
    )?;
    b.add_form_if(caus, "Ir", caus_attr(LexemeAttribute::CausativeIr) & !comes_after_derivation(able))?;
    b.add_form_if(caus, "I!t", caus_attr(LexemeAttribute::CausativeIt) & !comes_after_derivation(able))?;
    b.add_form_if(caus, "Ar", caus_attr(LexemeAttribute::CausativeAr) & !comes_after_derivation(able))?;
    b.add_form_if(caus, "dIr", caus_attr(LexemeAttribute::CausativeDIr))
}

fn register_verb_to_other_derivations(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let from_polarity: [(&str, &[&str], &str); 14] = [
        ("Inf", &["mAk", "mA", "+yIş"], "NOUN_ROOT"),
        ("PastPart_Noun", &["dIk"], "NOUN_ROOT"),
        ("FutPart_Noun", &["+yAcAk"], "NOUN_ROOT"),
        ("AfterDoingSo", &["+yI!p"], "ADVERB_ROOT"),
        ("WithoutHavingDoneSo", &["mAdAn", "mAksIzIn"], "ADVERB_ROOT"),
        ("AsLongAs", &["dIkçA"], "ADVERB_ROOT"),
        ("ByDoingSo", &["+yArA!k"], "ADVERB_ROOT"),
        ("When", &["+yIncA"], "ADVERB_ROOT"),
        ("Until", &["+yIncAyA"], "ADVERB_ROOT"),
        ("SinceDoingSo", &["+yAl!I"], "ADVERB_ROOT"),
        ("PresPart", &["+yAn"], "ADJECTIVE_ROOT"),
        ("PastPart_Adj", &["dIk"], "ADJECTIVE_PART_WITHOUT_POSSESSION"),
        ("FutPart_Adj", &["+yAcAk"], "ADJECTIVE_PART_WITHOUT_POSSESSION"),
        ("Agt_Verb_to_Adj", &["+yIcI"], "ADJECTIVE_ROOT"),
    ];
    for (name, forms, to) in from_polarity {
        connect(b, "VERB_POLARITY_DERIV", name, to)?;
        let suffix = b.suffix(name)?;
        for form in forms {
            b.add_form(suffix, form)?;
        }
    }

    let [aor, prog, fut, narr, neg] = b.suffixes(["Aor", "Prog", "Fut", "Narr", "Neg"])?;
    connect(b, "VERB_WITH_TENSE_BEFORE_DERIV", "A3Pl_Verb_For_Adv", "VERB_TENSE_DERIV")?;
    let a3pl_for_adv = b.suffix("A3Pl_Verb_For_Adv")?;
    b.add_form(a3pl_for_adv, "lAr")?;
    connect(b, "VERB_TENSE_DERIV", "While", "ADVERB_ROOT")?;
    let while_ = b.suffix("While")?;
    b.add_form(while_, "ken")?;
    connect(b, "VERB_TENSE_DERIV", "AsIf", "ADVERB_ROOT")?;
    let as_if = b.suffix("AsIf")?;
    b.add_form_if(as_if, "cAs!InA", comes_after_any(&[aor, prog, fut, narr]))?;

    for name in ["Aorist_to_Adj", "Future_to_Adj", "Narr_to_Adj"] {
        connect(b, "VERB_WITH_POLARITY", name, "VERB_TENSE_ADJ_DERIV")?;
    }
    let [aor_adj, fut_adj, narr_adj] = b.suffixes(["Aorist_to_Adj", "Future_to_Adj", "Narr_to_Adj"])?;
    b.add_form_if(aor_adj, "+Ir", has_lexeme_attributes(attrs(&[LexemeAttribute::AoristI])))?;
    b.add_form(aor_adj, "+Ar")?;
    b.add_form_if(aor_adj, "z", comes_after(neg))?;
    b.add_form(fut_adj, "+yAcAk")?;
    b.add_form(narr_adj, "mIş")?;
    b.add_form(narr_adj, "ymIş")
}

// ---------------------------------------------------------------------------
// Adjectives, adverbs
// ---------------------------------------------------------------------------

fn register_adjective_derivations(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let derivations = [
        ("JustLike_Adj", "+ImsI", "ADJECTIVE_ROOT"),
        ("Equ_Adj", "cA", "ADJECTIVE_ROOT"),
        ("Quite", "cA", "ADJECTIVE_ROOT"),
        ("Ly", "cA", "ADVERB_ROOT"),
        ("Ness", "lIk", "NOUN_ROOT"),
        ("Become_Adj", "lAş", "VERB_ROOT"),
    ];
    for (name, form, to) in derivations {
        connect(b, "ADJECTIVE_DERIV", name, to)?;
        let suffix = b.suffix(name)?;
        b.add_form(suffix, form)?;
    }
    Ok(())
}

fn register_adjective_possessions(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let forms = [
        ("Pnon_Adj", ""),
        ("P1Sg_Adj", "+Im"),
        ("P2Sg_Adj", "+In"),
        ("P3Sg_Adj", "+sI"),
        ("P1Pl_Adj", "+ImIz"),
        ("P2Pl_Adj", "+InIz"),
        ("P3Pl_Adj", "lAr!I"),
    ];
    for (name, form) in forms {
        connect(b, "ADJECTIVE_PART_WITHOUT_POSSESSION", name, "ADJECTIVE_TERMINAL_TRANSFER")?;
        let suffix = b.suffix(name)?;
        b.add_form(suffix, form)?;
    }
    Ok(())
}

fn register_adverb_derivations(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let takes_ku = applies_to_root("bugün")
        | applies_to_root("dün")
        | applies_to_root("gün")
        | applies_to_root("öbür");
    connect(b, "ADVERB_DERIV", "PointQual_Adv", "ADJECTIVE_ROOT")?;
    let point_qual = b.suffix("PointQual_Adv")?;
    b.add_form_if(point_qual, "ki", !takes_ku.clone())?;
    b.add_form_if(point_qual, "kü", takes_ku)
}

// ---------------------------------------------------------------------------
// Pronouns, question particles
// ---------------------------------------------------------------------------

fn register_pronoun_agreements(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    for name in ["A1Sg_Pron", "A2Sg_Pron", "A3Sg_Pron", "A1Pl_Pron", "A2Pl_Pron", "A3Pl_Pron"] {
        connect(b, "PRONOUN_ROOT", name, "PRONOUN_WITH_AGREEMENT")?;
    }
    let [a3sg, a3pl] = b.suffixes(["A3Sg_Pron", "A3Pl_Pron"])?;
    b.add_form(a3sg, "")?;
    b.add_form(a3pl, "lAr")
}

fn register_pronoun_possessions(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let forms = [
        ("Pnon_Pron", ""),
        ("P1Sg_Pron", "+Im"),
        ("P2Sg_Pron", "+In"),
        ("P3Sg_Pron", "+sI"),
        ("P1Pl_Pron", "+ImIz"),
        ("P2Pl_Pron", "+InIz"),
        ("P3Pl_Pron", "lAr!I"),
    ];
    for (name, form) in forms {
        connect(b, "PRONOUN_WITH_AGREEMENT", name, "PRONOUN_WITH_POSSESSION")?;
        let suffix = b.suffix(name)?;
        b.add_form(suffix, form)?;
    }
    let [p3pl, a3pl] = b.suffixes(["P3Pl_Pron", "A3Pl_Pron"])?;
    b.add_form_if(p3pl, "!I", comes_after(a3pl))
}

fn register_pronoun_cases(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [p3sg, p3pl, rel_noun, rel_pron, pnon] =
        b.suffixes(["P3Sg_Pron", "P3Pl_Pron", "RelPron_A3Sg_Noun", "RelPron_A3Sg_Pron", "Pnon_Pron"])?;
    let after_p3 = comes_after(p3sg)
        | comes_after(p3pl)
        | comes_after_derivation(rel_noun)
        | comes_after_derivation(rel_pron);

    connect(b, "PRONOUN_WITH_POSSESSION", "Nom_Pron", "PRONOUN_WITH_CASE")?;
    let nom = b.suffix("Nom_Pron")?;
    b.add_form(nom, "")?;
    connect(b, "PRONOUN_WITH_POSSESSION", "Nom_Pron_Deriv", "PRONOUN_NOM_DERIV")?;
    let nom_deriv = b.suffix("Nom_Pron_Deriv")?;
    b.add_form_if(nom_deriv, "", comes_after(pnon))?;

    for (name, plain, after_third_person) in [
        ("Acc_Pron", "+yI", "nI"),
        ("Dat_Pron", "+yA", "nA"),
        ("Loc_Pron", "dA", "ndA"),
        ("Abl_Pron", "dAn", "ndAn"),
    ] {
        connect(b, "PRONOUN_WITH_POSSESSION", name, "PRONOUN_WITH_CASE")?;
        let suffix = b.suffix(name)?;
        b.add_form_if(suffix, plain, !after_p3.clone())?;
        b.add_form_if(suffix, after_third_person, after_p3.clone())?;
    }
    for (name, form) in [("Gen_Pron", "+nIn"), ("Ins_Pron", "+ylA"), ("AccordingTo", "cA")] {
        connect(b, "PRONOUN_WITH_POSSESSION", name, "PRONOUN_WITH_CASE")?;
        let suffix = b.suffix(name)?;
        b.add_form(suffix, form)?;
    }
    Ok(())
}

fn register_pronoun_derivations(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    let [a3sg, pnon, loc, gen_pron] = b.suffixes(["A3Sg_Pron", "Pnon_Pron", "Loc_Pron", "Gen_Pron"])?;
    let bu_su_o = applies_to_root("o") | applies_to_root("bu") | applies_to_root("şu");
    let bu_su_o_pnon = comes_after(a3sg) & comes_after(pnon) & bu_su_o;

    connect(b, "PRONOUN_NOM_DERIV", "Without_Pron", "ADJECTIVE_ROOT")?;
    let without = b.suffix("Without_Pron")?;
    b.add_form_if(without, "sIz", !bu_su_o_pnon.clone())?; // bensiz, onlarsız
    b.add_form_if(without, "nsuz", bu_su_o_pnon)?; // onsuz, bunsuz, şunsuz

    connect(b, "PRONOUN_DERIV_WITH_CASE", "PointQual_Pron", "ADJECTIVE_ROOT")?;
    let point_qual = b.suffix("PointQual_Pron")?;
    b.add_form_if(point_qual, "ki", comes_after(loc))?;

    // oranınki, benimki; never oranınkim
    let conditions = FormConditions::pre(comes_after(gen_pron)).with_post(followed_by(pnon));
    let [rel_a3sg, rel_a3pl] = b.suffixes(["RelPron_A3Sg_Noun", "RelPron_A3Pl_Noun"])?;
    connect(b, "PRONOUN_DERIV_WITH_CASE", "RelPron_A3Sg_Noun", "PRONOUN_WITH_AGREEMENT")?;
    b.add_form_with(rel_a3sg, "ki", conditions.clone())?;
    connect(b, "PRONOUN_DERIV_WITH_CASE", "RelPron_A3Pl_Noun", "PRONOUN_WITH_AGREEMENT")?;
    b.add_form_with(rel_a3pl, "kiler", conditions)
}

fn register_question_suffixes(b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
    for name in ["Pres_Ques", "Narr_Ques", "Past_Ques"] {
        connect(b, "QUESTION_ROOT", name, "QUESTION_WITH_TENSE")?;
    }
    for name in ["A1Sg_Ques", "A2Sg_Ques", "A3Sg_Ques", "A1Pl_Ques", "A2Pl_Ques", "A3Pl_Ques"] {
        connect(b, "QUESTION_WITH_TENSE", name, "QUESTION_WITH_AGREEMENT")?;
    }
    Ok(())
}
