// Copula module
//
// Nominal predicates (`elmaydı`, `evdeyim`), the explicit copula `-dIr`, the
// negative copula `değil`, and the adverbs derived from copular forms
// (`evdeyken`, `çocukmuşçasına`).

use trnltk_core::{PrimaryPos, Root};

use super::condition::*;
use super::{GraphError, GraphModule, StateId, StateType, SuffixGraph, SuffixGraphBuilder};

const DEGIL: &str = "değil";

#[derive(Debug, Clone, Copy, Default)]
pub struct CopulaGraph;

impl GraphModule for CopulaGraph {
    fn register(&self, b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
        use PrimaryPos::*;
        use StateType::*;

        let noun_copula = b.add_state("NOUN_COPULA", Derivational, Noun)?;
        let adjective_copula = b.add_state("ADJECTIVE_COPULA", Derivational, Adjective)?;
        let adverb_copula = b.add_state("ADVERB_COPULA", Derivational, Adverb)?;
        let pronoun_copula = b.add_state("PRONOUN_COPULA", Derivational, Pronoun)?;
        let degil_root = b.add_state("VERB_DEGIL_ROOT", Transfer, Verb)?;
        let without_tense = b.add_state("VERB_COPULA_WITHOUT_TENSE", Transfer, Verb)?;
        let without_tense_deriv =
            b.add_state("VERB_COPULA_WITHOUT_TENSE_DERIV", Derivational, Verb)?;
        let with_tense = b.add_state("VERB_COPULA_WITH_TENSE", Transfer, Verb)?;
        let with_tense_deriv = b.add_state("VERB_COPULA_WITH_TENSE_DERIV", Derivational, Verb)?;
        let swapped_a3pl = b.add_state("VERB_COPULA_WITH_SWAPPED_A3PL", Transfer, Verb)?;
        let others_swapped_a3pl =
            b.add_state("VERB_COPULA_FROM_OTHERS_WITH_SWAPPED_A3PL", Derivational, Verb)?;
        b.add_root_state(degil_root);

        let [adjective_deriv, adverb_root, verb_with_tense, verb_terminal] =
            b.states(["ADJECTIVE_DERIV", "ADVERB_ROOT", "VERB_WITH_TENSE", "VERB_TERMINAL"])?;
        let [noun_tt, adjective_tt, adverb_tt, pronoun_tt, verb_tt] = b.states([
            "NOUN_TERMINAL_TRANSFER",
            "ADJECTIVE_TERMINAL_TRANSFER",
            "ADVERB_TERMINAL_TRANSFER",
            "PRONOUN_TERMINAL_TRANSFER",
            "VERB_TERMINAL_TRANSFER",
        ])?;
        let question_with_agreement = b.state("QUESTION_WITH_AGREEMENT")?;

        // Free and zero transitions
        b.add_free_transition("Noun_Cop_Free_Transition", noun_tt, noun_copula)?;
        b.add_free_transition("Adjective_Cop_Free_Transition", adjective_tt, adjective_copula)?;
        b.add_free_transition("Adverb_Cop_Free_Transition", adverb_tt, adverb_copula)?;
        b.add_free_transition("Pronoun_Cop_Free_Transition", pronoun_tt, pronoun_copula)?;
        b.add_free_transition("Verb_Degil_Free_Transition", degil_root, without_tense)?;
        b.add_free_transition("Copula_Deriv_Free_Transition_1", without_tense, without_tense_deriv)?;
        b.add_free_transition("Copula_Deriv_Free_Transition_2", with_tense, with_tense_deriv)?;
        b.add_zero_transition("Noun_Copula_Zero_Transition", noun_copula, without_tense)?;
        b.add_zero_transition("Adjective_Copula_Zero_Transition", adjective_copula, without_tense)?;
        b.add_zero_transition("Adverb_Copula_Zero_Transition", adverb_copula, without_tense)?;
        b.add_zero_transition("Pronoun_Copula_Zero_Transition", pronoun_copula, without_tense)?;
        b.add_zero_transition("Adjective_Adverb_Zero_Transition", adjective_deriv, adverb_root)?;

        // Tenses
        let pres = b.add_suffix("Pres_Cop", "Pres", None)?;
        let narr = b.add_suffix("Narr_Cop", "Narr", None)?;
        let past = b.add_suffix("Past_Cop", "Past", None)?;
        let cond = b.add_suffix("Cond_Cop", "Cond", None)?;
        let cond_secondary = b.add_suffix("Cond_Cop_Secondary", "Cond", None)?;
        for (suffix, form) in [(pres, ""), (narr, "+ymIş"), (past, "+ydI"), (cond, "+ysA")] {
            b.add_edge(without_tense, suffix, with_tense);
            b.add_form(suffix, form)?;
        }
        b.add_edge(with_tense, cond_secondary, with_tense);
        b.add_form_if(cond_secondary, "+ysA", !comes_after(pres))?;

        // Agreements
        let group = Some(b.group("Copula_Agreements_Group"));
        let a1sg = b.add_suffix("A1Sg_Cop", "A1sg", group)?;
        let a2sg = b.add_suffix("A2Sg_Cop", "A2sg", group)?;
        let a3sg = b.add_suffix("A3Sg_Cop", "A3sg", group)?;
        let a1pl = b.add_suffix("A1Pl_Cop", "A1pl", group)?;
        let a2pl = b.add_suffix("A2Pl_Cop", "A2pl", group)?;
        let a3pl = b.add_suffix("A3Pl_Cop", "A3pl", group)?;

        let [while_cop, as_if_cop, cop_verb, cop_verb_swapped, cop_others_swapped, cop_ques] = [
            b.add_suffix("While_Cop", "While", None)?,
            b.add_suffix("AsIf_Cop", "AsIf", None)?,
            b.add_suffix("Cop_Verb", "Cop", None)?,
            b.add_suffix("Cop_Verb_Swapped", "Cop", None)?,
            b.add_suffix("Cop_Others_Swapped", "Cop", None)?,
            b.add_suffix("Cop_Ques", "Cop", None)?,
        ];

        // gelmektedirler, elmadırlar
        let [neces, aor, prog, fut, verb_narr] = b.suffixes(["Neces", "Aor", "Prog", "Fut", "Narr"])?;
        b.add_edge(verb_with_tense, cop_verb_swapped, swapped_a3pl);
        b.add_form_if(cop_verb_swapped, "dIr", comes_after_any(&[neces, aor, prog, fut, verb_narr]))?;
        b.add_edge(swapped_a3pl, a3pl, verb_terminal);
        b.add_edge(without_tense, cop_others_swapped, others_swapped_a3pl);
        b.add_form(cop_others_swapped, "dIr")?;
        b.add_edge(others_swapped_a3pl, a3pl, verb_terminal);

        let after_cond_or_past = comes_after_any(&[cond, cond_secondary, past]);
        for suffix in [a1sg, a2sg, a3sg, a1pl, a2pl, a3pl] {
            b.add_edge(with_tense, suffix, verb_tt);
        }
        b.add_form(a1sg, "+yIm")?; // elmayım, armudum, elmaymışım
        b.add_form_if(a1sg, "m", after_cond_or_past.clone())?; // elmaydım, elmaysam
        b.add_form(a2sg, "sIn")?;
        b.add_form_if(a2sg, "n", after_cond_or_past.clone())?;
        b.add_form(a3sg, "")?;
        b.add_form(a1pl, "+yIz")?;
        b.add_form_if(a1pl, "!k", after_cond_or_past.clone())?;
        b.add_form(a2pl, "sInIz")?;
        b.add_form_if(a2pl, "nIz", after_cond_or_past)?;
        b.add_form(a3pl, "lAr")?;

        // Copula to adverb
        b.add_edge(without_tense_deriv, while_cop, adverb_root);
        b.add_form(while_cop, "+yken")?;
        b.add_edge(with_tense_deriv, as_if_cop, adverb_root);
        b.add_form_if(as_if_cop, "cAs!InA", comes_after(pres) | comes_after(narr))?;

        // Explicit copula after verbs
        let [verb_past, verb_cond, imp, opt, narr_ques, past_ques, pres_ques] =
            b.suffixes(["Past", "Cond", "Imp", "Opt", "Narr_Ques", "Past_Ques", "Pres_Ques"])?;
        let explicit_verb_copula = comes_after_none(&[
            aor, verb_past, verb_cond, imp, opt, cond, cond_secondary, past, narr, narr_ques, past_ques,
        ]);
        b.add_edge(verb_tt, cop_verb, verb_tt);
        b.add_form_if(cop_verb, "dIr", explicit_verb_copula)?;

        // Explicit copula after question particles: mıdır
        b.add_edge(question_with_agreement, cop_ques, question_with_agreement);
        b.add_form_if(cop_ques, "dIr", comes_after(pres_ques))
    }

    fn default_state(&self, root: &Root, graph: &SuffixGraph) -> Option<StateId> {
        if root.lexeme.primary_pos == PrimaryPos::Verb && root.sequence == DEGIL {
            graph.state_by_name("VERB_DEGIL_ROOT")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphOptions;

    #[test]
    fn copula_decorates_terminal_transfers() {
        let graph = SuffixGraph::new(&GraphOptions::default()).unwrap();
        let noun_tt = graph.state_by_name("NOUN_TERMINAL_TRANSFER").unwrap();
        let names: Vec<&str> = graph
            .state(noun_tt)
            .edges
            .iter()
            .map(|e| graph.suffix(e.suffix).name.as_str())
            .collect();
        assert_eq!(names, vec!["Noun_Terminal_Conditional_Free_Transition", "Noun_Cop_Free_Transition"]);
    }

    #[test]
    fn question_copula_uses_its_own_suffix() {
        let graph = SuffixGraph::new(&GraphOptions::default()).unwrap();
        let ques = graph.state_by_name("QUESTION_WITH_AGREEMENT").unwrap();
        let cop_ques = graph.suffix_by_name("Cop_Ques").unwrap();
        assert_eq!(graph.edges_with_suffix(ques, cop_ques).count(), 1);
        assert_eq!(graph.suffix(cop_ques).forms.len(), 1);
    }
}
