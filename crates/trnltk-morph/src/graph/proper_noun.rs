// Proper noun module
//
// A proper noun or abbreviation either ends bare (`Ankara`) or continues as
// a common noun after an apostrophe (`Ankara'ya`).

use trnltk_core::{PrimaryPos, Root, SecondaryPos};

use super::{GraphError, GraphModule, StateId, StateType, SuffixGraph, SuffixGraphBuilder};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounGraph;

impl GraphModule for ProperNounGraph {
    fn register(&self, b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
        use PrimaryPos::Noun;
        use StateType::*;

        let root = b.add_state("PROPER_NOUN_ROOT", Transfer, Noun)?;
        let with_agreement = b.add_state("PROPER_NOUN_WITH_AGREEMENT", Transfer, Noun)?;
        let with_possession = b.add_state("PROPER_NOUN_WITH_POSSESSION", Transfer, Noun)?;
        let with_case = b.add_state("PROPER_NOUN_WITH_CASE", Transfer, Noun)?;
        let terminal = b.add_state("PROPER_NOUN_TERMINAL", Terminal, Noun)?;
        let noun_root = b.state("NOUN_ROOT")?;
        b.add_root_state(root);

        b.add_free_transition("Proper_Noun_Free_Transition_1", with_case, terminal)?;

        let steps = [
            ("A3Sg_Proper_Noun", "A3sg", root, with_agreement),
            ("Pnon_Proper_Noun", "Pnon", with_agreement, with_possession),
            ("Nom_Proper_Noun", "Nom", with_possession, with_case),
        ];
        for (name, pretty, from, to) in steps {
            let suffix = b.add_suffix(name, pretty, None)?;
            b.add_edge(from, suffix, to);
            b.add_form(suffix, "")?;
        }

        let apostrophe = b.add_suffix("Apos_Proper_Noun", "Apos", None)?;
        b.add_edge(root, apostrophe, noun_root);
        b.add_form(apostrophe, "'")
    }

    fn default_state(&self, root: &Root, graph: &SuffixGraph) -> Option<StateId> {
        let lexeme = &root.lexeme;
        let proper = matches!(
            lexeme.secondary_pos,
            Some(SecondaryPos::ProperNoun | SecondaryPos::Abbreviation)
        );
        if lexeme.primary_pos == PrimaryPos::Noun && proper {
            graph.state_by_name("PROPER_NOUN_ROOT")
        } else {
            None
        }
    }
}
