// Numeral module
//
// Cardinal, ordinal and digit roots. Numerals turn into adjectives through a
// zero transition; digits take an apostrophe before their suffixes (`3'ü`).

use trnltk_core::{PrimaryPos, Root, SecondaryPos};

use super::{GraphError, GraphModule, StateId, StateType, SuffixGraph, SuffixGraphBuilder};

#[derive(Debug, Clone, Copy, Default)]
pub struct NumeralGraph;

impl GraphModule for NumeralGraph {
    fn register(&self, b: &mut SuffixGraphBuilder) -> Result<(), GraphError> {
        use PrimaryPos::Numeral;
        use StateType::*;

        let cardinal = b.add_state("NUMERAL_CARDINAL_ROOT", Transfer, Numeral)?;
        let cardinal_deriv = b.add_state("NUMERAL_CARDINAL_DERIV", Derivational, Numeral)?;
        let digits = b.add_state("NUMERAL_DIGIT_CARDINAL_ROOT", Transfer, Numeral)?;
        let ordinal = b.add_state("NUMERAL_ORDINAL_ROOT", Transfer, Numeral)?;
        let ordinal_deriv = b.add_state("NUMERAL_ORDINAL_DERIV", Derivational, Numeral)?;
        let adjective_root = b.state("ADJECTIVE_ROOT")?;
        for state in [cardinal, digits, ordinal] {
            b.add_root_state(state);
        }

        let numbers_of = b.add_plain_suffix("NumbersOf")?;
        let of_unit = b.add_suffix("OfUnit_Number", "OfUnit", None)?;
        let apostrophe = b.add_suffix("Apos_Digit", "Apos", None)?;

        b.add_free_transition("Numeral_Free_Transition_1", cardinal, cardinal_deriv)?;
        b.add_free_transition("Numeral_Free_Transition_2", ordinal, ordinal_deriv)?;
        b.add_free_transition("Digits_Free_Transition_1", digits, cardinal_deriv)?;
        b.add_zero_transition("Numeral_Zero_Transition_1", cardinal_deriv, adjective_root)?;
        b.add_zero_transition("Numeral_Zero_Transition_2", ordinal_deriv, adjective_root)?;

        b.add_edge(cardinal_deriv, numbers_of, adjective_root);
        b.add_form(numbers_of, "lArcA")?;
        b.add_edge(cardinal_deriv, of_unit, adjective_root);
        b.add_form(of_unit, "lIk")?;

        b.add_edge(digits, apostrophe, cardinal_deriv);
        b.add_form(apostrophe, "'")
    }

    fn default_state(&self, root: &Root, graph: &SuffixGraph) -> Option<StateId> {
        if root.lexeme.primary_pos != PrimaryPos::Numeral {
            return None;
        }
        let name = match root.lexeme.secondary_pos? {
            SecondaryPos::DigitsCardinal | SecondaryPos::Range => "NUMERAL_DIGIT_CARDINAL_ROOT",
            SecondaryPos::Cardinal => "NUMERAL_CARDINAL_ROOT",
            SecondaryPos::Ordinal | SecondaryPos::DigitsOrdinal => "NUMERAL_ORDINAL_ROOT",
            _ => return None,
        };
        graph.state_by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::graph::GraphOptions;
    use trnltk_core::{Lexeme, LexemeAttributes, PhoneticAttributes, PhoneticExpectations};

    fn numeral(text: &str, secondary: SecondaryPos) -> Root {
        let lexeme = Lexeme::new(text, text, PrimaryPos::Numeral, Some(secondary), LexemeAttributes::EMPTY);
        Root::new(text, Arc::new(lexeme), PhoneticAttributes::EMPTY, PhoneticExpectations::EMPTY)
    }

    #[test]
    fn numerals_start_from_their_own_roots() {
        let graph = SuffixGraph::new(&GraphOptions::default()).unwrap();
        let name = |r: &Root| graph.default_state(r).map(|s| graph.state(s).name.clone());
        assert_eq!(name(&numeral("beş", SecondaryPos::Cardinal)).as_deref(), Some("NUMERAL_CARDINAL_ROOT"));
        assert_eq!(name(&numeral("5", SecondaryPos::DigitsCardinal)).as_deref(), Some("NUMERAL_DIGIT_CARDINAL_ROOT"));
        assert_eq!(name(&numeral("5.", SecondaryPos::DigitsOrdinal)).as_deref(), Some("NUMERAL_ORDINAL_ROOT"));
        assert_eq!(name(&numeral("beşinci", SecondaryPos::Ordinal)).as_deref(), Some("NUMERAL_ORDINAL_ROOT"));
    }

    #[test]
    fn basic_graph_alone_has_no_numeral_root() {
        let graph = SuffixGraph::new(&GraphOptions::basic()).unwrap();
        assert_eq!(graph.default_state(&numeral("beş", SecondaryPos::Cardinal)), None);
    }
}
