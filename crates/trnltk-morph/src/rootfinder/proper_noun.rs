// Proper noun root finders
//
// `Ankara'ya`: the prefix up to the apostrophe is a proper noun, or an
// abbreviation when it is all upper case (`THY'ye`). A capitalized word
// without an apostrophe yields a proper noun root for each of its
// prefixes, and an abbreviation root for the whole word when it is all
// upper case. Abbreviations ending in a consonant are read with a trailing
// `E` (`PTT` as `pe-te-te`), which decides their harmony.

use std::sync::Arc;

use trnltk_core::{
    alphabet, phonetic, sequence, Lexeme, LexemeAttributes, PhoneticAttributes, PhoneticExpectations, PrimaryPos,
    Root, SecondaryPos,
};

use super::RootFinder;

const APOSTROPHE: char = '\'';

fn proper_noun_root(seq: &str, secondary: SecondaryPos, attrs: PhoneticAttributes) -> Arc<Root> {
    let lexeme = Lexeme::new(seq, seq, PrimaryPos::Noun, Some(secondary), LexemeAttributes::EMPTY);
    Arc::new(Root::new(seq, Arc::new(lexeme), attrs, PhoneticExpectations::EMPTY))
}

fn starts_upper_case(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// Root for `seq`, as an abbreviation when it is all upper case.
fn capitalized_root(seq: &str) -> Arc<Root> {
    if !alphabet::is_all_upper_case(seq) {
        let attrs = phonetic::calculate(seq, LexemeAttributes::EMPTY);
        return proper_noun_root(seq, SecondaryPos::ProperNoun, attrs);
    }
    let ends_with_vowel = sequence::last_char(seq).is_some_and(alphabet::is_vowel);
    let attrs = if ends_with_vowel {
        phonetic::calculate(seq, LexemeAttributes::EMPTY)
    } else {
        phonetic::calculate(&format!("{seq}E"), LexemeAttributes::EMPTY)
    };
    proper_noun_root(seq, SecondaryPos::Abbreviation, attrs)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounFromApostropheRootFinder;

impl RootFinder for ProperNounFromApostropheRootFinder {
    fn name(&self) -> &'static str {
        "proper noun with apostrophe"
    }

    fn handles(&self, partial: &str, _whole: &str) -> bool {
        sequence::char_len(partial) >= 2
            && sequence::last_char(partial) == Some(APOSTROPHE)
            && starts_upper_case(partial)
    }

    fn find(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        let candidate = sequence::drop_last(partial, 1);
        if candidate.trim().is_empty() {
            return Vec::new();
        }
        vec![capitalized_root(candidate)]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounWithoutApostropheRootFinder;

impl RootFinder for ProperNounWithoutApostropheRootFinder {
    fn name(&self) -> &'static str {
        "proper noun without apostrophe"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        !partial.trim().is_empty() && starts_upper_case(whole) && !whole.contains(APOSTROPHE)
    }

    fn find(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        if partial == whole {
            return vec![capitalized_root(partial)];
        }
        let attrs = phonetic::calculate(partial, LexemeAttributes::EMPTY);
        vec![proper_noun_root(partial, SecondaryPos::ProperNoun, attrs)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trnltk_core::PhoneticAttribute;

    #[test]
    fn apostrophe_marks_the_end_of_the_name() {
        let finder = ProperNounFromApostropheRootFinder;
        assert!(finder.handles("Ankara'", "Ankara'ya"));
        assert!(!finder.handles("Ankara", "Ankara'ya"));
        assert!(!finder.handles("ankara'", "ankara'ya"));
        assert!(!finder.handles("'", "'a"));

        let roots = finder.find("Ankara'", "Ankara'ya");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].sequence, "Ankara");
        assert_eq!(roots[0].lexeme.secondary_pos, Some(SecondaryPos::ProperNoun));
    }

    #[test]
    fn abbreviations_read_a_trailing_e() {
        let roots = ProperNounFromApostropheRootFinder.find("THY'", "THY'ye");
        let root = &roots[0];
        assert_eq!(root.lexeme.secondary_pos, Some(SecondaryPos::Abbreviation));
        assert!(root.phonetic_attributes.contains(PhoneticAttribute::LastLetterVowel));
        assert!(root.phonetic_attributes.contains(PhoneticAttribute::LastVowelFrontal));

        let roots = ProperNounFromApostropheRootFinder.find("NATO'", "NATO'ya");
        assert!(roots[0].phonetic_attributes.contains(PhoneticAttribute::LastVowelBack));
    }

    #[test]
    fn capitalized_words_without_apostrophe() {
        let finder = ProperNounWithoutApostropheRootFinder;
        assert!(finder.handles("Ali", "Ali"));
        assert!(!finder.handles("Ali", "Ali'ye"));
        assert!(!finder.handles("ali", "ali"));

        let roots = finder.find("Ank", "Ankara");
        assert_eq!(roots[0].lexeme.secondary_pos, Some(SecondaryPos::ProperNoun));
        let roots = finder.find("PTT", "PTT");
        assert_eq!(roots[0].lexeme.secondary_pos, Some(SecondaryPos::Abbreviation));
        let roots = finder.find("PT", "PTT");
        assert_eq!(roots[0].lexeme.secondary_pos, Some(SecondaryPos::ProperNoun));
    }
}
