// Suffix form sequences
//
// A suffix form is written in a small notation: `A` and `I` are harmonizing
// vowels, a leading `+` makes the next letter optional, `!` before `I`
// disables rounding and before a stop consonant blocks later voicing, and a
// leading b/c/d/g/ğ is devoiced after a voiceless letter (`dA` -> `ta`).
// The notation is compiled once into a list of rules.

use std::fmt;

use trnltk_core::alphabet;
use trnltk_core::{PhoneticAttribute, PhoneticAttributes};

use crate::graph::GraphError;

const PLUS: char = '+';
const EXCLAMATION: char = '!';

/// Kind of a single compiled rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    NonVowelLetter,
    VowelWithoutHarmony,
    VowelAWithHarmony,
    VowelIWithHarmony,
    VowelIWithHarmonyNoRounding,
    OptionalVowel,
    OptionalConsonant,
    OptionalVowelAWithHarmony,
    OptionalVowelIWithHarmony,
    DevoicableLetter,
}

impl RuleKind {
    fn is_optional(self) -> bool {
        matches!(
            self,
            Self::OptionalVowel
                | Self::OptionalConsonant
                | Self::OptionalVowelAWithHarmony
                | Self::OptionalVowelIWithHarmony
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormRule {
    pub kind: RuleKind,
    /// Letter for literal, optional and devoicable rules.
    pub letter: Option<char>,
}

impl FormRule {
    fn new(kind: RuleKind, letter: Option<char>) -> Self {
        Self { kind, letter }
    }

    /// The character this rule contributes after a surface with `attrs`.
    pub fn apply(&self, attrs: PhoneticAttributes) -> Option<char> {
        use PhoneticAttribute::*;

        let back = attrs.contains(LastVowelBack) || !attrs.contains(LastVowelFrontal);
        let unrounded = attrs.contains(LastVowelUnrounded) || !attrs.contains(LastVowelRounded);
        let after_vowel = attrs.contains(LastLetterVowel) || !attrs.contains(LastLetterConsonant);
        let after_consonant =
            attrs.contains(LastLetterConsonant) || !attrs.contains(LastLetterVowel);

        let harmony_a = if back { 'a' } else { 'e' };
        let harmony_i = match (back, unrounded) {
            (true, true) => 'ı',
            (true, false) => 'u',
            (false, true) => 'i',
            (false, false) => 'ü',
        };

        match self.kind {
            RuleKind::NonVowelLetter | RuleKind::VowelWithoutHarmony => self.letter,
            RuleKind::VowelAWithHarmony => Some(harmony_a),
            RuleKind::VowelIWithHarmony => Some(harmony_i),
            RuleKind::VowelIWithHarmonyNoRounding => Some(if back { 'ı' } else { 'i' }),
            RuleKind::OptionalVowel => {
                if after_vowel { None } else { self.letter }
            }
            RuleKind::OptionalConsonant => {
                if after_consonant { None } else { self.letter }
            }
            RuleKind::OptionalVowelAWithHarmony => (!after_vowel).then_some(harmony_a),
            RuleKind::OptionalVowelIWithHarmony => (!after_vowel).then_some(harmony_i),
            RuleKind::DevoicableLetter => {
                let letter = self.letter?;
                if attrs.contains(LastLetterVoiceless) {
                    alphabet::devoice(letter).or(Some(letter))
                } else {
                    Some(letter)
                }
            }
        }
    }
}

/// A compiled suffix form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SuffixFormSequence {
    text: String,
    rules: Vec<FormRule>,
    first_letter_vowel: bool,
}

impl SuffixFormSequence {
    /// Compile `text`. Returns [`GraphError::MalformedForm`] for a `+` that
    /// is not the first character, an upper-case letter other than `A`/`I`,
    /// or a `!` that is not followed by `I` or a stop consonant.
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        let malformed = |reason: &str| GraphError::MalformedForm {
            form: text.to_string(),
            reason: reason.to_string(),
        };

        if text.chars().skip(1).any(|c| c == PLUS) {
            return Err(malformed("'+' is only allowed as the first character"));
        }

        let chars: Vec<char> = text.chars().collect();
        let mut rules: Vec<FormRule> = Vec::with_capacity(chars.len());

        for (i, &c) in chars.iter().enumerate() {
            if c == PLUS || c == EXCLAMATION {
                continue;
            }
            let previous = if i > 0 { Some(chars[i - 1]) } else { None };
            let after_plus = previous == Some(PLUS);
            let after_exclamation = previous == Some(EXCLAMATION);
            let letter = alphabet::letter(c);

            let all_optional = rules.iter().all(|r| r.kind.is_optional());
            if all_optional && alphabet::is_devoicable(c) {
                rules.push(FormRule::new(RuleKind::DevoicableLetter, Some(alphabet::to_lower(c))));
                continue;
            }

            if c.is_uppercase() && c != 'A' && c != 'I' {
                return Err(malformed("only 'A' and 'I' may be upper case"));
            }
            if after_exclamation && c != 'I' && !letter.is_stop_consonant() {
                return Err(malformed("'!' must precede 'I' or a stop consonant"));
            }

            let rule = match c {
                'A' if after_plus => FormRule::new(RuleKind::OptionalVowelAWithHarmony, None),
                'A' => FormRule::new(RuleKind::VowelAWithHarmony, None),
                'I' if after_exclamation => {
                    FormRule::new(RuleKind::VowelIWithHarmonyNoRounding, None)
                }
                'I' if after_plus => FormRule::new(RuleKind::OptionalVowelIWithHarmony, None),
                'I' => FormRule::new(RuleKind::VowelIWithHarmony, None),
                _ if after_plus && letter.is_vowel() => FormRule::new(RuleKind::OptionalVowel, Some(c)),
                _ if after_plus => FormRule::new(RuleKind::OptionalConsonant, Some(c)),
                _ if letter.is_vowel() => FormRule::new(RuleKind::VowelWithoutHarmony, Some(c)),
                _ => FormRule::new(RuleKind::NonVowelLetter, Some(c)),
            };
            rules.push(rule);
        }

        Ok(Self {
            text: text.to_string(),
            first_letter_vowel: first_letter_vowel(&chars),
            rules,
        })
    }

    /// The empty form used by free and zero transitions.
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            rules: Vec::new(),
            first_letter_vowel: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn rules(&self) -> &[FormRule] {
        &self.rules
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the form starts with a vowel, looking past a leading `+`.
    pub fn is_first_letter_vowel(&self) -> bool {
        self.first_letter_vowel
    }

    /// Whether the last letter is one of p, ç, t, k, g not marked with `!`.
    pub fn last_letter_can_be_voiced(&self) -> bool {
        let chars: Vec<char> = self.text.chars().collect();
        if self.is_blank() || chars.len() == 1 {
            return false;
        }
        let before_last = chars[chars.len() - 2];
        let last = chars[chars.len() - 1];
        before_last != EXCLAMATION && alphabet::is_voicable(last)
    }

    /// Realize the form after a surface with `attrs`.
    pub fn apply(&self, attrs: PhoneticAttributes) -> String {
        let applied: String = self.rules.iter().filter_map(|r| r.apply(attrs)).collect();
        applied.trim().to_string()
    }

    /// A form starting with a mandatory vowel cannot follow a vowel.
    pub fn is_applicable(&self, attrs: PhoneticAttributes) -> bool {
        let Some(first) = self.rules.first() else {
            return true;
        };
        if !attrs.contains(PhoneticAttribute::LastLetterVowel) {
            return true;
        }
        !matches!(
            first.kind,
            RuleKind::VowelWithoutHarmony
                | RuleKind::VowelAWithHarmony
                | RuleKind::VowelIWithHarmony
                | RuleKind::VowelIWithHarmonyNoRounding
        )
    }
}

fn first_letter_vowel(chars: &[char]) -> bool {
    let is_vowel = |i: usize| chars.get(i).is_some_and(|&c| alphabet::is_vowel(c));
    if chars.iter().all(|c| c.is_whitespace()) {
        return false;
    }
    if is_vowel(0) {
        return true;
    }
    if chars[0] == PLUS {
        if chars.len() >= 3 {
            return is_vowel(1) || is_vowel(2);
        }
        return is_vowel(1);
    }
    false
}

impl fmt::Debug for SuffixFormSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuffixFormSequence({:?})", self.text)
    }
}

impl fmt::Display for SuffixFormSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trnltk_core::LexemeAttributes;
    use trnltk_core::phonetic::calculate;

    fn attrs(s: &str) -> PhoneticAttributes {
        calculate(s, LexemeAttributes::EMPTY)
    }

    fn form(s: &str) -> SuffixFormSequence {
        SuffixFormSequence::parse(s).unwrap()
    }

    #[test]
    fn harmonized_vowels() {
        assert_eq!(form("lAr").apply(attrs("kitap")), "lar");
        assert_eq!(form("lAr").apply(attrs("ev")), "ler");
        assert_eq!(form("+yI").apply(attrs("göz")), "ü");
        assert_eq!(form("+yI").apply(attrs("kapı")), "yı");
        assert_eq!(form("+yI").apply(attrs("okul")), "u");
        assert_eq!(form("!Iyor").apply(attrs("gör")), "iyor");
    }

    #[test]
    fn optional_letters() {
        assert_eq!(form("+yA").apply(attrs("kitap")), "a");
        assert_eq!(form("+yA").apply(attrs("araba")), "ya");
        assert_eq!(form("+Im").apply(attrs("ev")), "im");
        assert_eq!(form("+Im").apply(attrs("araba")), "m");
    }

    #[test]
    fn leading_devoicable_letter() {
        assert_eq!(form("dA").apply(attrs("kitap")), "ta");
        assert_eq!(form("dA").apply(attrs("ev")), "de");
        assert_eq!(form("+cI").apply(attrs("süt")), "çü");
        assert_eq!(form("dAn").rules()[0].kind, RuleKind::DevoicableLetter);
    }

    #[test]
    fn vowel_initial_form_is_not_applicable_after_vowel() {
        assert!(!form("A").is_applicable(attrs("araba")));
        assert!(form("+yA").is_applicable(attrs("araba")));
        assert!(form("A").is_applicable(attrs("kitap")));
        assert!(SuffixFormSequence::blank().is_applicable(attrs("araba")));
    }

    #[test]
    fn first_letter_vowel_looks_past_plus() {
        assert!(form("Im").is_first_letter_vowel());
        assert!(form("+Im").is_first_letter_vowel());
        assert!(form("+yA").is_first_letter_vowel());
        assert!(!form("lAr").is_first_letter_vowel());
        assert!(!SuffixFormSequence::blank().is_first_letter_vowel());
    }

    #[test]
    fn last_letter_voicing() {
        assert!(form("cIk").last_letter_can_be_voiced());
        assert!(!form("dI!k").last_letter_can_be_voiced());
        assert!(!form("lAr").last_letter_can_be_voiced());
        assert!(!form("k").last_letter_can_be_voiced());
    }

    #[test]
    fn malformed_forms_are_rejected() {
        assert!(matches!(
            SuffixFormSequence::parse("l+Ar"),
            Err(GraphError::MalformedForm { .. })
        ));
        assert!(SuffixFormSequence::parse("lEr").is_err());
        assert!(SuffixFormSequence::parse("!A").is_err());
        assert!(SuffixFormSequence::parse("!mA").is_err());
    }
}
