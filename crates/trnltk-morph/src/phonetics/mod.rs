// Phonetics engine
//
// Applies compiled suffix forms to surfaces: decides whether a form may
// follow a surface, realizes it, voices the surface's last letter when a
// vowel-initial form follows a voiceless stop, and checks the phonetic
// expectations a root or a voiced edge places on the next form.

mod form;

pub use form::{FormRule, RuleKind, SuffixFormSequence};

use trnltk_core::alphabet;
use trnltk_core::phonetic::{self, PhoneticAttributes, PhoneticExpectation, PhoneticExpectations};
use trnltk_core::sequence;
use trnltk_core::{LexemeAttribute, LexemeAttributes, PhoneticAttribute};

/// One concrete realization of a form after a given attribute set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Realization {
    /// The letters that appear in the surface.
    pub applied: String,
    /// The letters the form produces before voicing by the next suffix.
    pub fitting: String,
    /// Attributes of the surface after the realization.
    pub target_attributes: PhoneticAttributes,
    /// Constraint on the next form, set for voiced realizations.
    pub expectations: PhoneticExpectations,
}

/// Whether `form` may follow a surface with `attrs`. Blank forms always
/// may; nothing may follow a surface with unknown attributes.
pub fn is_suffix_form_applicable(attrs: PhoneticAttributes, form: &SuffixFormSequence) -> bool {
    if form.is_blank() {
        return true;
    }
    if attrs.is_empty() {
        return false;
    }
    form.is_applicable(attrs)
}

/// All realizations of `form` after a surface with `attrs`: the plain one
/// and, when the form's last letter can be voiced, the voiced one that
/// only a vowel-initial form may follow.
pub fn realizations(form: &SuffixFormSequence, attrs: PhoneticAttributes) -> Vec<Realization> {
    let applied = form.apply(attrs);
    let target = if applied.trim().is_empty() {
        attrs
    } else {
        phonetic::calculate_new(attrs, &applied)
    };

    let mut out = vec![Realization {
        applied: applied.clone(),
        fitting: applied.clone(),
        target_attributes: target,
        expectations: PhoneticExpectations::EMPTY,
    }];

    if !applied.trim().is_empty() && form.last_letter_can_be_voiced() {
        let voiced = sequence::voice_last_letter(&applied);
        out.push(Realization {
            target_attributes: phonetic::calculate_new(attrs, &voiced),
            applied: voiced,
            fitting: applied,
            expectations: PhoneticExpectations::only(PhoneticExpectation::VowelStart),
        });
    }
    out
}

/// Apply `form` to `surface`. Returns the (possibly voiced) surface and the
/// realized form, or `None` for a blank surface.
pub fn apply(
    surface: &str,
    attrs: PhoneticAttributes,
    form: &SuffixFormSequence,
    lexeme_attrs: LexemeAttributes,
) -> Option<(String, String)> {
    if surface.trim().is_empty() {
        return None;
    }
    if form.is_blank() {
        return Some((surface.to_string(), String::new()));
    }
    let voice = !lexeme_attrs.contains(LexemeAttribute::NoVoicing)
        && attrs.contains(PhoneticAttribute::LastLetterVoicelessStop)
        && form.is_first_letter_vowel();
    let new_surface = if voice {
        sequence::voice_last_letter(surface)
    } else {
        surface.to_string()
    };
    Some((new_surface, form.apply(attrs)))
}

/// Whether `form` satisfies every expectation. A blank form satisfies
/// only the empty set.
pub fn expectations_satisfied(expectations: PhoneticExpectations, form: &SuffixFormSequence) -> bool {
    if expectations.is_empty() {
        return true;
    }
    let text = form.as_str().trim();
    if text.is_empty() {
        return false;
    }
    expectations.iter().all(|e| expectation_satisfied(e, text))
}

fn expectation_satisfied(expectation: PhoneticExpectation, form: &str) -> bool {
    let Some(first) = form.chars().next() else {
        return false;
    };
    if first == '+' {
        return expectation_satisfied(expectation, sequence::suffix_from(form, 1))
            || expectation_satisfied(expectation, sequence::suffix_from(form, 2));
    }
    match expectation {
        PhoneticExpectation::VowelStart => alphabet::is_vowel(first),
        PhoneticExpectation::ConsonantStart => !alphabet::is_vowel(first),
    }
}

/// Whether `input` starts with `applied`. With `voicing_allowed`, the last
/// letter of `applied` may appear voiced in the input (kitap / kitab).
pub fn application_matches(input: &str, applied: &str, voicing_allowed: bool) -> bool {
    let applied_len = sequence::char_len(applied);
    if applied.trim().is_empty() || applied_len > sequence::char_len(input) {
        return false;
    }
    if input.starts_with(applied) {
        return true;
    }
    if !voicing_allowed {
        return false;
    }
    let head = sequence::drop_last(applied, 1);
    if !input.starts_with(head) {
        return false;
    }
    let (Some(applied_last), Some(input_char)) = (
        sequence::last_char(applied),
        sequence::char_at(input, applied_len - 1),
    ) else {
        return false;
    };
    alphabet::voice(applied_last).is_some_and(|v| alphabet::to_lower(input_char) == v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trnltk_core::phonetic::calculate;

    fn attrs(s: &str) -> PhoneticAttributes {
        calculate(s, LexemeAttributes::EMPTY)
    }

    fn form(s: &str) -> SuffixFormSequence {
        SuffixFormSequence::parse(s).unwrap()
    }

    #[test]
    fn applicability() {
        assert!(is_suffix_form_applicable(PhoneticAttributes::EMPTY, &SuffixFormSequence::blank()));
        assert!(!is_suffix_form_applicable(PhoneticAttributes::EMPTY, &form("lAr")));
        assert!(!is_suffix_form_applicable(attrs("elma"), &form("Im")));
        assert!(is_suffix_form_applicable(attrs("elma"), &form("+Im")));
    }

    #[test]
    fn apply_voices_stop_before_vowel_form() {
        let (surface, applied) = apply("kitap", attrs("kitap"), &form("+yA"), LexemeAttributes::EMPTY).unwrap();
        assert_eq!(surface, "kitab");
        assert_eq!(applied, "a");

        let no_voicing = LexemeAttributes::of(&[LexemeAttribute::NoVoicing]);
        let (surface, _) = apply("top", attrs("top"), &form("+yA"), no_voicing).unwrap();
        assert_eq!(surface, "top");

        let (surface, applied) = apply("kitap", attrs("kitap"), &form("lAr"), LexemeAttributes::EMPTY).unwrap();
        assert_eq!(surface, "kitap");
        assert_eq!(applied, "lar");
        assert!(apply("", attrs("a"), &form("lAr"), LexemeAttributes::EMPTY).is_none());
    }

    #[test]
    fn realizations_include_voiced_variant() {
        let reals = realizations(&form("cIk"), attrs("ev"));
        assert_eq!(reals.len(), 2);
        assert_eq!(reals[0].applied, "cik");
        assert_eq!(reals[1].applied, "ciğ");
        assert_eq!(reals[1].fitting, "cik");
        assert!(reals[1].expectations.contains(PhoneticExpectation::VowelStart));
        assert!(reals[1].target_attributes.contains(PhoneticAttribute::LastLetterNotVoiceless));

        let blank = realizations(&SuffixFormSequence::blank(), attrs("ev"));
        assert_eq!(blank.len(), 1);
        assert_eq!(blank[0].target_attributes, attrs("ev"));
    }

    #[test]
    fn expectations() {
        let vowel = PhoneticExpectations::only(PhoneticExpectation::VowelStart);
        let consonant = PhoneticExpectations::only(PhoneticExpectation::ConsonantStart);
        assert!(expectations_satisfied(PhoneticExpectations::EMPTY, &SuffixFormSequence::blank()));
        assert!(!expectations_satisfied(vowel, &SuffixFormSequence::blank()));
        assert!(expectations_satisfied(vowel, &form("Im")));
        assert!(expectations_satisfied(vowel, &form("+yA")));
        assert!(!expectations_satisfied(vowel, &form("lAr")));
        assert!(expectations_satisfied(consonant, &form("lAr")));
        assert!(expectations_satisfied(consonant, &form("+yA")));
    }

    #[test]
    fn application_matching() {
        assert!(!application_matches("kitaba", "kitap", false));
        assert!(application_matches("kitaba", "kitap", true));
        assert!(application_matches("kitaplar", "kitap", false));
        assert!(!application_matches("kit", "kitap", true));
        assert!(!application_matches("kitap", "", true));
        assert!(!application_matches("kitaba", "kitat", true));
    }
}
