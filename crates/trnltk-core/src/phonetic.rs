// Phonetic attributes of letter sequences
//
// A phonetic attribute describes the edge of a sequence that suffixes attach
// to: the last letter, the last vowel and the first letter. Sets of them are
// stored as a 12-bit mask. Only a few dozen of the 4096 possible masks
// describe a real sequence; the validity table below is computed once.

use std::fmt;

use once_cell::sync::Lazy;

use crate::alphabet;
use crate::lexicon::{LexemeAttribute, LexemeAttributes};

/// One phonetic property of a letter sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PhoneticAttribute {
    LastLetterVowel = 0,
    LastLetterConsonant = 1,
    LastVowelFrontal = 2,
    LastVowelBack = 3,
    LastVowelRounded = 4,
    LastVowelUnrounded = 5,
    LastLetterVoiceless = 6,
    LastLetterNotVoiceless = 7,
    LastLetterVoicelessStop = 8,
    FirstLetterVowel = 9,
    FirstLetterConsonant = 10,
    HasNoVowel = 11,
}

impl PhoneticAttribute {
    pub const ALL: [PhoneticAttribute; 12] = [
        Self::LastLetterVowel,
        Self::LastLetterConsonant,
        Self::LastVowelFrontal,
        Self::LastVowelBack,
        Self::LastVowelRounded,
        Self::LastVowelUnrounded,
        Self::LastLetterVoiceless,
        Self::LastLetterNotVoiceless,
        Self::LastLetterVoicelessStop,
        Self::FirstLetterVowel,
        Self::FirstLetterConsonant,
        Self::HasNoVowel,
    ];

    /// Abbreviation used in dumps and test fixtures.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::LastLetterVowel => "LLV",
            Self::LastLetterConsonant => "LLC",
            Self::LastVowelFrontal => "LVF",
            Self::LastVowelBack => "LVB",
            Self::LastVowelRounded => "LVR",
            Self::LastVowelUnrounded => "LVuR",
            Self::LastLetterVoiceless => "LLVless",
            Self::LastLetterNotVoiceless => "LLNotVless",
            Self::LastLetterVoicelessStop => "LLStop",
            Self::FirstLetterVowel => "FLV",
            Self::FirstLetterConsonant => "FLC",
            Self::HasNoVowel => "NoVow",
        }
    }

    const fn bit(self) -> u16 {
        1 << self as u8
    }
}

// ---------------------------------------------------------------------------
// Attribute sets
// ---------------------------------------------------------------------------

/// A set of [`PhoneticAttribute`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct PhoneticAttributes(u16);

const ALL_BITS: u16 = (1 << 12) - 1;

impl PhoneticAttributes {
    pub const EMPTY: Self = Self(0);

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn of(attrs: &[PhoneticAttribute]) -> Self {
        attrs.iter().fold(Self::EMPTY, |set, &a| set.with(a))
    }

    pub fn contains(self, attr: PhoneticAttribute) -> bool {
        self.0 & attr.bit() != 0
    }

    pub fn insert(&mut self, attr: PhoneticAttribute) {
        self.0 |= attr.bit();
    }

    pub fn remove(&mut self, attr: PhoneticAttribute) {
        self.0 &= !attr.bit();
    }

    #[must_use]
    pub fn with(mut self, attr: PhoneticAttribute) -> Self {
        self.insert(attr);
        self
    }

    #[must_use]
    pub fn without(mut self, attr: PhoneticAttribute) -> Self {
        self.remove(attr);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = PhoneticAttribute> {
        PhoneticAttribute::ALL
            .into_iter()
            .filter(move |a| self.contains(*a))
    }

    /// Table lookup; see [`valid_sets`].
    pub fn is_valid(self) -> bool {
        VALIDITY[self.0 as usize]
    }
}

impl fmt::Debug for PhoneticAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|a| a.short_name())).finish()
    }
}

impl FromIterator<PhoneticAttribute> for PhoneticAttributes {
    fn from_iter<T: IntoIterator<Item = PhoneticAttribute>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, |set, a| set.with(a))
    }
}

// ---------------------------------------------------------------------------
// Validity table
// ---------------------------------------------------------------------------

static VALIDITY: Lazy<Vec<bool>> = Lazy::new(|| {
    (0..=ALL_BITS)
        .map(|bits| check_validity(PhoneticAttributes(bits)))
        .collect()
});

static VALID_SETS: Lazy<Vec<PhoneticAttributes>> = Lazy::new(|| {
    (0..=ALL_BITS)
        .map(PhoneticAttributes)
        .filter(|set| set.is_valid())
        .collect()
});

/// Every valid attribute set, in ascending mask order.
pub fn valid_sets() -> &'static [PhoneticAttributes] {
    &VALID_SETS
}

fn check_validity(set: PhoneticAttributes) -> bool {
    use PhoneticAttribute::*;

    let has = |a| set.contains(a);
    let any = |a, b| set.contains(a) || set.contains(b);
    let has_vowel =
        !has(HasNoVowel) && any(LastVowelBack, LastVowelFrontal) && any(LastVowelRounded, LastVowelUnrounded);
    let has_no_vowel = has(HasNoVowel) && !has_vowel;

    if set.is_empty() {
        return false;
    }
    if !(has_vowel || has_no_vowel)
        || !any(FirstLetterConsonant, FirstLetterVowel)
        || !any(LastLetterConsonant, LastLetterVowel)
    {
        return false;
    }

    set.iter().all(|attr| match attr {
        LastLetterVowel => {
            !has(LastLetterConsonant)
                && !has(HasNoVowel)
                && !has(LastLetterVoiceless)
                && !has(LastLetterVoicelessStop)
                && has(LastLetterNotVoiceless)
                && any(LastVowelFrontal, LastVowelBack)
                && any(LastVowelRounded, LastVowelUnrounded)
        }
        LastLetterConsonant => {
            !has(LastLetterVowel)
                && any(LastLetterVoiceless, LastLetterNotVoiceless)
                && (has_no_vowel || has_vowel)
        }
        LastVowelFrontal | LastVowelBack => {
            let other = if attr == LastVowelFrontal { LastVowelBack } else { LastVowelFrontal };
            !has(other) && has_vowel && any(LastLetterVowel, LastLetterConsonant)
        }
        LastVowelRounded | LastVowelUnrounded => {
            let other = if attr == LastVowelRounded { LastVowelUnrounded } else { LastVowelRounded };
            !has(other) && !has(HasNoVowel) && has_vowel && any(LastLetterVowel, LastLetterConsonant)
        }
        LastLetterVoiceless => {
            !has(LastLetterVowel) && !has(LastLetterNotVoiceless) && has(LastLetterConsonant)
        }
        LastLetterNotVoiceless => {
            !has(LastLetterVoiceless)
                && !has(LastLetterVoicelessStop)
                && any(LastLetterConsonant, LastLetterVowel)
        }
        LastLetterVoicelessStop => {
            !has(LastLetterVowel)
                && !has(LastLetterNotVoiceless)
                && has(LastLetterConsonant)
                && has(LastLetterVoiceless)
        }
        FirstLetterVowel => {
            !has(FirstLetterConsonant)
                && !has(HasNoVowel)
                && any(LastVowelFrontal, LastVowelBack)
                && any(LastVowelRounded, LastVowelUnrounded)
                && any(LastLetterVowel, LastLetterConsonant)
        }
        FirstLetterConsonant => !has(FirstLetterVowel) && any(LastLetterVowel, LastLetterConsonant),
        HasNoVowel => {
            has_no_vowel
                && !has(FirstLetterVowel)
                && has(FirstLetterConsonant)
                && has(LastLetterConsonant)
                && any(LastLetterVoiceless, LastLetterNotVoiceless)
        }
    })
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Attributes of a plain sequence, adjusted by the lexeme's
/// `InverseHarmony` and `EndsWithAyn` attributes. An empty sequence has no
/// attributes.
pub fn calculate(seq: &str, lexeme_attrs: LexemeAttributes) -> PhoneticAttributes {
    use PhoneticAttribute::*;

    let mut attrs = calculate_plain(seq);
    if lexeme_attrs.contains(LexemeAttribute::InverseHarmony) {
        if attrs.contains(LastVowelBack) {
            attrs.remove(LastVowelBack);
            attrs.insert(LastVowelFrontal);
        } else if attrs.contains(LastVowelFrontal) {
            attrs.remove(LastVowelFrontal);
            attrs.insert(LastVowelBack);
        }
    }
    if lexeme_attrs.contains(LexemeAttribute::EndsWithAyn) && attrs.contains(LastLetterVowel) {
        attrs.remove(LastLetterVowel);
        attrs.insert(LastLetterConsonant);
    }
    attrs
}

fn calculate_plain(seq: &str) -> PhoneticAttributes {
    use PhoneticAttribute::*;

    let (Some(first), Some(last)) = (seq.chars().next(), seq.chars().next_back()) else {
        return PhoneticAttributes::EMPTY;
    };
    let first = alphabet::letter(first);
    let last = alphabet::letter(last);
    let mut attrs = PhoneticAttributes::EMPTY;

    attrs.insert(if first.is_vowel() { FirstLetterVowel } else { FirstLetterConsonant });

    match seq.chars().rev().map(alphabet::letter).find(|l| l.is_vowel()) {
        Some(vowel) => {
            attrs.insert(if vowel.is_rounded() { LastVowelRounded } else { LastVowelUnrounded });
            attrs.insert(if vowel.is_frontal() { LastVowelFrontal } else { LastVowelBack });
        }
        None => attrs.insert(HasNoVowel),
    }

    attrs.insert(if last.is_vowel() { LastLetterVowel } else { LastLetterConsonant });

    if last.is_voiceless() {
        attrs.insert(LastLetterVoiceless);
        if last.is_stop_consonant() {
            attrs.insert(LastLetterVoicelessStop);
        }
    } else {
        attrs.insert(LastLetterNotVoiceless);
    }
    attrs
}

/// Attributes after appending one character to a sequence with `attrs`.
pub fn calculate_new_char(attrs: PhoneticAttributes, c: char) -> PhoneticAttributes {
    use PhoneticAttribute::*;

    let letter = alphabet::letter(c);
    let mut next = attrs;
    if letter.is_vowel() {
        for a in [
            LastLetterConsonant,
            LastLetterVoiceless,
            LastLetterVoicelessStop,
            HasNoVowel,
            LastVowelFrontal,
            LastVowelBack,
            LastVowelRounded,
            LastVowelUnrounded,
        ] {
            next.remove(a);
        }
        next.insert(LastLetterVowel);
        next.insert(LastLetterNotVoiceless);
        next.insert(if letter.is_frontal() { LastVowelFrontal } else { LastVowelBack });
        next.insert(if letter.is_rounded() { LastVowelRounded } else { LastVowelUnrounded });
    } else {
        for a in [
            LastLetterVowel,
            LastLetterVoiceless,
            LastLetterNotVoiceless,
            LastLetterVoicelessStop,
        ] {
            next.remove(a);
        }
        next.insert(LastLetterConsonant);
        if letter.is_voiceless() {
            next.insert(LastLetterVoiceless);
            if !letter.is_continuant() {
                next.insert(LastLetterVoicelessStop);
            }
        } else {
            next.insert(LastLetterNotVoiceless);
        }
    }
    next
}

/// Attributes after appending `appended`. A blank string changes nothing.
pub fn calculate_new(attrs: PhoneticAttributes, appended: &str) -> PhoneticAttributes {
    if appended.trim().is_empty() {
        return attrs;
    }
    appended.chars().fold(attrs, calculate_new_char)
}

/// Attributes of `letters`, continuing from the trailing state of a
/// preceding sequence when one is given. A vowelless span keeps the
/// preceding sequence's vowel attributes.
pub fn attributes_of(letters: &str, preceding: Option<PhoneticAttributes>) -> PhoneticAttributes {
    match preceding {
        Some(prev) if !prev.is_empty() => calculate_new(prev, letters),
        _ => calculate(letters, LexemeAttributes::EMPTY),
    }
}

// ---------------------------------------------------------------------------
// Expectations
// ---------------------------------------------------------------------------

/// A constraint on the first letter of the next applied suffix form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PhoneticExpectation {
    VowelStart = 0,
    ConsonantStart = 1,
}

/// A set of [`PhoneticExpectation`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PhoneticExpectations(u8);

impl PhoneticExpectations {
    pub const EMPTY: Self = Self(0);

    pub fn only(exp: PhoneticExpectation) -> Self {
        Self(1 << exp as u8)
    }

    pub fn contains(self, exp: PhoneticExpectation) -> bool {
        self.0 & (1 << exp as u8) != 0
    }

    pub fn insert(&mut self, exp: PhoneticExpectation) {
        self.0 |= 1 << exp as u8;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = PhoneticExpectation> {
        [PhoneticExpectation::VowelStart, PhoneticExpectation::ConsonantStart]
            .into_iter()
            .filter(move |e| self.contains(*e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PhoneticAttribute::*;

    #[test]
    fn kitap_attributes() {
        let attrs = calculate("kitap", LexemeAttributes::EMPTY);
        assert_eq!(
            attrs,
            PhoneticAttributes::of(&[
                FirstLetterConsonant,
                LastVowelBack,
                LastVowelUnrounded,
                LastLetterConsonant,
                LastLetterVoiceless,
                LastLetterVoicelessStop,
            ])
        );
        assert!(attrs.is_valid());
    }

    #[test]
    fn vowel_final_sequence() {
        let attrs = calculate("elma", LexemeAttributes::EMPTY);
        assert!(attrs.contains(FirstLetterVowel));
        assert!(attrs.contains(LastLetterVowel));
        assert!(attrs.contains(LastLetterNotVoiceless));
        assert!(attrs.contains(LastVowelBack));
        assert!(attrs.is_valid());
    }

    #[test]
    fn vowelless_sequence() {
        let attrs = calculate("tbmm", LexemeAttributes::EMPTY);
        assert!(attrs.contains(HasNoVowel));
        assert!(attrs.is_valid());
    }

    #[test]
    fn inverse_harmony_swaps_frontness() {
        let lexeme = LexemeAttributes::of(&[LexemeAttribute::InverseHarmony]);
        let attrs = calculate("saat", lexeme);
        assert!(attrs.contains(LastVowelFrontal));
        assert!(!attrs.contains(LastVowelBack));
    }

    #[test]
    fn ends_with_ayn_acts_as_consonant() {
        let lexeme = LexemeAttributes::of(&[LexemeAttribute::EndsWithAyn]);
        let attrs = calculate("cami", lexeme);
        assert!(attrs.contains(LastLetterConsonant));
        assert!(!attrs.contains(LastLetterVowel));
    }

    #[test]
    fn incremental_matches_full_calculation() {
        for (stem, tail) in [("kitap", "lar"), ("ev", "e"), ("göz", "ü"), ("tbmm", "ye")] {
            let incremental = calculate_new(calculate(stem, LexemeAttributes::EMPTY), tail);
            let full = calculate(&format!("{stem}{tail}"), LexemeAttributes::EMPTY);
            assert_eq!(incremental, full, "{stem}+{tail}");
        }
    }

    #[test]
    fn blank_append_is_identity() {
        let attrs = calculate("ev", LexemeAttributes::EMPTY);
        assert_eq!(calculate_new(attrs, ""), attrs);
        assert_eq!(calculate_new(attrs, " "), attrs);
    }

    #[test]
    fn attributes_of_continues_preceding_state() {
        let prev = calculate("kitap", LexemeAttributes::EMPTY);
        let attrs = attributes_of("t", Some(prev));
        assert!(attrs.contains(LastVowelBack));
        assert!(attrs.contains(FirstLetterConsonant));
        assert_eq!(attributes_of("ev", None), calculate("ev", LexemeAttributes::EMPTY));
    }

    #[test]
    fn valid_table_is_consistent() {
        let sets = valid_sets();
        assert!(!sets.is_empty());
        for set in sets {
            assert!(!(set.contains(LastLetterVowel) && set.contains(LastLetterConsonant)));
            assert!(!(set.contains(LastVowelFrontal) && set.contains(LastVowelBack)));
            assert!(!(set.contains(LastVowelRounded) && set.contains(LastVowelUnrounded)));
            assert!(!(set.contains(FirstLetterVowel) && set.contains(FirstLetterConsonant)));
            assert!(!(set.contains(LastLetterVoiceless) && set.contains(LastLetterNotVoiceless)));
            assert!(!(set.contains(LastLetterVowel) && set.contains(LastLetterVoiceless)));
            if set.contains(HasNoVowel) {
                assert!(!set.contains(LastVowelFrontal) && !set.contains(LastVowelBack));
            }
        }
    }

    #[test]
    fn every_real_word_is_valid() {
        for word in ["a", "ev", "kitap", "okul", "göz", "süt", "tbmm", "ağaç", "ü", "kş"] {
            assert!(calculate(word, LexemeAttributes::EMPTY).is_valid(), "{word}");
        }
    }

    #[test]
    fn empty_and_contradictory_sets_are_invalid() {
        assert!(!PhoneticAttributes::EMPTY.is_valid());
        let attrs = calculate("ev", LexemeAttributes::EMPTY).with(LastLetterVowel);
        assert!(!attrs.is_valid());
    }

    #[test]
    fn expectations_set() {
        let mut exps = PhoneticExpectations::EMPTY;
        assert!(exps.is_empty());
        exps.insert(PhoneticExpectation::VowelStart);
        assert!(exps.contains(PhoneticExpectation::VowelStart));
        assert!(!exps.contains(PhoneticExpectation::ConsonantStart));
        assert_eq!(exps.iter().count(), 1);
    }
}
