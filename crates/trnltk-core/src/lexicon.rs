// Lexicon model: parts of speech, lexeme attributes, lexemes and roots
//
// A lexeme is a dictionary entry. A root is one realized base form of a
// lexeme (kitap / kitab, ben / ban) together with the phonetic attributes and
// expectations that the suffixes attached to it must respect. Roots are
// shared through `Arc` between the dictionary, predefined paths and every
// analysis that starts from them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::CoreError;
use crate::phonetic::{PhoneticAttributes, PhoneticExpectations};

// ---------------------------------------------------------------------------
// Parts of speech
// ---------------------------------------------------------------------------

/// Primary part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimaryPos {
    Noun,
    Adjective,
    Adverb,
    Conjunction,
    Interjection,
    Verb,
    Pronoun,
    Numeral,
    Determiner,
    PostPositive,
    Question,
    Duplicator,
    Punctuation,
    Unknown,
}

impl PrimaryPos {
    pub const ALL: [PrimaryPos; 14] = [
        Self::Noun,
        Self::Adjective,
        Self::Adverb,
        Self::Conjunction,
        Self::Interjection,
        Self::Verb,
        Self::Pronoun,
        Self::Numeral,
        Self::Determiner,
        Self::PostPositive,
        Self::Question,
        Self::Duplicator,
        Self::Punctuation,
        Self::Unknown,
    ];

    /// Tag used in dictionaries and formatted analyses.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Noun => "Noun",
            Self::Adjective => "Adj",
            Self::Adverb => "Adv",
            Self::Conjunction => "Conj",
            Self::Interjection => "Interj",
            Self::Verb => "Verb",
            Self::Pronoun => "Pron",
            Self::Numeral => "Num",
            Self::Determiner => "Det",
            Self::PostPositive => "Postp",
            Self::Question => "Ques",
            Self::Duplicator => "Dup",
            Self::Punctuation => "Punc",
            Self::Unknown => "Unk",
        }
    }
}

impl FromStr for PrimaryPos {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.short_name() == s)
            .ok_or_else(|| CoreError::UnknownPrimaryPos(s.to_string()))
    }
}

impl fmt::Display for PrimaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Secondary part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SecondaryPos {
    DemonstrativePronoun,
    Time,
    QuantitivePronoun,
    QuestionPronoun,
    ProperNoun,
    PersonalPronoun,
    ReflexivePronoun,
    None,
    Unknown,
    Ordinal,
    Cardinal,
    Percentage,
    Ratio,
    Range,
    Real,
    Distribution,
    Clock,
    Date,
    Abbreviation,
    DigitsCardinal,
    DigitsOrdinal,
    Duplicator,
}

impl SecondaryPos {
    pub const ALL: [SecondaryPos; 22] = [
        Self::DemonstrativePronoun,
        Self::Time,
        Self::QuantitivePronoun,
        Self::QuestionPronoun,
        Self::ProperNoun,
        Self::PersonalPronoun,
        Self::ReflexivePronoun,
        Self::None,
        Self::Unknown,
        Self::Ordinal,
        Self::Cardinal,
        Self::Percentage,
        Self::Ratio,
        Self::Range,
        Self::Real,
        Self::Distribution,
        Self::Clock,
        Self::Date,
        Self::Abbreviation,
        Self::DigitsCardinal,
        Self::DigitsOrdinal,
        Self::Duplicator,
    ];

    pub fn short_name(self) -> &'static str {
        match self {
            Self::DemonstrativePronoun => "Demons",
            Self::Time => "Time",
            Self::QuantitivePronoun => "Quant",
            Self::QuestionPronoun => "Ques",
            Self::ProperNoun => "Prop",
            Self::PersonalPronoun => "Pers",
            Self::ReflexivePronoun => "Reflex",
            Self::None => "None",
            Self::Unknown => "Unk",
            Self::Ordinal => "Ord",
            Self::Cardinal => "Card",
            Self::Percentage => "Percent",
            Self::Ratio => "Ratio",
            Self::Range => "Range",
            Self::Real => "Real",
            Self::Distribution => "Dist",
            Self::Clock => "Clock",
            Self::Date => "Date",
            Self::Abbreviation => "Abbr",
            Self::DigitsCardinal => "DigitsC",
            Self::DigitsOrdinal => "DigitsO",
            Self::Duplicator => "Dup",
        }
    }
}

impl FromStr for SecondaryPos {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.short_name() == s)
            .ok_or_else(|| CoreError::UnknownSecondaryPos(s.to_string()))
    }
}

impl fmt::Display for SecondaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// ---------------------------------------------------------------------------
// Lexeme attributes
// ---------------------------------------------------------------------------

/// Morphophonological property of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LexemeAttribute {
    AoristI = 0,
    AoristA,
    ProgressiveVowelDrop,
    PassiveIl,
    PassiveIn,
    PassiveInIl,
    CausativeT,
    CausativeIr,
    CausativeIt,
    CausativeAr,
    CausativeDIr,
    NoVoicing,
    Voicing,
    VoicingOpt,
    InverseHarmony,
    Doubling,
    EndsWithAyn,
    CompoundP3sg,
    LastVowelDrop,
    Special,
    NoSuffix,
    Plural,
    RootChange,
}

impl LexemeAttribute {
    pub const ALL: [LexemeAttribute; 23] = [
        Self::AoristI,
        Self::AoristA,
        Self::ProgressiveVowelDrop,
        Self::PassiveIl,
        Self::PassiveIn,
        Self::PassiveInIl,
        Self::CausativeT,
        Self::CausativeIr,
        Self::CausativeIt,
        Self::CausativeAr,
        Self::CausativeDIr,
        Self::NoVoicing,
        Self::Voicing,
        Self::VoicingOpt,
        Self::InverseHarmony,
        Self::Doubling,
        Self::EndsWithAyn,
        Self::CompoundP3sg,
        Self::LastVowelDrop,
        Self::Special,
        Self::NoSuffix,
        Self::Plural,
        Self::RootChange,
    ];

    /// Name used in the `A:` section of dictionary lines.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::AoristI => "Aorist_I",
            Self::AoristA => "Aorist_A",
            Self::ProgressiveVowelDrop => "ProgressiveVowelDrop",
            Self::PassiveIl => "Passive_Il",
            Self::PassiveIn => "Passive_In",
            Self::PassiveInIl => "Passive_InIl",
            Self::CausativeT => "Causative_t",
            Self::CausativeIr => "Causative_Ir",
            Self::CausativeIt => "Causative_It",
            Self::CausativeAr => "Causative_Ar",
            Self::CausativeDIr => "Causative_dIr",
            Self::NoVoicing => "NoVoicing",
            Self::Voicing => "Voicing",
            Self::VoicingOpt => "VoicingOpt",
            Self::InverseHarmony => "InverseHarmony",
            Self::Doubling => "Doubling",
            Self::EndsWithAyn => "EndsWithAyn",
            Self::CompoundP3sg => "CompoundP3sg",
            Self::LastVowelDrop => "LastVowelDrop",
            Self::Special => "Special",
            Self::NoSuffix => "NoSuffix",
            Self::Plural => "Plural",
            Self::RootChange => "RootChange",
        }
    }

    const fn bit(self) -> u32 {
        1 << self as u8
    }
}

impl FromStr for LexemeAttribute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.short_name() == s)
            .ok_or_else(|| CoreError::UnknownLexemeAttribute(s.to_string()))
    }
}

/// A set of [`LexemeAttribute`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LexemeAttributes(u32);

impl LexemeAttributes {
    pub const EMPTY: Self = Self(0);

    pub fn of(attrs: &[LexemeAttribute]) -> Self {
        attrs.iter().fold(Self::EMPTY, |set, &a| set.with(a))
    }

    pub fn contains(self, attr: LexemeAttribute) -> bool {
        self.0 & attr.bit() != 0
    }

    pub fn contains_any(self, other: LexemeAttributes) -> bool {
        self.0 & other.0 != 0
    }

    pub fn contains_all(self, other: LexemeAttributes) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, attr: LexemeAttribute) {
        self.0 |= attr.bit();
    }

    pub fn remove(&mut self, attr: LexemeAttribute) {
        self.0 &= !attr.bit();
    }

    #[must_use]
    pub fn with(mut self, attr: LexemeAttribute) -> Self {
        self.insert(attr);
        self
    }

    #[must_use]
    pub fn without(mut self, attr: LexemeAttribute) -> Self {
        self.remove(attr);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = LexemeAttribute> {
        LexemeAttribute::ALL
            .into_iter()
            .filter(move |a| self.contains(*a))
    }
}

impl fmt::Debug for LexemeAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|a| a.short_name())).finish()
    }
}

impl FromIterator<LexemeAttribute> for LexemeAttributes {
    fn from_iter<T: IntoIterator<Item = LexemeAttribute>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, |set, a| set.with(a))
    }
}

// ---------------------------------------------------------------------------
// Lexemes and roots
// ---------------------------------------------------------------------------

/// A dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lexeme {
    /// Citation form (`kitap`, `gitmek`).
    pub lemma: String,
    /// Lemma without inflection (`kitap`, `git`).
    pub lemma_root: String,
    pub primary_pos: PrimaryPos,
    pub secondary_pos: Option<SecondaryPos>,
    pub attributes: LexemeAttributes,
}

impl Lexeme {
    pub fn new(
        lemma: impl Into<String>,
        lemma_root: impl Into<String>,
        primary_pos: PrimaryPos,
        secondary_pos: Option<SecondaryPos>,
        attributes: LexemeAttributes,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            lemma_root: lemma_root.into(),
            primary_pos,
            secondary_pos,
            attributes,
        }
    }

    pub fn has_attribute(&self, attr: LexemeAttribute) -> bool {
        self.attributes.contains(attr)
    }
}

/// A realized base form of a lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    /// The letters of the root as they appear in a surface.
    pub sequence: String,
    pub lexeme: Arc<Lexeme>,
    pub phonetic_attributes: PhoneticAttributes,
    pub phonetic_expectations: PhoneticExpectations,
}

impl Root {
    pub fn new(
        sequence: impl Into<String>,
        lexeme: Arc<Lexeme>,
        phonetic_attributes: PhoneticAttributes,
        phonetic_expectations: PhoneticExpectations,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            lexeme,
            phonetic_attributes,
            phonetic_expectations,
        }
    }

    /// Number of characters in the root sequence.
    pub fn char_len(&self) -> usize {
        self.sequence.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_names_round_trip_through_from_str() {
        assert_eq!("Adj".parse::<PrimaryPos>().unwrap(), PrimaryPos::Adjective);
        assert_eq!("Prop".parse::<SecondaryPos>().unwrap(), SecondaryPos::ProperNoun);
        assert_eq!(
            "Causative_dIr".parse::<LexemeAttribute>().unwrap(),
            LexemeAttribute::CausativeDIr
        );
    }

    #[test]
    fn unknown_names_are_errors() {
        assert!(matches!(
            "Nown".parse::<PrimaryPos>(),
            Err(CoreError::UnknownPrimaryPos(ref s)) if s == "Nown"
        ));
        assert!("Xyz".parse::<SecondaryPos>().is_err());
        assert!("Voicy".parse::<LexemeAttribute>().is_err());
    }

    #[test]
    fn lexeme_attribute_set_operations() {
        let mut attrs = LexemeAttributes::of(&[LexemeAttribute::Voicing, LexemeAttribute::AoristA]);
        assert!(attrs.contains(LexemeAttribute::Voicing));
        attrs.remove(LexemeAttribute::Voicing);
        assert!(!attrs.contains(LexemeAttribute::Voicing));
        assert!(attrs.contains_any(LexemeAttributes::of(&[LexemeAttribute::AoristA])));
        assert!(!attrs.contains_all(LexemeAttributes::of(&[
            LexemeAttribute::AoristA,
            LexemeAttribute::AoristI
        ])));
        assert_eq!(attrs.iter().collect::<Vec<_>>(), vec![LexemeAttribute::AoristA]);
    }

    #[test]
    fn roots_compare_by_value() {
        let lexeme = Arc::new(Lexeme::new(
            "kitap",
            "kitap",
            PrimaryPos::Noun,
            None,
            LexemeAttributes::EMPTY,
        ));
        let a = Root::new("kitab", lexeme.clone(), PhoneticAttributes::EMPTY, PhoneticExpectations::EMPTY);
        let b = Root::new("kitab", lexeme, PhoneticAttributes::EMPTY, PhoneticExpectations::EMPTY);
        assert_eq!(a, b);
        assert_eq!(a.char_len(), 5);
    }
}
