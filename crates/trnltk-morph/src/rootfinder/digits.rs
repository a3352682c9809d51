// Digit root finders
//
// Cardinals (`12`, `1.234`, `3,5`), ordinals (`12.`, `1.000.`) and ranges
// (`1-2`, `1.000-2.000`). A digit root is only proposed for the longest
// digit prefix: the next character must not continue the number. The
// root's phonetic attributes come from the number's Turkish text, so
// `3'e` harmonizes like `üçe`.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use trnltk_core::{
    phonetic, sequence, Lexeme, LexemeAttribute, LexemeAttributes, PhoneticExpectations, PrimaryPos, Root,
    SecondaryPos,
};

use super::numeral_text;
use super::RootFinder;
use crate::phonetics::{self, SuffixFormSequence};

const APOSTROPHE: char = '\'';

static CARDINAL: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        pattern(r"^[-+]?\d+(,\d)?\d*$"),
        pattern(r"^[-+]?(\d{1,3}\.)+\d{3}(,\d)?\d*$"),
    ]
});

static ORDINAL: Lazy<[Regex; 2]> = Lazy::new(|| [pattern(r"^[-+]?\d+\.$"), pattern(r"^[-+]?(\d{1,3}\.)+\d{3}\.$")]);

static RANGE: Lazy<Regex> = Lazy::new(|| {
    pattern(r"^((\d{1,3}\.)+\d{3}|\d+)(-((\d{1,3}\.)+\d{3}|\d+))*-((\d{1,3}\.)+\d{3}|\d+)$")
});

static ORDINAL_FORM: Lazy<Option<SuffixFormSequence>> = Lazy::new(|| SuffixFormSequence::parse("+IncI").ok());

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("valid digit pattern")
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn numeral_root(partial: &str, text: &str, secondary: SecondaryPos) -> Arc<Root> {
    let lexeme = Lexeme::new(partial, partial, PrimaryPos::Numeral, Some(secondary), LexemeAttributes::EMPTY);
    let attrs = phonetic::calculate(text, LexemeAttributes::EMPTY);
    Arc::new(Root::new(partial, Arc::new(lexeme), attrs, PhoneticExpectations::EMPTY))
}

// ---------------------------------------------------------------------------
// Cardinal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct CardinalDigitsRootFinder;

impl RootFinder for CardinalDigitsRootFinder {
    fn name(&self) -> &'static str {
        "cardinal digits"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        let Some(last) = sequence::last_char(partial) else {
            return false;
        };
        if !is_digit(last) && last != '.' && last != ',' {
            return false;
        }
        let len = sequence::char_len(partial);
        if let Some(next) = sequence::char_at(whole, len) {
            if is_digit(next) || next == '.' || next == ',' {
                return false;
            }
            // `12'ye` has a root for `12` only.
            let apostrophe = whole.chars().collect::<Vec<_>>().iter().rposition(|&c| c == APOSTROPHE);
            if apostrophe.is_some_and(|i| i > 0 && i != len) {
                return false;
            }
        }
        CARDINAL.iter().any(|re| re.is_match(partial))
    }

    fn find(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        match numeral_text::convert(partial) {
            Some(text) => vec![numeral_root(partial, &text, SecondaryPos::DigitsCardinal)],
            None => {
                log::debug!("'{}' cannot be read as a cardinal", partial);
                Vec::new()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Ordinal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalDigitsRootFinder;

impl OrdinalDigitsRootFinder {
    /// `üç` -> `üçüncü`. Only `dört` voices: `dördüncü`.
    fn ordinal_text(digits: &str, cardinal: &str) -> Option<String> {
        let form = ORDINAL_FORM.as_ref()?;
        let lexeme_attributes = if digits.ends_with('4') {
            LexemeAttributes::EMPTY
        } else {
            LexemeAttributes::of(&[LexemeAttribute::NoVoicing])
        };
        let attrs = phonetic::calculate(cardinal, LexemeAttributes::EMPTY);
        let (surface, applied) = phonetics::apply(cardinal, attrs, form, lexeme_attributes)?;
        Some(surface + &applied)
    }
}

impl RootFinder for OrdinalDigitsRootFinder {
    fn name(&self) -> &'static str {
        "ordinal digits"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        if sequence::last_char(partial) != Some('.') {
            return false;
        }
        // `1.'nin` is fine, `1.5` or `1.a` are not.
        if let Some(next) = sequence::char_at(whole, sequence::char_len(partial)) {
            if next != APOSTROPHE {
                return false;
            }
        }
        ORDINAL.iter().any(|re| re.is_match(partial))
    }

    fn find(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        let digits = sequence::drop_last(partial, 1);
        let text = numeral_text::convert(digits).and_then(|cardinal| Self::ordinal_text(digits, &cardinal));
        match text {
            Some(text) => vec![numeral_root(partial, &text, SecondaryPos::DigitsOrdinal)],
            None => {
                log::debug!("'{}' cannot be read as an ordinal", partial);
                Vec::new()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct RangeDigitsRootFinder;

impl RootFinder for RangeDigitsRootFinder {
    fn name(&self) -> &'static str {
        "range digits"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        if !sequence::last_char(partial).is_some_and(is_digit) {
            return false;
        }
        // `1-2'nin` and `1-2.` are fine.
        if let Some(next) = sequence::char_at(whole, sequence::char_len(partial)) {
            if is_digit(next) || (next != APOSTROPHE && next != '.') {
                return false;
            }
        }
        RANGE.is_match(partial)
    }

    fn find(&self, partial: &str, _whole: &str) -> Vec<Arc<Root>> {
        let parts: Option<Vec<String>> = partial.split('-').map(numeral_text::convert).collect();
        match parts {
            Some(parts) => vec![numeral_root(partial, &parts.join(" "), SecondaryPos::Range)],
            None => Vec::new(),
        }
    }
}
