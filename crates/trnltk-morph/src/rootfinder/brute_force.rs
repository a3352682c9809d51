// Brute force root finders
//
// Guessers for words missing from the dictionary. Each treats a prefix as
// a noun or verb root and derives the lexeme attributes the rest of the
// input suggests: a voiced last letter before a vowel (`kitabı`), a
// doubled consonant (`hakkı`), harmony against the last vowel (`saati`),
// a dropped vowel before the progressive (`başlıyor`), causative and
// passive stems (`yaptır`, `yapıl`). Guesses are cheap and plentiful;
// the suffix graph rejects most of them.

use std::sync::Arc;

use once_cell::sync::Lazy;
use trnltk_core::{
    alphabet, phonetic, sequence, Lexeme, LexemeAttribute, LexemeAttributes, PhoneticExpectations, PrimaryPos, Root,
};

use super::RootFinder;
use crate::phonetics::{self, SuffixFormSequence};

static INFINITIVE_FORM: Lazy<Option<SuffixFormSequence>> = Lazy::new(|| SuffixFormSequence::parse("mAk").ok());

/// A guessed lemma root with its attributes. The root sequence is the
/// prefix the guess was made for.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Guess {
    lemma_root: String,
    attributes: LexemeAttributes,
}

impl Guess {
    fn plain(lemma_root: &str) -> Self {
        Self {
            lemma_root: lemma_root.to_string(),
            attributes: LexemeAttributes::EMPTY,
        }
    }

    fn with(&self, attr: LexemeAttribute) -> Self {
        Self {
            lemma_root: self.lemma_root.clone(),
            attributes: self.attributes.with(attr),
        }
    }

    /// The lemma root with its last `drop` letters replaced by `c`.
    fn replacing_tail(&self, drop: usize, c: char) -> Self {
        let mut lemma_root = sequence::drop_last(&self.lemma_root, drop).to_string();
        lemma_root.push(c);
        Self {
            lemma_root,
            attributes: self.attributes,
        }
    }
}

fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

fn starts_with_any(whole: &str, partial: &str, tails: &[&str]) -> bool {
    whole
        .strip_prefix(partial)
        .is_some_and(|rest| tails.iter().any(|t| rest.starts_with(t)))
}

// ---------------------------------------------------------------------------
// Nouns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceNounRootFinder;

impl BruteForceNounRootFinder {
    fn guesses(partial: &str, whole: &str) -> Vec<Guess> {
        let base = Guess::plain(partial);
        let len = sequence::char_len(partial);
        if whole == partial || len < 2 {
            return vec![base];
        }
        let Some(last_vowel) = sequence::last_vowel(partial) else {
            return vec![base];
        };
        let (Some(last), Some(next)) = (sequence::last_char(partial), sequence::char_at(whole, len)) else {
            return vec![base];
        };
        if is_upper(last) || is_upper(next) {
            return vec![base];
        }

        let mut guesses = Self::voicing_and_doubling(partial, last, next, base);

        let vowel_after = sequence::first_vowel(sequence::suffix_from(whole, len - 1));
        if vowel_after.is_some_and(|v| alphabet::letter(v).is_frontal() != alphabet::letter(last_vowel).is_frontal()) {
            for guess in &mut guesses {
                guess.attributes.insert(LexemeAttribute::InverseHarmony);
            }
        }
        guesses
    }

    fn voicing_and_doubling(partial: &str, last: char, next: char, base: Guess) -> Vec<Guess> {
        let len = sequence::char_len(partial);
        let next_is_vowel = alphabet::is_vowel(next);
        let no_voicing = alphabet::is_voicable(last) && next_is_vowel;
        let voicing_might_have_happened = !alphabet::inverse_voicings(last).is_empty() && next_is_vowel;
        let doubling_might_have_happened = len > 2
            && !alphabet::is_vowel(last)
            && sequence::char_at(partial, len - 2) == Some(last)
            && next_is_vowel;

        let devoiced = |guess: &Guess| -> Vec<Guess> {
            alphabet::inverse_voicings(last)
                .iter()
                .map(|&c| guess.replacing_tail(1, c))
                .collect()
        };
        let doubled = |guess: &Guess| -> Guess {
            let tail = sequence::last_char(&guess.lemma_root).unwrap_or(last);
            guess.replacing_tail(2, tail).with(LexemeAttribute::Doubling)
        };

        match (doubling_might_have_happened, no_voicing, voicing_might_have_happened) {
            (true, true, _) => {
                let base = base.with(LexemeAttribute::NoVoicing);
                let doubling = doubled(&base);
                vec![base, doubling]
            }
            (true, false, true) => {
                let mut guesses = vec![doubled(&base)];
                guesses.extend(devoiced(&base).iter().map(doubled));
                guesses.insert(0, base);
                guesses
            }
            (true, false, false) => {
                let doubling = doubled(&base);
                vec![base, doubling]
            }
            (false, true, _) => vec![base.with(LexemeAttribute::NoVoicing)],
            (false, false, true) => {
                let mut guesses = devoiced(&base);
                guesses.insert(0, base);
                guesses
            }
            (false, false, false) => vec![base],
        }
    }
}

fn noun_root(sequence: &str, lemma: &str, attributes: LexemeAttributes, phonetic_sequence: &str) -> Arc<Root> {
    let lexeme = Lexeme::new(lemma, lemma, PrimaryPos::Noun, None, attributes);
    let attrs = phonetic::calculate(phonetic_sequence, attributes);
    Arc::new(Root::new(sequence, Arc::new(lexeme), attrs, PhoneticExpectations::EMPTY))
}

impl RootFinder for BruteForceNounRootFinder {
    fn name(&self) -> &'static str {
        "brute force noun"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        if partial.trim().is_empty() || whole.trim().is_empty() {
            return false;
        }
        if sequence::char_len(partial) < 2 && sequence::char_len(whole) >= 2 {
            return false;
        }
        whole.starts_with(partial)
    }

    fn find(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        Self::guesses(partial, whole)
            .into_iter()
            .map(|g| noun_root(partial, &g.lemma_root, g.attributes, partial))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Compound nouns
// ---------------------------------------------------------------------------

/// Compounds in P3sg (`adamotu`, `ayakkabısı`) followed by the pronominal
/// `n` of a case suffix: the root is the first noun, the lemma the whole
/// compound.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceCompoundNounRootFinder;

impl RootFinder for BruteForceCompoundNounRootFinder {
    fn name(&self) -> &'static str {
        "brute force compound noun"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        let len = sequence::char_len(partial);
        if partial.trim().is_empty() || len < 5 || sequence::char_len(whole) < len + 2 {
            return false;
        }
        let (Some(last), Some(previous), Some(next)) = (
            sequence::char_at(partial, len - 1),
            sequence::char_at(partial, len - 2),
            sequence::char_at(whole, len),
        ) else {
            return false;
        };
        if is_upper(last) || is_upper(previous) || is_upper(next) {
            return false;
        }
        matches!(alphabet::letter(last).ch, 'ı' | 'i' | 'u' | 'ü') && alphabet::letter(next).ch == 'n'
    }

    fn find(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        let len = sequence::char_len(partial);
        let mut roots = Vec::new();

        let one_less = sequence::drop_last(partial, 1);
        for guess in BruteForceNounRootFinder::guesses(one_less, whole) {
            let attributes = guess.attributes.with(LexemeAttribute::CompoundP3sg);
            roots.push(noun_root(&guess.lemma_root, partial, attributes, one_less));
        }

        if sequence::char_at(partial, len - 2).map(alphabet::to_lower) == Some('s') {
            let two_less = sequence::drop_last(partial, 2);
            for guess in BruteForceNounRootFinder::guesses(two_less, whole) {
                let attributes = guess.attributes.with(LexemeAttribute::CompoundP3sg);
                roots.push(noun_root(two_less, partial, attributes, two_less));
            }
        }
        roots
    }
}

// ---------------------------------------------------------------------------
// Verbs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceVerbRootFinder;

impl BruteForceVerbRootFinder {
    /// A verb root ends in a vowel, follows a vowel, or is an `l`/`r`/`n`
    /// followed by a stop (`kalk`, `sert`).
    fn seems_like_a_verb_root(s: &str) -> bool {
        let chars: Vec<char> = s.chars().collect();
        let [.., previous, last] = chars[..] else {
            return false;
        };
        let last = alphabet::letter(last);
        let previous = alphabet::letter(previous);
        last.is_vowel() || previous.is_vowel() || (matches!(previous.ch, 'l' | 'r' | 'n') && !last.is_continuant())
    }

    /// `başl` of `başlıyor` may come from `başlamak` or `başlımak`.
    fn progressive_vowel_drops(default: &Guess, last_vowel: char) -> Vec<Guess> {
        let vowel = alphabet::letter(last_vowel);
        let dropped = match (vowel.is_frontal(), vowel.is_rounded()) {
            (false, false) => ['a', 'ı'],
            (false, true) => ['a', 'u'],
            (true, false) => ['e', 'i'],
            (true, true) => ['e', 'ü'],
        };
        dropped
            .into_iter()
            .map(|v| {
                let mut guess = default.with(LexemeAttribute::ProgressiveVowelDrop);
                guess.lemma_root.push(v);
                guess
            })
            .collect()
    }

    fn causatives(default: &Guess, partial: &str, whole: &str, last: char) -> Vec<Guess> {
        let last = alphabet::letter(last);
        let candidates = [
            (
                LexemeAttribute::CausativeT,
                starts_with_any(whole, partial, &["t"]) && (last.is_continuant() || last.is_vowel()),
            ),
            (LexemeAttribute::CausativeIr, starts_with_any(whole, partial, &["ır", "ir", "ur", "ür"])),
            (LexemeAttribute::CausativeIt, starts_with_any(whole, partial, &["ıt", "it", "ut", "üt"])),
            (LexemeAttribute::CausativeAr, starts_with_any(whole, partial, &["ar", "er"])),
            (
                LexemeAttribute::CausativeDIr,
                starts_with_any(whole, partial, &["dır", "dir", "dur", "dür", "tır", "tir", "tur", "tür"]),
            ),
        ];
        candidates
            .into_iter()
            .filter(|(_, possible)| *possible)
            .map(|(attr, _)| default.with(attr))
            .collect()
    }

    fn passives(default: &Guess, partial: &str, whole: &str, last: char) -> Vec<Guess> {
        let vowel_final = alphabet::is_vowel(last);
        let passive = |after_consonant: &[&str], after_vowel: &[&str]| {
            if vowel_final {
                starts_with_any(whole, partial, after_vowel)
            } else {
                starts_with_any(whole, partial, after_consonant)
            }
        };
        let candidates = [
            (LexemeAttribute::PassiveIl, passive(&["ıl", "il", "ul", "ül"], &["l"])),
            (LexemeAttribute::PassiveIn, passive(&["ın", "in", "un", "ün"], &["n"])),
            (
                LexemeAttribute::PassiveInIl,
                passive(&["ınıl", "inil", "unul", "ünül"], &["nıl", "nil", "nul", "nül"]),
            ),
        ];
        candidates
            .into_iter()
            .filter(|(_, possible)| *possible)
            .map(|(attr, _)| default.with(attr))
            .collect()
    }

    /// `ed` of `ediyor` may be `et` voiced.
    fn voiced(guess: &Guess) -> Guess {
        guess.replacing_tail(1, 't').with(LexemeAttribute::Voicing)
    }

    fn root(partial: &str, mut guess: Guess) -> Arc<Root> {
        let attrs = phonetic::calculate(partial, guess.attributes);
        if partial.ends_with('d') && guess.lemma_root.ends_with('t') {
            guess.attributes.remove(LexemeAttribute::NoVoicing);
            guess.attributes.insert(LexemeAttribute::Voicing);
        } else {
            guess.attributes.remove(LexemeAttribute::Voicing);
            guess.attributes.insert(LexemeAttribute::NoVoicing);
        }

        let infinitive = INFINITIVE_FORM
            .as_ref()
            .and_then(|form| phonetics::apply(&guess.lemma_root, attrs, form, guess.attributes));
        let lemma = match infinitive {
            Some((word, applied)) => word + &applied,
            None => guess.lemma_root.clone(),
        };

        let lexeme = Lexeme::new(lemma, guess.lemma_root, PrimaryPos::Verb, None, guess.attributes);
        Arc::new(Root::new(partial, Arc::new(lexeme), attrs, PhoneticExpectations::EMPTY))
    }
}

impl RootFinder for BruteForceVerbRootFinder {
    fn name(&self) -> &'static str {
        "brute force verb"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        if partial.trim().is_empty() || !whole.starts_with(partial) {
            return false;
        }
        let len = sequence::char_len(partial);
        if len < 2 || !sequence::has_vowel(partial) {
            return false;
        }
        !sequence::char_at(whole, len).is_some_and(is_upper)
    }

    fn find(&self, partial: &str, whole: &str) -> Vec<Arc<Root>> {
        let len = sequence::char_len(partial);
        let (Some(last), Some(last_vowel)) = (sequence::last_char(partial), sequence::last_vowel(partial)) else {
            return Vec::new();
        };

        let aorist_i = !alphabet::is_vowel(last) && alphabet::vowel_count(partial) > 1;
        let aorist = if aorist_i {
            LexemeAttribute::AoristI
        } else {
            LexemeAttribute::AoristA
        };
        let default = Guess::plain(partial).with(aorist);

        let Some(next) = sequence::char_at(whole, len) else {
            return if Self::seems_like_a_verb_root(partial) {
                vec![Self::root(partial, default)]
            } else {
                Vec::new()
            };
        };

        let voicing_might_have_happened = alphabet::to_lower(last) == 'd' && alphabet::is_vowel(next);
        let progressive_vowel_drop = !alphabet::is_vowel(last) && starts_with_any(whole, partial, &["iyor", "ıyor", "uyor", "üyor"]);

        let mut variants = Vec::new();
        if progressive_vowel_drop {
            variants.extend(Self::progressive_vowel_drops(&default, last_vowel));
        }
        variants.extend(Self::causatives(&default, partial, whole, last));
        variants.extend(Self::passives(&default, partial, whole, last));

        let mut guesses = vec![default.clone()];
        if voicing_might_have_happened {
            guesses.push(Self::voiced(&default));
            let voiced: Vec<Guess> = variants.iter().map(Self::voiced).collect();
            variants.extend(voiced);
        }
        guesses.extend(variants);

        let mut unique: Vec<Guess> = Vec::with_capacity(guesses.len());
        for guess in guesses {
            if !unique.contains(&guess) {
                unique.push(guess);
            }
        }
        unique
            .into_iter()
            .filter(|g| Self::seems_like_a_verb_root(&g.lemma_root))
            .map(|g| Self::root(partial, g))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trnltk_core::PhoneticAttribute;

    fn lemma_roots(roots: &[Arc<Root>]) -> Vec<&str> {
        roots.iter().map(|r| r.lexeme.lemma_root.as_str()).collect()
    }

    #[test]
    fn noun_guesses_devoiced_roots() {
        let roots = BruteForceNounRootFinder.find("kitab", "kitabı");
        assert_eq!(lemma_roots(&roots), vec!["kitab", "kitap"]);
        assert!(roots.iter().all(|r| r.sequence == "kitab"));

        let roots = BruteForceNounRootFinder.find("kitap", "kitapçı");
        assert_eq!(lemma_roots(&roots), vec!["kitap"]);

        let roots = BruteForceNounRootFinder.find("ev", "ev");
        assert_eq!(roots.len(), 1);
        assert!(roots[0].lexeme.attributes.is_empty());
    }

    #[test]
    fn noun_guesses_doubling_and_harmony() {
        let roots = BruteForceNounRootFinder.find("hakk", "hakkı");
        assert_eq!(lemma_roots(&roots), vec!["hakk", "hak"]);
        assert!(roots.iter().all(|r| r.lexeme.has_attribute(LexemeAttribute::NoVoicing)));
        assert!(roots[1].lexeme.has_attribute(LexemeAttribute::Doubling));

        let roots = BruteForceNounRootFinder.find("saat", "saati");
        assert_eq!(roots.len(), 1);
        assert!(roots[0].lexeme.has_attribute(LexemeAttribute::InverseHarmony));
        assert!(roots[0].phonetic_attributes.contains(PhoneticAttribute::LastVowelFrontal));
    }

    #[test]
    fn noun_finder_skips_single_letters_of_longer_words() {
        let finder = BruteForceNounRootFinder;
        assert!(!finder.handles("k", "kitap"));
        assert!(finder.handles("o", "o"));
        assert!(finder.handles("kit", "kitap"));
    }

    #[test]
    fn compounds_before_pronominal_n() {
        let finder = BruteForceCompoundNounRootFinder;
        assert!(finder.handles("adamotu", "adamotunu"));
        assert!(!finder.handles("adamotu", "adamotu"));
        assert!(!finder.handles("adamotu", "adamotuyu"));
        assert!(!finder.handles("otu", "otunu"));

        let roots = finder.find("adamotu", "adamotunu");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].sequence, "adamot");
        assert_eq!(roots[0].lexeme.lemma, "adamotu");
        let attrs = roots[0].lexeme.attributes;
        assert!(attrs.contains(LexemeAttribute::CompoundP3sg));
        assert!(attrs.contains(LexemeAttribute::NoVoicing));

        let roots = finder.find("ayakkabısı", "ayakkabısını");
        let sequences: Vec<&str> = roots.iter().map(|r| r.sequence.as_str()).collect();
        assert_eq!(sequences, vec!["ayakkabıs", "ayakkabı"]);
        assert!(roots.iter().all(|r| r.lexeme.lemma_root == "ayakkabısı"));
    }

    #[test]
    fn verb_roots_for_the_whole_input() {
        let roots = BruteForceVerbRootFinder.find("gel", "gel");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].lexeme.lemma, "gelmek");
        assert!(roots[0].lexeme.has_attribute(LexemeAttribute::AoristA));
        assert!(roots[0].lexeme.has_attribute(LexemeAttribute::NoVoicing));

        assert!(BruteForceVerbRootFinder.find("gşl", "gşl").is_empty());
    }

    #[test]
    fn verb_progressive_vowel_drop() {
        let roots = BruteForceVerbRootFinder.find("başl", "başlıyor");
        let mut lemmas: Vec<&str> = roots.iter().map(|r| r.lexeme.lemma.as_str()).collect();
        lemmas.sort();
        assert_eq!(lemmas, vec!["başlamak", "başlımak"]);
        assert!(roots.iter().all(|r| r.lexeme.has_attribute(LexemeAttribute::ProgressiveVowelDrop)));
        assert!(roots.iter().all(|r| r.sequence == "başl"));
    }

    #[test]
    fn verb_voicing_and_causatives() {
        let roots = BruteForceVerbRootFinder.find("ed", "ediyor");
        let et = roots.iter().find(|r| r.lexeme.lemma == "etmek");
        assert!(et.is_some_and(|r| r.lexeme.has_attribute(LexemeAttribute::Voicing)));
        assert!(roots.iter().any(|r| r.lexeme.lemma_root == "ed"));

        let roots = BruteForceVerbRootFinder.find("yap", "yaptırdı");
        assert!(roots.iter().any(|r| r.lexeme.has_attribute(LexemeAttribute::CausativeDIr)));

        let roots = BruteForceVerbRootFinder.find("oku", "okundu");
        assert!(roots.iter().any(|r| r.lexeme.has_attribute(LexemeAttribute::PassiveIn)));
        assert!(!BruteForceVerbRootFinder.handles("ok", "okDu"));
    }
}
