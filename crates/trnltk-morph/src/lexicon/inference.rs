// Lexeme attribute inference
//
// Most dictionary lines only carry the attributes that cannot be guessed
// from the letters. The rest (aorist vowel, passive and causative forms,
// voicing of the last letter) are filled in here.

use trnltk_core::{
    alphabet, sequence, LexemeAttribute, LexemeAttributes, PrimaryPos,
};

use LexemeAttribute::*;

const CAUSATIVES: [LexemeAttribute; 5] = [CausativeT, CausativeIr, CausativeIt, CausativeAr, CausativeDIr];

/// Complete `attrs` for a lexeme with `lemma_root` and `pos`.
pub fn infer_attributes(lemma_root: &str, pos: PrimaryPos, attrs: LexemeAttributes) -> LexemeAttributes {
    match pos {
        PrimaryPos::Verb => infer_verb(lemma_root, attrs),
        PrimaryPos::Noun if attrs.contains(CompoundP3sg) => infer_compound(attrs),
        PrimaryPos::Noun | PrimaryPos::Adjective => infer_nominal(lemma_root, attrs),
        _ => attrs,
    }
}

fn infer_verb(root: &str, mut attrs: LexemeAttributes) -> LexemeAttributes {
    let Some(last) = sequence::last_char(root) else {
        return attrs;
    };
    let last = alphabet::letter(last);
    let vowels = alphabet::vowel_count(root);

    if last.is_vowel() {
        attrs.insert(ProgressiveVowelDrop);
        attrs.insert(PassiveIn);
    }
    if vowels > 1 && !attrs.contains(AoristA) {
        attrs.insert(AoristI);
    }
    if vowels == 1 && !attrs.contains(AoristI) {
        attrs.insert(AoristA);
    }
    if last.ch == 'l' {
        attrs.insert(PassiveIn);
    }

    if !attrs.contains_any(LexemeAttributes::of(&CAUSATIVES)) {
        if last.is_vowel() || (matches!(last.ch, 'l' | 'r') && vowels > 1) {
            attrs.insert(CausativeT);
        } else if last.ch == 't' && vowels < 2 {
            attrs.insert(CausativeIr);
        } else {
            attrs.insert(CausativeDIr);
        }
    }

    if attrs.contains(ProgressiveVowelDrop) {
        attrs.insert(NoVoicing);
    }
    if !attrs.contains(Voicing) && !attrs.contains(NoVoicing) {
        attrs.insert(NoVoicing);
    }
    attrs
}

fn infer_compound(mut attrs: LexemeAttributes) -> LexemeAttributes {
    if attrs.contains(VoicingOpt) {
        attrs.remove(Voicing);
        attrs.remove(NoVoicing);
    } else if !attrs.contains(Voicing) {
        attrs.insert(NoVoicing);
    }
    attrs
}

fn infer_nominal(root: &str, mut attrs: LexemeAttributes) -> LexemeAttributes {
    if attrs.contains(VoicingOpt) {
        attrs.remove(Voicing);
        attrs.remove(NoVoicing);
        return attrs;
    }
    let ends_with_stop = sequence::last_char(root).is_some_and(|c| alphabet::letter(c).is_stop_consonant());
    if alphabet::vowel_count(root) > 1
        && ends_with_stop
        && !attrs.contains(NoVoicing)
        && !attrs.contains(InverseHarmony)
    {
        attrs.insert(Voicing);
    } else if root.ends_with("nk") || root.ends_with("og") || root.ends_with("rt") {
        attrs.insert(Voicing);
    } else if !attrs.contains(Voicing) {
        attrs.insert(NoVoicing);
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb(root: &str, given: &[LexemeAttribute]) -> LexemeAttributes {
        infer_attributes(root, PrimaryPos::Verb, LexemeAttributes::of(given))
    }

    fn noun(root: &str, given: &[LexemeAttribute]) -> LexemeAttributes {
        infer_attributes(root, PrimaryPos::Noun, LexemeAttributes::of(given))
    }

    #[test]
    fn verbs() {
        let ara = verb("ara", &[]);
        assert!(ara.contains_all(LexemeAttributes::of(&[
            ProgressiveVowelDrop,
            PassiveIn,
            AoristI,
            CausativeT,
            NoVoicing
        ])));

        let gel = verb("gel", &[AoristI]);
        assert!(gel.contains_all(LexemeAttributes::of(&[AoristI, PassiveIn, CausativeDIr, NoVoicing])));
        assert!(!gel.contains(AoristA));

        let yap = verb("yap", &[]);
        assert!(yap.contains_all(LexemeAttributes::of(&[AoristA, CausativeDIr, NoVoicing])));

        let bit = verb("bit", &[]);
        assert!(bit.contains(CausativeIr));

        let git = verb("git", &[Voicing, AoristA]);
        assert!(git.contains(Voicing));
        assert!(!git.contains(NoVoicing));

        let otur = verb("otur", &[]);
        assert!(otur.contains(CausativeT));
        assert!(otur.contains(AoristI));

        let yaz = verb("yaz", &[CausativeIr]);
        assert!(!yaz.contains(CausativeDIr));
    }

    #[test]
    fn nouns_and_adjectives() {
        assert!(noun("kitap", &[]).contains(Voicing));
        assert!(noun("ok", &[]).contains(NoVoicing));
        assert!(noun("renk", &[]).contains(Voicing));
        assert!(noun("saat", &[InverseHarmony]).contains(NoVoicing));
        assert!(noun("ev", &[]).contains(NoVoicing));
        let opt = noun("kalp", &[VoicingOpt, Voicing]);
        assert!(!opt.contains(Voicing) && !opt.contains(NoVoicing));

        let adj = infer_attributes("küçük", PrimaryPos::Adjective, LexemeAttributes::EMPTY);
        assert!(adj.contains(Voicing));
        let adv = infer_attributes("çabuk", PrimaryPos::Adverb, LexemeAttributes::EMPTY);
        assert!(adv.is_empty());
    }

    #[test]
    fn compounds() {
        assert_eq!(noun("zeytinyağı", &[CompoundP3sg]), LexemeAttributes::of(&[CompoundP3sg, NoVoicing]));
        let voiced = noun("ayakkabı", &[CompoundP3sg, Voicing]);
        assert!(!voiced.contains(NoVoicing));
    }
}
