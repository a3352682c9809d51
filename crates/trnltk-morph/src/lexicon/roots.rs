// Root generation
//
// A lexeme realizes one or two roots. `kitap` has `kitap` before
// consonants and `kitab` before vowels; `hak` has `hak` and `hakk`;
// `ağız` has `ağız` and `ağz`; `başlamak` has `başla` and `başl`. A few
// pronouns and verbs change their root outright (`ben`/`ban`,
// `yemek`/`yi`).

use std::sync::Arc;

use trnltk_core::{
    alphabet, phonetic, sequence, Lexeme, LexemeAttribute, LexemeAttributes, PhoneticAttribute,
    PhoneticExpectation, PhoneticExpectations, PrimaryPos, Root,
};

use super::LexiconError;

use LexemeAttribute::*;

const MODIFIERS: [LexemeAttribute; 7] = [
    Doubling,
    LastVowelDrop,
    ProgressiveVowelDrop,
    InverseHarmony,
    Voicing,
    VoicingOpt,
    RootChange,
];

/// Lemma and part of speech (`None` for any) of lexemes with a changed root.
const ROOT_CHANGES: [(&str, Option<PrimaryPos>, &str); 12] = [
    ("ben", Some(PrimaryPos::Pronoun), "ban"),
    ("sen", Some(PrimaryPos::Pronoun), "san"),
    ("demek", Some(PrimaryPos::Verb), "di"),
    ("yemek", Some(PrimaryPos::Verb), "yi"),
    ("hepsi", Some(PrimaryPos::Pronoun), "hep"),
    ("ora", Some(PrimaryPos::Pronoun), "or"),
    ("bura", Some(PrimaryPos::Pronoun), "bur"),
    ("şura", Some(PrimaryPos::Pronoun), "şur"),
    ("nere", Some(PrimaryPos::Pronoun), "ner"),
    ("içeri", None, "içer"),
    ("dışarı", None, "dışar"),
    ("birbiri", Some(PrimaryPos::Pronoun), "birbir"),
];

/// The roots of `lexeme`.
pub fn generate_roots(lexeme: &Arc<Lexeme>) -> Result<Vec<Root>, LexiconError> {
    if !lexeme.attributes.contains_any(LexemeAttributes::of(&MODIFIERS)) {
        let attrs = phonetic::calculate(&lexeme.lemma_root, lexeme.attributes);
        return Ok(vec![Root::new(
            lexeme.lemma_root.clone(),
            Arc::clone(lexeme),
            attrs,
            PhoneticExpectations::EMPTY,
        )]);
    }
    if lexeme.has_attribute(RootChange) {
        return changed_roots(lexeme);
    }
    modified_roots(lexeme)
}

fn changed_roots(lexeme: &Lexeme) -> Result<Vec<Root>, LexiconError> {
    let changed = ROOT_CHANGES
        .iter()
        .find(|(lemma, pos, _)| *lemma == lexeme.lemma && *pos == Some(lexeme.primary_pos))
        .or_else(|| ROOT_CHANGES.iter().find(|(lemma, pos, _)| *lemma == lexeme.lemma && pos.is_none()))
        .map(|&(_, _, changed)| changed)
        .ok_or_else(|| LexiconError::InvalidRootModification {
            lemma: lexeme.lemma.clone(),
            reason: format!("no root change known for {}", lexeme.primary_pos),
        })?;

    let mut plain = lexeme.clone();
    plain.attributes.remove(RootChange);
    let plain = Arc::new(plain);

    Ok([lexeme.lemma_root.as_str(), changed]
        .into_iter()
        .map(|seq| {
            let attrs = phonetic::calculate(seq, plain.attributes);
            Root::new(seq, Arc::clone(&plain), attrs, PhoneticExpectations::EMPTY)
        })
        .collect())
}

fn modified_roots(lexeme: &Arc<Lexeme>) -> Result<Vec<Root>, LexiconError> {
    use PhoneticAttribute::{LastLetterVoicelessStop, LastVowelBack, LastVowelFrontal};
    use PhoneticExpectation::{ConsonantStart, VowelStart};

    let attributes = lexeme.attributes;
    let lemma_root = lexeme.lemma_root.as_str();
    let invalid = |reason: &str| LexiconError::InvalidRootModification {
        lemma: lexeme.lemma.clone(),
        reason: reason.to_string(),
    };

    let mut modified: Vec<char> = lemma_root.chars().collect();
    let mut original_attrs = phonetic::calculate(lemma_root, LexemeAttributes::EMPTY);
    let mut modified_attrs = original_attrs;
    let mut original_exp = PhoneticExpectations::EMPTY;
    let mut modified_exp = PhoneticExpectations::EMPTY;

    if attributes.contains(Voicing) || attributes.contains(VoicingOpt) {
        let last = modified.last_mut().ok_or_else(|| invalid("empty root"))?;
        let voiced = if lemma_root.ends_with("nk") {
            Some('g')
        } else {
            alphabet::voice(*last)
        };
        *last = voiced.ok_or_else(|| invalid("last letter cannot be voiced"))?;
        modified_attrs.remove(LastLetterVoicelessStop);
        if !attributes.contains(VoicingOpt) {
            original_exp.insert(ConsonantStart);
        }
        modified_exp.insert(VowelStart);
    }

    if attributes.contains(Doubling) {
        let last = *modified.last().ok_or_else(|| invalid("empty root"))?;
        modified.push(last);
        original_exp.insert(ConsonantStart);
        modified_exp.insert(VowelStart);
    }

    if attributes.contains(LastVowelDrop) {
        if modified.len() < 2 {
            return Err(invalid("root too short to drop a vowel"));
        }
        modified.remove(modified.len() - 2);
        if lexeme.primary_pos != PrimaryPos::Verb {
            original_exp.insert(ConsonantStart);
        }
        modified_exp.insert(VowelStart);
    }

    if attributes.contains(InverseHarmony) {
        for attrs in [&mut original_attrs, &mut modified_attrs] {
            attrs.insert(LastVowelFrontal);
            attrs.remove(LastVowelBack);
        }
    }

    if attributes.contains(ProgressiveVowelDrop) {
        modified.pop();
        let seq: String = modified.iter().collect();
        if sequence::has_vowel(&seq) {
            modified_attrs = phonetic::calculate(&seq, LexemeAttributes::EMPTY);
        }
        modified_exp.insert(VowelStart);
    }

    let original = Root::new(lemma_root, Arc::clone(lexeme), original_attrs, original_exp);
    let modified = Root::new(
        modified.into_iter().collect::<String>(),
        Arc::clone(lexeme),
        modified_attrs,
        modified_exp,
    );
    if original == modified {
        Ok(vec![original])
    } else {
        Ok(vec![original, modified])
    }
}

/// Copy of `root` with `â`, `î` and `û` written plainly, or `None` when
/// the root has none of them.
pub fn without_circumflexes(root: &Root) -> Option<Root> {
    if !root.sequence.contains(['â', 'î', 'û']) {
        return None;
    }
    let plain: String = root
        .sequence
        .chars()
        .map(|c| match c {
            'â' => 'a',
            'î' => 'i',
            'û' => 'u',
            c => c,
        })
        .collect();
    Some(Root {
        sequence: plain,
        ..root.clone()
    })
}
