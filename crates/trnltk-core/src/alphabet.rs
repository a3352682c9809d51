// Turkish alphabet: letter classes, case mapping and consonant voicing
//
// Every character the analyzer sees is classified here. Letters carry the
// vowel / frontal / rounded / voiceless / continuant flags that drive vowel
// harmony and consonant assimilation. Characters outside the alphabet
// (punctuation, digits, anything else) classify as plain, voiced consonants.

/// Phonological classification of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurkishLetter {
    /// The lower-case character this letter stands for.
    pub ch: char,
    vowel: bool,
    frontal: bool,
    rounded: bool,
    voiceless: bool,
    continuant: bool,
    in_alphabet: bool,
}

impl TurkishLetter {
    const fn new(ch: char) -> Self {
        Self {
            ch,
            vowel: false,
            frontal: false,
            rounded: false,
            voiceless: false,
            continuant: false,
            in_alphabet: true,
        }
    }

    const fn vowel(mut self) -> Self {
        self.vowel = true;
        self
    }

    const fn frontal(mut self) -> Self {
        self.frontal = true;
        self
    }

    const fn rounded(mut self) -> Self {
        self.rounded = true;
        self
    }

    const fn voiceless(mut self) -> Self {
        self.voiceless = true;
        self
    }

    const fn continuant(mut self) -> Self {
        self.continuant = true;
        self
    }

    const fn foreign(ch: char) -> Self {
        let mut letter = Self::new(ch);
        letter.in_alphabet = false;
        letter
    }

    pub fn is_vowel(&self) -> bool {
        self.vowel
    }

    pub fn is_frontal(&self) -> bool {
        self.frontal
    }

    pub fn is_rounded(&self) -> bool {
        self.rounded
    }

    pub fn is_voiceless(&self) -> bool {
        self.voiceless
    }

    pub fn is_continuant(&self) -> bool {
        self.continuant
    }

    /// A consonant that is not continuant (b c ç d g k p t and friends).
    pub fn is_stop_consonant(&self) -> bool {
        !self.vowel && !self.continuant
    }

    /// Whether the character belongs to the Turkish alphabet proper.
    pub fn is_alphabetic(&self) -> bool {
        self.in_alphabet
    }
}

/// Classify a character. Upper-case letters map to their lower-case letter.
pub fn letter(c: char) -> TurkishLetter {
    let l = TurkishLetter::new;
    match to_lower(c) {
        'a' => l('a').vowel(),
        'â' => l('â').vowel(),
        'b' => l('b'),
        'c' => l('c'),
        'ç' => l('ç').voiceless(),
        'd' => l('d'),
        'e' => l('e').vowel().frontal(),
        'f' => l('f').continuant().voiceless(),
        'g' => l('g'),
        'ğ' => l('ğ').continuant(),
        'h' => l('h').continuant().voiceless(),
        'ı' => l('ı').vowel(),
        'i' => l('i').vowel().frontal(),
        'î' => l('î').vowel().frontal(),
        'j' => l('j').continuant(),
        'k' => l('k').voiceless(),
        'l' => l('l').continuant(),
        'm' => l('m').continuant(),
        'n' => l('n').continuant(),
        'o' => l('o').vowel().rounded(),
        'ö' => l('ö').vowel().frontal().rounded(),
        'p' => l('p').voiceless(),
        'q' => l('q'),
        'r' => l('r').continuant(),
        's' => l('s').continuant().voiceless(),
        'ş' => l('ş').continuant().voiceless(),
        't' => l('t').voiceless(),
        'u' => l('u').vowel().rounded(),
        'ü' => l('ü').vowel().frontal().rounded(),
        'û' => l('û').vowel().frontal().rounded(),
        'v' => l('v').continuant(),
        'w' => l('w'),
        'x' => l('x'),
        'y' => l('y').continuant(),
        'z' => l('z').continuant(),
        other => TurkishLetter::foreign(other),
    }
}

/// Shorthand for `letter(c).is_vowel()`.
pub fn is_vowel(c: char) -> bool {
    letter(c).is_vowel()
}

/// Turkish-aware lower-casing of one character (`I` -> `ı`, `İ` -> `i`).
pub fn to_lower(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        c if c.is_ascii() => c.to_ascii_lowercase(),
        c => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Turkish-aware lower-casing of a string.
pub fn lowercase(s: &str) -> String {
    s.chars().map(to_lower).collect()
}

/// Whether every cased character in `s` is upper case and at least one is.
pub fn is_all_upper_case(s: &str) -> bool {
    let mut seen = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            seen = true;
        }
    }
    seen
}

/// Number of vowels in `s`.
pub fn vowel_count(s: &str) -> usize {
    s.chars().filter(|&c| is_vowel(c)).count()
}

// ---------------------------------------------------------------------------
// Voicing
// ---------------------------------------------------------------------------

/// Voiced counterpart of a voiceless stop: p->b, ç->c, t->d, k->ğ, g->ğ.
pub fn voice(c: char) -> Option<char> {
    match to_lower(c) {
        'p' => Some('b'),
        'ç' => Some('c'),
        't' => Some('d'),
        'k' => Some('ğ'),
        'g' => Some('ğ'),
        _ => None,
    }
}

/// Devoiced counterpart of a voiced stop: b->p, c->ç, d->t, g->k, ğ->k.
pub fn devoice(c: char) -> Option<char> {
    match to_lower(c) {
        'b' => Some('p'),
        'c' => Some('ç'),
        'd' => Some('t'),
        'g' => Some('k'),
        'ğ' => Some('k'),
        _ => None,
    }
}

/// Letters that could have been voiced into `c`.
pub fn inverse_voicings(c: char) -> &'static [char] {
    match to_lower(c) {
        'b' => &['p'],
        'c' => &['ç'],
        'd' => &['t'],
        'g' => &['k'],
        'ğ' => &['g', 'k'],
        _ => &[],
    }
}

/// Whether [`voice`] has a mapping for `c`.
pub fn is_voicable(c: char) -> bool {
    voice(c).is_some()
}

/// Whether [`devoice`] has a mapping for `c`.
pub fn is_devoicable(c: char) -> bool {
    devoice(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_carry_harmony_flags() {
        assert!(letter('a').is_vowel());
        assert!(!letter('a').is_frontal());
        assert!(letter('ö').is_frontal());
        assert!(letter('ö').is_rounded());
        assert!(!letter('ı').is_rounded());
        assert!(letter('İ').is_frontal());
    }

    #[test]
    fn stops_and_continuants() {
        assert!(letter('k').is_stop_consonant());
        assert!(letter('k').is_voiceless());
        assert!(!letter('s').is_stop_consonant());
        assert!(letter('s').is_voiceless());
        assert!(!letter('a').is_stop_consonant());
    }

    #[test]
    fn dotted_and_dotless_i_lowercase() {
        assert_eq!(to_lower('I'), 'ı');
        assert_eq!(to_lower('İ'), 'i');
        assert_eq!(lowercase("IŞIK"), "ışık");
        assert_eq!(lowercase("İstanbul"), "istanbul");
    }

    #[test]
    fn voicing_maps() {
        assert_eq!(voice('p'), Some('b'));
        assert_eq!(voice('k'), Some('ğ'));
        assert_eq!(voice('b'), None);
        assert_eq!(devoice('d'), Some('t'));
        assert_eq!(devoice('ğ'), Some('k'));
        assert_eq!(inverse_voicings('ğ'), &['g', 'k']);
        assert!(inverse_voicings('t').is_empty());
    }

    #[test]
    fn non_letters_are_plain_consonants() {
        let apostrophe = letter('\'');
        assert!(!apostrophe.is_vowel());
        assert!(!apostrophe.is_voiceless());
        assert!(!apostrophe.is_alphabetic());
        assert!(!letter('7').is_alphabetic());
    }

    #[test]
    fn upper_case_detection() {
        assert!(is_all_upper_case("TBMM"));
        assert!(!is_all_upper_case("Ankara"));
        assert!(!is_all_upper_case("123"));
    }
}
