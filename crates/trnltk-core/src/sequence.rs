// Character-indexed helpers over letter sequences
//
// Surfaces are plain `str`s. The analyzer indexes them by character, never
// by byte, since most Turkish letters outside ASCII take two bytes.

use crate::alphabet;

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn char_at(s: &str, index: usize) -> Option<char> {
    s.chars().nth(index)
}

pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

pub fn first_vowel(s: &str) -> Option<char> {
    s.chars().find(|&c| alphabet::is_vowel(c))
}

pub fn last_vowel(s: &str) -> Option<char> {
    s.chars().rev().find(|&c| alphabet::is_vowel(c))
}

pub fn has_vowel(s: &str) -> bool {
    first_vowel(s).is_some()
}

/// Byte offset of the character at `index`, or `s.len()` past the end.
pub fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(i, _)| i)
}

/// Characters `start..end` of `s`, clamped to its length.
pub fn substring(s: &str, start: usize, end: usize) -> &str {
    let from = byte_offset(s, start);
    let to = byte_offset(s, end.max(start));
    &s[from..to]
}

/// The first `n` characters of `s`.
pub fn prefix(s: &str, n: usize) -> &str {
    &s[..byte_offset(s, n)]
}

/// Everything after the first `n` characters of `s`.
pub fn suffix_from(s: &str, n: usize) -> &str {
    &s[byte_offset(s, n)..]
}

/// `s` without its last `n` characters.
pub fn drop_last(s: &str, n: usize) -> &str {
    let len = char_len(s);
    prefix(s, len.saturating_sub(n))
}

/// Replace the last letter with its voiced counterpart. Sequences whose
/// last letter has no voiced form are returned unchanged.
pub fn voice_last_letter(s: &str) -> String {
    match last_char(s).and_then(alphabet::voice) {
        Some(voiced) => {
            let mut out = drop_last(s, 1).to_string();
            out.push(voiced);
            out
        }
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_indexing_handles_multibyte_letters() {
        let s = "ağaç";
        assert_eq!(char_len(s), 4);
        assert_eq!(char_at(s, 1), Some('ğ'));
        assert_eq!(last_char(s), Some('ç'));
        assert_eq!(prefix(s, 2), "ağ");
        assert_eq!(suffix_from(s, 2), "aç");
        assert_eq!(substring(s, 1, 3), "ğa");
        assert_eq!(drop_last(s, 1), "ağa");
        assert_eq!(prefix(s, 10), s);
        assert_eq!(substring(s, 3, 2), "");
    }

    #[test]
    fn vowel_lookup() {
        assert_eq!(first_vowel("kitap"), Some('i'));
        assert_eq!(last_vowel("kitap"), Some('a'));
        assert!(!has_vowel("tbmm"));
    }

    #[test]
    fn voicing_of_last_letter() {
        assert_eq!(voice_last_letter("kitap"), "kitab");
        assert_eq!(voice_last_letter("ağaç"), "ağac");
        assert_eq!(voice_last_letter("ev"), "ev");
        assert_eq!(voice_last_letter(""), "");
    }
}
