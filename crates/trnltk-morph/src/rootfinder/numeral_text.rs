// Turkish numeral text for digit sequences
//
// Converts `1.234,5` style numbers (`.` groups thousands, `,` separates
// the fraction) to words: `bin iki yüz otuz dört virgül beş`. Root finders
// use the text for the phonetic attributes of digit roots, since `3'e`
// harmonizes with `üç`, not with `3`.

const ONES: [&str; 10] = ["sıfır", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz"];

const TENS: [&str; 10] = ["", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan"];

const THOUSAND_POWERS: [&str; 22] = [
    "",
    "bin",
    "milyon",
    "milyar",
    "trilyon",
    "katrilyon",
    "kentilyon",
    "seksilyon",
    "septilyon",
    "oktilyon",
    "nonilyon",
    "desilyon",
    "undesilyon",
    "dodesilyon",
    "tredesilyon",
    "katordesilyon",
    "kendesilyon",
    "seksdesilyon",
    "septendesilyon",
    "oktodesilyon",
    "novemdesilyon",
    "vigintilyon",
];

/// Longest natural number with a name, in digits.
const MAX_DIGITS: usize = THOUSAND_POWERS.len() * 3;

/// Words for `digits`. Returns `None` when `digits` is not a number in
/// Turkish notation or is too large to name.
pub fn convert(digits: &str) -> Option<String> {
    let digits: String = digits.chars().filter(|&c| c != '.').collect();
    let (sign, unsigned) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.strip_prefix('+').unwrap_or(&digits)),
    };
    let (integer, fraction) = match unsigned.split_once(',') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || fraction.is_some_and(|f| !all_digits(f)) {
        return None;
    }

    let mut words = with_leading_zeros(integer, natural(integer)?);
    let negative = sign && integer.bytes().any(|b| b != b'0');
    if negative {
        words = format!("eksi {words}");
    }
    match fraction {
        Some(f) => Some(format!("{words} virgül {}", with_leading_zeros(f, natural(f)?))),
        None => Some(words),
    }
}

fn natural(digits: &str) -> Option<String> {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(ONES[0].to_string());
    }
    if significant.len() > MAX_DIGITS {
        return None;
    }

    // Groups of three digits, most significant first.
    let head = significant.len() % 3;
    let mut groups = Vec::new();
    if head > 0 {
        groups.push(group_value(&significant.as_bytes()[..head]));
    }
    groups.extend(significant.as_bytes()[head..].chunks(3).map(group_value));

    let top = groups.len() - 1;
    let mut parts = Vec::new();
    for (i, &group) in groups.iter().enumerate() {
        let power = top - i;
        match (group, power) {
            (0, _) => {}
            (g, 0) => parts.push(below_thousand(g)),
            (1, 1) => parts.push(THOUSAND_POWERS[1].to_string()),
            (g, p) => parts.push(format!("{} {}", below_thousand(g), THOUSAND_POWERS[p])),
        }
    }
    Some(parts.join(" "))
}

fn group_value(digits: &[u8]) -> u16 {
    digits.iter().fold(0u16, |n, b| n * 10 + u16::from(b - b'0'))
}

fn below_thousand(n: u16) -> String {
    let n = usize::from(n);
    match n {
        0..=9 => ONES[n].to_string(),
        10..=99 if n % 10 == 0 => TENS[n / 10].to_string(),
        10..=99 => format!("{} {}", TENS[n / 10], ONES[n % 10]),
        _ => {
            let mut parts = Vec::new();
            if n / 100 > 1 {
                parts.push(ONES[n / 100].to_string());
            }
            parts.push("yüz".to_string());
            if n % 100 > 0 {
                parts.push(below_thousand((n % 100) as u16));
            }
            parts.join(" ")
        }
    }
}

// `007` is read digit by digit up to the first significant one.
fn with_leading_zeros(digits: &str, words: String) -> String {
    let zeros = digits.len() - 1 - digits[..digits.len() - 1].trim_start_matches('0').len();
    let mut out = String::new();
    for _ in 0..zeros {
        out.push_str("sıfır ");
    }
    out.push_str(&words);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        assert_eq!(convert("0").as_deref(), Some("sıfır"));
        assert_eq!(convert("7").as_deref(), Some("yedi"));
        assert_eq!(convert("40").as_deref(), Some("kırk"));
        assert_eq!(convert("21").as_deref(), Some("yirmi bir"));
        assert_eq!(convert("100").as_deref(), Some("yüz"));
        assert_eq!(convert("105").as_deref(), Some("yüz beş"));
        assert_eq!(convert("342").as_deref(), Some("üç yüz kırk iki"));
    }

    #[test]
    fn thousand_groups() {
        assert_eq!(convert("1000").as_deref(), Some("bin"));
        assert_eq!(convert("1.001").as_deref(), Some("bin bir"));
        assert_eq!(convert("2000").as_deref(), Some("iki bin"));
        assert_eq!(convert("1.000.000").as_deref(), Some("bir milyon"));
        assert_eq!(convert("12.000.345").as_deref(), Some("on iki milyon üç yüz kırk beş"));
    }

    #[test]
    fn signs_fractions_and_leading_zeros() {
        assert_eq!(convert("-5").as_deref(), Some("eksi beş"));
        assert_eq!(convert("+5").as_deref(), Some("beş"));
        assert_eq!(convert("3,14").as_deref(), Some("üç virgül on dört"));
        assert_eq!(convert("3,05").as_deref(), Some("üç virgül sıfır beş"));
        assert_eq!(convert("007").as_deref(), Some("sıfır sıfır yedi"));
        assert_eq!(convert("00").as_deref(), Some("sıfır sıfır"));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(convert(""), None);
        assert_eq!(convert("12a"), None);
        assert_eq!(convert("1,"), None);
        assert_eq!(convert(&"9".repeat(67)), None);
    }
}
