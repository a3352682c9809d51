// Lexicon loader
//
// Reads the line-oriented master dictionary into lexemes and expands each
// lexeme into the roots a surface may start with. A line is a lemma,
// optionally followed by bracketed metadata:
//
//     kitap
//     ben [P:Pron,Pers; A:RootChange]
//     gitmek [A:Voicing, Aorist_A]
//     akıl [A:LastVowelDrop; R:akıl; S:ignored]
//
// `P:` gives the primary and optional secondary part of speech, `A:` the
// lexeme attributes, `R:` the lemma root. `S:` is accepted and ignored.
// Blank lines and lines starting with `#` are skipped. Attributes the line
// leaves out are inferred from the lemma root.

mod inference;
mod roots;

pub use inference::infer_attributes;
pub use roots::{generate_roots, without_circumflexes};

use std::fs;
use std::path::Path;
use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use trnltk_core::{CoreError, Lexeme, LexemeAttribute, LexemeAttributes, PrimaryPos, Root, SecondaryPos};

/// Error type for dictionary loading and root generation.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("cannot read dictionary {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {reason}: '{text}'")]
    Malformed { line: usize, text: String, reason: String },
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("cannot modify root of '{lemma}': {reason}")]
    InvalidRootModification { lemma: String, reason: String },
}

// ---------------------------------------------------------------------------
// Dictionary lines
// ---------------------------------------------------------------------------

/// Parse dictionary text into lexemes. Duplicate lines yield one lexeme.
pub fn parse_lexemes(text: &str) -> Result<Vec<Arc<Lexeme>>, LexiconError> {
    let mut seen = HashSet::new();
    let mut lexemes = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lexeme = parse_line(line).map_err(|reason| LexiconError::Malformed {
            line: i + 1,
            text: line.to_string(),
            reason,
        })??;
        if seen.insert(lexeme.clone()) {
            lexemes.push(Arc::new(lexeme));
        }
    }
    log::debug!("parsed {} lexemes", lexemes.len());
    Ok(lexemes)
}

/// Read and parse a dictionary file.
pub fn load_lexemes(path: impl AsRef<Path>) -> Result<Vec<Arc<Lexeme>>, LexiconError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let lexemes = parse_lexemes(&text)?;
    log::info!("loaded {} lexemes from {}", lexemes.len(), path.display());
    Ok(lexemes)
}

// The outer error is a syntax problem, the inner one an unknown name.
fn parse_line(line: &str) -> Result<Result<Lexeme, LexiconError>, String> {
    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
    let (lemma, meta) = match collapsed.split_once(' ') {
        Some((lemma, meta)) => {
            let inner = meta
                .strip_prefix('[')
                .and_then(|m| m.strip_suffix(']'))
                .ok_or_else(|| "metadata must be enclosed in brackets".to_string())?;
            (lemma.to_string(), Some(inner.to_string()))
        }
        None => (collapsed.clone(), None),
    };

    let mut root = lemma.clone();
    let mut primary: Option<&str> = None;
    let mut secondary: Option<&str> = None;
    let mut attributes: Vec<&str> = Vec::new();

    let meta = meta.unwrap_or_default();
    for part in meta.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        if let Some(pos) = part.strip_prefix("P:") {
            let items: Vec<&str> = pos.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
            match items[..] {
                [p] => primary = Some(p),
                [p, s] => {
                    primary = Some(p);
                    secondary = Some(s);
                }
                _ => return Err(format!("bad part of speech '{pos}'")),
            }
        } else if let Some(attrs) = part.strip_prefix("A:") {
            attributes = attrs.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
        } else if let Some(r) = part.strip_prefix("R:") {
            root = r.trim().to_string();
        } else if !part.starts_with("S:") {
            return Err(format!("unknown metadata '{part}'"));
        }
    }
    if root.is_empty() {
        return Err("empty root".to_string());
    }

    Ok(build_lexeme(lemma, root, primary, secondary, &attributes))
}

fn build_lexeme(
    lemma: String,
    root: String,
    primary: Option<&str>,
    secondary: Option<&str>,
    attributes: &[&str],
) -> Result<Lexeme, LexiconError> {
    let secondary = secondary.map(str::parse::<SecondaryPos>).transpose()?;
    let mut attrs = LexemeAttributes::EMPTY;
    for name in attributes {
        attrs.insert(name.parse::<LexemeAttribute>()?);
    }

    let (primary, lemma_root) = match primary {
        Some(p) => (p.parse::<PrimaryPos>()?, root),
        None if root.ends_with("mek") || root.ends_with("mak") => {
            let lemma_root = trnltk_core::sequence::drop_last(&root, 3).to_string();
            (PrimaryPos::Verb, lemma_root)
        }
        None => (PrimaryPos::Noun, root),
    };

    let attrs = infer_attributes(&lemma_root, primary, attrs);
    Ok(Lexeme::new(lemma, lemma_root, primary, secondary, attrs))
}

// ---------------------------------------------------------------------------
// Root map
// ---------------------------------------------------------------------------

/// Roots indexed by their sequence.
#[derive(Debug, Clone, Default)]
pub struct RootMap {
    roots: HashMap<String, Vec<Arc<Root>>>,
    count: usize,
}

impl RootMap {
    /// Generate the roots of every lexeme. Roots written with circumflexed
    /// vowels (`kâr`) are also indexed without them (`kar`).
    pub fn from_lexemes(lexemes: &[Arc<Lexeme>]) -> Result<Self, LexiconError> {
        let mut map = Self::default();
        for lexeme in lexemes {
            for root in generate_roots(lexeme)? {
                let plain = without_circumflexes(&root);
                map.insert(Arc::new(root));
                if let Some(plain) = plain {
                    map.insert(Arc::new(plain));
                }
            }
        }
        log::debug!("{} roots for {} lexemes", map.count, lexemes.len());
        Ok(map)
    }

    fn insert(&mut self, root: Arc<Root>) {
        let bucket = self.roots.entry(root.sequence.clone()).or_default();
        if !bucket.contains(&root) {
            bucket.push(root);
            self.count += 1;
        }
    }

    /// Roots whose sequence is exactly `sequence`.
    pub fn get(&self, sequence: &str) -> &[Arc<Root>] {
        self.roots.get(sequence).map_or(&[], Vec::as_slice)
    }

    /// Number of roots.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Root>> {
        self.roots.values().flatten()
    }
}
