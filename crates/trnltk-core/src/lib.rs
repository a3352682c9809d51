//! Data model shared by the TRNLTK Turkish morphological analyzer.
//!
//! This crate has no knowledge of suffixes or parsing. It describes the
//! letters of the Turkish alphabet, the phonetic attributes of letter
//! sequences and the lexicon entries (lexemes and their realized roots)
//! that the analyzer in `trnltk-morph` works on.
//!
//! # Modules
//!
//! - [`alphabet`] -- Letter classes, Turkish case mapping, voicing maps
//! - [`sequence`] -- Character-indexed helpers over letter sequences
//! - [`phonetic`] -- Phonetic attributes, the validity table, attribute calculation
//! - [`lexicon`] -- Parts of speech, lexeme attributes, lexemes and roots

pub mod alphabet;
pub mod lexicon;
pub mod phonetic;
pub mod sequence;

pub use lexicon::{
    Lexeme, LexemeAttribute, LexemeAttributes, PrimaryPos, Root, SecondaryPos,
};
pub use phonetic::{
    PhoneticAttribute, PhoneticAttributes, PhoneticExpectation, PhoneticExpectations,
};

/// Error type for parsing lexicon vocabulary from strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("unknown primary part of speech: {0}")]
    UnknownPrimaryPos(String),
    #[error("unknown secondary part of speech: {0}")]
    UnknownSecondaryPos(String),
    #[error("unknown lexeme attribute: {0}")]
    UnknownLexemeAttribute(String),
}
