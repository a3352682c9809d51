//! Rule-based morphological analyzer for Turkish.
//!
//! Given a surface such as `kitaba`, the analyzer finds every way to split
//! it into a root and a chain of suffixes allowed by Turkish morphotactics
//! (`kitap+Noun+A3sg+Pnon+Dat`). Suffixes are arranged in a graph of
//! states; each suffix has one or more forms whose letters change with the
//! phonetics of the surface they attach to. The graph is expanded once into
//! a form graph of concrete realizations, after which parsing is a
//! depth-first walk comparing prefixes.
//!
//! # Modules
//!
//! - [`phonetics`] -- Suffix form sequences and their application to surfaces
//! - [`graph`] -- Suffix graph, its feature modules and suffix conditions
//! - [`formgraph`] -- Expansion of the suffix graph into concrete form edges
//! - [`container`] -- Morpheme containers (one analysis in progress)
//! - [`lexicon`] -- Dictionary loading, attribute inference, root generation
//! - [`rootfinder`] -- Root finder strategies and the finder chain
//! - [`parser`] -- The contextless parser and predefined paths
//! - [`cache`] -- Parse caches and the caching parser
//! - [`format`] -- String notations for analyses
//! - [`handle`] -- Analyzer builder wiring everything together

pub mod cache;
pub mod container;
pub mod format;
pub mod formgraph;
pub mod graph;
pub mod handle;
pub mod lexicon;
pub mod parser;
pub mod phonetics;
pub mod rootfinder;

pub use cache::{CachingParser, LruCache, OfflineCache, ParseCache, TwoLevelCache};
pub use container::MorphemeContainer;
pub use format::Notation;
pub use handle::{Analyzer, AnalyzerBuilder, AnalyzerError, ChainOptions};
pub use parser::{ContextlessParser, MorphologicParser};
