//! Golden tests: parse known surfaces with a dictionary and compare the
//! formatted analyses against tests/data/golden.json.
//!
//! These tests require a master dictionary. Set TRNLTK_DICT_PATH to the
//! directory containing master-dictionary.dict (or to the file itself), or
//! keep the sample at data/master-dictionary.dict.
//!
//! Run: TRNLTK_DICT_PATH=/path/to/dict cargo test -p trnltk-morph --test golden

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use serde::Deserialize;
use trnltk_morph::cache::{LruCacheOptions, TwoLevelCacheOptions};
use trnltk_morph::{
    Analyzer, AnalyzerBuilder, CachingParser, LruCache, MorphologicParser, Notation, ParseCache, TwoLevelCache,
};

// ---------------------------------------------------------------------------
// Helper: locate dictionary and golden data
// ---------------------------------------------------------------------------

const DICT_FILE: &str = "master-dictionary.dict";

fn find_dictionary() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("TRNLTK_DICT_PATH") {
        let path = PathBuf::from(&dir).join(DICT_FILE);
        if path.exists() {
            return Some(path);
        }
        // The env var may point at the file itself
        let path = PathBuf::from(&dir);
        if path.is_file() {
            return Some(path);
        }
    }

    let fallback = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(DICT_FILE);
    if fallback.exists() {
        return Some(fallback);
    }

    None
}

#[derive(Debug, Deserialize)]
struct Golden {
    /// Surface to analyses that must all be present.
    analyses: BTreeMap<String, Vec<String>>,
    /// Surface to a prefix at least one analysis starts with.
    prefixes: BTreeMap<String, String>,
    /// Surfaces with no analysis at all.
    unparsable: Vec<String>,
}

fn load_golden() -> Golden {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/golden.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

/// Build an analyzer or skip the test if no dictionary is found.
fn create_analyzer() -> Option<Analyzer> {
    let dict_path = match find_dictionary() {
        Some(p) => p,
        None => {
            eprintln!("SKIP: {DICT_FILE} not found. Set TRNLTK_DICT_PATH or place it at data/{DICT_FILE}");
            return None;
        }
    };

    let analyzer = AnalyzerBuilder::new()
        .build_from_file(&dict_path)
        .unwrap_or_else(|e| panic!("failed to build analyzer from {}: {}", dict_path.display(), e));

    Some(analyzer)
}

// ---------------------------------------------------------------------------
// Analyses
// ---------------------------------------------------------------------------

#[test]
fn golden_analyses_are_present() {
    let Some(analyzer) = create_analyzer() else { return };
    let golden = load_golden();

    let mut failures = Vec::new();
    for (surface, expected) in &golden.analyses {
        let actual = analyzer.analyze(surface, Notation::Plain);
        for analysis in expected {
            if !actual.contains(analysis) {
                failures.push(format!("{surface}: missing {analysis}, got {actual:?}"));
            }
        }
    }
    assert!(failures.is_empty(), "{} mismatches:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn golden_prefixes_match() {
    let Some(analyzer) = create_analyzer() else { return };
    let golden = load_golden();

    for (surface, prefix) in &golden.prefixes {
        let actual = analyzer.analyze(surface, Notation::Plain);
        assert!(
            actual.iter().any(|a| a.starts_with(prefix.as_str())),
            "{surface}: no analysis starts with {prefix}, got {actual:?}"
        );
    }
}

#[test]
fn golden_unparsable_surfaces() {
    let Some(analyzer) = create_analyzer() else { return };
    let golden = load_golden();

    for surface in &golden.unparsable {
        let actual = analyzer.analyze(surface, Notation::Plain);
        assert!(actual.is_empty(), "{surface}: expected no analysis, got {actual:?}");
    }
}

#[test]
fn every_result_covers_the_whole_surface() {
    let Some(analyzer) = create_analyzer() else { return };
    let golden = load_golden();

    for surface in golden.analyses.keys() {
        for container in analyzer.parse(surface) {
            assert_eq!(container.surface_so_far(), surface.as_str());
            assert!(container.remaining().is_empty(), "{surface}");
            let rebuilt: String = std::iter::once(container.root_surface())
                .chain(container.transitions().iter().map(|t| t.actual.as_str()))
                .collect();
            assert_eq!(&rebuilt, surface);
        }
    }
}

// ---------------------------------------------------------------------------
// Notations
// ---------------------------------------------------------------------------

#[test]
fn notations_agree_on_count() {
    let Some(analyzer) = create_analyzer() else { return };
    let golden = load_golden();

    for surface in golden.analyses.keys() {
        let plain = analyzer.analyze(surface, Notation::Plain);
        let forms = analyzer.analyze(surface, Notation::WithForms);
        let grouped = analyzer.analyze(surface, Notation::Grouped);
        assert_eq!(plain.len(), forms.len(), "{surface}");
        assert_eq!(plain.len(), grouped.len(), "{surface}");
    }
}

// ---------------------------------------------------------------------------
// Caching
// ---------------------------------------------------------------------------

fn surfaces(golden: &Golden) -> Vec<String> {
    golden
        .analyses
        .keys()
        .chain(golden.prefixes.keys())
        .chain(golden.unparsable.iter())
        .cloned()
        .collect()
}

fn render(analyzer: &Analyzer, results: Vec<Vec<trnltk_morph::MorphemeContainer>>) -> Vec<Vec<String>> {
    results
        .iter()
        .map(|containers| {
            let mut out: Vec<String> = containers
                .iter()
                .map(|c| Notation::Plain.render(c, analyzer.graph()))
                .collect();
            out.sort();
            out
        })
        .collect()
}

#[test]
fn cached_results_match_uncached() {
    let Some(analyzer) = create_analyzer() else { return };
    let inputs = surfaces(&load_golden());

    let uncached = render(&analyzer, analyzer.parser().parse_all(&inputs));

    let cache = Arc::new(LruCache::new(LruCacheOptions::default()));
    let caching = CachingParser::new(Arc::clone(&cache), Arc::clone(analyzer.parser()), true);
    let first = render(&analyzer, caching.parse_all(&inputs));
    let second = render(&analyzer, caching.parse_all(&inputs));

    assert_eq!(first, uncached);
    assert_eq!(second, uncached);
    assert_eq!(cache.len(), inputs.len());
}

#[test]
fn workers_share_a_cache() {
    let Some(analyzer) = create_analyzer() else { return };
    let inputs = surfaces(&load_golden());
    let expected = render(&analyzer, analyzer.parser().parse_all(&inputs));

    let shared = Arc::new(LruCache::new(LruCacheOptions {
        concurrency_level: 4,
        ..LruCacheOptions::default()
    }));
    thread::scope(|s| {
        for _ in 0..4 {
            let (analyzer, shared, inputs, expected) = (&analyzer, Arc::clone(&shared), &inputs, &expected);
            s.spawn(move || {
                let l1: Arc<dyn ParseCache> = shared;
                let cache = TwoLevelCache::new(TwoLevelCacheOptions { flush_threshold: 4 }, l1);
                let parser = CachingParser::new(cache, Arc::clone(analyzer.parser()), false);
                let results: Vec<_> = inputs.iter().map(|input| parser.parse(input)).collect();
                assert_eq!(&render(analyzer, results), expected);
            });
        }
    });
    assert_eq!(shared.len(), inputs.len());
}
